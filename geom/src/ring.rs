use std::fmt;

use anyhow::Result;
use geo::Area;
use serde::{Deserialize, Serialize};

use crate::{PolyLine, Polygon, Pt2D};

/// Maybe a misnomer, but like a PolyLine, but closed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    // first equals last
    pts: Vec<Pt2D>,
}

impl Ring {
    pub fn new(pts: Vec<Pt2D>) -> Result<Ring> {
        if pts.len() < 4 {
            bail!("Can't make a ring with {} points", pts.len());
        }
        if pts[0] != *pts.last().unwrap() {
            bail!("Can't make a ring with mismatching first/last points");
        }
        Ok(Ring { pts })
    }

    /// Appends the first point if the input doesn't already close.
    pub fn close(mut pts: Vec<Pt2D>) -> Result<Ring> {
        if let (Some(first), Some(last)) = (pts.first().cloned(), pts.last().cloned()) {
            if first != last {
                pts.push(first);
            }
        }
        Ring::new(pts)
    }

    pub fn points(&self) -> &Vec<Pt2D> {
        &self.pts
    }

    /// Positive when the points wind counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        self.to_geo().signed_area()
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// The closed polyline, including the repeated last point.
    pub fn to_polyline(&self) -> PolyLine {
        PolyLine::must_new(self.pts.clone())
    }

    pub fn into_polygon(self) -> Polygon {
        Polygon::from(self.to_geo())
    }

    fn to_geo(&self) -> geo::Polygon {
        let coords: Vec<geo::Coord> = self.pts.iter().map(|pt| geo::Coord::from(*pt)).collect();
        geo::Polygon::new(geo::LineString::from(coords), Vec::new())
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Ring::new(vec![")?;
        for pt in &self.pts {
            writeln!(f, "  Pt2D::new({}, {}),", pt.x(), pt.y())?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winding() {
        let ccw = Ring::close(vec![
            Pt2D::new(0.0, 0.0),
            Pt2D::new(2.0, 0.0),
            Pt2D::new(2.0, 2.0),
            Pt2D::new(0.0, 2.0),
        ])
        .unwrap();
        assert_eq!(ccw.points().len(), 5);
        assert!(ccw.is_counter_clockwise());
        assert!((ccw.signed_area() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn too_few_points() {
        assert!(Ring::close(vec![Pt2D::new(0.0, 0.0), Pt2D::new(1.0, 0.0)]).is_err());
        assert!(Ring::close(Vec::new()).is_err());
    }
}

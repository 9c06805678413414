use std::cmp::Ordering;
use std::fmt;

use anyhow::Result;
use geo::orient::{Direction, Orient};
use geo::{Area, BooleanOps, Buffer, Contains, InteriorPoint};
use serde::{Deserialize, Serialize};

use crate::{Distance, Pt2D, Ring};

/// A polygon, possibly with holes. This directly wraps a `geo::Polygon`.
#[derive(PartialEq, Serialize, Deserialize, Clone, Debug)]
pub struct Polygon {
    inner: geo::Polygon,
}

impl Polygon {
    /// Closes the ring if needed. Needs at least three points.
    pub fn new(pts: Vec<Pt2D>) -> Result<Polygon> {
        Ok(Ring::close(pts)?.into_polygon())
    }

    /// Untangles self-intersections by taking the union of the polygon with nothing. If that
    /// splits the polygon into pieces, the largest piece wins.
    pub fn repaired(&self) -> Result<Polygon> {
        let input = geo::MultiPolygon::new(vec![self.inner.clone()]);
        let cleaned = input.union(&geo::MultiPolygon::new(Vec::new()));
        largest(cleaned.0)
            .map(Polygon::from)
            .ok_or_else(|| anyhow!("polygon with {} points collapsed", self.num_points()))
    }

    /// Grow (or shrink, for negative distances) the polygon outwards. The result may have zero or
    /// many pieces.
    pub fn buffer(&self, distance: Distance) -> Vec<Polygon> {
        self.inner
            .buffer(distance.inner_meters())
            .0
            .into_iter()
            .map(Polygon::from)
            .collect()
    }

    /// Union all of the polygons together. Overlapping or touching input becomes one piece.
    pub fn union_all(mut list: Vec<Polygon>) -> Vec<Polygon> {
        let first = match list.pop() {
            Some(p) => p,
            None => return Vec::new(),
        };
        let mut result = geo::MultiPolygon::new(vec![first.inner]);
        for p in list {
            let other = geo::MultiPolygon::new(vec![p.inner]);
            result = result.union(&other);
        }
        result.0.into_iter().map(Polygon::from).collect()
    }

    /// The exterior winds counter-clockwise, any holes clockwise.
    pub fn oriented_ccw(&self) -> Polygon {
        Polygon::from(self.inner.orient(Direction::Default))
    }

    /// The outer boundary, closed.
    pub fn exterior(&self) -> Result<Ring> {
        Ring::new(self.inner.exterior().coords().map(|c| Pt2D::from(*c)).collect())
    }

    pub fn num_holes(&self) -> usize {
        self.inner.interiors().len()
    }

    /// A point guaranteed to be inside the polygon, if it has any area.
    pub fn representative_point(&self) -> Option<Pt2D> {
        self.inner.interior_point().map(Pt2D::from)
    }

    /// Does this polygon contain the point in its interior?
    pub fn contains_pt(&self, pt: Pt2D) -> bool {
        self.inner.contains(&geo::Point::from(pt))
    }

    pub fn area(&self) -> f64 {
        self.inner.unsigned_area()
    }

    fn num_points(&self) -> usize {
        self.inner.exterior().0.len()
    }
}

fn largest(polygons: Vec<geo::Polygon>) -> Option<geo::Polygon> {
    polygons.into_iter().max_by(|a, b| {
        a.unsigned_area()
            .partial_cmp(&b.unsigned_area())
            .unwrap_or(Ordering::Equal)
    })
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Polygon with {} points and {} holes",
            self.num_points(),
            self.num_holes()
        )?;
        for c in self.inner.exterior().coords() {
            writeln!(f, "  Pt2D::new({}, {}),", c.x, c.y)?;
        }
        Ok(())
    }
}

impl From<geo::Polygon> for Polygon {
    fn from(inner: geo::Polygon) -> Self {
        Polygon { inner }
    }
}

impl From<Polygon> for geo::Polygon {
    fn from(poly: Polygon) -> Self {
        poly.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> Polygon {
        Polygon::new(vec![
            Pt2D::new(x, y),
            Pt2D::new(x + size, y),
            Pt2D::new(x + size, y + size),
            Pt2D::new(x, y + size),
        ])
        .unwrap()
    }

    #[test]
    fn union_overlapping_and_disjoint() {
        let merged = Polygon::union_all(vec![square(0.0, 0.0, 2.0), square(1.0, 1.0, 2.0)]);
        assert_eq!(merged.len(), 1);
        assert!((merged[0].area() - 7.0).abs() < 1e-6);

        let apart = Polygon::union_all(vec![square(0.0, 0.0, 1.0), square(5.0, 5.0, 1.0)]);
        assert_eq!(apart.len(), 2);

        assert!(Polygon::union_all(Vec::new()).is_empty());
    }

    #[test]
    fn buffer_closes_small_gaps() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.02, 0.0, 1.0);
        assert_eq!(Polygon::union_all(vec![a.clone(), b.clone()]).len(), 2);

        let mut grown = a.buffer(Distance::meters(0.05));
        grown.extend(b.buffer(Distance::meters(0.05)));
        assert_eq!(Polygon::union_all(grown).len(), 1);
    }

    #[test]
    fn orientation() {
        let cw = Polygon::new(vec![
            Pt2D::new(0.0, 0.0),
            Pt2D::new(0.0, 1.0),
            Pt2D::new(1.0, 1.0),
            Pt2D::new(1.0, 0.0),
        ])
        .unwrap();
        assert!(!cw.exterior().unwrap().is_counter_clockwise());
        assert!(cw.oriented_ccw().exterior().unwrap().is_counter_clockwise());
    }

    #[test]
    fn representative_point_is_inside() {
        let p = square(3.0, 4.0, 2.0);
        let pt = p.representative_point().unwrap();
        assert!(p.contains_pt(pt));
        assert!(!p.contains_pt(Pt2D::new(0.0, 0.0)));
    }

    #[test]
    fn repair_keeps_simple_polygons() {
        let p = square(0.0, 0.0, 3.0);
        let fixed = p.repaired().unwrap();
        assert!((fixed.area() - 9.0).abs() < 1e-6);
    }
}

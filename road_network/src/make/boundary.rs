use geom::{Distance, Polygon};

use crate::{BuildError, Curb};

/// Merges the polygons, each grown by `tolerance` so that hairline gaps close, and keeps the
/// counter-clockwise outer ring of every resulting piece. Holes are dropped.
pub fn find_curb(polygons: Vec<Polygon>, tolerance: Distance) -> Result<Curb, BuildError> {
    let mut grown = Vec::new();
    for p in polygons {
        grown.extend(p.buffer(tolerance));
    }

    let mut lines = Vec::new();
    for piece in Polygon::union_all(grown) {
        let ring = piece
            .oriented_ccw()
            .exterior()
            .map_err(|err| BuildError::geometry("curb", err.to_string()))?;
        lines.push(ring.to_polyline());
    }
    Ok(Curb { lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use geom::Pt2D;

    fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Polygon {
        Polygon::new(vec![
            Pt2D::new(x1, y1),
            Pt2D::new(x1, y2),
            Pt2D::new(x2, y2),
            Pt2D::new(x2, y1),
        ])
        .unwrap()
    }

    #[test]
    fn touching_roads_merge() {
        let tolerance = Distance::meters(0.05);
        // The second road starts 2cm after the first ends; the third is far away
        let curb = find_curb(
            vec![
                rect(0.0, 0.0, 20.0, 8.0),
                rect(20.02, 0.0, 40.0, 8.0),
                rect(100.0, 0.0, 120.0, 8.0),
            ],
            tolerance,
        )
        .unwrap();
        assert_eq!(curb.lines.len(), 2);
        for line in &curb.lines {
            assert!(line.is_closed());
            let ring = geom::Ring::new(line.points().clone()).unwrap();
            assert!(ring.is_counter_clockwise());
        }
    }

    #[test]
    fn nothing_to_merge() {
        assert!(find_curb(Vec::new(), Distance::meters(0.05))
            .unwrap()
            .is_empty());
    }
}

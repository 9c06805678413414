use geom::{PolyLine, Polygon, Pt2D};
use netutil::{wraparound_get, Warn};
use raw_map::{RawMap, RawOutline};

use crate::{BuildError, ElementGeometry};

/// Derives the polygon, centerline, and edges of a lane, road block, or road segment.
///
/// The left edge walks the ring from the end of the entry edge to the start of the exit edge; the
/// right edge walks from the end of the exit edge back to the start of the entry edge, then gets
/// reversed so it also points in the direction of travel. Without both transversal edges, all
/// three lines become a short placeholder segment inside the polygon, with a warning.
pub fn polygonal_features(
    raw: &RawMap,
    uid: &str,
    outline: &RawOutline,
) -> Result<Warn<ElementGeometry>, BuildError> {
    let pts = outline_points(raw, uid, outline)?;
    if pts.len() < 3 {
        return Err(BuildError::geometry(
            uid,
            format!("ring only has {} points", pts.len()),
        ));
    }
    let polygon = Polygon::new(pts.clone())
        .and_then(|p| p.repaired())
        .map_err(|err| BuildError::geometry(uid, err.to_string()))?;

    let (from, to) = match (&outline.from_edge_line_token, &outline.to_edge_line_token) {
        (Some(from), Some(to)) => (from, to),
        _ => {
            let placeholder = placeholder_line(uid, &polygon)?;
            return Ok(Warn::warn(
                ElementGeometry {
                    polygon,
                    centerline: placeholder.clone(),
                    left_edge: placeholder.clone(),
                    right_edge: placeholder,
                },
                format!("{} has no entry/exit edges", uid),
            ));
        }
    };

    let ring = outline.open_ring();
    let highest = ring.len() - 1;
    let (from_start, from_end) =
        normalize_edge(edge_indices(raw, uid, ring, from)?, highest);
    let (to_start, to_end) = normalize_edge(edge_indices(raw, uid, ring, to)?, highest);

    let left_edge = make_line(uid, ring_arc(&pts, from_end, to_start))?;
    let right_edge = make_line(uid, ring_arc(&pts, to_end, from_start))?.reversed();
    Ok(Warn::ok(ElementGeometry {
        polygon,
        centerline: left_edge.clone(),
        left_edge,
        right_edge,
    }))
}

/// Resolves every node of the ring, in order.
pub fn outline_points(
    raw: &RawMap,
    uid: &str,
    outline: &RawOutline,
) -> Result<Vec<Pt2D>, BuildError> {
    outline
        .open_ring()
        .iter()
        .map(|token| {
            raw.get_node(token)
                .map(|node| node.pt())
                .ok_or_else(|| BuildError::missing(uid, format!("node {}", token)))
        })
        .collect()
}

/// Where the first and last node of a transversal line sit in the ring.
fn edge_indices(
    raw: &RawMap,
    uid: &str,
    ring: &[String],
    line_token: &str,
) -> Result<(usize, usize), BuildError> {
    let line = raw
        .get_line(line_token)
        .ok_or_else(|| BuildError::missing(uid, format!("line {}", line_token)))?;
    let (first, last) = match (line.node_tokens.first(), line.node_tokens.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(BuildError::geometry(
                uid,
                format!("line {} has no nodes", line_token),
            ));
        }
    };
    let find = |token: &String| {
        ring.iter().position(|t| t == token).ok_or_else(|| {
            BuildError::missing(uid, format!("node {} of line {} on its ring", token, line_token))
        })
    };
    Ok((find(first)?, find(last)?))
}

/// An edge touching both the first and last ring index straddles the wrap point, and runs from
/// the last index to the first. Any other edge is put in ascending order.
pub(crate) fn normalize_edge((start, end): (usize, usize), highest: usize) -> (usize, usize) {
    if start == 0 && end == highest {
        (highest, 0)
    } else if start == highest && end == 0 {
        (start, end)
    } else if start <= end {
        (start, end)
    } else {
        (end, start)
    }
}

/// The ring points from `first` to `last` inclusive, going forwards and wrapping around. Never
/// visits a point twice, so the result is empty when `last` sits right before `first`.
pub(crate) fn ring_arc(pts: &[Pt2D], first: usize, last: usize) -> Vec<Pt2D> {
    let stop = (last + 1) % pts.len();
    (first..first + pts.len())
        .take_while(|idx| idx % pts.len() != stop)
        .map(|idx| *wraparound_get(pts, idx as isize))
        .collect()
}

fn make_line(uid: &str, pts: Vec<Pt2D>) -> Result<PolyLine, BuildError> {
    PolyLine::new(pts).map_err(|err| BuildError::geometry(uid, err.to_string()))
}

fn placeholder_line(uid: &str, polygon: &Polygon) -> Result<PolyLine, BuildError> {
    let pt = polygon
        .representative_point()
        .ok_or_else(|| BuildError::geometry(uid, "polygon has no interior".to_string()))?;
    make_line(uid, vec![pt, pt.offset(0.5, 0.5)])
}

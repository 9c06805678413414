use std::collections::{BTreeMap, BTreeSet};

use raw_map::RawLane;

use crate::BuildError;

/// Identifies the divider between two lanes. Neighboring lanes may list the divider's nodes in
/// opposite orders, so the nodes are sorted.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DividerKey(Vec<String>);

impl DividerKey {
    /// A lane at the edge of its road block has no divider on that side.
    pub fn new(nodes: &[String]) -> Option<DividerKey> {
        if nodes.is_empty() {
            return None;
        }
        let mut nodes = nodes.to_vec();
        nodes.sort();
        Some(DividerKey(nodes))
    }
}

/// Orders all lanes of one road block from the rightmost to the leftmost, by matching each lane's
/// left divider to its neighbor's right divider. The first lane seeds the search for the rightmost
/// lane. Branches, cycles, and lanes not reachable from the chain make the order ambiguous.
pub fn order_lanes<'a>(block: &str, lanes: &[&'a RawLane]) -> Result<Vec<&'a RawLane>, BuildError> {
    if lanes.is_empty() {
        return Ok(Vec::new());
    }

    // Which lane has this divider on its left (or right) side
    let mut by_left: BTreeMap<DividerKey, usize> = BTreeMap::new();
    let mut by_right: BTreeMap<DividerKey, usize> = BTreeMap::new();
    for (idx, lane) in lanes.iter().enumerate() {
        if let Some(key) = DividerKey::new(&lane.left_lane_divider_nodes) {
            if let Some(other) = by_left.insert(key, idx) {
                return Err(branch(block, lanes[other], lane, "left"));
            }
        }
        if let Some(key) = DividerKey::new(&lane.right_lane_divider_nodes) {
            if let Some(other) = by_right.insert(key, idx) {
                return Err(branch(block, lanes[other], lane, "right"));
            }
        }
    }

    let right_neighbor = |idx: usize| {
        DividerKey::new(&lanes[idx].right_lane_divider_nodes).and_then(|key| by_left.get(&key).cloned())
    };
    let left_neighbor = |idx: usize| {
        DividerKey::new(&lanes[idx].left_lane_divider_nodes).and_then(|key| by_right.get(&key).cloned())
    };

    let rightmost = walk(block, lanes, 0, right_neighbor)?
        .pop()
        .unwrap_or(0);
    let order = walk(block, lanes, rightmost, left_neighbor)?;

    if order.len() != lanes.len() {
        let reached: BTreeSet<usize> = order.iter().cloned().collect();
        let stray: Vec<&str> = (0..lanes.len())
            .filter(|idx| !reached.contains(idx))
            .map(|idx| lanes[idx].token.as_str())
            .collect();
        return Err(BuildError::adjacency(
            block,
            format!(
                "the dividers only chain together {} of {} lanes; {} aren't reachable",
                order.len(),
                lanes.len(),
                stray.join(", ")
            ),
        ));
    }
    Ok(order.into_iter().map(|idx| lanes[idx]).collect())
}

/// Follows `next` from `start` until it runs out, returning every lane visited. Revisiting a lane
/// is a cycle, which can't take more than one step per lane to find.
fn walk<F: Fn(usize) -> Option<usize>>(
    block: &str,
    lanes: &[&RawLane],
    start: usize,
    next: F,
) -> Result<Vec<usize>, BuildError> {
    let mut visited = vec![start];
    let mut current = start;
    while let Some(idx) = next(current) {
        if visited.contains(&idx) || visited.len() == lanes.len() {
            return Err(BuildError::adjacency(
                block,
                format!(
                    "the dividers of lane {} lead back to lane {}",
                    lanes[current].token, lanes[idx].token
                ),
            ));
        }
        visited.push(idx);
        current = idx;
    }
    Ok(visited)
}

fn branch(block: &str, lane1: &RawLane, lane2: &RawLane, side: &str) -> BuildError {
    BuildError::adjacency(
        block,
        format!(
            "lanes {} and {} have the same divider on their {} side",
            lane1.token, lane2.token, side
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use raw_map::RawOutline;

    fn lane(token: &str, left: &[&str], right: &[&str]) -> RawLane {
        RawLane {
            token: token.to_string(),
            outline: RawOutline::default(),
            left_lane_divider_nodes: left.iter().map(|x| x.to_string()).collect(),
            right_lane_divider_nodes: right.iter().map(|x| x.to_string()).collect(),
            road_block_token: Some("block".to_string()),
        }
    }

    fn tokens(order: Vec<&RawLane>) -> Vec<&str> {
        order.into_iter().map(|l| l.token.as_str()).collect()
    }

    #[test]
    fn divider_keys_ignore_direction() {
        assert_eq!(
            DividerKey::new(&["b".to_string(), "a".to_string()]),
            DividerKey::new(&["a".to_string(), "b".to_string()])
        );
        assert_eq!(DividerKey::new(&[]), None);
    }

    #[test]
    fn three_lanes_seeded_from_the_middle() {
        // Left to right: c, b, a. The dividers list their nodes in different orders.
        let a = lane("a", &["n1", "n2"], &[]);
        let b = lane("b", &["n3", "n4"], &["n2", "n1"]);
        let c = lane("c", &[], &["n4", "n3"]);
        for input in [vec![&b, &a, &c], vec![&c, &b, &a], vec![&a, &c, &b]] {
            assert_eq!(tokens(order_lanes("block", &input).unwrap()), vec!["a", "b", "c"]);
        }
    }

    #[test]
    fn right_divider_points_at_the_lane_to_the_right() {
        // a's right divider is b's left divider, so b is to the right of a
        let a = lane("a", &[], &["n1", "n2"]);
        let b = lane("b", &["n1", "n2"], &["n3", "n4"]);
        let c = lane("c", &["n3", "n4"], &[]);
        assert_eq!(tokens(order_lanes("block", &[&a, &b, &c]).unwrap()), vec!["c", "b", "a"]);
    }

    #[test]
    fn single_lane() {
        let a = lane("a", &[], &[]);
        assert_eq!(tokens(order_lanes("block", &[&a]).unwrap()), vec!["a"]);
        assert!(order_lanes("block", &[]).unwrap().is_empty());
    }

    #[test]
    fn unmatched_outer_dividers_are_fine() {
        // The curb lane's right divider and the inner lane's left divider don't match anything
        // in this block.
        let a = lane("a", &["n1", "n2"], &["curb1", "curb2"]);
        let b = lane("b", &["median1", "median2"], &["n1", "n2"]);
        assert_eq!(tokens(order_lanes("block", &[&b, &a]).unwrap()), vec!["a", "b"]);
    }

    #[test]
    fn cycles_are_errors() {
        let a = lane("a", &["x"], &["y"]);
        let b = lane("b", &["y"], &["x"]);
        assert!(matches!(
            order_lanes("block", &[&a, &b]),
            Err(BuildError::AmbiguousAdjacency { .. })
        ));

        let loner = lane("loner", &["z"], &["z"]);
        assert!(matches!(
            order_lanes("block", &[&loner]),
            Err(BuildError::AmbiguousAdjacency { .. })
        ));
    }

    #[test]
    fn branches_are_errors() {
        let a = lane("a", &["n1"], &[]);
        let b = lane("b", &[], &["n1"]);
        let c = lane("c", &[], &["n1"]);
        assert_eq!(
            order_lanes("block", &[&a, &b, &c]).unwrap_err(),
            BuildError::AmbiguousAdjacency {
                block: "block".to_string(),
                reason: "lanes b and c have the same divider on their right side".to_string(),
            }
        );
    }

    #[test]
    fn disconnected_lanes_are_errors() {
        let a = lane("a", &["n1"], &[]);
        let b = lane("b", &[], &["n1"]);
        let island = lane("island", &[], &[]);
        match order_lanes("block", &[&a, &b, &island]) {
            Err(BuildError::AmbiguousAdjacency { block, reason }) => {
                assert_eq!(block, "block");
                assert!(reason.contains("island"));
            }
            other => panic!("expected AmbiguousAdjacency, got {:?}", other),
        }
    }
}

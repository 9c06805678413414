//! Builds small, well-formed raw maps by hand: straight roads running along the x axis and square
//! intersections. Tests and demos use this instead of real map data.
//!
//! A road's forward lanes sit below y = 0 and head towards +x; backward lanes sit above and head
//! towards -x. Every outline starts at the entry corner on the element's right side and continues
//! to the entry-left, exit-left, and exit-right corners, so the "from" edge is the first pair of
//! ring nodes and the "to" edge is the last pair.

use geom::Pt2D;

use crate::{RawLane, RawMap, RawOutline, RawRoadBlock, RawRoadSegment};

pub const LANE_WIDTH: f64 = 4.0;
pub const ROAD_LENGTH: f64 = 20.0;

pub struct SyntheticMap {
    map: RawMap,
}

/// Where the four corners of a lane, block, or segment lie, in grid units.
struct Corners {
    entry_x: usize,
    exit_x: usize,
    right_y: isize,
    left_y: isize,
}

impl SyntheticMap {
    pub fn new(name: &str) -> SyntheticMap {
        SyntheticMap {
            map: RawMap::blank(name),
        }
    }

    /// A two-way (or one-way, if either count is 0) road, starting at `x_offset`. The forward road
    /// block is added before the backward one.
    pub fn add_road(
        &mut self,
        segment: &str,
        x_offset: f64,
        forward_lanes: usize,
        backward_lanes: usize,
    ) -> &mut SyntheticMap {
        assert!(forward_lanes + backward_lanes > 0);
        let fwd = forward_lanes as isize;
        let back = backward_lanes as isize;

        let outline = self.outline(
            segment,
            segment,
            x_offset,
            Corners {
                entry_x: 0,
                exit_x: 1,
                right_y: -fwd,
                left_y: back,
            },
        );
        self.map.add_road_segment(RawRoadSegment {
            token: segment.to_string(),
            outline,
            is_intersection: false,
        });

        if forward_lanes > 0 {
            let block = format!("{}:fwd", segment);
            self.add_block(
                segment,
                &block,
                x_offset,
                Corners {
                    entry_x: 0,
                    exit_x: 1,
                    right_y: -fwd,
                    left_y: 0,
                },
            );
            for k in 0..fwd {
                let corners = Corners {
                    entry_x: 0,
                    exit_x: 1,
                    right_y: -(fwd - k),
                    left_y: -(fwd - k) + 1,
                };
                self.add_lane(
                    segment,
                    &block,
                    &format!("{}:{}", block, k),
                    x_offset,
                    corners,
                    k > 0,
                    k < fwd - 1,
                );
            }
        }

        if backward_lanes > 0 {
            let block = format!("{}:back", segment);
            self.add_block(
                segment,
                &block,
                x_offset,
                Corners {
                    entry_x: 1,
                    exit_x: 0,
                    right_y: back,
                    left_y: 0,
                },
            );
            for k in 0..back {
                let corners = Corners {
                    entry_x: 1,
                    exit_x: 0,
                    right_y: back - k,
                    left_y: back - k - 1,
                };
                self.add_lane(
                    segment,
                    &block,
                    &format!("{}:{}", block, k),
                    x_offset,
                    corners,
                    k > 0,
                    k < back - 1,
                );
            }
        }

        self
    }

    /// A rectangular junction, as long as a road and two lanes wide, with no road blocks.
    pub fn add_intersection(&mut self, segment: &str, x_offset: f64) -> &mut SyntheticMap {
        let outline = self.outline(
            segment,
            segment,
            x_offset,
            Corners {
                entry_x: 0,
                exit_x: 1,
                right_y: -1,
                left_y: 1,
            },
        );
        self.map.add_road_segment(RawRoadSegment {
            token: segment.to_string(),
            outline,
            is_intersection: true,
        });
        self
    }

    /// For tweaking records before building.
    pub fn raw_mut(&mut self) -> &mut RawMap {
        &mut self.map
    }

    pub fn build(self) -> RawMap {
        self.map
    }

    fn add_block(&mut self, segment: &str, block: &str, x_offset: f64, corners: Corners) {
        let outline = self.outline(segment, block, x_offset, corners);
        self.map.add_road_block(RawRoadBlock {
            token: block.to_string(),
            outline,
            road_segment_token: segment.to_string(),
        });
    }

    #[allow(clippy::too_many_arguments)]
    fn add_lane(
        &mut self,
        segment: &str,
        block: &str,
        lane: &str,
        x_offset: f64,
        corners: Corners,
        right_divider: bool,
        left_divider: bool,
    ) {
        let [entry_right, entry_left, exit_left, exit_right] =
            self.corner_nodes(segment, x_offset, &corners);
        let outline = self.outline(segment, lane, x_offset, corners);
        self.map.add_lane(RawLane {
            token: lane.to_string(),
            outline,
            left_lane_divider_nodes: if left_divider {
                vec![entry_left, exit_left]
            } else {
                Vec::new()
            },
            right_lane_divider_nodes: if right_divider {
                vec![entry_right, exit_right]
            } else {
                Vec::new()
            },
            road_block_token: Some(block.to_string()),
        });
    }

    fn outline(&mut self, segment: &str, owner: &str, x_offset: f64, corners: Corners) -> RawOutline {
        let [entry_right, entry_left, exit_left, exit_right] =
            self.corner_nodes(segment, x_offset, &corners);
        let from = format!("{}:from", owner);
        let to = format!("{}:to", owner);
        self.map
            .add_line(&from, vec![entry_right.clone(), entry_left.clone()]);
        self.map
            .add_line(&to, vec![exit_left.clone(), exit_right.clone()]);
        RawOutline {
            exterior_node_tokens: vec![entry_right, entry_left, exit_left, exit_right],
            from_edge_line_token: Some(from),
            to_edge_line_token: Some(to),
        }
    }

    // Nodes on the same grid point are shared, so neighboring lanes reference identical divider
    // nodes.
    fn corner_nodes(&mut self, segment: &str, x_offset: f64, c: &Corners) -> [String; 4] {
        [
            self.grid_node(segment, x_offset, c.entry_x, c.right_y),
            self.grid_node(segment, x_offset, c.entry_x, c.left_y),
            self.grid_node(segment, x_offset, c.exit_x, c.left_y),
            self.grid_node(segment, x_offset, c.exit_x, c.right_y),
        ]
    }

    fn grid_node(&mut self, segment: &str, x_offset: f64, x: usize, y: isize) -> String {
        let token = format!("{}:x{}:y{}", segment, x, y);
        if self.map.get_node(&token).is_none() {
            self.map.add_node(
                &token,
                Pt2D::new(
                    x_offset + (x as f64) * ROAD_LENGTH,
                    (y as f64) * LANE_WIDTH,
                ),
            );
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_way_road() {
        let mut b = SyntheticMap::new("test");
        b.add_road("r", 0.0, 2, 1);
        let map = b.build();

        assert_eq!(map.road_segments().len(), 1);
        let blocks: Vec<&str> = map.road_blocks().iter().map(|b| b.token.as_str()).collect();
        assert_eq!(blocks, vec!["r:fwd", "r:back"]);
        assert_eq!(map.lanes().len(), 3);

        // The two forward lanes share a divider
        let curb = map.get_lane("r:fwd:0").unwrap();
        let inner = map.get_lane("r:fwd:1").unwrap();
        assert!(curb.right_lane_divider_nodes.is_empty());
        assert_eq!(curb.left_lane_divider_nodes, inner.right_lane_divider_nodes);
        assert!(inner.left_lane_divider_nodes.is_empty());

        // Every referenced node exists
        for lane in map.lanes() {
            assert_eq!(
                map.resolve_nodes(lane.outline.open_ring()).unwrap().len(),
                4
            );
        }
        // Grid points on the shared boundaries are reused: 2 columns, y from -2 to 1
        assert_eq!(map.nodes().len(), 8);
    }
}

use serde::{Deserialize, Serialize};

use geom::Pt2D;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    pub token: String,
    pub x: f64,
    pub y: f64,
}

impl RawNode {
    pub fn pt(&self) -> Pt2D {
        Pt2D::new(self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawLine {
    pub token: String,
    pub node_tokens: Vec<String>,
}

/// The polygon shared by lanes, road blocks, and road segments. The transversal edges are the
/// lines crossing the element where traffic enters and leaves it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawOutline {
    /// Ordered around the element. Usually not closed; if the last token repeats the first, it's
    /// ignored.
    pub exterior_node_tokens: Vec<String>,
    #[serde(default)]
    pub from_edge_line_token: Option<String>,
    #[serde(default)]
    pub to_edge_line_token: Option<String>,
}

impl RawOutline {
    /// The ring without any repeated closing token.
    pub fn open_ring(&self) -> &[String] {
        let tokens = &self.exterior_node_tokens;
        if tokens.len() > 1 && tokens[0] == tokens[tokens.len() - 1] {
            &tokens[..tokens.len() - 1]
        } else {
            tokens
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawLane {
    pub token: String,
    #[serde(flatten)]
    pub outline: RawOutline,
    /// Nodes along the divider shared with the lane to the left. Empty at the edge of a road
    /// block.
    #[serde(default)]
    pub left_lane_divider_nodes: Vec<String>,
    #[serde(default)]
    pub right_lane_divider_nodes: Vec<String>,
    /// Some providers don't link lanes to their road block; those lanes get located by position.
    #[serde(default)]
    pub road_block_token: Option<String>,
}

/// Parallel lanes heading the same way within one road segment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawRoadBlock {
    pub token: String,
    #[serde(flatten)]
    pub outline: RawOutline,
    pub road_segment_token: String,
}

/// One or two road blocks, or an intersection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawRoadSegment {
    pub token: String,
    #[serde(flatten)]
    pub outline: RawOutline,
    #[serde(default)]
    pub is_intersection: bool,
}

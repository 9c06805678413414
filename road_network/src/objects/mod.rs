use serde::{Deserialize, Serialize};

use geom::{PolyLine, Polygon};

pub mod intersection;
pub mod lane;
pub mod lane_group;
pub mod lane_section;
pub mod road;
pub mod road_section;

/// The shape every network element carries. Edges and the centerline run in the direction of
/// travel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementGeometry {
    pub polygon: Polygon,
    // TODO This is a copy of left_edge. Deriving a real midline from the entry/exit edges would
    // change what downstream consumers see, so it needs to be opt-in.
    pub centerline: PolyLine,
    pub left_edge: PolyLine,
    pub right_edge: PolyLine,
}

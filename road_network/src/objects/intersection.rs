use std::fmt;

use serde::{Deserialize, Serialize};

use geom::Polygon;

use crate::{LaneID, RoadID};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IntersectionID(pub usize);

impl fmt::Display for IntersectionID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Intersection #{}", self.0)
    }
}

/// A junction. The raw data doesn't say which lanes enter or leave it, so the lane and maneuver
/// lists start empty for consumers to fill in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    pub id: IntersectionID,
    /// `{segment token}_inter`
    pub uid: String,
    /// The connecting roads covering this intersection.
    pub roads: Vec<RoadID>,
    pub polygon: Polygon,
    pub incoming_lanes: Vec<LaneID>,
    pub outgoing_lanes: Vec<LaneID>,
    pub maneuvers: Vec<Maneuver>,
    pub crossings: Vec<Polygon>,
}

impl Intersection {
    pub fn uid_for(segment_uid: &str) -> String {
        format!("{}_inter", segment_uid)
    }
}

/// One way of moving through an intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maneuver {
    pub start_lane: LaneID,
    pub connecting_lane: LaneID,
    pub end_lane: LaneID,
}

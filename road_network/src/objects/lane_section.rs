use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ElementGeometry, LaneGroupID, LaneID, RoadID};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LaneSectionID(pub usize);

impl fmt::Display for LaneSectionID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LaneSection #{}", self.0)
    }
}

/// A stretch of one lane. Neighbors are only ever sections heading the same way; the opposite
/// direction is reached through the lane group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaneSection {
    pub id: LaneSectionID,
    /// `{lane token}_sec`
    pub uid: String,
    pub geometry: ElementGeometry,
    pub lane: LaneID,
    pub lane_to_left: Option<LaneSectionID>,
    pub lane_to_right: Option<LaneSectionID>,
    pub group: LaneGroupID,
    pub road: RoadID,
}

impl LaneSection {
    pub fn uid_for(lane_uid: &str) -> String {
        format!("{}_sec", lane_uid)
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ElementGeometry, LaneID, RoadID};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LaneGroupID(pub usize);

impl fmt::Display for LaneGroupID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LaneGroup #{}", self.0)
    }
}

/// All lanes of one road block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaneGroup {
    pub id: LaneGroupID,
    /// The road block token
    pub uid: String,
    /// Rightmost first. Consecutive lanes share a divider.
    pub lanes: Vec<LaneID>,
    pub geometry: ElementGeometry,
    pub road: RoadID,
    /// The group heading the other way on the same road, if the road is two-way.
    pub opposite: Option<LaneGroupID>,
}

impl LaneGroup {
    /// Built groups always have a lane; these only return `None` for hand-made ones.
    pub fn rightmost_lane(&self) -> Option<LaneID> {
        self.lanes.first().cloned()
    }

    pub fn leftmost_lane(&self) -> Option<LaneID> {
        self.lanes.last().cloned()
    }
}


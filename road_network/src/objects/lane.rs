use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ElementGeometry, LaneGroupID, LaneSectionID, RoadID};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LaneID(pub usize);

impl fmt::Display for LaneID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Lane #{}", self.0)
    }
}

/// One lane of one road block, heading the same way as the rest of its group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub id: LaneID,
    /// The lane token
    pub uid: String,
    pub geometry: ElementGeometry,
    pub group: LaneGroupID,
    pub road: RoadID,
    /// Always exactly one section for now.
    pub sections: Vec<LaneSectionID>,
}

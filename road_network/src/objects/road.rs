use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ElementGeometry, IntersectionID, LaneGroupID, LaneID, RoadSectionID};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoadID(pub usize);

impl fmt::Display for RoadID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Road #{}", self.0)
    }
}

/// One road segment. Ordinary roads have a forward lane group and maybe a backward one.
/// Connecting roads are empty shells covering an intersection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub id: RoadID,
    /// The road segment token
    pub uid: String,
    /// Forward lanes rightmost first, then backward lanes leftmost first.
    pub lanes: Vec<LaneID>,
    pub forward_group: Option<LaneGroupID>,
    pub backward_group: Option<LaneGroupID>,
    pub sections: Vec<RoadSectionID>,
    pub geometry: ElementGeometry,
    /// Only set for connecting roads.
    pub intersection: Option<IntersectionID>,
}

impl Road {
    pub fn is_connecting_road(&self) -> bool {
        self.intersection.is_some()
    }

    pub fn is_oneway(&self) -> bool {
        self.forward_group.is_some() && self.backward_group.is_none()
    }

    pub fn lane_groups(&self) -> Vec<LaneGroupID> {
        self.forward_group
            .into_iter()
            .chain(self.backward_group)
            .collect()
    }
}

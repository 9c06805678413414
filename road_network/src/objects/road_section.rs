use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ElementGeometry, LaneSectionID, RoadID};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoadSectionID(pub usize);

impl fmt::Display for RoadSectionID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RoadSection #{}", self.0)
    }
}

/// A cross-section of a road, covering both directions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadSection {
    pub id: RoadSectionID,
    /// `{segment token}_sec`
    pub uid: String,
    /// The forward sections rightmost first, then the backward sections leftmost first. This
    /// sweeps across the road from the forward curb to the backward curb.
    pub lanes: Vec<LaneSectionID>,
    pub forward_lanes: Vec<LaneSectionID>,
    pub backward_lanes: Vec<LaneSectionID>,
    pub geometry: ElementGeometry,
    pub road: RoadID,
}

impl RoadSection {
    pub fn uid_for(segment_uid: &str) -> String {
        format!("{}_sec", segment_uid)
    }
}

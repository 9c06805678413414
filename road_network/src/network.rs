use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use geom::{Distance, PolyLine};

use crate::{
    BuildReport, Intersection, IntersectionID, Lane, LaneGroup, LaneGroupID, LaneID, LaneSection,
    LaneSectionID, Road, RoadID, RoadSection, RoadSectionID,
};

/// Any element of the network.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementID {
    Lane(LaneID),
    LaneSection(LaneSectionID),
    LaneGroup(LaneGroupID),
    RoadSection(RoadSectionID),
    Road(RoadID),
    Intersection(IntersectionID),
}

impl fmt::Display for ElementID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ElementID::Lane(id) => write!(f, "{}", id),
            ElementID::LaneSection(id) => write!(f, "{}", id),
            ElementID::LaneGroup(id) => write!(f, "{}", id),
            ElementID::RoadSection(id) => write!(f, "{}", id),
            ElementID::Road(id) => write!(f, "{}", id),
            ElementID::Intersection(id) => write!(f, "{}", id),
        }
    }
}

/// The outer boundary of the drivable surface. Each line is closed and winds counter-clockwise.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Curb {
    pub lines: Vec<PolyLine>,
}

impl Curb {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The finished road network. It owns every element; nothing changes after it's built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub(crate) name: String,
    pub(crate) lanes: Vec<Lane>,
    pub(crate) lane_sections: Vec<LaneSection>,
    pub(crate) lane_groups: Vec<LaneGroup>,
    pub(crate) road_sections: Vec<RoadSection>,
    /// Ordinary roads come first, then connecting roads.
    pub(crate) roads: Vec<Road>,
    pub(crate) intersections: Vec<Intersection>,
    pub(crate) ordinary_roads: Vec<RoadID>,
    pub(crate) connecting_roads: Vec<RoadID>,
    pub(crate) elements: BTreeMap<String, ElementID>,
    pub(crate) curb: Curb,
    pub(crate) tolerance: Distance,
    pub(crate) report: BuildReport,
}

impl Network {
    pub(crate) fn blank(name: &str, tolerance: Distance) -> Network {
        Network {
            name: name.to_string(),
            lanes: Vec::new(),
            lane_sections: Vec::new(),
            lane_groups: Vec::new(),
            road_sections: Vec::new(),
            roads: Vec::new(),
            intersections: Vec::new(),
            ordinary_roads: Vec::new(),
            connecting_roads: Vec::new(),
            elements: BTreeMap::new(),
            curb: Curb::default(),
            tolerance,
            report: BuildReport::default(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Look up any element by the uid the raw data knows it by.
    pub fn element(&self, uid: &str) -> Option<ElementID> {
        self.elements.get(uid).cloned()
    }

    pub fn all_elements(&self) -> &BTreeMap<String, ElementID> {
        &self.elements
    }

    pub fn get_l(&self, id: LaneID) -> &Lane {
        &self.lanes[id.0]
    }

    pub fn get_ls(&self, id: LaneSectionID) -> &LaneSection {
        &self.lane_sections[id.0]
    }

    pub fn get_lg(&self, id: LaneGroupID) -> &LaneGroup {
        &self.lane_groups[id.0]
    }

    pub fn get_rs(&self, id: RoadSectionID) -> &RoadSection {
        &self.road_sections[id.0]
    }

    pub fn get_r(&self, id: RoadID) -> &Road {
        &self.roads[id.0]
    }

    pub fn get_i(&self, id: IntersectionID) -> &Intersection {
        &self.intersections[id.0]
    }

    pub fn all_lanes(&self) -> &Vec<Lane> {
        &self.lanes
    }

    pub fn all_lane_sections(&self) -> &Vec<LaneSection> {
        &self.lane_sections
    }

    pub fn all_lane_groups(&self) -> &Vec<LaneGroup> {
        &self.lane_groups
    }

    pub fn all_road_sections(&self) -> &Vec<RoadSection> {
        &self.road_sections
    }

    pub fn all_roads(&self) -> &Vec<Road> {
        &self.roads
    }

    pub fn ordinary_roads(&self) -> Vec<&Road> {
        self.ordinary_roads.iter().map(|r| self.get_r(*r)).collect()
    }

    pub fn connecting_roads(&self) -> Vec<&Road> {
        self.connecting_roads.iter().map(|r| self.get_r(*r)).collect()
    }

    pub fn all_intersections(&self) -> &Vec<Intersection> {
        &self.intersections
    }

    pub fn curb(&self) -> &Curb {
        &self.curb
    }

    pub fn tolerance(&self) -> Distance {
        self.tolerance
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    pub fn find_lane(&self, uid: &str) -> Option<&Lane> {
        match self.element(uid)? {
            ElementID::Lane(l) => Some(self.get_l(l)),
            _ => None,
        }
    }

    pub fn find_road(&self, uid: &str) -> Option<&Road> {
        match self.element(uid)? {
            ElementID::Road(r) => Some(self.get_r(r)),
            _ => None,
        }
    }

    pub fn find_lane_group(&self, uid: &str) -> Option<&LaneGroup> {
        match self.element(uid)? {
            ElementID::LaneGroup(g) => Some(self.get_lg(g)),
            _ => None,
        }
    }

    /// The uids of a road's lanes, in road order.
    pub fn lane_uids(&self, road: RoadID) -> Vec<&str> {
        self.get_r(road)
            .lanes
            .iter()
            .map(|l| self.get_l(*l).uid.as_str())
            .collect()
    }
}

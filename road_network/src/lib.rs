//! A directed road network derived from nuScenes-style raw map records. Lanes are ordered within
//! their road block, wrapped into lane groups, and paired into two-way roads; intersections and the
//! outer curb are derived alongside.
//!
//! Everything lives in arenas owned by `Network`. Entities refer to each other through typed index
//! handles like `LaneID`; every entity also carries the string uid the source data knows it by.

#[macro_use]
extern crate log;

mod config;
mod error;
mod make;
mod network;
mod objects;
mod report;

pub use crate::config::NetworkConfig;
pub use crate::error::BuildError;
pub use crate::make::DividerKey;
pub use crate::network::{Curb, ElementID, Network};
pub use crate::objects::intersection::{Intersection, IntersectionID, Maneuver};
pub use crate::objects::lane::{Lane, LaneID};
pub use crate::objects::lane_group::{LaneGroup, LaneGroupID};
pub use crate::objects::lane_section::{LaneSection, LaneSectionID};
pub use crate::objects::road::{Road, RoadID};
pub use crate::objects::road_section::{RoadSection, RoadSectionID};
pub use crate::objects::ElementGeometry;
pub use crate::report::{BuildReport, SkipReason, SkippedSegment};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Everything the build recovered from without failing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Lanes and road blocks without entry/exit edges, which got a placeholder centerline.
    pub degenerate_geometry: Vec<String>,
    pub skipped: Vec<SkippedSegment>,
    /// Lanes without a road block token that also don't lie inside any road block.
    pub orphan_lanes: Vec<String>,
    /// Lanes whose road block belongs to an intersection segment.
    #[serde(default)]
    pub lanes_in_intersections: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkippedSegment {
    pub segment: String,
    pub reason: SkipReason,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Listed in the config.
    Excluded,
    /// None of its road blocks have any lanes.
    NoLanes,
    /// More than two road blocks have lanes, so there's no forward/backward pairing.
    TooManyRoadBlocks,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SkipReason::Excluded => write!(f, "excluded by config"),
            SkipReason::NoLanes => write!(f, "no road block has lanes"),
            SkipReason::TooManyRoadBlocks => write!(f, "more than two road blocks have lanes"),
        }
    }
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.degenerate_geometry.is_empty()
            && self.skipped.is_empty()
            && self.orphan_lanes.is_empty()
            && self.lanes_in_intersections.is_empty()
    }

    /// One human-readable line per entry.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for uid in &self.degenerate_geometry {
            lines.push(format!("{} has no entry/exit edges; using a placeholder centerline", uid));
        }
        for s in &self.skipped {
            lines.push(format!("skipped road segment {}: {}", s.segment, s.reason));
        }
        for uid in &self.orphan_lanes {
            lines.push(format!("lane {} isn't inside any road block", uid));
        }
        for uid in &self.lanes_in_intersections {
            lines.push(format!("lane {} belongs to an intersection; leaving it out", uid));
        }
        lines
    }
}

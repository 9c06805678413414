use raw_map::{RawMap, RawRoadBlock, RawRoadSegment};

use crate::make::adjacency::order_lanes;
use crate::make::geometry::polygonal_features;
use crate::make::grouping::Grouping;
use crate::make::intersections::{make_intersection_draft, IntersectionDraft};
use crate::{BuildError, ElementGeometry, NetworkConfig, SkipReason};

/// What one road segment turns into, before any network-wide IDs exist.
pub enum SegmentOutcome {
    Road(RoadDraft),
    Intersection(IntersectionDraft),
    Skipped { segment: String, reason: SkipReason },
}

/// Links inside a draft are positional: a group's lanes are rightmost first, so each lane's left
/// neighbor is the next entry. The first group is forward, the second (if any) backward, and they
/// are each other's opposites.
pub struct RoadDraft {
    pub uid: String,
    pub geometry: ElementGeometry,
    pub groups: Vec<GroupDraft>,
    /// Elements of this road that got placeholder geometry
    pub degenerate: Vec<String>,
}

pub struct GroupDraft {
    pub uid: String,
    pub geometry: ElementGeometry,
    pub lanes: Vec<LaneDraft>,
}

pub struct LaneDraft {
    pub uid: String,
    pub geometry: ElementGeometry,
}

/// Works out everything about one segment that doesn't depend on other segments. Reads shared
/// state only, so this runs in parallel.
pub fn build_segment(
    raw: &RawMap,
    grouping: &Grouping,
    config: &NetworkConfig,
    segment: &RawRoadSegment,
) -> Result<SegmentOutcome, BuildError> {
    if config.skip_road_segments.contains(&segment.token) {
        return Ok(skip(segment, SkipReason::Excluded));
    }
    if segment.is_intersection {
        return Ok(SegmentOutcome::Intersection(make_intersection_draft(
            raw, grouping, segment,
        )?));
    }

    let blocks: Vec<&RawRoadBlock> = grouping
        .blocks_per_segment
        .get(&segment.token)
        .iter()
        .filter(|block| !grouping.lanes_per_block.get(&block.token).is_empty())
        .cloned()
        .collect();
    if blocks.is_empty() {
        return Ok(skip(segment, SkipReason::NoLanes));
    }
    if blocks.len() > 2 {
        return Ok(skip(segment, SkipReason::TooManyRoadBlocks));
    }

    let mut degenerate = Vec::new();
    let mut groups = Vec::new();
    for block in blocks {
        let mut lanes = Vec::new();
        for lane in order_lanes(&block.token, grouping.lanes_per_block.get(&block.token))? {
            let features = polygonal_features(raw, &lane.token, &lane.outline)?;
            if features.has_warnings() {
                degenerate.push(lane.token.clone());
            }
            lanes.push(LaneDraft {
                uid: lane.token.clone(),
                geometry: features.unpack().0,
            });
        }

        let features = polygonal_features(raw, &block.token, &block.outline)?;
        if features.has_warnings() {
            degenerate.push(block.token.clone());
        }
        groups.push(GroupDraft {
            uid: block.token.clone(),
            geometry: features.unpack().0,
            lanes,
        });
    }

    // Road segments rarely have entry/exit edges, so their placeholder geometry isn't worth
    // reporting.
    let (geometry, _) = polygonal_features(raw, &segment.token, &segment.outline)?.unpack();

    Ok(SegmentOutcome::Road(RoadDraft {
        uid: segment.token.clone(),
        geometry,
        groups,
        degenerate,
    }))
}

fn skip(segment: &RawRoadSegment, reason: SkipReason) -> SegmentOutcome {
    SegmentOutcome::Skipped {
        segment: segment.token.clone(),
        reason,
    }
}

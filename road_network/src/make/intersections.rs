use raw_map::{RawMap, RawRoadSegment};

use crate::make::geometry::polygonal_features;
use crate::make::grouping::Grouping;
use crate::{
    BuildError, ElementGeometry, Intersection, IntersectionID, Network, Road, RoadID,
};

pub struct IntersectionDraft {
    /// The segment token
    pub uid: String,
    pub geometry: ElementGeometry,
    /// Lanes of road blocks inside the intersection, which don't become part of the network
    pub ignored_lanes: Vec<String>,
}

/// Intersection segments skip lane ordering entirely; the lanes of their road blocks are only
/// noted.
pub fn make_intersection_draft(
    raw: &RawMap,
    grouping: &Grouping,
    segment: &RawRoadSegment,
) -> Result<IntersectionDraft, BuildError> {
    let (geometry, warnings) = polygonal_features(raw, &segment.token, &segment.outline)?.unpack();
    if !warnings.is_empty() {
        debug!("Intersection {} has placeholder edges", segment.token);
    }
    let ignored_lanes = grouping
        .blocks_per_segment
        .get(&segment.token)
        .iter()
        .flat_map(|block| grouping.lanes_per_block.get(&block.token))
        .map(|lane| lane.token.clone())
        .collect();
    Ok(IntersectionDraft {
        uid: segment.token.clone(),
        geometry,
        ignored_lanes,
    })
}

/// Adds the intersection and the empty connecting road covering it.
pub fn add_intersection(network: &mut Network, draft: IntersectionDraft) {
    let road = RoadID(network.roads.len());
    let id = IntersectionID(network.intersections.len());

    network.intersections.push(Intersection {
        id,
        uid: Intersection::uid_for(&draft.uid),
        roads: vec![road],
        polygon: draft.geometry.polygon.clone(),
        incoming_lanes: Vec::new(),
        outgoing_lanes: Vec::new(),
        maneuvers: Vec::new(),
        crossings: Vec::new(),
    });
    network.roads.push(Road {
        id: road,
        uid: draft.uid,
        lanes: Vec::new(),
        forward_group: None,
        backward_group: None,
        sections: Vec::new(),
        geometry: draft.geometry,
        intersection: Some(id),
    });
    network.connecting_roads.push(road);
}

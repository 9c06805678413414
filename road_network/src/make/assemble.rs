use std::collections::btree_map::Entry;

use crate::make::hierarchy::RoadDraft;
use crate::make::intersections::{add_intersection, IntersectionDraft};
use crate::{
    BuildError, ElementID, Lane, LaneGroup, LaneGroupID, LaneID, LaneSection, LaneSectionID,
    Network, Road, RoadID, RoadSection, RoadSectionID,
};

/// Turns per-segment drafts into network entities, with every link resolved to a real ID.
/// Ordinary roads get the first road IDs, connecting roads the rest.
pub fn assemble(
    network: &mut Network,
    roads: Vec<RoadDraft>,
    intersections: Vec<IntersectionDraft>,
) -> Result<(), BuildError> {
    for draft in roads {
        add_road(network, draft);
    }
    for draft in intersections {
        add_intersection(network, draft);
    }
    index_uids(network)
}

fn add_road(network: &mut Network, draft: RoadDraft) {
    let road = RoadID(network.roads.len());
    let section = RoadSectionID(network.road_sections.len());
    let first_group = network.lane_groups.len();
    let num_groups = draft.groups.len();

    let mut lanes_per_group: Vec<Vec<LaneID>> = Vec::new();
    let mut sections_per_group: Vec<Vec<LaneSectionID>> = Vec::new();
    for (idx, group_draft) in draft.groups.into_iter().enumerate() {
        let group = LaneGroupID(first_group + idx);
        let opposite = if num_groups == 2 {
            Some(LaneGroupID(first_group + 1 - idx))
        } else {
            None
        };

        let num_lanes = group_draft.lanes.len();
        let mut lanes = Vec::new();
        let mut sections = Vec::new();
        for (pos, lane_draft) in group_draft.lanes.into_iter().enumerate() {
            let lane = LaneID(network.lanes.len());
            let lane_section = LaneSectionID(network.lane_sections.len());
            network.lane_sections.push(LaneSection {
                id: lane_section,
                uid: LaneSection::uid_for(&lane_draft.uid),
                geometry: lane_draft.geometry.clone(),
                lane,
                // Sections of one group are pushed consecutively, rightmost first
                lane_to_left: if pos + 1 < num_lanes {
                    Some(LaneSectionID(lane_section.0 + 1))
                } else {
                    None
                },
                lane_to_right: if pos > 0 {
                    Some(LaneSectionID(lane_section.0 - 1))
                } else {
                    None
                },
                group,
                road,
            });
            network.lanes.push(Lane {
                id: lane,
                uid: lane_draft.uid,
                geometry: lane_draft.geometry,
                group,
                road,
                sections: vec![lane_section],
            });
            lanes.push(lane);
            sections.push(lane_section);
        }

        network.lane_groups.push(LaneGroup {
            id: group,
            uid: group_draft.uid,
            lanes: lanes.clone(),
            geometry: group_draft.geometry,
            road,
            opposite,
        });
        lanes_per_group.push(lanes);
        sections_per_group.push(sections);
    }

    let forward_sections = sections_per_group.first().cloned().unwrap_or_default();
    let backward_sections = sections_per_group.get(1).cloned().unwrap_or_default();
    network.road_sections.push(RoadSection {
        id: section,
        uid: RoadSection::uid_for(&draft.uid),
        lanes: across_road(&forward_sections, &backward_sections),
        forward_lanes: forward_sections,
        backward_lanes: backward_sections,
        geometry: draft.geometry.clone(),
        road,
    });

    let forward_lanes = lanes_per_group.first().cloned().unwrap_or_default();
    let backward_lanes = lanes_per_group.get(1).cloned().unwrap_or_default();
    network.roads.push(Road {
        id: road,
        uid: draft.uid,
        lanes: across_road(&forward_lanes, &backward_lanes),
        forward_group: if num_groups > 0 {
            Some(LaneGroupID(first_group))
        } else {
            None
        },
        backward_group: if num_groups > 1 {
            Some(LaneGroupID(first_group + 1))
        } else {
            None
        },
        sections: vec![section],
        geometry: draft.geometry,
        intersection: None,
    });
    network.ordinary_roads.push(road);
}

/// Forward rightmost-first, then backward leftmost-first.
fn across_road<T: Copy>(forward: &[T], backward: &[T]) -> Vec<T> {
    forward
        .iter()
        .chain(backward.iter().rev())
        .cloned()
        .collect()
}

fn index_uids(network: &mut Network) -> Result<(), BuildError> {
    let mut uids: Vec<(String, ElementID)> = Vec::new();
    uids.extend(network.roads.iter().map(|r| (r.uid.clone(), ElementID::Road(r.id))));
    uids.extend(
        network
            .intersections
            .iter()
            .map(|i| (i.uid.clone(), ElementID::Intersection(i.id))),
    );
    uids.extend(
        network
            .road_sections
            .iter()
            .map(|rs| (rs.uid.clone(), ElementID::RoadSection(rs.id))),
    );
    uids.extend(network.lanes.iter().map(|l| (l.uid.clone(), ElementID::Lane(l.id))));
    uids.extend(
        network
            .lane_sections
            .iter()
            .map(|ls| (ls.uid.clone(), ElementID::LaneSection(ls.id))),
    );
    uids.extend(
        network
            .lane_groups
            .iter()
            .map(|lg| (lg.uid.clone(), ElementID::LaneGroup(lg.id))),
    );

    for (uid, id) in uids {
        match network.elements.entry(uid) {
            Entry::Vacant(entry) => {
                entry.insert(id);
            }
            Entry::Occupied(entry) => {
                return Err(BuildError::DuplicateIdentifier(entry.key().clone()));
            }
        }
    }
    Ok(())
}

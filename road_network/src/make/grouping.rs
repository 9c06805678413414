use netutil::MultiMap;
use raw_map::{RawLane, RawMap, RawRoadBlock};

use crate::make::geometry::outline_points;
use crate::BuildError;

/// Which records belong to which parent, in record order.
pub struct Grouping<'a> {
    pub blocks_per_segment: MultiMap<String, &'a RawRoadBlock>,
    pub lanes_per_block: MultiMap<String, &'a RawLane>,
    pub orphan_lanes: Vec<String>,
}

pub fn group_records(raw: &RawMap) -> Result<Grouping, BuildError> {
    let mut blocks_per_segment = MultiMap::new();
    for block in raw.road_blocks() {
        if raw.get_road_segment(&block.road_segment_token).is_none() {
            return Err(BuildError::missing(
                &block.token,
                format!("road segment {}", block.road_segment_token),
            ));
        }
        blocks_per_segment.insert(block.road_segment_token.clone(), block);
    }

    let mut lanes_per_block = MultiMap::new();
    let mut orphan_lanes = Vec::new();
    for lane in raw.lanes() {
        match lane.road_block_token {
            Some(ref block) => {
                if raw.get_road_block(block).is_none() {
                    return Err(BuildError::missing(
                        &lane.token,
                        format!("road block {}", block),
                    ));
                }
                lanes_per_block.insert(block.clone(), lane);
            }
            None => match locate_lane(raw, lane)? {
                Some(block) => {
                    debug!("Lane {} lies inside road block {}", lane.token, block.token);
                    lanes_per_block.insert(block.token.clone(), lane);
                }
                None => {
                    orphan_lanes.push(lane.token.clone());
                }
            },
        }
    }

    Ok(Grouping {
        blocks_per_segment,
        lanes_per_block,
        orphan_lanes,
    })
}

/// For lanes that don't name their road block, find the block containing some point of the lane.
fn locate_lane<'a>(raw: &'a RawMap, lane: &RawLane) -> Result<Option<&'a RawRoadBlock>, BuildError> {
    let pts = outline_points(raw, &lane.token, &lane.outline)?;
    let polygon = geom::Polygon::new(pts)
        .map_err(|err| BuildError::geometry(&lane.token, err.to_string()))?;
    Ok(polygon
        .representative_point()
        .and_then(|pt| raw.record_on_point(pt)))
}

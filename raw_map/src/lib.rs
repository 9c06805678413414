//! The raw map is the flat, token-linked form of a nuScenes-style map: nodes, lines, and polygon
//! records for lanes, road blocks, and road segments. Nothing here knows about lane order or
//! adjacency; `road_network` derives all of that.

#[macro_use]
extern crate anyhow;

use std::collections::BTreeMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use geom::{Polygon, Pt2D};

pub use self::types::{RawLane, RawLine, RawNode, RawOutline, RawRoadBlock, RawRoadSegment};

pub mod synthetic;
mod types;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTables", into = "RawTables")]
pub struct RawMap {
    pub name: String,
    nodes: Table<RawNode>,
    lines: Table<RawLine>,
    lanes: Table<RawLane>,
    road_blocks: Table<RawRoadBlock>,
    road_segments: Table<RawRoadSegment>,
}

/// The on-disk layout, using the nuScenes table names.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawTables {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub node: Vec<RawNode>,
    #[serde(default)]
    pub line: Vec<RawLine>,
    #[serde(default)]
    pub lane: Vec<RawLane>,
    #[serde(default)]
    pub road_block: Vec<RawRoadBlock>,
    #[serde(default)]
    pub road_segment: Vec<RawRoadSegment>,
}

impl From<RawTables> for RawMap {
    fn from(tables: RawTables) -> RawMap {
        RawMap {
            name: tables.name,
            nodes: Table::new(tables.node),
            lines: Table::new(tables.line),
            lanes: Table::new(tables.lane),
            road_blocks: Table::new(tables.road_block),
            road_segments: Table::new(tables.road_segment),
        }
    }
}

impl From<RawMap> for RawTables {
    fn from(map: RawMap) -> RawTables {
        RawTables {
            name: map.name,
            node: map.nodes.records,
            line: map.lines.records,
            lane: map.lanes.records,
            road_block: map.road_blocks.records,
            road_segment: map.road_segments.records,
        }
    }
}

impl RawMap {
    pub fn blank(name: &str) -> RawMap {
        RawMap::from(RawTables {
            name: name.to_string(),
            ..Default::default()
        })
    }

    /// Records keep the order they were added in.
    pub fn nodes(&self) -> &[RawNode] {
        &self.nodes.records
    }
    pub fn lines(&self) -> &[RawLine] {
        &self.lines.records
    }
    pub fn lanes(&self) -> &[RawLane] {
        &self.lanes.records
    }
    pub fn road_blocks(&self) -> &[RawRoadBlock] {
        &self.road_blocks.records
    }
    pub fn road_segments(&self) -> &[RawRoadSegment] {
        &self.road_segments.records
    }

    pub fn get_node(&self, token: &str) -> Option<&RawNode> {
        self.nodes.get(token)
    }
    pub fn get_line(&self, token: &str) -> Option<&RawLine> {
        self.lines.get(token)
    }
    pub fn get_lane(&self, token: &str) -> Option<&RawLane> {
        self.lanes.get(token)
    }
    pub fn get_road_block(&self, token: &str) -> Option<&RawRoadBlock> {
        self.road_blocks.get(token)
    }
    pub fn get_road_segment(&self, token: &str) -> Option<&RawRoadSegment> {
        self.road_segments.get(token)
    }

    pub fn lane_mut(&mut self, token: &str) -> Option<&mut RawLane> {
        self.lanes.get_mut(token)
    }

    // These replace any existing record with the same token.
    pub fn add_node(&mut self, token: &str, pt: Pt2D) {
        self.nodes.upsert(RawNode {
            token: token.to_string(),
            x: pt.x(),
            y: pt.y(),
        });
    }
    pub fn add_line(&mut self, token: &str, node_tokens: Vec<String>) {
        self.lines.upsert(RawLine {
            token: token.to_string(),
            node_tokens,
        });
    }
    pub fn add_lane(&mut self, lane: RawLane) {
        self.lanes.upsert(lane);
    }
    pub fn add_road_block(&mut self, block: RawRoadBlock) {
        self.road_blocks.upsert(block);
    }
    pub fn add_road_segment(&mut self, segment: RawRoadSegment) {
        self.road_segments.upsert(segment);
    }

    /// Look up the position of every node in the list.
    pub fn resolve_nodes(&self, tokens: &[String]) -> Result<Vec<Pt2D>> {
        tokens
            .iter()
            .map(|token| {
                self.get_node(token)
                    .map(|node| node.pt())
                    .ok_or_else(|| anyhow!("node {} doesn't exist", token))
            })
            .collect()
    }

    /// The polygon described by an outline, exactly as given (no repair).
    pub fn outline_polygon(&self, outline: &RawOutline) -> Result<Polygon> {
        Polygon::new(self.resolve_nodes(outline.open_ring())?)
    }

    /// Finds the first road block containing the point. Blocks whose outline can't be resolved are
    /// ignored here; building the network reports them properly.
    pub fn record_on_point(&self, pt: Pt2D) -> Option<&RawRoadBlock> {
        self.road_blocks().iter().find(|block| {
            self.outline_polygon(&block.outline)
                .map(|poly| poly.contains_pt(pt))
                .unwrap_or(false)
        })
    }
}

trait Record {
    fn token(&self) -> &str;
}

macro_rules! record {
    ($($t:ty),*) => {
        $(impl Record for $t {
            fn token(&self) -> &str {
                &self.token
            }
        })*
    };
}

record!(RawNode, RawLine, RawLane, RawRoadBlock, RawRoadSegment);

/// Records in input order, indexed by token. If a token repeats, lookups find the last one.
#[derive(Clone, Debug, PartialEq)]
struct Table<T> {
    records: Vec<T>,
    index: BTreeMap<String, usize>,
}

impl<T: Record> Table<T> {
    fn new(records: Vec<T>) -> Table<T> {
        let index = records
            .iter()
            .enumerate()
            .map(|(idx, r)| (r.token().to_string(), idx))
            .collect();
        Table { records, index }
    }

    fn get(&self, token: &str) -> Option<&T> {
        self.index.get(token).map(|idx| &self.records[*idx])
    }

    fn get_mut(&mut self, token: &str) -> Option<&mut T> {
        match self.index.get(token) {
            Some(idx) => Some(&mut self.records[*idx]),
            None => None,
        }
    }

    fn upsert(&mut self, record: T) {
        if let Some(idx) = self.index.get(record.token()) {
            self.records[*idx] = record;
        } else {
            self.index
                .insert(record.token().to_string(), self.records.len());
            self.records.push(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "name": "tiny",
        "node": [
            {"token": "a", "x": 0.0, "y": 0.0},
            {"token": "b", "x": 4.0, "y": 0.0},
            {"token": "c", "x": 4.0, "y": 4.0},
            {"token": "d", "x": 0.0, "y": 4.0}
        ],
        "road_block": [
            {"token": "block", "road_segment_token": "seg", "exterior_node_tokens": ["a", "b", "c", "d", "a"]}
        ],
        "road_segment": [
            {"token": "seg", "exterior_node_tokens": ["a", "b", "c", "d"]}
        ]
    }"#;

    #[test]
    fn parse_tables() {
        let map: RawMap = netutil::from_json(JSON).unwrap();
        assert_eq!(map.name, "tiny");
        assert_eq!(map.nodes().len(), 4);
        assert!(map.lines().is_empty());
        assert_eq!(map.get_node("c").unwrap().pt(), Pt2D::new(4.0, 4.0));
        let block = map.get_road_block("block").unwrap();
        assert_eq!(block.outline.open_ring().len(), 4);
        assert_eq!(block.outline.from_edge_line_token, None);
        assert!(!map.get_road_segment("seg").unwrap().is_intersection);

        let roundtrip: RawMap = netutil::from_json(&netutil::to_json(&map).unwrap()).unwrap();
        assert_eq!(roundtrip, map);
    }

    #[test]
    fn point_lookup() {
        let map: RawMap = netutil::from_json(JSON).unwrap();
        assert_eq!(
            map.record_on_point(Pt2D::new(1.0, 1.0)).map(|b| b.token.as_str()),
            Some("block")
        );
        assert!(map.record_on_point(Pt2D::new(10.0, 1.0)).is_none());
    }

    #[test]
    fn missing_nodes() {
        let map = RawMap::blank("empty");
        assert!(map.resolve_nodes(&["nope".to_string()]).is_err());
    }

    #[test]
    fn upsert_replaces() {
        let mut map = RawMap::blank("m");
        map.add_node("a", Pt2D::new(1.0, 2.0));
        map.add_node("b", Pt2D::new(0.0, 0.0));
        map.add_node("a", Pt2D::new(3.0, 4.0));
        assert_eq!(map.nodes().len(), 2);
        assert_eq!(map.get_node("a").unwrap().pt(), Pt2D::new(3.0, 4.0));
    }
}

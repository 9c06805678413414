use pretty_assertions::assert_eq;

use netutil::Timer;
use raw_map::synthetic::SyntheticMap;
use raw_map::{RawMap, RawTables};
use road_network::{BuildError, ElementID, Network, NetworkConfig, SkipReason, SkippedSegment};

fn build(raw: &RawMap) -> Network {
    Network::create_from_raw(raw, NetworkConfig::default(), &mut Timer::throwaway()).unwrap()
}

fn lane_uids(net: &Network, lanes: &[road_network::LaneID]) -> Vec<String> {
    lanes.iter().map(|l| net.get_l(*l).uid.clone()).collect()
}

#[test]
fn lanes_ordered_within_a_block() {
    let mut b = SyntheticMap::new("three lanes");
    b.add_road("r", 0.0, 3, 0);
    let net = build(&b.build());

    let group = net.find_lane_group("r:fwd").unwrap();
    assert_eq!(
        lane_uids(&net, &group.lanes),
        vec!["r:fwd:0", "r:fwd:1", "r:fwd:2"]
    );
    assert_eq!(net.get_l(group.rightmost_lane().unwrap()).uid, "r:fwd:0");
    assert_eq!(net.get_l(group.leftmost_lane().unwrap()).uid, "r:fwd:2");

    // Neighbors follow the same order
    let sections: Vec<_> = group
        .lanes
        .iter()
        .map(|l| net.get_l(*l).sections[0])
        .collect();
    assert_eq!(net.get_ls(sections[0]).lane_to_right, None);
    assert_eq!(net.get_ls(sections[0]).lane_to_left, Some(sections[1]));
    assert_eq!(net.get_ls(sections[1]).lane_to_right, Some(sections[0]));
    assert_eq!(net.get_ls(sections[1]).lane_to_left, Some(sections[2]));
    assert_eq!(net.get_ls(sections[2]).lane_to_left, None);
    assert_eq!(net.get_ls(sections[2]).uid, "r:fwd:2_sec");
}

#[test]
fn two_way_road() {
    let mut b = SyntheticMap::new("two way");
    b.add_road("r", 0.0, 2, 2);
    let net = build(&b.build());

    let road = net.find_road("r").unwrap();
    assert!(!road.is_connecting_road());
    assert!(!road.is_oneway());
    assert_eq!(
        lane_uids(&net, &road.lanes),
        vec!["r:fwd:0", "r:fwd:1", "r:back:1", "r:back:0"]
    );

    let fwd = net.get_lg(road.forward_group.unwrap());
    let back = net.get_lg(road.backward_group.unwrap());
    assert_eq!(fwd.uid, "r:fwd");
    assert_eq!(back.uid, "r:back");
    assert_eq!(fwd.opposite, Some(back.id));
    assert_eq!(back.opposite, Some(fwd.id));
    let mut expected = fwd.lanes.clone();
    expected.extend(back.lanes.iter().rev());
    assert_eq!(road.lanes, expected);

    assert_eq!(road.sections.len(), 1);
    let section = net.get_rs(road.sections[0]);
    assert_eq!(section.uid, "r_sec");
    assert_eq!(section.road, road.id);
    assert_eq!(section.lanes.len(), 4);
    assert_eq!(section.forward_lanes.len(), 2);
    let backward: Vec<&str> = section
        .backward_lanes
        .iter()
        .map(|ls| net.get_ls(*ls).uid.as_str())
        .collect();
    assert_eq!(backward, vec!["r:back:0_sec", "r:back:1_sec"]);
    assert_eq!(section.lanes[2], section.backward_lanes[1]);

    // Every lane points back at its group and road
    for lane in net.all_lanes() {
        assert_eq!(lane.road, road.id);
        assert!(net.get_lg(lane.group).lanes.contains(&lane.id));
        let ls = net.get_ls(lane.sections[0]);
        assert_eq!(ls.lane, lane.id);
        assert_eq!(ls.group, lane.group);
        assert_eq!(ls.geometry, lane.geometry);
    }
    assert!(net.report().is_clean());
}

#[test]
fn single_lane_block() {
    let mut b = SyntheticMap::new("one lane");
    b.add_road("r", 0.0, 1, 0);
    let net = build(&b.build());

    let road = net.find_road("r").unwrap();
    assert!(road.is_oneway());
    let group = net.get_lg(road.forward_group.unwrap());
    assert_eq!(group.lanes.len(), 1);
    assert_eq!(group.opposite, None);
    assert_eq!(group.rightmost_lane(), Some(group.lanes[0]));
    assert_eq!(group.rightmost_lane(), group.leftmost_lane());

    let mut emptied = group.clone();
    emptied.lanes.clear();
    assert_eq!(emptied.rightmost_lane(), None);
    assert_eq!(emptied.leftmost_lane(), None);
    assert_eq!(net.get_rs(road.sections[0]).backward_lanes, Vec::new());
}

#[test]
fn intersections_become_connecting_roads() {
    let mut b = SyntheticMap::new("junction");
    b.add_road("r1", 0.0, 1, 1);
    b.add_intersection("i", 20.0);
    b.add_road("r2", 40.0, 1, 1);
    let raw = b.build();
    let net = build(&raw);

    let ordinary: Vec<&str> = net.ordinary_roads().iter().map(|r| r.uid.as_str()).collect();
    assert_eq!(ordinary, vec!["r1", "r2"]);
    assert_eq!(net.connecting_roads().len(), 1);
    assert_eq!(net.all_intersections().len(), 1);
    assert_eq!(net.all_road_sections().len(), 2);

    let i = match net.element("i_inter") {
        Some(ElementID::Intersection(i)) => net.get_i(i),
        other => panic!("i_inter is {:?}", other),
    };
    let shell = net.get_r(i.roads[0]);
    assert_eq!(shell.uid, "i");
    assert!(shell.is_connecting_road());
    assert!(shell.lanes.is_empty());
    assert!(shell.sections.is_empty());
    assert_eq!(shell.lane_groups(), Vec::new());
    assert_eq!(shell.intersection, Some(i.id));
    assert!(i.incoming_lanes.is_empty() && i.maneuvers.is_empty() && i.crossings.is_empty());
    assert_eq!(net.element("i_sec"), None);

    // The two roads don't touch, unless the intersection joins them
    assert_eq!(net.curb().lines.len(), 2);
    let config = NetworkConfig {
        curb_includes_intersections: true,
        ..Default::default()
    };
    let joined = Network::create_from_raw(&raw, config, &mut Timer::throwaway()).unwrap();
    assert_eq!(joined.curb().lines.len(), 1);
}

#[test]
fn missing_edges_are_degenerate() {
    let mut b = SyntheticMap::new("degenerate");
    b.add_road("r", 0.0, 2, 0);
    let mut raw = b.build();
    let lane = raw.lane_mut("r:fwd:1").unwrap();
    lane.outline.from_edge_line_token = None;
    lane.outline.to_edge_line_token = None;

    let mut timer = Timer::throwaway();
    let net = Network::create_from_raw(&raw, NetworkConfig::default(), &mut timer).unwrap();
    assert_eq!(net.report().degenerate_geometry, vec!["r:fwd:1".to_string()]);
    assert_eq!(timer.warnings().len(), 1);

    let geometry = &net.find_lane("r:fwd:1").unwrap().geometry;
    assert_eq!(geometry.centerline.points().len(), 2);
    assert_eq!(geometry.left_edge, geometry.centerline);
    assert_eq!(geometry.right_edge, geometry.centerline);
    // The neighbor is unaffected
    assert_eq!(
        net.find_lane("r:fwd:0").unwrap().geometry.centerline.length(),
        geom::Distance::meters(20.0)
    );
}

#[test]
fn every_element_has_one_uid() {
    let mut b = SyntheticMap::new("uids");
    b.add_road("r1", 0.0, 2, 1);
    b.add_intersection("i", 20.0);
    b.add_road("r2", 40.0, 3, 3);
    let net = build(&b.build());

    let total = net.all_lanes().len()
        + net.all_lane_sections().len()
        + net.all_lane_groups().len()
        + net.all_road_sections().len()
        + net.all_roads().len()
        + net.all_intersections().len();
    assert_eq!(net.all_elements().len(), total);
    assert_eq!(total, 9 + 9 + 4 + 2 + 3 + 1);

    for (uid, id) in net.all_elements() {
        let found = match id {
            ElementID::Lane(x) => &net.get_l(*x).uid,
            ElementID::LaneSection(x) => &net.get_ls(*x).uid,
            ElementID::LaneGroup(x) => &net.get_lg(*x).uid,
            ElementID::RoadSection(x) => &net.get_rs(*x).uid,
            ElementID::Road(x) => &net.get_r(*x).uid,
            ElementID::Intersection(x) => &net.get_i(*x).uid,
        };
        assert_eq!(found, uid);
    }
}

#[test]
fn duplicate_uids_fail() {
    let mut b = SyntheticMap::new("dupes");
    b.add_road("r", 0.0, 1, 0);
    b.add_road("s", 30.0, 1, 0);
    let mut tables = RawTables::from(b.build());
    for lane in &mut tables.lane {
        if lane.token == "s:fwd:0" {
            lane.token = "r".to_string();
        }
    }
    let raw = RawMap::from(tables);

    assert_eq!(
        Network::create_from_raw(&raw, NetworkConfig::default(), &mut Timer::throwaway())
            .unwrap_err(),
        BuildError::DuplicateIdentifier("r".to_string())
    );
}

#[test]
fn cyclic_dividers_fail() {
    let mut b = SyntheticMap::new("cycle");
    b.add_road("r", 0.0, 2, 0);
    let mut raw = b.build();
    let q = vec!["q".to_string()];
    raw.lane_mut("r:fwd:0").unwrap().right_lane_divider_nodes = q.clone();
    raw.lane_mut("r:fwd:1").unwrap().left_lane_divider_nodes = q;

    match Network::create_from_raw(&raw, NetworkConfig::default(), &mut Timer::throwaway()) {
        Err(BuildError::AmbiguousAdjacency { block, .. }) => assert_eq!(block, "r:fwd"),
        other => panic!("expected AmbiguousAdjacency, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn skipped_and_orphaned_records_are_reported() {
    let mut b = SyntheticMap::new("report");
    b.add_road("keep", 0.0, 1, 1);
    b.add_road("drop", 30.0, 1, 1);
    b.add_road("unlinked", 60.0, 1, 0);
    let mut raw = b.build();
    // Still inside its block, so it gets found by position
    raw.lane_mut("unlinked:fwd:0").unwrap().road_block_token = None;

    let mut config = NetworkConfig::for_map("report");
    config.skip_road_segments.insert("drop".to_string());
    let net = Network::create_from_raw(&raw, config, &mut Timer::throwaway()).unwrap();

    assert_eq!(
        net.report().skipped,
        vec![SkippedSegment {
            segment: "drop".to_string(),
            reason: SkipReason::Excluded,
        }]
    );
    assert!(net.find_road("drop").is_none());
    assert!(net.find_lane("drop:back:0").is_none());
    assert_eq!(
        net.get_l(net.get_lg(net.find_road("unlinked").unwrap().forward_group.unwrap()).lanes[0])
            .uid,
        "unlinked:fwd:0"
    );
    assert!(net.report().orphan_lanes.is_empty());
}

#[test]
fn lanes_outside_every_block_are_orphans() {
    let mut b = SyntheticMap::new("orphan");
    b.add_road("r", 0.0, 1, 0);
    let mut raw = b.build();
    // Move the lane far away from its block and unlink it
    let mut outline = raw.get_lane("r:fwd:0").unwrap().outline.clone();
    for token in &mut outline.exterior_node_tokens {
        let pt = raw.get_node(token).unwrap().pt().offset(0.0, 1000.0);
        let far = format!("{}:far", token);
        raw.add_node(&far, pt);
        *token = far;
    }
    let lane = raw.lane_mut("r:fwd:0").unwrap();
    lane.road_block_token = None;
    lane.outline = outline;

    let net = build(&raw);
    assert_eq!(net.report().orphan_lanes, vec!["r:fwd:0".to_string()]);
    assert_eq!(
        net.report().skipped,
        vec![SkippedSegment {
            segment: "r".to_string(),
            reason: SkipReason::NoLanes,
        }]
    );
    assert!(net.all_roads().is_empty());
    assert!(net.all_elements().is_empty());
    assert!(net.curb().is_empty());
}

#[test]
fn lanes_inside_intersections_are_reported() {
    let mut b = SyntheticMap::new("junction lanes");
    b.add_road("r", 0.0, 1, 0);
    b.add_road("q", 30.0, 1, 0);
    b.add_intersection("i", 60.0);
    let mut raw = b.build();
    let mut block = raw.get_road_block("q:fwd").unwrap().clone();
    block.road_segment_token = "i".to_string();
    raw.add_road_block(block);
    assert_eq!(raw.lanes().len(), 2);

    let mut timer = Timer::throwaway();
    let net = Network::create_from_raw(&raw, NetworkConfig::default(), &mut timer).unwrap();
    assert_eq!(net.all_lanes().len(), 1);
    assert!(net.find_lane("q:fwd:0").is_none());
    assert!(!net.report().is_clean());
    assert_eq!(
        net.report().lanes_in_intersections,
        vec!["q:fwd:0".to_string()]
    );
    // "q" lost its only block
    assert_eq!(
        net.report().skipped,
        vec![SkippedSegment {
            segment: "q".to_string(),
            reason: SkipReason::NoLanes,
        }]
    );
    assert!(timer
        .warnings()
        .iter()
        .any(|line| line.contains("q:fwd:0")));
}

#[test]
fn negative_tolerance_fails() {
    let mut b = SyntheticMap::new("tolerance");
    b.add_road("r", 0.0, 1, 0);
    let raw = b.build();
    let mut config: NetworkConfig = netutil::from_json(r#"{"tolerance": -1.0}"#).unwrap();
    assert!(matches!(
        Network::create_from_raw(&raw, config.clone(), &mut Timer::throwaway()),
        Err(BuildError::InvalidConfig(_))
    ));

    config.tolerance = geom::Distance::meters(0.1);
    assert!(Network::create_from_raw(&raw, config, &mut Timer::throwaway()).is_ok());
}

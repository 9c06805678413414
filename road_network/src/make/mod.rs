//! Building a `Network` from a `RawMap`. Each road segment is worked out independently into a
//! draft, then the drafts are stitched together and given real IDs.

mod adjacency;
mod assemble;
mod boundary;
mod geometry;
mod grouping;
mod hierarchy;
mod intersections;

use netutil::Timer;
use raw_map::{RawMap, RawRoadSegment};

pub use self::adjacency::DividerKey;
use self::hierarchy::SegmentOutcome;
use crate::{BuildError, BuildReport, Network, NetworkConfig, SkippedSegment};

impl Network {
    /// Fails on an invalid config, or on the first malformed reference, ambiguous lane order, bad
    /// polygon, or repeated uid. Everything recoverable ends up in `Network::report` and as
    /// warnings on the timer.
    pub fn create_from_raw(
        raw: &RawMap,
        config: NetworkConfig,
        timer: &mut Timer,
    ) -> Result<Network, BuildError> {
        config.validate()?;

        timer.start("group raw records");
        let grouping = grouping::group_records(raw);
        timer.stop("group raw records");
        let grouping = grouping?;

        let segments: Vec<&RawRoadSegment> = raw.road_segments().iter().collect();
        let outcomes = timer.parallelize("build road segments", segments, |segment| {
            hierarchy::build_segment(raw, &grouping, &config, segment)
        });

        let mut report = BuildReport {
            orphan_lanes: grouping.orphan_lanes.clone(),
            ..Default::default()
        };
        let mut roads = Vec::new();
        let mut intersections = Vec::new();
        for outcome in outcomes {
            match outcome? {
                SegmentOutcome::Road(draft) => {
                    report.degenerate_geometry.extend(draft.degenerate.clone());
                    roads.push(draft);
                }
                SegmentOutcome::Intersection(draft) => {
                    report
                        .lanes_in_intersections
                        .extend(draft.ignored_lanes.clone());
                    intersections.push(draft);
                }
                SegmentOutcome::Skipped { segment, reason } => {
                    report.skipped.push(SkippedSegment { segment, reason });
                }
            }
        }

        timer.start("find curb");
        let mut polygons: Vec<geom::Polygon> =
            roads.iter().map(|r| r.geometry.polygon.clone()).collect();
        if config.curb_includes_intersections {
            polygons.extend(intersections.iter().map(|i| i.geometry.polygon.clone()));
        }
        let curb = boundary::find_curb(polygons, config.tolerance);
        timer.stop("find curb");

        let mut network = Network::blank(&raw.name, config.tolerance);
        network.curb = curb?;

        timer.start("assemble network");
        let result = assemble::assemble(&mut network, roads, intersections);
        timer.stop("assemble network");
        result?;

        for line in report.describe() {
            timer.warn(line);
        }
        network.report = report;
        timer.note(format!(
            "{}: {} ordinary roads, {} intersections, {} lanes, {} curb lines",
            network.name,
            network.ordinary_roads.len(),
            network.intersections.len(),
            network.lanes.len(),
            network.curb.lines.len()
        ));
        Ok(network)
    }
}

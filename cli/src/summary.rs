use netutil::prettyprint_usize;
use road_network::Network;

pub fn summarize(network: &Network) -> Vec<String> {
    let mut lines = vec![
        format!("Network {}", network.get_name()),
        format!(
            "  {} ordinary roads, {} of them one-way",
            prettyprint_usize(network.ordinary_roads().len()),
            prettyprint_usize(
                network
                    .ordinary_roads()
                    .into_iter()
                    .filter(|r| r.is_oneway())
                    .count()
            )
        ),
        format!(
            "  {} intersections",
            prettyprint_usize(network.all_intersections().len())
        ),
        format!(
            "  {} lane groups, {} lanes",
            prettyprint_usize(network.all_lane_groups().len()),
            prettyprint_usize(network.all_lanes().len())
        ),
        format!(
            "  {} curb lines, merged with a tolerance of {}",
            network.curb().lines.len(),
            network.tolerance()
        ),
    ];

    let report = network.report().describe();
    if report.is_empty() {
        lines.push("Nothing was skipped".to_string());
    } else {
        lines.push(format!("{} problems:", report.len()));
        lines.extend(report.into_iter().map(|line| format!("  {}", line)));
    }
    lines
}

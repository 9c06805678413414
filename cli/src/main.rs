//! Tools for turning raw nuScenes-style map records into a road network.

#[macro_use]
extern crate log;

mod summary;

use anyhow::Result;
use structopt::StructOpt;

use geom::Distance;
use netutil::Timer;
use raw_map::RawMap;
use road_network::{Network, NetworkConfig};

#[derive(StructOpt)]
#[structopt(name = "netcli", about = "Builds road networks from raw map records")]
enum Command {
    /// Build a network from a raw map and write it as JSON
    Convert {
        #[structopt(flatten)]
        build: BuildArgs,
        /// The path to write the network to
        #[structopt(long)]
        output: String,
    },
    /// Build a network from a raw map and describe what came out, without writing anything
    Summarize {
        #[structopt(flatten)]
        build: BuildArgs,
    },
}

#[derive(StructOpt)]
struct BuildArgs {
    /// The path to a raw map JSON file, with `node`, `line`, `lane`, `road_block`, and
    /// `road_segment` tables
    #[structopt(long)]
    input: String,
    /// The path to a JSON `NetworkConfig`. If this isn't specified, the defaults for the map's
    /// name are used.
    #[structopt(long)]
    config: Option<String>,
    /// Overrides the tolerance (in meters) used when merging road polygons into the curb
    #[structopt(long)]
    tolerance: Option<f64>,
}

impl BuildArgs {
    fn build(&self, timer: &mut Timer) -> Result<Network> {
        let raw: RawMap = netutil::read_json(&self.input)?;
        let mut config = match self.config {
            Some(ref path) => netutil::read_json::<NetworkConfig>(path)?,
            None => NetworkConfig::for_map(&raw.name),
        };
        if let Some(meters) = self.tolerance {
            if !meters.is_finite() {
                anyhow::bail!("--tolerance must be a number, not {}", meters);
            }
            // The network build rejects negative values, along with bad config files
            config.tolerance = Distance::meters(meters);
        }
        info!(
            "Building {} with a tolerance of {}, skipping {} segments",
            raw.name,
            config.tolerance,
            config.skip_road_segments.len()
        );
        let network = Network::create_from_raw(&raw, config, timer)?;
        Ok(network)
    }
}

fn main() -> Result<()> {
    netutil::logger::setup();

    match Command::from_args() {
        Command::Convert { build, output } => {
            let mut timer = Timer::new("convert raw map");
            let network = build.build(&mut timer)?;
            netutil::write_json(&output, &network)?;
        }
        Command::Summarize { build } => {
            let network = build.build(&mut Timer::new("summarize raw map"))?;
            for line in summary::summarize(&network) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

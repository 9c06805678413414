use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use geom::Distance;

use crate::BuildError;

/// Road segments known to be unusable in the published maps, per map name.
const BAD_SEGMENTS: &[(&str, &str)] = &[("boston-seaport", "ff6335c7-bc4a-415a-961b-c832309c7ddb")];

/// Options for building a network. Every field has a default, so a config file only needs the
/// fields it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Road polygons are grown by this much before merging them into the curb, so that slivers
    /// between neighboring roads disappear.
    #[serde(default = "default_tolerance")]
    pub tolerance: Distance,
    /// Segments to leave out entirely, usually because they're too small to work with.
    #[serde(default)]
    pub skip_road_segments: BTreeSet<String>,
    /// Also merge intersection polygons into the curb.
    #[serde(default)]
    pub curb_includes_intersections: bool,
}

fn default_tolerance() -> Distance {
    Distance::meters(0.05)
}

impl Default for NetworkConfig {
    fn default() -> NetworkConfig {
        NetworkConfig {
            tolerance: default_tolerance(),
            skip_road_segments: BTreeSet::new(),
            curb_includes_intersections: false,
        }
    }
}

impl NetworkConfig {
    /// The defaults, plus whatever segments are known to be broken in the named map.
    pub fn for_map(name: &str) -> NetworkConfig {
        let mut cfg = NetworkConfig::default();
        for (map, segment) in BAD_SEGMENTS {
            if *map == name {
                cfg.skip_road_segments.insert(segment.to_string());
            }
        }
        cfg
    }

    /// Config files bypass the checks in `Distance::meters`, so look at the tolerance again.
    pub fn validate(&self) -> Result<(), BuildError> {
        let meters = self.tolerance.inner_meters();
        if !meters.is_finite() || meters < 0.0 {
            return Err(BuildError::InvalidConfig(format!(
                "tolerance must be a non-negative number of meters, not {}",
                meters
            )));
        }
        Ok(())
    }
}

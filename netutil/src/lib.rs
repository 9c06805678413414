//! Utilities shared by the map-import crates: hierarchical timing with warnings, grouping
//! collections, and JSON helpers.

#[macro_use]
extern crate log;

mod collections;
mod io;
pub mod logger;
mod logs;
mod time;

pub use crate::collections::{wraparound_get, MultiMap};
pub use crate::io::{from_json, read_json, to_json, write_json};
pub use crate::logs::Warn;
pub use crate::time::{elapsed_seconds, prettyprint_time, prettyprint_usize, Timer};

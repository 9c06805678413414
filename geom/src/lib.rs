//! Planar geometry in world-space meters. Most of the heavy lifting (union, buffering, winding,
//! containment) is delegated to the `geo` crate; the types here just keep callers from depending
//! on it directly.

#[macro_use]
extern crate anyhow;

mod distance;
mod polygon;
mod polyline;
mod pt;
mod ring;

pub use crate::distance::Distance;
pub use crate::polygon::Polygon;
pub use crate::polyline::PolyLine;
pub use crate::pt::Pt2D;
pub use crate::ring::Ring;

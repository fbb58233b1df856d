//! Guidewire geometry: physical parameters → beam-model discretization.
//!
//! Purpose
//! - Turn the continuous description of a two-segment J-wire (straight shaft
//!   plus curved tip) into the counts and key points a beam-adapter simulation
//!   consumes: segment lengths, spire diameter, visual/collision edge counts,
//!   FEM beam counts, and per-segment material aliases.
//!
//! Why this design
//! - One validated constructor (`JWire::new`) computes every derived field
//!   eagerly; the result is an immutable value, or an `InvalidGeometryError`.
//! - Counts always round up (`ceil`) so a requested density is never
//!   under-resolved.
//! - Ordered pairs follow arclength: `[straight, tip]`.
//!
//! Code cross-refs: `JWireParams`, `JWire`, `Segment`, `SegmentProps`,
//! `crate::intervention::Instrument::JWire`.

mod cfg;
mod error;
mod jwire;
mod params;
mod segment;
mod shape;

pub use error::InvalidGeometryError;
pub use jwire::JWire;
pub use params::JWireParams;
pub use segment::{Segment, SegmentProps};

#[cfg(test)]
mod tests;

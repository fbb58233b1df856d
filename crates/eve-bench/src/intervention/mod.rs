//! Intervention assembly: which vessel tree, instrument, physics backend,
//! fluoroscopy sensor and target the benchmark is built from.
//!
//! Purpose
//! - Give the external simulation layer one typed, validated record per
//!   benchmark instead of literals scattered over constructor calls.
//! - Replay the vessel-tree change schedule deterministically.
//!
//! The collaborators themselves (arch sampling, beam physics, rendering,
//! centerline targets) are not implemented here.

mod arch_variety;
mod error;
mod instrument;
pub mod schedule;
mod types;

pub use arch_variety::ArchVarietyImageV2;
pub use error::InterventionError;
pub use instrument::{AngledParams, Instrument};
pub use schedule::{ArchDraw, ArchSchedule};
pub use types::{AorticArchRandom, ArchType, Branch, CenterlineRandom, Pillow, SofaBeamAdapter};

#[cfg(test)]
mod tests;

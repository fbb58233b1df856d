//! Aortic-arch navigation benchmark: device geometry and intervention setup.
//!
//! Scope
//! - `device`: J-wire physical parameters → beam-model discretization
//!   (segment lengths, edge/beam counts, key points, rest shape).
//! - `intervention`: typed configuration of the benchmark's external
//!   collaborators and the reproducible arch-change schedule.
//!
//! Physics, rendering and the RL loop are provided by the external
//! simulation framework; nothing here talks to it directly.
//!
//! Features
//! - `serde`: `Serialize`/`Deserialize` on parameter and config types.
//!   `JWire` deserializes only through validation.

pub mod device;
pub mod intervention;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::device::{InvalidGeometryError, JWire, JWireParams, Segment, SegmentProps};
    pub use crate::intervention::{
        AngledParams, ArchDraw, ArchSchedule, ArchVarietyImageV2, Instrument, InterventionError,
    };
    pub use nalgebra::{Point3, Vector3};
}

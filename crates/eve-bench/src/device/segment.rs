//! Device segments and their per-segment material/discretization record.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longitudinal portion of the device, in arclength order (proximal first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Segment {
    Straight,
    Tip,
}

impl Segment {
    pub const ALL: [Segment; 2] = [Segment::Straight, Segment::Tip];

    /// Slot of this segment in the ordered pairs (`num_edges_collis`, `density_of_beams`).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Segment::Straight => 0,
            Segment::Tip => 1,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Straight => write!(f, "straight"),
            Segment::Tip => write!(f, "tip"),
        }
    }
}

/// Everything the beam simulation needs to know about one segment.
///
/// Invariants:
/// - `start <= end`, both on the device's arclength axis (mm).
/// - `inner_radius <= radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SegmentProps {
    pub segment: Segment,
    pub start: f64,
    pub end: f64,
    pub young_modulus: f64,
    pub radius: f64,
    pub inner_radius: f64,
    pub mass_density: f64,
    pub collis_edges: u32,
    pub beams: u32,
}

impl SegmentProps {
    #[inline]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Annular cross-section area `π (r² − r_i²)`.
    #[inline]
    pub fn cross_section_area(&self) -> f64 {
        std::f64::consts::PI * (self.radius * self.radius - self.inner_radius * self.inner_radius)
    }
}

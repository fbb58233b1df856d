//! Validation failures for device geometry.

use std::fmt;

use super::segment::Segment;

/// Raised when the physical parameters of a device make the derived
/// geometry ill-defined (division by zero, negative lengths, degenerate
/// discretizations).
#[derive(Clone, Debug, PartialEq)]
pub enum InvalidGeometryError {
    /// Device name is empty.
    EmptyName,
    /// A parameter is NaN or infinite.
    NonFinite { field: &'static str },
    /// A parameter that must be strictly positive is `<= 0`.
    NonPositive { field: &'static str, value: f64 },
    /// A parameter that must be non-negative is `< 0`.
    Negative { field: &'static str, value: f64 },
    /// Tip angle is not positive, or so small the spire diameter overflows.
    TipAngle { value: f64 },
    /// Tip segment longer than the whole device (negative straight length).
    TipLongerThanDevice { tip_length: f64, length: f64 },
    /// A per-mm discretization density is `<= 0`.
    NonPositiveDensity { field: &'static str, value: f64 },
    /// Inner diameter exceeds outer diameter on a segment.
    InnerExceedsOuter {
        segment: Segment,
        inner: f64,
        outer: f64,
    },
    /// Poisson ratio outside the open interval (0, 0.5).
    PoissonRatio { value: f64 },
    /// Color channel outside [0, 1].
    Color { channel: usize, value: f64 },
    /// A ceiling count exceeds the element counter or the sampling cap.
    TooManyElements { field: &'static str, count: f64 },
}

impl fmt::Display for InvalidGeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "invalid geometry: device name is empty"),
            Self::NonFinite { field } => write!(f, "invalid geometry: {field} is not finite"),
            Self::NonPositive { field, value } => {
                write!(f, "invalid geometry: {field} must be > 0 (got {value})")
            }
            Self::Negative { field, value } => {
                write!(f, "invalid geometry: {field} must be >= 0 (got {value})")
            }
            Self::TipAngle { value } => {
                write!(
                    f,
                    "invalid geometry: tip_angle must be > 0 rad with a finite spire diameter (got {value})"
                )
            }
            Self::TipLongerThanDevice { tip_length, length } => write!(
                f,
                "invalid geometry: tip_length {tip_length} exceeds device length {length}"
            ),
            Self::NonPositiveDensity { field, value } => write!(
                f,
                "invalid geometry: density {field} must be > 0 per mm (got {value})"
            ),
            Self::InnerExceedsOuter {
                segment,
                inner,
                outer,
            } => write!(
                f,
                "invalid geometry: {segment} inner diameter {inner} exceeds outer diameter {outer}"
            ),
            Self::PoissonRatio { value } => write!(
                f,
                "invalid geometry: poisson_ratio must lie in (0, 0.5) (got {value})"
            ),
            Self::Color { channel, value } => write!(
                f,
                "invalid geometry: color channel {channel} must lie in [0, 1] (got {value})"
            ),
            Self::TooManyElements { field, count } => write!(
                f,
                "invalid geometry: {field} yields {count} elements (exceeds element limit)"
            ),
        }
    }
}

impl std::error::Error for InvalidGeometryError {}

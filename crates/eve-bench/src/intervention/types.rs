//! Parameter records for the external collaborators of an intervention.
//!
//! These are plain values: the vessel-tree generator, simulation backend,
//! fluoroscopy sensor and target generator live outside this crate and only
//! read the fields below.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::InterventionError;

/// Aortic-arch morphology classes the random vessel tree can draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArchType {
    I,
    II,
    IV,
    Va,
    Vb,
    VI,
    VII,
}

impl fmt::Display for ArchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Named vessel branches a target can be placed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Branch {
    /// Left common carotid artery.
    Lcca,
    /// Right common carotid artery.
    Rcca,
    /// Left subclavian artery.
    Lsa,
    /// Right subclavian artery.
    Rsa,
    /// Brachiocephalic trunk.
    Bct,
    /// Common origin.
    Co,
}

/// Randomly re-sampled aortic arch.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AorticArchRandom {
    /// Episodes that share one arch before a new one is drawn.
    pub episodes_between_change: u32,
    pub scale_diameter_array: Vec<f64>,
    pub arch_types_filter: Vec<ArchType>,
    pub seed: Option<u64>,
}

impl Default for AorticArchRandom {
    fn default() -> Self {
        Self {
            episodes_between_change: 1,
            scale_diameter_array: vec![0.85],
            arch_types_filter: vec![ArchType::I],
            seed: None,
        }
    }
}

impl AorticArchRandom {
    pub fn validate(&self) -> Result<(), InterventionError> {
        if self.episodes_between_change == 0 {
            return Err(InterventionError::invalid(
                "vessel_tree.episodes_between_change",
                "must be >= 1",
            ));
        }
        if self.scale_diameter_array.is_empty() {
            return Err(InterventionError::invalid(
                "vessel_tree.scale_diameter_array",
                "must not be empty",
            ));
        }
        if let Some(bad) = self
            .scale_diameter_array
            .iter()
            .find(|s| !(s.is_finite() && **s > 0.0))
        {
            return Err(InterventionError::invalid(
                "vessel_tree.scale_diameter_array",
                format!("entries must be finite and > 0 (got {bad})"),
            ));
        }
        if self.arch_types_filter.is_empty() {
            return Err(InterventionError::invalid(
                "vessel_tree.arch_types_filter",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

/// Beam-adapter physics backend.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SofaBeamAdapter {
    pub friction: f64,
}

impl Default for SofaBeamAdapter {
    fn default() -> Self {
        Self { friction: 0.1 }
    }
}

impl SofaBeamAdapter {
    pub fn validate(&self) -> Result<(), InterventionError> {
        if !(self.friction.is_finite() && self.friction >= 0.0) {
            return Err(InterventionError::invalid(
                "simulation.friction",
                format!("must be finite and >= 0 (got {})", self.friction),
            ));
        }
        Ok(())
    }
}

/// 2D projection (fluoroscopy) sensor rendered with Pillow.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pillow {
    /// Images per second.
    pub image_frequency: f64,
    /// C-arm rotation about z then x, in degrees.
    pub image_rot_zx: [f64; 2],
}

impl Default for Pillow {
    fn default() -> Self {
        Self {
            image_frequency: 7.5,
            image_rot_zx: [0.0, 0.0],
        }
    }
}

impl Pillow {
    pub fn validate(&self) -> Result<(), InterventionError> {
        if !(self.image_frequency.is_finite() && self.image_frequency > 0.0) {
            return Err(InterventionError::invalid(
                "fluoroscopy.image_frequency",
                format!("must be finite and > 0 (got {})", self.image_frequency),
            ));
        }
        if self.image_rot_zx.iter().any(|a| !a.is_finite()) {
            return Err(InterventionError::invalid(
                "fluoroscopy.image_rot_zx",
                "angles must be finite",
            ));
        }
        Ok(())
    }
}

/// Target drawn at random on the centerlines of the listed branches.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CenterlineRandom {
    /// Distance (mm) at which the tip counts as having reached the target.
    pub threshold: f64,
    pub branches: Vec<Branch>,
}

impl Default for CenterlineRandom {
    fn default() -> Self {
        Self {
            threshold: 5.0,
            branches: vec![
                Branch::Lcca,
                Branch::Rcca,
                Branch::Lsa,
                Branch::Rsa,
                Branch::Bct,
                Branch::Co,
            ],
        }
    }
}

impl CenterlineRandom {
    pub fn validate(&self) -> Result<(), InterventionError> {
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(InterventionError::invalid(
                "target.threshold",
                format!("must be finite and > 0 (got {})", self.threshold),
            ));
        }
        if self.branches.is_empty() {
            return Err(InterventionError::invalid("target.branches", "must not be empty"));
        }
        Ok(())
    }
}

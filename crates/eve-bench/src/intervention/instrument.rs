//! Instruments that can be inserted into the vessel tree.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::device::{InvalidGeometryError, JWire, Segment};

/// Guidewire with a stiff shaft and a flexible, pre-bent distal part.
///
/// Units: mm, degrees for `tip_angle_deg`. The `flex_*` fields describe the
/// distal part of length `flex_length`; the tip arc is `tip_radius` × angle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AngledParams {
    pub name: String,
    pub velocity_limit: (f64, f64),
    pub length: f64,
    pub tip_radius: f64,
    pub tip_angle_deg: f64,
    pub diameter_outer: f64,
    pub diameter_inner: f64,
    pub young_modulus: f64,
    pub mass_density: f64,
    pub poisson_ratio: f64,
    pub collis_edges_per_mm: f64,
    pub visu_edges_per_mm: f64,
    pub flex_length: f64,
    pub flex_diameter_outer: f64,
    pub flex_diameter_inner: f64,
    pub flex_young_modulus: f64,
    pub flex_mass_density: f64,
    pub flex_poisson_ratio: f64,
    pub flex_collis_edges_per_mm: f64,
    pub flex_visu_edges_per_mm: f64,
    pub color: [f64; 3],
    /// Arc sampling step (mm) for the procedural tip mesh.
    pub arc_mesh_resolution: f64,
}

impl Default for AngledParams {
    fn default() -> Self {
        Self {
            name: "guidewire".to_string(),
            velocity_limit: (50.0, 3.14),
            length: 450.0,
            tip_radius: 12.1,
            tip_angle_deg: 0.4 * 180.0,
            diameter_outer: 0.89,
            diameter_inner: 0.0,
            young_modulus: 80e3,
            mass_density: 0.000021,
            poisson_ratio: 0.49,
            collis_edges_per_mm: 0.1,
            visu_edges_per_mm: 0.5,
            flex_length: 30.0,
            flex_diameter_outer: 0.7,
            flex_diameter_inner: 0.0,
            flex_young_modulus: 17e3,
            flex_mass_density: 0.000021,
            flex_poisson_ratio: 0.49,
            flex_collis_edges_per_mm: 2.0,
            flex_visu_edges_per_mm: 0.5,
            color: [0.0, 0.0, 0.0],
            arc_mesh_resolution: 0.1,
        }
    }
}

impl AngledParams {
    /// Arclength of the pre-bent tip, `tip_radius · tip_angle`.
    #[inline]
    pub fn tip_arc_length(&self) -> f64 {
        self.tip_radius * self.tip_angle_deg.to_radians()
    }

    pub fn validate(&self) -> Result<(), InvalidGeometryError> {
        if self.name.trim().is_empty() {
            return Err(InvalidGeometryError::EmptyName);
        }
        let positives = [
            ("length", self.length),
            ("tip_radius", self.tip_radius),
            ("diameter_outer", self.diameter_outer),
            ("young_modulus", self.young_modulus),
            ("mass_density", self.mass_density),
            ("flex_length", self.flex_length),
            ("flex_diameter_outer", self.flex_diameter_outer),
            ("flex_young_modulus", self.flex_young_modulus),
            ("flex_mass_density", self.flex_mass_density),
            ("arc_mesh_resolution", self.arc_mesh_resolution),
        ];
        let densities = [
            ("collis_edges_per_mm", self.collis_edges_per_mm),
            ("visu_edges_per_mm", self.visu_edges_per_mm),
            ("flex_collis_edges_per_mm", self.flex_collis_edges_per_mm),
            ("flex_visu_edges_per_mm", self.flex_visu_edges_per_mm),
        ];
        let non_negatives = [
            ("diameter_inner", self.diameter_inner),
            ("flex_diameter_inner", self.flex_diameter_inner),
            ("velocity_limit.0", self.velocity_limit.0),
            ("velocity_limit.1", self.velocity_limit.1),
        ];
        let others = [
            ("tip_angle_deg", self.tip_angle_deg),
            ("poisson_ratio", self.poisson_ratio),
            ("flex_poisson_ratio", self.flex_poisson_ratio),
        ];
        let all = positives
            .iter()
            .chain(&densities)
            .chain(&non_negatives)
            .chain(&others);
        for &(field, value) in all {
            if !value.is_finite() {
                return Err(InvalidGeometryError::NonFinite { field });
            }
        }
        for (field, value) in positives {
            if value <= 0.0 {
                return Err(InvalidGeometryError::NonPositive { field, value });
            }
        }
        for (field, value) in densities {
            if value <= 0.0 {
                return Err(InvalidGeometryError::NonPositiveDensity { field, value });
            }
        }
        for (field, value) in non_negatives {
            if value < 0.0 {
                return Err(InvalidGeometryError::Negative { field, value });
            }
        }
        if !(self.tip_angle_deg > 0.0 && self.tip_angle_deg <= 360.0) {
            return Err(InvalidGeometryError::TipAngle {
                value: self.tip_angle_deg.to_radians(),
            });
        }
        if self.flex_length >= self.length {
            return Err(InvalidGeometryError::TipLongerThanDevice {
                tip_length: self.flex_length,
                length: self.length,
            });
        }
        if self.diameter_inner > self.diameter_outer {
            return Err(InvalidGeometryError::InnerExceedsOuter {
                segment: Segment::Straight,
                inner: self.diameter_inner,
                outer: self.diameter_outer,
            });
        }
        if self.flex_diameter_inner > self.flex_diameter_outer {
            return Err(InvalidGeometryError::InnerExceedsOuter {
                segment: Segment::Tip,
                inner: self.flex_diameter_inner,
                outer: self.flex_diameter_outer,
            });
        }
        for value in [self.poisson_ratio, self.flex_poisson_ratio] {
            if !(value > 0.0 && value < 0.5) {
                return Err(InvalidGeometryError::PoissonRatio { value });
            }
        }
        for (channel, &value) in self.color.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(InvalidGeometryError::Color { channel, value });
            }
        }
        Ok(())
    }
}

/// Instrument handed to the simulation backend.
///
/// The J-wire variant carries the fully derived descriptor, so the backend
/// receives beam counts and key points rather than raw densities.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Instrument {
    Angled(AngledParams),
    JWire(JWire),
}

impl Instrument {
    pub fn name(&self) -> &str {
        match self {
            Instrument::Angled(p) => &p.name,
            Instrument::JWire(w) => w.name(),
        }
    }

    pub fn length(&self) -> f64 {
        match self {
            Instrument::Angled(p) => p.length,
            Instrument::JWire(w) => w.length(),
        }
    }

    /// (translation mm/s, rotation rad/s).
    pub fn velocity_limit(&self) -> (f64, f64) {
        match self {
            Instrument::Angled(p) => p.velocity_limit,
            Instrument::JWire(w) => w.velocity_limit(),
        }
    }

    /// A `JWire` is validated at construction; only `Angled` needs checking here.
    pub fn validate(&self) -> Result<(), InvalidGeometryError> {
        match self {
            Instrument::Angled(p) => p.validate(),
            Instrument::JWire(_) => Ok(()),
        }
    }
}

impl Default for Instrument {
    fn default() -> Self {
        Instrument::Angled(AngledParams::default())
    }
}

impl From<JWire> for Instrument {
    fn from(wire: JWire) -> Self {
        Instrument::JWire(wire)
    }
}

impl From<AngledParams> for Instrument {
    fn from(params: AngledParams) -> Self {
        Instrument::Angled(params)
    }
}

//! User-facing physical parameters of the J-wire and their validation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::InvalidGeometryError;
use super::jwire::JWire;
use super::segment::Segment;

/// Physical description of a two-segment guidewire (straight shaft + curved tip).
///
/// Units: lengths and diameters in mm, angles in rad, velocity limits in
/// mm/s and rad/s. Defaults describe the reference guidewire of the
/// aortic-arch benchmark.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JWireParams {
    pub name: String,
    /// (translation, rotation) speed limits.
    pub velocity_limit: (f64, f64),
    pub length: f64,
    pub tip_length: f64,
    /// Total angle subtended by the tip curvature.
    pub tip_angle: f64,
    pub tip_outer_diameter: f64,
    pub tip_inner_diameter: f64,
    pub straight_outer_diameter: f64,
    pub straight_inner_diameter: f64,
    pub poisson_ratio: f64,
    pub young_modulus_tip: f64,
    pub young_modulus_straight: f64,
    pub mass_density_tip: f64,
    pub mass_density_straight: f64,
    pub visu_edges_per_mm: f64,
    pub collis_edges_per_mm_tip: f64,
    pub collis_edges_per_mm_straight: f64,
    pub beams_per_mm_tip: f64,
    pub beams_per_mm_straight: f64,
    /// RGB in [0, 1].
    pub color: [f64; 3],
}

impl Default for JWireParams {
    fn default() -> Self {
        Self {
            name: "guidewire".to_string(),
            velocity_limit: (50.0, 3.14),
            length: 450.0,
            tip_length: 15.2,
            tip_angle: 0.4 * std::f64::consts::PI,
            tip_outer_diameter: 0.7,
            tip_inner_diameter: 0.0,
            straight_outer_diameter: 0.89,
            straight_inner_diameter: 0.0,
            poisson_ratio: 0.49,
            young_modulus_tip: 17e3,
            young_modulus_straight: 80e3,
            mass_density_tip: 0.000021,
            mass_density_straight: 0.000021,
            visu_edges_per_mm: 0.5,
            collis_edges_per_mm_tip: 2.0,
            collis_edges_per_mm_straight: 0.1,
            beams_per_mm_tip: 1.4,
            beams_per_mm_straight: 0.09,
            color: [0.0, 0.0, 0.0],
        }
    }
}

impl JWireParams {
    /// Validate and derive the discretized descriptor.
    #[inline]
    pub fn build(self) -> Result<JWire, InvalidGeometryError> {
        JWire::new(self)
    }

    /// Per-mm discretization densities, named as their fields.
    pub fn densities(&self) -> [(&'static str, f64); 5] {
        [
            ("visu_edges_per_mm", self.visu_edges_per_mm),
            ("collis_edges_per_mm_tip", self.collis_edges_per_mm_tip),
            ("collis_edges_per_mm_straight", self.collis_edges_per_mm_straight),
            ("beams_per_mm_tip", self.beams_per_mm_tip),
            ("beams_per_mm_straight", self.beams_per_mm_straight),
        ]
    }

    fn scalars(&self) -> [(&'static str, f64); 22] {
        let [d0, d1, d2, d3, d4] = self.densities();
        [
            ("velocity_limit.0", self.velocity_limit.0),
            ("velocity_limit.1", self.velocity_limit.1),
            ("length", self.length),
            ("tip_length", self.tip_length),
            ("tip_angle", self.tip_angle),
            ("tip_outer_diameter", self.tip_outer_diameter),
            ("tip_inner_diameter", self.tip_inner_diameter),
            ("straight_outer_diameter", self.straight_outer_diameter),
            ("straight_inner_diameter", self.straight_inner_diameter),
            ("poisson_ratio", self.poisson_ratio),
            ("young_modulus_tip", self.young_modulus_tip),
            ("young_modulus_straight", self.young_modulus_straight),
            ("mass_density_tip", self.mass_density_tip),
            ("mass_density_straight", self.mass_density_straight),
            d0,
            d1,
            d2,
            d3,
            d4,
            ("color.0", self.color[0]),
            ("color.1", self.color[1]),
            ("color.2", self.color[2]),
        ]
    }

    /// Check every range constraint; the first violation wins.
    pub fn validate(&self) -> Result<(), InvalidGeometryError> {
        if self.name.trim().is_empty() {
            return Err(InvalidGeometryError::EmptyName);
        }
        if let Some((field, _)) = self.scalars().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(InvalidGeometryError::NonFinite { field });
        }
        positive("length", self.length)?;
        positive("tip_length", self.tip_length)?;
        if self.tip_length > self.length {
            return Err(InvalidGeometryError::TipLongerThanDevice {
                tip_length: self.tip_length,
                length: self.length,
            });
        }
        if self.tip_angle <= 0.0 {
            return Err(InvalidGeometryError::TipAngle {
                value: self.tip_angle,
            });
        }
        cross_section(
            Segment::Straight,
            self.straight_outer_diameter,
            self.straight_inner_diameter,
        )?;
        cross_section(Segment::Tip, self.tip_outer_diameter, self.tip_inner_diameter)?;
        if !(self.poisson_ratio > 0.0 && self.poisson_ratio < 0.5) {
            return Err(InvalidGeometryError::PoissonRatio {
                value: self.poisson_ratio,
            });
        }
        positive("young_modulus_tip", self.young_modulus_tip)?;
        positive("young_modulus_straight", self.young_modulus_straight)?;
        positive("mass_density_tip", self.mass_density_tip)?;
        positive("mass_density_straight", self.mass_density_straight)?;
        for (field, value) in self.densities() {
            if value <= 0.0 {
                return Err(InvalidGeometryError::NonPositiveDensity { field, value });
            }
        }
        non_negative("velocity_limit.0", self.velocity_limit.0)?;
        non_negative("velocity_limit.1", self.velocity_limit.1)?;
        for (channel, &value) in self.color.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(InvalidGeometryError::Color { channel, value });
            }
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), InvalidGeometryError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(InvalidGeometryError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), InvalidGeometryError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(InvalidGeometryError::Negative { field, value })
    }
}

fn cross_section(segment: Segment, outer: f64, inner: f64) -> Result<(), InvalidGeometryError> {
    let (outer_field, inner_field) = match segment {
        Segment::Straight => ("straight_outer_diameter", "straight_inner_diameter"),
        Segment::Tip => ("tip_outer_diameter", "tip_inner_diameter"),
    };
    positive(outer_field, outer)?;
    non_negative(inner_field, inner)?;
    if inner > outer {
        return Err(InvalidGeometryError::InnerExceedsOuter {
            segment,
            inner,
            outer,
        });
    }
    Ok(())
}

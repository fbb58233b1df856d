//! Planar procedural rest shape of the J-wire.
//!
//! Model
//! - The straight segment runs along `+x` from the origin.
//! - The tip continues tangentially as a circular arc of radius
//!   `spire_diameter / 2`, bending toward `+y`, and subtends `tip_angle`.
//! - `z` is the spire height, which is zero for this planar device.

use nalgebra::{Point3, Vector3};

use super::cfg::{KEY_POINT_EPS, MAX_REST_SAMPLES};
use super::error::InvalidGeometryError;
use super::jwire::JWire;

impl JWire {
    /// Centerline point at arclength `s`; `None` outside `[0, length]` or for NaN.
    pub fn rest_point(&self, s: f64) -> Option<Point3<f64>> {
        if !(0.0..=self.length()).contains(&s) {
            return None;
        }
        let ls = self.straight_length();
        if s <= ls {
            return Some(Point3::new(s, 0.0, self.spire_height()));
        }
        let r = 0.5 * self.spire_diameter();
        let theta = (s - ls) / r;
        Some(Point3::new(
            ls + r * theta.sin(),
            r * (1.0 - theta.cos()),
            self.spire_height(),
        ))
    }

    /// Unit tangent of the centerline at arclength `s`.
    pub fn rest_tangent(&self, s: f64) -> Option<Vector3<f64>> {
        if !(0.0..=self.length()).contains(&s) {
            return None;
        }
        let ls = self.straight_length();
        if s <= ls {
            return Some(Vector3::x());
        }
        let theta = (s - ls) / (0.5 * self.spire_diameter());
        Some(Vector3::new(theta.cos(), theta.sin(), 0.0))
    }

    /// Uniformly sampled centerline from origin to tip end.
    ///
    /// Uses `max(1, ceil(samples_per_mm * length))` intervals and always
    /// includes the straight/tip boundary key point.
    pub fn rest_shape(
        &self,
        samples_per_mm: f64,
    ) -> Result<Vec<Point3<f64>>, InvalidGeometryError> {
        Ok(self
            .rest_arclengths(samples_per_mm)?
            .into_iter()
            .filter_map(|s| self.rest_point(s))
            .collect())
    }

    /// Arclength positions used by [`JWire::rest_shape`], ascending.
    ///
    /// Densities asking for more than ten million intervals are rejected.
    pub fn rest_arclengths(&self, samples_per_mm: f64) -> Result<Vec<f64>, InvalidGeometryError> {
        if !samples_per_mm.is_finite() {
            return Err(InvalidGeometryError::NonFinite {
                field: "samples_per_mm",
            });
        }
        if samples_per_mm <= 0.0 {
            return Err(InvalidGeometryError::NonPositiveDensity {
                field: "samples_per_mm",
                value: samples_per_mm,
            });
        }
        let length = self.length();
        let count = (samples_per_mm * length).ceil();
        if count > MAX_REST_SAMPLES as f64 {
            return Err(InvalidGeometryError::TooManyElements {
                field: "samples_per_mm",
                count,
            });
        }
        let intervals = (count as usize).max(1);
        let mut s: Vec<f64> = (0..=intervals)
            .map(|i| length * i as f64 / intervals as f64)
            .collect();
        let boundary = self.straight_length();
        let at = s.partition_point(|&x| x < boundary);
        let present = [at.checked_sub(1), Some(at)]
            .into_iter()
            .flatten()
            .filter_map(|i| s.get(i))
            .any(|&x| (x - boundary).abs() <= KEY_POINT_EPS);
        if !present {
            s.insert(at, boundary);
        }
        Ok(s)
    }
}

//! J-wire descriptor: discretization parameters derived from physical inputs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::InvalidGeometryError;
use super::params::JWireParams;
use super::segment::{Segment, SegmentProps};

/// Fully derived, immutable geometry/discretization record of a J-shaped guidewire.
///
/// Invariants (established by [`JWire::new`]):
/// - `straight_length + tip_length == length`, `0 <= straight_length`.
/// - Every count is `ceil(density * segment_length)`.
/// - `key_points == [0, straight_length, length]` (non-decreasing).
/// - Ordered pairs are `[straight, tip]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "JWireParams"))]
pub struct JWire {
    #[cfg_attr(feature = "serde", serde(flatten))]
    params: JWireParams,
    straight_length: f64,
    spire_diameter: f64,
    spire_height: f64,
    num_edges: u32,
    num_edges_collis: [u32; 2],
    density_of_beams: [u32; 2],
    key_points: [f64; 3],
    young_modulus: f64,
    young_modulus_extremity: f64,
    radius: f64,
    radius_extremity: f64,
    inner_radius: f64,
    inner_radius_extremity: f64,
    mass_density: f64,
    mass_density_extremity: f64,
    is_a_procedural_shape: bool,
    mesh_path: String,
}

impl JWire {
    /// The device is planar: the tip spire has no helical pitch.
    pub const SPIRE_HEIGHT: f64 = 0.0;
    /// Rest shape is generated from spire parameters, never loaded from a mesh.
    pub const IS_A_PROCEDURAL_SHAPE: bool = true;
    pub const MESH_PATH: &'static str = "";

    /// Validate `params` and derive every discretization field in one step.
    ///
    /// Fails without producing a partial descriptor when the geometry is
    /// ill-defined (see [`InvalidGeometryError`]).
    pub fn new(params: JWireParams) -> Result<Self, InvalidGeometryError> {
        params.validate()?;

        let straight_length = params.length - params.tip_length;
        let spire_diameter = 2.0 * params.tip_length / params.tip_angle;
        if !spire_diameter.is_finite() {
            return Err(InvalidGeometryError::TipAngle {
                value: params.tip_angle,
            });
        }
        let num_edges = ceil_count("num_edges", params.visu_edges_per_mm, params.length)?;
        let num_edges_collis_tip = ceil_count(
            "num_edges_collis_tip",
            params.collis_edges_per_mm_tip,
            params.tip_length,
        )?;
        let num_edges_collis_straight = ceil_count(
            "num_edges_collis_straight",
            params.collis_edges_per_mm_straight,
            straight_length,
        )?;
        let beams_tip = ceil_count("beams_tip", params.beams_per_mm_tip, params.tip_length)?;
        let beams_straight = ceil_count(
            "beams_straight",
            params.beams_per_mm_straight,
            straight_length,
        )?;

        Ok(Self {
            straight_length,
            spire_diameter,
            spire_height: Self::SPIRE_HEIGHT,
            num_edges,
            num_edges_collis: [num_edges_collis_straight, num_edges_collis_tip],
            density_of_beams: [beams_straight, beams_tip],
            key_points: [0.0, straight_length, params.length],
            young_modulus: params.young_modulus_straight,
            young_modulus_extremity: params.young_modulus_tip,
            radius: params.straight_outer_diameter / 2.0,
            radius_extremity: params.tip_outer_diameter / 2.0,
            inner_radius: params.straight_inner_diameter / 2.0,
            inner_radius_extremity: params.tip_inner_diameter / 2.0,
            mass_density: params.mass_density_straight,
            mass_density_extremity: params.mass_density_tip,
            is_a_procedural_shape: Self::IS_A_PROCEDURAL_SHAPE,
            mesh_path: Self::MESH_PATH.to_string(),
            params,
        })
    }

    /// Inputs the descriptor was derived from.
    #[inline]
    pub fn params(&self) -> &JWireParams {
        &self.params
    }
    #[inline]
    pub fn name(&self) -> &str {
        &self.params.name
    }
    #[inline]
    pub fn velocity_limit(&self) -> (f64, f64) {
        self.params.velocity_limit
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.params.length
    }
    #[inline]
    pub fn tip_length(&self) -> f64 {
        self.params.tip_length
    }
    #[inline]
    pub fn tip_angle(&self) -> f64 {
        self.params.tip_angle
    }
    #[inline]
    pub fn poisson_ratio(&self) -> f64 {
        self.params.poisson_ratio
    }
    #[inline]
    pub fn color(&self) -> [f64; 3] {
        self.params.color
    }
    #[inline]
    pub fn straight_length(&self) -> f64 {
        self.straight_length
    }
    /// Diameter of the circle whose arc of length `tip_length` subtends `tip_angle`.
    #[inline]
    pub fn spire_diameter(&self) -> f64 {
        self.spire_diameter
    }
    #[inline]
    pub fn spire_height(&self) -> f64 {
        self.spire_height
    }
    /// Visualization edges over the whole device.
    #[inline]
    pub fn num_edges(&self) -> u32 {
        self.num_edges
    }
    /// Collision edges `[straight, tip]`.
    #[inline]
    pub fn num_edges_collis(&self) -> [u32; 2] {
        self.num_edges_collis
    }
    /// FEM beams `[straight, tip]`.
    #[inline]
    pub fn density_of_beams(&self) -> [u32; 2] {
        self.density_of_beams
    }
    /// `[origin, straight/tip boundary, tip end]` along the arclength.
    #[inline]
    pub fn key_points(&self) -> [f64; 3] {
        self.key_points
    }
    #[inline]
    pub fn young_modulus(&self) -> f64 {
        self.young_modulus
    }
    #[inline]
    pub fn young_modulus_extremity(&self) -> f64 {
        self.young_modulus_extremity
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
    #[inline]
    pub fn radius_extremity(&self) -> f64 {
        self.radius_extremity
    }
    #[inline]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }
    #[inline]
    pub fn inner_radius_extremity(&self) -> f64 {
        self.inner_radius_extremity
    }
    #[inline]
    pub fn mass_density(&self) -> f64 {
        self.mass_density
    }
    #[inline]
    pub fn mass_density_extremity(&self) -> f64 {
        self.mass_density_extremity
    }
    #[inline]
    pub fn is_a_procedural_shape(&self) -> bool {
        self.is_a_procedural_shape
    }
    #[inline]
    pub fn mesh_path(&self) -> &str {
        &self.mesh_path
    }

    /// Material and discretization record of one segment.
    pub fn segment(&self, segment: Segment) -> SegmentProps {
        let i = segment.index();
        match segment {
            Segment::Straight => SegmentProps {
                segment,
                start: self.key_points[0],
                end: self.key_points[1],
                young_modulus: self.young_modulus,
                radius: self.radius,
                inner_radius: self.inner_radius,
                mass_density: self.mass_density,
                collis_edges: self.num_edges_collis[i],
                beams: self.density_of_beams[i],
            },
            Segment::Tip => SegmentProps {
                segment,
                start: self.key_points[1],
                end: self.key_points[2],
                young_modulus: self.young_modulus_extremity,
                radius: self.radius_extremity,
                inner_radius: self.inner_radius_extremity,
                mass_density: self.mass_density_extremity,
                collis_edges: self.num_edges_collis[i],
                beams: self.density_of_beams[i],
            },
        }
    }

    /// Segment owning arclength `s`; `None` outside `[0, length]`.
    ///
    /// The straight segment owns the boundary key point. A zero-length
    /// straight segment owns nothing.
    pub fn segment_at(&self, s: f64) -> Option<Segment> {
        let [origin, boundary, end] = self.key_points;
        if !(origin..=end).contains(&s) {
            return None;
        }
        if boundary > origin && s <= boundary {
            Some(Segment::Straight)
        } else {
            Some(Segment::Tip)
        }
    }
}

impl TryFrom<JWireParams> for JWire {
    type Error = InvalidGeometryError;

    fn try_from(params: JWireParams) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}

/// `ceil(per_mm * length)` as an element count.
fn ceil_count(
    field: &'static str,
    per_mm: f64,
    length: f64,
) -> Result<u32, InvalidGeometryError> {
    let count = (per_mm * length).ceil();
    if count > u32::MAX as f64 {
        return Err(InvalidGeometryError::TooManyElements { field, count });
    }
    Ok(count as u32)
}

//! J-wire descriptor bindings.

use crate::common::{jwire_from_py, map_geometry_err};
use eve_bench::device::{JWire, Segment};
use pyo3::prelude::*;
use pyo3::types::PyDict;

fn descriptor_dict(py: Python<'_>, wire: &JWire) -> PyResult<PyObject> {
    let d = PyDict::new(py);
    d.set_item("name", wire.name())?;
    d.set_item("velocity_limit", wire.velocity_limit())?;
    d.set_item("length", wire.length())?;
    d.set_item("tip_length", wire.tip_length())?;
    d.set_item("straight_length", wire.straight_length())?;
    d.set_item("spire_diameter", wire.spire_diameter())?;
    d.set_item("spire_height", wire.spire_height())?;
    d.set_item("poisson_ratio", wire.poisson_ratio())?;
    d.set_item("young_modulus", wire.young_modulus())?;
    d.set_item("young_modulus_extremity", wire.young_modulus_extremity())?;
    d.set_item("radius", wire.radius())?;
    d.set_item("radius_extremity", wire.radius_extremity())?;
    d.set_item("inner_radius", wire.inner_radius())?;
    d.set_item("inner_radius_extremity", wire.inner_radius_extremity())?;
    d.set_item("mass_density", wire.mass_density())?;
    d.set_item("mass_density_extremity", wire.mass_density_extremity())?;
    d.set_item("num_edges", wire.num_edges())?;
    d.set_item("num_edges_collis", wire.num_edges_collis().to_vec())?;
    d.set_item("density_of_beams", wire.density_of_beams().to_vec())?;
    d.set_item("key_points", wire.key_points().to_vec())?;
    d.set_item("is_a_procedural_shape", wire.is_a_procedural_shape())?;
    d.set_item("mesh_path", wire.mesh_path())?;
    let [r, g, b] = wire.color();
    d.set_item("color", (r, g, b))?;
    Ok(d.into())
}

/// Derived descriptor of the reference guidewire.
#[pyfunction]
pub fn jwire_default(py: Python<'_>) -> PyResult<PyObject> {
    descriptor_dict(py, &jwire_from_py(None)?)
}

/// Derived descriptor with keyword overrides of the physical parameters.
#[pyfunction]
#[pyo3(signature = (**overrides))]
pub fn jwire_descriptor(py: Python<'_>, overrides: Option<&PyDict>) -> PyResult<PyObject> {
    descriptor_dict(py, &jwire_from_py(overrides)?)
}

/// Segment name ("straight" / "tip") owning arclength `s`, or None off the device.
#[pyfunction]
#[pyo3(signature = (s, **overrides))]
pub fn jwire_segment_at(s: f64, overrides: Option<&PyDict>) -> PyResult<Option<String>> {
    let wire = jwire_from_py(overrides)?;
    Ok(wire.segment_at(s).map(|seg: Segment| seg.to_string()))
}

/// Sampled planar rest shape as `[(x, y, z), ...]`.
#[pyfunction]
#[pyo3(signature = (samples_per_mm, **overrides))]
pub fn jwire_rest_shape(
    samples_per_mm: f64,
    overrides: Option<&PyDict>,
) -> PyResult<Vec<(f64, f64, f64)>> {
    let wire = jwire_from_py(overrides)?;
    let pts = wire.rest_shape(samples_per_mm).map_err(map_geometry_err)?;
    Ok(pts.into_iter().map(|p| (p.x, p.y, p.z)).collect())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(jwire_default, m)?)?;
    m.add_function(wrap_pyfunction!(jwire_descriptor, m)?)?;
    m.add_function(wrap_pyfunction!(jwire_segment_at, m)?)?;
    m.add_function(wrap_pyfunction!(jwire_rest_shape, m)?)?;
    Ok(())
}

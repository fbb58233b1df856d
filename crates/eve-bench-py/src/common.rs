use eve_bench::device::{InvalidGeometryError, JWire, JWireParams};
use eve_bench::intervention::InterventionError;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Start from the reference wire and apply keyword overrides.
pub fn params_from_py(overrides: Option<&PyDict>) -> PyResult<JWireParams> {
    let mut p = JWireParams::default();
    let Some(overrides) = overrides else {
        return Ok(p);
    };
    for (key, value) in overrides.iter() {
        let key: String = key.extract()?;
        match key.as_str() {
            "name" => p.name = value.extract()?,
            "velocity_limit" => p.velocity_limit = value.extract()?,
            "length" => p.length = value.extract()?,
            "tip_length" => p.tip_length = value.extract()?,
            "tip_angle" => p.tip_angle = value.extract()?,
            "tip_outer_diameter" => p.tip_outer_diameter = value.extract()?,
            "tip_inner_diameter" => p.tip_inner_diameter = value.extract()?,
            "straight_outer_diameter" => p.straight_outer_diameter = value.extract()?,
            "straight_inner_diameter" => p.straight_inner_diameter = value.extract()?,
            "poisson_ratio" => p.poisson_ratio = value.extract()?,
            "young_modulus_tip" => p.young_modulus_tip = value.extract()?,
            "young_modulus_straight" => p.young_modulus_straight = value.extract()?,
            "mass_density_tip" => p.mass_density_tip = value.extract()?,
            "mass_density_straight" => p.mass_density_straight = value.extract()?,
            "visu_edges_per_mm" => p.visu_edges_per_mm = value.extract()?,
            "collis_edges_per_mm_tip" => p.collis_edges_per_mm_tip = value.extract()?,
            "collis_edges_per_mm_straight" => p.collis_edges_per_mm_straight = value.extract()?,
            "beams_per_mm_tip" => p.beams_per_mm_tip = value.extract()?,
            "beams_per_mm_straight" => p.beams_per_mm_straight = value.extract()?,
            "color" => {
                let (r, g, b): (f64, f64, f64) = value.extract()?;
                p.color = [r, g, b];
            }
            other => {
                return Err(PyValueError::new_err(format!(
                    "unknown J-wire parameter '{other}'"
                )))
            }
        }
    }
    Ok(p)
}

pub fn jwire_from_py(overrides: Option<&PyDict>) -> PyResult<JWire> {
    JWire::new(params_from_py(overrides)?).map_err(map_geometry_err)
}

pub fn map_geometry_err(err: InvalidGeometryError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn map_intervention_err(err: InterventionError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

//! Environment configuration bindings (JSON out, so Python can hand the
//! record straight to the simulation layer).

use crate::common::{jwire_from_py, map_intervention_err};
use eve_bench::intervention::ArchVarietyImageV2;
use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// ArchVarietyImageV2 config as JSON. Passing `jwire=True` swaps the angled
/// instrument for the J-wire described by `overrides`.
#[pyfunction]
#[pyo3(signature = (
    episodes_between_arch_change = 1,
    stop_instrument_at_tree_end = true,
    normalize_action = false,
    jwire = false,
    **overrides
))]
pub fn arch_variety_image_v2_json(
    episodes_between_arch_change: u32,
    stop_instrument_at_tree_end: bool,
    normalize_action: bool,
    jwire: bool,
    overrides: Option<&PyDict>,
) -> PyResult<String> {
    let mut env = ArchVarietyImageV2::new(
        episodes_between_arch_change,
        stop_instrument_at_tree_end,
        normalize_action,
    )
    .map_err(map_intervention_err)?;
    if jwire {
        env = env
            .with_instrument(jwire_from_py(overrides)?)
            .map_err(map_intervention_err)?;
    }
    serde_json::to_string(&env).map_err(|err| PyRuntimeError::new_err(err.to_string()))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(arch_variety_image_v2_json, m)?)?;
    Ok(())
}

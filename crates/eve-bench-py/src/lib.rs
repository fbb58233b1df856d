//! PyO3 bindings for selected `eve_bench` functions.
//!
//! Notes
//! - Keep bindings thin and predictable: inputs are keyword dicts of
//!   `JWireParams` field names, outputs are plain dicts or JSON strings.
//! - Validation happens in Rust; failures surface as `ValueError`.

use pyo3::prelude::*;

mod common;
mod device;
mod env;

#[pymodule]
fn eve_bench_native(_py: Python, m: &PyModule) -> PyResult<()> {
    device::register(m)?;
    env::register(m)?;
    m.add("__version__", eve_bench::VERSION)?;
    Ok(())
}

//! FFI glue shared by the Python binding surface.
//!
//! Everything here is gated behind the `python-bindings` feature: array
//! extraction from numpy/pandas/sequence inputs and assembly of a fully
//! configured [`GrowthModel`] from Python-friendly optional arguments.
//! Native Rust callers never need this module.

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::growth::{
    core::{calibration::Calibration, options::VFIOptions, technology::CobbDouglas},
    models::vfi::GrowthModel,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Assemble a validated Cobb–Douglas growth model from optional
/// Python-side arguments, falling back to the documented defaults.
#[cfg(feature = "python-bindings")]
#[allow(clippy::too_many_arguments)]
pub fn build_growth_model<'py>(
    py: Python<'py>, discount: f64, depreciation: f64, risk_aversion: f64, technology_level: f64,
    capital_share: f64, tolerance: Option<f64>, max_iterations: Option<usize>,
    investment_floor: Option<f64>, consumption_floor: Option<f64>, payoff_sentinel: Option<f64>,
    initial_value: Option<&Bound<'py, PyAny>>, verbose: Option<bool>,
) -> PyResult<GrowthModel<CobbDouglas>> {
    let calibration =
        Calibration::new(discount, depreciation, risk_aversion, technology_level, capital_share)?;

    let defaults = VFIOptions::default();

    let initial_value = match initial_value {
        Some(raw) => {
            let arr = extract_f64_array(py, raw)?;
            let slice = arr.as_slice().map_err(|_| {
                pyo3::exceptions::PyValueError::new_err(
                    "initial_value must be a 1-D contiguous float64 array or sequence",
                )
            })?;
            Some(Array1::from(slice.to_vec()))
        }
        None => None,
    };

    let options = VFIOptions::new(
        tolerance.unwrap_or(defaults.tolerance),
        max_iterations.unwrap_or(defaults.max_iterations),
        investment_floor.unwrap_or(defaults.investment_floor),
        consumption_floor.unwrap_or(defaults.consumption_floor),
        payoff_sentinel.unwrap_or(defaults.payoff_sentinel),
        initial_value,
        verbose.unwrap_or(defaults.verbose),
    )?;

    Ok(GrowthModel::new(calibration, CobbDouglas, options))
}

//! Shared validators for solver and simulation inputs.
//!
//! Free functions returning typed [`VFIError`]s, used wherever an input can
//! only be checked against runtime context (e.g. the grid size is unknown
//! when options are constructed, so the initial value vector is validated
//! here at solve time).
use crate::growth::errors::{VFIError, VFIResult};
use ndarray::ArrayView1;

/// Validate an initial value-function vector against the grid size.
///
/// # Rules
/// - Exactly one entry per grid point.
/// - Every entry finite.
///
/// # Errors
/// - [`VFIError::InvalidValueLength`] on a length mismatch.
/// - [`VFIError::NonFiniteValueEntry`] for the first NaN/±inf entry.
pub fn validate_initial_value(value: ArrayView1<'_, f64>, n: usize) -> VFIResult<()> {
    if value.len() != n {
        return Err(VFIError::InvalidValueLength { expected: n, actual: value.len() });
    }
    for (index, &entry) in value.iter().enumerate() {
        if !entry.is_finite() {
            return Err(VFIError::NonFiniteValueEntry { index, value: entry });
        }
    }
    Ok(())
}

/// Validate a simulation horizon.
///
/// # Errors
/// - [`VFIError::InvalidHorizon`] if `horizon == 0`.
pub fn validate_horizon(horizon: usize) -> VFIResult<()> {
    if horizon == 0 {
        return Err(VFIError::InvalidHorizon { horizon });
    }
    Ok(())
}

/// Validate the starting capital of a simulated path.
///
/// # Errors
/// - [`VFIError::NonFiniteInitialCapital`] if the value is NaN/±inf.
pub fn validate_initial_capital(initial_capital: f64) -> VFIResult<()> {
    if !initial_capital.is_finite() {
        return Err(VFIError::NonFiniteInitialCapital { value: initial_capital });
    }
    Ok(())
}

//! Errors for the growth-model VFI engine (grid/configuration validation,
//! feasibility degeneracy, interpolation, and simulation inputs).
//!
//! This module defines a single error type, [`VFIError`], used across the
//! Rust core and the optional Python-facing API. It implements
//! `Display`/`Error` and converts to `PyErr` when the `python-bindings`
//! feature is enabled.
//!
//! ## Conventions
//! - **Indices are 0-based** (grid index `i` is a state, `j` an action).
//! - Configuration problems are rejected **before** iteration begins;
//!   the Bellman loop itself never raises.
//! - Hitting the iteration cap without convergence is **not** an error; it
//!   is reported through `SolveStatus::MaxIterationsReached` in the result
//!   bundle and left to the caller to judge.
#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for VFI operations that may produce [`VFIError`].
pub type VFIResult<T> = Result<T, VFIError>;

/// Unified error type for the growth-model VFI engine.
///
/// Covers capital-grid construction, calibration and numerical-option
/// validation, value-vector shape checks, interpolation-node checks,
/// feasibility degeneracy, and simulation inputs. Implements
/// `Display`/`Error` and converts to a Python `ValueError` at PyO3
/// boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum VFIError {
    // ---- Capital grid ----
    /// Grid bounds are not finite, not ordered, or not strictly positive.
    InvalidGridBounds { lower: f64, upper: f64, reason: &'static str },

    /// Fewer than two grid points were requested.
    TooFewGridPoints { n: usize },

    // ---- Calibration ----
    /// An economic scalar is outside its admissible range.
    InvalidCalibration { name: &'static str, value: f64, reason: &'static str },

    // ---- Numerical options ----
    /// Convergence tolerance must be finite and > 0.
    InvalidTolerance { value: f64 },

    /// Iteration cap must be > 0.
    InvalidMaxIterations { value: usize },

    /// Investment floor must be finite and >= 0.
    InvalidInvestmentFloor { value: f64 },

    /// Consumption floor must be finite and > 0.
    InvalidConsumptionFloor { value: f64 },

    /// Payoff sentinel must be finite and < 0.
    InvalidPayoffSentinel { value: f64, reason: &'static str },

    // ---- Value-function vectors ----
    /// A value vector does not have one entry per grid point.
    InvalidValueLength { expected: usize, actual: usize },

    /// A value-vector entry is NaN/±inf.
    NonFiniteValueEntry { index: usize, value: f64 },

    // ---- Interpolation ----
    /// Interpolation nodes are unusable (mismatched lengths, too short, or
    /// not strictly increasing).
    InvalidInterpolationNodes { reason: &'static str },

    // ---- Feasibility ----
    /// No feasible next-capital choice exists from some state: every action
    /// violates the investment floor or the budget-implied upper bound.
    DegenerateState { state_index: usize, capital: f64 },

    // ---- Simulation ----
    /// Simulation horizon must be >= 1.
    InvalidHorizon { horizon: usize },

    /// Initial capital for a simulated path must be finite.
    NonFiniteInitialCapital { value: f64 },
}

impl std::error::Error for VFIError {}

impl std::fmt::Display for VFIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Capital grid ----
            VFIError::InvalidGridBounds { lower, upper, reason } => {
                write!(f, "Invalid capital grid bounds [{lower}, {upper}]: {reason}")
            }
            VFIError::TooFewGridPoints { n } => {
                write!(f, "Capital grid needs at least 2 points; got {n}.")
            }
            // ---- Calibration ----
            VFIError::InvalidCalibration { name, value, reason } => {
                write!(f, "Invalid calibration: {name} = {value}. {reason}")
            }
            // ---- Numerical options ----
            VFIError::InvalidTolerance { value } => {
                write!(f, "Convergence tolerance must be finite and > 0; got {value}.")
            }
            VFIError::InvalidMaxIterations { value } => {
                write!(f, "Maximum iteration count must be > 0; got {value}.")
            }
            VFIError::InvalidInvestmentFloor { value } => {
                write!(f, "Investment floor must be finite and >= 0; got {value}.")
            }
            VFIError::InvalidConsumptionFloor { value } => {
                write!(f, "Consumption floor must be finite and > 0; got {value}.")
            }
            VFIError::InvalidPayoffSentinel { value, reason } => {
                write!(f, "Invalid payoff sentinel {value}: {reason}")
            }
            // ---- Value-function vectors ----
            VFIError::InvalidValueLength { expected, actual } => {
                write!(
                    f,
                    "Value vector must have one entry per grid point ({expected}); got {actual}."
                )
            }
            VFIError::NonFiniteValueEntry { index, value } => {
                write!(f, "Value-vector entry at index {index} is non-finite: {value}")
            }
            // ---- Interpolation ----
            VFIError::InvalidInterpolationNodes { reason } => {
                write!(f, "Invalid interpolation nodes: {reason}")
            }
            // ---- Feasibility ----
            VFIError::DegenerateState { state_index, capital } => {
                write!(
                    f,
                    "No feasible next-capital choice from state {state_index} \
                     (capital = {capital}); every action violates the investment \
                     floor or the budget-implied upper bound."
                )
            }
            // ---- Simulation ----
            VFIError::InvalidHorizon { horizon } => {
                write!(f, "Simulation horizon must be >= 1; got {horizon}.")
            }
            VFIError::NonFiniteInitialCapital { value } => {
                write!(f, "Initial capital must be finite; got {value}.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<VFIError> for PyErr {
    fn from(err: VFIError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

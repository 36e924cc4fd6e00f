//! rust_growth — deterministic growth-model solvers with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the value function iteration solver to Python via the
//! `_rust_growth` extension module. When the `python-bindings` feature is
//! enabled, this module defines the Python-facing classes and submodules
//! used by the `rust_growth` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules ([`growth`] and [`simulation`]) as the
//!   public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_rust_growth` Python extension.
//! - Register the `growth_models` submodule under `rust_growth` so that
//!   dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror the
//!   invariants and signatures of their Rust counterparts
//!   ([`GrowthModel`](growth::GrowthModel), [`VFISolution`](growth::VFISolution)).
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_rust_growth.growth_models` and are
//!   typically wrapped by thin pure-Python facades in the top-level
//!   `rust_growth` package.
//! - Errors from core Rust code are propagated as
//!   [`VFIError`](growth::VFIError) internally and converted to `PyErr`
//!   values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_rust_growth` module defined
//!   here and wraps its classes in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the integration suite under `tests/`; smoke tests on the Python
//!   side verify the bindings construct, solve, and simulate correctly.

pub mod growth;
pub mod simulation;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    growth::{
        core::{grid::CapitalGrid, technology::CobbDouglas},
        models::vfi::{GrowthModel, VFISolution},
    },
    utils::build_growth_model,
};

/// GrowthSolver — Python-facing wrapper for the VFI growth-model solver.
///
/// Purpose
/// -------
/// Expose the [`GrowthModel`] API to Python callers while preserving the
/// core Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Build a Cobb–Douglas [`GrowthModel`] from Python-friendly keyword
///   arguments with the documented defaults.
/// - Provide a `solve` method that builds a capital grid and delegates to
///   the core implementation, returning a [`GrowthSolution`].
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `GrowthSolver(discount, depreciation, risk_aversion, technology_level,
/// capital_share, ...)`; the numerical options (`tolerance`,
/// `max_iterations`, `investment_floor`, `consumption_floor`,
/// `payoff_sentinel`, `initial_value`, `verbose`) default as in
/// [`VFIOptions::default`](growth::core::VFIOptions).
///
/// Fields
/// ------
/// - `inner`: [`GrowthModel`]
///   Fully configured model with validated calibration and options.
///
/// Invariants
/// ----------
/// - `inner` is always a well-formed model created through
///   [`build_growth_model`]; calibration and options satisfy their
///   documented constraints.
///
/// Notes
/// -----
/// - Native Rust callers should use [`GrowthModel`] directly; this type
///   exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_growth.growth_models")]
pub struct GrowthSolver {
    /// Underlying Rust growth model.
    pub inner: GrowthModel<CobbDouglas>,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl GrowthSolver {
    #[new]
    #[pyo3(
        signature = (
            discount,
            depreciation,
            risk_aversion,
            technology_level,
            capital_share,
            tolerance = None,
            max_iterations = None,
            investment_floor = None,
            consumption_floor = None,
            payoff_sentinel = None,
            initial_value = None,
            verbose = None,
        ),
        text_signature = "(discount, depreciation, risk_aversion, technology_level, \
                          capital_share, /, tolerance=None, max_iterations=None, \
                          investment_floor=None, consumption_floor=None, \
                          payoff_sentinel=None, initial_value=None, verbose=None)"
    )]
    #[allow(clippy::too_many_arguments)]
    pub fn new<'py>(
        py: Python<'py>, discount: f64, depreciation: f64, risk_aversion: f64,
        technology_level: f64, capital_share: f64, tolerance: Option<f64>,
        max_iterations: Option<usize>, investment_floor: Option<f64>,
        consumption_floor: Option<f64>, payoff_sentinel: Option<f64>,
        initial_value: Option<&Bound<'py, PyAny>>, verbose: Option<bool>,
    ) -> PyResult<Self> {
        let inner = build_growth_model(
            py,
            discount,
            depreciation,
            risk_aversion,
            technology_level,
            capital_share,
            tolerance,
            max_iterations,
            investment_floor,
            consumption_floor,
            payoff_sentinel,
            initial_value,
            verbose,
        )?;
        Ok(GrowthSolver { inner })
    }

    #[pyo3(
        signature = (lower, upper, points),
        text_signature = "(self, lower, upper, points)"
    )]
    pub fn solve(&self, lower: f64, upper: f64, points: usize) -> PyResult<GrowthSolution> {
        let grid = CapitalGrid::build(lower, upper, points)?;
        let solution = self.inner.solve(&grid)?;
        Ok(GrowthSolution { inner: solution })
    }
}

/// GrowthSolution — solved value function, policy, and diagnostics.
///
/// Purpose
/// -------
/// Provide Python access to the result bundle of a VFI solve without
/// re-exposing internal validators.
///
/// Key behaviors
/// -------------
/// - Expose the grid, value function, policy (index and capital form),
///   consumption, iteration count, and convergence flag as copy-on-access
///   properties.
/// - Provide `simulate(initial_capital, horizon)` forwarding to the path
///   simulator.
///
/// Parameters
/// ----------
/// Instances are constructed internally by [`GrowthSolver::solve`] and are
/// not created directly by user code.
///
/// Fields
/// ------
/// - `inner`: [`VFISolution`]
///   Rust-side container holding the full solve outcome.
///
/// Performance
/// -----------
/// - Getter methods allocate only when converting `ndarray` vectors into
///   heap-allocated `Vec<f64>` for Python consumption.
///
/// Notes
/// -----
/// - Rust callers should use [`VFISolution`] directly; this wrapper exists
///   solely for the PyO3 binding.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_growth.growth_models")]
pub struct GrowthSolution {
    /// Underlying Rust solve result.
    pub inner: VFISolution,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl GrowthSolution {
    #[getter]
    pub fn grid(&self) -> Vec<f64> {
        self.inner.grid.points.to_vec()
    }

    #[getter]
    pub fn value(&self) -> Vec<f64> {
        self.inner.value.to_vec()
    }

    #[getter]
    pub fn policy(&self) -> Vec<f64> {
        self.inner.policy_next_capital.to_vec()
    }

    #[getter]
    pub fn policy_indices(&self) -> Vec<usize> {
        self.inner.policy_indices.to_vec()
    }

    #[getter]
    pub fn consumption(&self) -> Vec<f64> {
        self.inner.consumption.to_vec()
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.converged()
    }

    #[pyo3(
        signature = (initial_capital, horizon),
        text_signature = "(self, initial_capital, horizon)"
    )]
    pub fn simulate(&self, initial_capital: f64, horizon: usize) -> PyResult<Vec<f64>> {
        let path = self.inner.simulate(initial_capital, horizon)?;
        Ok(path.to_vec())
    }
}

/// _rust_growth — PyO3 module initializer for the Python extension.
///
/// Registers the `growth_models` submodule under the parent module and adds
/// it to `sys.modules` so dotted imports work from Python. Invoked
/// automatically by Python on import; not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_growth<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let growth_models_mod = PyModule::new(_py, "growth_models")?;
    growth_models(_py, m, &growth_models_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_growth.growth_models", growth_models_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn growth_models<'py>(
    _py: Python, rust_growth: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<GrowthSolver>()?;
    m.add_class::<GrowthSolution>()?;
    rust_growth.add_submodule(m)?;
    Ok(())
}

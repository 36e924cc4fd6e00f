//! models — user-facing growth-model solvers built on the core primitives.
//!
//! Purpose
//! -------
//! Expose the model-level API: bundle a [`Calibration`], a
//! [`GrowthTechnology`] implementation, and [`VFIOptions`] into a
//! [`GrowthModel`] and solve it on a [`CapitalGrid`] by value function
//! iteration, returning a [`VFISolution`].
//!
//! Key behaviors
//! -------------
//! - Run the iteration loop to its terminal state ([`SolveStatus`]) and
//!   extract the value function, the argmax policy in index and capital
//!   form, and the budget-implied consumption.
//! - Treat the iteration cap as a reported status, never as an error.
//!
//! Conventions
//! -----------
//! - Solvers take the grid as an argument rather than owning it, so one
//!   configured model can be solved on several grids.
//! - Per-iteration progress logging is available behind the `obs_slog`
//!   feature and the `verbose` option; the default build is silent.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`vfi`] cover convergence, idempotence at the fixed
//!   point, iteration-cap status, budget consistency of the extracted
//!   policy, and error propagation. Accuracy against the closed-form
//!   full-depreciation policy lives in the integration suite.
//!
//! [`Calibration`]: crate::growth::core::Calibration
//! [`GrowthTechnology`]: crate::growth::core::GrowthTechnology
//! [`VFIOptions`]: crate::growth::core::VFIOptions
//! [`CapitalGrid`]: crate::growth::core::CapitalGrid

pub mod vfi;

pub use self::vfi::{GrowthModel, SolveStatus, VFISolution};

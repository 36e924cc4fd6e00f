//! growth — deterministic neoclassical growth stack: core numerics, solver,
//! and errors.
//!
//! Purpose
//! -------
//! Provide a cohesive layer for solving the deterministic neoclassical
//! growth model by discretized value function iteration: capital grids,
//! calibration and options, the pluggable technology trait, the
//! feasibility-masked payoff grid, the Bellman operator, the user-facing
//! solver, and shared error types under a single namespace. This is the
//! surface most consumers (including Python bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect the numerical building blocks in [`core`]: grids,
//!   calibration, options, technologies, interpolation, payoffs, the
//!   Bellman step, and validators.
//! - Expose the solver API in [`models`] via [`GrowthModel`], returning a
//!   [`VFISolution`] with the value function, policy, consumption, and a
//!   terminal [`SolveStatus`].
//! - Centralize error types in [`errors`] ([`VFIError`] and the
//!   [`VFIResult`] alias) so callers see a uniform error surface.
//!
//! Invariants & assumptions
//! ------------------------
//! - Capital grids are finite, strictly positive, strictly increasing,
//!   uniform, and shared between states and actions.
//! - Calibration scalars satisfy β ∈ (0, 1), δ ∈ [0, 1], σ ≥ 0, A > 0,
//!   α ∈ (0, 1); options satisfy the constraints on
//!   [`VFIOptions::new`](core::VFIOptions::new).
//! - Infeasible (state, action) pairs carry a strictly negative payoff
//!   sentinel and can never win the row maximum against a feasible pair.
//! - Failing to converge within the iteration cap is a reported status,
//!   not an error; genuine input defects surface as [`VFIError`].
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout; argmax ties break toward the lowest
//!   index.
//! - The stack performs no I/O; optional per-iteration logging sits behind
//!   the `obs_slog` feature. Errors are surfaced as [`VFIResult`]; panics
//!   indicate programming errors such as shape mismatches.
//!
//! Downstream usage
//! ----------------
//! - Typical end-to-end flow:
//!   1. Build a [`CapitalGrid`] over the relevant capital range.
//!   2. Construct a [`Calibration`] and [`VFIOptions`] (or take the
//!      defaults).
//!   3. Bundle them with a technology (usually [`CobbDouglas`]) into a
//!      [`GrowthModel`] and call `solve(&grid)`.
//!   4. Inspect the [`VFISolution`] and, if needed, simulate a capital
//!      path via `VFISolution::simulate` or
//!      [`simulate_policy_path`](crate::simulation::simulate_policy_path).
//! - Python bindings import from this module (or its [`prelude`]) and rely
//!   on the `VFIError → PyErr` conversion defined in [`errors`].
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule; integration tests exercise
//!   the full pipeline (grid → model → solve → policy accuracy →
//!   simulation) through this public surface.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the everyday types most users need. More specialized items
// (interpolation, payoff internals, validators) remain under core.

pub use self::core::{Calibration, CapitalGrid, CobbDouglas, GrowthTechnology, VFIOptions};

pub use self::errors::{VFIError, VFIResult};

pub use self::models::{GrowthModel, SolveStatus, VFISolution};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_growth::growth::prelude::*;
//
// to import the main solver surface in a single line, without pulling in
// lower-level internals.

pub mod prelude {
    pub use super::{
        Calibration, CapitalGrid, CobbDouglas, GrowthModel, GrowthTechnology, SolveStatus,
        VFIError, VFIOptions, VFIResult, VFISolution,
    };
}

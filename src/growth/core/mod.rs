//! core — grids, calibration, payoffs, and the Bellman operator.
//!
//! Purpose
//! -------
//! Collect the numerical building blocks of the discretized value function
//! iteration: the capital grid, the economic calibration, numerical options,
//! the pluggable technology trait, piecewise-linear interpolation, the
//! feasibility-masked payoff grid, one application of the Bellman operator,
//! and shared input validators. The solver in `growth::models` composes
//! these primitives; nothing here iterates to a fixed point on its own.
//!
//! Key behaviors
//! -------------
//! - Build uniform capital grids with validated bounds ([`CapitalGrid`]).
//! - Carry the economic scalars (β, δ, σ, A, α) in a validated, copyable
//!   [`Calibration`] and the numerical controls in [`VFIOptions`].
//! - Abstract the model primitives behind [`GrowthTechnology`], with
//!   [`CobbDouglas`] as the concrete production/CRRA implementation.
//! - Precompute the sentinel-masked (state, action) utility cross product
//!   once per solve ([`PayoffGrid`]) and fail fast on states with no
//!   feasible action.
//! - Apply the Bellman operator and measure sup-norm progress
//!   ([`bellman_step`], [`sup_norm_diff`]); evaluate continuation values and
//!   simulated policies through [`LinearInterpolant`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Grid points are finite, strictly positive, strictly increasing, and
//!   at least two in number; the same grid indexes states and actions.
//! - Calibration and option scalars satisfy the constraints documented on
//!   their constructors; successfully built values need no re-checking.
//! - Payoff entries are either a genuine utility or the configured payoff
//!   sentinel; the sentinel is strictly negative and, by configuration
//!   contract, below the utility of floor consumption.
//! - Argmax ties break toward the lowest column index, always.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; row `i` of the payoff grid is the state
//!   `grid[i]`, column `j` the action `grid[j]`.
//! - These modules perform no I/O and no logging; they operate purely on
//!   `ndarray` containers and scalars, reporting failures as
//!   [`VFIResult`](crate::growth::errors::VFIResult).
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its own contract (construction
//!   validation, masking placement, tie-breaking, interpolation exactness).
//!   Fixed-point behavior is tested at the solver and integration layers.

pub mod bellman;
pub mod calibration;
pub mod grid;
pub mod interp;
pub mod options;
pub mod payoff;
pub mod technology;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::bellman::{bellman_step, sup_norm_diff};
pub use self::calibration::Calibration;
pub use self::grid::CapitalGrid;
pub use self::interp::LinearInterpolant;
pub use self::options::VFIOptions;
pub use self::payoff::PayoffGrid;
pub use self::technology::{CobbDouglas, GrowthTechnology};
pub use self::validation::{
    validate_horizon, validate_initial_capital, validate_initial_value,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_growth::growth::core::prelude::*;
//
// to import the main core surface in a single line.

pub mod prelude {
    pub use super::bellman::{bellman_step, sup_norm_diff};
    pub use super::calibration::Calibration;
    pub use super::grid::CapitalGrid;
    pub use super::interp::LinearInterpolant;
    pub use super::options::VFIOptions;
    pub use super::payoff::PayoffGrid;
    pub use super::technology::{CobbDouglas, GrowthTechnology};
}

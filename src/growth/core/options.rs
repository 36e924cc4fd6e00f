//! VFI options — numerical controls for the solver.
//!
//! Purpose
//! -------
//! Collect the numerical knobs of value function iteration in one validated
//! place: convergence tolerance, iteration cap, feasibility floors, the
//! infeasibility sentinel, the initial value-function vector, and the
//! verbosity flag driving the optional iteration observer.
//!
//! Key behaviors
//! -------------
//! - Represent solver configuration via [`VFIOptions`], constructed through a
//!   validated `new` or a conservative `Default`.
//! - Keep cross-cutting configuration out of the hot loop: the solver and the
//!   payoff builder read these fields instead of taking ad-hoc arguments.
//!
//! Invariants & assumptions
//! ------------------------
//! - `tolerance` is finite and > 0; `max_iterations` > 0.
//! - `investment_floor` is finite and >= 0 — a single **global** scalar, in
//!   contrast to the state-dependent budget-implied upper bound computed by
//!   the payoff builder.
//! - `consumption_floor` is finite and > 0; the utility contract substitutes
//!   it for non-positive consumption before evaluating.
//! - `payoff_sentinel` is finite and < 0. **Configuration contract**: the
//!   sentinel must be <= the utility of floor consumption under the chosen
//!   technology and risk aversion, so that infeasible entries never win the
//!   maximization. This is the caller's responsibility (the solver does not
//!   enforce it); the defaults satisfy it for CRRA curvature up to roughly
//!   σ = 2.5.
//! - `initial_value`, when present, must have one finite entry per grid
//!   point; its length is checked at solve time against the grid.
//!
//! Conventions
//! -----------
//! - `verbose` only has an effect when the `obs_slog` feature is enabled;
//!   the default build carries no I/O in the hot path.
use crate::growth::errors::{VFIError, VFIResult};
use ndarray::Array1;

/// Numerical controls for value function iteration.
///
/// Constructed via [`VFIOptions::new`] (validated) or [`VFIOptions::default`]
/// and passed to [`GrowthModel`](crate::growth::models::vfi::GrowthModel).
///
/// Defaults:
/// - `tolerance = 1e-6`
/// - `max_iterations = 1000`
/// - `investment_floor = 0.0`
/// - `consumption_floor = 1e-6`
/// - `payoff_sentinel = -1e9`
/// - `initial_value = None` (zeros over the grid)
/// - `verbose = false`
#[derive(Debug, Clone, PartialEq)]
pub struct VFIOptions {
    /// Sup-norm convergence tolerance for the value-function update.
    pub tolerance: f64,
    /// Hard cap on Bellman iterations.
    pub max_iterations: usize,
    /// Global lower bound on admissible next-capital.
    pub investment_floor: f64,
    /// Numerical floor substituted for non-positive consumption in utility.
    pub consumption_floor: f64,
    /// Payoff assigned to infeasible (state, action) pairs.
    pub payoff_sentinel: f64,
    /// Initial value-function vector; `None` means zeros over the grid.
    pub initial_value: Option<Array1<f64>>,
    /// Emit per-iteration progress through the `obs_slog` observer.
    pub verbose: bool,
}

impl VFIOptions {
    /// Construct validated solver options.
    ///
    /// # Rules
    /// - `tolerance` must be finite and strictly positive.
    /// - `max_iterations` must be strictly positive.
    /// - `investment_floor` must be finite and >= 0.
    /// - `consumption_floor` must be finite and strictly positive.
    /// - `payoff_sentinel` must be finite and strictly negative.
    ///
    /// `initial_value` is stored as given; its length and finiteness are
    /// checked against the grid when `solve` runs, since the grid size is not
    /// known here.
    ///
    /// # Errors
    /// - [`VFIError::InvalidTolerance`], [`VFIError::InvalidMaxIterations`],
    ///   [`VFIError::InvalidInvestmentFloor`],
    ///   [`VFIError::InvalidConsumptionFloor`], or
    ///   [`VFIError::InvalidPayoffSentinel`] for the corresponding violation.
    pub fn new(
        tolerance: f64, max_iterations: usize, investment_floor: f64, consumption_floor: f64,
        payoff_sentinel: f64, initial_value: Option<Array1<f64>>, verbose: bool,
    ) -> VFIResult<Self> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(VFIError::InvalidTolerance { value: tolerance });
        }
        if max_iterations == 0 {
            return Err(VFIError::InvalidMaxIterations { value: max_iterations });
        }
        if !investment_floor.is_finite() || investment_floor < 0.0 {
            return Err(VFIError::InvalidInvestmentFloor { value: investment_floor });
        }
        if !consumption_floor.is_finite() || consumption_floor <= 0.0 {
            return Err(VFIError::InvalidConsumptionFloor { value: consumption_floor });
        }
        if !payoff_sentinel.is_finite() {
            return Err(VFIError::InvalidPayoffSentinel {
                value: payoff_sentinel,
                reason: "Sentinel must be finite.",
            });
        }
        if payoff_sentinel >= 0.0 {
            return Err(VFIError::InvalidPayoffSentinel {
                value: payoff_sentinel,
                reason: "Sentinel must be strictly negative so feasible payoffs can dominate it.",
            });
        }
        Ok(Self {
            tolerance,
            max_iterations,
            investment_floor,
            consumption_floor,
            payoff_sentinel,
            initial_value,
            verbose,
        })
    }
}

impl Default for VFIOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 1000,
            investment_floor: 0.0,
            consumption_floor: 1e-6,
            payoff_sentinel: -1e9,
            initial_value: None,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Documented defaults.
    // - Field-by-field validation in `VFIOptions::new`.
    //
    // They intentionally DO NOT cover:
    // - Length/finiteness checks on `initial_value`, which happen at solve
    //   time against the grid and are tested with the solver.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `VFIOptions::default` matches the documented defaults.
    //
    // Given
    // -----
    // - The `Default` implementation.
    //
    // Expect
    // ------
    // - tolerance 1e-6, max_iterations 1000, investment_floor 0.0,
    //   consumption_floor 1e-6, payoff_sentinel -1e9, no initial value,
    //   verbose off.
    fn default_matches_documented_defaults() {
        let opts = VFIOptions::default();

        assert_eq!(opts.tolerance, 1e-6);
        assert_eq!(opts.max_iterations, 1000);
        assert_eq!(opts.investment_floor, 0.0);
        assert_eq!(opts.consumption_floor, 1e-6);
        assert_eq!(opts.payoff_sentinel, -1e9);
        assert!(opts.initial_value.is_none());
        assert!(!opts.verbose);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a fully explicit configuration is preserved.
    //
    // Given
    // -----
    // - Valid values for every field, including an initial value vector.
    //
    // Expect
    // ------
    // - `Ok(VFIOptions)` mirroring the inputs exactly.
    fn new_preserves_valid_fields() {
        // Arrange
        let v0 = array![0.0, 1.0, 2.0];

        // Act
        let opts = VFIOptions::new(1e-8, 500, 0.01, 1e-5, -1e6, Some(v0.clone()), true)
            .expect("valid options should construct");

        // Assert
        assert_eq!(opts.tolerance, 1e-8);
        assert_eq!(opts.max_iterations, 500);
        assert_eq!(opts.investment_floor, 0.01);
        assert_eq!(opts.consumption_floor, 1e-5);
        assert_eq!(opts.payoff_sentinel, -1e6);
        assert_eq!(opts.initial_value, Some(v0));
        assert!(opts.verbose);
    }

    #[test]
    // Purpose
    // -------
    // Ensure each invalid numerical control is rejected with its own error
    // variant.
    //
    // Given
    // -----
    // - One invalid field per case, all others valid.
    //
    // Expect
    // ------
    // - The matching `VFIError` variant for each case.
    fn new_rejects_invalid_controls() {
        let err = VFIOptions::new(0.0, 100, 0.0, 1e-6, -1e9, None, false).unwrap_err();
        assert!(matches!(err, VFIError::InvalidTolerance { .. }));

        let err = VFIOptions::new(1e-6, 0, 0.0, 1e-6, -1e9, None, false).unwrap_err();
        assert!(matches!(err, VFIError::InvalidMaxIterations { .. }));

        let err = VFIOptions::new(1e-6, 100, -1.0, 1e-6, -1e9, None, false).unwrap_err();
        assert!(matches!(err, VFIError::InvalidInvestmentFloor { .. }));

        let err = VFIOptions::new(1e-6, 100, 0.0, 0.0, -1e9, None, false).unwrap_err();
        assert!(matches!(err, VFIError::InvalidConsumptionFloor { .. }));

        let err = VFIOptions::new(1e-6, 100, 0.0, 1e-6, 1.0, None, false).unwrap_err();
        assert!(matches!(err, VFIError::InvalidPayoffSentinel { .. }));

        let err =
            VFIOptions::new(1e-6, 100, 0.0, 1e-6, f64::NEG_INFINITY, None, false).unwrap_err();
        assert!(matches!(err, VFIError::InvalidPayoffSentinel { .. }));
    }
}

//! Pluggable economic primitives — the technology capability contract.
//!
//! Purpose
//! -------
//! Express the caller-supplied economic functions (production, consumption,
//! utility, and the two budget inversions) as a fixed, closed capability
//! trait so implementations can be swapped without touching the solver. The
//! solver and payoff builder only ever call these five operations.
//!
//! Key behaviors
//! -------------
//! - [`GrowthTechnology`]: the vectorized numeric contract. Every operation
//!   receives the full [`Calibration`] plus named `ndarray`-shaped arguments
//!   and returns a same-shaped array — grid-wide evaluation, never per-scalar
//!   invocation from the solver's side.
//! - [`CobbDouglas`]: the stock implementation — Cobb-Douglas production
//!   A·k^α, resource constraint c + k' = A·k^α + (1 − δ)·k, and CRRA utility
//!   with the log branch at σ = 1.
//!
//! Invariants & assumptions
//! ------------------------
//! - The two budget operations are inverses of each other in their first
//!   argument: `consumption_from_budget(next_capital_from_budget(c, y, k), y, k) == c`.
//! - The utility contract: implementations must substitute the consumption
//!   floor for non-positive consumption **before** evaluating, so the payoff
//!   grid never sees NaN from a log or fractional power of a non-positive
//!   number. Feasibility masking is not utility's job; the payoff builder
//!   overwrites infeasible entries afterwards.
use crate::growth::core::calibration::Calibration;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Zip};

/// Capability contract for the model's economic primitives.
///
/// A fixed set of five named operations, each vectorized over `ndarray`
/// shapes and parameterized by the full [`Calibration`]. Implementations
/// must be pure: no interior mutability, no dependence on call order.
///
/// Shapes follow the call sites in the payoff builder and solver:
/// - `production` and the budget inversions operate per grid point
///   (length-n vectors);
/// - `consumption` and `utility` operate over the full n×n (state, action)
///   cross product.
pub trait GrowthTechnology {
    /// Output produced at each capital level: `y = f(k)`.
    fn production(&self, cal: &Calibration, capital: ArrayView1<'_, f64>) -> Array1<f64>;

    /// Consumption implied by each (state, next-state) pair, elementwise over
    /// equally shaped matrices of current and next capital.
    fn consumption(
        &self, cal: &Calibration, capital: ArrayView2<'_, f64>,
        next_capital: ArrayView2<'_, f64>,
    ) -> Array2<f64>;

    /// Per-period utility of consumption, elementwise. Non-positive entries
    /// are evaluated at `consumption_floor` per the utility contract.
    fn utility(
        &self, cal: &Calibration, consumption: ArrayView2<'_, f64>, consumption_floor: f64,
    ) -> Array2<f64>;

    /// Next-capital implied by the budget constraint when consumption is
    /// pinned: the most that can be invested at each state.
    fn next_capital_from_budget(
        &self, cal: &Calibration, consumption: ArrayView1<'_, f64>, output: ArrayView1<'_, f64>,
        capital: ArrayView1<'_, f64>,
    ) -> Array1<f64>;

    /// Consumption implied by the budget constraint for a chosen next-capital
    /// at each state.
    fn consumption_from_budget(
        &self, cal: &Calibration, next_capital: ArrayView1<'_, f64>, output: ArrayView1<'_, f64>,
        capital: ArrayView1<'_, f64>,
    ) -> Array1<f64>;
}

/// Cobb-Douglas production with CRRA utility.
///
/// - Production: `y = A · k^α`.
/// - Budget: `c + k' = y + (1 − δ) · k`.
/// - Utility: `(c^(1−σ) − 1) / (1 − σ)`, with `ln c` at σ = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CobbDouglas;

impl CobbDouglas {
    /// CRRA utility of a single consumption value, after floor substitution.
    fn crra(cal: &Calibration, consumption: f64, consumption_floor: f64) -> f64 {
        let c = if consumption > 0.0 { consumption } else { consumption_floor };
        let sigma = cal.risk_aversion;
        if (sigma - 1.0).abs() < 1e-10 {
            c.ln()
        } else {
            (c.powf(1.0 - sigma) - 1.0) / (1.0 - sigma)
        }
    }

    /// Resources available at a state: output plus undepreciated capital.
    fn resources(cal: &Calibration, output: f64, capital: f64) -> f64 {
        output + (1.0 - cal.depreciation) * capital
    }
}

impl GrowthTechnology for CobbDouglas {
    fn production(&self, cal: &Calibration, capital: ArrayView1<'_, f64>) -> Array1<f64> {
        capital.mapv(|k| cal.technology_level * k.powf(cal.capital_share))
    }

    fn consumption(
        &self, cal: &Calibration, capital: ArrayView2<'_, f64>,
        next_capital: ArrayView2<'_, f64>,
    ) -> Array2<f64> {
        Zip::from(capital).and(next_capital).map_collect(|&k, &kp| {
            let output = cal.technology_level * k.powf(cal.capital_share);
            Self::resources(cal, output, k) - kp
        })
    }

    fn utility(
        &self, cal: &Calibration, consumption: ArrayView2<'_, f64>, consumption_floor: f64,
    ) -> Array2<f64> {
        consumption.mapv(|c| Self::crra(cal, c, consumption_floor))
    }

    fn next_capital_from_budget(
        &self, cal: &Calibration, consumption: ArrayView1<'_, f64>, output: ArrayView1<'_, f64>,
        capital: ArrayView1<'_, f64>,
    ) -> Array1<f64> {
        Zip::from(consumption)
            .and(output)
            .and(capital)
            .map_collect(|&c, &y, &k| Self::resources(cal, y, k) - c)
    }

    fn consumption_from_budget(
        &self, cal: &Calibration, next_capital: ArrayView1<'_, f64>, output: ArrayView1<'_, f64>,
        capital: ArrayView1<'_, f64>,
    ) -> Array1<f64> {
        Zip::from(next_capital)
            .and(output)
            .and(capital)
            .map_collect(|&kp, &y, &k| Self::resources(cal, y, k) - kp)
    }
}

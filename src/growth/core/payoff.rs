//! Feasibility-masked payoff grid for the (state, action) cross product.
//!
//! ## What this module does
//! - Evaluates consumption over the full grid×grid cross product in one
//!   vectorized call to the technology.
//! - Computes the state-dependent upper bound on next-capital: the
//!   next-capital reachable when consumption is pinned at its floor (the
//!   most that can be invested at each state).
//! - Masks each pair (i, j): feasible iff `grid[j] >= investment_floor`
//!   (one global scalar) and `grid[j] <= next_capital_upper[i]`
//!   (state-dependent). Infeasible utilities are overwritten with the
//!   configured payoff sentinel.
//! - Fails fast with [`VFIError::DegenerateState`] if some state has no
//!   feasible action at all — detected from the mask itself, so a feasible
//!   payoff that happens to equal the sentinel is never misclassified.
//!
//! The result is built **once** per solve and reused every Bellman
//! iteration: per-period utility does not depend on the value function, only
//! the continuation value changes across iterations.
use crate::growth::{
    core::{
        calibration::Calibration, grid::CapitalGrid, options::VFIOptions,
        technology::GrowthTechnology,
    },
    errors::{VFIError, VFIResult},
};
use ndarray::{Array1, Array2};

/// Immutable n×n utility payoffs with feasibility already applied.
///
/// Entry `(i, j)` is the per-period utility of choosing next-capital
/// `grid[j]` from state `grid[i]`, or the payoff sentinel when that choice
/// violates the investment floor or the budget-implied upper bound at
/// state `i`. Never mutated after [`PayoffGrid::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffGrid {
    /// Sentinel-masked utility payoffs, one row per state.
    pub utilities: Array2<f64>,
    /// Budget-implied upper bound on next-capital, per state.
    pub next_capital_upper: Array1<f64>,
}

impl PayoffGrid {
    /// Build the masked payoff grid for `grid` under the given calibration,
    /// technology, and options.
    ///
    /// # Steps
    /// 1. Consumption over the full cross product (state varies by row,
    ///    action by column) via `technology.consumption`.
    /// 2. `output = technology.production(grid)` and
    ///    `next_capital_upper = next_capital_from_budget(floor, output, grid)`.
    /// 3. Utility of every pair via `technology.utility` (the utility
    ///    contract substitutes the consumption floor for non-positive
    ///    entries).
    /// 4. Overwrite infeasible entries with `options.payoff_sentinel` and
    ///    count the feasible actions per state.
    ///
    /// # Errors
    /// - [`VFIError::DegenerateState`] for the first state with zero
    ///   feasible actions.
    pub fn build<T: GrowthTechnology>(
        grid: &CapitalGrid, cal: &Calibration, technology: &T, options: &VFIOptions,
    ) -> VFIResult<Self> {
        let n = grid.len();

        let state = Array2::from_shape_fn((n, n), |(i, _)| grid.points[i]);
        let action = Array2::from_shape_fn((n, n), |(_, j)| grid.points[j]);

        let consumption = technology.consumption(cal, state.view(), action.view());
        let output = technology.production(cal, grid.view());

        let pinned = Array1::from_elem(n, options.consumption_floor);
        let next_capital_upper =
            technology.next_capital_from_budget(cal, pinned.view(), output.view(), grid.view());

        let mut utilities =
            technology.utility(cal, consumption.view(), options.consumption_floor);

        for i in 0..n {
            let mut feasible = 0usize;
            for j in 0..n {
                let next = grid.points[j];
                if next < options.investment_floor || next > next_capital_upper[i] {
                    utilities[[i, j]] = options.payoff_sentinel;
                } else {
                    feasible += 1;
                }
            }
            if feasible == 0 {
                return Err(VFIError::DegenerateState {
                    state_index: i,
                    capital: grid.points[i],
                });
            }
        }

        Ok(PayoffGrid { utilities, next_capital_upper })
    }

    /// Number of states (and actions) on each axis.
    pub fn len(&self) -> usize {
        self.next_capital_upper.len()
    }

    /// Whether the grid is empty (never true for a built payoff grid).
    pub fn is_empty(&self) -> bool {
        self.next_capital_upper.is_empty()
    }
}

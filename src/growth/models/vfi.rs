//! Growth model solved by value function iteration.
//!
//! This module wires a calibration, a [`GrowthTechnology`] implementation,
//! and [`VFIOptions`] into the user-facing solver. `solve` runs the
//! backward-induction fixed point:
//!
//! 1. Build the capital-indexed payoff grid **once** (feasibility-masked
//!    utilities never change across iterations).
//! 2. Repeat [`bellman_step`]: interpolate the value function, maximize
//!    payoff plus discounted continuation row-wise, replace the value
//!    function, measure the sup-norm change.
//! 3. Stop immediately after the first iteration whose change is within
//!    tolerance, or at the iteration cap. The cap is **not** an error; it is
//!    reported through [`SolveStatus`].
//! 4. Extract the policy (next-capital per state) and the implied
//!    consumption in one vectorized budget call.
//!
//! Only the outer iterations are sequential — each depends on the previous
//! value function. The solver holds no process-wide state: every call is a
//! pure function of its configuration and initial value vector.
use crate::growth::{
    core::{
        bellman::{bellman_step, sup_norm_diff},
        calibration::Calibration,
        grid::CapitalGrid,
        options::VFIOptions,
        payoff::PayoffGrid,
        technology::GrowthTechnology,
        validation::validate_initial_value,
    },
    errors::VFIResult,
};
use ndarray::Array1;

/// Terminal state of the iteration loop.
///
/// Transient phases (building the payoff grid, iterating) are control flow
/// inside [`GrowthModel::solve`]; only the terminal outcome is observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Sup-norm change fell within tolerance.
    Converged,
    /// The iteration cap was reached first; the best available value and
    /// policy are still returned.
    MaxIterationsReached,
}

/// Result bundle of a VFI solve.
///
/// Everything downstream consumers need: the grid, the final value function,
/// the iteration count, the argmax policy in index and capital form, the
/// policy-implied consumption, and the terminal status.
#[derive(Debug, Clone, PartialEq)]
pub struct VFISolution {
    /// Capital grid the solution is defined on.
    pub grid: CapitalGrid,
    /// Final value function, one entry per grid point.
    pub value: Array1<f64>,
    /// Number of Bellman iterations performed (1 ..= max_iterations).
    pub iterations: usize,
    /// Argmax column index per state.
    pub policy_indices: Array1<usize>,
    /// Optimal next-capital per state: `grid[policy_indices[i]]`.
    pub policy_next_capital: Array1<f64>,
    /// Consumption implied by the policy through the budget constraint.
    pub consumption: Array1<f64>,
    /// Terminal status of the iteration loop.
    pub status: SolveStatus,
}

impl VFISolution {
    /// Whether the solve terminated by meeting the tolerance.
    pub fn converged(&self) -> bool {
        self.status == SolveStatus::Converged
    }

    /// Simulate a capital path of length `horizon` from `initial_capital` by
    /// forward-iterating the piecewise-linear interpolant of the policy.
    ///
    /// Convenience wrapper around
    /// [`simulate_policy_path`](crate::simulation::simulate_policy_path).
    pub fn simulate(&self, initial_capital: f64, horizon: usize) -> VFIResult<Array1<f64>> {
        crate::simulation::simulate_policy_path(
            &self.grid,
            self.policy_next_capital.view(),
            initial_capital,
            horizon,
        )
    }
}

/// The deterministic neoclassical growth model, parameterized by a pluggable
/// technology.
///
/// Bundles the economic calibration, the primitive functions, and the
/// numerical options; configuration travels together, so `solve` takes only
/// the grid and one configured model can be solved on several grids.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthModel<T: GrowthTechnology> {
    /// Economic scalars (β, δ, σ, A, α).
    pub calibration: Calibration,
    /// Pluggable production/consumption/utility/budget primitives.
    pub technology: T,
    /// Numerical controls.
    pub options: VFIOptions,
}

impl<T: GrowthTechnology> GrowthModel<T> {
    /// Bundle an already-validated calibration, technology, and options.
    pub fn new(calibration: Calibration, technology: T, options: VFIOptions) -> Self {
        GrowthModel { calibration, technology, options }
    }

    /// Solve the model on `grid` by value function iteration.
    ///
    /// # Behavior
    /// - Starts from `options.initial_value` (validated against the grid) or
    ///   zeros.
    /// - Iterates [`bellman_step`] until the sup-norm change is within
    ///   `options.tolerance` — the loop exits immediately after the
    ///   satisfying iteration — or until `options.max_iterations`.
    /// - Always performs at least one iteration, so a fixed-point initial
    ///   vector reports `iterations == 1`.
    /// - With the `obs_slog` feature and `options.verbose`, logs the
    ///   iteration counter and sup-norm change each pass.
    ///
    /// # Errors
    /// - Initial-value validation errors
    ///   ([`VFIError::InvalidValueLength`](crate::growth::errors::VFIError::InvalidValueLength),
    ///   [`VFIError::NonFiniteValueEntry`](crate::growth::errors::VFIError::NonFiniteValueEntry)).
    /// - [`VFIError::DegenerateState`](crate::growth::errors::VFIError::DegenerateState)
    ///   from payoff construction when some state has no feasible action.
    ///
    /// Reaching the iteration cap is **not** an error; inspect
    /// [`VFISolution::converged`].
    pub fn solve(&self, grid: &CapitalGrid) -> VFIResult<VFISolution> {
        let n = grid.len();

        let mut value = match &self.options.initial_value {
            Some(v0) => {
                validate_initial_value(v0.view(), n)?;
                v0.clone()
            }
            None => Array1::zeros(n),
        };

        let payoff = PayoffGrid::build(grid, &self.calibration, &self.technology, &self.options)?;

        #[cfg(feature = "obs_slog")]
        let logger = self.options.verbose.then(iteration_logger);

        let mut policy_indices = Array1::zeros(n);
        let mut iterations = 0usize;
        let mut status = SolveStatus::MaxIterationsReached;

        for step in 1..=self.options.max_iterations {
            let (new_value, new_indices) =
                bellman_step(&payoff, value.view(), grid, self.calibration.discount)?;
            let error = sup_norm_diff(new_value.view(), value.view());

            value = new_value;
            policy_indices = new_indices;
            iterations = step;

            #[cfg(feature = "obs_slog")]
            if let Some(logger) = &logger {
                slog::info!(logger, "bellman update";
                    "iteration" => step,
                    "sup_norm" => error,
                );
            }

            if error <= self.options.tolerance {
                status = SolveStatus::Converged;
                break;
            }
        }

        let policy_next_capital = policy_indices.mapv(|j| grid.points[j]);
        let output = self.technology.production(&self.calibration, grid.view());
        let consumption = self.technology.consumption_from_budget(
            &self.calibration,
            policy_next_capital.view(),
            output.view(),
            grid.view(),
        );

        Ok(VFISolution {
            grid: grid.clone(),
            value,
            iterations,
            policy_indices,
            policy_next_capital,
            consumption,
            status,
        })
    }
}

/// Terminal logger for per-iteration progress, mirroring the verbose
/// observer the optimizer stack attaches when `obs_slog` is enabled.
#[cfg(feature = "obs_slog")]
fn iteration_logger() -> slog::Logger {
    use slog::Drain;

    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = std::sync::Mutex::new(drain).fuse();
    slog::Logger::root(drain, slog::o!())
}

//! Solver backends
//!
//! The model stage produces a frozen [`ShowModel`]; anything implementing
//! [`Backend`] can solve it. The contract is deliberately black-box: a
//! backend returns an assignment over the model's variable id space together
//! with a status, and the caller never assumes a particular algorithm,
//! deterministic tie-breaking, or bounded running time. A run that exhausts
//! its time limit is a valid best-effort result, not an error.
//!
//! The bundled backend is [`ChainSearch`], a deterministic heuristic. It
//! reports [`Backend::exact`] `== false` so callers can surface the weakened
//! optimality guarantee instead of hiding it; an exact MILP solver can be
//! plugged in through the same trait.

mod chain;
mod error;

pub use chain::ChainSearch;
pub use error::SolveError;

use std::time::Duration;

use crate::model::ShowModel;

/// Solve status, in decreasing order of certainty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Assignment proven optimal
    Optimal,
    /// Best assignment found, without a proof of optimality
    Feasible,
    /// No feasible assignment exists
    Infeasible,
}

/// Raw result of one solve call
#[derive(Debug, Clone)]
pub struct Outcome {
    pub status: SolveStatus,
    /// One value per model variable id; empty when infeasible
    pub values: Vec<f64>,
    /// Objective value the backend claims for `values`
    pub objective: i64,
    /// True when the run stopped on the time limit rather than convergence
    pub time_limit_hit: bool,
}

/// A solver for [`ShowModel`] instances
pub trait Backend {
    /// Short backend identifier for messages
    fn name(&self) -> &'static str;

    /// True when the backend proves optimality of the solutions it returns
    fn exact(&self) -> bool;

    /// Solve the model, best effort within `time_limit` when one is given.
    ///
    /// # Errors
    /// Returns [`SolveError`] only for backend-internal failures; infeasible
    /// models and exhausted time limits are reported through [`Outcome`].
    fn solve(
        &self,
        show: &ShowModel,
        time_limit: Option<Duration>,
    ) -> Result<Outcome, SolveError>;
}

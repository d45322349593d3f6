use crate::error::SolveError;
use crate::instance::Instance;
use crate::limits::Limits;
use crate::solver::{Outcome, Search, SearchOptions};

/// Can some subset of the `n` items hit `target_cost` and `target_weight` exactly?
///
/// Validates against [`Limits::default`]; use [`solve_with_limits`] for other bounds.
pub fn solve(
    n: usize,
    target_cost: i64,
    target_weight: i64,
    costs: &[i64],
    weights: &[i64],
) -> Result<bool, SolveError> {
    solve_with_limits(n, target_cost, target_weight, costs, weights, &Limits::default())
}

pub fn solve_with_limits(
    n: usize,
    target_cost: i64,
    target_weight: i64,
    costs: &[i64],
    weights: &[i64],
    limits: &Limits,
) -> Result<bool, SolveError> {
    let instance = Instance::from_parts(n, target_cost, target_weight, costs, weights, limits)?;
    solve_instance(&instance)
}

pub fn solve_instance(instance: &Instance) -> Result<bool, SolveError> {
    solve_with_options(instance, SearchOptions::default()).map(|outcome| outcome.reachable)
}

/// Fresh grid and stack per call.
pub fn solve_with_options(instance: &Instance, options: SearchOptions) -> Result<Outcome, SolveError> {
    Search::new(instance, options)?.run()
}

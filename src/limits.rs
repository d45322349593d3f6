use serde::{Deserialize, Serialize};

use crate::error::SolveError;

pub const DEFAULT_N_MAX: usize = 500;
pub const DEFAULT_COST_MAX: usize = 100;
pub const DEFAULT_WEIGHT_MAX: usize = 100;

/// Capacity bounds of the state space.
///
/// These size the search, they take no part in deciding reachability: an
/// instance either fits and is answered, or is rejected before the search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    pub n_max: usize,
    pub cost_max: usize,
    pub weight_max: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            n_max: DEFAULT_N_MAX,
            cost_max: DEFAULT_COST_MAX,
            weight_max: DEFAULT_WEIGHT_MAX,
        }
    }
}

impl Limits {
    pub const fn new(n_max: usize, cost_max: usize, weight_max: usize) -> Self {
        Limits {
            n_max,
            cost_max,
            weight_max,
        }
    }

    /// Reject dimensions that would not fit the grid.
    pub fn check(&self, n: usize, target_cost: usize, target_weight: usize) -> Result<(), SolveError> {
        let checks = [
            ("n", n, self.n_max),
            ("targetCost", target_cost, self.cost_max),
            ("targetWeight", target_weight, self.weight_max),
        ];
        for (field, value, max) in checks {
            if value > max {
                return Err(SolveError::CapacityExceeded { field, value, max });
            }
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::error::SolveError;
use crate::grid::{Dims, MAX_CELLS};
use crate::limits::Limits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub cost: usize,
    pub weight: usize,
}

impl Item {
    pub const fn new(cost: usize, weight: usize) -> Self {
        Item { cost, weight }
    }
}

/// A validated problem: items in consideration order and the exact totals to hit.
///
/// Holding an `Instance` means the dimensions fit the limits it was built with,
/// so the search never has to check bounds again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    items: Vec<Item>,
    target_cost: usize,
    target_weight: usize,
    dims: Dims,
}

impl Instance {
    pub fn new(
        target_cost: usize,
        target_weight: usize,
        items: Vec<Item>,
        limits: &Limits,
    ) -> Result<Self, SolveError> {
        limits.check(items.len(), target_cost, target_weight)?;
        // Each dimension may fit its own limit while their product does not.
        let dims = match Dims::new(items.len(), target_cost, target_weight) {
            Some(dims) if dims.cells() <= MAX_CELLS => dims,
            other => {
                return Err(SolveError::CapacityExceeded {
                    field: "states",
                    value: other.map_or(usize::MAX, |dims| dims.cells()),
                    max: MAX_CELLS,
                })
            }
        };
        Ok(Instance {
            items,
            target_cost,
            target_weight,
            dims,
        })
    }

    /// Build from the signed, parallel-sequence form callers usually hold.
    pub fn from_parts(
        n: usize,
        target_cost: i64,
        target_weight: i64,
        costs: &[i64],
        weights: &[i64],
        limits: &Limits,
    ) -> Result<Self, SolveError> {
        if costs.len() != n || weights.len() != n {
            return Err(SolveError::invalid(format!(
                "expected {n} costs and weights, got {} costs and {} weights",
                costs.len(),
                weights.len()
            )));
        }
        let target_cost = non_negative(target_cost, || "targetCost".into())?;
        let target_weight = non_negative(target_weight, || "targetWeight".into())?;
        let items = costs
            .iter()
            .zip(weights)
            .enumerate()
            .map(|(idx, (&cost, &weight))| {
                Ok(Item {
                    cost: non_negative(cost, || format!("cost[{idx}]"))?,
                    weight: non_negative(weight, || format!("weight[{idx}]"))?,
                })
            })
            .collect::<Result<Vec<_>, SolveError>>()?;
        Instance::new(target_cost, target_weight, items, limits)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub const fn target_cost(&self) -> usize {
        self.target_cost
    }

    pub const fn target_weight(&self) -> usize {
        self.target_weight
    }

    pub const fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of states `(x, y, z)` the search can ever touch.
    pub const fn state_count(&self) -> usize {
        self.dims.cells()
    }
}

fn non_negative(value: i64, field: impl FnOnce() -> String) -> Result<usize, SolveError> {
    usize::try_from(value)
        .map_err(|_| SolveError::invalid(format!("{} must be non-negative, got {value}", field())))
}

/// Unvalidated instance as it arrives from JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInstance {
    pub target_cost: i64,
    pub target_weight: i64,
    pub items: Vec<RawItem>,
    #[serde(default)]
    pub limits: Option<Limits>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawItem {
    pub cost: i64,
    pub weight: i64,
}

impl RawInstance {
    pub fn validate(&self) -> Result<Instance, SolveError> {
        let limits = self.limits.unwrap_or_default();
        let (costs, weights): (Vec<i64>, Vec<i64>) =
            self.items.iter().map(|item| (item.cost, item.weight)).unzip();
        Instance::from_parts(
            self.items.len(),
            self.target_cost,
            self.target_weight,
            &costs,
            &weights,
            &limits,
        )
    }
}

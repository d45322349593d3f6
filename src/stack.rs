use crate::error::SolveError;
use crate::state::State;

/// LIFO of pending states with a hard bound on its length.
#[derive(Debug, Clone)]
pub struct WorkStack {
    entries: Vec<State>,
    limit: usize,
    high_water: usize,
}

impl WorkStack {
    pub fn with_capacity_limit(limit: usize) -> Self {
        WorkStack {
            entries: Vec::new(),
            limit,
            high_water: 0,
        }
    }

    pub fn push(&mut self, state: State) -> Result<(), SolveError> {
        if self.entries.len() >= self.limit {
            return Err(SolveError::CapacityExceeded {
                field: "stack",
                value: self.entries.len() + 1,
                max: self.limit,
            });
        }
        self.entries.push(state);
        self.high_water = self.high_water.max(self.entries.len());
        Ok(())
    }

    pub fn pop(&mut self) -> Option<State> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Largest length reached since creation or the last `clear`.
    pub const fn high_water(&self) -> usize {
        self.high_water
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.high_water = 0;
    }
}

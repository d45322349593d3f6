use hashbrown::HashSet;

use crate::error::SolveError;
use crate::state::{Marker, State};

/// Most cells a search may span: a work stack of one entry per cell must
/// still fit in a single allocation.
pub const MAX_CELLS: usize = isize::MAX as usize / std::mem::size_of::<State>() - 1;

/// Extent of the state space: `x` in `[0, items]`, `y` in `[0, cost]`, `z` in `[0, weight]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims {
    pub items: usize,
    pub cost: usize,
    pub weight: usize,
    cells: usize,
}

impl Dims {
    /// `None` when the cell count does not fit in a `usize`.
    pub fn new(items: usize, cost: usize, weight: usize) -> Option<Self> {
        let cells = items
            .checked_add(1)?
            .checked_mul(cost.checked_add(1)?)?
            .checked_mul(weight.checked_add(1)?)?;
        Some(Dims {
            items,
            cost,
            weight,
            cells,
        })
    }

    pub const fn contains(&self, state: State) -> bool {
        state.x <= self.items && state.y <= self.cost && state.z <= self.weight
    }

    pub const fn cells(&self) -> usize {
        self.cells
    }
}

/// Storage for the dead-end markers of one search.
pub trait MemoTable {
    fn marker(&self, state: State) -> Marker;

    /// Idempotent.
    fn mark_dead(&mut self, state: State);

    /// Back to all `Unvisited`.
    fn reset(&mut self);

    fn dead_count(&self) -> usize;

    fn is_dead(&self, state: State) -> bool {
        self.marker(state) == Marker::DeadEnd
    }
}

/// Dense `x`-major grid sized exactly to the instance.
#[derive(Debug, Clone)]
pub struct DenseGrid {
    dims: Dims,
    cells: Vec<Marker>,
    dead: usize,
}

impl DenseGrid {
    pub fn new(dims: Dims) -> Result<Self, SolveError> {
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(dims.cells())
            .map_err(|_| SolveError::OutOfMemory { cells: dims.cells() })?;
        cells.resize(dims.cells(), Marker::Unvisited);
        Ok(DenseGrid {
            dims,
            cells,
            dead: 0,
        })
    }

    pub const fn dims(&self) -> Dims {
        self.dims
    }

    fn index(&self, state: State) -> usize {
        assert!(
            self.dims.contains(state),
            "state {state:?} outside grid {:?}",
            self.dims
        );
        (state.x * (self.dims.cost + 1) + state.y) * (self.dims.weight + 1) + state.z
    }
}

impl MemoTable for DenseGrid {
    fn marker(&self, state: State) -> Marker {
        self.cells[self.index(state)]
    }

    fn mark_dead(&mut self, state: State) {
        let idx = self.index(state);
        if self.cells[idx] != Marker::DeadEnd {
            self.cells[idx] = Marker::DeadEnd;
            self.dead += 1;
        }
    }

    fn reset(&mut self) {
        self.cells.fill(Marker::Unvisited);
        self.dead = 0;
    }

    fn dead_count(&self) -> usize {
        self.dead
    }
}

/// Keeps only the dead states. Cheaper than [`DenseGrid`] when targets are
/// large but few `(cost, weight)` combinations are reachable.
#[derive(Debug, Clone)]
pub struct SparseGrid {
    dims: Dims,
    dead: HashSet<State>,
}

impl SparseGrid {
    pub fn new(dims: Dims) -> Self {
        SparseGrid {
            dims,
            dead: HashSet::new(),
        }
    }
}

impl MemoTable for SparseGrid {
    fn marker(&self, state: State) -> Marker {
        assert!(
            self.dims.contains(state),
            "state {state:?} outside grid {:?}",
            self.dims
        );
        if self.dead.contains(&state) {
            Marker::DeadEnd
        } else {
            Marker::Unvisited
        }
    }

    fn mark_dead(&mut self, state: State) {
        assert!(
            self.dims.contains(state),
            "state {state:?} outside grid {:?}",
            self.dims
        );
        self.dead.insert(state);
    }

    fn reset(&mut self) {
        self.dead.clear();
    }

    fn dead_count(&self) -> usize {
        self.dead.len()
    }
}

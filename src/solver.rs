use tracing::{debug, trace};

use crate::error::SolveError;
use crate::grid::{DenseGrid, Dims, MemoTable, SparseGrid};
use crate::instance::Instance;
use crate::stack::WorkStack;
use crate::state::State;

pub use crate::state::ExpansionOrder;

/// Which [`MemoTable`] backs a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MemoKind {
    #[default]
    Dense,
    Sparse,
}

impl MemoKind {
    pub const fn name(&self) -> &'static str {
        match self {
            MemoKind::Dense => "dense",
            MemoKind::Sparse => "sparse",
        }
    }

    fn build(&self, dims: Dims) -> Result<Box<dyn MemoTable>, SolveError> {
        Ok(match self {
            MemoKind::Dense => Box::new(DenseGrid::new(dims)?),
            MemoKind::Sparse => Box::new(SparseGrid::new(dims)),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SearchOptions {
    pub order: ExpansionOrder,
    pub memo: MemoKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped while unvisited and then marked dead.
    pub expanded: usize,
    /// Popped states that were already dead.
    pub discarded: usize,
    pub pushed: usize,
    pub max_stack: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub reachable: bool,
    pub stats: SearchStats,
}

/// One search over one instance. Owns its grid and stack, so independent
/// searches never share state; `run` resets both before it starts.
pub struct Search<'a> {
    instance: &'a Instance,
    options: SearchOptions,
    memo: Box<dyn MemoTable>,
    stack: WorkStack,
}

impl<'a> Search<'a> {
    pub fn new(instance: &'a Instance, options: SearchOptions) -> Result<Self, SolveError> {
        Ok(Search {
            instance,
            options,
            memo: options.memo.build(instance.dims())?,
            // Every state is expanded at most once and each expansion grows
            // the stack by at most one entry.
            stack: WorkStack::with_capacity_limit(instance.state_count() + 1),
        })
    }

    pub fn reset(&mut self) {
        self.memo.reset();
        self.stack.clear();
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Is `(n, targetCost, targetWeight)` reachable from the origin?
    pub fn run(&mut self) -> Result<Outcome, SolveError> {
        self.reset();
        let inst = self.instance;
        let goal = State::new(inst.len(), inst.target_cost(), inst.target_weight());
        debug!(
            n = inst.len(),
            target_cost = inst.target_cost(),
            target_weight = inst.target_weight(),
            memo = self.options.memo.name(),
            order = self.options.order.name(),
            "starting search"
        );

        let mut stats = SearchStats::default();
        self.stack.push(State::origin())?;
        stats.pushed += 1;

        let mut reachable = false;
        while let Some(state) = self.stack.pop() {
            if state == goal {
                trace!(pending = self.stack.len(), "goal reached");
                reachable = true;
                break;
            }
            if self.memo.is_dead(state) {
                stats.discarded += 1;
                continue;
            }
            for next in state.successors(
                inst.items(),
                inst.target_cost(),
                inst.target_weight(),
                self.options.order,
            ) {
                self.stack.push(next)?;
                stats.pushed += 1;
            }
            self.memo.mark_dead(state);
            stats.expanded += 1;
        }

        stats.max_stack = self.stack.high_water();
        debug!(
            reachable,
            expanded = stats.expanded,
            discarded = stats.discarded,
            pushed = stats.pushed,
            max_stack = stats.max_stack,
            dead = self.memo.dead_count(),
            "search finished"
        );
        Ok(Outcome { reachable, stats })
    }
}

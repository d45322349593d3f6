use smallvec::SmallVec;

use crate::instance::Item;

/// Visitation mark of a grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Marker {
    #[default]
    Unvisited,
    /// Popped and fully expanded without being the goal. Never expanded again.
    DeadEnd,
}

impl Marker {
    pub const fn name(&self) -> &'static str {
        match self {
            Marker::Unvisited => "unvisited",
            Marker::DeadEnd => "dead-end",
        }
    }
}

/// Order in which the two successors of a state are pushed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExpansionOrder {
    /// Push buy, then skip, so the skip path is popped next and the search
    /// runs to the last item before it branches.
    #[default]
    SkipFirst,
    BuyFirst,
}

impl ExpansionOrder {
    pub const fn name(&self) -> &'static str {
        match self {
            ExpansionOrder::SkipFirst => "skip-first",
            ExpansionOrder::BuyFirst => "buy-first",
        }
    }
}

/// `x` items considered, `y` cost accumulated, `z` weight accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl State {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        State { x, y, z }
    }

    pub const fn origin() -> Self {
        State { x: 0, y: 0, z: 0 }
    }

    /// Successors in push order. The buy successor only exists while it stays
    /// within both targets; the skip successor exists for every `x < items.len()`.
    pub fn successors(
        &self,
        items: &[Item],
        target_cost: usize,
        target_weight: usize,
        order: ExpansionOrder,
    ) -> SmallVec<[State; 2]> {
        let mut out = SmallVec::new();
        let Some(item) = items.get(self.x) else {
            return out;
        };
        let skip = State::new(self.x + 1, self.y, self.z);
        let fits = |room: Option<usize>, need: usize| room.is_some_and(|room| need <= room);
        let buy = (fits(target_cost.checked_sub(self.y), item.cost)
            && fits(target_weight.checked_sub(self.z), item.weight))
        .then(|| State::new(self.x + 1, self.y + item.cost, self.z + item.weight));

        match order {
            ExpansionOrder::SkipFirst => {
                out.extend(buy);
                out.push(skip);
            }
            ExpansionOrder::BuyFirst => {
                out.push(skip);
                out.extend(buy);
            }
        }
        out
    }
}

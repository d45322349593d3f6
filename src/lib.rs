pub mod api;
pub mod error;
pub mod format;
pub mod grid;
pub mod instance;
pub mod limits;
pub mod solver;
pub mod stack;
pub mod state;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use api::{solve, solve_instance, solve_with_limits, solve_with_options};
pub use error::SolveError;
pub use format::{format_answer, parse_instance};
pub use instance::{Instance, Item};
pub use limits::Limits;
pub use solver::{ExpansionOrder, MemoKind, Outcome, Search, SearchOptions, SearchStats};
pub use state::{Marker, State};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Try every inclusion choice.
    fn brute_force(target_cost: usize, target_weight: usize, items: &[(usize, usize)]) -> bool {
        (0u32..1 << items.len()).any(|choice| {
            let (cost, weight) = items
                .iter()
                .enumerate()
                .filter(|(idx, _)| choice & (1 << idx) != 0)
                .fold((0, 0), |(c, w), (_, &(ic, iw))| (c + ic, w + iw));
            cost == target_cost && weight == target_weight
        })
    }

    fn signed(items: &[(usize, usize)]) -> (Vec<i64>, Vec<i64>) {
        items.iter().map(|&(c, w)| (c as i64, w as i64)).unzip()
    }

    #[test]
    fn empty_instance_base_cases() {
        assert_eq!(solve(0, 0, 0, &[], &[]), Ok(true));
        assert_eq!(solve(0, 1, 0, &[], &[]), Ok(false));
        assert_eq!(solve(0, 0, 1, &[], &[]), Ok(false));
    }

    #[test]
    fn single_item() {
        assert_eq!(solve(1, 5, 3, &[5], &[3]), Ok(true));
        assert_eq!(solve(1, 0, 0, &[5], &[3]), Ok(true));
        assert_eq!(solve(1, 5, 4, &[5], &[3]), Ok(false));
    }

    #[test]
    fn overshooting_items_are_pruned_not_fatal() {
        assert_eq!(solve(2, 5, 0, &[3, 3], &[0, 0]), Ok(false));
        assert_eq!(solve(2, 6, 0, &[3, 3], &[0, 0]), Ok(true));
    }

    #[test]
    fn both_totals_must_match() {
        // Cost 7 is reachable twice, but only {2, 5} also weighs 4.
        let costs = [2, 5, 3, 4];
        let weights = [1, 3, 1, 2];
        assert_eq!(solve(4, 7, 4, &costs, &weights), Ok(true));
        assert_eq!(solve(4, 7, 5, &costs, &weights), Ok(false));
        assert_eq!(solve(4, 7, 3, &costs, &weights), Ok(true));
    }

    #[test]
    fn zero_cost_items() {
        assert_eq!(solve(3, 0, 4, &[0, 0, 0], &[1, 3, 5]), Ok(true));
        assert_eq!(solve(3, 0, 2, &[0, 0, 0], &[1, 3, 5]), Ok(false));
    }

    #[test]
    fn independent_calls_agree() {
        let costs = [4, 1, 7, 3, 2, 9];
        let weights = [2, 2, 5, 1, 1, 4];
        for (j, k) in [(10, 5), (12, 9), (26, 15), (3, 1)] {
            let first = solve(6, j, k, &costs, &weights);
            let second = solve(6, j, k, &costs, &weights);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn item_count_above_limit_is_capacity_exceeded() {
        let costs = vec![1; 501];
        let weights = vec![1; 501];
        let err = solve(501, 1, 1, &costs, &weights).unwrap_err();
        assert_eq!(
            err,
            SolveError::CapacityExceeded { field: "n", value: 501, max: 500 }
        );
    }

    #[test]
    fn targets_above_limit_are_capacity_exceeded() {
        assert!(solve(0, 101, 0, &[], &[]).unwrap_err().is_capacity());
        assert!(solve(0, 0, 101, &[], &[]).unwrap_err().is_capacity());
        let limits = Limits::new(2, 1000, 1000);
        assert_eq!(solve_with_limits(1, 101, 0, &[101], &[0], &limits), Ok(true));
    }

    #[test]
    fn raised_limits_still_bound_the_state_space() {
        let unbounded = Limits::new(0, usize::MAX, usize::MAX);
        let err = solve_with_limits(0, i64::MAX, i64::MAX, &[], &[], &unbounded).unwrap_err();
        assert!(err.is_capacity());

        // Large but sparse: only the skip spine and a few buys are reachable.
        let wide = Limits::new(3, 1 << 20, 1 << 20);
        let inst = Instance::from_parts(3, 1 << 20, 1, &[1 << 19, 1 << 19, 5], &[0, 1, 0], &wide)
            .unwrap();
        let sparse = SearchOptions { memo: MemoKind::Sparse, ..Default::default() };
        assert!(solve_with_options(&inst, sparse).unwrap().reachable);
    }

    #[test]
    fn malformed_input_is_invalid() {
        assert!(matches!(
            solve(2, 1, 1, &[1], &[1, 1]),
            Err(SolveError::InvalidInput(_))
        ));
        assert!(matches!(
            solve(1, 1, 1, &[-1], &[1]),
            Err(SolveError::InvalidInput(_))
        ));
    }

    #[test]
    fn full_reference_size_instance() {
        let n = 500;
        let costs: Vec<i64> = (0..n).map(|i| (i % 7) as i64 + 1).collect();
        let weights: Vec<i64> = (0..n).map(|i| (i % 5) as i64 + 1).collect();
        assert_eq!(solve(n, 100, 100, &costs, &weights), Ok(true));
        // Every item has positive weight, so weight 0 only admits the empty basket.
        assert_eq!(solve(n, 1, 0, &costs, &weights), Ok(false));
    }

    #[test]
    fn parse_then_solve() {
        let inst = parse_instance("3 10 6\n4 2\n6 4\n5 5\n", &Limits::default()).unwrap();
        assert_eq!(solve_instance(&inst), Ok(true));
        assert_eq!(format_answer(solve_instance(&inst).unwrap()), "Yes");
    }

    fn small_instance() -> impl Strategy<Value = (usize, usize, Vec<(usize, usize)>)> {
        (
            0usize..=10,
            0usize..=10,
            proptest::collection::vec((0usize..=6, 0usize..=6), 0..=10),
        )
    }

    proptest! {
        #[test]
        fn agrees_with_subset_enumeration((j, k, items) in small_instance()) {
            let (costs, weights) = signed(&items);
            let got = solve(items.len(), j as i64, k as i64, &costs, &weights).unwrap();
            prop_assert_eq!(got, brute_force(j, k, &items));
        }

        #[test]
        fn expansions_stay_within_state_count((j, k, items) in small_instance()) {
            let pairs = items.iter().map(|&(c, w)| Item::new(c, w)).collect();
            let inst = Instance::new(j, k, pairs, &Limits::default()).unwrap();
            let outcome = solve_with_options(&inst, SearchOptions::default()).unwrap();
            prop_assert!(outcome.stats.expanded <= inst.state_count());
            prop_assert!(outcome.stats.max_stack <= inst.state_count() + 1);
        }

        #[test]
        fn memo_kinds_and_orders_agree((j, k, items) in small_instance()) {
            let pairs = items.iter().map(|&(c, w)| Item::new(c, w)).collect();
            let inst = Instance::new(j, k, pairs, &Limits::default()).unwrap();
            let baseline = solve_with_options(&inst, SearchOptions::default()).unwrap();
            for order in [ExpansionOrder::SkipFirst, ExpansionOrder::BuyFirst] {
                for memo in [MemoKind::Dense, MemoKind::Sparse] {
                    let outcome = solve_with_options(&inst, SearchOptions { order, memo }).unwrap();
                    prop_assert_eq!(outcome.reachable, baseline.reachable);
                    if order == ExpansionOrder::SkipFirst {
                        prop_assert_eq!(outcome.stats, baseline.stats);
                    }
                }
            }
        }
    }
}

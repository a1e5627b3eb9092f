use std::collections::{HashMap, HashSet};

use dp_dag::{
    graph::EdgeKind,
    problems::{
        beautiful::{self, BeautifulArrangementProblem},
        can_i_win::CanIWinProblem,
        tsp::{self, TspProblem},
    },
    DpProblem, Graph, Value,
};
use proptest::prelude::*;

fn incoming(g: &Graph, id: usize) -> HashSet<(usize, EdgeKind)> {
    g.incoming(id).map(|e| (e.from, e.kind)).collect()
}

fn permutations(items: Vec<usize>) -> Vec<Vec<usize>> {
    if items.len() <= 1 {
        return vec![items];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.clone();
        let head = rest.remove(i);
        for mut tail in permutations(rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

fn tour_cost(dist: &[Vec<i64>], order: &[usize]) -> i64 {
    let closing = dist[order[order.len() - 1]][order[0]];
    order.windows(2).map(|w| dist[w[0]][w[1]]).sum::<i64>() + closing
}

/// Cheapest route from city 0 through exactly the cities in `mask`,
/// ending at `last`.
fn brute_route(dist: &[Vec<i64>], mask: usize, last: usize) -> Option<i64> {
    if mask & 1 == 0 || mask & (1 << last) == 0 {
        return None;
    }
    if last == 0 {
        return (mask == 1).then_some(0);
    }
    let middle: Vec<usize> = (1..dist.len())
        .filter(|&c| c != last && mask & (1 << c) != 0)
        .collect();
    permutations(middle)
        .into_iter()
        .map(|order| {
            let mut route = vec![0];
            route.extend(order);
            route.push(last);
            route.windows(2).map(|w| dist[w[0]][w[1]]).sum::<i64>()
        })
        .min()
}

fn numbers_sum(mask: usize, max: usize) -> u32 {
    (1..=max as u32).filter(|&k| mask & (1 << (k - 1)) != 0).sum()
}

/// Masks a game can pass through: play stops once the total hits the target.
fn live_masks(max: usize, target: u32) -> HashSet<usize> {
    let mut seen = HashSet::from([0usize]);
    let mut stack = vec![0usize];
    while let Some(mask) = stack.pop() {
        if numbers_sum(mask, max) >= target {
            continue;
        }
        for k in 0..max {
            let next = mask | (1 << k);
            if next != mask && seen.insert(next) {
                stack.push(next);
            }
        }
    }
    seen
}

/// Beautiful orders of the numbers in `mask` over positions `1..=|mask|`.
fn partial_arrangements(mask: usize, n: usize) -> i64 {
    let nums: Vec<usize> = (1..=n).filter(|&x| mask & (1 << (x - 1)) != 0).collect();
    permutations(nums)
        .into_iter()
        .filter(|perm| perm.iter().enumerate().all(|(i, &x)| beautiful::fits(i + 1, x)))
        .count() as i64
}

/// Plain minimax over the remaining numbers, memoized on the used set.
fn first_player_wins(max: usize, target: u32, used: u32, total: u32, memo: &mut HashMap<u32, bool>) -> bool {
    if let Some(&w) = memo.get(&used) {
        return w;
    }
    let wins = (1..=max as u32).any(|k| {
        let bit = 1 << (k - 1);
        used & bit == 0
            && (total + k >= target || !first_player_wins(max, target, used | bit, total + k, memo))
    });
    memo.insert(used, wins);
    wins
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tsp_matches_permutations(
        (n, raw) in (2usize..7).prop_flat_map(|n| (Just(n), prop::collection::vec(1i64..30, n * n)))
    ) {
        let dist: Vec<Vec<i64>> = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0 } else { raw[i * n + j] }).collect())
            .collect();
        let g = TspProblem::new(dist.clone()).solve();
        let expect = permutations((1..n).collect())
            .into_iter()
            .map(|rest| {
                let mut order = vec![0];
                order.extend(rest);
                tour_cost(&dist, &order)
            })
            .min()
            .unwrap();
        prop_assert_eq!(g.answer, Value::Int(expect));

        let order = tsp::tour_order(&g, n);
        prop_assert_eq!(order.len(), n);
        prop_assert_eq!(order[0], 0);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());
        prop_assert_eq!(tour_cost(&dist, &order), expect);
        prop_assert!(g.trace_is_simple_path());
        prop_assert_eq!(g.validate(), Ok(()));
    }

    #[test]
    fn tsp_states_match_brute_routes(
        (n, raw) in (2usize..6).prop_flat_map(|n| (Just(n), prop::collection::vec(1i64..30, n * n)))
    ) {
        let dist: Vec<Vec<i64>> = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0 } else { raw[i * n + j] }).collect())
            .collect();
        let g = TspProblem::new(dist.clone()).solve();
        for mask in 1usize..1 << n {
            for last in (0..n).filter(|&l| mask & (1 << l) != 0) {
                let id = mask * n + last;
                let route = brute_route(&dist, mask, last);
                prop_assert_eq!(g.value(id), Some(route.map_or(Value::Unreachable, Value::Int)), "T({:b},{})", mask, last);

                // reachable states read every reachable state one city shorter
                let prev_mask = mask ^ (1 << last);
                let preds: HashSet<_> = if route.is_some() {
                    (0..n)
                        .filter(|&p| prev_mask & (1 << p) != 0 && brute_route(&dist, prev_mask, p).is_some())
                        .map(|p| (prev_mask * n + p, EdgeKind::Visit))
                        .collect()
                } else {
                    HashSet::new()
                };
                prop_assert_eq!(incoming(&g, id), preds, "T({:b},{})", mask, last);
            }
        }
    }

    #[test]
    fn can_i_win_matches_minimax(max in 1usize..8, target in 1u32..30) {
        let p = CanIWinProblem::new(max, target);
        let g = p.solve();
        let mut memo = HashMap::new();
        let expect = first_player_wins(max, target, 0, 0, &mut memo);
        prop_assert_eq!(g.answer, Value::Bool(expect));

        let live = live_masks(max, target);
        prop_assert_eq!(g.nodes.len(), live.len());
        for &mask in &live {
            let total = numbers_sum(mask, max);
            let finished = total >= target;
            let want = !finished && first_player_wins(max, target, mask as u32, total, &mut memo);
            prop_assert_eq!(g.value(mask), Some(Value::Bool(want)), "T({:b})", mask);

            // an unfinished state reads every successor
            let preds: HashSet<_> = if finished {
                HashSet::new()
            } else {
                (0..max)
                    .filter(|&k| mask & (1 << k) == 0)
                    .map(|k| (mask | (1 << k), EdgeKind::Move))
                    .collect()
            };
            prop_assert_eq!(incoming(&g, mask), preds, "T({:b})", mask);
        }
        prop_assert!(g.trace_is_simple_path());
        prop_assert_eq!(g.validate(), Ok(()));
    }
}

#[test]
fn beautiful_counts_match_permutations() {
    for n in 1..=7 {
        let expect = permutations((1..=n).collect())
            .into_iter()
            .filter(|perm| perm.iter().enumerate().all(|(i, &x)| beautiful::fits(i + 1, x)))
            .count() as i64;
        let g = BeautifulArrangementProblem::new(n).solve();
        assert_eq!(g.answer, Value::Int(expect), "n = {n}");

        let perm = beautiful::arrangement(&g);
        assert_eq!(perm.len(), n);
        assert!(perm.iter().enumerate().all(|(i, &x)| beautiful::fits(i + 1, x)));
        assert_eq!(g.validate(), Ok(()));
    }
}

#[test]
fn beautiful_states_count_partial_arrangements() {
    for n in 1..=6 {
        let g = BeautifulArrangementProblem::new(n).solve();
        for mask in 0usize..1 << n {
            let count = partial_arrangements(mask, n);
            if mask != 0 && count == 0 {
                assert_eq!(g.value(mask), None, "dead state {mask:b} is drawn");
                continue;
            }
            assert_eq!(g.value(mask), Some(Value::Int(count)), "n = {n}, mask = {mask:b}");

            // the last placed number sits at position |mask|
            let pos = mask.count_ones() as usize;
            let preds: HashSet<_> = (1..=n)
                .filter(|&x| mask & (1 << (x - 1)) != 0 && beautiful::fits(pos, x))
                .map(|x| mask ^ (1 << (x - 1)))
                .filter(|&prev| prev == 0 || partial_arrangements(prev, n) > 0)
                .map(|prev| (prev, EdgeKind::Place))
                .collect();
            assert_eq!(incoming(&g, mask), preds, "n = {n}, mask = {mask:b}");
        }
    }
}

#[test]
fn known_beautiful_counts() {
    let counts: Vec<Value> = (1..=6)
        .map(|n| BeautifulArrangementProblem::new(n).solve().answer)
        .collect();
    assert_eq!(counts, [1, 2, 3, 8, 10, 36].map(Value::Int).to_vec());
}

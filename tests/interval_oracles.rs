use std::collections::{HashMap, HashSet};

use dp_dag::{
    graph::EdgeKind,
    problems::{
        interval_lps::{self, IntervalLpsProblem},
        matrix_chain::MatrixChainProblem,
        optimal_bst::OptimalBstProblem,
        stick_cutting::StickCuttingProblem,
    },
    DpProblem, Graph, Value,
};
use proptest::prelude::*;

type Memo = HashMap<(usize, usize), i64>;

fn incoming(g: &Graph, id: usize) -> HashSet<(usize, EdgeKind)> {
    g.incoming(id).map(|e| (e.from, e.kind)).collect()
}

fn memo_lps(s: &[u8], i: usize, j: usize, memo: &mut Memo) -> i64 {
    if i == j {
        return 1;
    }
    if let Some(&v) = memo.get(&(i, j)) {
        return v;
    }
    let v = if s[i] == s[j] {
        2 + if j > i + 1 { memo_lps(s, i + 1, j - 1, memo) } else { 0 }
    } else {
        memo_lps(s, i + 1, j, memo).max(memo_lps(s, i, j - 1, memo))
    };
    memo.insert((i, j), v);
    v
}

fn memo_chain(p: &[u64], i: usize, j: usize, memo: &mut Memo) -> i64 {
    if i == j {
        return 0;
    }
    if let Some(&v) = memo.get(&(i, j)) {
        return v;
    }
    let v = (i..j)
        .map(|k| {
            memo_chain(p, i, k, memo) + memo_chain(p, k + 1, j, memo) + (p[i] * p[k + 1] * p[j + 1]) as i64
        })
        .min()
        .unwrap_or(0);
    memo.insert((i, j), v);
    v
}

/// Cost of the chain multiplied in the order a parenthesization spells.
fn eval_parens(expr: &str, p: &[u64]) -> i64 {
    // stack of (rows, cols) shapes, plus the running scalar count
    let mut stack: Vec<(u64, u64)> = Vec::new();
    let mut total = 0i64;
    let bytes = expr.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'A' => {
                let start = pos + 1;
                pos = start;
                while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
                let idx: usize = expr[start..pos].parse().unwrap();
                stack.push((p[idx - 1], p[idx]));
                continue;
            }
            b')' => {
                let (r2, c2) = stack.pop().unwrap();
                let (r1, c1) = stack.pop().unwrap();
                assert_eq!(c1, r2, "incompatible product in {expr}");
                total += (r1 * c1 * c2) as i64;
                stack.push((r1, c2));
            }
            _ => {}
        }
        pos += 1;
    }
    total
}

fn memo_bst(freq: &[i64], i: usize, j: usize, memo: &mut Memo) -> i64 {
    if i > j {
        return 0;
    }
    if let Some(&v) = memo.get(&(i, j)) {
        return v;
    }
    let weight: i64 = freq[i..=j].iter().sum();
    let v = (i..=j)
        .map(|r| {
            let left = if r > i { memo_bst(freq, i, r - 1, memo) } else { 0 };
            weight + left + memo_bst(freq, r + 1, j, memo)
        })
        .min()
        .unwrap_or(0);
    memo.insert((i, j), v);
    v
}

fn memo_cut(pos: &[i64], i: usize, j: usize, memo: &mut Memo) -> i64 {
    if j <= i + 1 {
        return 0;
    }
    if let Some(&v) = memo.get(&(i, j)) {
        return v;
    }
    let v = ((i + 1)..j)
        .map(|k| memo_cut(pos, i, k, memo) + memo_cut(pos, k, j, memo))
        .min()
        .unwrap_or(0)
        + pos[j]
        - pos[i];
    memo.insert((i, j), v);
    v
}

fn is_subsequence(needle: &[u8], hay: &[u8]) -> bool {
    let mut it = hay.iter();
    needle.iter().all(|c| it.any(|h| h == c))
}

proptest! {
    #[test]
    fn matrix_chain_matches_recursion(p in prop::collection::vec(1u64..12, 2..8)) {
        let problem = MatrixChainProblem::new(p.clone());
        let g = problem.solve();
        let mut memo = HashMap::new();
        let expect = memo_chain(&p, 0, p.len() - 2, &mut memo);
        prop_assert_eq!(g.answer, Value::Int(expect));

        // every sub-chain, with one Left/Right pair per split point
        let n = p.len() - 1;
        for i in 0..n {
            for j in i..n {
                let want = memo_chain(&p, i, j, &mut memo);
                prop_assert_eq!(g.value(i * n + j), Some(Value::Int(want)), "T({},{})", i, j);
                let splits: HashSet<_> = (i..j)
                    .flat_map(|k| [(i * n + k, EdgeKind::Left), ((k + 1) * n + j, EdgeKind::Right)])
                    .collect();
                prop_assert_eq!(incoming(&g, i * n + j), splits, "T({},{})", i, j);
            }
        }

        // the traced split tree is the printed parenthesization
        let expr = problem.parenthesize();
        prop_assert_eq!(eval_parens(&expr, &p), expect);
        let leaves = g.path_nodes().filter(|n| n.id / (p.len() - 1) == n.id % (p.len() - 1)).count();
        prop_assert_eq!(leaves, p.len() - 1);
        prop_assert_eq!(g.validate(), Ok(()));
    }

    #[test]
    fn interval_lps_spells_a_longest_palindrome(s in "[ABC]{1,10}") {
        let bytes = s.as_bytes();
        let g = IntervalLpsProblem::new(bytes.to_vec()).solve();
        let rev: Vec<u8> = bytes.iter().rev().copied().collect();
        let expect = {
            // LPS(s) = LCS(s, reverse(s))
            let n = bytes.len();
            let mut dp = vec![vec![0i64; n + 1]; n + 1];
            for i in 1..=n {
                for j in 1..=n {
                    dp[i][j] = if bytes[i - 1] == rev[j - 1] {
                        dp[i - 1][j - 1] + 1
                    } else {
                        dp[i - 1][j].max(dp[i][j - 1])
                    };
                }
            }
            dp[n][n]
        };
        prop_assert_eq!(g.answer, Value::Int(expect));

        let n = bytes.len();
        let mut memo = HashMap::new();
        for i in 0..n {
            for j in i..n {
                let want = memo_lps(bytes, i, j, &mut memo);
                prop_assert_eq!(g.value(i * n + j), Some(Value::Int(want)), "T({},{})", i, j);
                let preds: HashSet<_> = if i == j {
                    HashSet::new()
                } else if bytes[i] == bytes[j] {
                    (j > i + 1).then(|| ((i + 1) * n + j - 1, EdgeKind::Inner)).into_iter().collect()
                } else {
                    HashSet::from([
                        ((i + 1) * n + j, EdgeKind::ShrinkLeft),
                        (i * n + j - 1, EdgeKind::ShrinkRight),
                    ])
                };
                prop_assert_eq!(incoming(&g, i * n + j), preds, "T({},{})", i, j);
            }
        }

        let word = interval_lps::spelled(&g, bytes);
        prop_assert_eq!(word.len() as i64, expect);
        prop_assert!(word.bytes().eq(word.bytes().rev()));
        prop_assert!(is_subsequence(word.as_bytes(), bytes));
        prop_assert!(g.trace_is_simple_path());
        prop_assert_eq!(g.validate(), Ok(()));
    }

    #[test]
    fn optimal_bst_matches_recursion(freq in prop::collection::vec(0i64..10, 1..7)) {
        let keys: Vec<i64> = (0..freq.len() as i64).map(|k| 10 * (k + 1)).collect();
        let g = OptimalBstProblem::new(keys, freq.clone()).solve();
        let mut memo = HashMap::new();
        let expect = memo_bst(&freq, 0, freq.len() - 1, &mut memo);
        prop_assert_eq!(g.answer, Value::Int(expect));

        // root r reads (i,r-1) when r > i and (r+1,j) when r < j
        let n = freq.len();
        for i in 0..n {
            for j in i..n {
                let want = memo_bst(&freq, i, j, &mut memo);
                prop_assert_eq!(g.value(i * n + j), Some(Value::Int(want)), "T({},{})", i, j);
                let subtrees: HashSet<_> = (i..j)
                    .map(|r| (i * n + r, EdgeKind::Left))
                    .chain(((i + 1)..=j).map(|r| (r * n + j, EdgeKind::Right)))
                    .collect();
                prop_assert_eq!(incoming(&g, i * n + j), subtrees, "T({},{})", i, j);
            }
        }
        prop_assert_eq!(g.validate(), Ok(()));
    }

    #[test]
    fn stick_cutting_matches_recursion(
        length in 2i64..30,
        cuts in prop::collection::vec(1i64..29, 0..6),
    ) {
        let cuts: Vec<i64> = cuts.into_iter().filter(|&c| c < length).collect();
        let problem = StickCuttingProblem::new(length, cuts);
        let pos = problem.positions();
        let g = problem.solve();
        let mut memo = HashMap::new();
        let expect = memo_cut(&pos, 0, pos.len() - 1, &mut memo);
        prop_assert_eq!(g.answer, Value::Int(expect));

        let m = pos.len();
        for i in 0..m {
            for j in (i + 1)..m {
                let want = memo_cut(&pos, i, j, &mut memo);
                prop_assert_eq!(g.value(i * m + j), Some(Value::Int(want)), "T({},{})", i, j);
                let splits: HashSet<_> = ((i + 1)..j)
                    .flat_map(|k| [(i * m + k, EdgeKind::Left), (k * m + j, EdgeKind::Right)])
                    .collect();
                prop_assert_eq!(incoming(&g, i * m + j), splits, "T({},{})", i, j);
            }
        }
        prop_assert_eq!(g.validate(), Ok(()));
    }
}

#[test]
fn clrs_matrix_chain() {
    let problem = MatrixChainProblem::new(vec![30, 35, 15, 5, 10, 20, 25]);
    assert_eq!(problem.solve().answer, Value::Int(15125));
    assert_eq!(problem.parenthesize(), "((A1(A2A3))((A4A5)A6))");
}

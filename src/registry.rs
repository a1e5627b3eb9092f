//! Problem registry: every built-in solver with its textbook description,
//! grouped into the six DAG pattern families.
//!
//! The registry is the no-argument face of the crate. Each [`Descriptor`]
//! pairs static explanatory text with a `solve` function that runs the
//! problem's default instance.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{DpError, Result};
use crate::graph::Graph;
use crate::problems::{
    beautiful::BeautifulArrangementProblem, can_i_win::CanIWinProblem,
    coin_change::CoinChangeProblem, diameter::DiameterProblem,
    edit_distance::EditDistanceProblem, floyd_warshall::FloydWarshallProblem,
    house_robber::HouseRobberProblem, interval_lps::IntervalLpsProblem,
    knapsack::KnapsackProblem, lc_substring::LcSubstringProblem, lcs::LcsProblem,
    lis::LisProblem, matrix_chain::MatrixChainProblem, max_path_sum::MaxPathSumProblem,
    max_square::MaxSquareProblem, max_subarray::MaxSubarrayProblem,
    optimal_bst::OptimalBstProblem, oscillating::OscillatingProblem,
    palindrome::PalindromeProblem, stick_cutting::StickCuttingProblem,
    subset_sum::SubsetSumProblem, tsp::TspProblem,
    unbounded_knapsack::UnboundedKnapsackProblem,
};
use crate::traits::DpProblem;

/// DAG topology family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pattern {
    Linear,
    Grid,
    PseudoPoly,
    Interval,
    Tree,
    Bitmask,
}

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::Linear,
        Pattern::Grid,
        Pattern::PseudoPoly,
        Pattern::Interval,
        Pattern::Tree,
        Pattern::Bitmask,
    ];

    pub fn letter(self) -> char {
        match self {
            Pattern::Linear => 'A',
            Pattern::Grid => 'B',
            Pattern::PseudoPoly => 'C',
            Pattern::Interval => 'D',
            Pattern::Tree => 'E',
            Pattern::Bitmask => 'F',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Linear => "linear",
            Pattern::Grid => "grid",
            Pattern::PseudoPoly => "pseudo-poly",
            Pattern::Interval => "interval",
            Pattern::Tree => "tree",
            Pattern::Bitmask => "bitmask",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Pattern::Linear => "Pattern A: Linear (1D Chain)",
            Pattern::Grid => "Pattern B: Grid / Dual-Sequence (2D Mesh)",
            Pattern::PseudoPoly => "Pattern C: Pseudo-Polynomial (Knapsack)",
            Pattern::Interval => "Pattern D: Interval Pyramid (Range DP)",
            Pattern::Tree => "Pattern E: Tree DP (Root Flow)",
            Pattern::Bitmask => "Pattern F: Bitmask (Hypercube)",
        }
    }

    /// Problem keys of this family, in display order.
    pub fn problems(self) -> impl Iterator<Item = &'static str> {
        PROBLEMS
            .iter()
            .filter(move |d| d.pattern == self)
            .map(|d| d.key)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Pattern {
    type Err = DpError;

    /// Accepts the family letter (`"C"`, `"c"`) or its name (`"pseudo-poly"`).
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Pattern::ALL
            .into_iter()
            .find(|p| {
                wanted.eq_ignore_ascii_case(p.name())
                    || (wanted.len() == 1 && wanted.eq_ignore_ascii_case(&p.letter().to_string()))
            })
            .ok_or_else(|| DpError::UnknownPattern(s.to_string()))
    }
}

/// Asymptotic costs as shown next to a recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Costs {
    pub subproblems: &'static str,
    pub runtime: &'static str,
    pub extraction: &'static str,
}

/// Static description of one problem plus its default solver.
#[derive(Clone, Copy)]
pub struct Descriptor {
    pub key: &'static str,
    pub title: &'static str,
    pub pattern: Pattern,
    pub subproblem: &'static str,
    pub input: &'static str,
    pub base_cases: &'static str,
    pub recurrence: &'static str,
    pub answer: &'static str,
    pub costs: Costs,
    pub insight: &'static str,
    pub dag_shape: &'static str,
    pub solve: fn() -> Graph,
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

impl Descriptor {
    /// Solve the default instance.
    pub fn solve(&self) -> Graph {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("solve", key = self.key).entered();

        (self.solve)()
    }

    /// Solve and check every structural invariant of the result.
    pub fn check(&self) -> Result<Graph> {
        let graph = self.solve();
        graph.validate().map_err(|source| DpError::MalformedGraph {
            key: self.key,
            source,
        })?;
        Ok(graph)
    }
}

fn solve_default<P: DpProblem + Default>() -> Graph {
    P::default().solve()
}

/// All problems in display order.
pub fn problems() -> &'static [Descriptor] {
    PROBLEMS
}

pub fn lookup(key: &str) -> Result<&'static Descriptor> {
    PROBLEMS
        .iter()
        .find(|d| d.key == key)
        .ok_or_else(|| DpError::UnknownProblem(key.to_string()))
}

pub fn by_pattern(pattern: Pattern) -> impl Iterator<Item = &'static Descriptor> {
    PROBLEMS.iter().filter(move |d| d.pattern == pattern)
}

/// Solve one problem by key.
pub fn solve(key: &str) -> Result<Graph> {
    Ok(lookup(key)?.solve())
}

/// Solve every problem, in display order.
pub fn solve_all() -> Vec<(&'static str, Graph)> {
    #[cfg(feature = "parallel")]
    {
        PROBLEMS.par_iter().map(|d| (d.key, d.solve())).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        PROBLEMS.iter().map(|d| (d.key, d.solve())).collect()
    }
}

/// Solve and validate every problem, stopping at the first malformed graph.
pub fn check_all() -> Result<Vec<(&'static str, Graph)>> {
    #[cfg(feature = "parallel")]
    {
        PROBLEMS
            .par_iter()
            .map(|d| d.check().map(|g| (d.key, g)))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        PROBLEMS
            .iter()
            .map(|d| d.check().map(|g| (d.key, g)))
            .collect()
    }
}

static PROBLEMS: &[Descriptor] = &[
    Descriptor {
        key: "lis",
        title: "Longest Increasing Subsequence",
        pattern: Pattern::Linear,
        subproblem: "T(i) = length of LIS in A[1…i] which includes A[i]",
        input: "A = [3,1,4,1,5,9,2,6]",
        base_cases: "T(1) = 1",
        recurrence: "T(i) = 1 + max{T(j) : 1 ≤ j < i, A[j] < A[i]},\n       2 ≤ i ≤ n",
        answer: "return max{T(i)}, 1 ≤ i ≤ n",
        costs: Costs {
            subproblems: "O(n)",
            runtime: "O(n²)",
            extraction: "O(n)",
        },
        insight: "Each node looks back at ALL prior nodes. Answer scans all nodes because the LIS can end anywhere.",
        dag_shape: "1D chain, backward arcs of varying length",
        solve: solve_default::<LisProblem>,
    },
    Descriptor {
        key: "maxsub",
        title: "Maximum Subarray (Kadane's)",
        pattern: Pattern::Linear,
        subproblem: "T(i) = max sum of a contiguous subarray ending at A[i]",
        input: "A = [2,−3,5,−1,4,−2,1]",
        base_cases: "T(1) = A[1]",
        recurrence: "T(i) = max(A[i], T(i−1) + A[i]),  2 ≤ i ≤ n",
        answer: "return max{T(i)}, 1 ≤ i ≤ n",
        costs: Costs {
            subproblems: "O(n)",
            runtime: "O(n)",
            extraction: "O(n)",
        },
        insight: "Simplest linear DAG: each node depends ONLY on the previous node. Decide: extend the subarray or restart here.",
        dag_shape: "1D chain, each node → next node only",
        solve: solve_default::<MaxSubarrayProblem>,
    },
    Descriptor {
        key: "coins",
        title: "Coin Change (Min Coins)",
        pattern: Pattern::Linear,
        subproblem: "T(v) = minimum number of coins to make value v",
        input: "coins = {1,3,4}, V = 7",
        base_cases: "T(0) = 0",
        recurrence: "T(v) = 1 + min{T(v−c) : c ∈ coins, c ≤ v},\n       1 ≤ v ≤ V",
        answer: "return T(V)",
        costs: Costs {
            subproblems: "O(V)",
            runtime: "O(V·|coins|)",
            extraction: "O(1)",
        },
        insight: "Multiple backward jump lengths (one per coin). Unlike LIS, the answer is T(V) itself, with no max scan.",
        dag_shape: "1D chain, multiple fixed backward jumps",
        solve: solve_default::<CoinChangeProblem>,
    },
    Descriptor {
        key: "oscillating",
        title: "Longest Oscillating Subsequence",
        pattern: Pattern::Linear,
        subproblem: "up(i) = length of longest oscillating subseq ending at A[i] with last move up\ndown(i) = … with last move down",
        input: "A = [1,5,3,8,2,7]",
        base_cases: "up(1) = 1,  down(1) = 1",
        recurrence: "up(i) = 1 + max{down(j) : A[j] < A[i], 1 ≤ j < i}\ndown(i) = 1 + max{up(j) : A[j] > A[i], 1 ≤ j < i}\n       2 ≤ i ≤ n",
        answer: "return max{up(i), down(i)}, 1 ≤ i ≤ n",
        costs: Costs {
            subproblems: "O(n)",
            runtime: "O(n²)",
            extraction: "O(n)",
        },
        insight: "Like LIS but with TWO DP values per node. Edges alternate between 'went up' and 'went down'. Same scan-all-nodes answer extraction.",
        dag_shape: "1D chain, two interleaved layers",
        solve: solve_default::<OscillatingProblem>,
    },
    Descriptor {
        key: "lcs",
        title: "Longest Common Subsequence",
        pattern: Pattern::Grid,
        subproblem: "T(i,j) = length of LCS of X[1…i] and Y[1…j]",
        input: "X = \"ABCB\", Y = \"BDCB\"",
        base_cases: "T(i,0) = 0, 0 ≤ i ≤ m\nT(0,j) = 0, 0 ≤ j ≤ n",
        recurrence: "T(i,j) = T(i−1,j−1) + 1,        if X[i] = Y[j]\n       = max(T(i−1,j), T(i,j−1)), otherwise\n       1 ≤ i ≤ m, 1 ≤ j ≤ n",
        answer: "return T(m, n)",
        costs: Costs {
            subproblems: "O(mn)",
            runtime: "O(mn)",
            extraction: "O(1)",
        },
        insight: "3-neighbor grid. Diagonal edges appear ONLY on character matches. Answer is always at the bottom-right corner.",
        dag_shape: "2D grid, ≤3 edges into each cell",
        solve: solve_default::<LcsProblem<'static>>,
    },
    Descriptor {
        key: "edit",
        title: "Edit Distance",
        pattern: Pattern::Grid,
        subproblem: "T(i,j) = min edits to transform X[1…i] into Y[1…j]",
        input: "X = \"SAT\", Y = \"SUN\"",
        base_cases: "T(i,0) = i, 0 ≤ i ≤ m\nT(0,j) = j, 0 ≤ j ≤ n",
        recurrence: "T(i,j) = T(i−1,j−1),                     if X[i] = Y[j]\n       = 1 + min(T(i−1,j−1), T(i−1,j), T(i,j−1)), otherwise\n       1 ≤ i ≤ m, 1 ≤ j ≤ n",
        answer: "return T(m, n)",
        costs: Costs {
            subproblems: "O(mn)",
            runtime: "O(mn)",
            extraction: "O(1)",
        },
        insight: "Same grid as LCS but diagonal edges ALWAYS exist (replace operation). Base cases are non-zero: T(i,0)=i, T(0,j)=j.",
        dag_shape: "2D grid, always 3 edges per interior cell",
        solve: solve_default::<EditDistanceProblem<'static>>,
    },
    Descriptor {
        key: "maxsquare",
        title: "Maximum Square Submatrix",
        pattern: Pattern::Grid,
        subproblem: "T(i,j) = side length of largest square of 1s ending at cell (i,j)",
        input: "4×4 binary matrix M",
        base_cases: "T(i,j) = M[i][j] if i = 1 or j = 1",
        recurrence: "T(i,j) = 0,                          if M[i][j] = 0\n       = 1 + min(T(i−1,j−1), T(i−1,j), T(i,j−1)), if M[i][j] = 1\n       2 ≤ i ≤ m, 2 ≤ j ≤ n",
        answer: "return max{T(i,j)}, 1 ≤ i ≤ m, 1 ≤ j ≤ n",
        costs: Costs {
            subproblems: "O(mn)",
            runtime: "O(mn)",
            extraction: "O(mn)",
        },
        insight: "Same 3-neighbor structure as Edit Distance, but answer requires scanning ALL cells. The highlighted region is the max square found.",
        dag_shape: "2D grid, min of 3 neighbors",
        solve: solve_default::<MaxSquareProblem>,
    },
    Descriptor {
        key: "palindrome",
        title: "Longest Palindromic Subsequence",
        pattern: Pattern::Grid,
        subproblem: "T(i,j) = length of LCS of S[1…i] and reverse(S)[1…j]",
        input: "S = \"ABCBA\" → LCS(S, rev(S))",
        base_cases: "T(i,0) = 0, T(0,j) = 0",
        recurrence: "Same as LCS with Y = reverse(X)",
        answer: "return T(n, n)",
        costs: Costs {
            subproblems: "O(n²)",
            runtime: "O(n²)",
            extraction: "O(1)",
        },
        insight: "Clever reduction: palindrome = LCS of string with its reverse. The DAG is identical to LCS; only the input is transformed.",
        dag_shape: "(n+1)×(n+1) grid, same as LCS",
        solve: solve_default::<PalindromeProblem>,
    },
    Descriptor {
        key: "substring",
        title: "Longest Common Substring",
        pattern: Pattern::Grid,
        subproblem: "T(i,j) = length of the longest common suffix of X[1…i] and Y[1…j]",
        input: "X = \"bans\", Y = \"banana\"",
        base_cases: "T(i,0) = 0, T(0,j) = 0",
        recurrence: "T(i,j) = T(i−1,j−1) + 1,  if X[i] = Y[j]\n       = 0,                otherwise\n       1 ≤ i ≤ m, 1 ≤ j ≤ n",
        answer: "return max{T(i,j)}, 0 ≤ i ≤ m, 0 ≤ j ≤ n",
        costs: Costs {
            subproblems: "O(mn)",
            runtime: "O(mn)",
            extraction: "O(mn)",
        },
        insight: "LCS grid with the horizontal and vertical edges removed: a mismatch resets the run, so only diagonal streaks survive and the answer needs a scan over all cells.",
        dag_shape: "2D grid, disjoint diagonal runs",
        solve: solve_default::<LcSubstringProblem<'static>>,
    },
    Descriptor {
        key: "knapsack",
        title: "0/1 Knapsack",
        pattern: Pattern::PseudoPoly,
        subproblem: "T(i,w) = max value using items 1…i with capacity w",
        input: "items = [(w=2,v=3),(w=3,v=4),(w=4,v=5)], W=6",
        base_cases: "T(0,w) = 0, 0 ≤ w ≤ W",
        recurrence: "T(i,w) = max(T(i−1,w), v_i + T(i−1, w−w_i)),  if w_i ≤ w\n       = T(i−1,w),                               otherwise\n       1 ≤ i ≤ n, 0 ≤ w ≤ W",
        answer: "return T(n, W)",
        costs: Costs {
            subproblems: "O(nW)",
            runtime: "O(nW)",
            extraction: "O(1)",
        },
        insight: "Skip = straight down. Take = diagonal jump left by w_i. The variable jump distance is why capacity W must be a table dimension.",
        dag_shape: "2D grid with variable diagonal jumps",
        solve: solve_default::<KnapsackProblem>,
    },
    Descriptor {
        key: "subset",
        title: "Subset Sum",
        pattern: Pattern::PseudoPoly,
        subproblem: "T(i,s) = TRUE iff a subset of nums[1…i] sums to s",
        input: "nums = [3,7,1,8,4], K = 11",
        base_cases: "T(0,0) = TRUE\nT(0,s) = FALSE, 1 ≤ s ≤ K",
        recurrence: "T(i,s) = T(i−1,s) OR T(i−1, s−nums[i]),  if nums[i] ≤ s\n       = T(i−1,s),                           otherwise\n       1 ≤ i ≤ n, 0 ≤ s ≤ K",
        answer: "return T(n, K)",
        costs: Costs {
            subproblems: "O(nK)",
            runtime: "O(nK)",
            extraction: "O(1)",
        },
        insight: "Boolean knapsack: OR instead of MAX. The DAG shape is unchanged; only the edge semantics differ.",
        dag_shape: "Same as 0/1 Knapsack, boolean values",
        solve: solve_default::<SubsetSumProblem>,
    },
    Descriptor {
        key: "unbounded",
        title: "Unbounded Knapsack",
        pattern: Pattern::PseudoPoly,
        subproblem: "T(w) = max value achievable with capacity w (items reusable)",
        input: "items = [(w=2,v=3),(w=3,v=4),(w=5,v=7)], W=8",
        base_cases: "T(0) = 0",
        recurrence: "T(w) = max{v_i + T(w−w_i) : w_i ≤ w, 1 ≤ i ≤ n},\n       1 ≤ w ≤ W",
        answer: "return T(W)",
        costs: Costs {
            subproblems: "O(W)",
            runtime: "O(W·n)",
            extraction: "O(1)",
        },
        insight: "With repetition allowed, the 2D grid collapses to 1D! Each T(w) pulls from T(w−w_i) for all items. Same shape as Coin Change.",
        dag_shape: "1D chain, multiple backward jumps (like Coin Change)",
        solve: solve_default::<UnboundedKnapsackProblem>,
    },
    Descriptor {
        key: "floyd",
        title: "Floyd-Warshall (APSP)",
        pattern: Pattern::PseudoPoly,
        subproblem: "T(k,i,j) = shortest path from i to j using intermediate nodes {1…k}",
        input: "4-node weighted directed graph",
        base_cases: "T(0,i,j) = weight(i,j), or ∞ if no edge",
        recurrence: "T(k,i,j) = min(T(k−1,i,j), T(k−1,i,k) + T(k−1,k,j)),\n       1 ≤ k ≤ n, 1 ≤ i,j ≤ n",
        answer: "return T(n,i,j) for all i,j",
        costs: Costs {
            subproblems: "O(n³)",
            runtime: "O(n³)",
            extraction: "O(n²)",
        },
        insight: "Same skip/take as Knapsack but with intermediate nodes instead of items. The k-loop collapses in-place, so the grid shows the final n×n distance matrix.",
        dag_shape: "n×n grid, collapsed over k (like Knapsack over items)",
        solve: solve_default::<FloydWarshallProblem>,
    },
    Descriptor {
        key: "mcm",
        title: "Matrix Chain Multiplication",
        pattern: Pattern::Interval,
        subproblem: "T(i,j) = min cost to multiply matrices A_i through A_j",
        input: "dims = [10, 30, 5, 20]  (3 matrices)",
        base_cases: "T(i,i) = 0, 1 ≤ i ≤ n",
        recurrence: "T(i,j) = min{T(i,k) + T(k+1,j) + d_{i-1}·d_k·d_j},\n       i ≤ k < j,  for len = j−i+1 from 2 to n",
        answer: "return T(1, n)",
        costs: Costs {
            subproblems: "O(n²)",
            runtime: "O(n³)",
            extraction: "O(1)",
        },
        insight: "Interval DP. State is a range [i, j]. We iterate by length. Dependencies come from splitting the range into two smaller sub-ranges.",
        dag_shape: "Pyramid / Upper Triangular Grid",
        solve: solve_default::<MatrixChainProblem>,
    },
    Descriptor {
        key: "lps_interval",
        title: "Longest Palindromic Subseq (Interval)",
        pattern: Pattern::Interval,
        subproblem: "T(i,j) = length of longest palindromic subsequence in S[i…j]",
        input: "S = 'BBABCBCAB'",
        base_cases: "T(i,i) = 1, 1 ≤ i ≤ n",
        recurrence: "T(i,j) = 2 + T(i+1,j−1),              if S[i] = S[j]\n       = max(T(i+1,j), T(i,j−1)),      otherwise\n       for len = j−i+1 from 2 to n",
        answer: "return T(1, n)",
        costs: Costs {
            subproblems: "O(n²)",
            runtime: "O(n²)",
            extraction: "O(1)",
        },
        insight: "Direct Interval DP approach (vs LCS reduction). We shrink from edges inwards. Note how dependencies are 'down-left' in the grid.",
        dag_shape: "Pyramid / Upper Triangular Grid",
        solve: solve_default::<IntervalLpsProblem>,
    },
    Descriptor {
        key: "obst",
        title: "Optimal Binary Search Tree",
        pattern: Pattern::Interval,
        subproblem: "T(i,j) = min expected search cost for keys[i…j]",
        input: "keys=[10,20,30], freq=[5,4,1]",
        base_cases: "T(i,i) = freq[i], 1 ≤ i ≤ n",
        recurrence: "T(i,j) = sum(freq[i…j]) + min{T(i,r−1) + T(r+1,j)},\n       i ≤ r ≤ j,  for len = j−i+1 from 2 to n",
        answer: "return T(1, n)",
        costs: Costs {
            subproblems: "O(n²)",
            runtime: "O(n³)",
            extraction: "O(1)",
        },
        insight: "Classic Interval DP. We try every root 'r' and combine optimal left and right subtrees. Similar structure to MCM.",
        dag_shape: "Pyramid / Upper Triangular Grid",
        solve: solve_default::<OptimalBstProblem>,
    },
    Descriptor {
        key: "cutting",
        title: "Minimum Cost Stick Cutting",
        pattern: Pattern::Interval,
        subproblem: "T(i,j) = min cost to make every cut strictly between C[i] and C[j]",
        input: "length = 20, cuts = [3, 10, 12, 15]",
        base_cases: "T(i,i+1) = 0",
        recurrence: "T(i,j) = (C[j] − C[i]) + min{T(i,k) + T(k,j)},\n       i < k < j,  for len = j−i from 2 to m",
        answer: "return T(0, m)",
        costs: Costs {
            subproblems: "O(m²)",
            runtime: "O(m³)",
            extraction: "O(m)",
        },
        insight: "Same split-point pyramid as Matrix Chain: the cost of a range is paid once, then both halves are solved independently.",
        dag_shape: "Pyramid / Upper Triangular Grid",
        solve: solve_default::<StickCuttingProblem>,
    },
    Descriptor {
        key: "houserobber3",
        title: "House Robber III",
        pattern: Pattern::Tree,
        subproblem: "rob(v) = max take including v\nskip(v) = max take excluding v",
        input: "Binary tree: [3, 2, 3, 3, null, null, 1]",
        base_cases: "rob(leaf) = val(leaf)\nskip(leaf) = 0",
        recurrence: "rob(v) = val(v) + skip(left) + skip(right)\nskip(v) = max(rob,skip)(left) + max(rob,skip)(right)",
        answer: "return max(rob(root), skip(root))",
        costs: Costs {
            subproblems: "O(n)",
            runtime: "O(n)",
            extraction: "O(1)",
        },
        insight: "Each node returns a PAIR: [rob, skip]. The parent combines children's pairs. Same take/skip as Knapsack but on a tree.",
        dag_shape: "Binary tree, post-order traversal",
        solve: solve_default::<HouseRobberProblem>,
    },
    Descriptor {
        key: "diameter",
        title: "Diameter of Binary Tree",
        pattern: Pattern::Tree,
        subproblem: "T(v) = depth of deepest leaf reachable from v",
        input: "6-node binary tree",
        base_cases: "T(leaf) = 0",
        recurrence: "T(v) = 1 + max(T(left), T(right))\ndiameter candidate at v = T(left) + T(right)",
        answer: "return max{T(left) + T(right)} over all v",
        costs: Costs {
            subproblems: "O(n)",
            runtime: "O(n)",
            extraction: "O(n)  (global max scan)",
        },
        insight: "Return depth to parent, but track diameter globally. Like LIS: the answer is a max scan over all nodes rather than T(root).",
        dag_shape: "Binary tree, post-order traversal",
        solve: solve_default::<DiameterProblem>,
    },
    Descriptor {
        key: "maxpathsum",
        title: "Max Path Sum",
        pattern: Pattern::Tree,
        subproblem: "gain(v) = max path sum starting at v going downward",
        input: "Tree: [-10, 9, 20, null, null, 15, 7]",
        base_cases: "gain(null) = 0",
        recurrence: "gain(v) = val(v) + max(0, max(gain(left), gain(right)))\npath through v = val(v) + max(0,gain(left)) + max(0,gain(right))",
        answer: "return max{path through v} over all v",
        costs: Costs {
            subproblems: "O(n)",
            runtime: "O(n)",
            extraction: "O(n)  (global max scan)",
        },
        insight: "Negative values → clip child gains to 0. Path can go left-through-root-right. Global max like Diameter.",
        dag_shape: "Binary tree, post-order traversal",
        solve: solve_default::<MaxPathSumProblem>,
    },
    Descriptor {
        key: "tsp",
        title: "Traveling Salesman (TSP)",
        pattern: Pattern::Bitmask,
        subproblem: "T(S, j) = min cost to visit all cities in set S, ending at j",
        input: "4 cities, symmetric distance matrix",
        base_cases: "T({0}, 0) = 0  (start at city 0)",
        recurrence: "T(S, j) = min{T(S\\{j}, k) + dist(k, j) : k ∈ S\\{j}},\n       |S| ≥ 2, j ∈ S",
        answer: "return min{T(all, j) + dist(j, 0)}, j ≠ 0",
        costs: Costs {
            subproblems: "O(2ⁿ · n)",
            runtime: "O(2ⁿ · n²)",
            extraction: "O(n)",
        },
        insight: "State = (visited set, last city). Rows sorted by popcount show the level-by-level subset expansion. Each level adds one city to the tour.",
        dag_shape: "Hypercube: rows = masks by popcount, cols = last city",
        solve: solve_default::<TspProblem>,
    },
    Descriptor {
        key: "caniwin",
        title: "Can I Win?",
        pattern: Pattern::Bitmask,
        subproblem: "T(mask) = can current player force a win with available numbers?",
        input: "Numbers 1–4, target = 6",
        base_cases: "T(mask) = TRUE if any available pick ≥ remaining",
        recurrence: "T(mask) = ∃ i ∉ mask : ¬T(mask ∪ {i}),\n       i.e. current player wins if ANY move leaves opponent losing",
        answer: "return T(∅)",
        costs: Costs {
            subproblems: "O(2ⁿ)",
            runtime: "O(2ⁿ · n)",
            extraction: "O(1)",
        },
        insight: "Game theory bitmask: boolean DP with NOT. A state is winning if ANY child state is losing for the opponent.",
        dag_shape: "Single-column mask states, sorted by popcount",
        solve: solve_default::<CanIWinProblem>,
    },
    Descriptor {
        key: "beautiful",
        title: "Beautiful Arrangement",
        pattern: Pattern::Bitmask,
        subproblem: "T(mask) = # valid arrangements using numbers in mask for positions 1…popcount(mask)",
        input: "N = 4, divisibility condition",
        base_cases: "T(∅) = 1",
        recurrence: "T(mask) = Σ T(mask\\{num}) for valid (num, pos) pairs,\n       pos = popcount(mask), num ∈ mask, pos|num or num|pos",
        answer: "return T(full mask)",
        costs: Costs {
            subproblems: "O(2ⁿ)",
            runtime: "O(2ⁿ · n)",
            extraction: "O(1)",
        },
        insight: "Counting (not optimizing) via bitmask. Position = popcount(mask). Shows that bitmask DP can count permutations, not just find optima.",
        dag_shape: "Single-column mask states, sorted by popcount",
        solve: solve_default::<BeautifulArrangementProblem>,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = problems().iter().map(|d| d.key).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
        assert_eq!(total, 23);
    }

    #[test]
    fn pattern_lookup_by_letter_and_name() {
        assert_eq!("d".parse::<Pattern>(), Ok(Pattern::Interval));
        assert_eq!("Bitmask".parse::<Pattern>(), Ok(Pattern::Bitmask));
        assert_eq!(
            "Z".parse::<Pattern>(),
            Err(DpError::UnknownPattern("Z".to_string()))
        );
        let grid: Vec<&str> = Pattern::Grid.problems().collect();
        assert_eq!(grid, vec!["lcs", "edit", "maxsquare", "palindrome", "substring"]);
    }

    #[test]
    fn unknown_key() {
        assert_eq!(
            lookup("nope").unwrap_err(),
            DpError::UnknownProblem("nope".to_string())
        );
    }
}

//! Master Theorem calculator for divide-and-conquer recurrences
//! `T(n) = a·T(n/b) + O(n^d)`.
//!
//! Alongside the case and the closed-form bound, [`Recurrence::levels`]
//! expands the recursion tree level by level so a renderer can show where
//! the work concentrates: at the leaves (case 1), evenly (case 2) or at the
//! root (case 3).

use std::fmt;

use crate::error::{DpError, Result};

/// Tolerance for treating `log_b a` and `d` as equal.
const CASE_TWO_EPS: f64 = 0.001;
/// Tolerance for printing `log_b a` as a whole exponent.
const INTEGER_EXP_EPS: f64 = 0.01;
/// Deepest level suggested for display.
const MAX_SUGGESTED_DEPTH: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Case {
    /// Work grows geometrically towards the leaves.
    LeafHeavy,
    /// Every level contributes about the same work.
    Balanced,
    /// Work shrinks geometrically, the root dominates.
    RootHeavy,
}

impl Case {
    pub fn number(self) -> u8 {
        match self {
            Case::LeafHeavy => 1,
            Case::Balanced => 2,
            Case::RootHeavy => 3,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Case::LeafHeavy => "work increases geometrically, leaves dominate",
            Case::Balanced => "work is about equal at each level, all levels contribute",
            Case::RootHeavy => "work decreases geometrically, root dominates",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Case {}", self.number())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recurrence {
    /// Number of subproblems.
    pub a: u32,
    /// Shrink factor of each subproblem.
    pub b: u32,
    /// Exponent of the combine step.
    pub d: u32,
}

/// One level of the expanded recursion tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub level: usize,
    /// `a^level`, saturating.
    pub nodes: u64,
    /// `b^level`, saturating.
    pub divisor: u64,
    pub work_per_node: f64,
    pub total_work: f64,
    /// `total_work` relative to the heaviest level shown.
    pub ratio: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub recurrence: Recurrence,
}

const fn preset(name: &'static str, a: u32, b: u32, d: u32) -> Preset {
    Preset {
        name,
        recurrence: Recurrence { a, b, d },
    }
}

static PRESETS: [Preset; 5] = [
    preset("Merge Sort", 2, 2, 1),
    preset("Binary Search", 1, 2, 0),
    preset("Karatsuba", 3, 2, 1),
    preset("Strassen", 7, 2, 2),
    preset("Median of Medians", 1, 5, 1),
];

/// Well-known recurrences, in display order.
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Case-insensitive lookup of a preset by name.
pub fn preset_named(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Recurrence {
    /// Rejects `a < 1` and `b < 2`; neither describes a terminating recursion.
    pub fn new(a: u32, b: u32, d: u32) -> Result<Self> {
        if a < 1 {
            return Err(DpError::InvalidRecurrence(format!(
                "need at least one subproblem, got a = {a}"
            )));
        }
        if b < 2 {
            return Err(DpError::InvalidRecurrence(format!(
                "subproblems must shrink, got b = {b}"
            )));
        }
        Ok(Self { a, b, d })
    }

    pub fn log_b_a(&self) -> f64 {
        f64::from(self.a).ln() / f64::from(self.b).ln()
    }

    /// Per-level growth factor `a / b^d`: the work at level `i` is this to the `i`.
    pub fn level_ratio(&self) -> f64 {
        f64::from(self.a) / f64::from(self.b).powi(self.d as i32)
    }

    pub fn case(&self) -> Case {
        let crit = self.log_b_a();
        let d = f64::from(self.d);
        if (crit - d).abs() < CASE_TWO_EPS {
            Case::Balanced
        } else if crit > d {
            Case::LeafHeavy
        } else {
            Case::RootHeavy
        }
    }

    /// Asymptotic bound as a display string.
    pub fn complexity(&self) -> String {
        let d = self.d;
        match self.case() {
            Case::LeafHeavy => {
                let crit = self.log_b_a();
                let rounded = crit.round();
                if (crit - rounded).abs() < INTEGER_EXP_EPS {
                    poly(rounded as u32)
                } else {
                    format!(
                        "O(n^{{log_{}({})}}) ≈ O(n^{{{crit:.2}}})",
                        self.b, self.a
                    )
                }
            }
            Case::Balanced => match d {
                0 => "O(log n)".to_string(),
                1 => "O(n log n)".to_string(),
                _ => format!("O(n^{d} log n)"),
            },
            Case::RootHeavy => match d {
                0 => "O(1)".to_string(),
                _ => poly(d),
            },
        }
    }

    /// Levels `0..=depth` of the recursion tree.
    pub fn levels(&self, depth: usize) -> Vec<Level> {
        let mut levels: Vec<Level> = (0..=depth)
            .map(|i| {
                let exp = u32::try_from(i).unwrap_or(u32::MAX);
                let nodes = u64::from(self.a).saturating_pow(exp);
                let divisor = u64::from(self.b).saturating_pow(exp);
                let work_per_node = (1.0 / divisor as f64).powi(self.d as i32);
                Level {
                    level: i,
                    nodes,
                    divisor,
                    work_per_node,
                    total_work: nodes as f64 * work_per_node,
                    ratio: 0.0,
                }
            })
            .collect();
        let heaviest = levels
            .iter()
            .map(|l| l.total_work)
            .fold(0.0_f64, f64::max);
        if heaviest > 0.0 {
            for l in &mut levels {
                l.ratio = l.total_work / heaviest;
            }
        }
        levels
    }

    /// Depth at which a size-64 input bottoms out, capped for display.
    pub fn suggested_depth(&self) -> usize {
        let depth = (64f64.ln() / f64::from(self.b).ln()).ceil() as usize;
        depth.min(MAX_SUGGESTED_DEPTH)
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T(n) = {}T(n/{}) + O(n^{})", self.a, self.b, self.d)
    }
}

fn poly(exp: u32) -> String {
    match exp {
        0 => "O(1)".to_string(),
        1 => "O(n)".to_string(),
        e => format!("O(n^{e})"),
    }
}

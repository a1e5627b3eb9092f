//! Assorted helpers shared by the solvers.

use crate::graph::{MaskRow, Value};

/// Internal "infinite cost" marker. Far enough from `i64::MAX` that adding
/// two of them, or one plus any edge weight, cannot overflow.
pub const INF: i64 = i64::MAX / 4;

/// Map an internal cost to a renderable value.
#[inline]
pub fn cost_value(cost: i64) -> Value {
    if cost >= INF {
        Value::Unreachable
    } else {
        Value::Int(cost)
    }
}

#[inline]
pub fn popcount(mask: u32) -> u32 {
    mask.count_ones()
}

/// Binary label of `mask`, most significant bit first, zero-padded to `width`.
pub fn mask_label(mask: u32, width: usize) -> String {
    format!("{mask:0width$b}")
}

/// All masks over `width` bits (optionally without the empty set), ordered
/// by population count and then by value.
pub fn masks_by_popcount(width: usize, include_empty: bool) -> Vec<u32> {
    assert!(width < 32, "mask width {width} too large");
    let start = if include_empty { 0 } else { 1 };
    let mut masks: Vec<u32> = (start..(1u32 << width)).collect();
    masks.sort_by_key(|&m| (popcount(m), m));
    masks
}

/// Row descriptors for a bitmask layout, one per mask in the given order.
pub fn mask_rows(masks: &[u32], width: usize) -> Vec<MaskRow> {
    masks
        .iter()
        .map(|&mask| MaskRow {
            mask,
            popcount: popcount(mask),
            label: mask_label(mask, width),
        })
        .collect()
}

/// Each byte of `s` as a one-character label, behind an `ε` header.
pub fn epsilon_labels(s: &[u8]) -> Vec<String> {
    std::iter::once("ε".to_string())
        .chain(s.iter().map(|&b| char::from(b).to_string()))
        .collect()
}

//! Example: Master Theorem cases for the classic divide-and-conquer presets.
//!
//! Run with:
//! `cargo run --example master_theorem`

use dp_dag::master;

fn main() {
    for preset in master::presets() {
        let rec = preset.recurrence;
        let case = rec.case();
        println!("{:<18} {rec}", preset.name);
        println!("    {case}: {}", case.description());
        println!("    T(n) = {}", rec.complexity());
        let bars: Vec<String> = rec
            .levels(rec.suggested_depth())
            .iter()
            .map(|l| format!("{:>3.0}%", l.ratio * 100.0))
            .collect();
        println!("    work by level: {}", bars.join(" "));
        println!();
    }
}

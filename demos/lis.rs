//! Example: the LIS dependency chain and its JSON form.
//!
//! Run with:
//! `cargo run --example lis`

use dp_dag::{problems::lis::LisProblem, DpProblem};

fn main() {
    let seq = vec![10, 9, 2, 5, 3, 7, 101, 18];
    let graph = LisProblem::new(seq.clone()).solve();

    println!("LIS length: {}", graph.answer);
    println!("{}", graph.note);
    for node in &graph.nodes {
        let mark = if node.on_path { "*" } else { " " };
        let preds: Vec<String> = graph.incoming(node.id).map(|e| e.from.to_string()).collect();
        println!(
            "{mark} T({}) = {:<2} {:<8} <- [{}]",
            node.id,
            node.value.to_string(),
            node.label,
            preds.join(", ")
        );
    }

    let picked: Vec<i64> = graph.path_ids().into_iter().map(|i| seq[i]).collect();
    println!("One longest subsequence: {picked:?}");

    match graph.to_json() {
        Ok(json) => println!("JSON is {} bytes", json.len()),
        Err(err) => eprintln!("serialization failed: {err}"),
    }
}

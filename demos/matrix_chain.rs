//! Example: matrix-chain multiplication as an interval pyramid.
//!
//! Run with:
//! `cargo run --example matrix_chain`

use dp_dag::{graph::EdgeKind, problems::matrix_chain::MatrixChainProblem, DpProblem};

fn main() {
    // Example from CLRS:
    // Matrices A1..A6 with dimensions:
    // 30x35, 35x15, 15x5, 5x10, 10x20, 20x25
    let problem = MatrixChainProblem::new(vec![30, 35, 15, 5, 10, 20, 25]);
    let graph = problem.solve();

    println!("Optimal multiplication cost: {}", graph.answer);
    println!("Parenthesization: {}", problem.parenthesize());
    println!(
        "DAG: {} cells, {} split edges",
        graph.nodes.len(),
        graph.edges.len()
    );

    println!("Traced splits:");
    for node in graph.path_nodes().filter(|n| n.detail.is_some()) {
        let halves: Vec<String> = graph
            .incoming(node.id)
            .filter(|e| e.on_path)
            .map(|e| {
                let side = if e.kind == EdgeKind::Left { "left" } else { "right" };
                format!("{side} {}", graph.node(e.from).map_or("?", |n| n.label.as_str()))
            })
            .collect();
        println!(
            "  {:<8} cost {:<6} {} <- {}",
            node.label,
            node.value.to_string(),
            node.detail.as_deref().unwrap_or_default(),
            halves.join(", ")
        );
    }
}

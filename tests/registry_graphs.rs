use std::collections::{HashSet, VecDeque};

use dp_dag::{
    graph::Layout,
    problems::{
        diameter::DiameterProblem,
        knapsack::{Item, KnapsackProblem},
        subset_sum::{self, SubsetSumProblem},
        tsp::TspProblem,
    },
    registry::{self, Pattern},
    DpError, DpProblem, Graph, Shape, Value,
};

#[test]
fn every_registered_graph_is_well_formed() {
    let checked = registry::check_all().expect("all graphs validate");
    assert_eq!(checked.len(), registry::problems().len());
    for (key, graph) in &checked {
        assert!(!graph.nodes.is_empty(), "{key} has no nodes");
        assert!(!graph.note.is_empty(), "{key} has no note");
        assert!(
            graph.path_nodes().count() > 0,
            "{key} marks no optimal trace"
        );
    }
}

#[test]
fn solving_is_deterministic_and_idempotent() {
    for d in registry::problems() {
        let first = d.solve();
        let second = d.solve();
        assert_eq!(first, second, "{} differs between runs", d.key);
    }
    let all: Vec<_> = registry::solve_all();
    let keys: Vec<_> = all.iter().map(|(k, _)| *k).collect();
    let expected: Vec<_> = registry::problems().iter().map(|d| d.key).collect();
    assert_eq!(keys, expected);
}

#[test]
fn json_round_trip_preserves_every_graph() {
    for (key, graph) in registry::solve_all() {
        let text = graph.to_json().unwrap();
        let back = Graph::from_json(&text).unwrap();
        assert_eq!(back, graph, "{key} changed across JSON");
    }
}

#[test]
fn json_uses_tagged_shapes_and_null_for_unreachable() {
    let graph = registry::solve("tsp").unwrap();
    let json: serde_json::Value = serde_json::from_str(&graph.to_json().unwrap()).unwrap();
    assert_eq!(json["shape"]["kind"], "bitmask");
    assert_eq!(json["nodes"][0]["layout"]["kind"], "mask");
    let has_null = json["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .any(|n| n["value"].is_null());
    let has_unreachable = graph.nodes.iter().any(|n| n.value == Value::Unreachable);
    assert_eq!(has_null, has_unreachable);

    let lcs = registry::solve("lcs").unwrap();
    let json: serde_json::Value = serde_json::from_str(&lcs.to_json().unwrap()).unwrap();
    assert_eq!(json["shape"]["kind"], "grid");
    assert_eq!(json["shape"]["row_labels"][0], "ε");
}

#[test]
fn layouts_match_their_shape() {
    for (key, graph) in registry::solve_all() {
        for node in &graph.nodes {
            let ok = matches!(
                (&graph.shape, &node.layout),
                (Shape::Chain, Layout::Chain { .. })
                    | (Shape::Grid { .. }, Layout::Grid { .. })
                    | (Shape::Tree { .. }, Layout::Tree { .. })
                    | (Shape::Bitmask { .. }, Layout::Mask { .. })
            );
            assert!(ok, "{key}: node {} has a foreign layout", node.id);
        }
    }
}

#[test]
fn traced_edges_run_between_traced_nodes() {
    for (key, graph) in registry::solve_all() {
        let traced: HashSet<_> = graph.path_nodes().map(|n| n.id).collect();
        for e in graph.path_edges() {
            assert!(traced.contains(&e.from) && traced.contains(&e.to), "{key}");
        }
        // a trace of k nodes forming one tree has exactly k - 1 edges
        assert_eq!(graph.path_edges().count() + 1, traced.len(), "{key}");
    }
}

#[test]
fn patterns_partition_the_registry() {
    let mut seen = HashSet::new();
    for pattern in Pattern::ALL {
        let keys: Vec<_> = pattern.problems().collect();
        assert!(!keys.is_empty(), "{pattern} is empty");
        for key in keys {
            assert!(seen.insert(key), "{key} listed twice");
            assert_eq!(registry::lookup(key).unwrap().pattern, pattern);
        }
    }
    assert_eq!(seen.len(), registry::problems().len());
    assert_eq!(
        Pattern::Tree.problems().collect::<Vec<_>>(),
        vec!["houserobber3", "diameter", "maxpathsum"]
    );
}

#[test]
fn lookup_errors_are_typed() {
    assert_eq!(
        registry::solve("nope").unwrap_err(),
        DpError::UnknownProblem("nope".into())
    );
    assert_eq!(
        "Z".parse::<Pattern>().unwrap_err(),
        DpError::UnknownPattern("Z".into())
    );
    assert_eq!("d".parse::<Pattern>().unwrap(), Pattern::Interval);
    assert_eq!("Bitmask".parse::<Pattern>().unwrap(), Pattern::Bitmask);
}

#[test]
fn lis_scenario() {
    let g = registry::solve("lis").unwrap();
    assert_eq!(g.answer, Value::Int(4));
    // A[5] = 9 closes 1,4,5,9: each step takes the nearest earlier feeder
    let node = g.node(5).unwrap();
    assert_eq!(node.label, "val=9");
    assert_eq!(node.value, Value::Int(4));
    assert_eq!(g.path_ids(), vec![1, 2, 4, 5]);
}

#[test]
fn edit_distance_scenario() {
    assert_eq!(registry::solve("edit").unwrap().answer, Value::Int(2));
}

#[test]
fn knapsack_scenario_matches_brute_force() {
    let p = KnapsackProblem::default();
    let best = (0u32..1 << p.items.len())
        .filter_map(|mask| {
            let chosen: Vec<&Item> = p
                .items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, it)| it)
                .collect();
            let weight: usize = chosen.iter().map(|it| it.weight).sum();
            (weight <= p.capacity).then(|| chosen.iter().map(|it| it.value).sum::<i64>())
        })
        .max()
        .unwrap();
    assert_eq!(best, 8);
    assert_eq!(p.solve().answer, Value::Int(best));
}

#[test]
fn subset_sum_scenario() {
    let p = SubsetSumProblem::default();
    let g = p.solve();
    assert_eq!(g.answer, Value::Bool(true));
    assert_eq!(subset_sum::taken(&g, &p.nums), vec![7, 4]);
}

#[test]
fn tsp_scenario_matches_permutations() {
    let p = TspProblem::default();
    let mut best = i64::MAX;
    let mut rest = vec![1usize, 2, 3];
    permute(&mut rest, 0, &mut |order| {
        let mut cost = p.dist[0][order[0]];
        for w in order.windows(2) {
            cost += p.dist[w[0]][w[1]];
        }
        cost += p.dist[order[order.len() - 1]][0];
        best = best.min(cost);
    });
    assert_eq!(best, 80);
    assert_eq!(p.solve().answer, Value::Int(best));
}

fn permute(v: &mut Vec<usize>, k: usize, visit: &mut impl FnMut(&[usize])) {
    if k == v.len() {
        visit(v);
        return;
    }
    for i in k..v.len() {
        v.swap(k, i);
        permute(v, k + 1, visit);
        v.swap(k, i);
    }
}

#[test]
fn diameter_scenario_matches_bfs() {
    let p = DiameterProblem::default();
    let tree = &p.tree;
    let n = tree.len();
    let mut adj = vec![Vec::new(); n];
    for pos in 0..n {
        for c in tree.children(pos) {
            adj[pos].push(c);
            adj[c].push(pos);
        }
    }
    let mut longest = 0;
    for start in 0..n {
        let mut dist = vec![usize::MAX; n];
        dist[start] = 0;
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for &v in &adj[u] {
                if dist[v] == usize::MAX {
                    dist[v] = dist[u] + 1;
                    queue.push_back(v);
                }
            }
        }
        longest = longest.max(dist.into_iter().max().unwrap());
    }
    assert_eq!(longest, 4);
    assert_eq!(p.solve().answer, Value::Int(longest as i64));
}

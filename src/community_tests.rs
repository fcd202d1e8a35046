#[cfg(test)]
mod tests {
    use crate::community::{
        connected_components, edge_betweenness, modularity, GirvanNewman, ShortestPaths,
    };
    use crate::graph::{Graph, NodeId};
    use petgraph::algo::dijkstra;
    use petgraph::graph::{NodeIndex, UnGraph};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    /// Random simple graph on `0..n`, one flag per unordered pair.
    fn arb_edges() -> impl Strategy<Value = (usize, Vec<(NodeId, NodeId)>)> {
        (2usize..8).prop_flat_map(|n| {
            proptest::collection::vec(any::<bool>(), n * (n - 1) / 2).prop_map(move |mask| {
                let pairs = (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v)));
                let edges: Vec<(NodeId, NodeId)> = pairs
                    .zip(mask)
                    .filter(|&(_, keep)| keep)
                    .map(|(pair, _)| pair)
                    .collect();
                (n, edges)
            })
        })
    }

    fn build(n: usize, edges: &[(NodeId, NodeId)]) -> Graph {
        let mut graph = Graph::from_edges(edges, None).unwrap();
        for node in 0..n {
            graph.add_node(node);
        }
        graph
    }

    /// Σ over unordered connected pairs of hop distance, via petgraph.
    fn hop_distance_sum(n: usize, edges: &[(NodeId, NodeId)]) -> f64 {
        let mut pg = UnGraph::<(), ()>::new_undirected();
        let nodes: Vec<NodeIndex> = (0..n).map(|_| pg.add_node(())).collect();
        for &(u, v) in edges {
            pg.add_edge(nodes[u], nodes[v], ());
        }
        let mut total = 0usize;
        for &s in &nodes {
            let dist = dijkstra(&pg, s, None, |_| 1usize);
            total += dist
                .iter()
                .filter(|(t, _)| t.index() > s.index())
                .map(|(_, d)| *d)
                .sum::<usize>();
        }
        total as f64
    }

    #[test]
    fn test_chain_path_enumeration() {
        let graph = Graph::from_edges(&[(0, 1), (1, 2), (2, 3)], None).unwrap();
        let sp = ShortestPaths::compute(&graph);
        assert_eq!(sp.paths(0, 3), vec![vec![0, 1, 2, 3]]);
        assert_eq!(sp.paths(0, 0), vec![vec![0]]);
    }

    proptest! {
        #[test]
        fn every_round_shrinks_the_edge_set((n, edges) in arb_edges()) {
            let graph = build(n, &edges);
            let outcome = GirvanNewman::new().run(graph).unwrap();

            prop_assert!(outcome.iterations.len() <= edges.len());
            let mut seen = BTreeSet::new();
            for it in &outcome.iterations {
                prop_assert!(!it.removed.is_empty());
                for key in &it.removed {
                    prop_assert!(seen.insert(*key), "{} removed twice", key);
                }
            }
            prop_assert_eq!(seen.len(), edges.len());
            prop_assert!(!outcome.exhausted);
        }

        #[test]
        fn centrality_sums_to_hop_distances((n, edges) in arb_edges()) {
            // unit weights: every shortest path between a pair has the same
            // hop count, so each pair spreads exactly that much credit
            let graph = build(n, &edges);
            let sp = ShortestPaths::compute(&graph);
            let total: f64 = edge_betweenness(&graph, &sp).values().sum();
            let expected = hop_distance_sum(n, &edges);
            prop_assert!((total - expected).abs() < 1e-9, "{} vs {}", total, expected);
        }

        #[test]
        fn components_cover_each_node_once((n, edges) in arb_edges()) {
            let graph = build(n, &edges);
            let partition = connected_components(&graph);
            let mut members: Vec<NodeId> =
                partition.groups().iter().flatten().copied().collect();
            members.sort_unstable();
            prop_assert_eq!(members, (0..n).collect::<Vec<_>>());
        }

        #[test]
        fn modularity_is_pure_and_bounded((n, edges) in arb_edges()) {
            let graph = build(n, &edges);
            let partition = connected_components(&graph);
            let q = modularity(&graph, &partition);
            prop_assert_eq!(q.to_bits(), modularity(&graph, &partition).to_bits());
            prop_assert!((-0.5 - 1e-12..=1.0).contains(&q), "q = {}", q);
        }

        #[test]
        fn best_is_first_maximum((n, edges) in arb_edges()) {
            let graph = build(n, &edges);
            let outcome = GirvanNewman::new().run(graph).unwrap();
            let scored: Vec<f64> = outcome
                .iterations
                .iter()
                .filter_map(|it| it.score.map(|s| s.modularity))
                .collect();
            match (&outcome.best, scored.iter().copied().reduce(f64::max)) {
                (None, None) => {}
                (Some(best), Some(max)) => {
                    prop_assert_eq!(best.modularity, max);
                    // replay up to the first round reaching the maximum
                    let first = outcome
                        .iterations
                        .iter()
                        .position(|it| it.score.map(|s| s.modularity) == Some(max))
                        .unwrap();
                    let mut replay = build(n, &edges);
                    for it in &outcome.iterations[..=first] {
                        for key in &it.removed {
                            replay.remove_edge(key.lo(), key.hi()).unwrap();
                        }
                    }
                    prop_assert_eq!(&best.partition, &connected_components(&replay));
                }
                (best, max) => prop_assert!(false, "best {:?} vs max {:?}", best, max),
            }
        }
    }
}

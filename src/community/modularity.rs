//! Newman–Girvan modularity of a partition.
//!
//! ```text
//! Q = (1/2m) × Σ_i Σ_j [A_ij − k_i k_j / 2m] × δ(c_i, c_j)
//! ```
//!
//! The double sum runs over **all ordered pairs**, `i = j` included. With
//! no self-loops the diagonal terms reduce to `−k_i² / 2m`. The sum is
//! evaluated literally rather than per community, which keeps results
//! bit-for-bit stable across runs.

use super::components::Partition;
use crate::graph::Graph;

/// Modularity of `partition` on the current state of `graph`.
///
/// Returns 0.0 when the graph has no edges (m = 0). Nodes missing from
/// the partition never share a community with anything.
pub fn modularity(graph: &Graph, partition: &Partition) -> f64 {
    let m = graph.total_weight();
    if m == 0.0 {
        return 0.0;
    }
    let two_m = 2.0 * m;

    let labels = partition.labels();
    let nodes: Vec<_> = graph.nodes().collect();
    let degrees: Vec<f64> = nodes.iter().map(|&n| graph.degree(n)).collect();

    let mut q = 0.0;
    for (a, &i) in nodes.iter().enumerate() {
        let Some(ci) = labels.get(&i) else {
            continue;
        };
        for (b, &j) in nodes.iter().enumerate() {
            if labels.get(&j) != Some(ci) {
                continue;
            }
            let a_ij = graph.weight(i, j).unwrap_or(0.0);
            q += a_ij - degrees[a] * degrees[b] / two_m;
        }
    }

    q / two_m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::community::components::connected_components;

    #[test]
    fn test_two_disjoint_triangles() {
        let graph =
            Graph::from_edges(&[(0, 1), (0, 2), (1, 2), (3, 4), (3, 5), (4, 5)], None).unwrap();
        let q = modularity(&graph, &connected_components(&graph));
        // each triangle: (6 − 9·4/12) / 12 = 0.25
        assert!((q - 0.5).abs() < 1e-12, "q = {q}");
    }

    #[test]
    fn test_single_community_is_zero() {
        let graph = Graph::from_edges(&[(0, 1), (1, 2), (2, 0)], None).unwrap();
        let p = Partition::from_groups(vec![vec![0, 1, 2]]).unwrap();
        assert!(modularity(&graph, &p).abs() < 1e-12);
    }

    #[test]
    fn test_singletons_are_negative() {
        // single edge, both endpoints alone: Q = (−1/2 − 1/2) / 2
        let graph = Graph::from_edges(&[(0, 1)], None).unwrap();
        let p = Partition::from_groups(vec![vec![0], vec![1]]).unwrap();
        assert_eq!(modularity(&graph, &p), -0.5);
    }

    #[test]
    fn test_weighted_edges() {
        // path 0 -2- 1 -1- 2, split {0,1} | {2}; m = 3, k = [2, 3, 1]
        let mut graph = Graph::new();
        graph.add_edge(0, 1, 2.0).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();
        let p = Partition::from_groups(vec![vec![0, 1], vec![2]]).unwrap();
        // {0,1}: 2·2 − (4 + 6 + 6 + 9)/6 ; {2}: −1/6
        let expected = (4.0 - 25.0 / 6.0 - 1.0 / 6.0) / 6.0;
        assert!((modularity(&graph, &p) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_is_pure() {
        let graph = Graph::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 0), (1, 3)], None).unwrap();
        let p = Partition::from_groups(vec![vec![0, 1], vec![2, 3]]).unwrap();
        assert_eq!(modularity(&graph, &p), modularity(&graph, &p));
    }

    #[test]
    fn test_edgeless_graph() {
        let mut graph = Graph::new();
        graph.add_node(0);
        assert_eq!(modularity(&graph, &connected_components(&graph)), 0.0);
    }
}

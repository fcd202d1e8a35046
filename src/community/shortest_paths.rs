//! All-pairs shortest paths that remember every shortest route.
//!
//! A Floyd–Warshall pass that, besides the cost table, keeps for each
//! ordered pair `(i, j)` the set of first hops `k` such that edge `(i, k)`
//! starts *some* shortest path from `i` to `j`.
//!
//! ## Relaxation through intermediate `k`
//!
//! ```text
//! via = cost(i, k) + cost(k, j)
//! cost(i, j) >  via             → cost(i, j) = via, succ(i, j) = succ(i, k)
//! cost(i, j) == via, finite,
//!   k ∉ {i, j}                  → succ(i, j) ∪= succ(i, k)
//! ```
//!
//! Storing first-hop sets instead of explicit path lists keeps space at
//! O(V²·deg). Every path is recovered on demand by walking successor
//! sets, see [`ShortestPaths::paths`]. Each hop strictly lowers the
//! remaining cost (weights are positive), so the walk always terminates.
//!
//! Cost is O(V³) per call.

use crate::graph::{EdgeKey, Graph, NodeId};
use std::collections::{BTreeSet, HashMap};

/// Cost and successor tables for one snapshot of a [`Graph`].
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    /// Dense index → node id, ascending.
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    /// Row-major `n × n`; `f64::INFINITY` marks unreachable pairs.
    cost: Vec<f64>,
    /// Row-major `n × n` sets of dense first-hop indices.
    successors: Vec<BTreeSet<usize>>,
}

impl ShortestPaths {
    /// Run the multi-successor Floyd–Warshall pass over `graph`.
    pub fn compute(graph: &Graph) -> Self {
        let nodes: Vec<NodeId> = graph.nodes().collect();
        let index: HashMap<NodeId, usize> =
            nodes.iter().enumerate().map(|(i, &n)| (n, i)).collect();
        let n = nodes.len();

        let mut cost = vec![f64::INFINITY; n * n];
        let mut successors = vec![BTreeSet::new(); n * n];
        for i in 0..n {
            cost[i * n + i] = 0.0;
        }
        for (key, weight) in graph.edges() {
            let (u, v) = (index[&key.lo()], index[&key.hi()]);
            cost[u * n + v] = weight;
            cost[v * n + u] = weight;
            successors[u * n + v].insert(v);
            successors[v * n + u].insert(u);
        }

        for k in 0..n {
            for i in 0..n {
                let to_k = cost[i * n + k];
                if to_k.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let via = to_k + cost[k * n + j];
                    let ij = i * n + j;
                    if cost[ij] > via {
                        cost[ij] = via;
                        successors[ij] = successors[i * n + k].clone();
                    } else if cost[ij] == via && via.is_finite() && k != i && k != j {
                        let extra = successors[i * n + k].clone();
                        successors[ij].extend(extra);
                    }
                }
            }
        }

        log::trace!("shortest paths computed for {n} nodes");

        Self {
            nodes,
            index,
            cost,
            successors,
        }
    }

    /// Number of nodes covered by the tables.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Shortest-path cost from `from` to `to`; `None` if unreachable or
    /// either node is unknown.
    pub fn cost(&self, from: NodeId, to: NodeId) -> Option<f64> {
        let (i, j) = self.locate(from, to)?;
        let c = self.cost[i * self.nodes.len() + j];
        c.is_finite().then_some(c)
    }

    /// First hops of the shortest paths from `from` to `to`, ascending.
    pub fn successors(&self, from: NodeId, to: NodeId) -> Vec<NodeId> {
        match self.locate(from, to) {
            Some((i, j)) => self
                .successor_indices(i, j)
                .iter()
                .map(|&k| self.nodes[k])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Every shortest path from `from` to `to` as a node sequence.
    ///
    /// `paths(i, i)` is `[[i]]`. Unreachable pairs and unknown nodes yield
    /// no paths. Recomputed on every call.
    pub fn paths(&self, from: NodeId, to: NodeId) -> Vec<Vec<NodeId>> {
        match self.locate(from, to) {
            Some((i, j)) => self
                .index_paths(i, j)
                .into_iter()
                .map(|path| path.into_iter().map(|k| self.nodes[k]).collect())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Canonical edge key for a hop between two dense indices.
    pub(crate) fn edge_key(&self, a: usize, b: usize) -> EdgeKey {
        EdgeKey::new(self.nodes[a], self.nodes[b])
    }

    /// Paths in dense-index space.
    pub(crate) fn index_paths(&self, i: usize, j: usize) -> Vec<Vec<usize>> {
        if i == j {
            return vec![vec![i]];
        }
        let mut out = Vec::new();
        for &k in self.successor_indices(i, j) {
            for mut tail in self.index_paths(k, j) {
                tail.insert(0, i);
                out.push(tail);
            }
        }
        out
    }

    fn successor_indices(&self, i: usize, j: usize) -> &BTreeSet<usize> {
        &self.successors[i * self.nodes.len() + j]
    }

    fn locate(&self, from: NodeId, to: NodeId) -> Option<(usize, usize)> {
        Some((*self.index.get(&from)?, *self.index.get(&to)?))
    }
}

//! Weighted undirected graph with symmetric edge storage.
//!
//! Edges live in two places that must always agree:
//!
//! - a map from canonical [`EdgeKey`] `(min, max)` to weight, and
//! - per-node adjacency lists, each edge mirrored on both endpoints.
//!
//! Every lookup goes through [`EdgeKey::new`], so `(a, b)` and `(b, a)`
//! address the same edge.
//!
//! ## Weights from properties
//!
//! When nodes carry property vectors of length `L`, an edge's initial
//! weight is
//!
//! ```text
//! w(u, v) = (L - #{k : p_u[k] == p_v[k]}) + 1
//! ```
//!
//! so identical nodes are joined by weight 1 and the weight never drops
//! below 1. Without properties every edge has weight 1.

use crate::error::{Error, Result};
use core::fmt;
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use std::collections::BTreeMap;

/// Node identifier.
pub type NodeId = usize;

/// Unordered node pair, stored as `(min, max)`.
///
/// The derived ordering sorts by smaller endpoint, then larger endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
    lo: NodeId,
    hi: NodeId,
}

impl EdgeKey {
    /// Canonicalize an unordered pair.
    pub fn new(u: NodeId, v: NodeId) -> Self {
        if u <= v {
            Self { lo: u, hi: v }
        } else {
            Self { lo: v, hi: u }
        }
    }

    /// Smaller endpoint.
    pub fn lo(self) -> NodeId {
        self.lo
    }

    /// Larger endpoint.
    pub fn hi(self) -> NodeId {
        self.hi
    }

    /// Both endpoints as `(min, max)`.
    pub fn endpoints(self) -> (NodeId, NodeId) {
        (self.lo, self.hi)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}

/// Weighted undirected graph without self-loops or parallel edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    edges: BTreeMap<EdgeKey, f64>,
    /// Node set is the key set; isolated nodes map to an empty list.
    adjacency: BTreeMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list, deriving weights from optional
    /// per-node property vectors.
    ///
    /// The node set is the union of edge endpoints and property record ids.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingProperties`] if properties are supplied but an
    ///   edge endpoint has none.
    /// - [`Error::DimensionMismatch`] if property vectors differ in length.
    /// - [`Error::SelfLoop`] / [`Error::DuplicateEdge`] for malformed edges.
    pub fn from_edges(
        edges: &[(NodeId, NodeId)],
        properties: Option<&BTreeMap<NodeId, Vec<i64>>>,
    ) -> Result<Self> {
        let mut graph = Self::new();

        if let Some(props) = properties {
            let mut lengths = props.values().map(Vec::len);
            if let Some(expected) = lengths.next() {
                if let Some(found) = lengths.find(|&len| len != expected) {
                    return Err(Error::DimensionMismatch { expected, found });
                }
            }
            for &node in props.keys() {
                graph.add_node(node);
            }
        }

        for &(u, v) in edges {
            let weight = match properties {
                None => 1.0,
                Some(props) => {
                    let pu = props.get(&u).ok_or(Error::MissingProperties { node: u })?;
                    let pv = props.get(&v).ok_or(Error::MissingProperties { node: v })?;
                    property_weight(pu, pv)
                }
            };
            graph.add_edge(u, v, weight)?;
        }

        Ok(graph)
    }

    /// Convert a petgraph undirected graph, using node indices as ids and
    /// unit weights.
    ///
    /// # Errors
    ///
    /// Self-loops and parallel edges are rejected.
    pub fn from_petgraph<N, E>(graph: &UnGraph<N, E>) -> Result<Self> {
        let mut out = Self::new();
        for node in graph.node_indices() {
            out.add_node(node.index());
        }
        for edge in graph.edge_references() {
            out.add_edge(edge.source().index(), edge.target().index(), 1.0)?;
        }
        Ok(out)
    }

    /// Add a node with no edges. No-op if it already exists.
    pub fn add_node(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    /// Add an undirected edge, creating missing endpoints.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> Result<()> {
        if u == v {
            return Err(Error::SelfLoop { node: u });
        }
        if !(weight.is_finite() && weight > 0.0) {
            return Err(Error::InvalidWeight { u, v, weight });
        }
        let key = EdgeKey::new(u, v);
        if self.edges.contains_key(&key) {
            return Err(Error::DuplicateEdge {
                u: key.lo(),
                v: key.hi(),
            });
        }
        self.edges.insert(key, weight);
        self.adjacency.entry(u).or_default().push(v);
        self.adjacency.entry(v).or_default().push(u);
        Ok(())
    }

    /// Remove an edge and both of its adjacency entries, returning its weight.
    ///
    /// # Errors
    ///
    /// [`Error::MissingEdge`] if the edge does not exist. Callers are
    /// expected to only remove edges they know are present.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> Result<f64> {
        let key = EdgeKey::new(u, v);
        let weight = self.edges.remove(&key).ok_or(Error::MissingEdge {
            u: key.lo(),
            v: key.hi(),
        })?;
        detach(&mut self.adjacency, u, v);
        detach(&mut self.adjacency, v, u);
        Ok(weight)
    }

    /// Neighbors of `node`. Empty for isolated or unknown nodes.
    pub fn adjacent(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of the edge between `u` and `v`, if any.
    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.edges.get(&EdgeKey::new(u, v)).copied()
    }

    /// Whether `u` and `v` are joined by an edge.
    pub fn contains_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.edges.contains_key(&EdgeKey::new(u, v))
    }

    /// Weighted degree: sum of incident edge weights.
    pub fn degree(&self, node: NodeId) -> f64 {
        self.adjacent(node)
            .iter()
            .filter_map(|&n| self.weight(node, n))
            .sum()
    }

    /// Sum of all edge weights, each edge counted once.
    pub fn total_weight(&self) -> f64 {
        self.edges.values().sum()
    }

    /// Number of nodes, including isolated ones.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether any edge remains.
    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }

    /// Node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Edges with weights, ordered by key.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeKey, f64)> + '_ {
        self.edges.iter().map(|(&k, &w)| (k, w))
    }
}

/// `(L - matching positions) + 1`.
fn property_weight(a: &[i64], b: &[i64]) -> f64 {
    let matching = a.iter().zip(b).filter(|(x, y)| x == y).count();
    (a.len() - matching + 1) as f64
}

fn detach(adjacency: &mut BTreeMap<NodeId, Vec<NodeId>>, from: NodeId, to: NodeId) {
    if let Some(list) = adjacency.get_mut(&from) {
        if let Some(pos) = list.iter().position(|&n| n == to) {
            list.remove(pos);
        }
    }
}

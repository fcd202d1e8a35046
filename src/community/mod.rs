//! Divisive community detection for weighted undirected graphs.
//!
//! Given a graph, find natural groupings where nodes within groups are
//! densely connected, and connections between groups are sparse.
//!
//! ## Edge Betweenness
//!
//! Edges that join communities lie on many shortest paths; edges inside
//! a community do not. The betweenness of an edge is the share of all
//! shortest paths that pass through it, with `1/n` credit per path when a
//! pair has `n` equally short routes.
//!
//! ## The Modularity Objective
//!
//! Candidate partitions are compared by **modularity** Q, which measures
//! intra-community weight against what a random graph with the same
//! degree sequence would have:
//!
//! ```text
//! Q = (1/2m) × Σ[A_ij - (k_i × k_j)/(2m)] × δ(c_i, c_j)
//! ```
//!
//! Where:
//! - m = total edge weight (sum of all edges)
//! - A_ij = edge weight between i and j
//! - k_i = weighted degree of node i
//! - δ(c_i, c_j) = 1 if i and j are in same community
//!
//! ## Pipeline
//!
//! ```text
//! Graph → ShortestPaths → edge_betweenness → remove max edges
//!       → connected_components → modularity → best partition
//! ```
//!
//! [`GirvanNewman`] drives the loop; the stages are public so they can be
//! used on their own.
//!
//! ## Usage
//!
//! ```rust
//! use girvan_newman::community::GirvanNewman;
//! use girvan_newman::Graph;
//!
//! // Two triangles joined by a bridge
//! let edges = [(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (3, 5), (4, 5)];
//! let graph = Graph::from_edges(&edges, None).unwrap();
//!
//! let outcome = GirvanNewman::new().run(graph).unwrap();
//! let best = outcome.best.unwrap();
//! assert_eq!(best.partition.groups(), &[vec![0, 1, 2], vec![3, 4, 5]]);
//! ```
//!
//! ## References
//!
//! - Girvan & Newman (2002). "Community structure in social and biological networks."
//! - Newman & Girvan (2004). "Finding and evaluating community structure in networks."

mod betweenness;
mod components;
mod girvan_newman;
mod modularity;
mod shortest_paths;
mod traits;

pub use betweenness::edge_betweenness;
pub use components::{connected_components, Partition};
pub use girvan_newman::{BestPartition, GirvanNewman, Iteration, Outcome, Score};
pub use modularity::modularity;
pub use shortest_paths::ShortestPaths;
pub use traits::CommunityDetection;

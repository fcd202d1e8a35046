//! # girvan_newman
//!
//! Divisive community detection: repeatedly cut the edges with the highest
//! shortest-path betweenness and keep the connected-component partition
//! with the best modularity.
//!
//! - [`Graph`]: weighted undirected graph, weights optionally derived from
//!   per-node property vectors.
//! - [`community`]: shortest paths, betweenness, components, modularity and
//!   the [`GirvanNewman`] driver.
//! - [`input`]: readers for edge and property records.
//!
//! Enable the `parallel` feature to enumerate shortest paths on rayon.

pub mod community;
/// Error types used across `girvan_newman`.
pub mod error;
pub mod graph;
pub mod input;

#[cfg(test)]
mod community_tests;

pub use community::{
    BestPartition, CommunityDetection, GirvanNewman, Iteration, Outcome, Partition, Score,
};
pub use error::{Error, Result};
pub use graph::{EdgeKey, Graph, NodeId};

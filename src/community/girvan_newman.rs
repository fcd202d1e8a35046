//! Girvan–Newman divisive community detection.
//!
//! ## The Algorithm (Girvan & Newman 2002)
//!
//! Rather than grouping nodes bottom-up, remove the edges that bridge
//! communities until the graph falls apart:
//!
//! 1. Compute edge betweenness over all shortest paths.
//! 2. Remove **every** edge tied for the maximum (exact equality).
//! 3. If edges remain, score the connected components by modularity and
//!    keep the partition if it strictly beats the best so far.
//! 4. Repeat until no edges remain.
//!
//! Ties in modularity keep the earliest partition. The final all-singleton
//! partition (no edges left) is never scored, so a graph whose edges all
//! vanish in the first round (for example a single edge) has no result.
//!
//! ## Complexity
//!
//! Each round runs an O(V³) all-pairs pass plus path enumeration for all
//! O(V²) pairs; there are at most E rounds. Use
//! [`GirvanNewman::with_max_iter`] to cap the work on larger graphs.
//!
//! ## References
//!
//! Girvan & Newman (2002). "Community structure in social and biological
//! networks." PNAS 99(12), 7821–7826.
//!
//! Newman & Girvan (2004). "Finding and evaluating community structure in
//! networks." Physical Review E 69, 026113.

use super::betweenness::edge_betweenness;
use super::components::{connected_components, Partition};
use super::modularity::modularity;
use super::shortest_paths::ShortestPaths;
use super::traits::CommunityDetection;
use crate::error::{Error, Result};
use crate::graph::{EdgeKey, Graph};
use core::fmt;
use log::{debug, info};
use petgraph::graph::UnGraph;

/// Girvan–Newman community detection.
#[derive(Debug, Clone, Default)]
pub struct GirvanNewman {
    /// Cap on outer rounds; `None` runs until no edges remain.
    max_iter: Option<usize>,
}

/// Community count and modularity of the partition left after a round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Number of connected components.
    pub communities: usize,
    /// Modularity of those components.
    pub modularity: f64,
}

/// What one outer round did.
#[derive(Debug, Clone, PartialEq)]
pub struct Iteration {
    /// 1-based round number.
    pub index: usize,
    /// Edges removed this round, sorted by (min, max) endpoint.
    pub removed: Vec<EdgeKey>,
    /// Betweenness shared by every removed edge.
    pub max_betweenness: f64,
    /// `None` when the round removed the last edges.
    pub score: Option<Score>,
}

impl fmt::Display for Iteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round {}: removed", self.index)?;
        for key in &self.removed {
            write!(f, " {key}")?;
        }
        write!(f, " at betweenness {}", self.max_betweenness)?;
        match self.score {
            Some(score) => write!(
                f,
                ", {} communities, modularity {}",
                score.communities, score.modularity
            ),
            None => write!(f, ", no edges left"),
        }
    }
}

/// Highest-modularity partition observed.
#[derive(Debug, Clone, PartialEq)]
pub struct BestPartition {
    /// The communities.
    pub partition: Partition,
    /// Their modularity.
    pub modularity: f64,
}

/// Result of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    /// Best partition, `None` if no round ever left an edge behind.
    pub best: Option<BestPartition>,
    /// Per-round trace.
    pub iterations: Vec<Iteration>,
    /// Whether the round cap stopped the run before the graph emptied.
    pub exhausted: bool,
}

impl GirvanNewman {
    /// Create a detector with no round cap.
    pub fn new() -> Self {
        Self { max_iter: None }
    }

    /// Stop after at most `max_iter` rounds.
    ///
    /// The best partition found so far is still returned and
    /// [`Outcome::exhausted`] is set.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    /// Run to completion (or the round cap) on `graph`, which is consumed
    /// by edge removal.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if the round cap is zero.
    pub fn run(&self, mut graph: Graph) -> Result<Outcome> {
        if self.max_iter == Some(0) {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }

        let mut outcome = Outcome::default();
        let total_edges = graph.edge_count();

        while graph.has_edges() {
            if self
                .max_iter
                .is_some_and(|cap| outcome.iterations.len() >= cap)
            {
                outcome.exhausted = true;
                break;
            }

            let paths = ShortestPaths::compute(&graph);
            let centrality = edge_betweenness(&graph, &paths);

            let Some(max_betweenness) = centrality.values().copied().reduce(f64::max) else {
                break;
            };
            let removed: Vec<EdgeKey> = centrality
                .iter()
                .filter(|&(_, &c)| c == max_betweenness)
                .map(|(&key, _)| key)
                .collect();

            for key in &removed {
                graph.remove_edge(key.lo(), key.hi())?;
            }

            let score = if graph.has_edges() {
                let partition = connected_components(&graph);
                let q = modularity(&graph, &partition);
                let score = Score {
                    communities: partition.len(),
                    modularity: q,
                };
                if outcome.best.as_ref().map_or(true, |best| q > best.modularity) {
                    outcome.best = Some(BestPartition {
                        partition,
                        modularity: q,
                    });
                }
                Some(score)
            } else {
                None
            };

            let iteration = Iteration {
                index: outcome.iterations.len() + 1,
                removed,
                max_betweenness,
                score,
            };
            debug!("{iteration} ({} edge(s) remain)", graph.edge_count());
            outcome.iterations.push(iteration);
        }

        info!(
            "girvan-newman: {} round(s) over {total_edges} edge(s), best modularity {:?}",
            outcome.iterations.len(),
            outcome.best.as_ref().map(|b| b.modularity)
        );

        Ok(outcome)
    }
}

impl CommunityDetection for GirvanNewman {
    fn detect<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Vec<usize>> {
        let n = graph.node_count();
        if n == 0 {
            return Err(Error::EmptyInput);
        }

        let outcome = self.run(Graph::from_petgraph(graph)?)?;

        match outcome.best {
            // No scored partition: each node is its own community
            None => Ok((0..n).collect()),
            Some(best) => {
                let mut labels = vec![0; n];
                for (community, group) in best.partition.groups().iter().enumerate() {
                    for &node in group {
                        labels[node] = community;
                    }
                }
                Ok(labels)
            }
        }
    }
}

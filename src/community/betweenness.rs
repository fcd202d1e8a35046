//! Edge betweenness centrality over all shortest paths.
//!
//! For every ordered pair `(i, j)` with `n > 0` shortest paths, each path
//! adds `1/n` to every edge it traverses. Each unordered pair is visited
//! twice, as `(i, j)` and `(j, i)`, so the totals are halved at the end.
//!
//! ```text
//! C(e) = ½ Σ_{i,j} (#shortest i→j paths through e) / (#shortest i→j paths)
//! ```
//!
//! Unreachable pairs have no paths and contribute nothing.
//!
//! With the `parallel` feature, paths for each source node are
//! enumerated on rayon's pool. Credits are still folded into the table
//! in `(i, j)` order, so the floating-point totals, and therefore exact
//! ties between edges, are identical to the serial computation.

use super::shortest_paths::ShortestPaths;
use crate::graph::{EdgeKey, Graph};
use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Betweenness of every current edge in `graph`.
///
/// `paths` must have been computed from the same graph state.
pub fn edge_betweenness(graph: &Graph, paths: &ShortestPaths) -> BTreeMap<EdgeKey, f64> {
    let mut centrality: BTreeMap<EdgeKey, f64> = graph.edges().map(|(k, _)| (k, 0.0)).collect();
    fold_credits(&mut centrality, paths);

    for score in centrality.values_mut() {
        *score /= 2.0;
    }

    log::trace!("betweenness accumulated over {} edges", centrality.len());
    centrality
}

#[cfg(not(feature = "parallel"))]
fn fold_credits(centrality: &mut BTreeMap<EdgeKey, f64>, paths: &ShortestPaths) {
    for i in 0..paths.node_count() {
        accumulate(centrality, source_credits(paths, i));
    }
}

#[cfg(feature = "parallel")]
fn fold_credits(centrality: &mut BTreeMap<EdgeKey, f64>, paths: &ShortestPaths) {
    let rows: Vec<Vec<(EdgeKey, f64)>> = (0..paths.node_count())
        .into_par_iter()
        .map(|i| source_credits(paths, i))
        .collect();
    for row in rows {
        accumulate(centrality, row);
    }
}

/// Path credits for all pairs starting at dense index `i`, in `j` order.
fn source_credits(paths: &ShortestPaths, i: usize) -> Vec<(EdgeKey, f64)> {
    let mut credits = Vec::new();
    for j in 0..paths.node_count() {
        let routes = paths.index_paths(i, j);
        if routes.is_empty() {
            continue;
        }
        let share = 1.0 / routes.len() as f64;
        for route in &routes {
            for hop in route.windows(2) {
                credits.push((paths.edge_key(hop[0], hop[1]), share));
            }
        }
    }
    credits
}

fn accumulate(centrality: &mut BTreeMap<EdgeKey, f64>, credits: Vec<(EdgeKey, f64)>) {
    for (key, share) in credits {
        *centrality.entry(key).or_insert(0.0) += share;
    }
}

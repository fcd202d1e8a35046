//! Connected components as community partitions.

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use std::collections::{BTreeSet, HashMap, VecDeque};

/// Disjoint node groups.
///
/// Always normalized: members ascending within a group, groups ordered by
/// (size, smallest member).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition {
    groups: Vec<Vec<NodeId>>,
}

impl Partition {
    /// Build a partition from arbitrary groups.
    ///
    /// Empty groups are dropped.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateNode`] if a node appears in more than one group
    /// (or twice in one).
    pub fn from_groups(groups: Vec<Vec<NodeId>>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for &node in groups.iter().flatten() {
            if !seen.insert(node) {
                return Err(Error::DuplicateNode { node });
            }
        }
        Ok(Self::normalized(groups))
    }

    fn normalized(mut groups: Vec<Vec<NodeId>>) -> Self {
        groups.retain(|g| !g.is_empty());
        for group in &mut groups {
            group.sort_unstable();
        }
        groups.sort_by_key(|g| (g.len(), g[0]));
        Self { groups }
    }

    /// Groups in display order.
    pub fn groups(&self) -> &[Vec<NodeId>] {
        &self.groups
    }

    /// Consume into the group list.
    pub fn into_groups(self) -> Vec<Vec<NodeId>> {
        self.groups
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Node → group index (position in [`Partition::groups`]).
    pub fn labels(&self) -> HashMap<NodeId, usize> {
        self.groups
            .iter()
            .enumerate()
            .flat_map(|(c, group)| group.iter().map(move |&node| (node, c)))
            .collect()
    }
}

/// Connected components of the current adjacency, by BFS.
///
/// Every node, isolated ones included, lands in exactly one group.
pub fn connected_components(graph: &Graph) -> Partition {
    let mut visited: BTreeSet<NodeId> = BTreeSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut groups = Vec::new();

    for start in graph.nodes() {
        if !visited.insert(start) {
            continue;
        }
        let mut group = vec![start];
        queue.push_back(start);
        while let Some(u) = queue.pop_front() {
            for &v in graph.adjacent(u) {
                if visited.insert(v) {
                    group.push(v);
                    queue.push_back(v);
                }
            }
        }
        groups.push(group);
    }

    Partition::normalized(groups)
}

//! Graph topology construction
//!
//! Turns the declarative technology table into an immutable node/edge
//! structure. Built once per animator instance and shared read-only with the
//! simulator and the render adapter for the animator's lifetime.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Category, TechEntry};

/// A node in the resolved topology.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyNode {
    /// Stable identity (technology name)
    pub id: String,
    /// Category (determines color)
    pub category: Category,
    /// RGBA color as normalized floats
    pub color: [f32; 4],
}

/// Immutable node/edge structure of the visualized graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topology {
    /// All nodes, in catalog order
    pub nodes: Vec<TopologyNode>,
    /// Undirected edges as index pairs with `a < b`, sorted, deduplicated
    pub edges: Vec<(usize, usize)>,
    index_by_id: HashMap<String, usize>,
}

impl Topology {
    /// Look up a node index by its identity.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    /// Indices of nodes sharing an edge with `index`.
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        let mut out = Vec::new();
        for &(a, b) in &self.edges {
            if a == index {
                out.push(b);
            } else if b == index {
                out.push(a);
            }
        }
        out
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Build an immutable [`Topology`] from the declarative table.
///
/// One node per entry; one undirected edge per resolved relation. A relation
/// naming an unknown technology, or the entry itself, is dropped without
/// error: the table is static content, so a mismatch is a content mistake
/// caught at build time, never a runtime fault.
pub fn build_topology(entries: &[TechEntry]) -> Topology {
    let nodes: Vec<TopologyNode> = entries
        .iter()
        .map(|entry| TopologyNode {
            id: entry.name.to_string(),
            category: entry.category,
            color: entry.category.color(),
        })
        .collect();

    let index_by_id: HashMap<String, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id.clone(), i))
        .collect();

    let mut edges = Vec::new();
    for (source, entry) in entries.iter().enumerate() {
        for related in entry.related {
            let Some(&target) = index_by_id.get(*related) else {
                debug!(
                    source = entry.name,
                    related, "dropping relation to unknown technology"
                );
                continue;
            };
            if source == target {
                continue;
            }
            // Store unordered: (a, b) and (b, a) collapse to one edge.
            let pair = if source < target {
                (source, target)
            } else {
                (target, source)
            };
            edges.push(pair);
        }
    }
    edges.sort_unstable();
    edges.dedup();

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        "topology built from catalog"
    );

    Topology {
        nodes,
        edges,
        index_by_id,
    }
}

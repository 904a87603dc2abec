//! Graph algorithms module
//!
//! Algorithms are implemented in the `scholar-graph-algorithms` crate.
//! This module provides the integration/adapter layer.

pub mod pathfinding;

use crate::graph::{GraphStore, Node};
use scholar_graph_algorithms::GraphView;

// Re-export algorithms
pub use pathfinding::{search_path, PathAlgorithm};
pub use scholar_graph_algorithms::{
    breadth_first_search, canonical_pair, depth_first_search, filter_connections,
    EdgeFrequencyCounter, NamePair, PathResult, RankedPair,
};

/// Build a GraphView from the store for algorithm execution
///
/// Vertex indices follow the store's node insertion order and every adjacency
/// list is copied as is, duplicates included.
pub fn build_view(store: &GraphStore) -> GraphView {
    GraphView::from_adjacency(store.adjacency().map(|(node, targets)| {
        let targets: Vec<&str> = targets.iter().map(Node::name).collect();
        (node.name(), targets)
    }))
}

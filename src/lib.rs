//! Scholar Graph
//!
//! An in-memory co-authorship graph engine. Publication records go in, a
//! graph of authors comes out, and the graph answers analytic queries.
//!
//! # Architecture
//!
//! - [`graph`]: named-vertex adjacency-list store, directed or undirected
//! - [`builder`]: co-authorship graph construction from author lists
//! - [`algo`]: path search, edge frequency ranking and ego networks, backed by
//!   the `scholar-graph-algorithms` crate
//!
//! Data flow: records → [`GraphBuilder`] → [`GraphStore`] → path queries and
//! edge ranking, or [`GraphStore::node_pairs`] → [`filter_connections`] for a
//! bounded ego network handed to a rendering layer.
//!
//! Everything is synchronous and in-memory. The core never reads files; the
//! caller loads records and passes them in.
//!
//! ## Example Usage
//!
//! ```rust
//! use scholar_graph::{build_graph, search_path, PathAlgorithm, Publication};
//!
//! let records = vec![
//!     Publication::new("Alice, Bob"),
//!     Publication::new("Bob, Carol"),
//! ];
//!
//! let graph = build_graph(&records, None, None).unwrap();
//! assert_eq!(graph.vertex_count(), 3);
//!
//! let path = search_path(&graph, "Alice", "Carol", PathAlgorithm::BreadthFirst).unwrap();
//! assert_eq!(path, Some(vec!["Alice".to_string(), "Bob".to_string(), "Carol".to_string()]));
//!
//! let top = graph.edge_rank(None, Some(1)).unwrap();
//! assert_eq!(top[0].count, 2);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod builder;
pub mod graph;

// Re-export main types for convenience
pub use graph::{
    Edge, GraphError, GraphMode, GraphResult, GraphStatistics, GraphStore, Node,
};

pub use algo::{
    build_view, filter_connections, search_path, EdgeFrequencyCounter, PathAlgorithm,
    RankedPair,
};

pub use builder::{
    build_graph, co_authors, normalize_name, AuthorList, BuildConfig, GraphBuilder, Publication,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.2.0");
    }
}

//! Core graph implementation
//!
//! This module implements the co-authorship graph data model with:
//! - Nodes identified by name alone
//! - Edges that are directed or undirected depending on the store's mode
//! - Multiple edges between the same nodes (co-occurrence strength)
//! - In-memory adjacency-list storage

pub mod edge;
pub mod node;
pub mod store;

// Re-export main types
pub use edge::Edge;
pub use node::Node;
pub use store::{GraphError, GraphMode, GraphResult, GraphStatistics, GraphStore};

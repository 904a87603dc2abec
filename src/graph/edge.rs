//! Edge implementation for the co-authorship graph
//!
//! An edge is an ordered `(src, dest)` pair. Whether it is stored one way or
//! both ways is decided by the [`GraphStore`](super::GraphStore) it is added to.

use super::node::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A connection between two nodes that co-occur in the same publication
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Source node (edge goes FROM this node)
    pub src: Node,

    /// Destination node (edge goes TO this node)
    pub dest: Node,
}

impl Edge {
    /// Create a new edge
    pub fn new(src: impl Into<Node>, dest: impl Into<Node>) -> Self {
        Edge {
            src: src.into(),
            dest: dest.into(),
        }
    }

    /// The same connection pointing the other way
    pub fn reversed(&self) -> Self {
        Edge {
            src: self.dest.clone(),
            dest: self.src.clone(),
        }
    }

    /// Check if edge connects two specific nodes, in either direction
    pub fn connects(&self, a: &Node, b: &Node) -> bool {
        (&self.src == a && &self.dest == b) || (&self.src == b && &self.dest == a)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.src, self.dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge() {
        let edge = Edge::new("Alice", "Bob");
        assert_eq!(edge.src, Node::new("Alice"));
        assert_eq!(edge.dest, Node::new("Bob"));
        assert_eq!(format!("{}", edge), "Alice -> Bob");
    }

    #[test]
    fn test_edge_direction() {
        let edge = Edge::new("Alice", "Bob");
        let rev = edge.reversed();

        assert_eq!(rev.src.name(), "Bob");
        assert_eq!(rev.dest.name(), "Alice");
        assert_ne!(edge, rev);
        assert!(rev.connects(&Node::new("Alice"), &Node::new("Bob")));
        assert!(!rev.connects(&Node::new("Alice"), &Node::new("Carol")));
    }
}

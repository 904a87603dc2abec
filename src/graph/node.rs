//! Node implementation for the co-authorship graph
//!
//! A node is a named vertex. Identity, equality, ordering and hashing are all
//! defined by the name alone.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A named vertex (an author in a co-authorship graph)
///
/// Two `Node` values with the same name are the same vertex. Nodes are
/// immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node {
    name: String,
}

impl Node {
    /// Create a new node
    pub fn new(name: impl Into<String>) -> Self {
        Node { name: name.into() }
    }

    /// The vertex name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<String> for Node {
    fn from(name: String) -> Self {
        Node { name }
    }
}

impl From<&str> for Node {
    fn from(name: &str) -> Self {
        Node::new(name)
    }
}

impl AsRef<str> for Node {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

// Hash and Eq of Node are those of its name, so maps keyed by Node can be
// queried with a plain &str.
impl Borrow<str> for Node {
    fn borrow(&self) -> &str {
        &self.name
    }
}

//! In-memory graph storage implementation
//!
//! An adjacency-list graph over named vertices. One store type covers both
//! directed and undirected graphs; the [`GraphMode`] only changes how
//! [`GraphStore::add_edge`] records a connection.

use super::edge::Edge;
use super::node::Node;
use indexmap::{IndexMap, IndexSet};
use scholar_graph_algorithms::{filter_connections, EdgeFrequencyCounter, RankedPair};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(String),

    #[error("Invalid edge: source node {0} does not exist")]
    InvalidEdgeSource(String),

    #[error("Invalid edge: target node {0} does not exist")]
    InvalidEdgeTarget(String),
}

impl GraphError {
    /// True for errors raised when an edge references a node that was never added
    pub fn is_missing_node(&self) -> bool {
        matches!(
            self,
            GraphError::InvalidEdgeSource(_) | GraphError::InvalidEdgeTarget(_)
        )
    }
}

pub type GraphResult<T> = Result<T, GraphError>;

/// How edges are recorded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphMode {
    /// `add_edge(a -> b)` stores `a -> b` only
    Directed,
    /// `add_edge(a -> b)` stores both `a -> b` and `b -> a`
    #[default]
    Undirected,
}

/// Summary statistics of a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub mode: GraphMode,
    /// Number of distinct nodes
    pub vertex_count: usize,
    /// Stored directed entries, duplicates included
    pub edge_count: usize,
    pub max_degree: usize,
    pub mean_degree: f64,
}

/// In-memory graph storage
///
/// Maps each node to the ordered list of nodes reachable in one hop. The list
/// allows duplicates: two authors who share three papers are linked three
/// times. Nodes keep their insertion order.
///
/// Stores are filled during construction and treated as read-only afterwards;
/// there is no removal API.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    mode: GraphMode,
    adjacency: IndexMap<Node, Vec<Node>>,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new(mode: GraphMode) -> Self {
        GraphStore {
            mode,
            adjacency: IndexMap::new(),
        }
    }

    /// Create an empty directed graph
    pub fn directed() -> Self {
        Self::new(GraphMode::Directed)
    }

    /// Create an empty undirected graph
    pub fn undirected() -> Self {
        Self::new(GraphMode::Undirected)
    }

    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    pub fn is_directed(&self) -> bool {
        self.mode == GraphMode::Directed
    }

    /// Add a node. Adding a node that is already present is a no-op.
    ///
    /// Returns true if the node was not present before.
    pub fn add_node(&mut self, node: impl Into<Node>) -> bool {
        let node = node.into();
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Add an edge between two existing nodes
    ///
    /// Both endpoints must already be in the graph, otherwise nothing is
    /// recorded. An undirected graph records both directions.
    pub fn add_edge(&mut self, edge: Edge) -> GraphResult<()> {
        // Validate nodes exist
        if !self.has_node(&edge.src) {
            return Err(GraphError::InvalidEdgeSource(edge.src.name().to_string()));
        }
        if !self.has_node(&edge.dest) {
            return Err(GraphError::InvalidEdgeTarget(edge.dest.name().to_string()));
        }

        self.push_adjacent(&edge.src, edge.dest.clone());
        if self.mode == GraphMode::Undirected {
            self.push_adjacent(&edge.dest, edge.src);
        }
        Ok(())
    }

    fn push_adjacent(&mut self, src: &Node, dest: Node) {
        if let Some(targets) = self.adjacency.get_mut(src) {
            targets.push(dest);
        }
    }

    /// Nodes one hop away from `node`, in insertion order, duplicates included
    pub fn children(&self, node: impl AsRef<str>) -> GraphResult<&[Node]> {
        let name = node.as_ref();
        self.adjacency
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))
    }

    /// Check if the graph contains a node
    pub fn has_node(&self, node: impl AsRef<str>) -> bool {
        self.adjacency.contains_key(node.as_ref())
    }

    /// Look a node up by name
    pub fn get_node(&self, name: &str) -> GraphResult<&Node> {
        self.adjacency
            .get_key_value(name)
            .map(|(node, _)| node)
            .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.adjacency.keys()
    }

    /// Adjacency lists in node insertion order
    pub fn adjacency(&self) -> impl Iterator<Item = (&Node, &[Node])> + '_ {
        self.adjacency
            .iter()
            .map(|(node, targets)| (node, targets.as_slice()))
    }

    /// Every stored edge as a `(src, dest)` name pair, duplicates included
    pub fn node_pairs(&self) -> Vec<(String, String)> {
        self.adjacency
            .iter()
            .flat_map(|(src, targets)| {
                targets
                    .iter()
                    .map(move |dest| (src.name().to_string(), dest.name().to_string()))
            })
            .collect()
    }

    /// Number of distinct nodes
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored directed entries, duplicates included.
    ///
    /// Each undirected connection counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Out-degree of a single node
    pub fn vertex_degree(&self, node: impl AsRef<str>) -> GraphResult<usize> {
        self.children(node).map(<[Node]>::len)
    }

    /// Out-degrees of all nodes, sorted ascending
    pub fn vertex_degrees(&self) -> Vec<usize> {
        let mut degrees: Vec<usize> = self.adjacency.values().map(Vec::len).collect();
        degrees.sort_unstable();
        degrees
    }

    /// Rank edges by how often they were recorded
    ///
    /// With `vertex` the ranking covers only that node's outgoing entries,
    /// otherwise every stored pair. Pairs are counted regardless of
    /// orientation, so in an undirected graph each connection counts from both
    /// sides.
    pub fn edge_rank(
        &self,
        vertex: Option<&str>,
        limit: Option<usize>,
    ) -> GraphResult<Vec<RankedPair>> {
        let counter = match vertex {
            Some(name) => {
                let partners = self.children(name)?;
                EdgeFrequencyCounter::from_pairs(
                    partners.iter().map(|partner| (name, partner.name())),
                )
            }
            None => EdgeFrequencyCounter::from_pairs(self.node_pairs()),
        };
        Ok(counter.most_common(limit))
    }

    /// Connections within `depth` expansion rounds of `root`
    pub fn ego_network(&self, root: &str, depth: usize) -> IndexSet<(String, String)> {
        filter_connections(root, &self.node_pairs(), depth)
    }

    /// Summary statistics
    pub fn statistics(&self) -> GraphStatistics {
        let vertex_count = self.vertex_count();
        let edge_count = self.edge_count();
        let max_degree = self.adjacency.values().map(Vec::len).max().unwrap_or(0);
        let mean_degree = if vertex_count == 0 {
            0.0
        } else {
            edge_count as f64 / vertex_count as f64
        };

        GraphStatistics {
            mode: self.mode,
            vertex_count,
            edge_count,
            max_degree,
            mean_degree,
        }
    }
}

//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the graph topology for algorithm execution.

use std::collections::HashMap;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Vertices are identified by name. Neighbor slices keep the order and the
/// multiplicity of the source adjacency lists, so repeated co-authorships
/// show up as repeated targets.
#[derive(Debug, Clone, Default)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to the vertex name
    pub index_to_node: Vec<String>,
    /// Mapping from vertex name to dense index
    pub node_to_index: HashMap<String, usize>,

    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,
}

impl GraphView {
    /// Build a view from per-vertex adjacency lists given by name.
    ///
    /// Targets that are not themselves listed as vertices are dropped.
    pub fn from_adjacency<I, N, T>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, Vec<T>)>,
        N: Into<String>,
        T: AsRef<str>,
    {
        let rows: Vec<(String, Vec<T>)> = adjacency
            .into_iter()
            .map(|(name, targets)| (name.into(), targets))
            .collect();

        let mut index_to_node = Vec::with_capacity(rows.len());
        let mut node_to_index = HashMap::with_capacity(rows.len());
        for (idx, (name, _)) in rows.iter().enumerate() {
            index_to_node.push(name.clone());
            node_to_index.insert(name.clone(), idx);
        }

        let node_count = index_to_node.len();
        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();

        out_offsets.push(0);
        for (_, targets) in &rows {
            out_targets.extend(
                targets
                    .iter()
                    .filter_map(|t| node_to_index.get(t.as_ref()).copied()),
            );
            out_offsets.push(out_targets.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            out_offsets,
            out_targets,
        }
    }

    /// Dense index of a vertex name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.node_to_index.get(name).copied()
    }

    /// Vertex name at a dense index
    pub fn name_of(&self, idx: usize) -> &str {
        &self.index_to_node[idx]
    }

    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Total number of stored (directed) edge entries
    pub fn edge_count(&self) -> usize {
        self.out_targets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_keeps_order_and_duplicates() {
        let view = GraphView::from_adjacency(vec![
            ("a", vec!["c", "b", "c"]),
            ("b", vec!["a"]),
            ("c", vec![]),
        ]);

        assert_eq!(view.node_count, 3);
        let a = view.index_of("a").unwrap();
        let b = view.index_of("b").unwrap();
        let c = view.index_of("c").unwrap();

        assert_eq!(view.successors(a), &[c, b, c]);
        assert_eq!(view.out_degree(a), 3);
        assert_eq!(view.out_degree(c), 0);
        assert_eq!(view.name_of(b), "b");
        assert_eq!(view.edge_count(), 4);
    }

    #[test]
    fn test_unknown_targets_are_dropped() {
        let view = GraphView::from_adjacency(vec![("a", vec!["ghost"])]);
        let a = view.index_of("a").unwrap();
        assert!(view.successors(a).is_empty());
        assert_eq!(view.index_of("ghost"), None);
    }
}

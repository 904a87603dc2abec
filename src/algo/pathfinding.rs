//! Path queries over a GraphStore

use super::build_view;
use crate::graph::{GraphError, GraphResult, GraphStore};
use scholar_graph_algorithms::{breadth_first_search, depth_first_search};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Which traversal answers a path query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathAlgorithm {
    /// Pruned depth-first search; result depends on adjacency order
    #[serde(alias = "dfs")]
    DepthFirst,
    /// Breadth-first search; always a minimum-hop path
    #[default]
    #[serde(alias = "bfs")]
    BreadthFirst,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown path algorithm: {0} (expected dfs or bfs)")]
pub struct ParsePathAlgorithmError(String);

impl FromStr for PathAlgorithm {
    type Err = ParsePathAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depthfirst" | "depth-first" => Ok(PathAlgorithm::DepthFirst),
            "bfs" | "breadthfirst" | "breadth-first" => Ok(PathAlgorithm::BreadthFirst),
            _ => Err(ParsePathAlgorithmError(s.to_string())),
        }
    }
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathAlgorithm::DepthFirst => write!(f, "dfs"),
            PathAlgorithm::BreadthFirst => write!(f, "bfs"),
        }
    }
}

/// Find a path from `start` to `end` and return the vertex names along it.
///
/// Unknown endpoints are reported as [`GraphError::NodeNotFound`]; a known but
/// unreachable `end` gives `Ok(None)`.
pub fn search_path(
    store: &GraphStore,
    start: &str,
    end: &str,
    algorithm: PathAlgorithm,
) -> GraphResult<Option<Vec<String>>> {
    let view = build_view(store);
    let source = view
        .index_of(start)
        .ok_or_else(|| GraphError::NodeNotFound(start.to_string()))?;
    let target = view
        .index_of(end)
        .ok_or_else(|| GraphError::NodeNotFound(end.to_string()))?;

    let result = match algorithm {
        PathAlgorithm::DepthFirst => depth_first_search(&view, source, target),
        PathAlgorithm::BreadthFirst => breadth_first_search(&view, source, target),
    };

    match &result {
        Some(found) => debug!("{} path {} -> {}: {} hops", algorithm, start, end, found.hops()),
        None => debug!("{} found no path {} -> {}", algorithm, start, end),
    }

    Ok(result.map(|found| found.names(&view)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("bfs".parse::<PathAlgorithm>().unwrap(), PathAlgorithm::BreadthFirst);
        assert_eq!("DFS".parse::<PathAlgorithm>().unwrap(), PathAlgorithm::DepthFirst);
        assert!("dijkstra".parse::<PathAlgorithm>().is_err());
        assert_eq!(PathAlgorithm::DepthFirst.to_string(), "dfs");
    }

    #[test]
    fn test_search_path_unknown_endpoint() {
        let mut store = GraphStore::undirected();
        store.add_node("Alice");

        assert_eq!(
            search_path(&store, "Alice", "Nobody", PathAlgorithm::BreadthFirst),
            Err(GraphError::NodeNotFound("Nobody".to_string()))
        );
        assert!(search_path(&store, "Nobody", "Alice", PathAlgorithm::DepthFirst).is_err());
    }

    #[test]
    fn test_search_path_no_route() {
        let mut store = GraphStore::directed();
        store.add_node("a");
        store.add_node("b");
        store.add_edge(Edge::new("b", "a")).unwrap();

        assert_eq!(search_path(&store, "a", "b", PathAlgorithm::BreadthFirst), Ok(None));
        assert_eq!(
            search_path(&store, "b", "a", PathAlgorithm::DepthFirst),
            Ok(Some(vec!["b".to_string(), "a".to_string()]))
        );
    }
}

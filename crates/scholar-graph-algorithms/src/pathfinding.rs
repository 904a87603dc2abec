//! Pathfinding algorithms
//!
//! Depth-first search with branch pruning and breadth-first shortest path,
//! both over the dense [`GraphView`].

use super::common::GraphView;
use std::collections::VecDeque;

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub source: usize,
    pub target: usize,
    /// Dense indices from `source` to `target`, both inclusive
    pub path: Vec<usize>,
}

impl PathResult {
    fn new(path: Vec<usize>) -> Option<Self> {
        let source = *path.first()?;
        let target = *path.last()?;
        Some(PathResult { source, target, path })
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Resolve the dense indices back to vertex names
    pub fn names(&self, view: &GraphView) -> Vec<String> {
        self.path.iter().map(|&idx| view.name_of(idx).to_string()).collect()
    }
}

/// Depth-First Search with pruning
///
/// Neighbors are explored in adjacency order. A vertex already on the current
/// path is never revisited, and a branch is abandoned once the current path is
/// no shorter than the best path found so far. A later path of equal length
/// replaces the earlier one. The result depends on adjacency order and is not
/// guaranteed to be globally shortest.
///
/// Runs on an explicit stack of `(vertex, next neighbor position)` frames, so
/// deep graphs cannot exhaust the call stack.
pub fn depth_first_search(view: &GraphView, source: usize, target: usize) -> Option<PathResult> {
    if source >= view.node_count || target >= view.node_count {
        return None;
    }

    let mut path = vec![source];
    if source == target {
        return PathResult::new(path);
    }

    let mut best: Option<Vec<usize>> = None;
    let mut stack: Vec<(usize, usize)> = vec![(source, 0)];

    while let Some(frame) = stack.last_mut() {
        let (node, pos) = *frame;
        let successors = view.successors(node);

        if pos >= successors.len() {
            stack.pop();
            path.pop();
            continue;
        }
        frame.1 += 1;

        let next = successors[pos];
        if path.contains(&next) {
            continue;
        }
        if let Some(ref shortest) = best {
            if path.len() >= shortest.len() {
                continue;
            }
        }

        path.push(next);
        if next == target {
            best = Some(path.clone());
            path.pop();
        } else {
            stack.push((next, 0));
        }
    }

    best.and_then(PathResult::new)
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Keeps a queue of complete candidate paths and expands them in level order,
/// so the first path that reaches `target` has the minimum edge count.
pub fn breadth_first_search(view: &GraphView, source: usize, target: usize) -> Option<PathResult> {
    if source >= view.node_count || target >= view.node_count {
        return None;
    }

    let mut queue: VecDeque<Vec<usize>> = VecDeque::new();
    queue.push_back(vec![source]);

    while let Some(current) = queue.pop_front() {
        let last = *current.last()?;
        if last == target {
            return PathResult::new(current);
        }

        let successors = view.successors(last);
        for (pos, &next) in successors.iter().enumerate() {
            // Repeated co-authorship entries would only enqueue identical paths
            if current.contains(&next) || successors[..pos].contains(&next) {
                continue;
            }
            let mut extended = Vec::with_capacity(current.len() + 1);
            extended.extend_from_slice(&current);
            extended.push(next);
            queue.push_back(extended);
        }
    }

    None
}

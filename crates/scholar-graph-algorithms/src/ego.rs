//! Ego network extraction over a flat connection list

use indexmap::IndexSet;

/// Collect the connections within `depth` expansion rounds of `root`.
///
/// Each round scans `connections` once. A connection with an endpoint that has
/// already been reached joins the result, and its other endpoint becomes
/// reached immediately, so later connections in the same round can build on it.
/// `depth == 0` yields an empty set. Connections keep their original
/// orientation and are returned in order of discovery.
pub fn filter_connections<A, B>(
    root: &str,
    connections: &[(A, B)],
    depth: usize,
) -> IndexSet<(String, String)>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut filtered = IndexSet::new();
    let mut reached: IndexSet<String> = IndexSet::new();
    reached.insert(root.to_string());

    for _ in 0..depth {
        for (a, b) in connections {
            let (a, b) = (a.as_ref(), b.as_ref());
            if reached.contains(a) {
                filtered.insert((a.to_string(), b.to_string()));
                reached.insert(b.to_string());
            } else if reached.contains(b) {
                filtered.insert((a.to_string(), b.to_string()));
                reached.insert(a.to_string());
            }
        }
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conns() -> Vec<(&'static str, &'static str)> {
        vec![
            ("x", "y"),
            ("root", "a"),
            ("b", "a"),
            ("c", "b"),
            ("d", "c"),
        ]
    }

    #[test]
    fn test_depth_zero_is_empty() {
        assert!(filter_connections("root", &conns(), 0).is_empty());
        assert!(filter_connections("nobody", &conns(), 0).is_empty());
    }

    #[test]
    fn test_same_round_growth() {
        // One round follows the list order: root-a, then a-b, then b-c, then c-d.
        let one = filter_connections("root", &conns(), 1);
        assert_eq!(one.len(), 4);
        assert!(!one.contains(&("x".to_string(), "y".to_string())));
    }

    #[test]
    fn test_rounds_reach_earlier_entries() {
        let conns = vec![("c", "b"), ("b", "a"), ("a", "root")];
        assert_eq!(filter_connections("root", &conns, 1).len(), 1);
        assert_eq!(filter_connections("root", &conns, 2).len(), 2);
        assert_eq!(filter_connections("root", &conns, 3).len(), 3);
    }

    #[test]
    fn test_monotone_in_depth() {
        let conns = vec![("c", "b"), ("b", "a"), ("a", "root"), ("z", "q")];
        for k in 0..5 {
            let smaller = filter_connections("root", &conns, k);
            let larger = filter_connections("root", &conns, k + 1);
            assert!(smaller.is_subset(&larger));
        }
    }

    #[test]
    fn test_unknown_root() {
        assert!(filter_connections("nobody", &conns(), 3).is_empty());
    }
}

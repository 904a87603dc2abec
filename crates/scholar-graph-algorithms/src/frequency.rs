//! Pair frequency counting
//!
//! Counts unordered name pairs. Each pair is sorted before counting so that
//! `(A, B)` and `(B, A)` land on the same key ("reflexive pair matching").

use indexmap::IndexMap;

/// A canonical (lexicographically sorted) name pair
pub type NamePair = (String, String);

/// A canonical pair together with its number of occurrences
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedPair {
    pub pair: NamePair,
    pub count: usize,
}

/// Occurrence counter over unordered name pairs
///
/// Keys are kept in order of first appearance, which is what breaks ties in
/// [`most_common`](EdgeFrequencyCounter::most_common).
#[derive(Debug, Clone, Default)]
pub struct EdgeFrequencyCounter {
    counts: IndexMap<NamePair, usize>,
}

impl EdgeFrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every pair in `pairs`
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut counter = Self::new();
        for (a, b) in pairs {
            counter.add(a.as_ref(), b.as_ref());
        }
        counter
    }

    /// Record one occurrence of the unordered pair `{a, b}`
    pub fn add(&mut self, a: &str, b: &str) {
        *self.counts.entry(canonical_pair(a, b)).or_insert(0) += 1;
    }

    /// Count for the unordered pair `{a, b}`
    pub fn count(&self, a: &str, b: &str) -> usize {
        self.counts.get(&canonical_pair(a, b)).copied().unwrap_or(0)
    }

    /// Number of distinct canonical pairs
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Pairs sorted by count, highest first.
    ///
    /// Equal counts keep their order of first appearance. `limit` truncates
    /// the ranking; `None` returns every pair.
    pub fn most_common(&self, limit: Option<usize>) -> Vec<RankedPair> {
        let mut ranked: Vec<RankedPair> = self
            .counts
            .iter()
            .map(|(pair, &count)| RankedPair { pair: pair.clone(), count })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.count.cmp(&a.count));

        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }
}

/// Sort the two names of a pair lexicographically
pub fn canonical_pair(a: &str, b: &str) -> NamePair {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> NamePair {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_reflexive_pairs_collapse() {
        let forward = EdgeFrequencyCounter::from_pairs([("Bob", "Alice")]);
        let backward = EdgeFrequencyCounter::from_pairs([("Alice", "Bob")]);

        assert_eq!(forward.most_common(None), backward.most_common(None));
        assert_eq!(
            forward.most_common(None),
            vec![RankedPair { pair: pair("Alice", "Bob"), count: 1 }]
        );
    }

    #[test]
    fn test_ranking_and_stable_ties() {
        let counter = EdgeFrequencyCounter::from_pairs([
            ("c", "d"),
            ("a", "b"),
            ("b", "a"),
            ("e", "f"),
            ("d", "c"),
            ("b", "a"),
        ]);

        let ranked = counter.most_common(None);
        assert_eq!(ranked[0], RankedPair { pair: pair("a", "b"), count: 3 });
        assert_eq!(ranked[1], RankedPair { pair: pair("c", "d"), count: 2 });
        assert_eq!(ranked[2], RankedPair { pair: pair("e", "f"), count: 1 });
        assert_eq!(counter.count("f", "e"), 1);
        assert_eq!(counter.len(), 3);
    }

    #[test]
    fn test_ties_follow_first_appearance() {
        let counter = EdgeFrequencyCounter::from_pairs([("y", "z"), ("a", "b"), ("m", "n")]);
        let order: Vec<NamePair> = counter.most_common(None).into_iter().map(|r| r.pair).collect();
        assert_eq!(order, vec![pair("y", "z"), pair("a", "b"), pair("m", "n")]);
    }

    #[test]
    fn test_limit() {
        let counter = EdgeFrequencyCounter::from_pairs([("a", "b"), ("a", "b"), ("c", "d")]);
        assert_eq!(counter.most_common(Some(1)).len(), 1);
        assert_eq!(counter.most_common(Some(10)).len(), 2);
        assert!(counter.most_common(Some(0)).is_empty());
        assert!(EdgeFrequencyCounter::new().most_common(None).is_empty());
    }
}

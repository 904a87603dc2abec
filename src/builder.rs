//! Co-authorship graph construction
//!
//! Turns publication records into a [`GraphStore`]: every pair of co-authors on
//! a publication becomes an edge. The builder works on records that are
//! already in memory; loading them is the caller's job.

use crate::graph::{Edge, GraphMode, GraphResult, GraphStore};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// Anything that carries a comma-separated author field
pub trait AuthorList {
    /// The raw author field, `None` when the record has none
    fn authors(&self) -> Option<&str>;
}

impl<T: AuthorList + ?Sized> AuthorList for &T {
    fn authors(&self) -> Option<&str> {
        (**self).authors()
    }
}

impl AuthorList for str {
    fn authors(&self) -> Option<&str> {
        Some(self)
    }
}

impl AuthorList for String {
    fn authors(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

/// Loosely typed records, as decoded from a scraper's key/value output
impl AuthorList for HashMap<String, String> {
    fn authors(&self) -> Option<&str> {
        self.get("authors").map(String::as_str)
    }
}

/// A scraped publication
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Comma-separated author names, free text
    #[serde(default)]
    pub authors: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_title: Option<String>,
}

impl Publication {
    pub fn new(authors: impl Into<String>) -> Self {
        Publication {
            authors: Some(authors.into()),
            journal_title: None,
        }
    }

    pub fn with_journal(mut self, journal_title: impl Into<String>) -> Self {
        self.journal_title = Some(journal_title.into());
        self
    }
}

impl AuthorList for Publication {
    fn authors(&self) -> Option<&str> {
        self.authors.as_deref()
    }
}

/// Graph construction settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directed or undirected output graph
    pub mode: GraphMode,
    /// Reduce names to "first initial + last name" before comparing them
    pub normalize_names: bool,
}

impl BuildConfig {
    pub fn directed() -> Self {
        BuildConfig {
            mode: GraphMode::Directed,
            ..Self::default()
        }
    }

    pub fn with_normalized_names(mut self) -> Self {
        self.normalize_names = true;
        self
    }
}

/// Reduce an author name to its first initial and last name.
///
/// `"Alice B. Smith"` and `"A. Smith"` both become `"A Smith"`. Single-word
/// names are returned unchanged.
pub fn normalize_name(name: &str) -> String {
    let parts: Vec<&str> = name
        .split(|c: char| c.is_whitespace() || c == '.')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [] => String::new(),
        [single] => (*single).to_string(),
        [first, .., last] => {
            let initial: String = first.chars().take(1).flat_map(char::to_uppercase).collect();
            format!("{} {}", initial, last)
        }
    }
}

/// Distinct co-author names of one record, in order of first mention.
///
/// A missing or blank author field yields an empty set, as do tokens that are
/// empty after trimming.
pub fn co_authors<R: AuthorList + ?Sized>(record: &R, normalize: bool) -> IndexSet<String> {
    let Some(field) = record.authors() else {
        return IndexSet::new();
    };

    field
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| if normalize { normalize_name(name) } else { name.to_string() })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Builds co-authorship graphs
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: BuildConfig,
}

impl GraphBuilder {
    pub fn new(config: BuildConfig) -> Self {
        GraphBuilder { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build a fresh graph from `records`.
    ///
    /// Without targets every record contributes all of its co-author pairs.
    /// With `target1` and/or `target2` only records naming at least one target
    /// contribute, and then with all of their pairs, not only the pairs that
    /// touch a target. Blank targets are ignored.
    pub fn build<I>(
        &self,
        records: I,
        target1: Option<&str>,
        target2: Option<&str>,
    ) -> GraphResult<GraphStore>
    where
        I: IntoIterator,
        I::Item: AuthorList,
    {
        let normalize = self.config.normalize_names;
        let targets: Vec<String> = [target1, target2]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|target| !target.is_empty())
            .map(|target| if normalize { normalize_name(target) } else { target.to_string() })
            .collect();

        let mut graph = GraphStore::new(self.config.mode);
        let mut seen = 0usize;
        let mut skipped = 0usize;
        let mut contributing = 0usize;

        for (index, record) in records.into_iter().enumerate() {
            seen += 1;
            let authors = co_authors(&record, normalize);
            if authors.is_empty() {
                debug!("Record {} has no usable authors, skipping", index);
                skipped += 1;
                continue;
            }

            if !targets.is_empty() && !targets.iter().any(|t| authors.contains(t.as_str())) {
                continue;
            }
            contributing += 1;

            for (i, first) in authors.iter().enumerate() {
                for second in authors.iter().skip(i + 1) {
                    graph.add_node(first.as_str());
                    graph.add_node(second.as_str());
                    graph.add_edge(Edge::new(first.as_str(), second.as_str()))?;
                }
            }
        }

        info!(
            "Built {:?} co-authorship graph from {} records ({} contributing, {} skipped): {} vertices, {} edges",
            graph.mode(),
            seen,
            contributing,
            skipped,
            graph.vertex_count(),
            graph.edge_count()
        );

        Ok(graph)
    }
}

/// Build an undirected co-authorship graph with default settings
pub fn build_graph<I>(
    records: I,
    target1: Option<&str>,
    target2: Option<&str>,
) -> GraphResult<GraphStore>
where
    I: IntoIterator,
    I::Item: AuthorList,
{
    GraphBuilder::default().build(records, target1, target2)
}

//! Scholar Graph CLI — command-line interface for co-authorship networks
//!
//! Loads scraped publication records from a JSON file, builds the graph in
//! memory and runs one query against it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use scholar_graph::{
    BuildConfig, GraphBuilder, GraphError, GraphMode, GraphResult, GraphStore, PathAlgorithm,
    Publication,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scholar-graph", version, about = "Co-authorship network queries")]
struct Cli {
    /// JSON file holding an array of publication records
    #[arg(long, short, default_value = "data/scraped.json", global = true, env = "SCHOLAR_GRAPH_INPUT")]
    input: PathBuf,

    /// Only build from publications co-authored by this author
    #[arg(long, global = true)]
    target1: Option<String>,

    /// A second author to scope the build to
    #[arg(long, global = true)]
    target2: Option<String>,

    /// Build a directed graph instead of an undirected one
    #[arg(long, global = true)]
    directed: bool,

    /// Merge name variants as "first initial + last name"
    #[arg(long, global = true)]
    normalize_names: bool,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Show graph size and degree summary
    Stats,
    /// Rank co-author pairs by number of shared publications
    Rank {
        /// Restrict the ranking to one author's connections
        #[arg(long)]
        vertex: Option<String>,

        /// Maximum number of pairs to show
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Find a chain of co-authors between two people
    Path {
        start: String,
        end: String,

        /// bfs (shortest) or dfs
        #[arg(long, default_value = "bfs")]
        algorithm: PathAlgorithm,
    },
    /// List the connections within a number of hops of an author
    Ego {
        root: String,

        #[arg(long, default_value_t = 1)]
        depth: usize,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let records = load_publications(&cli.input)?;

    let config = BuildConfig {
        mode: if cli.directed { GraphMode::Directed } else { GraphMode::Undirected },
        normalize_names: cli.normalize_names,
    };
    let graph = GraphBuilder::new(config).build(
        &records,
        cli.target1.as_deref(),
        cli.target2.as_deref(),
    )?;

    match &cli.command {
        Commands::Stats => run_stats(&graph, &cli.format),
        Commands::Rank { vertex, limit } => run_rank(&graph, vertex.as_deref(), *limit, &cli.format),
        Commands::Path { start, end, algorithm } => run_path(&graph, start, end, *algorithm, &cli.format),
        Commands::Ego { root, depth } => run_ego(&graph, root, *depth, &cli.format),
    }
}

/// Read a JSON array of publication records. A leading byte-order mark is tolerated.
fn load_publications(path: &Path) -> Result<Vec<Publication>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let records: Vec<Publication> = serde_json::from_str(text)
        .with_context(|| format!("{} is not a JSON array of publications", path.display()))?;

    info!("Loaded {} publications from {}", records.len(), path.display());
    Ok(records)
}

/// Unknown author names are user input errors: report them and show an empty result.
fn or_empty<T: Default>(result: GraphResult<T>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(GraphError::NodeNotFound(name)) => {
            warn!("Author not in graph: {}", name);
            eprintln!("No author named \"{}\" in this network", name);
            Ok(T::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn run_stats(graph: &GraphStore, format: &OutputFormat) -> Result<()> {
    let stats = graph.statistics();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        _ => {
            let mode = if graph.is_directed() { "directed" } else { "undirected" };
            let rows = vec![
                vec!["mode".to_string(), mode.to_string()],
                vec!["vertices".to_string(), stats.vertex_count.to_string()],
                vec!["edges".to_string(), stats.edge_count.to_string()],
                vec!["max degree".to_string(), stats.max_degree.to_string()],
                vec!["mean degree".to_string(), format!("{:.2}", stats.mean_degree)],
            ];
            print_rows(format, &["metric", "value"], &rows);
        }
    }
    Ok(())
}

fn run_rank(
    graph: &GraphStore,
    vertex: Option<&str>,
    limit: Option<usize>,
    format: &OutputFormat,
) -> Result<()> {
    let ranked = or_empty(graph.edge_rank(vertex, limit))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
        _ => {
            let rows: Vec<Vec<String>> = ranked
                .iter()
                .map(|r| vec![r.pair.0.clone(), r.pair.1.clone(), r.count.to_string()])
                .collect();
            print_rows(format, &["author", "co-author", "count"], &rows);
        }
    }
    Ok(())
}

fn run_path(
    graph: &GraphStore,
    start: &str,
    end: &str,
    algorithm: PathAlgorithm,
    format: &OutputFormat,
) -> Result<()> {
    let path = or_empty(scholar_graph::search_path(graph, start, end, algorithm))?;

    match format {
        OutputFormat::Json => {
            let body = json!({ "algorithm": algorithm, "start": start, "end": end, "path": path });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        _ => match path {
            Some(path) => {
                let rows: Vec<Vec<String>> = path
                    .iter()
                    .enumerate()
                    .map(|(hop, name)| vec![hop.to_string(), name.clone()])
                    .collect();
                print_rows(format, &["hop", "author"], &rows);
            }
            None => println!("(no path from {} to {})", start, end),
        },
    }
    Ok(())
}

fn run_ego(graph: &GraphStore, root: &str, depth: usize, format: &OutputFormat) -> Result<()> {
    let connections = graph.ego_network(root, depth);
    info!("Ego network of {} at depth {}: {} connections", root, depth, connections.len());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&connections)?),
        _ => {
            let rows: Vec<Vec<String>> = connections
                .iter()
                .map(|(a, b)| vec![a.clone(), b.clone()])
                .collect();
            print_rows(format, &["from", "to"], &rows);
        }
    }
    Ok(())
}

fn print_rows(format: &OutputFormat, headers: &[&str], rows: &[Vec<String>]) {
    match format {
        OutputFormat::Csv => {
            println!("{}", headers.join(","));
            for row in rows {
                let cells: Vec<String> = row.iter().map(|v| format_csv_value(v)).collect();
                println!("{}", cells.join(","));
            }
        }
        _ => {
            if rows.is_empty() {
                println!("(no results)");
                return;
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(headers);

            for row in rows {
                table.add_row(row);
            }

            println!("{}", table);
            println!("{} row(s)", rows.len());
        }
    }
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_publications_with_bom() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\u{feff}[{{\"authors\": \"Alice, Bob\", \"journal_title\": \"Cell\"}}, {{}}]").unwrap();

        let records = load_publications(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].authors.as_deref(), Some("Alice, Bob"));
        assert_eq!(records[1].authors, None);
    }

    #[test]
    fn test_load_publications_rejects_non_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"authors\": \"Alice\"}}").unwrap();
        assert!(load_publications(file.path()).is_err());
        assert!(load_publications(Path::new("/definitely/not/here.json")).is_err());
    }

    #[test]
    fn test_unknown_author_is_empty_result() {
        let graph = GraphStore::undirected();
        let ranked = or_empty(graph.edge_rank(Some("Nobody"), None)).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_format_csv_value() {
        assert_eq!(format_csv_value("Smith, A"), "\"Smith, A\"");
        assert_eq!(format_csv_value("plain"), "plain");
        assert_eq!(format_csv_value("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "scholar-graph", "--input", "pubs.json", "path", "Alice", "Bob", "--algorithm", "dfs",
        ])
        .unwrap();
        match cli.command {
            Commands::Path { algorithm, .. } => assert_eq!(algorithm, PathAlgorithm::DepthFirst),
            _ => panic!("expected path command"),
        }
    }
}

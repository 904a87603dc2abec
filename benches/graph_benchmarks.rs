use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use scholar_graph::algo::filter_connections;
use scholar_graph::{build_graph, search_path, GraphStore, PathAlgorithm, Publication};

/// Synthetic corpus: each paper has 4 authors drawn from a sliding window,
/// so neighbouring papers share authors and the graph stays connected.
fn corpus(papers: usize) -> Vec<Publication> {
    (0..papers)
        .map(|i| {
            let authors: Vec<String> = (0..4)
                .map(|k| format!("Author{}", (i + k * 3) % (papers / 2 + 4)))
                .collect();
            Publication::new(authors.join(", "))
        })
        .collect()
}

fn built(papers: usize) -> GraphStore {
    build_graph(&corpus(papers), None, None).unwrap()
}

/// Benchmark graph construction throughput
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 1000, 10_000].iter() {
        let records = corpus(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let graph = build_graph(&records, None, None).unwrap();
                criterion::black_box(graph.edge_count());
            });
        });
    }
    group.finish();
}

/// Benchmark path search on a built graph
fn bench_path_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_search");
    let graph = built(30);

    group.bench_function("bfs", |b| {
        b.iter(|| {
            let path = search_path(&graph, "Author0", "Author9", PathAlgorithm::BreadthFirst).unwrap();
            criterion::black_box(path);
        });
    });

    group.bench_function("dfs", |b| {
        b.iter(|| {
            let path = search_path(&graph, "Author0", "Author9", PathAlgorithm::DepthFirst).unwrap();
            criterion::black_box(path);
        });
    });
    group.finish();
}

/// Benchmark edge ranking and ego network extraction
fn bench_analytics(c: &mut Criterion) {
    let mut group = c.benchmark_group("analytics");
    let graph = built(1000);
    let pairs = graph.node_pairs();

    group.bench_function("edge_rank_top_10", |b| {
        b.iter(|| {
            let ranked = graph.edge_rank(None, Some(10)).unwrap();
            criterion::black_box(ranked);
        });
    });

    for depth in [1, 2, 3].iter() {
        group.bench_with_input(BenchmarkId::new("ego_network", depth), depth, |b, &depth| {
            b.iter(|| {
                let ego = filter_connections("Author0", &pairs, depth);
                criterion::black_box(ego.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_path_search, bench_analytics);
criterion_main!(benches);

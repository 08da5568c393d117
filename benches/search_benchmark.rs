use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use fuzzdex::core::types::{DocId, ForwardIndex};
use fuzzdex::index::inverted::InvertedIndex;
use fuzzdex::search::executor::search;
use fuzzdex::search::select::select_search_tokens;
use rand::Rng;

/// Helper to build a forward index of random token lists
fn random_forward_index(doc_count: u64, tokens_per_doc: usize) -> ForwardIndex {
    let mut rng = rand::thread_rng();
    let pool = [
        "red", "blue", "green", "car", "boat", "bicycle", "fast", "slow",
        "city", "cities", "road", "river", "engine", "wheel", "sail", "gear",
    ];

    (0..doc_count)
        .map(|id| {
            let tokens = (0..tokens_per_doc)
                .map(|_| pool[rng.gen_range(0..pool.len())].to_string())
                .collect();
            (DocId(id), tokens)
        })
        .collect()
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for doc_count in [100, 1_000, 10_000] {
        let forward = random_forward_index(doc_count, 8);

        group.bench_with_input(
            BenchmarkId::from_parameter(doc_count),
            &forward,
            |b, forward| {
                b.iter(|| InvertedIndex::build(black_box(forward)));
            },
        );
    }

    group.finish();
}

fn bench_exact_search(c: &mut Criterion) {
    let index = InvertedIndex::build(&random_forward_index(10_000, 8));
    let tokens: Vec<String> = ["red", "car", "fast"]
        .iter()
        .map(|t| t.to_string())
        .collect();

    c.bench_function("exact_search_10k_docs", |b| {
        b.iter(|| search(black_box(&index), black_box(&tokens), &[]));
    });
}

fn bench_fuzzy_selection(c: &mut Criterion) {
    let index = InvertedIndex::build(&random_forward_index(10_000, 8));
    let query: Vec<String> = ["kar", "bot", "citys"]
        .iter()
        .map(|t| t.to_string())
        .collect();

    c.bench_function("fuzzy_select_10k_docs", |b| {
        b.iter(|| {
            select_search_tokens(black_box(&query), black_box(&index), 60.0).unwrap()
        });
    });
}

fn bench_fuzzy_end_to_end(c: &mut Criterion) {
    let index = InvertedIndex::build(&random_forward_index(10_000, 8));
    let query: Vec<String> = vec!["kar".to_string()];

    c.bench_function("fuzzy_search_10k_docs", |b| {
        b.iter(|| {
            let selected =
                select_search_tokens(black_box(&query), &index, 60.0).unwrap();
            search(&index, &selected, &[])
        });
    });
}

criterion_group!(
    benches,
    bench_index_build,
    bench_exact_search,
    bench_fuzzy_selection,
    bench_fuzzy_end_to_end
);
criterion_main!(benches);

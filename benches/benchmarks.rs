use std::collections::HashMap;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use suggestrank::{
    AisleColorMap, AisleRef, ExistingItemRef, MatchTier, UsageHistoryEntry, classify_history,
    highlight_segments, is_subsequence, normalize_text, rank_suggestions,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const AISLES: &[&str] = &[
    "Produce", "Dairy", "Bakery", "Meat", "Frozen", "Pantry", "Beverages", "Snacks",
];

/// Generate `n` history rows with names that mix exact, partial, fuzzy, and
/// non-matching shapes for the query "milk", plus diacritics on every
/// fourth entry.
fn generate_history(n: usize) -> Vec<UsageHistoryEntry> {
    (0..n)
        .map(|i| {
            let name = match i % 4 {
                0 => format!("Milk {i}"),
                1 => format!("M\u{00ED}lkshake {i}"),
                2 => format!("Mineral Block {i}"),
                _ => format!("Bread {i}"),
            };
            UsageHistoryEntry {
                item_name: name,
                purchase_count: (i % 37) as u32,
                last_aisle: Some(AISLES[i % AISLES.len()].to_owned()),
                usage_key: None,
            }
        })
        .collect()
}

fn generate_existing(n: usize) -> Vec<ExistingItemRef> {
    (0..n)
        .map(|i| ExistingItemRef {
            name: format!("Milk {i}"),
            aisle: Some(AisleRef::Name(AISLES[i % AISLES.len()].to_owned())),
        })
        .collect()
}

fn color_map() -> AisleColorMap {
    let mut map = HashMap::new();
    for (i, aisle) in AISLES.iter().enumerate() {
        map.insert((*aisle).to_owned(), format!("#3366{:02x}", 80 + i * 16));
    }
    map
}

fn identity(aisle: &str) -> String {
    aisle.to_owned()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_text/ascii", |b| {
        b.iter(|| normalize_text(black_box("Dulce de Leche")));
    });
    c.bench_function("normalize_text/accented", |b| {
        b.iter(|| normalize_text(black_box("Caf\u{00E9} con az\u{00FA}car")));
    });
}

fn bench_subsequence(c: &mut Criterion) {
    c.bench_function("is_subsequence/hit", |b| {
        b.iter(|| is_subsequence(black_box("mzn"), black_box("manzana")));
    });
    c.bench_function("is_subsequence/miss", |b| {
        b.iter(|| is_subsequence(black_box("leche"), black_box("lechuga")));
    });
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_history");
    for size in [50, 200, 1000] {
        let history = generate_history(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &history, |b, history| {
            b.iter(|| classify_history(black_box("milk"), black_box(history)));
        });
    }
    group.finish();
}

fn bench_highlight(c: &mut Criterion) {
    c.bench_function("highlight_segments/partial_accented", |b| {
        b.iter(|| {
            highlight_segments(
                black_box("Caf\u{00E9} con leche"),
                black_box("cafe"),
                MatchTier::Partial,
            )
        });
    });
    c.bench_function("highlight_segments/fuzzy", |b| {
        b.iter(|| highlight_segments(black_box("Manzana"), black_box("mzn"), MatchTier::Fuzzy));
    });
}

fn bench_rank_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_suggestions");
    let colors = color_map();
    let existing = generate_existing(30);
    for size in [50, 200, 1000] {
        let history = generate_history(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &history, |b, history| {
            b.iter(|| {
                rank_suggestions(
                    black_box("milk"),
                    black_box(history),
                    black_box(&existing),
                    black_box(&colors),
                    &identity,
                )
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_subsequence,
    bench_classify,
    bench_highlight,
    bench_rank_pipeline
);
criterion_main!(benches);

//! Performance benchmarks for the inventory store.

use artflow::{ArtworkInput, ArtworkStatus, FileBlobStore, InventoryStore, MemoryBlobStore};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tempfile::TempDir;

fn populate<B: artflow::BlobStore>(store: &InventoryStore<B>, count: usize) {
    for i in 0..count {
        let status = ArtworkStatus::ALL[i % 3];
        store.add(
            ArtworkInput::new(format!("Opera {}", i), format!("Artista {}", i % 50), 1900 + (i % 120) as i32)
                .with_price((i * 1000) as f64)
                .with_status(status),
        );
    }
}

/// Benchmark search with varying collection sizes
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("records", size), &size, |b, &size| {
            let store = InventoryStore::new(MemoryBlobStore::new());
            populate(&store, size);

            b.iter(|| {
                black_box(store.search("artista 7"));
            });
        });
    }

    group.finish();
}

/// Benchmark add, which rewrites the whole collection each time
fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for size in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("memory", size), &size, |b, &size| {
            let store = InventoryStore::new(MemoryBlobStore::new());
            populate(&store, size);

            b.iter(|| {
                let artwork = store.add(ArtworkInput::new("Bench", "Bench", 2000));
                store.remove(&artwork.id);
            });
        });

        group.bench_with_input(BenchmarkId::new("file", size), &size, |b, &size| {
            let dir = TempDir::new().unwrap();
            let store = InventoryStore::new(FileBlobStore::new(dir.path(), 4).unwrap());
            populate(&store, size);

            b.iter(|| {
                let artwork = store.add(ArtworkInput::new("Bench", "Bench", 2000));
                store.remove(&artwork.id);
            });
        });
    }

    group.finish();
}

fn bench_stats(c: &mut Criterion) {
    let store = InventoryStore::new(MemoryBlobStore::new());
    populate(&store, 1000);

    c.bench_function("stats_1000", |b| {
        b.iter(|| black_box(store.stats()));
    });
}

criterion_group!(benches, bench_search, bench_add, bench_stats);
criterion_main!(benches);

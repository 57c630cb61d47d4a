// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for manifest population and the background load pass.
//!
//! Measures the performance of:
//! - Scheduling the lazy load pass over a large manifest
//! - Accepting a manifest into a viewer host (both surfaces populated)

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iiif_viewer::config::SearchConfig;
use iiif_viewer::engine::RenderEngine;
use iiif_viewer::ids::IdGenerator;
use iiif_viewer::net::HttpClient;
use iiif_viewer::task::Lifetime;
use iiif_viewer::test_utils::FakeEngine;
use iiif_viewer::ui::viewer::{lazy_load, Message, ViewerHost};
use std::hint::black_box;

const PAGE_COUNTS: [usize; 3] = [50, 500, 2000];

/// Benchmark one lazy load pass.
///
/// Every asset is pending, so each index is requested and gets a waiter.
fn bench_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("lazy_load");

    for pages in PAGE_COUNTS {
        group.bench_with_input(BenchmarkId::new("schedule", pages), &pages, |b, &pages| {
            b.iter_batched(
                || {
                    let mut engine = FakeEngine::new(pages);
                    assert!(engine.set_manifest("{}"));
                    engine
                },
                |mut engine| {
                    let lifetime = Lifetime::new();
                    black_box(lazy_load::schedule(&mut engine, &lifetime));
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark manifest acceptance: surfaces populated and the first show attempted.
fn bench_accept_manifest(c: &mut Criterion) {
    let mut group = c.benchmark_group("lazy_load");
    let http = HttpClient::new(&SearchConfig::default()).unwrap();

    for pages in PAGE_COUNTS {
        group.bench_with_input(BenchmarkId::new("accept_manifest", pages), &pages, |b, &pages| {
            b.iter_batched(
                || {
                    let id = IdGenerator::new().next_id();
                    ViewerHost::new(id, None, FakeEngine::new(pages).boxed(), http.clone())
                },
                |mut host| {
                    black_box(host.update(Message::ManifestFetched(Ok("{}".into()))));
                    host
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_schedule, bench_accept_manifest);
criterion_main!(benches);

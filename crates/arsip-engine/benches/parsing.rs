use arsip_engine::{manifest, parsing::paired::parse_paired, parse_document};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_line_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_line_prefix_article(100);
    group.bench_function("line_prefix_document", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&content));
            std::hint::black_box(doc);
        });
    });

    let content = common::generate_paired_article(100);
    group.bench_function("paired_document", |b| {
        b.iter(|| {
            let doc = parse_paired(std::hint::black_box(&content));
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

fn bench_manifest(c: &mut Criterion) {
    let mut group = c.benchmark_group("manifest");
    group.sample_size(10);

    let blob = common::generate_manifest(1_000);
    group.bench_function("delimited_1000", |b| {
        b.iter(|| {
            let records = manifest::parse(std::hint::black_box(&blob));
            std::hint::black_box(records);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_line_prefix, bench_manifest);
criterion_main!(benches);

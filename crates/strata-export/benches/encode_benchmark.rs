//! Encoder benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strata_core::FoundationBundle;
use strata_export::{encode, encode_all, EncodeOptions, Format};

const STARTER: &str = include_str!("../tests/fixtures/starter.json");

fn encode_defaults(c: &mut Criterion) {
    let bundle = FoundationBundle::defaults();
    let options = EncodeOptions::default();
    c.bench_function("encode_all_defaults", |b| {
        b.iter(|| encode_all(black_box(&bundle), &options))
    });
    c.bench_function("encode_tailwind_defaults", |b| {
        b.iter(|| encode(black_box(&bundle), Format::Tailwind, &options))
    });
}

fn encode_starter(c: &mut Criterion) {
    c.bench_function("parse_and_encode_css", |b| {
        b.iter(|| {
            FoundationBundle::from_json(black_box(STARTER))
                .map(|bundle| encode(&bundle, Format::Css, &EncodeOptions::default()))
        })
    });
}

criterion_group!(benches, encode_defaults, encode_starter);
criterion_main!(benches);

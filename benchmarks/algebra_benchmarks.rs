#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Benchmarks for the core query algebra: parse, serialize, merge, pick.
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use parq::{ParamMap, QueryCodec};

const FRAGMENT: &str = "page=12&search=query+string&sort=date&dir=desc&tags=a&tags=b&tags=c";

fn target_map() -> ParamMap {
    QueryCodec::new().parse(FRAGMENT).params
}

fn bench_parse(c: &mut Criterion) {
    let codec = QueryCodec::new();
    c.bench_function("parse", |b| {
        b.iter(|| codec.parse(black_box(FRAGMENT)));
    });
}

fn bench_serialize(c: &mut Criterion) {
    let codec = QueryCodec::new();
    let params = target_map();
    c.bench_function("serialize", |b| {
        b.iter(|| codec.serialize(black_box(&params), false));
    });
}

fn bench_merge(c: &mut Criterion) {
    let codec = QueryCodec::new();
    let params = target_map();
    c.bench_function("merge", |b| {
        b.iter(|| codec.merge(black_box(Some(&params)), black_box("page=13&search="), false));
    });
}

fn bench_pick(c: &mut Criterion) {
    let codec = QueryCodec::new();
    let params = target_map();
    c.bench_function("pick", |b| {
        b.iter(|| codec.pick(black_box(Some(&params)), black_box("page=&sort=&mode=list")));
    });
}

criterion_group!(benches, bench_parse, bench_serialize, bench_merge, bench_pick);
criterion_main!(benches);

//! Benchmarks for line search.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fv::document::Document;
use fv::search;

fn sample_document(lines: usize) -> Document {
    (0..lines)
        .map(|i| {
            if i % 97 == 0 {
                format!("{i:>6} ERROR connection reset by peer")
            } else {
                format!("{i:>6} INFO request served in {}ms", i % 13)
            }
        })
        .collect()
}

fn bench_find_next(c: &mut Criterion) {
    let doc = sample_document(100_000);
    c.bench_function("find_next_matching_line", |b| {
        b.iter(|| search::find_next_matching_line(doc.lines(), black_box(1), "ERROR"));
    });
}

fn bench_locate_wrap(c: &mut Criterion) {
    let doc = sample_document(100_000);
    let last = doc.last_index().unwrap_or(0);
    c.bench_function("locate_next_match_wrap", |b| {
        b.iter(|| search::locate_next_match(doc.lines(), black_box(last), "ERROR"));
    });
}

fn bench_no_match(c: &mut Criterion) {
    let doc = sample_document(100_000);
    c.bench_function("find_next_matching_line_miss", |b| {
        b.iter(|| search::find_next_matching_line(doc.lines(), 0, black_box("PANIC")));
    });
}

criterion_group!(benches, bench_find_next, bench_locate_wrap, bench_no_match);
criterion_main!(benches);

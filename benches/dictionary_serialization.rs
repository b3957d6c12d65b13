//! Dictionary serialization benchmarks
//!
//! Measures size computation against writing into a pre-sized buffer.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pdfdom::prelude::*;
use std::hint::black_box;
use std::sync::Arc;

/// A page-like dictionary with `entries` extra keys mixing every value kind.
fn page_dictionary(entries: usize) -> PdfDictionary {
    let shared = Arc::new(PdfIndirectObject::new((10, 0), PdfObject::Null));
    let mut dict = PdfDictionary::new();
    dict.set_unchecked("Type", PdfObject::name("Page"))
        .set_unchecked("MediaBox", [0, 0, 612, 792].into_iter().collect::<PdfArray>());
    for i in 0..entries {
        let value = match i % 4 {
            0 => PdfObject::from(i as i64),
            1 => PdfObject::literal(format!("entry ({})", i)),
            2 => PdfObject::Indirect(Arc::clone(&shared)),
            _ => PdfObject::name(format!("Name{}", i)),
        };
        dict.set_unchecked(format!("Key{}", i), value);
    }
    dict
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("dictionary");
    for entries in [8, 64, 512] {
        let dict = page_dictionary(entries);
        let mut buf = vec![0u8; dict.byte_len()];

        group.bench_with_input(BenchmarkId::new("byte_len", entries), &dict, |b, dict| {
            b.iter(|| black_box(dict.byte_len()))
        });
        group.bench_with_input(BenchmarkId::new("write_bytes", entries), &dict, |b, dict| {
            b.iter(|| {
                let rest = dict.write_bytes(black_box(&mut buf)).map(|r| r.len());
                black_box(rest)
            })
        });
        group.bench_with_input(BenchmarkId::new("to_string", entries), &dict, |b, dict| {
            b.iter(|| black_box(dict.to_string()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_serialization);
criterion_main!(benches);

//! Criterion micro-benchmarks for layout mapping offset computation.

use criterion::{criterion_group, criterion_main, Criterion};
use mdspan::{
    ColumnMajorMapping, DExtents, Extents, Mapping, RowMajorMapping, StridedMapping,
};
use mdspan_bench::{lcg_indices, CUBE};
use std::hint::black_box;

type Cube = Extents![64, 64, 64];

/// Benchmark: row-major offsets for 10K random indices, static extents.
fn bench_row_major_static(c: &mut Criterion) {
    let mapping = RowMajorMapping::new(Cube::default());
    let indices = lcg_indices(10_000, &CUBE, 7);

    c.bench_function("row_major_static_10k", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for index in &indices {
                acc = acc.wrapping_add(mapping.offset(index));
            }
            black_box(acc)
        });
    });
}

/// Benchmark: row-major offsets for 10K random indices, dynamic extents.
fn bench_row_major_dynamic(c: &mut Criterion) {
    let mapping = RowMajorMapping::new(DExtents::<3>::from_array(CUBE));
    let indices = lcg_indices(10_000, &CUBE, 7);

    c.bench_function("row_major_dynamic_10k", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for index in &indices {
                acc = acc.wrapping_add(mapping.offset(index));
            }
            black_box(acc)
        });
    });
}

/// Benchmark: column-major offsets for 10K random indices.
fn bench_column_major(c: &mut Criterion) {
    let mapping = ColumnMajorMapping::new(DExtents::<3>::from_array(CUBE));
    let indices = lcg_indices(10_000, &CUBE, 7);

    c.bench_function("column_major_10k", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for index in &indices {
                acc = acc.wrapping_add(mapping.offset(index));
            }
            black_box(acc)
        });
    });
}

/// Benchmark: strided offsets with padded strides for 10K random indices.
fn bench_strided(c: &mut Criterion) {
    let mapping = StridedMapping::new(DExtents::<3>::from_array(CUBE), [72 * 72, 72, 1]);
    let indices = lcg_indices(10_000, &CUBE, 7);

    c.bench_function("strided_10k", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for index in &indices {
                acc = acc.wrapping_add(mapping.offset(index));
            }
            black_box(acc)
        });
    });
}

criterion_group!(
    benches,
    bench_row_major_static,
    bench_row_major_dynamic,
    bench_column_major,
    bench_strided
);
criterion_main!(benches);

//! Benchmarks for generation stepping.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rhizome_petri_grid::LifeGrid;

fn seeded(cols: usize, rows: usize) -> LifeGrid {
    let mut grid = LifeGrid::new(cols, rows).expect("bench grid");
    grid.randomize(12345, 0.3);
    grid
}

fn bench_step(c: &mut Criterion) {
    let mut grid = seeded(256, 256);
    c.bench_function("step_256", |b| b.iter(|| black_box(&mut grid).step()));

    let mut grid = seeded(1024, 1024);
    c.bench_function("step_1024", |b| b.iter(|| black_box(&mut grid).step()));
}

#[cfg(feature = "parallel")]
fn bench_step_parallel(c: &mut Criterion) {
    use rhizome_petri_grid::Parallel;

    let mut grid = seeded(1024, 1024);
    c.bench_function("step_parallel_1024", |b| {
        b.iter(|| black_box(&mut grid).step_with(&Parallel))
    });
}

#[cfg(not(feature = "parallel"))]
fn bench_step_parallel(_: &mut Criterion) {}

fn bench_export(c: &mut Criterion) {
    let grid = seeded(1024, 1024);
    let mut buffer = vec![0.0f32; grid.len() * 3];
    c.bench_function("export_opacity_1024", |b| {
        b.iter(|| grid.export_opacity_buffer(black_box(&mut buffer), 0.05))
    });
}

criterion_group!(benches, bench_step, bench_step_parallel, bench_export);
criterion_main!(benches);

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use lifegrid::{Coord, LifeGrid};

fn make_grid(size: usize) -> LifeGrid {
    let mut grid = LifeGrid::dead(size, size);
    for r in 0..size as i32 {
        for c in 0..size as i32 {
            if (r + c) % 3 == 0 {
                grid.set_cell(Coord::new(r, c), true).expect("in bounds");
            }
        }
    }
    grid
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for size in [64, 128, 256] {
        let grid = make_grid(size);

        group.bench_with_input(BenchmarkId::new("serial", size), &grid, |b, grid| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| grid.step(),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &grid, |b, grid| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| grid.step_parallel(),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);

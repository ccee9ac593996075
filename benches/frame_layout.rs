use cake::core::{draw_frame, DrawList, FrameClock, Grid};
use cake::ViewportConfig;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark: derive every cell of one frame
fn bench_grid_cells(c: &mut Criterion) {
    let config = ViewportConfig::default();

    c.bench_function("grid_cells_1024", |b| {
        b.iter(|| {
            let clock = FrameClock::from_ticks(black_box(170_000_000_000));
            Grid::new(&config, clock).fold(0.0f32, |acc, cell| acc + cell.w)
        })
    });
}

/// Benchmark: record a full frame into a reused draw list
fn bench_draw_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_frame");

    for width in [256u32, 1024, 4096] {
        let config = ViewportConfig::new(width, width * 3 / 4);
        let mut list = DrawList::new();

        group.bench_with_input(BenchmarkId::from_parameter(width), &config, |b, config| {
            b.iter(|| {
                list.reset();
                draw_frame(&mut list, config, FrameClock::from_ticks(black_box(12_345)));
                list.quad_count()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_grid_cells, bench_draw_frame);
criterion_main!(benches);

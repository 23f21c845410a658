//! Benchmarks for the grid trail hot paths: pointer-path interpolation and
//! the fade/prune tick.
//!
//! Run with: cargo bench -p glint-fx --bench trail_bench

use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};

use glint_core::event::{PointerEvent, Viewport};
use glint_core::surface::SurfaceMap;
use glint_fx::grid_trail::{GridTrail, GridTrailConfig};

fn overlay() -> GridTrail {
    let mut trail = GridTrail::new(GridTrailConfig::new(20.0, Duration::from_millis(900), 0.9));
    trail.resize(Viewport::new(1920.0, 1080.0).with_scroll_height(6000.0));
    trail
}

fn bench_pointer_sweep(c: &mut Criterion) {
    let surfaces = SurfaceMap::new();
    c.bench_function("pointer_sweep_1000px", |b| {
        b.iter(|| {
            let mut trail = overlay();
            let mut now = Duration::ZERO;
            for x in (0..1000).step_by(50) {
                trail.on_pointer(
                    black_box(PointerEvent::moved(x as f32, 500.0)),
                    &surfaces,
                    now,
                );
                now += Duration::from_millis(16);
            }
            trail.lit_count()
        });
    });
}

fn bench_fade_tick(c: &mut Criterion) {
    let surfaces = SurfaceMap::new();
    c.bench_function("fade_tick_500_cells", |b| {
        let mut base = overlay();
        let mut now = Duration::ZERO;
        // Zig-zag to accumulate a large lit set.
        for i in 0..250 {
            let x = (i % 90) as f32 * 20.0;
            let y = 100.0 + (i / 90) as f32 * 40.0;
            base.on_pointer(PointerEvent::moved(x, y), &surfaces, now);
            now += Duration::from_millis(1);
        }
        b.iter(|| {
            let mut trail = base.clone();
            black_box(trail.tick(now + Duration::from_millis(450)))
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let surfaces = SurfaceMap::new();
    let mut trail = overlay();
    let mut now = Duration::ZERO;
    for x in (0..1800).step_by(20) {
        trail.on_pointer(PointerEvent::moved(x as f32, 500.0), &surfaces, now);
        now += Duration::from_millis(2);
    }
    c.bench_function("render_90_cells", |b| {
        b.iter(|| black_box(trail.render(now + Duration::from_millis(300))).len());
    });
}

criterion_group!(benches, bench_pointer_sweep, bench_fade_tick, bench_render);
criterion_main!(benches);

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use understory_tile_drag::{GestureEvent, NoDelegate, StrategyKind, TileLayout};
use understory_tile_grid::{GridConfig, GridSpan, Tile, TileKey};

const COLUMNS: usize = 6;
const CELL: f64 = 100.0;

fn gen_layout(count: usize, strategy: StrategyKind) -> TileLayout<u32> {
    let config = GridConfig::new(CELL, CELL, 24.0, COLUMNS).unwrap();
    let mut layout = TileLayout::new(config, strategy, NoDelegate);
    let tiles = (0..count as u32)
        .map(|i| {
            let span = if i % 7 == 3 {
                GridSpan::new(1, 2)
            } else {
                GridSpan::UNIT
            };
            Tile::new(TileKey(i), i, span)
        })
        .collect();
    layout.set_tiles(tiles).unwrap();
    layout
}

/// Drag the first tile right along the top row and down one row, then release.
fn sweep(layout: &mut TileLayout<u32>, steps: usize) {
    let key = TileKey(0);
    let grab = Point::new(CELL / 2.0, CELL / 2.0);
    layout.handle_gesture(&GestureEvent::start(key, grab));
    let mut movement = Vec2::ZERO;
    for i in 0..steps {
        movement = if i % 2 == 0 {
            Vec2::new(movement.x + 45.0, movement.y)
        } else {
            Vec2::new(movement.x, movement.y + 20.0)
        };
        black_box(layout.handle_gesture(&GestureEvent::moved(key, grab, movement)));
        black_box(layout.render_tiles());
    }
    black_box(layout.handle_gesture(&GestureEvent::end(key, grab, movement)));
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture");
    for strategy in [StrategyKind::Displacement, StrategyKind::Insertion] {
        for &n in &[24usize, 96] {
            group.bench_function(format!("{}_sweep_n{}", strategy, n), |b| {
                b.iter_batched(
                    || gen_layout(n, strategy),
                    |mut layout| sweep(&mut layout, 12),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let mut layout = gen_layout(96, StrategyKind::Displacement);
    group.bench_function("idle_n96", |b| b.iter(|| black_box(layout.render_tiles())));
    group.finish();
}

criterion_group!(benches, bench_gesture, bench_render);
criterion_main!(benches);

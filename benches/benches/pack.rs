// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_tile_drag::PackCache;
use understory_tile_grid::{
    GridSpan, Tile, TileKey, intercept_tiles, table_to_tiles_list, tiles_list_to_table,
};

const COLUMNS: usize = 8;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

fn gen_unit_tiles(count: usize) -> Vec<Tile<u32>> {
    (0..count as u32)
        .map(|i| Tile::new(TileKey(i), i, GridSpan::UNIT))
        .collect()
}

/// Mostly small tiles with the odd wide or tall one, like a dashboard.
fn gen_mixed_tiles(count: usize) -> Vec<Tile<u32>> {
    let mut rng = Rng::new(0x7115_B0A2_D5EE_D001);
    (0..count as u32)
        .map(|i| {
            let span = match rng.below(10) {
                0..=5 => GridSpan::UNIT,
                6 | 7 => GridSpan::new(1, 2),
                8 => GridSpan::new(2, 1),
                _ => GridSpan::new(2, 1 + rng.below(3)),
            };
            Tile::new(TileKey(i), i, span)
        })
        .collect()
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    for &n in &[64usize, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        let unit = gen_unit_tiles(n);
        group.bench_function(format!("unit_n{}", n), |b| {
            b.iter(|| black_box(tiles_list_to_table(&unit, COLUMNS)))
        });
        let mixed = gen_mixed_tiles(n);
        group.bench_function(format!("mixed_n{}", n), |b| {
            b.iter(|| black_box(tiles_list_to_table(&mixed, COLUMNS)))
        });
    }
    group.finish();
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");
    for &n in &[64usize, 256, 1024] {
        let table = tiles_list_to_table(&gen_mixed_tiles(n), COLUMNS);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("reading_order_n{}", n), |b| {
            b.iter(|| black_box(table_to_tiles_list(&table)))
        });
        group.bench_function(format!("intercept_3x3_n{}", n), |b| {
            b.iter(|| black_box(intercept_tiles(&table, 2, 2, 3, 3)))
        });
    }
    group.finish();
}

fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_cache");
    let tiles = gen_mixed_tiles(256);
    group.bench_function("hit_n256", |b| {
        let mut cache = PackCache::new();
        let _ = cache.get(&tiles, COLUMNS);
        b.iter(|| black_box(cache.get(&tiles, COLUMNS).tiles.len()))
    });
    group.bench_function("miss_n256", |b| {
        let mut cache = PackCache::new();
        b.iter(|| {
            cache.invalidate();
            black_box(cache.get(&tiles, COLUMNS).tiles.len())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_pack, bench_flatten, bench_cache);
criterion_main!(benches);

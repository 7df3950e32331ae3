// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Displacement drag.
//!
//! Drag the first tile across its row with the `"move"` strategy. Each move
//! into another tile's edge band pushes that tile aside; the new order is
//! committed on release.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_tile_demos --example drag_displace`

use kurbo::{Point, Vec2};
use understory_tile_drag::{GestureEvent, LayoutConfig, TileDelegate, TileLayout};
use understory_tile_grid::{GridSpan, Tile, TileKeys};

#[derive(Debug, Default)]
struct Printer;

impl TileDelegate<&'static str> for Printer {
    fn on_reorder_tiles(&mut self, tiles: &[Tile<&'static str>]) {
        let order: Vec<_> = tiles.iter().map(|t| t.data).collect();
        println!("reordered: {order:?}");
    }
}

fn print_row(layout: &mut TileLayout<&'static str, Printer>) {
    let shown: Vec<_> = layout
        .render_tiles()
        .into_iter()
        .map(|t| format!("{}@{}", t.data, t.col))
        .collect();
    println!("  {}", shown.join(" "));
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = LayoutConfig {
        strategy: "move".parse().unwrap(),
        ..LayoutConfig::default()
    };
    let mut layout = TileLayout::from_layout_config(&config, 400.0, Printer).unwrap();

    let mut keys = TileKeys::new();
    let tiles = keys
        .tiles_from(["a", "b", "c", "d"], |s| *s, |_| GridSpan::UNIT)
        .unwrap();
    layout.set_tiles(tiles).unwrap();
    print_row(&mut layout);

    let key = keys.get(&"a").unwrap();
    let grab = Point::new(50.0, 50.0);
    layout.handle_gesture(&GestureEvent::start(key, grab));
    for dx in [60.0, 140.0, 240.0, 340.0] {
        let outcome = layout.handle_gesture(&GestureEvent::moved(key, grab, Vec2::new(dx, 0.0)));
        println!("move {dx:>5}: {outcome:?}");
        print_row(&mut layout);
    }
    let outcome = layout.handle_gesture(&GestureEvent::end(key, grab, Vec2::new(340.0, 0.0)));
    println!("release: {outcome:?}");
    print_row(&mut layout);
}

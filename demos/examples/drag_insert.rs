// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion drag.
//!
//! With the `"reorder"` strategy the grid holds still during the drag. The
//! render flags show where the insertion marker would be drawn, and the
//! sequence is spliced on release.
//!
//! Run:
//! - `cargo run -p understory_tile_demos --example drag_insert`

use kurbo::{Point, Vec2};
use understory_tile_drag::{GestureEvent, NoDelegate, RenderFlags, StrategyKind, TileLayout};
use understory_tile_grid::{GridConfig, GridSpan, TileKeys};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GridConfig::new(120.0, 80.0, 30.0, 3).unwrap();
    let mut layout = TileLayout::new(config, StrategyKind::Insertion, NoDelegate);

    let mut keys = TileKeys::new();
    let tiles = keys
        .tiles_from(
            ["one", "two", "three", "four", "five"],
            |s| *s,
            |_| GridSpan::UNIT,
        )
        .unwrap();
    layout.set_tiles(tiles).unwrap();

    // Drag "five" (row 1, col 1) up into the right band of "two".
    let key = keys.get(&"five").unwrap();
    let grab = Point::new(180.0, 120.0);
    let movement = Vec2::new(50.0, -80.0);
    layout.handle_gesture(&GestureEvent::start(key, grab));
    let outcome = layout.handle_gesture(&GestureEvent::moved(key, grab, movement));
    println!("move: {outcome:?}");

    for tile in layout.render_tiles() {
        let marker = if tile.flags.contains(RenderFlags::INSERT_AT_LEFT) {
            "| before"
        } else if tile.flags.contains(RenderFlags::INSERT_AT_RIGHT) {
            "after |"
        } else {
            ""
        };
        println!(
            "  {:<5} origin {:?} {:?} {marker}",
            tile.data, tile.origin, tile.flags
        );
    }

    let outcome = layout.handle_gesture(&GestureEvent::end(key, grab, movement));
    let order: Vec<_> = layout.tiles().iter().map(|t| t.data).collect();
    println!("release: {outcome:?} -> {order:?}");
}

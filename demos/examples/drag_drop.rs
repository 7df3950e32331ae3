// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropping one tile onto another.
//!
//! The delegate accepts drops of files onto folders and files the dropped
//! name under the folder. The layout removes the dropped tile by itself.
//!
//! Run:
//! - `cargo run -p understory_tile_demos --example drag_drop`

use std::collections::BTreeMap;

use kurbo::{Point, Vec2};
use understory_tile_drag::{GestureEvent, StrategyKind, TileDelegate, TileLayout};
use understory_tile_grid::{GridConfig, GridSpan, TileKeys};

#[derive(Copy, Clone, Debug, PartialEq)]
enum Item {
    File(&'static str),
    Folder(&'static str),
}

impl Item {
    fn name(&self) -> &'static str {
        match *self {
            Self::File(name) | Self::Folder(name) => name,
        }
    }
}

#[derive(Debug, Default)]
struct Desktop {
    folders: BTreeMap<&'static str, Vec<&'static str>>,
}

impl TileDelegate<Item> for Desktop {
    fn accepts_drop(&self, source: &Item, target: &Item) -> bool {
        matches!((source, target), (Item::File(_), Item::Folder(_)))
    }

    fn on_tile_drop(&mut self, source: &Item, target: &Item) {
        log::info!("{} -> {}", source.name(), target.name());
        self.folders
            .entry(target.name())
            .or_default()
            .push(source.name());
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let items = [
        Item::File("notes.txt"),
        Item::File("photo.png"),
        Item::Folder("docs"),
    ];
    let config = GridConfig::new(100.0, 100.0, 20.0, 3).unwrap();
    let mut layout = TileLayout::new(config, StrategyKind::Displacement, Desktop::default());
    let mut keys = TileKeys::new();
    layout
        .set_tiles(keys.tiles_from(items, Item::name, |_| GridSpan::UNIT).unwrap())
        .unwrap();

    // Drag notes.txt onto the middle of the docs folder.
    let key = keys.get(&"notes.txt").unwrap();
    let grab = Point::new(50.0, 50.0);
    let movement = Vec2::new(200.0, 0.0);
    layout.handle_gesture(&GestureEvent::start(key, grab));
    layout.handle_gesture(&GestureEvent::moved(key, grab, movement));
    let outcome = layout.handle_gesture(&GestureEvent::end(key, grab, movement));
    println!("release: {outcome:?}");

    for tile in layout.render_tiles() {
        println!("  {:?} at col {}", tile.data, tile.col);
    }
    println!("folders: {:?}", layout.delegate().folders);
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tile packing basics.
//!
//! Key a few dashboard cards, pack them first-fit into a grid, and print the
//! resulting table and reading order.
//!
//! Run:
//! - `cargo run -p understory_tile_demos --example tile_packing`

use understory_tile_grid::{GridSpan, TileKeys, table_to_tiles_list, tiles_list_to_table};

#[derive(Clone, Debug)]
struct Card {
    id: &'static str,
    span: GridSpan,
}

fn card(id: &'static str, rows: usize, cols: usize) -> Card {
    Card {
        id,
        span: GridSpan::new(rows, cols),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cards = vec![
        card("clock", 1, 1),
        card("chart", 2, 2),
        card("notes", 1, 1),
        card("banner", 1, 3),
        card("todo", 1, 1),
    ];

    let mut keys = TileKeys::new();
    let tiles = keys.tiles_from(cards, |c| c.id, |c| c.span).unwrap();
    let table = tiles_list_to_table(&tiles, 3);

    println!("{} rows x {} columns", table.rows(), table.cols());
    for row in table.iter_rows() {
        let names: Vec<_> = row
            .iter()
            .map(|cell| cell.as_ref().map_or("-", |t| t.data().id))
            .collect();
        println!("  {}", names.join("\t"));
    }

    for tile in table_to_tiles_list(&table) {
        log::info!(
            "{:<7} at row {} col {} ({}x{})",
            tile.data().id,
            tile.row(),
            tile.col(),
            tile.span().row_span,
            tile.span().col_span
        );
    }
}

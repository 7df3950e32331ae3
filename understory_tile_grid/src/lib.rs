// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tile_grid --heading-base-level=0

//! Understory Tile Grid: first-fit packing of spanned tiles onto a grid.
//!
//! Understory Tile Grid is the layout half of a draggable tile board.
//!
//! - Describe items as [`Tile`]s: an opaque payload, a stable [`TileKey`], and a
//!   [`GridSpan`] of rows and columns.
//! - Pack an ordered list into a [`TilesTable`] with [`tiles_list_to_table`].
//!   Earlier tiles claim the top-left-most free slots, scanning rows then columns.
//! - Flatten a table back into a sequence in reading order with [`table_to_tiles_list`],
//!   or collect the tiles under a rectangle with [`intercept_tiles`].
//!
//! Tables are copy-on-write values: [`Table::place`] returns a new table.
//! Every cell covered by a tile holds a clone of the same [`TileRef`], and no two
//! tiles ever claim the same cell.
//!
//! Identity is carried by keys, never by payload equality. [`TileKeys`] allocates
//! keys from whatever identity the caller already has for its payloads.
//!
//! It does not depend on any geometry crate; pixel coordinates are plain `f64`
//! and cell sizes come from a validated [`GridConfig`].
//!
//! # Example
//!
//! ```rust
//! use understory_tile_grid::{GridCoords, GridSpan, Tile, TileKey};
//! use understory_tile_grid::{table_to_tiles_list, tiles_list_to_table};
//!
//! let tiles = vec![
//!     Tile::new(TileKey(0), "a", GridSpan::new(1, 1)),
//!     Tile::new(TileKey(1), "b", GridSpan::new(2, 2)),
//!     Tile::new(TileKey(2), "c", GridSpan::new(1, 1)),
//! ];
//!
//! // Pack on a 3-column grid.
//! let table = tiles_list_to_table(&tiles, 3);
//! assert_eq!(table.rows(), 2);
//!
//! // "b" sits right of "a"; "c" backfills the first free cell of row 1.
//! let placed = table_to_tiles_list(&table);
//! let anchors: Vec<_> = placed.iter().map(|t| (*t.data(), t.coords)).collect();
//! assert_eq!(
//!     anchors,
//!     vec![
//!         ("a", GridCoords::new(0, 0)),
//!         ("b", GridCoords::new(0, 1)),
//!         ("c", GridCoords::new(1, 0)),
//!     ]
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod keys;
pub mod pack;
pub mod table;
pub mod types;

pub use config::{DEFAULT_ACTIVE_BORDER_SIZE, GridConfig, MAX_COLUMNS};
pub use error::ConfigError;
pub use keys::TileKeys;
pub use pack::{
    TilesTable, check_overlap, intercept_tiles, positioned_tiles_max_rows, table_to_tiles_list,
    tiles_list_to_table,
};
pub use table::{CellValue, Table, TableSize};
pub use types::{Footprint, GridCoords, GridSpan, PositionedTile, Tile, TileKey, TileRef};

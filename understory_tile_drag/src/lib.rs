// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tile_drag --heading-base-level=0

//! Understory Tile Drag: drag-to-reorder for packed tile grids.
//!
//! This crate drives interactive reordering on top of [`understory_tile_grid`].
//! A [`TileLayout`] owns the tile list, packs it, consumes a normalized stream of
//! [`GestureEvent`]s, and projects per-tile [`RenderTile`] records for a view layer.
//!
//! ## Strategies
//!
//! Two interchangeable [`Strategy`] implementations decide what a pointer move means:
//!
//! - [`Displacement`] (`"move"`): entering an edge band of another tile re-anchors the
//!   dragged tile there and repacks the tiles it covers. A move that cannot repack every
//!   covered tile changes nothing.
//! - [`Insertion`] (`"reorder"`): the layout holds still and a candidate slot between two
//!   sequence neighbors is tracked; the sequence is spliced on release.
//!
//! Both treat the center of a tile as a drop target. Whether a drop is allowed, and what
//! happens on commit, is up to the [`TileDelegate`].
//!
//! ## Touch zones
//!
//! [`classify_touch`] splits a tile into edge bands [`active_border_size`] deep and a strict
//! interior. Bands are directional, so a band only triggers from the side the dragged tile
//! approaches.
//!
//! ## Configuration
//!
//! [`LayoutConfig`] describes columns and cell height relative to a measured container and
//! resolves to a validated [`GridConfig`]. Degenerate geometry is refused up front with a
//! [`LayoutError`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_tile_drag::{DragOutcome, GestureEvent, LayoutConfig, NoDelegate, TileLayout};
//! use understory_tile_grid::{GridSpan, TileKeys};
//!
//! // Four columns across a 400px container.
//! let mut layout: TileLayout<&str> =
//!     TileLayout::from_layout_config(&LayoutConfig::default(), 400.0, NoDelegate).unwrap();
//!
//! let mut keys = TileKeys::new();
//! let tiles = keys.tiles_from(["a", "b", "c"], |s| *s, |_| GridSpan::UNIT).unwrap();
//! layout.set_tiles(tiles).unwrap();
//!
//! // Grab "a" and drag it into the right band of "b".
//! let key = keys.get(&"a").unwrap();
//! let grab = Point::new(50.0, 50.0);
//! layout.handle_gesture(&GestureEvent::start(key, grab));
//! layout.handle_gesture(&GestureEvent::moved(key, grab, Vec2::new(140.0, 0.0)));
//! let outcome = layout.handle_gesture(&GestureEvent::end(key, grab, Vec2::new(140.0, 0.0)));
//!
//! assert_eq!(outcome, DragOutcome::Reordered);
//! let order: Vec<_> = layout.tiles().iter().map(|t| t.data).collect();
//! assert_eq!(order, ["b", "a", "c"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`active_border_size`]: GridConfig::active_border_size

#![no_std]

extern crate alloc;

pub mod cache;
pub mod config;
pub mod error;
pub mod gesture;
pub mod render;
pub mod session;
pub mod state;
pub mod strategy;
pub mod touch;

pub use cache::{PackCache, PackedLayout};
pub use config::{ColumnMode, LayoutConfig, TileHeight};
pub use error::LayoutError;
pub use gesture::GestureEvent;
pub use render::{RenderFlags, RenderTile, project};
pub use session::{DragOutcome, NoDelegate, TileDelegate, TileLayout};
pub use state::{DragPatch, DragSession, DragState, InsertionPoint};
pub use strategy::{Displacement, Insertion, MoveContext, Strategy, StrategyKind};
pub use touch::{TouchZone, classify_touch};

pub use understory_tile_grid::GridConfig;

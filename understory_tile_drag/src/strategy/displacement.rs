// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Displacement: the dragged tile claims cells and pushes their owners aside.
//!
//! When the pointer enters an edge band of another tile, the dragged tile is
//! re-anchored next to that edge. Tiles under its new footprint (the hover
//! set) are repacked first-fit into whatever space remains. The move is
//! all-or-nothing: if the footprint is blocked or any hover tile finds no
//! slot, nothing changes.

use alloc::sync::Arc;
use alloc::vec::Vec;

use understory_tile_grid::pack::{positioned, sort_reading_order};
use understory_tile_grid::table::floor_div;
use understory_tile_grid::{Table, TileRef, check_overlap, intercept_tiles};

use super::{MoveContext, Strategy};
use crate::state::{DragPatch, DragSession};
use crate::touch::{TouchZone, classify_touch};

/// Pushes overlapped tiles to new slots on every move.
#[derive(Copy, Clone, Debug, Default)]
pub struct Displacement;

/// The edge band a move re-anchors against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// `None` for the center, which never moves anything.
    fn of(zone: TouchZone) -> Option<Self> {
        match zone {
            TouchZone::Left => Some(Self::Left),
            TouchZone::Right => Some(Self::Right),
            TouchZone::Top => Some(Self::Top),
            TouchZone::Bottom => Some(Self::Bottom),
            TouchZone::Center => None,
        }
    }
}

impl<T: Clone> Strategy<T> for Displacement {
    fn on_drag_move(&self, cx: &MoveContext<'_, T>) -> Option<DragPatch<T>> {
        let (cell, touched) = cx.touched_tile()?;
        let dragging = cx.dragging_tile();
        let zone = classify_touch(dragging.coords, touched.footprint(), cx.pointer(), cx.config)?;
        let Some(edge) = Edge::of(zone) else {
            return cx.center_patch(&touched);
        };

        let config = cx.config;
        let table = cx.table;
        let span = dragging.span();
        let grab = cx.session.drag_position;
        let row_skew = floor_div(grab.y, config.element_height());
        let col_skew = floor_div(grab.x, config.element_width());
        let (row, col) = (signed(cell.row), signed(cell.col));
        let (row, col) = match edge {
            Edge::Right => (row - row_skew, col - (signed(span.col_span) - 1)),
            Edge::Left => (row - row_skew, col),
            Edge::Top => (row, col - col_skew),
            Edge::Bottom => (row - (signed(span.row_span) - 1), col - col_skew),
        };
        let anchor = table.trim_location(row, col);

        let dragging_key = dragging.key();
        let hover: Vec<TileRef<T>> =
            intercept_tiles(table, anchor.row, anchor.col, span.row_span, span.col_span)
                .into_iter()
                .filter(|t| t.key() != dragging_key)
                .collect();
        if hover.is_empty() {
            log::trace!("{dragging_key:?} at {anchor:?} overlaps nothing");
            return None;
        }

        let others: Vec<&TileRef<T>> = cx
            .tiles
            .iter()
            .filter(|t| t.key() != dragging_key && !hover.iter().any(|h| h.key() == t.key()))
            .collect();

        // Room below the table lets hover tiles spill into new rows.
        let mut scratch = Table::new(table.rows() + span.row_span - 1, table.cols(), false);
        for tile in &others {
            scratch.place_mut(&tile.footprint(), true);
        }

        let new_dragging = positioned(dragging.tile.clone(), anchor);
        let footprint = new_dragging.footprint();
        if !scratch.fits(&footprint) {
            log::trace!("{dragging_key:?} does not fit at {anchor:?}");
            return None;
        }
        scratch.place_mut(&footprint, true);

        let mut reordered = Vec::with_capacity(cx.tiles.len());
        for tile in &hover {
            let Some(coords) = scratch.find_first_fitting_position(tile.span()) else {
                log::trace!("{:?} has no slot left; move rejected", tile.key());
                return None;
            };
            let moved: TileRef<T> = Arc::new(tile.moved_to(coords));
            scratch.place_mut(&moved.footprint(), true);
            reordered.push(moved);
        }
        reordered.extend(others.into_iter().cloned());
        reordered.push(TileRef::clone(&new_dragging));
        sort_reading_order(&mut reordered, config.columns());
        debug_assert!(
            !check_overlap(&reordered, config.columns()),
            "displacement produced overlapping tiles"
        );

        log::trace!(
            "{dragging_key:?} moved to {anchor:?}, displacing {} tile(s)",
            hover.len()
        );
        Some(DragPatch {
            dragging_tile: Some(new_dragging),
            tiles: Some(reordered),
            ..DragPatch::default()
        })
    }

    fn on_drag_end(&self, session: &DragSession<T>) -> Option<Vec<TileRef<T>>> {
        // Every accepted move already rewrote the working sequence.
        Some(session.tiles.clone())
    }
}

fn signed(v: usize) -> isize {
    isize::try_from(v).unwrap_or(isize::MAX)
}

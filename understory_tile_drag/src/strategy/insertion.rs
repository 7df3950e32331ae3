// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion: the layout stays put while dragging; the sequence is spliced on
//! release.
//!
//! Only the side bands of the touched tile matter. Touching the left band
//! proposes a slot before the touched tile, the right band a slot after it.
//! Neighbors are only recorded when they share the touched tile's row, so an
//! insertion marker never bridges two rows.

use alloc::vec::Vec;

use understory_tile_grid::{TileKey, TileRef};

use super::{MoveContext, Strategy};
use crate::state::{DragPatch, DragSession, InsertionPoint};
use crate::touch::{TouchZone, classify_touch};

/// Tracks a candidate slot and splices the sequence on release.
#[derive(Copy, Clone, Debug, Default)]
pub struct Insertion;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl<T: Clone> Strategy<T> for Insertion {
    fn on_drag_move(&self, cx: &MoveContext<'_, T>) -> Option<DragPatch<T>> {
        let (cell, touched) = cx.touched_tile()?;
        // Directional guards do not apply: the touched tile is its own reference.
        let zone = classify_touch(touched.coords, touched.footprint(), cx.pointer(), cx.config)?;
        let side = match zone {
            TouchZone::Center => return cx.center_patch(&touched),
            TouchZone::Left => Side::Left,
            TouchZone::Right => Side::Right,
            TouchZone::Top | TouchZone::Bottom => return None,
        };

        let session = cx.session;
        let dragging = session.dragging_key();
        if touched.row() == cell.row {
            return insertion_point(&session.tiles, side, &touched, dragging)
                .map(DragPatch::insertion);
        }

        // The pointer is in a lower row of a tall tile. Aim at the tile beside
        // it in that row instead, from the opposite side, and mirror.
        let adjacent_col = match side {
            Side::Left => touched.col().checked_sub(1)?,
            Side::Right => touched.col() + touched.span().col_span,
        };
        let adjacent = cx.table.get(cell.row, adjacent_col)?.as_ref()?;
        let shifted = insertion_point(&session.tiles, side.opposite(), adjacent, dragging)?;
        let mirrored = match side {
            Side::Left => InsertionPoint {
                left: shifted.right,
                right: None,
            },
            Side::Right => InsertionPoint {
                left: None,
                right: shifted.left,
            },
        };
        Some(DragPatch::insertion(mirrored))
    }

    fn on_drag_end(&self, session: &DragSession<T>) -> Option<Vec<TileRef<T>>> {
        let point = session.insertion_point.as_ref()?;
        let dragging = session.dragging_key();
        let mut tiles: Vec<TileRef<T>> = session
            .tiles
            .iter()
            .filter(|t| t.key() != dragging)
            .cloned()
            .collect();
        let position = |key: TileKey| tiles.iter().position(|t| t.key() == key);
        let index = point
            .left_key()
            .and_then(position)
            .map(|i| i + 1)
            .or_else(|| point.right_key().and_then(position))
            .unwrap_or(tiles.len());
        tiles.insert(index, TileRef::clone(&session.dragging_tile));
        Some(tiles)
    }
}

/// The slot on `side` of `touched` in `tiles`.
///
/// `None` if `touched` is not in the sequence or its neighbor on that side is
/// the dragged tile, which would make the move a no-op.
fn insertion_point<T>(
    tiles: &[TileRef<T>],
    side: Side,
    touched: &TileRef<T>,
    dragging: TileKey,
) -> Option<InsertionPoint<T>> {
    let index = tiles.iter().position(|t| t.key() == touched.key())?;
    let neighbor = match side {
        Side::Left => index.checked_sub(1).and_then(|i| tiles.get(i)),
        Side::Right => tiles.get(index + 1),
    };
    if neighbor.is_some_and(|n| n.key() == dragging) {
        log::trace!("slot beside {:?} is where {dragging:?} already sits", touched.key());
        return None;
    }
    let neighbor = neighbor.filter(|n| n.row() == touched.row()).cloned();
    let touched = Some(TileRef::clone(touched));
    Some(match side {
        Side::Left => InsertionPoint {
            left: neighbor,
            right: touched,
        },
        Side::Right => InsertionPoint {
            left: touched,
            right: neighbor,
        },
    })
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render projection: what a view layer needs to draw each tile.

use alloc::vec::Vec;

use bitflags::bitflags;
use kurbo::{Point, Rect, Size};
use understory_tile_grid::{GridConfig, GridSpan, TileKey, TileRef};

use crate::state::{DragState, InsertionPoint};
use crate::touch::cell_origin;

bitflags! {
    /// Drag state of a single tile.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RenderFlags: u8 {
        /// The tile being dragged.
        const DRAGGING            = 0b0000_0001;
        /// The tile whose center the pointer is over.
        const DROP_TARGET         = 0b0000_0010;
        /// The dragged tile, over an accepting drop target.
        const DROPPABLE           = 0b0000_0100;
        /// The dragged tile, while an insertion slot is recorded.
        const DROPPABLE_AT_INSERT = 0b0000_1000;
        /// Draw an insertion marker on this tile's left edge.
        const INSERT_AT_LEFT      = 0b0001_0000;
        /// Draw an insertion marker on this tile's right edge.
        const INSERT_AT_RIGHT     = 0b0010_0000;
    }
}

/// Per-tile render record.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderTile<T> {
    /// Identity.
    pub key: TileKey,
    /// Caller payload.
    pub data: T,
    /// Packed anchor row.
    pub row: usize,
    /// Packed anchor column.
    pub col: usize,
    /// Footprint size in cells.
    pub span: GridSpan,
    /// Size of one cell in pixels.
    pub cell_size: Size,
    /// Top-left pixel position; follows the pointer for the dragged tile.
    pub origin: Point,
    /// Drag state.
    pub flags: RenderFlags,
}

impl<T> RenderTile<T> {
    /// Pixel bounds covering the whole span.
    pub fn rect(&self) -> Rect {
        #[allow(clippy::cast_precision_loss, reason = "spans are tiny.")]
        let size = Size::new(
            self.cell_size.width * self.span.col_span as f64,
            self.cell_size.height * self.span.row_span as f64,
        );
        Rect::from_origin_size(self.origin, size)
    }

    /// True for the dragged tile.
    pub fn is_dragging(&self) -> bool {
        self.flags.contains(RenderFlags::DRAGGING)
    }

    /// True for the hovered drop target.
    pub fn is_drop_target(&self) -> bool {
        self.flags.contains(RenderFlags::DROP_TARGET)
    }

    /// True for the dragged tile over an accepting target.
    pub fn is_droppable(&self) -> bool {
        self.flags.contains(RenderFlags::DROPPABLE)
    }
}

/// Project packed `tiles` and the drag `state` into render records.
///
/// Records are sorted by key so a view can diff them across frames. With
/// `enabled` false every record is at rest.
pub fn project<T: Clone>(
    tiles: &[TileRef<T>],
    state: &DragState<T>,
    config: &GridConfig,
    enabled: bool,
) -> Vec<RenderTile<T>> {
    let cell_size = Size::new(config.element_width(), config.element_height());
    let session = state.session().filter(|_| enabled);
    let mut out: Vec<RenderTile<T>> = tiles
        .iter()
        .map(|tile| {
            let key = tile.key();
            let mut origin = cell_origin(tile.coords, config).to_point();
            let mut flags = RenderFlags::empty();
            if let Some(session) = session {
                if key == session.dragging_key() {
                    flags |= RenderFlags::DRAGGING;
                    flags.set(RenderFlags::DROPPABLE, session.droppable);
                    flags.set(
                        RenderFlags::DROPPABLE_AT_INSERT,
                        session.insertion_point.is_some(),
                    );
                    origin = session.drawn_origin(config);
                }
                if session.drop_target.as_ref().is_some_and(|t| t.key() == key) {
                    flags |= RenderFlags::DROP_TARGET;
                }
                if let Some(point) = &session.insertion_point {
                    flags |= insertion_flags(point, key);
                }
            }
            RenderTile {
                key,
                data: tile.data().clone(),
                row: tile.row(),
                col: tile.col(),
                span: tile.span(),
                cell_size,
                origin,
                flags,
            }
        })
        .collect();
    out.sort_by_key(|t| t.key);
    out
}

fn insertion_flags<T>(point: &InsertionPoint<T>, key: TileKey) -> RenderFlags {
    let mut flags = RenderFlags::empty();
    flags.set(RenderFlags::INSERT_AT_LEFT, point.right_key() == Some(key));
    flags.set(RenderFlags::INSERT_AT_RIGHT, point.left_key() == Some(key));
    flags
}

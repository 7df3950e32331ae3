// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch zone classification.
//!
//! Each tile has an edge hot zone [`active_border_size`] pixels deep on every
//! side, and an interior. A pointer over a tile touches at most one zone.
//!
//! Edge zones are directional: the left zone only triggers when the dragged
//! tile sits at or right of the target (it is approaching from the right),
//! and likewise for the other sides. Zones are tested left, right, bottom,
//! top, then center, and the first match wins.
//!
//! [`active_border_size`]: GridConfig::active_border_size

use kurbo::{Point, Vec2};
use understory_tile_grid::{Footprint, GridConfig, GridCoords};

/// The region of a tile under the pointer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchZone {
    /// Left edge band.
    Left,
    /// Right edge band.
    Right,
    /// Top edge band.
    Top,
    /// Bottom edge band.
    Bottom,
    /// Strict interior, clear of every band.
    Center,
}

/// Classify `point` against the tile at `target`, for a tile dragged from
/// `dragging`.
///
/// `point` is in grid pixel space. Returns `None` when the pointer is in a
/// band whose direction guard fails, or exactly on a band boundary.
pub fn classify_touch(
    dragging: GridCoords,
    target: Footprint,
    point: Point,
    config: &GridConfig,
) -> Option<TouchZone> {
    let w = config.element_width();
    let h = config.element_height();
    let border = config.active_border_size();
    let anchor = target.coords;
    let local = point - cell_origin(anchor, config);
    #[allow(clippy::cast_precision_loss, reason = "spans are tiny.")]
    let (width, height) = (
        w * target.span.col_span as f64,
        h * target.span.row_span as f64,
    );

    if dragging.col >= anchor.col && local.x < border {
        return Some(TouchZone::Left);
    }
    if dragging.col <= anchor.col && local.x > width - border {
        return Some(TouchZone::Right);
    }
    if dragging.row <= anchor.row && local.y > height - border {
        return Some(TouchZone::Bottom);
    }
    if dragging.row >= anchor.row && local.y < border {
        return Some(TouchZone::Top);
    }
    let inside = local.x > border
        && local.x < width - border
        && local.y > border
        && local.y < height - border;
    inside.then_some(TouchZone::Center)
}

/// Pixel offset of the cell at `coords`.
pub fn cell_origin(coords: GridCoords, config: &GridConfig) -> Vec2 {
    #[allow(
        clippy::cast_precision_loss,
        reason = "grid indices are far below 2^52."
    )]
    let (col, row) = (coords.col as f64, coords.row as f64);
    Vec2::new(col * config.element_width(), row * config.element_height())
}

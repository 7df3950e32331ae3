// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized pointer gesture events.

use kurbo::{Point, Vec2};
use understory_tile_grid::TileKey;

/// One step of a drag gesture on a tile.
///
/// A gesture is a run of events with `dragging == true` followed by a single
/// event with `dragging == false`. The first event of the run starts the
/// session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureEvent {
    /// Tile the gesture was bound to.
    pub key: TileKey,
    /// False on the final event of the gesture.
    pub dragging: bool,
    /// True if the recognizer classified the gesture as a tap.
    pub tap: bool,
    /// Pointer position in container-local pixels.
    pub xy: Point,
    /// Pointer movement since the gesture began.
    pub movement: Vec2,
}

impl GestureEvent {
    /// First event of a drag on `key`, with the pointer at `xy`.
    pub fn start(key: TileKey, xy: Point) -> Self {
        Self {
            key,
            dragging: true,
            tap: false,
            xy,
            movement: Vec2::ZERO,
        }
    }

    /// A move of `movement` from where the gesture began at `origin`.
    pub fn moved(key: TileKey, origin: Point, movement: Vec2) -> Self {
        Self {
            key,
            dragging: true,
            tap: false,
            xy: origin + movement,
            movement,
        }
    }

    /// Release after `movement` from where the gesture began at `origin`.
    pub fn end(key: TileKey, origin: Point, movement: Vec2) -> Self {
        Self {
            key,
            dragging: false,
            tap: false,
            xy: origin + movement,
            movement,
        }
    }

    /// A tap on `key` at `xy`.
    pub fn tap(key: TileKey, xy: Point) -> Self {
        Self {
            tap: true,
            ..Self::start(key, xy)
        }
    }
}

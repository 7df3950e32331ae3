// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session state and the patches strategies apply to it.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use understory_tile_grid::{GridConfig, GridCoords, TileKey, TileRef};

use crate::touch::cell_origin;

/// The two sequence neighbors a dragged tile would be spliced between.
///
/// Either side may be absent, for example at the start of a row.
#[derive(Clone, Debug)]
pub struct InsertionPoint<T> {
    /// Tile that would end up just before the dragged tile.
    pub left: Option<TileRef<T>>,
    /// Tile that would end up just after the dragged tile.
    pub right: Option<TileRef<T>>,
}

impl<T> InsertionPoint<T> {
    /// Key of the left neighbor.
    pub fn left_key(&self) -> Option<TileKey> {
        self.left.as_ref().map(|t| t.key())
    }

    /// Key of the right neighbor.
    pub fn right_key(&self) -> Option<TileKey> {
        self.right.as_ref().map(|t| t.key())
    }
}

/// Everything tracked while one tile is being dragged.
#[derive(Clone, Debug)]
pub struct DragSession<T> {
    /// The dragged tile, at its latest committed anchor.
    pub dragging_tile: TileRef<T>,
    /// Pointer position inside the dragged tile when the drag began.
    pub drag_position: Vec2,
    /// Anchor of the dragged tile when the drag began.
    pub start: GridCoords,
    /// Cumulative pointer movement since the drag began.
    pub offset: Vec2,
    /// Tile under the pointer's center zone, if any.
    pub drop_target: Option<TileRef<T>>,
    /// Whether `drop_target` accepted the dragged tile.
    pub droppable: bool,
    /// Working tile sequence, initially a snapshot of the packed layout.
    pub tiles: Vec<TileRef<T>>,
    /// Candidate slot recorded by the insertion strategy.
    pub insertion_point: Option<InsertionPoint<T>>,
}

impl<T> DragSession<T> {
    /// Begin a session for `tile`, grabbed at `pointer` (grid pixel space).
    pub fn begin(
        tile: TileRef<T>,
        pointer: Point,
        movement: Vec2,
        tiles: Vec<TileRef<T>>,
        config: &GridConfig,
    ) -> Self {
        let start = tile.coords;
        let drag_position = pointer.to_vec2() - cell_origin(start, config);
        Self {
            dragging_tile: tile,
            drag_position,
            start,
            offset: movement,
            drop_target: None,
            droppable: false,
            tiles,
            insertion_point: None,
        }
    }

    /// Key of the dragged tile.
    pub fn dragging_key(&self) -> TileKey {
        self.dragging_tile.key()
    }

    /// Pointer position in grid pixel space after `offset` of movement.
    pub fn pointer_at(&self, offset: Vec2, config: &GridConfig) -> Point {
        (cell_origin(self.start, config) + offset + self.drag_position).to_point()
    }

    /// Pixel origin the dragged tile is drawn at.
    pub fn drawn_origin(&self, config: &GridConfig) -> Point {
        (cell_origin(self.start, config) + self.offset).to_point()
    }

    /// True if the session ended over an accepting drop target.
    pub fn can_drop(&self) -> bool {
        self.droppable && self.drop_target.is_some()
    }

    /// Record a move to `offset` and fold in the strategy's answer.
    ///
    /// Drop target, droppable and insertion point never carry over from the
    /// previous move: a patch must re-assert them every time.
    pub fn apply(&mut self, offset: Vec2, patch: Option<DragPatch<T>>) {
        self.offset = offset;
        self.drop_target = None;
        self.droppable = false;
        self.insertion_point = None;

        let Some(patch) = patch else {
            return;
        };
        if let Some(tile) = patch.dragging_tile {
            self.dragging_tile = tile;
        }
        if let Some(tiles) = patch.tiles {
            self.tiles = tiles;
        }
        self.drop_target = patch.drop_target;
        self.droppable = patch.droppable;
        self.insertion_point = patch.insertion_point;
    }
}

/// Lifecycle of the drag controller.
#[derive(Clone, Debug)]
pub enum DragState<T> {
    /// No gesture in progress.
    Idle,
    /// A tile is being dragged.
    Dragging(DragSession<T>),
}

impl<T> Default for DragState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> DragState<T> {
    /// The active session, if any.
    pub fn session(&self) -> Option<&DragSession<T>> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    /// True while a tile is being dragged.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}

/// State changes proposed by a strategy for one move.
///
/// `None` fields keep the session's value; the flag fields replace it.
#[derive(Clone, Debug)]
pub struct DragPatch<T> {
    /// New anchor for the dragged tile.
    pub dragging_tile: Option<TileRef<T>>,
    /// New working sequence.
    pub tiles: Option<Vec<TileRef<T>>>,
    /// Drop target under the pointer.
    pub drop_target: Option<TileRef<T>>,
    /// Whether the drop target accepts the dragged tile.
    pub droppable: bool,
    /// Candidate insertion slot.
    pub insertion_point: Option<InsertionPoint<T>>,
}

impl<T> Default for DragPatch<T> {
    fn default() -> Self {
        Self {
            dragging_tile: None,
            tiles: None,
            drop_target: None,
            droppable: false,
            insertion_point: None,
        }
    }
}

impl<T> DragPatch<T> {
    /// Hovering the center of `target`.
    pub fn drop_target(target: TileRef<T>, droppable: bool) -> Self {
        Self {
            drop_target: Some(target),
            droppable,
            ..Self::default()
        }
    }

    /// A candidate insertion slot.
    pub fn insertion(point: InsertionPoint<T>) -> Self {
        Self {
            insertion_point: Some(point),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use understory_tile_grid::pack::positioned;
    use understory_tile_grid::{GridSpan, Tile};

    fn config() -> GridConfig {
        GridConfig::new(100.0, 50.0, 10.0, 4).unwrap()
    }

    fn session() -> DragSession<&'static str> {
        let a = positioned(Tile::new(TileKey(0), "a", GridSpan::UNIT), GridCoords::new(1, 2));
        let b = positioned(Tile::new(TileKey(1), "b", GridSpan::UNIT), GridCoords::new(0, 0));
        DragSession::begin(
            a.clone(),
            Point::new(230.0, 60.0),
            Vec2::ZERO,
            vec![b, a],
            &config(),
        )
    }

    #[test]
    fn begin_records_grab_offset() {
        let s = session();
        assert_eq!(s.start, GridCoords::new(1, 2));
        assert_eq!(s.drag_position, Vec2::new(30.0, 10.0));
        assert_eq!(s.pointer_at(Vec2::new(5.0, -5.0), &config()), Point::new(235.0, 55.0));
        assert_eq!(s.drawn_origin(&config()), Point::new(200.0, 50.0));
        assert_eq!(s.dragging_key(), TileKey(0));
    }

    #[test]
    fn flags_must_be_reasserted() {
        let mut s = session();
        let target = s.tiles[0].clone();
        s.apply(Vec2::new(1.0, 0.0), Some(DragPatch::drop_target(target, true)));
        assert!(s.can_drop());
        assert_eq!(s.offset, Vec2::new(1.0, 0.0));

        s.apply(Vec2::new(2.0, 0.0), None);
        assert!(!s.can_drop());
        assert!(s.drop_target.is_none());
        assert_eq!(s.offset, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn patch_replaces_tiles_and_anchor() {
        let mut s = session();
        let moved = positioned(s.dragging_tile.tile.clone(), GridCoords::new(0, 1));
        let patch = DragPatch {
            dragging_tile: Some(moved.clone()),
            tiles: Some(vec![s.tiles[0].clone(), moved]),
            ..DragPatch::default()
        };
        s.apply(Vec2::ZERO, Some(patch));
        assert_eq!(s.dragging_tile.coords, GridCoords::new(0, 1));
        assert_eq!(s.tiles[1].coords, GridCoords::new(0, 1));
        // The drag still started where it started.
        assert_eq!(s.start, GridCoords::new(1, 2));
    }

    #[test]
    fn state_accessors() {
        let idle: DragState<&str> = DragState::default();
        assert!(!idle.is_dragging());
        assert!(idle.session().is_none());
        let dragging = DragState::Dragging(session());
        assert!(dragging.is_dragging());
        assert_eq!(dragging.session().map(DragSession::dragging_key), Some(TileKey(0)));
    }
}

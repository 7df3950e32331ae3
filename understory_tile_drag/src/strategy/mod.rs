// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reordering strategies.
//!
//! A strategy answers two questions for a drag session: what changes on each
//! pointer move, and what sequence to commit on release. Strategies are pure;
//! they read the session and the packed table and return a proposal, and
//! the controller decides what to do with it.
//!
//! - [`Displacement`] pushes overlapped tiles aside on every move.
//! - [`Insertion`] only tracks a candidate slot and splices on release.
//!
//! [`StrategyKind`] selects one of the two once per layout.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Vec2};
use understory_tile_grid::{GridConfig, GridCoords, PositionedTile, TileRef, TilesTable};

use crate::error::LayoutError;
use crate::state::{DragPatch, DragSession};

mod displacement;
mod insertion;

pub use displacement::Displacement;
pub use insertion::Insertion;

/// Inputs to [`Strategy::on_drag_move`].
pub struct MoveContext<'a, T> {
    /// Grid geometry.
    pub config: &'a GridConfig,
    /// Table packed from the session's working sequence.
    pub table: &'a TilesTable<T>,
    /// The tiles of `table`, in reading order.
    pub tiles: &'a [TileRef<T>],
    /// Session state before this move.
    pub session: &'a DragSession<T>,
    /// Cumulative pointer movement including this move.
    pub offset: Vec2,
    /// Whether the first tile may be dropped onto the second.
    pub accepts_drop: &'a dyn Fn(&PositionedTile<T>, &PositionedTile<T>) -> bool,
}

impl<T> fmt::Debug for MoveContext<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveContext")
            .field("config", self.config)
            .field("offset", &self.offset)
            .field("tiles", &self.tiles.len())
            .finish_non_exhaustive()
    }
}

impl<T> MoveContext<'_, T> {
    /// Pointer position in grid pixel space.
    pub fn pointer(&self) -> Point {
        self.session.pointer_at(self.offset, self.config)
    }

    /// The dragged tile as currently packed, falling back to the session's copy.
    pub fn dragging_tile(&self) -> &TileRef<T> {
        let key = self.session.dragging_key();
        self.tiles
            .iter()
            .find(|t| t.key() == key)
            .unwrap_or(&self.session.dragging_tile)
    }

    /// The cell under the pointer and the tile occupying it.
    ///
    /// `None` if the cell is vacant or holds the dragged tile.
    pub fn touched_tile(&self) -> Option<(GridCoords, TileRef<T>)> {
        let pointer = self.pointer();
        let cell = self.table.point_to_location(pointer.x, pointer.y, self.config);
        let touched = self.table.at(cell)?.as_ref()?;
        if touched.key() == self.session.dragging_key() {
            return None;
        }
        Some((cell, TileRef::clone(touched)))
    }

    /// Proposal for hovering the center of `touched`.
    ///
    /// Re-touching the current drop target keeps its verdict without asking
    /// again; a refused target yields no proposal.
    pub fn center_patch(&self, touched: &TileRef<T>) -> Option<DragPatch<T>> {
        let session = self.session;
        if let Some(current) = &session.drop_target
            && current.key() == touched.key()
        {
            return Some(DragPatch::drop_target(
                TileRef::clone(current),
                session.droppable,
            ));
        }
        if (self.accepts_drop)(&session.dragging_tile, touched) {
            return Some(DragPatch::drop_target(TileRef::clone(touched), true));
        }
        log::trace!(
            "drop of {:?} onto {:?} refused",
            session.dragging_key(),
            touched.key()
        );
        None
    }
}

/// A reordering behavior.
pub trait Strategy<T> {
    /// Propose changes for one pointer move, or `None` for no change.
    fn on_drag_move(&self, cx: &MoveContext<'_, T>) -> Option<DragPatch<T>>;

    /// Sequence to commit when the drag is released without a drop.
    fn on_drag_end(&self, session: &DragSession<T>) -> Option<Vec<TileRef<T>>>;
}

/// Strategy selector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Dragging pushes overlapped tiles to new slots (selector `"move"`).
    #[default]
    Displacement,
    /// Dragging picks a slot between two neighbors (selector `"reorder"`).
    Insertion,
}

impl StrategyKind {
    /// Selector name of this strategy.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Displacement => "move",
            Self::Insertion => "reorder",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "move" | "displacement" => Ok(Self::Displacement),
            "reorder" | "insertion" => Ok(Self::Insertion),
            other => Err(LayoutError::UnknownStrategy(other.to_string())),
        }
    }
}

impl<T: Clone> Strategy<T> for StrategyKind {
    fn on_drag_move(&self, cx: &MoveContext<'_, T>) -> Option<DragPatch<T>> {
        match self {
            Self::Displacement => Displacement.on_drag_move(cx),
            Self::Insertion => Insertion.on_drag_move(cx),
        }
    }

    fn on_drag_end(&self, session: &DragSession<T>) -> Option<Vec<TileRef<T>>> {
        match self {
            Self::Displacement => Displacement.on_drag_end(session),
            Self::Insertion => Insertion.on_drag_end(session),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use alloc::vec::Vec;

    use kurbo::{Point, Vec2};
    use understory_tile_grid::{
        GridConfig, GridSpan, PositionedTile, Tile, TileKey, TileRef, TilesTable,
        table_to_tiles_list, tiles_list_to_table,
    };

    use super::MoveContext;
    use crate::state::DragSession;

    /// 100px square cells, 24px border.
    pub(crate) fn config(columns: usize) -> GridConfig {
        GridConfig::new(100.0, 100.0, 24.0, columns).unwrap()
    }

    /// Tiles named `'A'`, `'B'`, ... with keys 0, 1, ...
    pub(crate) fn tiles(spans: &[(usize, usize)]) -> Vec<Tile<char>> {
        spans
            .iter()
            .zip(0_u32..)
            .map(|(&(rows, cols), key)| {
                let name = char::from_u32(u32::from('A') + key).unwrap();
                Tile::new(TileKey(key), name, GridSpan::new(rows, cols))
            })
            .collect()
    }

    pub(crate) struct Fixture {
        pub(crate) config: GridConfig,
        pub(crate) table: TilesTable<char>,
        pub(crate) tiles: Vec<TileRef<char>>,
        pub(crate) session: DragSession<char>,
    }

    impl Fixture {
        /// Pack `spans` and grab tile `key` at the center of its first cell.
        pub(crate) fn grab(spans: &[(usize, usize)], columns: usize, key: u32) -> Self {
            let config = config(columns);
            let table = tiles_list_to_table(&tiles(spans), columns);
            let tiles = table_to_tiles_list(&table);
            let tile = tiles.iter().find(|t| t.key() == TileKey(key)).unwrap().clone();
            let origin = crate::touch::cell_origin(tile.coords, &config);
            let grab = (origin + Vec2::new(50.0, 50.0)).to_point();
            let session = DragSession::begin(tile, grab, Vec2::ZERO, tiles.clone(), &config);
            Self {
                config,
                table,
                tiles,
                session,
            }
        }

        pub(crate) fn context<'a>(
            &'a self,
            offset: Vec2,
            accepts: &'a dyn Fn(&PositionedTile<char>, &PositionedTile<char>) -> bool,
        ) -> MoveContext<'a, char> {
            MoveContext {
                config: &self.config,
                table: &self.table,
                tiles: &self.tiles,
                session: &self.session,
                offset,
                accepts_drop: accepts,
            }
        }

        /// Offset that puts the pointer at `target`.
        pub(crate) fn offset_to(&self, target: Point) -> Vec2 {
            target - self.session.pointer_at(Vec2::ZERO, &self.config)
        }
    }

    pub(crate) fn keys(tiles: &[TileRef<char>]) -> Vec<char> {
        tiles.iter().map(|t| *t.data()).collect()
    }

    pub(crate) fn never(_: &PositionedTile<char>, _: &PositionedTile<char>) -> bool {
        false
    }

    pub(crate) fn always(_: &PositionedTile<char>, _: &PositionedTile<char>) -> bool {
        true
    }
}

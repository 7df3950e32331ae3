// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tile data model: keys, spans, anchors, and positioned tiles.

use alloc::sync::Arc;

/// Identity of a tile.
///
/// Keys are the only notion of equality used by packing and drag tracking.
/// Payloads are caller-owned and never compared.
/// Within one tile list every key is unique; see [`TileKeys`](crate::TileKeys)
/// for allocating keys from caller identities.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileKey(pub u32);

/// Footprint of a tile in grid cells.
///
/// Both spans are expected to be positive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridSpan {
    /// Number of rows covered.
    pub row_span: usize,
    /// Number of columns covered.
    pub col_span: usize,
}

impl GridSpan {
    /// Create a span of `row_span` rows by `col_span` columns.
    pub const fn new(row_span: usize, col_span: usize) -> Self {
        Self { row_span, col_span }
    }

    /// A single cell.
    pub const UNIT: Self = Self::new(1, 1);
}

/// Zero-based top-left anchor of a placed tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct GridCoords {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl GridCoords {
    /// Create an anchor at `row`, `col`.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major reading index in a table `cols` wide.
    pub const fn reading_index(self, cols: usize) -> usize {
        self.col + self.row * cols
    }
}

/// The cells covered by a span anchored at some coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Footprint {
    /// Top-left anchor.
    pub coords: GridCoords,
    /// Extent from the anchor.
    pub span: GridSpan,
}

impl Footprint {
    /// Create a footprint from an anchor and a span.
    pub const fn new(coords: GridCoords, span: GridSpan) -> Self {
        Self { coords, span }
    }

    /// One past the last covered row.
    pub const fn row_end(&self) -> usize {
        self.coords.row + self.span.row_span
    }

    /// One past the last covered column.
    pub const fn col_end(&self) -> usize {
        self.coords.col + self.span.col_span
    }

    /// Whether the footprint covers the cell at `row`, `col`.
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.coords.row
            && row < self.row_end()
            && col >= self.coords.col
            && col < self.col_end()
    }
}

/// An item to be laid out: an opaque payload with a key and a span.
#[derive(Clone, Debug)]
pub struct Tile<T> {
    /// Identity of the tile.
    pub key: TileKey,
    /// Caller-owned payload.
    pub data: T,
    /// Footprint size.
    pub span: GridSpan,
}

impl<T> Tile<T> {
    /// Create a tile.
    pub const fn new(key: TileKey, data: T, span: GridSpan) -> Self {
        Self { key, data, span }
    }

    /// Anchor this tile at `coords`.
    pub fn placed_at(self, coords: GridCoords) -> PositionedTile<T> {
        PositionedTile { tile: self, coords }
    }
}

/// A tile anchored in a table.
#[derive(Clone, Debug)]
pub struct PositionedTile<T> {
    /// The tile itself.
    pub tile: Tile<T>,
    /// Where its top-left cell sits.
    pub coords: GridCoords,
}

impl<T> PositionedTile<T> {
    /// Identity of the tile.
    pub fn key(&self) -> TileKey {
        self.tile.key
    }

    /// Caller payload.
    pub fn data(&self) -> &T {
        &self.tile.data
    }

    /// Footprint size.
    pub fn span(&self) -> GridSpan {
        self.tile.span
    }

    /// Anchor row.
    pub fn row(&self) -> usize {
        self.coords.row
    }

    /// Anchor column.
    pub fn col(&self) -> usize {
        self.coords.col
    }

    /// Cells covered by this tile.
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.coords, self.tile.span)
    }
}

impl<T: Clone> PositionedTile<T> {
    /// Copy of this tile re-anchored at `coords`.
    pub fn moved_to(&self, coords: GridCoords) -> Self {
        Self {
            tile: self.tile.clone(),
            coords,
        }
    }
}

/// Shared handle to a positioned tile.
///
/// Every cell covered by a placed tile holds a clone of the same handle.
pub type TileRef<T> = Arc<PositionedTile<T>>;

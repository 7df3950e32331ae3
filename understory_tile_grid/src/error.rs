// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use crate::types::TileKey;

/// A grid geometry or tile list that cannot be laid out.
///
/// These are rejected up front; packing itself never fails.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The grid has no columns.
    #[error("column count must be at least 1")]
    ZeroColumns,

    /// More columns than [`MAX_COLUMNS`](crate::MAX_COLUMNS).
    #[error("column count {columns} exceeds the limit of {max}")]
    TooManyColumns {
        /// Requested column count.
        columns: usize,
        /// The limit.
        max: usize,
    },

    /// Cell width or height is zero, negative, or not finite.
    #[error("cell size must be finite and positive, got {width}x{height}")]
    InvalidCellSize {
        /// Requested cell width in pixels.
        width: f64,
        /// Requested cell height in pixels.
        height: f64,
    },

    /// The active border is negative or not finite.
    #[error("active border size must be finite and non-negative, got {0}")]
    InvalidBorder(f64),

    /// Width/height ratio is zero, negative, or not finite.
    #[error("tile ratio must be finite and positive, got {0}")]
    InvalidRatio(f64),

    /// A forced tile width leaves no room for a single column.
    #[error("container width {container_width} cannot fit a tile {tile_width} wide")]
    ContainerTooNarrow {
        /// Measured container width in pixels.
        container_width: f64,
        /// Forced tile width in pixels.
        tile_width: f64,
    },

    /// A tile has a zero row or column span.
    #[error("tile {0:?} has an empty span")]
    ZeroSpan(TileKey),

    /// Two tiles in one list share a key.
    #[error("tile key {0:?} appears more than once")]
    DuplicateKey(TileKey),

    /// A key allocator has handed out every key it can.
    #[error("no tile keys left to allocate")]
    KeysExhausted,

    /// A tile is wider than the grid.
    #[error("tile {key:?} spans {col_span} columns but the grid has {columns}")]
    SpanExceedsColumns {
        /// Offending tile.
        key: TileKey,
        /// Its column span.
        col_span: usize,
        /// Grid width.
        columns: usize,
    },
}

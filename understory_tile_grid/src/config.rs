// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid geometry shared by packing, hit testing, and drag strategies.

use alloc::collections::BTreeSet;

use crate::error::ConfigError;
use crate::types::{GridSpan, Tile};

/// Width of the edge hot zone when none is given, in pixels.
pub const DEFAULT_ACTIVE_BORDER_SIZE: f64 = 24.0;

/// Widest grid [`GridConfig::new`] accepts.
///
/// Packing allocates `rows * columns` cells, so an absurd column count from a
/// degenerate forced tile width must be refused before it reaches a table.
pub const MAX_COLUMNS: usize = 1024;

/// Pixel geometry of a grid and its column count.
///
/// Immutable for the duration of a drag session. Construct through
/// [`GridConfig::new`] so degenerate geometry is rejected before any
/// packing runs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridConfig {
    element_width: f64,
    element_height: f64,
    active_border_size: f64,
    columns: usize,
}

impl GridConfig {
    /// Validate and build a grid configuration.
    pub fn new(
        element_width: f64,
        element_height: f64,
        active_border_size: f64,
        columns: usize,
    ) -> Result<Self, ConfigError> {
        if columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if columns > MAX_COLUMNS {
            return Err(ConfigError::TooManyColumns {
                columns,
                max: MAX_COLUMNS,
            });
        }
        let valid_size = |v: f64| v.is_finite() && v > 0.0;
        if !valid_size(element_width) || !valid_size(element_height) {
            return Err(ConfigError::InvalidCellSize {
                width: element_width,
                height: element_height,
            });
        }
        if !active_border_size.is_finite() || active_border_size < 0.0 {
            return Err(ConfigError::InvalidBorder(active_border_size));
        }
        Ok(Self {
            element_width,
            element_height,
            active_border_size,
            columns,
        })
    }

    /// Width of a single cell in pixels.
    pub fn element_width(&self) -> f64 {
        self.element_width
    }

    /// Height of a single cell in pixels.
    pub fn element_height(&self) -> f64 {
        self.element_height
    }

    /// Width of the edge hot zone in pixels.
    pub fn active_border_size(&self) -> f64 {
        self.active_border_size
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Check that a span can be placed in this grid.
    pub fn check_span<T>(&self, tile: &Tile<T>) -> Result<GridSpan, ConfigError> {
        let span = tile.span;
        if span.row_span == 0 || span.col_span == 0 {
            return Err(ConfigError::ZeroSpan(tile.key));
        }
        if span.col_span > self.columns {
            return Err(ConfigError::SpanExceedsColumns {
                key: tile.key,
                col_span: span.col_span,
                columns: self.columns,
            });
        }
        Ok(span)
    }

    /// Check every span in `tiles` and that no key repeats.
    pub fn check_tiles<T>(&self, tiles: &[Tile<T>]) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        for tile in tiles {
            self.check_span(tile)?;
            if !seen.insert(tile.key) {
                return Err(ConfigError::DuplicateKey(tile.key));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileKey;

    #[test]
    fn accepts_sane_geometry() {
        let c = GridConfig::new(100.0, 80.0, DEFAULT_ACTIVE_BORDER_SIZE, 4).unwrap();
        assert_eq!(c.columns(), 4);
        assert_eq!(c.element_width(), 100.0);
        assert_eq!(c.element_height(), 80.0);
        assert_eq!(c.active_border_size(), 24.0);
    }

    #[test]
    fn rejects_zero_columns() {
        assert_eq!(
            GridConfig::new(100.0, 100.0, 24.0, 0),
            Err(ConfigError::ZeroColumns)
        );
    }

    #[test]
    fn rejects_absurd_column_counts() {
        assert!(GridConfig::new(1.0, 1.0, 0.0, MAX_COLUMNS).is_ok());
        assert_eq!(
            GridConfig::new(1.0, 1.0, 0.0, MAX_COLUMNS + 1),
            Err(ConfigError::TooManyColumns {
                columns: MAX_COLUMNS + 1,
                max: MAX_COLUMNS
            })
        );
    }

    #[test]
    fn rejects_bad_cell_sizes() {
        assert!(matches!(
            GridConfig::new(0.0, 100.0, 24.0, 2),
            Err(ConfigError::InvalidCellSize { .. })
        ));
        assert!(matches!(
            GridConfig::new(100.0, f64::NAN, 24.0, 2),
            Err(ConfigError::InvalidCellSize { .. })
        ));
        assert!(matches!(
            GridConfig::new(100.0, 100.0, -1.0, 2),
            Err(ConfigError::InvalidBorder(_))
        ));
    }

    #[test]
    fn zero_border_is_allowed() {
        assert!(GridConfig::new(10.0, 10.0, 0.0, 1).is_ok());
    }

    #[test]
    fn span_checks() {
        let c = GridConfig::new(100.0, 100.0, 24.0, 3).unwrap();
        let ok = Tile::new(TileKey(1), (), GridSpan::new(2, 3));
        assert_eq!(c.check_span(&ok), Ok(GridSpan::new(2, 3)));

        let wide = Tile::new(TileKey(2), (), GridSpan::new(1, 4));
        assert_eq!(
            c.check_span(&wide),
            Err(ConfigError::SpanExceedsColumns {
                key: TileKey(2),
                col_span: 4,
                columns: 3
            })
        );

        let empty = Tile::new(TileKey(3), (), GridSpan::new(0, 1));
        assert_eq!(c.check_span(&empty), Err(ConfigError::ZeroSpan(TileKey(3))));
    }

    #[test]
    fn tile_list_checks() {
        let c = GridConfig::new(100.0, 100.0, 24.0, 2).unwrap();
        let a = Tile::new(TileKey(0), (), GridSpan::UNIT);
        let b = Tile::new(TileKey(1), (), GridSpan::new(2, 2));
        assert_eq!(c.check_tiles(&[a.clone(), b]), Ok(()));
        assert_eq!(
            c.check_tiles(&[a.clone(), a]),
            Err(ConfigError::DuplicateKey(TileKey(0)))
        );
        let wide = Tile::new(TileKey(2), (), GridSpan::new(1, 3));
        assert!(matches!(
            c.check_tiles(&[wide]),
            Err(ConfigError::SpanExceedsColumns { .. })
        ));
    }
}

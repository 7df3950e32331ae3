// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-facing layout configuration.
//!
//! A [`LayoutConfig`] describes how cell geometry follows the container: a
//! fixed column count stretching cells to fill the width, or a forced cell
//! width deriving the column count. [`LayoutConfig::resolve`] turns it into a
//! validated [`GridConfig`] for one measured container width.

use understory_tile_grid::table::floor_div;
use understory_tile_grid::{ConfigError, DEFAULT_ACTIVE_BORDER_SIZE, GridConfig};

use crate::strategy::StrategyKind;

/// How the column count is chosen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColumnMode {
    /// Exactly this many columns; cells share the container width.
    Fixed(usize),
    /// Cells are this many pixels wide; as many columns as fit.
    ForceTileWidth(f64),
}

impl Default for ColumnMode {
    fn default() -> Self {
        Self::Fixed(4)
    }
}

/// How the cell height is chosen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TileHeight {
    /// Width divided by height.
    Ratio(f64),
    /// Fixed height in pixels.
    Force(f64),
}

impl Default for TileHeight {
    fn default() -> Self {
        Self::Ratio(1.0)
    }
}

/// Layout options supplied by the caller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Column policy.
    pub columns: ColumnMode,
    /// Cell height policy.
    pub tile_height: TileHeight,
    /// Width of the edge hot zone in pixels.
    pub active_border_size: f64,
    /// Reordering behavior while dragging.
    pub strategy: StrategyKind,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: ColumnMode::default(),
            tile_height: TileHeight::default(),
            active_border_size: DEFAULT_ACTIVE_BORDER_SIZE,
            strategy: StrategyKind::default(),
        }
    }
}

impl LayoutConfig {
    /// Derive the grid geometry for a container `container_width` pixels wide.
    pub fn resolve(&self, container_width: f64) -> Result<GridConfig, ConfigError> {
        let (columns, width) = match self.columns {
            ColumnMode::Fixed(0) => return Err(ConfigError::ZeroColumns),
            ColumnMode::Fixed(n) => {
                #[allow(
                    clippy::cast_precision_loss,
                    reason = "column counts are tiny."
                )]
                let width = container_width / n as f64;
                (n, width)
            }
            ColumnMode::ForceTileWidth(w) => {
                if !(w.is_finite() && w > 0.0) {
                    return Err(ConfigError::InvalidCellSize {
                        width: w,
                        height: self.height_for(w)?,
                    });
                }
                let fit = floor_div(container_width, w);
                if fit <= 0 {
                    return Err(ConfigError::ContainerTooNarrow {
                        container_width,
                        tile_width: w,
                    });
                }
                (fit.unsigned_abs(), w)
            }
        };
        let height = self.height_for(width)?;
        GridConfig::new(width, height, self.active_border_size, columns)
    }

    fn height_for(&self, width: f64) -> Result<f64, ConfigError> {
        match self.tile_height {
            TileHeight::Force(h) => Ok(h),
            TileHeight::Ratio(r) if r.is_finite() && r > 0.0 => Ok(width / r),
            TileHeight::Ratio(r) => Err(ConfigError::InvalidRatio(r)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_columns_share_the_width() {
        let grid = LayoutConfig::default().resolve(400.0).unwrap();
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.element_width(), 100.0);
        assert_eq!(grid.element_height(), 100.0);
        assert_eq!(grid.active_border_size(), DEFAULT_ACTIVE_BORDER_SIZE);
    }

    #[test]
    fn forced_width_derives_columns() {
        let cfg = LayoutConfig {
            columns: ColumnMode::ForceTileWidth(120.0),
            tile_height: TileHeight::Ratio(2.0),
            ..Default::default()
        };
        let grid = cfg.resolve(500.0).unwrap();
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.element_width(), 120.0);
        assert_eq!(grid.element_height(), 60.0);
    }

    #[test]
    fn forced_height_wins_over_ratio() {
        let cfg = LayoutConfig {
            tile_height: TileHeight::Force(30.0),
            ..Default::default()
        };
        assert_eq!(cfg.resolve(200.0).unwrap().element_height(), 30.0);
    }

    #[test]
    fn tiny_forced_width_is_rejected() {
        let cfg = LayoutConfig {
            columns: ColumnMode::ForceTileWidth(1e-300),
            ..Default::default()
        };
        assert!(matches!(
            cfg.resolve(400.0),
            Err(ConfigError::TooManyColumns { .. })
        ));
        // A huge fixed count hits the same limit.
        let cfg = LayoutConfig {
            columns: ColumnMode::Fixed(usize::MAX),
            ..Default::default()
        };
        assert!(matches!(
            cfg.resolve(400.0),
            Err(ConfigError::TooManyColumns { .. })
        ));
    }

    #[test]
    fn narrow_container_is_rejected() {
        let cfg = LayoutConfig {
            columns: ColumnMode::ForceTileWidth(120.0),
            ..Default::default()
        };
        assert_eq!(
            cfg.resolve(100.0),
            Err(ConfigError::ContainerTooNarrow {
                container_width: 100.0,
                tile_width: 120.0
            })
        );
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        let zero = LayoutConfig {
            columns: ColumnMode::Fixed(0),
            ..Default::default()
        };
        assert_eq!(zero.resolve(400.0), Err(ConfigError::ZeroColumns));

        let ratio = LayoutConfig {
            tile_height: TileHeight::Ratio(0.0),
            ..Default::default()
        };
        assert_eq!(ratio.resolve(400.0), Err(ConfigError::InvalidRatio(0.0)));

        // An unmeasured container yields zero-width cells.
        assert!(matches!(
            LayoutConfig::default().resolve(0.0),
            Err(ConfigError::InvalidCellSize { .. })
        ));
    }
}

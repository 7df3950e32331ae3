// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangular tables of optional cell values.
//!
//! A [`Table`] is a copy-on-write value: [`Table::place`] returns a new table
//! and leaves its input untouched, so speculative placements can be probed
//! against a table that is still in use elsewhere.
//!
//! Cells are stored row-major in a single vector.

use alloc::vec::Vec;

use crate::config::GridConfig;
use crate::types::{Footprint, GridCoords, GridSpan};

/// Cell contents that can be vacant.
///
/// Vacancy is what [`Table::fits`] and [`Table::find_first_fitting_position`]
/// look for.
pub trait CellValue: Clone {
    /// True when nothing occupies the cell.
    fn is_vacant(&self) -> bool;
}

impl CellValue for bool {
    #[inline]
    fn is_vacant(&self) -> bool {
        !*self
    }
}

impl<V: Clone> CellValue for Option<V> {
    #[inline]
    fn is_vacant(&self) -> bool {
        self.is_none()
    }
}

/// Row and column counts of a table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct TableSize {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

/// A `rows × cols` grid of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table<C> {
    rows: usize,
    cols: usize,
    cells: Vec<C>,
}

impl<C: Clone> Table<C> {
    /// Allocate a `rows × cols` table with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: C) -> Self {
        Self {
            rows,
            cols,
            cells: alloc::vec![fill; rows * cols],
        }
    }

    /// Copy of this table with `extra` rows of `fill` appended.
    pub fn with_extra_rows(&self, extra: usize, fill: C) -> Self {
        let mut cells = self.cells.clone();
        cells.resize(cells.len() + extra * self.cols, fill);
        Self {
            rows: self.rows + extra,
            cols: self.cols,
            cells,
        }
    }

    /// New table with every cell of `footprint` set to `value`.
    ///
    /// Cells outside the table are skipped; check with [`Table::fits`] first
    /// when the footprint must land whole.
    #[must_use]
    pub fn place(&self, footprint: &Footprint, value: C) -> Self {
        let mut next = self.clone();
        next.place_mut(footprint, value);
        next
    }

    /// Set every cell of `footprint` to `value` in place.
    ///
    /// For scratch tables owned by the caller; shared tables go through
    /// [`Table::place`].
    pub fn place_mut(&mut self, footprint: &Footprint, value: C) {
        debug_assert!(
            footprint.row_end() <= self.rows && footprint.col_end() <= self.cols,
            "placement {footprint:?} exceeds a {}x{} table",
            self.rows,
            self.cols
        );
        for row in footprint.coords.row..footprint.row_end().min(self.rows) {
            for col in footprint.coords.col..footprint.col_end().min(self.cols) {
                self.cells[row * self.cols + col] = value.clone();
            }
        }
    }
}

impl<C> Table<C> {
    /// An empty `0 × 0` table.
    pub const fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }

    /// Row and column counts.
    pub fn size(&self) -> TableSize {
        TableSize {
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `row`, `col`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&C> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// The cell at `coords`, or `None` when out of bounds.
    pub fn at(&self, coords: GridCoords) -> Option<&C> {
        self.get(coords.row, coords.col)
    }

    /// The cells of one row.
    pub fn row(&self, row: usize) -> &[C] {
        let start = (row * self.cols).min(self.cells.len());
        let end = ((row + 1) * self.cols).min(self.cells.len());
        &self.cells[start..end]
    }

    /// Iterate over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[C]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Clamp a possibly out-of-range location into the table.
    ///
    /// Both axes clamp into `[0, n - 1]`; an empty axis clamps to `0`.
    pub fn trim_location(&self, row: isize, col: isize) -> GridCoords {
        GridCoords {
            row: clamp_index(row, self.rows),
            col: clamp_index(col, self.cols),
        }
    }

    /// Map a pixel position to the clamped cell underneath it.
    pub fn point_to_location(&self, x: f64, y: f64, config: &GridConfig) -> GridCoords {
        let col = floor_div(x, config.element_width());
        let row = floor_div(y, config.element_height());
        self.trim_location(row, col)
    }
}

impl<C: CellValue> Table<C> {
    /// True if every cell of `footprint` is inside the table and vacant.
    pub fn fits(&self, footprint: &Footprint) -> bool {
        if footprint.row_end() > self.rows || footprint.col_end() > self.cols {
            return false;
        }
        (footprint.coords.row..footprint.row_end()).all(|row| {
            (footprint.coords.col..footprint.col_end())
                .all(|col| self.cells[row * self.cols + col].is_vacant())
        })
    }

    /// First anchor, scanning rows then columns, where `span` fits.
    ///
    /// This order is the packing tie-break: earlier tiles claim the
    /// top-left-most slots.
    pub fn find_first_fitting_position(&self, span: GridSpan) -> Option<GridCoords> {
        if span.row_span > self.rows || span.col_span > self.cols {
            return None;
        }
        for row in 0..=self.rows - span.row_span {
            for col in 0..=self.cols - span.col_span {
                let coords = GridCoords::new(row, col);
                if self.fits(&Footprint::new(coords, span)) {
                    return Some(coords);
                }
            }
        }
        None
    }

    /// True if every cell of `row` is vacant.
    pub fn is_empty_row(&self, row: usize) -> bool {
        self.row(row).iter().all(CellValue::is_vacant)
    }

    /// Drop fully vacant rows from the bottom of the table.
    #[must_use]
    pub fn trim_trailing_rows(mut self) -> Self {
        while self.rows > 0 && self.is_empty_row(self.rows - 1) {
            self.rows -= 1;
            self.cells.truncate(self.rows * self.cols);
        }
        self
    }
}

/// Floor of `v / cell` as a signed cell index.
///
/// Works without `std` float intrinsics.
pub fn floor_div(v: f64, cell: f64) -> isize {
    debug_assert!(cell > 0.0, "cell sizes must be positive");
    let q = v / cell;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "pixel coordinates are far inside isize range; the cast truncates toward zero and is corrected below."
    )]
    let i = q as isize;
    if (i as f64) > q { i - 1 } else { i }
}

fn clamp_index(v: isize, len: usize) -> usize {
    if v <= 0 || len == 0 {
        0
    } else {
        v.unsigned_abs().min(len - 1)
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! First-fit packing of tile lists into tables, and flattening back.
//!
//! ## Packing
//!
//! [`tiles_list_to_table`] walks the input in order and anchors each tile at
//! the first row-major slot where it fits. The result depends only on the
//! input order and spans, so equal inputs always produce equal tables.
//! Tiles that fit nowhere (for example, wider than the grid) are left out.
//!
//! ## Flattening
//!
//! [`intercept_tiles`] and [`table_to_tiles_list`] collect the distinct tiles
//! touched by a rectangle, sorted in reading order (`col + row * cols`).
//! This is the canonical order whenever a table becomes a sequence again.

use alloc::collections::BTreeSet;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::table::Table;
use crate::types::{GridCoords, PositionedTile, Tile, TileRef};

/// A table whose cells share handles to the tiles covering them.
pub type TilesTable<T> = Table<Option<TileRef<T>>>;

/// Pack `tiles` into a table `columns` wide.
///
/// The working table starts `sum(row_span)` rows tall, which is enough for
/// any input, and vacant trailing rows are trimmed at the end.
pub fn tiles_list_to_table<'a, T, I>(tiles: I, columns: usize) -> TilesTable<T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a Tile<T>>,
{
    let tiles: Vec<&Tile<T>> = tiles.into_iter().collect();
    let max_rows = tiles.iter().map(|t| t.span.row_span).sum();
    let mut table: TilesTable<T> = Table::new(max_rows, columns, None);

    for tile in tiles {
        if tile.span.row_span == 0 || tile.span.col_span == 0 {
            log::debug!("tile {:?} has an empty span; not placed", tile.key);
            continue;
        }
        let Some(coords) = table.find_first_fitting_position(tile.span) else {
            log::debug!(
                "tile {:?} ({:?}) does not fit in {} columns; not placed",
                tile.key,
                tile.span,
                columns
            );
            continue;
        };
        let placed: TileRef<T> = Arc::new(tile.clone().placed_at(coords));
        let footprint = placed.footprint();
        table.place_mut(&footprint, Some(placed));
    }

    table.trim_trailing_rows()
}

/// Distinct tiles touched by the `row_span × col_span` rectangle at
/// `start_row`, `start_col`, in reading order.
///
/// Parts of the rectangle outside the table are ignored.
pub fn intercept_tiles<T>(
    table: &TilesTable<T>,
    start_row: usize,
    start_col: usize,
    row_span: usize,
    col_span: usize,
) -> Vec<TileRef<T>> {
    let cols = table.cols();
    let row_end = (start_row + row_span).min(table.rows());
    let col_end = (start_col + col_span).min(cols);

    let mut seen = BTreeSet::new();
    let mut found: Vec<TileRef<T>> = Vec::new();
    for row in start_row..row_end {
        for col in start_col..col_end {
            if let Some(Some(cell)) = table.get(row, col)
                && seen.insert(cell.key())
            {
                found.push(Arc::clone(cell));
            }
        }
    }

    found.sort_by_key(|t| t.coords.reading_index(cols));
    found
}

/// Every tile in `table`, once each, in reading order.
pub fn table_to_tiles_list<T>(table: &TilesTable<T>) -> Vec<TileRef<T>> {
    intercept_tiles(table, 0, 0, table.rows(), table.cols())
}

/// One past the bottom row reached by any of `tiles`.
pub fn positioned_tiles_max_rows<T>(tiles: &[TileRef<T>]) -> usize {
    tiles
        .iter()
        .map(|t| t.footprint().row_end())
        .max()
        .unwrap_or(0)
}

/// True if two of `tiles` claim the same cell, or one leaves the grid.
///
/// A tile reaching past `columns` counts as an overlap since it cannot be
/// represented in a table of that width.
pub fn check_overlap<T>(tiles: &[TileRef<T>], columns: usize) -> bool {
    let rows = positioned_tiles_max_rows(tiles);
    let mut claimed = Table::new(rows, columns, false);
    for tile in tiles {
        let footprint = tile.footprint();
        if footprint.col_end() > columns || !claimed.fits(&footprint) {
            return true;
        }
        claimed.place_mut(&footprint, true);
    }
    false
}

/// Strip anchors, keeping order: the sequence form of a positioned list.
pub fn unposition<T: Clone>(tiles: &[TileRef<T>]) -> Vec<Tile<T>> {
    tiles.iter().map(|t| t.tile.clone()).collect()
}

/// Sort positioned tiles into reading order for a grid `columns` wide.
///
/// The sort is stable, so tiles sharing an anchor keep their relative order.
pub fn sort_reading_order<T>(tiles: &mut [TileRef<T>], columns: usize) {
    tiles.sort_by_key(|t| t.coords.reading_index(columns));
}

/// Wrap a tile placed at `coords` in a fresh shared handle.
pub fn positioned<T>(tile: Tile<T>, coords: GridCoords) -> TileRef<T> {
    Arc::new(PositionedTile { tile, coords })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GridSpan, TileKey};
    use alloc::vec;

    fn tile(key: u32, rows: usize, cols: usize) -> Tile<char> {
        let name = char::from_u32(u32::from('A') + key).unwrap_or('?');
        Tile::new(TileKey(key), name, GridSpan::new(rows, cols))
    }

    fn anchor_of(list: &[TileRef<char>], key: u32) -> GridCoords {
        list.iter().find(|t| t.key() == TileKey(key)).unwrap().coords
    }

    #[test]
    fn mixed_spans_pack_first_fit() {
        // A(1x1), B(1x1), C(2x2), D(1x1) on 4 columns.
        let tiles = vec![tile(0, 1, 1), tile(1, 1, 1), tile(2, 2, 2), tile(3, 1, 1)];
        let table = tiles_list_to_table(&tiles, 4);
        assert_eq!(table.rows(), 2);

        let list = table_to_tiles_list(&table);
        assert_eq!(anchor_of(&list, 0), GridCoords::new(0, 0));
        assert_eq!(anchor_of(&list, 1), GridCoords::new(0, 1));
        assert_eq!(anchor_of(&list, 2), GridCoords::new(0, 2));
        assert_eq!(anchor_of(&list, 3), GridCoords::new(1, 0));

        let keys: Vec<_> = list.iter().map(|t| t.key().0).collect();
        assert_eq!(keys, vec![0, 1, 2, 3]);
    }

    #[test]
    fn covered_cells_share_one_handle() {
        let tiles = vec![tile(0, 2, 2)];
        let table = tiles_list_to_table(&tiles, 2);
        let first = table.get(0, 0).cloned().flatten().unwrap();
        for (r, c) in [(0, 1), (1, 0), (1, 1)] {
            let other = table.get(r, c).cloned().flatten().unwrap();
            assert!(Arc::ptr_eq(&first, &other));
        }
    }

    #[test]
    fn later_small_tiles_backfill_gaps() {
        // A wide tile pushes to row 1 and a later unit tile fills row 0.
        let tiles = vec![tile(0, 1, 2), tile(1, 1, 3), tile(2, 1, 1)];
        let table = tiles_list_to_table(&tiles, 3);
        let list = table_to_tiles_list(&table);
        assert_eq!(anchor_of(&list, 0), GridCoords::new(0, 0));
        assert_eq!(anchor_of(&list, 1), GridCoords::new(1, 0));
        assert_eq!(anchor_of(&list, 2), GridCoords::new(0, 2));
        let keys: Vec<_> = list.iter().map(|t| t.key().0).collect();
        assert_eq!(keys, vec![0, 2, 1]);
    }

    #[test]
    fn too_wide_tiles_are_skipped() {
        let tiles = vec![tile(0, 1, 5), tile(1, 1, 1)];
        let table = tiles_list_to_table(&tiles, 2);
        let list = table_to_tiles_list(&table);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].key(), TileKey(1));
    }

    #[test]
    fn empty_input_packs_to_empty_table() {
        let empty: Vec<Tile<char>> = Vec::new();
        let table = tiles_list_to_table(&empty, 3);
        assert_eq!(table.rows(), 0);
        assert!(table_to_tiles_list(&table).is_empty());
    }

    #[test]
    fn intercept_dedups_and_sorts() {
        let tiles = vec![tile(0, 2, 2), tile(1, 1, 1), tile(2, 1, 1)];
        let table = tiles_list_to_table(&tiles, 3);
        // A covers (0..2, 0..2); B at (0, 2); C at (1, 2).
        let hit = intercept_tiles(&table, 0, 1, 2, 2);
        let keys: Vec<_> = hit.iter().map(|t| t.key().0).collect();
        assert_eq!(keys, vec![0, 1, 2]);

        // Rectangles hanging off the table are clipped.
        let hit = intercept_tiles(&table, 1, 2, 5, 5);
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].key(), TileKey(2));
    }

    #[test]
    fn overlap_detection() {
        let a = positioned(tile(0, 2, 2), GridCoords::new(0, 0));
        let b = positioned(tile(1, 1, 1), GridCoords::new(1, 1));
        let c = positioned(tile(2, 1, 1), GridCoords::new(0, 2));
        assert!(check_overlap(&[a.clone(), b], 3));
        assert!(!check_overlap(&[a.clone(), c.clone()], 3));
        // Leaving the grid is also reported.
        assert!(check_overlap(&[c], 2));
        assert_eq!(positioned_tiles_max_rows(&[a]), 2);
    }

    #[test]
    fn packing_round_trips_to_sequence() {
        let tiles = vec![tile(0, 1, 1), tile(1, 2, 1), tile(2, 1, 2)];
        let table = tiles_list_to_table(&tiles, 3);
        let list = table_to_tiles_list(&table);
        let again = tiles_list_to_table(&unposition(&list), 3);
        assert_eq!(
            table_to_tiles_list(&again)
                .iter()
                .map(|t| (t.key(), t.coords))
                .collect::<Vec<_>>(),
            list.iter().map(|t| (t.key(), t.coords)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn reading_order_sort_is_stable() {
        let mut list = vec![
            positioned(tile(0, 1, 1), GridCoords::new(1, 0)),
            positioned(tile(1, 1, 1), GridCoords::new(0, 1)),
            positioned(tile(2, 1, 1), GridCoords::new(0, 1)),
        ];
        sort_reading_order(&mut list, 2);
        let keys: Vec<_> = list.iter().map(|t| t.key().0).collect();
        assert_eq!(keys, vec![1, 2, 0]);
    }
}

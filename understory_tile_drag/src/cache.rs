// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoized packing.

use alloc::vec::Vec;

use understory_tile_grid::{
    GridSpan, Table, Tile, TileKey, TileRef, TilesTable, table_to_tiles_list, tiles_list_to_table,
};

/// A packed table and its tiles in reading order.
#[derive(Clone, Debug)]
pub struct PackedLayout<T> {
    /// The packed table.
    pub table: TilesTable<T>,
    /// Every placed tile once, in reading order.
    pub tiles: Vec<TileRef<T>>,
}

impl<T> PackedLayout<T> {
    /// Layout with no tiles.
    pub fn empty() -> Self {
        Self {
            table: Table::empty(),
            tiles: Vec::new(),
        }
    }
}

/// Repacks only when the keys, spans, or column count change.
///
/// Payloads are not part of the cache key; call [`PackCache::invalidate`]
/// when they change under unchanged keys.
#[derive(Clone, Debug)]
pub struct PackCache<T> {
    input: Vec<(TileKey, GridSpan)>,
    columns: usize,
    layout: Option<PackedLayout<T>>,
    packs: usize,
}

impl<T> Default for PackCache<T> {
    fn default() -> Self {
        Self {
            input: Vec::new(),
            columns: 0,
            layout: None,
            packs: 0,
        }
    }
}

impl<T: Clone> PackCache<T> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The packed layout of `tiles` on `columns` columns.
    pub fn get<'a, I>(&mut self, tiles: I, columns: usize) -> &PackedLayout<T>
    where
        T: 'a,
        I: IntoIterator<Item = &'a Tile<T>>,
    {
        let tiles: Vec<&Tile<T>> = tiles.into_iter().collect();
        let hit = self.layout.is_some()
            && self.columns == columns
            && self.input.len() == tiles.len()
            && self
                .input
                .iter()
                .zip(&tiles)
                .all(|(&(key, span), t)| key == t.key && span == t.span);
        if !hit {
            self.input = tiles.iter().map(|t| (t.key, t.span)).collect();
            self.columns = columns;
            self.packs += 1;
            let table = tiles_list_to_table(tiles, columns);
            let tiles = table_to_tiles_list(&table);
            log::trace!("packed {} tiles into {} rows", tiles.len(), table.rows());
            self.layout = Some(PackedLayout { table, tiles });
        }
        self.layout.get_or_insert_with(PackedLayout::empty)
    }

    /// Forget the cached layout.
    pub fn invalidate(&mut self) {
        self.layout = None;
    }

    /// Number of times a layout was actually packed.
    pub fn pack_count(&self) -> usize {
        self.packs
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable key allocation for caller payloads.

use alloc::collections::BTreeMap;
use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::error::ConfigError;
use crate::types::{GridSpan, Tile, TileKey};

/// Allocates a [`TileKey`] once per distinct caller identity.
///
/// The identity `I` is whatever the caller uses to recognize a payload
/// across updates (an id string, a database key, ...). A payload seen
/// before keeps its key; a new one gets the next unused key.
/// Keys are never handed out twice by the same allocator, even after the
/// identity they belonged to is forgotten, so one allocator hands out at
/// most `u32::MAX` keys.
#[derive(Clone, Debug)]
pub struct TileKeys<I: Ord> {
    next: u32,
    assigned: BTreeMap<I, TileKey>,
}

impl<I: Ord> Default for TileKeys<I> {
    fn default() -> Self {
        Self {
            next: 0,
            assigned: BTreeMap::new(),
        }
    }
}

impl<I: Ord + Clone> TileKeys<I> {
    /// Create an empty allocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Key for `id`, allocating one on first sight.
    ///
    /// Fails with [`ConfigError::KeysExhausted`] once every key is spent.
    pub fn key_for(&mut self, id: &I) -> Result<TileKey, ConfigError> {
        if let Some(&key) = self.assigned.get(id) {
            return Ok(key);
        }
        let key = TileKey(self.next);
        self.next = self.next.checked_add(1).ok_or(ConfigError::KeysExhausted)?;
        self.assigned.insert(id.clone(), key);
        Ok(key)
    }

    /// Key previously assigned to `id`, if any.
    pub fn get(&self, id: &I) -> Option<TileKey> {
        self.assigned.get(id).copied()
    }

    /// Number of identities currently tracked.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// True if no identity is tracked.
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Forget identities for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(&I) -> bool) {
        self.assigned.retain(|id, _| keep(id));
    }

    /// Build a keyed tile list from caller items.
    ///
    /// Identities missing from `items` are forgotten afterwards, so the
    /// allocator tracks exactly the current list.
    pub fn tiles_from<D>(
        &mut self,
        items: impl IntoIterator<Item = D>,
        id_of: impl Fn(&D) -> I,
        span_of: impl Fn(&D) -> GridSpan,
    ) -> Result<Vec<Tile<D>>, ConfigError> {
        let mut live = BTreeSet::new();
        let tiles = items
            .into_iter()
            .map(|item| {
                let id = id_of(&item);
                let key = self.key_for(&id)?;
                live.insert(id);
                let span = span_of(&item);
                Ok(Tile::new(key, item, span))
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.retain(|id| live.contains(id));
        Ok(tiles)
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag session controller.
//!
//! ## Lifecycle
//!
//! - `Idle → Dragging` on the first dragging event: the tile under the
//!   gesture is looked up in the packed layout and the layout is snapshot.
//!   Unknown keys are ignored.
//! - `Dragging → Dragging` on each further dragging event: the strategy
//!   proposes a patch, which is folded into the session.
//! - `Dragging → Idle` on release: a drop onto an accepting target wins and
//!   removes the dropped tile; otherwise the strategy's committed sequence
//!   is adopted if it differs from the current one.
//!
//! Nothing outside the session changes before release, so abandoning a
//! gesture needs no rollback.

use alloc::vec::Vec;
use core::fmt;

use understory_tile_grid::pack::unposition;
use understory_tile_grid::{
    ConfigError, GridConfig, PositionedTile, Tile, TileKey, TileRef, TilesTable,
};

use crate::cache::{PackCache, PackedLayout};
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::gesture::GestureEvent;
use crate::render::{RenderTile, project};
use crate::state::{DragSession, DragState};
use crate::strategy::{MoveContext, Strategy, StrategyKind};

/// Callbacks from a [`TileLayout`] to its owner.
///
/// All methods have defaults: nothing is droppable and commits are ignored.
pub trait TileDelegate<T> {
    /// Whether `source` may be dropped onto `target`.
    fn accepts_drop(&self, source: &T, target: &T) -> bool {
        let _ = (source, target);
        false
    }

    /// `source` was dropped onto `target`.
    ///
    /// The layout has already removed `source` from its tiles.
    fn on_tile_drop(&mut self, source: &T, target: &T) {
        let _ = (source, target);
    }

    /// The tile sequence changed. `tiles` is the new order.
    fn on_reorder_tiles(&mut self, tiles: &[Tile<T>]) {
        let _ = tiles;
    }
}

/// A delegate that accepts no drops and ignores commits.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDelegate;

impl<T> TileDelegate<T> for NoDelegate {}

/// What a gesture event did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// Nothing: disabled, tap, stale key, or no session to act on.
    Ignored,
    /// A session began.
    Started,
    /// The session moved; `accepted` is false when the strategy proposed no change.
    Moved {
        /// Whether the strategy returned a patch.
        accepted: bool,
    },
    /// The dragged tile was dropped onto an accepting target.
    Dropped {
        /// Dragged tile.
        source: TileKey,
        /// Drop target.
        target: TileKey,
    },
    /// A new tile order was committed.
    Reordered,
    /// The session ended with nothing to commit.
    Released,
}

/// Draggable tile layout: packing, drag state, and render projection.
pub struct TileLayout<T, D = NoDelegate> {
    config: GridConfig,
    strategy: StrategyKind,
    enabled: bool,
    tiles: Vec<Tile<T>>,
    state: DragState<T>,
    cache: PackCache<T>,
    delegate: D,
}

impl<T, D> fmt::Debug for TileLayout<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileLayout")
            .field("config", &self.config)
            .field("strategy", &self.strategy)
            .field("enabled", &self.enabled)
            .field("tiles", &self.tiles.len())
            .field("dragging", &self.state.is_dragging())
            .finish_non_exhaustive()
    }
}

impl<T: Clone, D: TileDelegate<T>> TileLayout<T, D> {
    /// Create an empty, enabled layout.
    pub fn new(config: GridConfig, strategy: StrategyKind, delegate: D) -> Self {
        Self {
            config,
            strategy,
            enabled: true,
            tiles: Vec::new(),
            state: DragState::Idle,
            cache: PackCache::new(),
            delegate,
        }
    }

    /// Create a layout for a container `container_width` pixels wide.
    pub fn from_layout_config(
        layout: &LayoutConfig,
        container_width: f64,
        delegate: D,
    ) -> Result<Self, LayoutError> {
        let config = layout.resolve(container_width)?;
        Ok(Self::new(config, layout.strategy, delegate))
    }

    /// Replace the tile list, ending any session.
    ///
    /// Rejects empty spans, spans wider than the grid, and repeated keys.
    pub fn set_tiles(&mut self, tiles: Vec<Tile<T>>) -> Result<(), ConfigError> {
        self.config.check_tiles(&tiles)?;
        self.tiles = tiles;
        self.cache.invalidate();
        self.cancel();
        Ok(())
    }

    /// Replace the grid geometry, ending any session.
    pub fn set_config(&mut self, config: GridConfig) -> Result<(), ConfigError> {
        config.check_tiles(&self.tiles)?;
        self.config = config;
        self.cancel();
        Ok(())
    }

    /// Select the reordering strategy, ending any session.
    pub fn set_strategy(&mut self, strategy: StrategyKind) {
        self.strategy = strategy;
        self.cancel();
    }

    /// Enable or disable dragging; disabling ends any session.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.cancel();
        }
    }

    /// Abandon the current session without committing.
    pub fn cancel(&mut self) {
        if self.state.is_dragging() {
            log::debug!("drag cancelled");
        }
        self.state = DragState::Idle;
    }

    /// Grid geometry.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Selected strategy.
    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    /// Whether gestures are handled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The committed tile list.
    pub fn tiles(&self) -> &[Tile<T>] {
        &self.tiles
    }

    /// Drag state.
    pub fn state(&self) -> &DragState<T> {
        &self.state
    }

    /// The delegate.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// The delegate, mutably.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// Packed layout of the tiles currently shown: the session's working
    /// sequence while dragging, the committed list otherwise.
    pub fn layout(&mut self) -> &PackedLayout<T> {
        shown_layout(
            &mut self.cache,
            &self.state,
            &self.tiles,
            self.enabled,
            self.config.columns(),
        )
    }

    /// Packed table.
    pub fn table(&mut self) -> &TilesTable<T> {
        &self.layout().table
    }

    /// Packed tiles in reading order.
    pub fn positioned_tiles(&mut self) -> &[TileRef<T>] {
        &self.layout().tiles
    }

    /// Pixel height of the packed table.
    pub fn table_height(&mut self) -> f64 {
        let height = self.config.element_height();
        #[allow(clippy::cast_precision_loss, reason = "row counts are small.")]
        let rows = self.layout().table.rows() as f64;
        rows * height
    }

    /// Render records for every placed tile, sorted by key.
    pub fn render_tiles(&mut self) -> Vec<RenderTile<T>> {
        let layout = shown_layout(
            &mut self.cache,
            &self.state,
            &self.tiles,
            self.enabled,
            self.config.columns(),
        );
        project(&layout.tiles, &self.state, &self.config, self.enabled)
    }

    /// Feed one gesture event through the state machine.
    pub fn handle_gesture(&mut self, event: &GestureEvent) -> DragOutcome {
        if !self.enabled {
            return DragOutcome::Ignored;
        }
        match (self.state.is_dragging(), event.dragging) {
            (false, true) => self.start(event),
            (true, true) => self.drag_move(event),
            (true, false) => self.end(),
            (false, false) => DragOutcome::Ignored,
        }
    }

    fn start(&mut self, event: &GestureEvent) -> DragOutcome {
        if event.tap {
            return DragOutcome::Ignored;
        }
        let layout = self.cache.get(&self.tiles, self.config.columns());
        let Some(tile) = layout.tiles.iter().find(|t| t.key() == event.key) else {
            log::trace!("gesture on unknown tile {:?}", event.key);
            return DragOutcome::Ignored;
        };
        let session = DragSession::begin(
            TileRef::clone(tile),
            event.xy,
            event.movement,
            layout.tiles.clone(),
            &self.config,
        );
        log::debug!(
            "drag start {:?} at {:?} ({})",
            event.key,
            session.start,
            self.strategy
        );
        self.state = DragState::Dragging(session);
        DragOutcome::Started
    }

    fn drag_move(&mut self, event: &GestureEvent) -> DragOutcome {
        let DragState::Dragging(session) = &self.state else {
            return DragOutcome::Ignored;
        };
        let layout = self
            .cache
            .get(session.tiles.iter().map(|t| &t.tile), self.config.columns());
        let delegate = &self.delegate;
        let accepts_drop = |source: &PositionedTile<T>, target: &PositionedTile<T>| {
            delegate.accepts_drop(source.data(), target.data())
        };
        let cx = MoveContext {
            config: &self.config,
            table: &layout.table,
            tiles: &layout.tiles,
            session,
            offset: event.movement,
            accepts_drop: &accepts_drop,
        };
        let patch = self.strategy.on_drag_move(&cx);
        let accepted = patch.is_some();

        if let DragState::Dragging(session) = &mut self.state {
            session.apply(event.movement, patch);
        }
        DragOutcome::Moved { accepted }
    }

    fn end(&mut self) -> DragOutcome {
        let DragState::Dragging(session) = core::mem::take(&mut self.state) else {
            return DragOutcome::Ignored;
        };
        let source = session.dragging_key();

        if session.can_drop()
            && let Some(target) = &session.drop_target
        {
            log::debug!("drop {source:?} onto {:?}", target.key());
            self.tiles.retain(|t| t.key != source);
            self.cache.invalidate();
            self.delegate
                .on_tile_drop(session.dragging_tile.data(), target.data());
            return DragOutcome::Dropped {
                source,
                target: target.key(),
            };
        }

        let Some(committed) = self.strategy.on_drag_end(&session) else {
            log::debug!("drag {source:?} released without a slot");
            return DragOutcome::Released;
        };
        let unchanged = committed.len() == self.tiles.len()
            && committed
                .iter()
                .zip(&self.tiles)
                .all(|(c, t)| c.key() == t.key);
        if unchanged {
            log::debug!("drag {source:?} released in place");
            return DragOutcome::Released;
        }

        self.tiles = unposition(&committed);
        self.cache.invalidate();
        log::debug!("drag {source:?} committed a new order");
        self.delegate.on_reorder_tiles(&self.tiles);
        DragOutcome::Reordered
    }
}

fn shown_layout<'c, T: Clone>(
    cache: &'c mut PackCache<T>,
    state: &DragState<T>,
    tiles: &[Tile<T>],
    enabled: bool,
    columns: usize,
) -> &'c PackedLayout<T> {
    match state {
        DragState::Dragging(session) if enabled => {
            cache.get(session.tiles.iter().map(|t| &t.tile), columns)
        }
        _ => cache.get(tiles, columns),
    }
}

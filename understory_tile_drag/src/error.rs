// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while configuring a tile layout.

use alloc::string::String;

use understory_tile_grid::ConfigError;

/// A layout configuration that cannot be used.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Geometry or tile list rejected by the grid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A strategy selector that names neither strategy.
    #[error("unknown strategy {0:?}, expected \"move\" or \"reorder\"")]
    UnknownStrategy(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn config_errors_pass_through() {
        let e: LayoutError = ConfigError::ZeroColumns.into();
        assert_eq!(format!("{e}"), "column count must be at least 1");
    }

    #[test]
    fn unknown_strategy_display() {
        let e = LayoutError::UnknownStrategy("shuffle".into());
        assert_eq!(
            format!("{e}"),
            "unknown strategy \"shuffle\", expected \"move\" or \"reorder\""
        );
    }
}

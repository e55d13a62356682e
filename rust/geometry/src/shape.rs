// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shape category of a box-shaped part

use crate::config::ClassifierConfig;
use crate::error::Result;
use crate::extents::BoxExtents;
use std::fmt;

/// Coarse shape of a box, derived from the ratios of its extents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShapeCategory {
    /// One dimension dominates (rod, rail, leg)
    Bar,
    /// One dimension is much thinner than the other two (panel, shelf)
    Board,
    /// Nothing extreme
    Block,
}

impl ShapeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeCategory::Bar => "bar",
            ShapeCategory::Board => "board",
            ShapeCategory::Block => "block",
        }
    }
}

impl fmt::Display for ShapeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a box with the default thresholds
pub fn classify(extents: &BoxExtents) -> Result<ShapeCategory> {
    classify_with(extents, &ClassifierConfig::default())
}

/// Classify a box
///
/// Only the sorted extents matter, so any permutation of the same three
/// values gives the same category. The bar check runs before the board check.
pub fn classify_with(extents: &BoxExtents, config: &ClassifierConfig) -> Result<ShapeCategory> {
    extents.validate()?;
    let [small, mid, large] = extents.sorted();

    let category = if large >= mid * config.bar_ratio {
        ShapeCategory::Bar
    } else if mid >= small * config.board_ratio {
        ShapeCategory::Board
    } else {
        ShapeCategory::Block
    };
    Ok(category)
}

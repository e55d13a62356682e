// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tunable thresholds for shape classification and anchor fractions

use crate::error::{Error, Result};

/// A box is a bar when its largest extent is at least this many times its middle one.
pub const DEFAULT_BAR_RATIO: f64 = 3.0;

/// A box is a board when its middle extent is at least this many times its smallest one.
pub const DEFAULT_BOARD_RATIO: f64 = 5.0;

/// Largest denominator tried when approximating an in-face fraction.
pub const DEFAULT_MAX_DENOMINATOR: u32 = 10;

/// Classification thresholds
///
/// `Default` yields the values existing anchors and labels were produced with;
/// changing them changes every label downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ClassifierConfig {
    pub bar_ratio: f64,
    pub board_ratio: f64,
    pub max_denominator: u32,
}

impl ClassifierConfig {
    /// Reject thresholds that would make classification or approximation meaningless
    pub fn validate(&self) -> Result<()> {
        if !self.bar_ratio.is_finite() || self.bar_ratio < 1.0 {
            return Err(Error::InvalidConfig(format!(
                "bar ratio must be >= 1, got {}",
                self.bar_ratio
            )));
        }
        if !self.board_ratio.is_finite() || self.board_ratio < 1.0 {
            return Err(Error::InvalidConfig(format!(
                "board ratio must be >= 1, got {}",
                self.board_ratio
            )));
        }
        if self.max_denominator == 0 {
            return Err(Error::InvalidConfig(
                "max denominator must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            bar_ratio: DEFAULT_BAR_RATIO,
            board_ratio: DEFAULT_BOARD_RATIO,
            max_denominator: DEFAULT_MAX_DENOMINATOR,
        }
    }
}

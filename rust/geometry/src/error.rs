// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while classifying or anchoring a part
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Every extent must be finite and strictly positive.
    #[error("Invalid extents: {width} x {height} x {depth}")]
    InvalidExtents { width: f64, height: f64, depth: f64 },

    #[error("Bounds contain no points")]
    EmptyBounds,

    #[error("Part transform is not invertible")]
    SingularTransform,

    #[error("Invalid classifier config: {0}")]
    InvalidConfig(String),
}

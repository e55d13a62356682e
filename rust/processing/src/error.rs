// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for processing operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Geometry error: {0}")]
    Geometry(#[from] partmark_geometry::Error),

    /// A geometry failure tied to a specific part
    #[error("Part #{id}: {source}")]
    Part {
        id: u32,
        source: partmark_geometry::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn part(id: u32) -> impl FnOnce(partmark_geometry::Error) -> Error {
        move |source| Error::Part { id, source }
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! PartMark Processing
//!
//! Shared labelling pipeline used by the editor bindings: part inputs,
//! batch labelling over rayon, and world-space picks turned into
//! connection endpoints.

pub mod config;
pub mod error;
pub mod labeler;
pub mod part;

pub use config::{Config, DEFAULT_PARALLEL_THRESHOLD};
pub use error::{Error, Result};
pub use labeler::PartLabeler;
pub use part::{ConnectionEndpoint, LabelReport, Part, PartFailure, PartLabel};

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! PartMark Geometry
//!
//! Classification and anchoring for box-shaped furniture parts.
//!
//! Given the extents of a part's box and, for anchoring, a point in the box's
//! local frame (origin at the centroid, axes along width/height/depth):
//!
//! - [`classify`] sorts the part into bar, board or block,
//! - [`resolve_axis`] picks the dominant axis and names its two ends,
//! - [`encode_anchor`] names the nearest face and the point's position on it.
//!
//! ```
//! use partmark_geometry::{classify, encode_anchor, BoxExtents, Point3, ShapeCategory};
//!
//! let leg = BoxExtents::new(0.05, 0.72, 0.05)?;
//! assert_eq!(classify(&leg)?, ShapeCategory::Bar);
//!
//! let cube = BoxExtents::new(2.0, 2.0, 2.0)?;
//! let anchor = encode_anchor(&Point3::new(0.0, 0.0, 1.0), &cube)?;
//! assert_eq!(anchor, "<FrontFace_1/2Height_1/2Width>");
//! # Ok::<(), partmark_geometry::Error>(())
//! ```

pub mod anchor;
pub mod axis;
pub mod config;
pub mod error;
pub mod extents;
pub mod face;
pub mod frame;
pub mod rational;
pub mod shape;
pub mod tiebreak;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, Vector3};

pub use anchor::{encode_anchor, encode_anchor_with, Anchor};
pub use axis::{resolve_axis, Axis, AxisDescriptor, AxisEnd};
pub use config::{
    ClassifierConfig, DEFAULT_BAR_RATIO, DEFAULT_BOARD_RATIO, DEFAULT_MAX_DENOMINATOR,
};
pub use error::{Error, Result};
pub use extents::{BoxBounds, BoxExtents};
pub use face::{nearest_face, FaceType};
pub use frame::LocalFrame;
pub use rational::{approximate, Fraction};
pub use shape::{classify, classify_with, ShapeCategory};

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Face anchors
//!
//! An anchor names the face of a box nearest to a picked point and where on
//! that face the point sits, as two small fractions along the face's tangent
//! axes:
//!
//! ```text
//! <FrontFace_1/2Height_1/3Width>
//! <LeftFace_1/1Height_0/1Depth>
//! <TopFace_3/4Depth_1/2Width>
//! ```
//!
//! Anchors are write-only labels; nothing parses them back into points.

use crate::config::ClassifierConfig;
use crate::error::Result;
use crate::extents::BoxExtents;
use crate::face::{axis_label, nearest_face, FaceType};
use crate::rational::{approximate, Fraction};
use nalgebra::Point3;
use std::fmt;

/// Nearest face and in-face position of a local point
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Anchor {
    pub face: FaceType,
    /// Clamped fraction along the first tangent axis
    pub param1: f64,
    /// Clamped fraction along the second tangent axis
    pub param2: f64,
    pub fraction1: Fraction,
    pub fraction2: Fraction,
}

impl Anchor {
    /// Anchor a point in the box-local frame
    pub fn locate(
        point: &Point3<f64>,
        extents: &BoxExtents,
        config: &ClassifierConfig,
    ) -> Result<Self> {
        extents.validate()?;

        let (face, _) = nearest_face(point, extents);
        let (param1, param2) = face.params(point, extents);

        Ok(Self {
            face,
            param1,
            param2,
            fraction1: approximate(param1, config.max_denominator),
            fraction2: approximate(param2, config.max_denominator),
        })
    }

    /// Anchor string, e.g. `<FrontFace_1/2Height_1/2Width>`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, second) = self.face.tangent_axes();
        write!(
            f,
            "<{}_{}{}_{}{}>",
            self.face,
            self.fraction1,
            axis_label(first),
            self.fraction2,
            axis_label(second)
        )
    }
}

/// Encode a local point as an anchor string with the default denominator limit
pub fn encode_anchor(point: &Point3<f64>, extents: &BoxExtents) -> Result<String> {
    encode_anchor_with(point, extents, &ClassifierConfig::default())
}

pub fn encode_anchor_with(
    point: &Point3<f64>,
    extents: &BoxExtents,
    config: &ClassifierConfig,
) -> Result<String> {
    Anchor::locate(point, extents, config).map(|anchor| anchor.label())
}

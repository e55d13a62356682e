// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Box faces, nearest-face search and in-face parameters

use crate::axis::Axis;
use crate::extents::BoxExtents;
use crate::rational::clamp_unit;
use crate::tiebreak::first_min;
use nalgebra::Point3;
use std::fmt;

/// One of the six faces of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FaceType {
    /// +Z
    FrontFace,
    /// -Z
    BackFace,
    /// -X
    LeftFace,
    /// +X
    RightFace,
    /// -Y
    BottomFace,
    /// +Y
    TopFace,
}

impl FaceType {
    /// Tie-break order for equidistant faces
    pub const ORDER: [FaceType; 6] = [
        FaceType::FrontFace,
        FaceType::BackFace,
        FaceType::LeftFace,
        FaceType::RightFace,
        FaceType::BottomFace,
        FaceType::TopFace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaceType::FrontFace => "FrontFace",
            FaceType::BackFace => "BackFace",
            FaceType::LeftFace => "LeftFace",
            FaceType::RightFace => "RightFace",
            FaceType::BottomFace => "BottomFace",
            FaceType::TopFace => "TopFace",
        }
    }

    /// Axis the face is perpendicular to
    pub fn normal_axis(&self) -> Axis {
        match self {
            FaceType::LeftFace | FaceType::RightFace => Axis::X,
            FaceType::BottomFace | FaceType::TopFace => Axis::Y,
            FaceType::FrontFace | FaceType::BackFace => Axis::Z,
        }
    }

    /// The two tangent axes, in anchor order
    pub fn tangent_axes(&self) -> (Axis, Axis) {
        match self.normal_axis() {
            Axis::Z => (Axis::Y, Axis::X),
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::Z, Axis::X),
        }
    }

    /// Distance from a local point to this face's plane
    pub fn distance(&self, point: &Point3<f64>, extents: &BoxExtents) -> f64 {
        let half = extents.half();
        match self {
            FaceType::FrontFace => (point.z - half.z).abs(),
            FaceType::BackFace => (point.z + half.z).abs(),
            FaceType::LeftFace => (point.x + half.x).abs(),
            FaceType::RightFace => (point.x - half.x).abs(),
            FaceType::BottomFace => (point.y + half.y).abs(),
            FaceType::TopFace => (point.y - half.y).abs(),
        }
    }

    /// Position of a local point within this face, each in `[0, 1]`
    ///
    /// 0 is the negative extreme of the tangent axis, 1 the positive one.
    /// Points off the face are clamped.
    pub fn params(&self, point: &Point3<f64>, extents: &BoxExtents) -> (f64, f64) {
        let (first, second) = self.tangent_axes();
        (
            axis_fraction(first, point, extents),
            axis_fraction(second, point, extents),
        )
    }
}

impl fmt::Display for FaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of an axis inside an anchor label
pub(crate) fn axis_label(axis: Axis) -> &'static str {
    match axis {
        Axis::X => "Width",
        Axis::Y => "Height",
        Axis::Z => "Depth",
    }
}

fn axis_fraction(axis: Axis, point: &Point3<f64>, extents: &BoxExtents) -> f64 {
    let full = axis.extent(extents);
    let coord = match axis {
        Axis::X => point.x,
        Axis::Y => point.y,
        Axis::Z => point.z,
    };
    clamp_unit((coord + full / 2.0) / full)
}

/// Face whose plane is closest to a local point, with its distance
///
/// Extents are assumed valid. Equidistant faces resolve in the order
/// Front, Back, Left, Right, Bottom, Top.
pub fn nearest_face(point: &Point3<f64>, extents: &BoxExtents) -> (FaceType, f64) {
    first_min(
        FaceType::ORDER
            .iter()
            .map(|face| (*face, face.distance(point, extents))),
    )
    .unwrap_or((FaceType::FrontFace, FaceType::FrontFace.distance(point, extents)))
}

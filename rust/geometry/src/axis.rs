// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dominant axis of a part and the names of its two ends

use crate::error::Result;
use crate::extents::BoxExtents;
use crate::tiebreak::first_max;
use nalgebra::Point3;
use std::fmt;

/// Local axis of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Tie-break order when extents are equal
    pub const ORDER: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Extent of a box along this axis
    #[inline]
    pub fn extent(&self, extents: &BoxExtents) -> f64 {
        match self {
            Axis::X => extents.width,
            Axis::Y => extents.height,
            Axis::Z => extents.depth,
        }
    }

    /// Ends at the negative and positive extreme of this axis
    pub fn ends(&self) -> (AxisEnd, AxisEnd) {
        match self {
            Axis::X => (AxisEnd::LeftEnd, AxisEnd::RightEnd),
            Axis::Y => (AxisEnd::BottomEnd, AxisEnd::TopEnd),
            Axis::Z => (AxisEnd::BackEnd, AxisEnd::FrontEnd),
        }
    }

    /// Point on this axis at signed distance `offset` from the center
    fn point_at(&self, offset: f64) -> Point3<f64> {
        match self {
            Axis::X => Point3::new(offset, 0.0, 0.0),
            Axis::Y => Point3::new(0.0, offset, 0.0),
            Axis::Z => Point3::new(0.0, 0.0, offset),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named end of an elongated part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisEnd {
    LeftEnd,
    RightEnd,
    BottomEnd,
    TopEnd,
    BackEnd,
    FrontEnd,
}

impl AxisEnd {
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisEnd::LeftEnd => "LeftEnd",
            AxisEnd::RightEnd => "RightEnd",
            AxisEnd::BottomEnd => "BottomEnd",
            AxisEnd::TopEnd => "TopEnd",
            AxisEnd::BackEnd => "BackEnd",
            AxisEnd::FrontEnd => "FrontEnd",
        }
    }
}

impl fmt::Display for AxisEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dominant axis of a box with its two ends in the box-local frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AxisDescriptor {
    pub axis: Axis,
    /// Extent along `axis`
    pub axis_size: f64,
    /// End at the negative extreme
    pub end1: AxisEnd,
    /// End at the positive extreme
    pub end2: AxisEnd,
    pub end1_coord: Point3<f64>,
    pub end2_coord: Point3<f64>,
}

/// Find the dominant axis of a box
///
/// Width is assumed dominant; height replaces it only when strictly larger,
/// then depth replaces the current pick only when strictly larger than it.
/// A cube therefore resolves to `x`.
pub fn resolve_axis(extents: &BoxExtents) -> Result<AxisDescriptor> {
    extents.validate()?;

    let (axis, axis_size) = first_max(Axis::ORDER.map(|axis| (axis, axis.extent(extents))))
        .unwrap_or((Axis::X, extents.width));
    let (end1, end2) = axis.ends();

    Ok(AxisDescriptor {
        axis,
        axis_size,
        end1,
        end2,
        end1_coord: axis.point_at(-axis_size / 2.0),
        end2_coord: axis.point_at(axis_size / 2.0),
    })
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Box extents and bounds accumulation
//!
//! A part is described by the full side lengths of its axis-aligned box in
//! its own frame, with the origin at the box centroid. `BoxBounds` derives
//! those extents from a flat mesh position buffer.

use crate::error::{Error, Result};
use nalgebra::{Point3, Vector3};

/// Full side lengths of a box centered at the origin of its local frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxExtents {
    /// Extent along local X
    pub width: f64,
    /// Extent along local Y
    pub height: f64,
    /// Extent along local Z
    pub depth: f64,
}

impl BoxExtents {
    /// Create validated extents
    pub fn new(width: f64, height: f64, depth: f64) -> Result<Self> {
        let extents = Self {
            width,
            height,
            depth,
        };
        extents.validate()?;
        Ok(extents)
    }

    /// Check that every extent is finite and strictly positive
    ///
    /// Fields are public, so every operation re-validates before dividing.
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) && ok(self.depth) {
            Ok(())
        } else {
            Err(Error::InvalidExtents {
                width: self.width,
                height: self.height,
                depth: self.depth,
            })
        }
    }

    /// Half extents (distance from the center to each face pair)
    #[inline]
    pub fn half(&self) -> Vector3<f64> {
        Vector3::new(self.width / 2.0, self.height / 2.0, self.depth / 2.0)
    }

    /// Extents as a vector (x = width, y = height, z = depth)
    #[inline]
    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.width, self.height, self.depth)
    }

    /// Extents sorted ascending: `[small, mid, large]`
    pub fn sorted(&self) -> [f64; 3] {
        let mut dims = [self.width, self.height, self.depth];
        dims.sort_by(|a, b| a.total_cmp(b));
        dims
    }

    /// Whether a local point lies inside or on the box
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        let half = self.half();
        point.x.abs() <= half.x && point.y.abs() <= half.y && point.z.abs() <= half.z
    }
}

/// Axis-aligned bounds accumulated from sample points
#[derive(Debug, Clone)]
pub struct BoxBounds {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
    /// Number of points added
    pub sample_count: usize,
}

impl BoxBounds {
    /// Create new bounds initialized to invalid state
    pub fn new() -> Self {
        Self {
            min: Point3::new(f64::MAX, f64::MAX, f64::MAX),
            max: Point3::new(f64::MIN, f64::MIN, f64::MIN),
            sample_count: 0,
        }
    }

    /// Bounds of a flat `[x, y, z, x, y, z, ...]` position buffer
    ///
    /// A trailing partial triple is ignored.
    pub fn from_positions(positions: &[f32]) -> Self {
        let mut bounds = Self::new();
        for chunk in positions.chunks_exact(3) {
            bounds.expand(&Point3::new(
                chunk[0] as f64,
                chunk[1] as f64,
                chunk[2] as f64,
            ));
        }
        bounds
    }

    /// Check if bounds are valid (at least one point added)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.sample_count > 0
    }

    /// Expand bounds to include a point
    #[inline]
    pub fn expand(&mut self, point: &Point3<f64>) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
        self.sample_count += 1;
    }

    /// Center of the bounds
    pub fn centroid(&self) -> Result<Point3<f64>> {
        if !self.is_valid() {
            return Err(Error::EmptyBounds);
        }
        Ok(nalgebra::center(&self.min, &self.max))
    }

    /// Extents of the bounds; flat bounds fail like any other degenerate box
    pub fn extents(&self) -> Result<BoxExtents> {
        if !self.is_valid() {
            return Err(Error::EmptyBounds);
        }
        let size = self.max - self.min;
        BoxExtents::new(size.x, size.y, size.z)
    }

    /// Shift a point in the bounds' frame into the box-local frame
    pub fn to_local(&self, point: &Point3<f64>) -> Result<Point3<f64>> {
        let center = self.centroid()?;
        Ok(Point3::from(point - center))
    }
}

impl Default for BoxBounds {
    fn default() -> Self {
        Self::new()
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Part-local coordinate frames
//!
//! Picks arrive in world space. A part's transform maps its box-local frame
//! (origin at the box centroid, axes along width/height/depth) to world
//! space; anchoring needs the inverse.

use crate::error::{Error, Result};
use nalgebra::{Matrix4, Point3};

/// Box-local frame of a part with its cached inverse
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFrame {
    to_world: Matrix4<f64>,
    to_local: Matrix4<f64>,
}

impl LocalFrame {
    /// Frame where local and world coordinates coincide
    pub fn identity() -> Self {
        Self {
            to_world: Matrix4::identity(),
            to_local: Matrix4::identity(),
        }
    }

    /// Build from a local-to-world matrix
    pub fn new(to_world: Matrix4<f64>) -> Result<Self> {
        let to_local = to_world.try_inverse().ok_or(Error::SingularTransform)?;
        if to_local.iter().any(|v| !v.is_finite()) {
            return Err(Error::SingularTransform);
        }
        Ok(Self { to_world, to_local })
    }

    /// Build from 16 values in column-major order (the WebGL/three.js layout)
    pub fn from_column_major(elements: &[f64; 16]) -> Result<Self> {
        Self::new(Matrix4::from_column_slice(elements))
    }

    /// Frame of an untransformed part whose centroid sits at `center`
    pub fn centered_at(center: &Point3<f64>) -> Self {
        Self {
            to_world: Matrix4::new_translation(&center.coords),
            to_local: Matrix4::new_translation(&-center.coords),
        }
    }

    #[inline]
    pub fn to_local(&self, world: &Point3<f64>) -> Point3<f64> {
        self.to_local.transform_point(world)
    }

    #[inline]
    pub fn to_world(&self, local: &Point3<f64>) -> Point3<f64> {
        self.to_world.transform_point(local)
    }

    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.to_world
    }
}

impl Default for LocalFrame {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Rotation3, Vector3};

    #[test]
    fn test_translation_round_trip() {
        let frame = LocalFrame::centered_at(&Point3::new(1.0, 2.0, 3.0));
        let local = frame.to_local(&Point3::new(1.5, 2.0, 3.0));
        assert_relative_eq!(local, Point3::new(0.5, 0.0, 0.0));
        assert_relative_eq!(frame.to_world(&local), Point3::new(1.5, 2.0, 3.0));
    }

    #[test]
    fn test_column_major_layout() {
        // Translation lives in elements 12..15
        #[rustfmt::skip]
        let elements = [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            5.0, 0.0, -2.0, 1.0,
        ];
        let frame = LocalFrame::from_column_major(&elements).unwrap();
        let local = frame.to_local(&Point3::new(5.0, 1.0, -2.0));
        assert_relative_eq!(local, Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rotated_part() {
        // Part turned 90 degrees about Y, then moved to (0, 0, 4)
        let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), std::f64::consts::FRAC_PI_2);
        let to_world = Matrix4::new_translation(&Vector3::new(0.0, 0.0, 4.0)) * rotation.to_homogeneous();
        let frame = LocalFrame::new(to_world).unwrap();

        // Local +X maps to world -Z
        let world = frame.to_world(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(world, Point3::new(0.0, 0.0, 3.0), epsilon = 1e-12);
        assert_relative_eq!(frame.to_local(&world), Point3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_singular_transform() {
        let mut flat = Matrix4::identity();
        flat[(1, 1)] = 0.0;
        assert_eq!(LocalFrame::new(flat), Err(Error::SingularTransform));
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Part inputs and label outputs exchanged with the editor.

use crate::error::{Error, Result};
use partmark_geometry::{
    AxisDescriptor, BoxBounds, BoxExtents, FaceType, LocalFrame, Matrix4, ShapeCategory,
};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A box-shaped part as supplied by the scene layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: u32,
    pub extents: BoxExtents,
    /// Box-local to world matrix, column-major. `None` means the box is
    /// already centered at the world origin.
    #[serde(default)]
    pub transform: Option<[f64; 16]>,
}

impl Part {
    pub fn new(id: u32, extents: BoxExtents) -> Self {
        Self {
            id,
            extents,
            transform: None,
        }
    }

    pub fn with_transform(mut self, transform: [f64; 16]) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Build a part from mesh vertex positions and the mesh's world matrix
    ///
    /// Mesh origins rarely sit at the box centroid, so the centroid offset is
    /// folded into the part transform.
    pub fn from_mesh(id: u32, positions: &[f32], mesh_matrix: Option<&[f64; 16]>) -> Result<Self> {
        let bounds = BoxBounds::from_positions(positions);
        let extents = bounds.extents().map_err(Error::part(id))?;
        let center = bounds.centroid().map_err(Error::part(id))?;

        let mesh_to_world = mesh_matrix
            .map(|m| Matrix4::from_column_slice(m))
            .unwrap_or_else(Matrix4::identity);
        let to_world = mesh_to_world * Matrix4::new_translation(&center.coords);

        let mut transform = [0.0; 16];
        transform.copy_from_slice(to_world.as_slice());

        Ok(Self {
            id,
            extents,
            transform: Some(transform),
        })
    }

    /// Local frame of the part
    pub fn frame(&self) -> Result<LocalFrame> {
        match &self.transform {
            Some(m) => LocalFrame::from_column_major(m).map_err(Error::part(self.id)),
            None => Ok(LocalFrame::identity()),
        }
    }
}

/// Shape label of a part. `axis` is only set for bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartLabel {
    pub id: u32,
    pub category: ShapeCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<AxisDescriptor>,
}

/// One side of a connection: a part and an anchor on one of its faces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionEndpoint {
    pub part_id: u32,
    pub face: FaceType,
    pub anchor: String,
}

/// A part that could not be labelled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartFailure {
    pub id: u32,
    pub message: String,
}

/// Labels for a batch of parts, in input order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelReport {
    pub labels: Vec<PartLabel>,
    pub failures: Vec<PartFailure>,
}

impl LabelReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Index labels by part id
    pub fn by_id(&self) -> FxHashMap<u32, &PartLabel> {
        self.labels.iter().map(|label| (label.id, label)).collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

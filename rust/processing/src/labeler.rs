// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Part labelling with parallel batch processing.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::part::{ConnectionEndpoint, LabelReport, Part, PartFailure, PartLabel};
use partmark_geometry::{classify_with, resolve_axis, Anchor, Point3, ShapeCategory};
use rayon::prelude::*;

/// Labels parts and turns world-space picks into connection endpoints.
#[derive(Debug, Clone, Default)]
pub struct PartLabeler {
    config: Config,
}

impl PartLabeler {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Labeller configured from `PARTMARK_*` environment variables
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shape category of a part, plus its dominant axis when it is a bar
    pub fn label(&self, part: &Part) -> Result<PartLabel> {
        let category =
            classify_with(&part.extents, &self.config.classifier).map_err(Error::part(part.id))?;

        let axis = if category == ShapeCategory::Bar {
            Some(resolve_axis(&part.extents).map_err(Error::part(part.id))?)
        } else {
            None
        };

        Ok(PartLabel {
            id: part.id,
            category,
            axis,
        })
    }

    /// Label a batch of parts
    ///
    /// Failed parts are collected in the report instead of aborting the batch.
    pub fn label_all(&self, parts: &[Part]) -> LabelReport {
        let parallel = parts.len() >= self.config.parallel_threshold;
        tracing::debug!(parts = parts.len(), parallel, "Labelling parts");

        let results: Vec<Result<PartLabel>> = if parallel {
            parts.par_iter().map(|part| self.label(part)).collect()
        } else {
            parts.iter().map(|part| self.label(part)).collect()
        };

        let mut report = LabelReport {
            labels: Vec::with_capacity(parts.len()),
            failures: Vec::new(),
        };

        for (part, result) in parts.iter().zip(results) {
            match result {
                Ok(label) => report.labels.push(label),
                Err(e) => {
                    tracing::warn!(part_id = part.id, error = %e, "Part could not be labelled");
                    report.failures.push(PartFailure {
                        id: part.id,
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            labelled = report.labels.len(),
            failed = report.failures.len(),
            "Labelling complete"
        );
        report
    }

    /// Anchor a world-space pick on a part
    pub fn endpoint(&self, part: &Part, world: &Point3<f64>) -> Result<ConnectionEndpoint> {
        let local = part.frame()?.to_local(world);
        let anchor = Anchor::locate(&local, &part.extents, &self.config.classifier)
            .map_err(Error::part(part.id))?;

        tracing::trace!(
            part_id = part.id,
            x = local.x,
            y = local.y,
            z = local.z,
            anchor = %anchor,
            "Resolved pick"
        );

        Ok(ConnectionEndpoint {
            part_id: part.id,
            face: anchor.face,
            anchor: anchor.label(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partmark_geometry::{Axis, BoxExtents, FaceType};

    fn part(id: u32, w: f64, h: f64, d: f64) -> Part {
        Part::new(id, BoxExtents::new(w, h, d).unwrap())
    }

    #[test]
    fn test_axis_only_for_bars() {
        let labeler = PartLabeler::default();

        let rail = labeler.label(&part(1, 1.2, 0.04, 0.02)).unwrap();
        assert_eq!(rail.category, ShapeCategory::Bar);
        assert_eq!(rail.axis.map(|a| a.axis), Some(Axis::X));

        let panel = labeler.label(&part(2, 0.6, 0.018, 0.4)).unwrap();
        assert_eq!(panel.category, ShapeCategory::Board);
        assert!(panel.axis.is_none());
    }

    #[test]
    fn test_endpoint_in_part_frame() {
        #[rustfmt::skip]
        let moved = [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 3.0, 0.0, 1.0,
        ];
        let cube = part(9, 2.0, 2.0, 2.0).with_transform(moved);
        let endpoint = PartLabeler::default()
            .endpoint(&cube, &Point3::new(0.0, 3.0, 1.0))
            .unwrap();
        assert_eq!(endpoint.part_id, 9);
        assert_eq!(endpoint.face, FaceType::FrontFace);
        assert_eq!(endpoint.anchor, "<FrontFace_1/2Height_1/2Width>");
    }

    #[test]
    fn test_invalid_part_is_tagged() {
        let broken = Part::new(
            4,
            BoxExtents {
                width: 1.0,
                height: 0.0,
                depth: 1.0,
            },
        );
        let err = PartLabeler::default().label(&broken).unwrap_err();
        assert!(matches!(err, Error::Part { id: 4, .. }));
    }
}

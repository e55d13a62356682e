// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JavaScript API for PartMark
//!
//! Thin wrappers around the processing crate. The plain-Rust halves of each
//! method live on `PartMarkAPI` without the `#[wasm_bindgen]` attribute so
//! they can be exercised natively.

use partmark_geometry::{
    classify_with, encode_anchor_with, resolve_axis, AxisDescriptor, BoxBounds, BoxExtents,
    ClassifierConfig, Point3,
};
use partmark_processing::{Config, ConnectionEndpoint, LabelReport, Part, PartLabeler};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Options accepted by `PartMarkAPI.withConfig`
///
/// Every field is optional; missing ones keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiOptions {
    #[serde(flatten)]
    pub classifier: ClassifierConfig,
    pub parallel_threshold: Option<usize>,
}

/// Part classification and anchoring for the layout editor
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct PartMarkAPI {
    labeler: PartLabeler,
}

#[wasm_bindgen]
impl PartMarkAPI {
    /// Create an API instance with the default thresholds (3, 5, 10)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an API instance with custom thresholds
    ///
    /// Example:
    /// ```javascript
    /// const api = PartMarkAPI.withConfig({ barRatio: 4, maxDenominator: 16 });
    /// ```
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(options: JsValue) -> Result<PartMarkAPI, JsValue> {
        let options: ApiOptions = serde_wasm_bindgen::from_value(options)?;
        Self::from_options(options).map_err(to_js_error)
    }

    /// Shape category: "bar", "board" or "block"
    pub fn classify(&self, width: f64, height: f64, depth: f64) -> Result<String, JsValue> {
        self.classify_box(width, height, depth).map_err(to_js_error)
    }

    /// Dominant axis and end names of a box
    ///
    /// Example:
    /// ```javascript
    /// const axis = api.resolveAxis(0.05, 0.72, 0.05);
    /// console.log(axis.axis, axis.end1, axis.end2); // "y" "BottomEnd" "TopEnd"
    /// ```
    #[wasm_bindgen(js_name = resolveAxis)]
    pub fn resolve_axis_js(&self, width: f64, height: f64, depth: f64) -> Result<JsValue, JsValue> {
        let axis = self.axis_of(width, height, depth).map_err(to_js_error)?;
        Ok(serde_wasm_bindgen::to_value(&axis)?)
    }

    /// Anchor string for a point in the box-local frame
    ///
    /// Example:
    /// ```javascript
    /// api.encodeAnchor(0, 0, 1, 2, 2, 2); // "<FrontFace_1/2Height_1/2Width>"
    /// ```
    #[wasm_bindgen(js_name = encodeAnchor)]
    pub fn encode_anchor_js(
        &self,
        x: f64,
        y: f64,
        z: f64,
        width: f64,
        height: f64,
        depth: f64,
    ) -> Result<String, JsValue> {
        self.anchor_at(x, y, z, width, height, depth)
            .map_err(to_js_error)
    }

    /// `[width, height, depth]` of a flat vertex position buffer
    #[wasm_bindgen(js_name = extentsFromPositions)]
    pub fn extents_from_positions(&self, positions: &[f32]) -> Result<Vec<f64>, JsValue> {
        let extents = BoxBounds::from_positions(positions)
            .extents()
            .map_err(to_js_error)?;
        Ok(vec![extents.width, extents.height, extents.depth])
    }

    /// Label an array of `{ id, extents: { width, height, depth }, transform? }`
    ///
    /// Returns `{ labels, failures }`; one bad part does not fail the batch.
    #[wasm_bindgen(js_name = labelParts)]
    pub fn label_parts(&self, parts: JsValue) -> Result<JsValue, JsValue> {
        let parts: Vec<Part> = serde_wasm_bindgen::from_value(parts)?;
        let report = self.label_batch(&parts);

        #[cfg(feature = "debug_labels")]
        web_sys::console::debug_1(
            &format!(
                "[PartMark] labelled {} parts, {} failed",
                report.labels.len(),
                report.failures.len()
            )
            .into(),
        );

        Ok(serde_wasm_bindgen::to_value(&report)?)
    }

    /// Connection endpoint for a world-space pick on a part
    ///
    /// Example:
    /// ```javascript
    /// const end = api.endpointAt(part, hit.point.x, hit.point.y, hit.point.z);
    /// connection.from = { partId: end.partId, anchor: end.anchor };
    /// ```
    #[wasm_bindgen(js_name = endpointAt)]
    pub fn endpoint_at(&self, part: JsValue, x: f64, y: f64, z: f64) -> Result<JsValue, JsValue> {
        let part: Part = serde_wasm_bindgen::from_value(part)?;
        let endpoint = self.endpoint_for(&part, x, y, z).map_err(to_js_error)?;

        #[cfg(feature = "debug_labels")]
        web_sys::console::debug_1(
            &format!("[PartMark] #{} -> {}", endpoint.part_id, endpoint.anchor).into(),
        );

        Ok(serde_wasm_bindgen::to_value(&endpoint)?)
    }
}

impl PartMarkAPI {
    pub fn from_options(options: ApiOptions) -> partmark_processing::Result<Self> {
        options.classifier.validate()?;
        let defaults = Config::default();
        let config = Config {
            classifier: options.classifier,
            parallel_threshold: options
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        };
        Ok(Self {
            labeler: PartLabeler::new(config),
        })
    }

    fn classifier(&self) -> &ClassifierConfig {
        &self.labeler.config().classifier
    }

    pub fn classify_box(
        &self,
        width: f64,
        height: f64,
        depth: f64,
    ) -> partmark_processing::Result<String> {
        let extents = BoxExtents::new(width, height, depth)?;
        Ok(classify_with(&extents, self.classifier())?.to_string())
    }

    pub fn axis_of(
        &self,
        width: f64,
        height: f64,
        depth: f64,
    ) -> partmark_processing::Result<AxisDescriptor> {
        Ok(resolve_axis(&BoxExtents::new(width, height, depth)?)?)
    }

    pub fn anchor_at(
        &self,
        x: f64,
        y: f64,
        z: f64,
        width: f64,
        height: f64,
        depth: f64,
    ) -> partmark_processing::Result<String> {
        let extents = BoxExtents::new(width, height, depth)?;
        Ok(encode_anchor_with(
            &Point3::new(x, y, z),
            &extents,
            self.classifier(),
        )?)
    }

    pub fn label_batch(&self, parts: &[Part]) -> LabelReport {
        self.labeler.label_all(parts)
    }

    pub fn endpoint_for(
        &self,
        part: &Part,
        x: f64,
        y: f64,
        z: f64,
    ) -> partmark_processing::Result<ConnectionEndpoint> {
        self.labeler.endpoint(part, &Point3::new(x, y, z))
    }
}

fn to_js_error<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

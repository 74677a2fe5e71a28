use indexmap::IndexMap;
use plotlift_scene::scene::TextTrace;

use crate::anchor::Orientation;
use crate::error::CalibrationError;

/// A categorical axis: tick labels paired with their anchor coordinate,
/// classified by nearest-anchor lookup instead of continuous scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalAxis {
    anchors: IndexMap<String, f64>,
}

impl CategoricalAxis {
    /// Builds the label→anchor mapping restricted to labels present in
    /// both the tick list and the scene text, in scene-text order. A label
    /// rendered more than once keeps its first anchor.
    pub fn try_new(
        ticks: &[String],
        texts: &[TextTrace],
        orientation: Orientation,
    ) -> Result<Self, CalibrationError> {
        let mut anchors = IndexMap::new();
        for text in texts {
            if ticks.contains(&text.content) && !anchors.contains_key(&text.content) {
                anchors.insert(text.content.clone(), orientation.coord(text.position));
            }
        }
        if anchors.is_empty() {
            return Err(CalibrationError::NoAnchoredTicks);
        }
        Ok(Self { anchors })
    }

    /// The label whose anchor is closest to `pixel`. Ties keep the
    /// first-encountered anchor.
    pub fn nearest(&self, pixel: f64) -> &str {
        let (label, _) = self
            .anchors
            .iter()
            .min_by(|(_, a), (_, b)| (pixel - **a).abs().total_cmp(&(pixel - **b).abs()))
            .expect("anchor map is never empty");
        label
    }

    /// Anchored labels in scene-text order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.anchors.keys().map(|label| label.as_str())
    }
}

use plotlift_scales::anchor::Orientation;
use plotlift_scales::categorical::CategoricalAxis;
use plotlift_scales::linear::LinearAxis;
use plotlift_scene::metadata::ChartMetadata;
use plotlift_scene::scene::TraceScene;

use crate::classify::{ColorClassifier, MissPolicy};
use crate::error::ExtractError;
use crate::record::BarRecord;

/// Reconstructs one record per rectangle. The rect's top-mid anchor
/// resolves to the nearest x tick label and its top edge calibrates to the
/// bar's height value on the y axis.
pub fn extract(
    metadata: &ChartMetadata,
    scene: &TraceScene,
) -> Result<Vec<BarRecord>, ExtractError> {
    let x_axis = metadata
        .x_axis
        .as_ref()
        .ok_or(ExtractError::MissingAxis("x"))?;
    let y_axis = metadata
        .y_axis
        .as_ref()
        .ok_or(ExtractError::MissingAxis("y"))?;
    let categories = CategoricalAxis::try_new(&x_axis.ticks, &scene.text, Orientation::Horizontal)?;
    let values = LinearAxis::try_new(&y_axis.ticks, &scene.text, Orientation::Vertical)?;
    let classifier = ColorClassifier::new(metadata.legend_map()?, MissPolicy::Unknown);

    let mut records = Vec::with_capacity(scene.rect.len());
    for rect in &scene.rect {
        let [x, y] = rect.position;
        records.push(BarRecord {
            x: categories.nearest(x).to_string(),
            y: values.value_at(y),
            category: classifier.classify(rect.fill()?),
        });
    }
    Ok(records)
}

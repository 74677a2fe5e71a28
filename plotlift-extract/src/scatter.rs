use plotlift_scales::anchor::Orientation;
use plotlift_scales::linear::LinearAxis;
use plotlift_scene::metadata::ChartMetadata;
use plotlift_scene::scene::TraceScene;

use crate::classify::{ColorClassifier, MissPolicy};
use crate::error::ExtractError;
use crate::record::PointRecord;

/// Reconstructs one record per circle from its center pixel. Unlike bar
/// and line charts, a fill that matches no legend entry keeps its literal
/// `RGB(r, g, b)` label instead of "Unknown".
pub fn extract(
    metadata: &ChartMetadata,
    scene: &TraceScene,
) -> Result<Vec<PointRecord>, ExtractError> {
    let x_axis = metadata
        .x_axis
        .as_ref()
        .ok_or(ExtractError::MissingAxis("x"))?;
    let y_axis = metadata
        .y_axis
        .as_ref()
        .ok_or(ExtractError::MissingAxis("y"))?;
    let x_values = LinearAxis::try_new(&x_axis.ticks, &scene.text, Orientation::Horizontal)?;
    let y_values = LinearAxis::try_new(&y_axis.ticks, &scene.text, Orientation::Vertical)?;
    let classifier = ColorClassifier::new(metadata.legend_map()?, MissPolicy::LiteralRgb);

    let mut records = Vec::with_capacity(scene.circle.len());
    for circle in &scene.circle {
        let [x, y] = circle.position;
        records.push(PointRecord {
            x: x_values.value_at(x),
            y: y_values.value_at(y),
            category: classifier.classify(circle.fill()?),
        });
    }
    Ok(records)
}

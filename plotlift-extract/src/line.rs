use plotlift_scales::anchor::Orientation;
use plotlift_scales::linear::LinearAxis;
use plotlift_scene::metadata::ChartMetadata;
use plotlift_scene::scene::TraceScene;

use crate::classify::{ColorClassifier, MissPolicy};
use crate::error::ExtractError;
use crate::record::PointRecord;

/// Reconstructs one record per polyline vertex. Both axes must be
/// quantitative; a categorical tick list fails calibration before any
/// point is emitted.
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
    let classifier = ColorClassifier::new(metadata.legend_map()?, MissPolicy::Unknown);

    let mut records = Vec::new();
    for polyline in &scene.line {
        // One polyline is one series of one color.
        let category = classifier.classify(polyline.stroke()?);
        for &[x, y] in &polyline.points {
            records.push(PointRecord {
                x: x_values.value_at(x),
                y: y_values.value_at(y),
                category: category.clone(),
            });
        }
    }
    Ok(records)
}

use log::{debug, warn};
use plotlift_scales::utils::round_to;
use plotlift_scene::metadata::ChartMetadata;
use plotlift_scene::scene::TraceScene;

use crate::classify::{ColorClassifier, MissPolicy};
use crate::error::ExtractError;
use crate::radial::{angle_between, find_center, sweep_fraction};
use crate::record::PieRecord;

/// Reconstructs one record per wedge polygon. A wedge with fewer than two
/// non-center vertices is skipped with a warning, so the surviving
/// percentages are not forced to sum to 1.
pub fn extract(
    metadata: &ChartMetadata,
    scene: &TraceScene,
) -> Result<Vec<PieRecord>, ExtractError> {
    let center = find_center(&scene.area).ok_or(ExtractError::NoRadialCenter)?;
    debug!("radial center detected at ({}, {})", center[0], center[1]);
    let classifier = ColorClassifier::new(metadata.legend_map()?, MissPolicy::LiteralRgb);

    let mut records = Vec::with_capacity(scene.area.len());
    for (index, wedge) in scene.area.iter().enumerate() {
        let rim: Vec<[f64; 2]> = wedge
            .points
            .iter()
            .copied()
            .filter(|point| *point != center)
            .collect();
        if rim.len() < 2 {
            warn!(
                "wedge {index} has {} non-center vertices, skipping",
                rim.len()
            );
            continue;
        }
        let start = angle_between(center, rim[0]);
        let end = angle_between(center, rim[1]);
        records.push(PieRecord {
            category: classifier.classify(wedge.fill()?),
            percentage: round_to(sweep_fraction(start, end), 4),
        });
    }
    Ok(records)
}

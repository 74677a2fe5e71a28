use std::fs;
use std::path::Path;

use itertools::izip;
use serde::{Deserialize, Serialize};

use crate::color::{LegendMap, Rgb};
use crate::error::SceneError;

/// Chart-level metadata delivered alongside a scene trace: axis tick labels
/// and, when the chart has one, the legend.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMetadata {
    #[serde(default)]
    pub x_axis: Option<AxisSpec>,
    #[serde(default)]
    pub y_axis: Option<AxisSpec>,
    #[serde(default)]
    pub legend: Option<LegendSpec>,
}

impl ChartMetadata {
    pub fn from_json_str(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Builds the legend color→category map, or `None` when the metadata
    /// carries no usable legend. `None` is not an error: classification
    /// degrades to literal-RGB category labels.
    pub fn legend_map(&self) -> Result<Option<LegendMap>, SceneError> {
        let legend = match &self.legend {
            Some(legend) => legend,
            None => return Ok(None),
        };
        let (items, colors) = match (&legend.items, &legend.colors) {
            (Some(items), Some(colors)) => (items, colors),
            _ => return Ok(None),
        };
        let mut entries = Vec::new();
        for (color, item) in izip!(colors, items) {
            entries.push((Rgb::from_hex(color)?, item.clone()));
        }
        Ok(Some(LegendMap::new(entries)))
    }
}

/// Ordered tick labels for one axis. Whether the axis is quantitative or
/// categorical is implied by whether the labels parse as numbers.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    #[serde(default)]
    pub ticks: Vec<String>,
}

/// Legend category labels positionally paired with their hex colors.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendSpec {
    #[serde(default)]
    pub items: Option<Vec<String>>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_from_json() -> Result<(), SceneError> {
        let metadata = ChartMetadata::from_json_str(
            r##"{
                "xAxis": {"ticks": ["Jan", "Feb"]},
                "yAxis": {"ticks": ["0", "100"]},
                "legend": {"items": ["A", "B"], "colors": ["#396ab1", "#da7c30"]}
            }"##,
        )?;
        assert_eq!(metadata.x_axis.as_ref().unwrap().ticks, vec!["Jan", "Feb"]);
        assert_eq!(metadata.y_axis.as_ref().unwrap().ticks, vec!["0", "100"]);

        let legend = metadata.legend_map()?.unwrap();
        assert_eq!(
            legend.entries(),
            &[
                (Rgb::new(57, 106, 177), "A".to_string()),
                (Rgb::new(218, 124, 48), "B".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_absent_legend_is_not_an_error() -> Result<(), SceneError> {
        let metadata = ChartMetadata::from_json_str(r#"{"xAxis": {"ticks": []}}"#)?;
        assert!(metadata.legend_map()?.is_none());

        // A legend object missing either half is equally unusable.
        let metadata = ChartMetadata::from_json_str(r#"{"legend": {"items": ["A"]}}"#)?;
        assert!(metadata.legend_map()?.is_none());
        Ok(())
    }

    #[test]
    fn test_legend_zips_to_shorter_side() -> Result<(), SceneError> {
        let metadata = ChartMetadata::from_json_str(
            r##"{"legend": {"items": ["A", "B", "C"], "colors": ["#000000"]}}"##,
        )?;
        let legend = metadata.legend_map()?.unwrap();
        assert_eq!(legend.entries().len(), 1);
        assert_eq!(legend.entries()[0].1, "A");
        Ok(())
    }

    #[test]
    fn test_bad_legend_color_is_an_error() -> Result<(), SceneError> {
        let metadata = ChartMetadata::from_json_str(
            r##"{"legend": {"items": ["A"], "colors": ["#zzzzzz"]}}"##,
        )?;
        assert!(metadata.legend_map().is_err());
        Ok(())
    }
}

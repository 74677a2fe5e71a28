use std::fmt;
use std::str::FromStr;

use plotlift_scene::metadata::ChartMetadata;
use plotlift_scene::scene::TraceScene;
use serde::Serialize;

use crate::error::ExtractError;
use crate::record::{BarRecord, PieRecord, PointRecord};
use crate::{bar, line, pie, scatter};

/// The chart families this crate can reconstruct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Scatter,
        ChartKind::Pie,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bar" => Ok(ChartKind::Bar),
            "line" => Ok(ChartKind::Line),
            "scatter" => Ok(ChartKind::Scatter),
            "pie" => Ok(ChartKind::Pie),
            _ => Err(ExtractError::UnknownChartKind(s.to_string())),
        }
    }
}

/// The records reconstructed from one chart instance, in shape iteration
/// order.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSeries {
    Bar(Vec<BarRecord>),
    Points(Vec<PointRecord>),
    Pie(Vec<PieRecord>),
}

impl DataSeries {
    pub fn len(&self) -> usize {
        match self {
            DataSeries::Bar(records) => records.len(),
            DataSeries::Points(records) => records.len(),
            DataSeries::Pie(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serializes the series as one JSON object per line.
    pub fn to_json_lines(&self) -> Result<String, serde_json::Error> {
        fn lines<T: Serialize>(records: &[T]) -> Result<String, serde_json::Error> {
            let mut out = String::new();
            for record in records {
                out.push_str(&serde_json::to_string(record)?);
                out.push('\n');
            }
            Ok(out)
        }
        match self {
            DataSeries::Bar(records) => lines(records),
            DataSeries::Points(records) => lines(records),
            DataSeries::Pie(records) => lines(records),
        }
    }
}

/// Runs the extractor for `kind` over one chart instance.
pub fn extract(
    kind: ChartKind,
    metadata: &ChartMetadata,
    scene: &TraceScene,
) -> Result<DataSeries, ExtractError> {
    match kind {
        ChartKind::Bar => Ok(DataSeries::Bar(bar::extract(metadata, scene)?)),
        ChartKind::Line => Ok(DataSeries::Points(line::extract(metadata, scene)?)),
        ChartKind::Scatter => Ok(DataSeries::Points(scatter::extract(metadata, scene)?)),
        ChartKind::Pie => Ok(DataSeries::Pie(pie::extract(metadata, scene)?)),
    }
}

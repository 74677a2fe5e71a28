use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::SceneError;

/// One chart instance's extracted geometry: every shape the vector trace
/// recorded, grouped by primitive type, in declaration order.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceScene {
    #[serde(default)]
    pub rect: Vec<RectTrace>,
    #[serde(default)]
    pub text: Vec<TextTrace>,
    #[serde(default)]
    pub circle: Vec<CircleTrace>,
    #[serde(default)]
    pub line: Vec<LineTrace>,
    #[serde(default)]
    pub area: Vec<AreaTrace>,
}

impl TraceScene {
    pub fn from_json_str(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}

/// A filled rectangle, anchored at the top-mid pixel of the bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectTrace {
    pub color: String,
    pub position: [f64; 2],
}

impl RectTrace {
    pub fn fill(&self) -> Result<Rgb, SceneError> {
        Rgb::from_triple(&self.color)
    }
}

/// A text label, anchored at its rendered pixel position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextTrace {
    pub content: String,
    pub position: [f64; 2],
}

/// A filled circle, anchored at its center pixel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleTrace {
    pub color: String,
    pub position: [f64; 2],
}

impl CircleTrace {
    pub fn fill(&self) -> Result<Rgb, SceneError> {
        Rgb::from_triple(&self.color)
    }
}

/// A stroked polyline, one data series of one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTrace {
    pub color: String,
    pub points: Vec<[f64; 2]>,
}

impl LineTrace {
    pub fn stroke(&self) -> Result<Rgb, SceneError> {
        Rgb::from_triple(&self.color)
    }
}

/// A filled polygon. Pie wedges arrive as areas sharing a repeated center
/// vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaTrace {
    pub color: String,
    pub points: Vec<[f64; 2]>,
}

impl AreaTrace {
    pub fn fill(&self) -> Result<Rgb, SceneError> {
        Rgb::from_triple(&self.color)
    }
}

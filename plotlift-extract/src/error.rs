use plotlift_scales::error::CalibrationError;
use plotlift_scene::error::SceneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("calibration error")]
    Calibration(#[from] CalibrationError),

    #[error("scene error")]
    Scene(#[from] SceneError),

    #[error("Chart metadata is missing the {0} axis")]
    MissingAxis(&'static str),

    #[error("No shared center vertex: the scene has no wedge polygons")]
    NoRadialCenter,

    #[error("Unknown chart kind: {0:?}")]
    UnknownChartKind(String),
}

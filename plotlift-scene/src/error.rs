use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Invalid rgb triple: {0:?}")]
    InvalidRgbTriple(String),

    #[error("css color parse error")]
    InvalidLegendColor(#[from] csscolorparser::ParseColorError),

    #[error("json error")]
    Json(#[from] serde_json::Error),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Errors raised while building an axis calibration. Each is fatal for the
/// chart file it occurs in: without a trustworthy axis the downstream
/// values would be meaningless.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalibrationError {
    #[error("Axis needs at least two ticks to establish a scale, got {0}")]
    TooFewTicks(usize),

    #[error("Tick label is not numeric: {0:?}")]
    NonNumericTick(String),

    #[error("No text anchor found for tick label: {0:?}")]
    AnchorNotFound(String),

    #[error("Ticks {lo:?} and {hi:?} share anchor pixel {pixel}; the pixel range is degenerate")]
    DegeneratePixelRange { lo: String, hi: String, pixel: f64 },

    #[error("No tick label matched any text anchor in the scene")]
    NoAnchoredTicks,
}

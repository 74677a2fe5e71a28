use serde::Serialize;

/// One reconstructed bar: the nearest x tick label, the calibrated height
/// value, and the legend category of the bar's fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarRecord {
    pub x: String,
    pub y: f64,
    pub category: String,
}

/// One reconstructed line or scatter sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
    pub category: String,
}

/// One reconstructed pie wedge as a fraction of the full turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieRecord {
    pub category: String,
    pub percentage: f64,
}

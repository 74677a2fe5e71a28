use crate::error::SceneError;

/// Maximum Euclidean RGB distance for a legend color match to be accepted.
/// RGB distances live in [0, 441] (the cube diagonal is 255 * sqrt(3)).
pub const LEGEND_COLOR_TOLERANCE: f64 = 60.0;

/// An opaque 8-bit RGB fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses the `"(r,g,b)"` textual form trace files use for shape fills.
    ///
    /// Accepts exactly three comma-separated decimal components in 0-255
    /// wrapped in parentheses, with optional whitespace around components.
    /// Anything else is rejected.
    pub fn from_triple(s: &str) -> Result<Self, SceneError> {
        let bad = || SceneError::InvalidRgbTriple(s.to_string());
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(bad)?;
        let components = inner
            .split(',')
            .map(|component| component.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| bad())?;
        match components.as_slice() {
            &[r, g, b] => Ok(Self::new(r, g, b)),
            _ => Err(bad()),
        }
    }

    /// Parses a legend color in any CSS form (`#rrggbb` in practice).
    pub fn from_hex(s: &str) -> Result<Self, SceneError> {
        let color = csscolorparser::parse(s)?;
        let [r, g, b, _] = color.to_rgba8();
        Ok(Self::new(r, g, b))
    }

    /// Euclidean distance to another color in RGB space.
    pub fn distance(&self, other: &Rgb) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// The color's self-describing category label, used when no legend
    /// entry can name the shape.
    pub fn literal(&self) -> String {
        format!("RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Ordered legend color→category entries plus the fixed match tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendMap {
    entries: Vec<(Rgb, String)>,
    tolerance: f64,
}

impl LegendMap {
    pub fn new(entries: Vec<(Rgb, String)>) -> Self {
        Self {
            entries,
            tolerance: LEGEND_COLOR_TOLERANCE,
        }
    }

    /// Entries in legend declaration order.
    pub fn entries(&self) -> &[(Rgb, String)] {
        &self.entries
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

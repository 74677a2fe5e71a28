use plotlift_scene::scene::TextTrace;

use crate::anchor::{anchor_coord, Orientation};
use crate::error::CalibrationError;
use crate::utils::round_to;

/// A quantitative pixel→value mapping for one axis, anchored on the pixel
/// positions of the axis's first and last tick labels.
///
/// The mapping is the line through `(pixel_lo, value_lo)` and
/// `(pixel_hi, value_hi)`. For a vertical axis the lower-valued tick sits
/// at the larger pixel y (screen origin is top-left), so the slope comes
/// out negative and increasing pixel y maps to decreasing value; no
/// orientation-specific arithmetic is needed beyond choosing which anchor
/// coordinate to read.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearAxis {
    pixel_lo: f64,
    pixel_hi: f64,
    value_lo: f64,
    value_hi: f64,
    precision: u32,
}

impl LinearAxis {
    /// Builds the calibration from ordered tick labels and the scene's
    /// text anchors.
    ///
    /// Output precision is 1 decimal place when both endpoint tick labels
    /// are integer-like, 2 otherwise.
    pub fn try_new(
        ticks: &[String],
        texts: &[TextTrace],
        orientation: Orientation,
    ) -> Result<Self, CalibrationError> {
        if ticks.len() < 2 {
            return Err(CalibrationError::TooFewTicks(ticks.len()));
        }
        let lo_label = &ticks[0];
        let hi_label = &ticks[ticks.len() - 1];
        let value_lo = parse_tick(lo_label)?;
        let value_hi = parse_tick(hi_label)?;
        let pixel_lo = anchor_coord(texts, lo_label, orientation)
            .ok_or_else(|| CalibrationError::AnchorNotFound(lo_label.clone()))?;
        let pixel_hi = anchor_coord(texts, hi_label, orientation)
            .ok_or_else(|| CalibrationError::AnchorNotFound(hi_label.clone()))?;
        if pixel_lo == pixel_hi {
            return Err(CalibrationError::DegeneratePixelRange {
                lo: lo_label.clone(),
                hi: hi_label.clone(),
                pixel: pixel_lo,
            });
        }
        let precision = if is_integer_like(lo_label) && is_integer_like(hi_label) {
            1
        } else {
            2
        };
        Ok(Self {
            pixel_lo,
            pixel_hi,
            value_lo,
            value_hi,
            precision,
        })
    }

    /// Maps an on-screen pixel coordinate to a data value, rounded to the
    /// axis's output precision.
    pub fn value_at(&self, pixel: f64) -> f64 {
        let scale = (self.value_hi - self.value_lo) / (self.pixel_hi - self.pixel_lo);
        round_to(self.value_lo + (pixel - self.pixel_lo) * scale, self.precision)
    }

    /// The calibrated (value_lo, value_hi) endpoints.
    pub fn value_range(&self) -> (f64, f64) {
        (self.value_lo, self.value_hi)
    }

    /// The anchor pixels of the endpoint ticks.
    pub fn pixel_range(&self) -> (f64, f64) {
        (self.pixel_lo, self.pixel_hi)
    }
}

fn parse_tick(label: &str) -> Result<f64, CalibrationError> {
    label
        .trim()
        .parse::<f64>()
        .map_err(|_| CalibrationError::NonNumericTick(label.to_string()))
}

fn is_integer_like(label: &str) -> bool {
    label.trim().parse::<i64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    fn text(content: &str, x: f64, y: f64) -> TextTrace {
        TextTrace {
            content: content.to_string(),
            position: [x, y],
        }
    }

    fn ticks(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| label.to_string()).collect()
    }

    fn vertical_axis() -> LinearAxis {
        // "0" rendered at pixel y=90, "100" at pixel y=10.
        let texts = vec![text("0", 0.0, 90.0), text("100", 0.0, 10.0)];
        LinearAxis::try_new(&ticks(&["0", "100"]), &texts, Orientation::Vertical).unwrap()
    }

    #[test]
    fn test_vertical_axis_endpoints_are_exact() {
        let axis = vertical_axis();
        assert_approx_eq!(f64, axis.value_at(90.0), 0.0);
        assert_approx_eq!(f64, axis.value_at(10.0), 100.0);
    }

    #[test]
    fn test_vertical_axis_decreases_with_pixel_y() {
        let axis = vertical_axis();
        // Interior pixels stay strictly between the tick values and larger
        // pixel y means smaller value.
        assert_approx_eq!(f64, axis.value_at(30.0), 75.0);
        assert_approx_eq!(f64, axis.value_at(50.0), 50.0);
        assert!(axis.value_at(70.0) < axis.value_at(30.0));
        for pixel in [11.0, 30.0, 50.0, 70.0, 89.0] {
            let value = axis.value_at(pixel);
            assert!(value > 0.0 && value < 100.0, "value {value} escaped the tick range");
        }
    }

    #[test]
    fn test_horizontal_axis_increases_with_pixel_x() {
        let texts = vec![text("0", 10.0, 0.0), text("50", 110.0, 0.0)];
        let axis =
            LinearAxis::try_new(&ticks(&["0", "50"]), &texts, Orientation::Horizontal).unwrap();
        assert_approx_eq!(f64, axis.value_at(10.0), 0.0);
        assert_approx_eq!(f64, axis.value_at(110.0), 50.0);
        assert_approx_eq!(f64, axis.value_at(60.0), 25.0);
        assert!(axis.value_at(40.0) < axis.value_at(80.0));
    }

    #[test]
    fn test_extrapolates_beyond_anchors() {
        let axis = vertical_axis();
        // A bar top above the "100" tick calibrates past the tick value.
        assert_approx_eq!(f64, axis.value_at(2.0), 110.0);
    }

    #[test]
    fn test_intermediate_ticks_are_ignored() {
        let texts = vec![
            text("0", 0.0, 90.0),
            text("50", 0.0, 47.0), // off the linear grid on purpose
            text("100", 0.0, 10.0),
        ];
        let axis =
            LinearAxis::try_new(&ticks(&["0", "50", "100"]), &texts, Orientation::Vertical)
                .unwrap();
        assert_eq!(axis.pixel_range(), (90.0, 10.0));
        assert_eq!(axis.value_range(), (0.0, 100.0));
    }

    #[rstest]
    #[case(&["0", "100"], 75.04, 75.0)] // integer-like ticks round to 1 decimal
    #[case(&["0.0", "100.0"], 75.04, 75.04)] // fractional ticks keep 2 decimals
    #[case(&["0", "100.0"], 75.046, 75.05)] // mixed ticks keep 2 decimals
    fn test_output_precision_follows_tick_form(
        #[case] labels: &[&str],
        #[case] raw: f64,
        #[case] expected: f64,
    ) {
        let lo = labels[0];
        let hi = labels[labels.len() - 1];
        let texts = vec![text(lo, 0.0, 1000.0), text(hi, 0.0, 0.0)];
        let axis = LinearAxis::try_new(&ticks(labels), &texts, Orientation::Vertical).unwrap();
        // Pick the pixel whose unrounded value is `raw`.
        let pixel = 1000.0 - raw * 10.0;
        assert_approx_eq!(f64, axis.value_at(pixel), expected);
    }

    #[test]
    fn test_too_few_ticks() {
        let texts = vec![text("0", 0.0, 90.0)];
        let result = LinearAxis::try_new(&ticks(&["0"]), &texts, Orientation::Vertical);
        assert_eq!(result, Err(CalibrationError::TooFewTicks(1)));
    }

    #[test]
    fn test_categorical_ticks_fail_fast() {
        let texts = vec![text("Jan", 10.0, 0.0), text("Feb", 50.0, 0.0)];
        let result = LinearAxis::try_new(&ticks(&["Jan", "Feb"]), &texts, Orientation::Horizontal);
        assert_eq!(
            result,
            Err(CalibrationError::NonNumericTick("Jan".to_string()))
        );
    }

    #[test]
    fn test_missing_anchor() {
        let texts = vec![text("0", 0.0, 90.0)];
        let result = LinearAxis::try_new(&ticks(&["0", "100"]), &texts, Orientation::Vertical);
        assert_eq!(
            result,
            Err(CalibrationError::AnchorNotFound("100".to_string()))
        );
    }

    #[test]
    fn test_degenerate_pixel_range() {
        let texts = vec![text("0", 0.0, 40.0), text("100", 0.0, 40.0)];
        let result = LinearAxis::try_new(&ticks(&["0", "100"]), &texts, Orientation::Vertical);
        assert_eq!(
            result,
            Err(CalibrationError::DegeneratePixelRange {
                lo: "0".to_string(),
                hi: "100".to_string(),
                pixel: 40.0,
            })
        );
    }
}

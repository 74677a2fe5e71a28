use plotlift_scene::color::{LegendMap, Rgb};

/// What `classify` falls back to when no legend entry is within tolerance.
///
/// The chart families do not share one policy: bar and line charts emit a
/// literal "Unknown" category, while scatter and pie charts fall back to
/// the observed color's own `RGB(r, g, b)` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissPolicy {
    Unknown,
    LiteralRgb,
}

/// Maps an observed fill color to a legend category.
#[derive(Debug, Clone)]
pub struct ColorClassifier {
    legend: Option<LegendMap>,
    miss_policy: MissPolicy,
}

impl ColorClassifier {
    pub fn new(legend: Option<LegendMap>, miss_policy: MissPolicy) -> Self {
        Self {
            legend,
            miss_policy,
        }
    }

    /// Resolves a fill color to a category label.
    ///
    /// Without a legend the label is the color's own `RGB(r, g, b)` form.
    /// With one, the nearest entry within tolerance wins and ties keep the
    /// earlier legend entry; when nothing is within tolerance the miss
    /// policy decides the label.
    pub fn classify(&self, color: Rgb) -> String {
        let legend = match &self.legend {
            Some(legend) => legend,
            None => return color.literal(),
        };
        let mut best: Option<(f64, &str)> = None;
        for (entry_color, label) in legend.entries() {
            let distance = color.distance(entry_color);
            if distance > legend.tolerance() {
                continue;
            }
            match best {
                Some((current, _)) if distance >= current => {}
                _ => best = Some((distance, label.as_str())),
            }
        }
        match (best, self.miss_policy) {
            (Some((_, label)), _) => label.to_string(),
            (None, MissPolicy::Unknown) => "Unknown".to_string(),
            (None, MissPolicy::LiteralRgb) => color.literal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legend() -> LegendMap {
        LegendMap::new(vec![
            (Rgb::new(255, 0, 0), "Apples".to_string()),
            (Rgb::new(0, 0, 255), "Plums".to_string()),
        ])
    }

    #[test]
    fn test_exact_match() {
        let classifier = ColorClassifier::new(Some(legend()), MissPolicy::Unknown);
        assert_eq!(classifier.classify(Rgb::new(255, 0, 0)), "Apples");
        assert_eq!(classifier.classify(Rgb::new(0, 0, 255)), "Plums");
    }

    #[test]
    fn test_near_match_within_tolerance() {
        let classifier = ColorClassifier::new(Some(legend()), MissPolicy::Unknown);
        // Distance 50 from the red entry, far from the blue one.
        assert_eq!(classifier.classify(Rgb::new(205, 0, 0)), "Apples");
    }

    #[test]
    fn test_miss_policy_unknown() {
        let classifier = ColorClassifier::new(Some(legend()), MissPolicy::Unknown);
        // Green is ~360 from red and blue alike; nothing is in tolerance.
        assert_eq!(classifier.classify(Rgb::new(0, 255, 0)), "Unknown");
    }

    #[test]
    fn test_miss_policy_literal_rgb() {
        let classifier = ColorClassifier::new(Some(legend()), MissPolicy::LiteralRgb);
        assert_eq!(classifier.classify(Rgb::new(0, 255, 0)), "RGB(0, 255, 0)");
    }

    #[test]
    fn test_no_legend_is_literal_regardless_of_policy() {
        for policy in [MissPolicy::Unknown, MissPolicy::LiteralRgb] {
            let classifier = ColorClassifier::new(None, policy);
            assert_eq!(classifier.classify(Rgb::new(255, 0, 0)), "RGB(255, 0, 0)");
        }
    }

    #[test]
    fn test_tie_keeps_first_legend_entry() {
        let duplicated = LegendMap::new(vec![
            (Rgb::new(100, 100, 100), "First".to_string()),
            (Rgb::new(100, 100, 100), "Second".to_string()),
        ]);
        let classifier = ColorClassifier::new(Some(duplicated), MissPolicy::Unknown);
        assert_eq!(classifier.classify(Rgb::new(100, 100, 100)), "First");
    }

    #[test]
    fn test_classification_is_idempotent() {
        let classifier = ColorClassifier::new(Some(legend()), MissPolicy::Unknown);
        let color = Rgb::new(230, 10, 10);
        assert_eq!(classifier.classify(color), classifier.classify(color));
    }
}

use plotlift_scene::scene::TextTrace;

/// Which screen coordinate an axis reads from its text anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The coordinate of an anchor position this axis calibrates against.
    pub fn coord(&self, position: [f64; 2]) -> f64 {
        match self {
            Orientation::Horizontal => position[0],
            Orientation::Vertical => position[1],
        }
    }
}

/// Looks up a tick label's anchor coordinate among the scene's text shapes.
/// The first text entry whose content equals the label wins.
pub fn anchor_coord(texts: &[TextTrace], label: &str, orientation: Orientation) -> Option<f64> {
    texts
        .iter()
        .find(|text| text.content == label)
        .map(|text| orientation.coord(text.position))
}

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use plotlift_scene::scene::AreaTrace;

type VertexKey = (OrderedFloat<f64>, OrderedFloat<f64>);

/// Finds the shared center of a radial layout: the vertex occurring with
/// the highest multiplicity across all wedge polygons pooled together.
/// Ties keep the first vertex, in pooled declaration order, to carry the
/// maximum count. `None` when the polygons have no vertices at all.
pub fn find_center(areas: &[AreaTrace]) -> Option<[f64; 2]> {
    let mut counts: IndexMap<VertexKey, usize> = IndexMap::new();
    for area in areas {
        for &[x, y] in &area.points {
            *counts.entry((OrderedFloat(x), OrderedFloat(y))).or_insert(0) += 1;
        }
    }
    let mut best: Option<(VertexKey, usize)> = None;
    for (vertex, count) in counts {
        match best {
            Some((_, max)) if count <= max => {}
            _ => best = Some((vertex, count)),
        }
    }
    best.map(|((x, y), _)| [x.0, y.0])
}

/// Degrees from `center` to `point`, normalized to [0, 360). In screen
/// coordinates y grows downward, so angles advance clockwise.
pub fn angle_between(center: [f64; 2], point: [f64; 2]) -> f64 {
    let dx = point[0] - center[0];
    let dy = point[1] - center[1];
    dy.atan2(dx).to_degrees().rem_euclid(360.0)
}

/// Fraction of the full turn swept from `start` to `end` degrees, walking
/// in the positive angular direction.
pub fn sweep_fraction(start: f64, end: f64) -> f64 {
    (end - start).rem_euclid(360.0) / 360.0
}

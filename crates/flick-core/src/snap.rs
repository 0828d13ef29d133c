//! Nearest-child snap resolution.

use crate::geometry::GeometrySnapshot;
use flick_geometry::Point;

/// Index of the child whose docked position is closest (Euclidean) to
/// `current`. Ties keep the lowest index; an empty child set yields `None`.
pub fn nearest_child_index(current: Point, geometry: &GeometrySnapshot) -> Option<usize> {
    let mut nearest = None;
    let mut nearest_distance = f32::INFINITY;
    for index in 0..geometry.children.len() {
        let Some(docked) = geometry.docked_position(index) else {
            continue;
        };
        let distance = current.distance_to(docked);
        if distance < nearest_distance {
            nearest = Some(index);
            nearest_distance = distance;
        }
    }
    nearest
}

#[cfg(test)]
mod tests {
    use super::*;
    use flick_geometry::Rect;

    fn two_page_strip() -> GeometrySnapshot {
        GeometrySnapshot::new(
            Rect::new(0.0, 0.0, 300.0, 200.0),
            Rect::new(0.0, 0.0, 900.0, 200.0),
            vec![
                Rect::new(0.0, 0.0, 300.0, 200.0),
                Rect::new(300.0, 0.0, 300.0, 200.0),
            ],
        )
    }

    #[test]
    fn test_nearest_resolves_by_distance() {
        let geometry = two_page_strip();
        assert_eq!(nearest_child_index(Point::new(-39.0, 0.0), &geometry), Some(0));
        assert_eq!(nearest_child_index(Point::new(-260.0, 0.0), &geometry), Some(1));
    }

    #[test]
    fn test_tie_keeps_lowest_index() {
        // Equidistant between docked positions 0 and -300.
        let geometry = two_page_strip();
        assert_eq!(nearest_child_index(Point::new(-150.0, 0.0), &geometry), Some(0));
    }

    #[test]
    fn test_empty_children_resolve_to_none() {
        let geometry = GeometrySnapshot::new(
            Rect::new(0.0, 0.0, 300.0, 200.0),
            Rect::new(0.0, 0.0, 900.0, 200.0),
            Vec::new(),
        );
        assert_eq!(nearest_child_index(Point::ZERO, &geometry), None);
    }

    #[test]
    fn test_resolution_is_idempotent_at_docked_position() {
        let geometry = two_page_strip();
        let index = nearest_child_index(Point::new(-290.0, 0.0), &geometry);
        assert_eq!(index, Some(1));
        let docked = geometry.docked_position(1).unwrap();
        assert_eq!(nearest_child_index(docked, &geometry), Some(1));
    }
}

//! Measured layout geometry.

use flick_geometry::{Point, Rect};
use smallvec::SmallVec;

/// Immutable record of the measured container, content, and child bounds.
///
/// Replaced wholesale on every [`refresh`](crate::PanEngine::refresh), never
/// mutated in place. Child index is the child's identity for snap targeting.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometrySnapshot {
    pub container: Rect,
    pub content: Rect,
    pub children: SmallVec<[Rect; 8]>,
}

impl GeometrySnapshot {
    pub fn new(container: Rect, content: Rect, children: Vec<Rect>) -> Self {
        Self {
            container,
            content,
            children: SmallVec::from_vec(children),
        }
    }

    /// Most negative offset allowed per axis: `-(content - container)`,
    /// floored at zero so undersized content pins to the origin.
    pub fn min_offset(&self) -> Point {
        Point::new(
            -(self.content.width - self.container.width).max(0.0),
            -(self.content.height - self.container.height).max(0.0),
        )
    }

    /// Converts an absolute position into the container-relative frame.
    pub fn to_local(&self, position: Point) -> Point {
        position - self.container.origin()
    }

    /// The offset that places child `index` flush with the container
    /// origin: the negation of the child's measured offset relative to the
    /// container. `None` when the index is outside the cached children.
    pub fn docked_position(&self, index: usize) -> Option<Point> {
        self.children
            .get(index)
            .map(|child| self.container.origin() - child.origin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paged_strip() -> GeometrySnapshot {
        GeometrySnapshot::new(
            Rect::new(0.0, 0.0, 300.0, 200.0),
            Rect::new(0.0, 0.0, 900.0, 200.0),
            vec![
                Rect::new(0.0, 0.0, 300.0, 200.0),
                Rect::new(300.0, 0.0, 300.0, 200.0),
                Rect::new(600.0, 0.0, 300.0, 200.0),
            ],
        )
    }

    #[test]
    fn test_min_offset_spans_overflow() {
        let geometry = paged_strip();
        assert_eq!(geometry.min_offset(), Point::new(-600.0, 0.0));
    }

    #[test]
    fn test_undersized_content_pins_to_origin() {
        let geometry = GeometrySnapshot::new(
            Rect::new(0.0, 0.0, 300.0, 200.0),
            Rect::new(0.0, 0.0, 120.0, 80.0),
            Vec::new(),
        );
        assert_eq!(geometry.min_offset(), Point::ZERO);
    }

    #[test]
    fn test_to_local_subtracts_container_origin() {
        let geometry = GeometrySnapshot::new(
            Rect::new(40.0, 25.0, 300.0, 200.0),
            Rect::new(40.0, 25.0, 900.0, 200.0),
            Vec::new(),
        );
        assert_eq!(
            geometry.to_local(Point::new(50.0, 30.0)),
            Point::new(10.0, 5.0)
        );
    }

    #[test]
    fn test_docked_position_negates_child_offset() {
        let geometry = paged_strip();
        assert_eq!(geometry.docked_position(0), Some(Point::ZERO));
        assert_eq!(geometry.docked_position(1), Some(Point::new(-300.0, 0.0)));
        assert_eq!(geometry.docked_position(3), None);
    }

    #[test]
    fn test_docked_position_follows_container_origin() {
        // Children measured in the same absolute frame as an offset container.
        let geometry = GeometrySnapshot::new(
            Rect::new(100.0, 50.0, 300.0, 200.0),
            Rect::new(100.0, 50.0, 900.0, 200.0),
            vec![
                Rect::new(100.0, 50.0, 300.0, 200.0),
                Rect::new(400.0, 50.0, 300.0, 200.0),
            ],
        );
        assert_eq!(geometry.docked_position(1), Some(Point::new(-300.0, 0.0)));
    }
}

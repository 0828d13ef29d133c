//! Drag session state and axis-lock disambiguation.

use crate::options::PanOptions;
use flick_geometry::Point;

/// Pan axis a drag can lock onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Transient record of an in-progress drag. Created on pointer-down,
/// destroyed on pointer-up/cancel; at most one exists per engine.
#[derive(Debug)]
pub(crate) struct DragSession {
    pub started_at_ms: u64,
    /// Engine offset when the drag began; moves are applied relative to it.
    pub start_offset: Point,
    /// Container-relative pointer position at the start of the drag.
    pub start_pointer: Point,
    /// Resolved at most once per session, then never re-evaluated.
    pub lock: Option<Axis>,
}

impl DragSession {
    pub fn new(started_at_ms: u64, start_offset: Point, start_pointer: Point) -> Self {
        Self {
            started_at_ms,
            start_offset,
            start_pointer,
            lock: None,
        }
    }

    /// Resolves the axis lock from a raw pointer delta: the first enabled
    /// axis whose travel exceeds the threshold while the other axis stays
    /// strictly below it wins. Ambiguous samples (both past, neither past,
    /// or both at the boundary) leave the lock unresolved.
    pub fn resolve_axis_lock(&mut self, delta: Point, options: &PanOptions) {
        if !options.axis_lock_enabled || self.lock.is_some() {
            return;
        }
        let threshold = options.axis_lock_threshold_px;
        if options.scroll_x && delta.x.abs() > threshold && delta.y.abs() < threshold {
            self.lock = Some(Axis::X);
        } else if options.scroll_y && delta.y.abs() > threshold && delta.x.abs() < threshold {
            self.lock = Some(Axis::Y);
        }
    }

    /// Zeroes the cross-axis component of `delta` once a lock is resolved.
    pub fn mask_delta(&self, delta: Point) -> Point {
        match self.lock {
            Some(Axis::X) => Point::new(delta.x, 0.0),
            Some(Axis::Y) => Point::new(0.0, delta.y),
            None => delta,
        }
    }
}

/// Per-axis release velocity in px/ms. A zero elapsed time yields zero
/// velocity rather than dividing by it.
pub(crate) fn release_velocity(delta: Point, elapsed_ms: f32) -> Point {
    if elapsed_ms <= 0.0 {
        return Point::ZERO;
    }
    Point::new(delta.x / elapsed_ms, delta.y / elapsed_ms)
}

//! Pointer input samples and gesture lifecycle observation.

use flick_geometry::Point;

/// One pointer event: an absolute position plus a monotonic timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Position in the absolute (page) coordinate frame.
    pub position: Point,
    /// Monotonic event time in ms.
    pub uptime_ms: u64,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32, uptime_ms: u64) -> Self {
        Self {
            position: Point::new(x, y),
            uptime_ms,
        }
    }
}

/// Gesture lifecycle hooks for the embedding collaborator.
///
/// Every method has an empty default body, so an observer implements only
/// what it needs. `scroll` fires once per applied move (coalesced to the
/// rendering tick), not once per raw input sample.
pub trait PanObserver {
    fn scroll_start(&self, sample: &PointerSample) {
        let _ = sample;
    }

    fn scroll(&self, sample: &PointerSample) {
        let _ = sample;
    }

    fn scroll_end(&self, sample: &PointerSample) {
        let _ = sample;
    }
}

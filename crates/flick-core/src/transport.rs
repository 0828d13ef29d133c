//! The rendering-side collaborator contract.

use flick_animation::Easing;
use flick_geometry::{Point, Rect};

/// One emitted transition: the sole instruction the engine hands to the
/// rendering side. A new frame supersedes any frame still animating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    /// Target content offset in px (integer-valued components).
    pub offset: Point,
    /// Transition duration in ms; `0` means apply immediately.
    pub duration_ms: f32,
    pub easing: Easing,
}

/// Surface the engine pans: applies transition frames and reports layout
/// geometry on demand.
///
/// All rectangles share one absolute coordinate frame; the engine performs
/// its own container-relative conversions. Implementations are expected not
/// to call back into the engine from `submit`.
pub trait Transport {
    /// Applies a transition toward `frame.offset` (CSS transform/transition
    /// equivalent).
    fn submit(&self, frame: TransitionFrame);

    /// Bounds of the fixed viewport.
    fn container_rect(&self) -> Rect;

    /// Bounds of the pannable content.
    fn content_rect(&self) -> Rect;

    /// Bounds of each direct child of the content, in order. Queried only
    /// when snapping is enabled.
    fn child_rects(&self) -> Vec<Rect>;

    /// Current rendered offset of a transition still in flight, if the
    /// surface can report one. Used to hand a fresh drag the position the
    /// previous animation had actually reached; `None` falls back to the
    /// last applied target.
    fn flight_position(&self) -> Option<Point> {
        None
    }
}

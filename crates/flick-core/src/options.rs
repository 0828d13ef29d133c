//! Engine configuration.

use flick_animation::GlideCalculator;

/// Configuration for a [`PanEngine`](crate::PanEngine).
///
/// Malformed values (negative threshold, non-positive deceleration) are a
/// caller contract violation and are only checked by debug assertions at
/// engine construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanOptions {
    /// Allow horizontal panning.
    pub scroll_x: bool,
    /// Allow vertical panning.
    pub scroll_y: bool,
    /// Settle onto the nearest child after a gesture or glide.
    pub snap: bool,
    /// Duration of snap transitions in ms.
    pub snap_duration_ms: f32,
    /// Lock a drag to one axis once the gesture direction is unambiguous.
    pub axis_lock_enabled: bool,
    /// Pointer travel in px that resolves the axis lock.
    pub axis_lock_threshold_px: f32,
    /// Continue a released drag with a decelerating glide.
    pub momentum_enabled: bool,
    /// Glide deceleration in px/ms².
    pub deceleration_per_ms: f32,
}

impl Default for PanOptions {
    fn default() -> Self {
        Self {
            scroll_x: false,
            scroll_y: true,
            snap: false,
            snap_duration_ms: 300.0,
            axis_lock_enabled: false,
            axis_lock_threshold_px: 20.0,
            momentum_enabled: true,
            deceleration_per_ms: GlideCalculator::DEFAULT_DECELERATION,
        }
    }
}

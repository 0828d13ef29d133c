//! Constant-deceleration glide physics.
//!
//! A released drag keeps moving with its release velocity and sheds speed at
//! a fixed rate until it stops. The model is closed-form: a glide at
//! `v` px/ms against a deceleration of `k` px/ms² lasts `|v| / k` ms and
//! covers `v² / 2k` px.

/// Computes glide projections for one axis.
#[derive(Debug, Clone, Copy)]
pub struct GlideCalculator {
    deceleration: f32,
}

impl GlideCalculator {
    /// Default deceleration in px/ms².
    pub const DEFAULT_DECELERATION: f32 = 0.0008;

    /// Creates a calculator with the given deceleration in px/ms².
    pub fn new(deceleration_per_ms: f32) -> Self {
        debug_assert!(
            deceleration_per_ms > 0.0,
            "deceleration must be positive, got {}",
            deceleration_per_ms
        );
        Self {
            deceleration: deceleration_per_ms,
        }
    }

    /// Time in ms until a glide starting at `velocity` px/ms stops.
    pub fn glide_duration(&self, velocity: f32) -> f32 {
        velocity.abs() / self.deceleration
    }

    /// Unsigned distance in px a glide starting at `velocity` px/ms covers.
    pub fn glide_distance(&self, velocity: f32) -> f32 {
        (velocity * velocity) / (2.0 * self.deceleration)
    }

    /// Complete projection for a glide starting at `velocity` px/ms.
    pub fn glide_info(&self, velocity: f32) -> GlideInfo {
        GlideInfo {
            initial_velocity: velocity,
            deceleration: self.deceleration,
            distance: self.glide_distance(velocity),
            duration_ms: self.glide_duration(velocity),
        }
    }
}

/// Projection of a single-axis glide.
#[derive(Debug, Clone, Copy)]
pub struct GlideInfo {
    /// Velocity at release, px/ms (signed).
    pub initial_velocity: f32,
    deceleration: f32,
    /// Total unsigned distance that will be traveled, px.
    pub distance: f32,
    /// Total duration, ms.
    pub duration_ms: f32,
}

impl GlideInfo {
    /// Signed displacement from the release point at `time_ms`.
    pub fn position(&self, time_ms: f32) -> f32 {
        if self.is_finished(time_ms) {
            return self.distance * self.initial_velocity.signum();
        }
        let t = time_ms.max(0.0);
        let braking = self.initial_velocity.signum() * 0.5 * self.deceleration * t * t;
        self.initial_velocity * t - braking
    }

    /// Velocity in px/ms at `time_ms` (signed, zero once stopped).
    pub fn velocity(&self, time_ms: f32) -> f32 {
        if self.is_finished(time_ms) {
            return 0.0;
        }
        let t = time_ms.max(0.0);
        self.initial_velocity - self.initial_velocity.signum() * self.deceleration * t
    }

    pub fn is_finished(&self, time_ms: f32) -> bool {
        time_ms >= self.duration_ms
    }

    /// Resting offset for a glide released at `from`.
    pub fn target_from(&self, from: f32) -> f32 {
        from + self.distance * self.initial_velocity.signum()
    }
}

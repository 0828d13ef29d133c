//! Animation support for the Flick panning engine.
//!
//! Two pieces live here: the easing curves attached to emitted transitions
//! (`Easing`), and the constant-deceleration glide model that projects where
//! a released drag comes to rest (`GlideCalculator` / `GlideInfo`).

mod easing;
mod glide;

pub use easing::Easing;
pub use glide::{GlideCalculator, GlideInfo};

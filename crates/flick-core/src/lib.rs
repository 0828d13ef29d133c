//! Flick: an inertial, gesture-driven content panning engine.
//!
//! The engine turns pointer gestures into clamped, eased pan transitions
//! over a fixed viewport: real-time drag tracking with optional axis
//! locking, momentum continuation under a constant-deceleration glide, and
//! settling onto the nearest child element. Rendering, event wiring, and
//! resize debouncing stay with the embedding collaborator behind the
//! [`Transport`] trait.

pub mod clock;
pub mod engine;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod options;
pub mod snap;
pub mod transport;


pub use clock::{TimerId, TimerQueue};
pub use engine::{CompletionFn, PanEngine};
pub use geometry::GeometrySnapshot;
pub use gesture::Axis;
pub use input::{PanObserver, PointerSample};
pub use options::PanOptions;
pub use snap::nearest_child_index;
pub use transport::{TransitionFrame, Transport};

// Re-export the sibling crates the public API is expressed in.
pub use flick_animation::{Easing, GlideCalculator, GlideInfo};
pub use flick_geometry::{Point, Rect};

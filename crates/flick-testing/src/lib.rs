//! Testing utilities for the flick panning engine.
//!
//! Provides a [`RecordingTransport`] that scripts geometry and logs every
//! submitted frame, an [`ObserverLog`] for gesture lifecycle assertions,
//! and a [`GestureRobot`] harness that drives an engine with synthetic
//! pointer traffic and frame ticks.

mod observer;
mod robot;
mod transport;

pub use observer::{GestureEvent, ObserverLog};
pub use robot::{sample, GestureRobot};
pub use transport::RecordingTransport;

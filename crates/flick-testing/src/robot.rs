use crate::observer::ObserverLog;
use crate::transport::RecordingTransport;
use flick_core::{PanEngine, PanOptions, PointerSample, TransitionFrame};
use flick_geometry::Point;
use std::cell::Cell;
use std::rc::Rc;

/// Builds a pointer sample at a position and timestamp.
pub fn sample(x: f32, y: f32, at_ms: u64) -> PointerSample {
    PointerSample::new(x, y, at_ms)
}

/// Headless harness that wraps a [`PanEngine`] with a [`RecordingTransport`]
/// to enable black-box gesture tests.
///
/// The robot exposes pointer interactions (press, move, release, cancel),
/// frame stepping, and the transport's frame log so tests can assert on
/// exactly what the engine handed to the presentation side.
pub struct GestureRobot {
    engine: PanEngine,
    transport: Rc<RecordingTransport>,
    now_ms: Cell<u64>,
}

impl GestureRobot {
    /// Launch a robot over an existing transport.
    pub fn launch(transport: Rc<RecordingTransport>, options: PanOptions) -> Self {
        let engine = PanEngine::new(transport.clone(), options);
        Self {
            engine,
            transport,
            now_ms: Cell::new(0),
        }
    }

    /// Launch a robot over a horizontal pager of `count` pages, container
    /// sized to one page.
    pub fn horizontal_pager(count: usize, width: f32, height: f32, options: PanOptions) -> Self {
        Self::launch(RecordingTransport::horizontal_pages(count, width, height), options)
    }

    pub fn engine(&self) -> &PanEngine {
        &self.engine
    }

    pub fn transport(&self) -> &RecordingTransport {
        &self.transport
    }

    /// Install a fresh [`ObserverLog`] on the engine and return it.
    pub fn observe(&self) -> Rc<ObserverLog> {
        let log = Rc::new(ObserverLog::new());
        self.engine.set_observer(Some(log.clone()));
        log
    }

    /// The latest timestamp the robot has fed to the engine.
    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    pub fn press(&self, x: f32, y: f32, at_ms: u64) {
        self.advance(at_ms);
        self.engine.pointer_down(sample(x, y, at_ms));
    }

    pub fn move_pointer(&self, x: f32, y: f32, at_ms: u64) {
        self.advance(at_ms);
        self.engine.pointer_move(sample(x, y, at_ms));
    }

    pub fn release(&self, x: f32, y: f32, at_ms: u64) {
        self.advance(at_ms);
        self.engine.pointer_up(sample(x, y, at_ms));
    }

    pub fn cancel(&self, x: f32, y: f32, at_ms: u64) {
        self.advance(at_ms);
        self.engine.pointer_cancel(sample(x, y, at_ms));
    }

    /// Run one animation tick at the given timestamp.
    pub fn tick(&self, at_ms: u64) {
        self.advance(at_ms);
        self.engine.on_frame(at_ms);
    }

    /// Run one animation tick `delta_ms` after the latest timestamp.
    pub fn step(&self, delta_ms: u64) {
        self.tick(self.now_ms.get() + delta_ms);
    }

    /// Tick in `step_ms` increments until the engine stops asking for
    /// frames.
    pub fn pump_until_idle(&self, step_ms: u64) {
        for _ in 0..10_000 {
            if !self.engine.needs_frame() {
                return;
            }
            self.step(step_ms.max(1));
        }
        panic!("pump_until_idle looped too many times!");
    }

    /// Press at `from`, interpolate `steps` applied moves, and release at
    /// `to` after `duration_ms`.
    pub fn swipe(&self, from: Point, to: Point, start_ms: u64, duration_ms: u64, steps: u32) {
        self.press(from.x, from.y, start_ms);
        let increments = (steps + 1) as f32;
        let stride = Point::new((to.x - from.x) / increments, (to.y - from.y) / increments);
        let mut cursor = from;
        for i in 1..=steps {
            cursor += stride;
            let at = start_ms + u64::from(i) * duration_ms / u64::from(steps + 1);
            self.move_pointer(cursor.x, cursor.y, at);
            self.tick(at);
        }
        self.release(to.x, to.y, start_ms + duration_ms);
    }

    pub fn frames(&self) -> Vec<TransitionFrame> {
        self.transport.frames()
    }

    pub fn last_frame(&self) -> Option<TransitionFrame> {
        self.transport.last_frame()
    }

    pub fn clear_frames(&self) {
        self.transport.clear_frames();
    }

    fn advance(&self, at_ms: u64) {
        if at_ms > self.now_ms.get() {
            self.now_ms.set(at_ms);
        }
    }
}

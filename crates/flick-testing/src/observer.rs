use flick_core::{PanObserver, PointerSample};
use flick_geometry::Point;
use std::cell::RefCell;

/// One recorded gesture lifecycle notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Start(Point),
    Scroll(Point),
    End(Point),
}

/// [`PanObserver`] that records every notification for later assertions.
#[derive(Default)]
pub struct ObserverLog {
    events: RefCell<Vec<GestureEvent>>,
}

impl ObserverLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GestureEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl PanObserver for ObserverLog {
    fn scroll_start(&self, sample: &PointerSample) {
        self.events
            .borrow_mut()
            .push(GestureEvent::Start(sample.position));
    }

    fn scroll(&self, sample: &PointerSample) {
        self.events
            .borrow_mut()
            .push(GestureEvent::Scroll(sample.position));
    }

    fn scroll_end(&self, sample: &PointerSample) {
        self.events
            .borrow_mut()
            .push(GestureEvent::End(sample.position));
    }
}

use flick_core::{TransitionFrame, Transport};
use flick_geometry::{Point, Rect};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// In-memory [`Transport`] with scriptable geometry and a frame log.
///
/// Tests mutate the geometry between engine calls to simulate layout
/// changes, and read the submitted frames back to assert on what the
/// engine handed to the presentation side.
pub struct RecordingTransport {
    container: Cell<Rect>,
    content: Cell<Rect>,
    children: RefCell<Vec<Rect>>,
    frames: RefCell<Vec<TransitionFrame>>,
    flight: Cell<Option<Point>>,
}

impl RecordingTransport {
    pub fn new(container: Rect, content: Rect) -> Rc<Self> {
        Rc::new(Self {
            container: Cell::new(container),
            content: Cell::new(content),
            children: RefCell::new(Vec::new()),
            frames: RefCell::new(Vec::new()),
            flight: Cell::new(None),
        })
    }

    /// A horizontal strip of `count` pages, each `width` x `height`, with
    /// the container sized to exactly one page.
    pub fn horizontal_pages(count: usize, width: f32, height: f32) -> Rc<Self> {
        let page = Rect::new(0.0, 0.0, width, height);
        let transport = Self::new(page, Rect::new(0.0, 0.0, width * count as f32, height));
        let pages = (0..count)
            .map(|i| page.translate(i as f32 * width, 0.0))
            .collect();
        *transport.children.borrow_mut() = pages;
        transport
    }

    pub fn set_container(&self, rect: Rect) {
        self.container.set(rect);
    }

    pub fn set_content(&self, rect: Rect) {
        self.content.set(rect);
    }

    pub fn set_children(&self, rects: Vec<Rect>) {
        *self.children.borrow_mut() = rects;
    }

    /// Scripts the position a subsequent `flight_position` call reports,
    /// standing in for a presentation layer that can sample mid-animation.
    pub fn set_flight_position(&self, position: Option<Point>) {
        self.flight.set(position);
    }

    /// Every frame submitted so far, oldest first.
    pub fn frames(&self) -> Vec<TransitionFrame> {
        self.frames.borrow().clone()
    }

    pub fn last_frame(&self) -> Option<TransitionFrame> {
        self.frames.borrow().last().copied()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn clear_frames(&self) {
        self.frames.borrow_mut().clear();
    }
}

impl Transport for RecordingTransport {
    fn submit(&self, frame: TransitionFrame) {
        self.frames.borrow_mut().push(frame);
    }

    fn container_rect(&self) -> Rect {
        self.container.get()
    }

    fn content_rect(&self) -> Rect {
        self.content.get()
    }

    fn child_rects(&self) -> Vec<Rect> {
        self.children.borrow().clone()
    }

    fn flight_position(&self) -> Option<Point> {
        self.flight.get()
    }
}

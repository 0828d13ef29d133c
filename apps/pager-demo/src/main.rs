use flick_core::{
    PanEngine, PanObserver, PanOptions, PointerSample, TransitionFrame, Transport,
};
use flick_geometry::Rect;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_time::Instant;

/// Transport that prints every frame instead of driving a real renderer.
struct ConsoleTransport {
    container: Cell<Rect>,
    content: Cell<Rect>,
    pages: RefCell<Vec<Rect>>,
}

impl ConsoleTransport {
    fn paged(count: usize, width: f32, height: f32) -> Rc<Self> {
        let transport = Rc::new(Self {
            container: Cell::new(Rect::new(0.0, 0.0, width, height)),
            content: Cell::new(Rect::new(0.0, 0.0, width * count as f32, height)),
            pages: RefCell::new(Vec::new()),
        });
        transport.lay_out_pages(count, width, height);
        transport
    }

    fn lay_out_pages(&self, count: usize, width: f32, height: f32) {
        let first = Rect::new(0.0, 0.0, width, height);
        self.container.set(first);
        self.content
            .set(Rect::new(0.0, 0.0, width * count as f32, height));
        *self.pages.borrow_mut() = (0..count)
            .map(|i| first.translate(i as f32 * width, 0.0))
            .collect();
    }

    /// Swaps the container's orientation and re-lays the pages out.
    fn rotate(&self) {
        let container = self.container.get();
        let count = self.pages.borrow().len();
        self.lay_out_pages(count, container.height, container.width);
    }

    fn page_width(&self) -> f32 {
        self.container.get().width
    }
}

impl Transport for ConsoleTransport {
    fn submit(&self, frame: TransitionFrame) {
        log::info!(
            "frame: offset=({:>5.0}, {:>4.0})  duration={:>6.1}ms  easing={:?}",
            frame.offset.x,
            frame.offset.y,
            frame.duration_ms,
            frame.easing
        );
    }

    fn container_rect(&self) -> Rect {
        self.container.get()
    }

    fn content_rect(&self) -> Rect {
        self.content.get()
    }

    fn child_rects(&self) -> Vec<Rect> {
        self.pages.borrow().clone()
    }
}

struct ConsoleObserver;

impl PanObserver for ConsoleObserver {
    fn scroll_start(&self, sample: &PointerSample) {
        log::info!("gesture: down at ({}, {})", sample.position.x, sample.position.y);
    }

    fn scroll_end(&self, sample: &PointerSample) {
        log::info!("gesture: up at ({}, {})", sample.position.x, sample.position.y);
    }
}

fn drive_to_rest(engine: &PanEngine, now_ms: &mut u64) {
    while engine.needs_frame() {
        *now_ms += 16;
        engine.on_frame(*now_ms);
    }
}

fn current_page(engine: &PanEngine, transport: &ConsoleTransport) -> usize {
    (-engine.offset().x / transport.page_width()).round() as usize
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Flick Pager Demo ===");
    println!("Simulates a swipe across a 3-page strip to show:");
    println!("  - Drag frames coalesced to one per tick");
    println!("  - Momentum projection clamped at the strip's edge");
    println!("  - Snap settling onto the nearest page");
    println!("  - refresh() re-docking pages after a rotation");
    println!();

    let launched = Instant::now();
    let transport = ConsoleTransport::paged(3, 320.0, 480.0);
    let options = PanOptions {
        scroll_x: true,
        scroll_y: false,
        snap: true,
        ..Default::default()
    };
    let engine = PanEngine::new(transport.clone(), options);
    engine.set_observer(Some(Rc::new(ConsoleObserver)));

    // A fast leftward swipe: six 40px moves at 16ms apart, then release.
    let mut now_ms: u64 = 0;
    log::info!("-- swipe left across page 0 --");
    engine.pointer_down(PointerSample::new(300.0, 240.0, now_ms));
    for step in 1..=6u32 {
        now_ms += 16;
        let x = 300.0 - 40.0 * step as f32;
        engine.pointer_move(PointerSample::new(x, 240.0, now_ms));
        engine.on_frame(now_ms);
    }
    now_ms += 16;
    engine.pointer_up(PointerSample::new(44.0, 240.0, now_ms));
    drive_to_rest(&engine, &mut now_ms);
    log::info!("settled on page {}", current_page(&engine, &transport));

    log::info!("-- programmatic snap back to page 1 --");
    engine.snap_to(1);
    drive_to_rest(&engine, &mut now_ms);
    log::info!("settled on page {}", current_page(&engine, &transport));

    log::info!("-- rotate the container and refresh --");
    transport.rotate();
    engine.refresh();
    drive_to_rest(&engine, &mut now_ms);
    log::info!(
        "re-docked on page {} at offset ({}, {})",
        current_page(&engine, &transport),
        engine.offset().x,
        engine.offset().y
    );

    println!();
    println!(
        "Simulated {}ms of gesture time in {:?}.",
        now_ms,
        launched.elapsed()
    );
}

//! The pan engine.
//!
//! `PanEngine` owns the authoritative content offset and everything that
//! mutates it: drag tracking, boundary clamping, momentum projection, and
//! snap settling. It is event-driven and never blocks — pointer events and
//! an embedder-driven animation tick (`on_frame`) move it forward, and every
//! offset change leaves the engine as exactly one `TransitionFrame` handed
//! to the [`Transport`].
//!
//! Cancellation follows one rule: a newly applied transition supersedes
//! whatever was pending, so a stale momentum or snap completion never fires
//! after a fresh gesture or programmatic scroll has taken over.

use crate::clock::{TimerId, TimerQueue};
use crate::geometry::GeometrySnapshot;
use crate::gesture::{release_velocity, Axis, DragSession};
use crate::input::{PanObserver, PointerSample};
use crate::options::PanOptions;
use crate::snap::nearest_child_index;
use crate::transport::{TransitionFrame, Transport};
use flick_animation::{Easing, GlideCalculator};
use flick_geometry::{Point, Rect};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PAN_ENGINE_ID: AtomicU64 = AtomicU64::new(1);

/// Callback run when a transition completes without being superseded.
pub type CompletionFn = Box<dyn FnOnce()>;

/// Gesture-driven inertial panning over one content surface.
///
/// Cheap to clone; clones share the same engine state. All methods take
/// `&self` — the engine is single-threaded and interior-mutable, in line
/// with its event-driven model.
#[derive(Clone)]
pub struct PanEngine {
    inner: Rc<EngineInner>,
}

struct EngineInner {
    /// Unique ID for logging.
    id: u64,
    options: PanOptions,
    transport: Rc<dyn Transport>,
    observer: RefCell<Option<Rc<dyn PanObserver>>>,
    geometry: RefCell<GeometrySnapshot>,
    /// Authoritative offset, integer-valued after every apply.
    offset: Cell<Point>,
    /// Latest timestamp seen from any event or tick.
    now_ms: Cell<f64>,
    /// When the most recent non-zero-duration transition lands.
    animation_ends_at: Cell<f64>,
    drag: RefCell<Option<DragSession>>,
    /// Latest unapplied move this tick; excess samples are dropped.
    pending_move: RefCell<Option<PointerSample>>,
    timers: TimerQueue,
    pending_completion: Cell<Option<TimerId>>,
}

impl PanEngine {
    /// Creates an engine over `transport` and performs the initial geometry
    /// measurement.
    pub fn new(transport: Rc<dyn Transport>, options: PanOptions) -> Self {
        debug_assert!(
            options.axis_lock_threshold_px >= 0.0,
            "axis lock threshold must not be negative"
        );
        debug_assert!(
            options.deceleration_per_ms > 0.0,
            "deceleration must be positive"
        );
        debug_assert!(
            options.snap_duration_ms >= 0.0,
            "snap duration must not be negative"
        );

        let engine = Self {
            inner: Rc::new(EngineInner {
                id: NEXT_PAN_ENGINE_ID.fetch_add(1, Ordering::Relaxed),
                options,
                transport,
                observer: RefCell::new(None),
                geometry: RefCell::new(GeometrySnapshot::new(
                    Rect::default(),
                    Rect::default(),
                    Vec::new(),
                )),
                offset: Cell::new(Point::ZERO),
                now_ms: Cell::new(0.0),
                animation_ends_at: Cell::new(0.0),
                drag: RefCell::new(None),
                pending_move: RefCell::new(None),
                timers: TimerQueue::new(),
                pending_completion: Cell::new(None),
            }),
        };
        engine.measure_geometry();
        engine
    }

    pub fn id(&self) -> u64 {
        self.inner.id
    }

    pub fn options(&self) -> PanOptions {
        self.inner.options
    }

    /// The authoritative content offset (integer-valued components).
    pub fn offset(&self) -> Point {
        self.inner.offset.get()
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.drag.borrow().is_some()
    }

    /// Whether the embedder needs to keep driving `on_frame`: a coalesced
    /// move is waiting, or a completion timer is parked.
    pub fn needs_frame(&self) -> bool {
        self.inner.pending_move.borrow().is_some() || self.inner.timers.has_pending()
    }

    /// Registers (or clears) the gesture lifecycle observer.
    pub fn set_observer(&self, observer: Option<Rc<dyn PanObserver>>) {
        *self.inner.observer.borrow_mut() = observer;
    }

    /// The current geometry snapshot.
    pub fn geometry(&self) -> GeometrySnapshot {
        self.inner.geometry.borrow().clone()
    }

    /// Re-measures container, content, and (when snapping) child bounds.
    ///
    /// Measurements are taken with the in-flight transform neutralized and
    /// restored afterwards, so they reflect untransformed layout. Outside a
    /// drag the offset is then re-clamped into the new bounds, and snapping
    /// re-settles onto the nearest child. Idempotent; debouncing of resize
    /// storms is the caller's job.
    pub fn refresh(&self) {
        let options = self.inner.options;
        self.measure_geometry();

        // A live drag keeps its session; the next move re-clamps anyway.
        if self.inner.drag.borrow().is_some() {
            return;
        }
        if options.snap {
            self.snap_to_nearest();
        } else {
            let current = self.offset();
            let min = self.inner.geometry.borrow().min_offset();
            let clamped = Point::new(
                if options.scroll_x {
                    current.x.clamp(min.x, 0.0)
                } else {
                    current.x
                },
                if options.scroll_y {
                    current.y.clamp(min.y, 0.0)
                } else {
                    current.y
                },
            );
            if clamped != current {
                self.apply(clamped, 0.0, Easing::default(), None);
            }
        }
    }

    /// Begins a drag. Ignored while another drag is active. Interrupting a
    /// settling animation cancels its pending completion and adopts the
    /// animation's current position as the new drag's baseline.
    pub fn pointer_down(&self, sample: PointerSample) {
        self.advance_now(sample.uptime_ms as f64);
        if self.inner.drag.borrow().is_some() {
            return;
        }
        let interrupted = self.animation_in_flight();
        self.cancel_pending_completion();
        if interrupted {
            let baseline = self
                .inner
                .transport
                .flight_position()
                .unwrap_or_else(|| self.offset());
            // Zero-duration halt frame; also freezes the transport.
            self.apply(baseline, 0.0, Easing::default(), None);
        }
        let start_offset = self.offset();
        let local = self.inner.geometry.borrow().to_local(sample.position);
        *self.inner.drag.borrow_mut() =
            Some(DragSession::new(sample.uptime_ms, start_offset, local));
        self.notify(|observer| observer.scroll_start(&sample));
    }

    /// Tracks a drag move. Axis-lock resolution sees every raw sample, but
    /// application is coalesced: only the latest sample per tick is applied,
    /// by the next `on_frame`.
    pub fn pointer_move(&self, sample: PointerSample) {
        self.advance_now(sample.uptime_ms as f64);
        let mut drag = self.inner.drag.borrow_mut();
        let Some(session) = drag.as_mut() else {
            return;
        };
        let local = self.inner.geometry.borrow().to_local(sample.position);
        let delta = local - session.start_pointer;
        session.resolve_axis_lock(delta, &self.inner.options);
        drop(drag);
        *self.inner.pending_move.borrow_mut() = Some(sample);
    }

    /// Ends a drag: applies any still-pending move, then hands the release
    /// delta to the momentum/snap pipeline per configuration.
    pub fn pointer_up(&self, sample: PointerSample) {
        self.advance_now(sample.uptime_ms as f64);
        if self.inner.drag.borrow().is_none() {
            return;
        }
        let pending = self.inner.pending_move.borrow_mut().take();
        if let Some(pending) = pending {
            self.apply_move(&pending);
        }
        let session = self.inner.drag.borrow_mut().take();
        let Some(session) = session else {
            return;
        };
        let local = self.inner.geometry.borrow().to_local(sample.position);
        let delta = session.mask_delta(local - session.start_pointer);
        let elapsed_ms = sample.uptime_ms.saturating_sub(session.started_at_ms) as f32;
        self.finish_gesture(session.lock, delta, elapsed_ms);
        self.notify(|observer| observer.scroll_end(&sample));
    }

    /// Treats a platform cancellation like a release at the same position.
    pub fn pointer_cancel(&self, sample: PointerSample) {
        self.pointer_up(sample);
    }

    /// Animation tick: applies the coalesced move of this tick, then fires
    /// due completion timers.
    pub fn on_frame(&self, now_ms: u64) {
        self.advance_now(now_ms as f64);
        let pending = self.inner.pending_move.borrow_mut().take();
        if let Some(pending) = pending {
            self.apply_move(&pending);
        }
        for callback in self.inner.timers.take_due(self.inner.now_ms.get()) {
            callback();
        }
    }

    /// Animated programmatic scroll; the target is clamped like any other.
    pub fn scroll_to(&self, target: Point, duration_ms: f32, easing: Easing) -> Point {
        self.apply(target, duration_ms, easing, None)
    }

    /// Applies a desired offset: clamps per enabled axis, scales the
    /// duration by how much of the intended move survived clamping, rounds
    /// to integer pixels, and emits exactly one `TransitionFrame`. Any
    /// previously pending completion is cancelled first. Returns the
    /// applied offset.
    ///
    /// Components on disabled axes are ignored; the current value passes
    /// through unchanged.
    pub fn apply(
        &self,
        desired: Point,
        duration_ms: f32,
        easing: Easing,
        on_complete: Option<CompletionFn>,
    ) -> Point {
        self.cancel_pending_completion();
        let options = self.inner.options;
        let current = self.inner.offset.get();
        let min = self.inner.geometry.borrow().min_offset();

        let mut accepted = current;
        let mut clamp_ratio: Option<f32> = None;
        let fold = |ratio: Option<f32>, clamp_ratio: &mut Option<f32>| {
            if let Some(ratio) = ratio {
                *clamp_ratio = Some(clamp_ratio.map_or(ratio, |previous| previous.min(ratio)));
            }
        };
        if options.scroll_x {
            let (value, ratio) = clamp_axis(desired.x, current.x, min.x);
            accepted.x = value;
            fold(ratio, &mut clamp_ratio);
        }
        if options.scroll_y {
            let (value, ratio) = clamp_axis(desired.y, current.y, min.y);
            accepted.y = value;
            fold(ratio, &mut clamp_ratio);
        }

        let scheduled_ms = match clamp_ratio {
            Some(ratio) => duration_ms * ratio,
            None => duration_ms,
        };
        let target = accepted.round();
        self.inner.offset.set(target);
        self.emit(TransitionFrame {
            offset: target,
            duration_ms: scheduled_ms,
            easing,
        });

        let ends_at = self.inner.now_ms.get() + f64::from(scheduled_ms);
        self.inner.animation_ends_at.set(ends_at);
        if let Some(on_complete) = on_complete {
            let weak = Rc::downgrade(&self.inner);
            let id = self.inner.timers.schedule(
                ends_at,
                Box::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.pending_completion.set(None);
                    }
                    on_complete();
                }),
            );
            self.inner.pending_completion.set(Some(id));
        }
        target
    }

    /// Snaps to child `index` with the configured duration and the glide
    /// curve. `false` when the index is outside the cached children.
    pub fn snap_to(&self, index: usize) -> bool {
        self.snap_to_with(index, self.inner.options.snap_duration_ms, Easing::Glide, None)
    }

    /// Snaps to child `index` with explicit duration, easing, and an
    /// optional completion.
    pub fn snap_to_with(
        &self,
        index: usize,
        duration_ms: f32,
        easing: Easing,
        on_complete: Option<CompletionFn>,
    ) -> bool {
        let docked = self.inner.geometry.borrow().docked_position(index);
        let Some(target) = docked else {
            log::warn!(
                "[pan {}] snap_to({}) outside the {} cached children",
                self.inner.id,
                index,
                self.inner.geometry.borrow().children.len()
            );
            return false;
        };
        self.apply(target, duration_ms, easing, on_complete);
        true
    }

    /// Snaps to the nearest child. `false` when no children are cached.
    pub fn snap_to_nearest(&self) -> bool {
        let nearest = {
            let geometry = self.inner.geometry.borrow();
            nearest_child_index(self.offset(), &geometry)
        };
        match nearest {
            Some(index) => self.snap_to(index),
            None => false,
        }
    }

    /// Replaces the geometry snapshot with fresh measurements, taken with
    /// the in-flight transform neutralized and restored afterwards.
    fn measure_geometry(&self) {
        let snapshot = {
            let _restore = NeutralizedTransform::begin(self);
            let container = self.inner.transport.container_rect();
            let content = self.inner.transport.content_rect();
            let children = if self.inner.options.snap {
                self.inner.transport.child_rects()
            } else {
                Vec::new()
            };
            GeometrySnapshot::new(container, content, children)
        };
        log::debug!(
            "[pan {}] geometry: container {:?}, content {:?}, {} children",
            self.inner.id,
            snapshot.container,
            snapshot.content,
            snapshot.children.len()
        );
        *self.inner.geometry.borrow_mut() = snapshot;
    }

    fn advance_now(&self, timestamp_ms: f64) {
        if timestamp_ms > self.inner.now_ms.get() {
            self.inner.now_ms.set(timestamp_ms);
        }
    }

    fn animation_in_flight(&self) -> bool {
        self.inner.pending_completion.get().is_some()
            || self.inner.now_ms.get() < self.inner.animation_ends_at.get()
    }

    fn cancel_pending_completion(&self) {
        if let Some(id) = self.inner.pending_completion.take() {
            self.inner.timers.cancel(id);
        }
    }

    /// Applies one coalesced move: start offset plus the lock-masked delta,
    /// as an immediate transition.
    fn apply_move(&self, sample: &PointerSample) {
        let (start_offset, masked) = {
            let drag = self.inner.drag.borrow();
            let Some(session) = drag.as_ref() else {
                return;
            };
            let local = self.inner.geometry.borrow().to_local(sample.position);
            (
                session.start_offset,
                session.mask_delta(local - session.start_pointer),
            )
        };
        self.apply(start_offset + masked, 0.0, Easing::default(), None);
        self.notify(|observer| observer.scroll(sample));
    }

    /// Release pipeline: project momentum on the dominant axis, chain the
    /// snap step as the glide's completion, or snap directly when momentum
    /// is off or degenerate.
    fn finish_gesture(&self, lock: Option<Axis>, delta: Point, elapsed_ms: f32) {
        let options = self.inner.options;
        if !options.momentum_enabled {
            if options.snap {
                self.snap_to_nearest();
            }
            return;
        }

        let mut velocity = release_velocity(delta, elapsed_ms);
        if !options.scroll_x {
            velocity.x = 0.0;
        }
        if !options.scroll_y {
            velocity.y = 0.0;
        }
        let dominant = match lock {
            Some(Axis::X) => velocity.x,
            Some(Axis::Y) => velocity.y,
            None => {
                if velocity.x.abs() >= velocity.y.abs() {
                    velocity.x
                } else {
                    velocity.y
                }
            }
        };
        if dominant.abs() < f32::EPSILON {
            // Nothing to glide; settle immediately instead of scheduling a
            // no-op timer.
            if options.snap {
                self.snap_to_nearest();
            }
            return;
        }

        let calculator = GlideCalculator::new(options.deceleration_per_ms);
        let duration_ms = calculator.glide_duration(dominant);
        let current = self.offset();
        let target = Point::new(
            calculator.glide_info(velocity.x).target_from(current.x),
            calculator.glide_info(velocity.y).target_from(current.y),
        );
        let on_complete = if options.snap {
            let weak = Rc::downgrade(&self.inner);
            Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    PanEngine { inner }.snap_to_nearest();
                }
            }) as CompletionFn)
        } else {
            None
        };
        self.apply(target, duration_ms, Easing::Glide, on_complete);
    }

    fn notify(&self, hook: impl FnOnce(&dyn PanObserver)) {
        let observer = self.inner.observer.borrow().clone();
        if let Some(observer) = observer {
            hook(observer.as_ref());
        }
    }

    fn emit(&self, frame: TransitionFrame) {
        log::trace!(
            "[pan {}] -> ({}, {}) over {}ms",
            self.inner.id,
            frame.offset.x,
            frame.offset.y,
            frame.duration_ms
        );
        self.inner.transport.submit(frame);
    }
}

/// Scoped render-state override for measurement: emits a zero offset with
/// zero duration on entry and restores the pre-measure offset on drop, on
/// every exit path.
struct NeutralizedTransform {
    transport: Rc<dyn Transport>,
    restore_to: Point,
}

impl NeutralizedTransform {
    fn begin(engine: &PanEngine) -> Self {
        let transport = Rc::clone(&engine.inner.transport);
        let restore_to = engine.inner.offset.get();
        transport.submit(TransitionFrame {
            offset: Point::ZERO,
            duration_ms: 0.0,
            easing: Easing::default(),
        });
        Self {
            transport,
            restore_to,
        }
    }
}

impl Drop for NeutralizedTransform {
    fn drop(&mut self) {
        self.transport.submit(TransitionFrame {
            offset: self.restore_to,
            duration_ms: 0.0,
            easing: Easing::default(),
        });
    }
}

/// Clamps one axis into `[min, 0]`. Returns the accepted value and, when
/// clamping occurred, the fraction of the intended move that survived. A
/// zero intended move contributes no ratio.
fn clamp_axis(desired: f32, previous: f32, min: f32) -> (f32, Option<f32>) {
    if desired >= min && desired <= 0.0 {
        return (desired, None);
    }
    let accepted = desired.clamp(min, 0.0);
    let intended = (desired - previous).abs();
    if intended < f32::EPSILON {
        return (accepted, None);
    }
    let realized = (accepted - previous).abs();
    // A stale out-of-bounds previous offset could push the ratio past one;
    // clamping never lengthens an animation.
    (accepted, Some((realized / intended).min(1.0)))
}

//! End-to-end gesture scenarios driven through the testing harness.

use flick_core::{Easing, PanOptions, Point, Rect};
use flick_testing::{GestureEvent, GestureRobot, RecordingTransport};

fn pager_options() -> PanOptions {
    PanOptions {
        scroll_x: true,
        scroll_y: false,
        snap: true,
        ..Default::default()
    }
}

fn pager() -> GestureRobot {
    let robot = GestureRobot::horizontal_pager(3, 300.0, 200.0, pager_options());
    robot.clear_frames();
    robot
}

#[test]
fn test_short_flick_glides_then_snaps_back_to_origin() {
    let robot = pager();

    // 50px leftward release over 200ms, no intermediate moves.
    robot.press(200.0, 100.0, 1_000);
    robot.release(150.0, 100.0, 1_200);

    // v = -0.25 px/ms: glide lasts |v|/k = 312.5ms and travels
    // v^2/2k = 39.0625px, rounded to a whole pixel.
    let glide = robot.last_frame().unwrap();
    assert_eq!(glide.offset, Point::new(-39.0, 0.0));
    assert!((glide.duration_ms - 312.5).abs() < 0.5);
    assert_eq!(glide.easing, Easing::Glide);
    assert!(robot.engine().needs_frame());

    robot.pump_until_idle(16);

    // -39 is closer to page 0 than to page 1 at -300.
    let settle = robot.last_frame().unwrap();
    assert_eq!(settle.offset, Point::ZERO);
    assert_eq!(settle.duration_ms, 300.0);
    assert_eq!(settle.easing, Easing::Glide);
    assert_eq!(robot.engine().offset(), Point::ZERO);
    assert!(!robot.engine().needs_frame());
}

#[test]
fn test_new_drag_interrupts_settling_animation() {
    let robot = pager();

    robot.press(200.0, 100.0, 1_000);
    robot.release(150.0, 100.0, 1_200);
    assert!(robot.engine().needs_frame());

    // The presentation layer reports the glide mid-flight at -20.
    robot.transport().set_flight_position(Some(Point::new(-20.0, 0.0)));
    robot.press(180.0, 100.0, 1_300);

    assert!(robot.engine().is_dragging());
    assert_eq!(robot.engine().offset(), Point::new(-20.0, 0.0));
    let halt = robot.last_frame().unwrap();
    assert_eq!(halt.offset, Point::new(-20.0, 0.0));
    assert_eq!(halt.duration_ms, 0.0);
    assert!(!robot.engine().needs_frame(), "old completion must be gone");

    // Stationary release: nothing to glide, so the engine snaps directly.
    robot.release(180.0, 100.0, 1_320);
    let settle = robot.last_frame().unwrap();
    assert_eq!(settle.offset, Point::ZERO);
    assert_eq!(settle.duration_ms, 300.0);
    assert!(!robot.engine().needs_frame());

    // glide, halt, snap: the superseded completion never added a frame.
    assert_eq!(robot.frames().len(), 3);
    robot.tick(10_000);
    assert_eq!(robot.frames().len(), 3);
}

#[test]
fn test_moves_coalesce_to_one_frame_per_tick() {
    let robot = pager();
    let log = robot.observe();

    robot.press(290.0, 100.0, 0);
    robot.clear_frames();
    robot.move_pointer(260.0, 100.0, 16);
    robot.move_pointer(240.0, 100.0, 24);
    robot.move_pointer(215.0, 100.0, 32);
    robot.tick(32);

    // Only the latest of the three samples is applied.
    assert_eq!(robot.frames().len(), 1);
    let frame = robot.last_frame().unwrap();
    assert_eq!(frame.offset, Point::new(-75.0, 0.0));
    assert_eq!(frame.duration_ms, 0.0);
    assert_eq!(frame.easing, Easing::Linear, "drag frames take the neutral curve");
    assert_eq!(
        log.events(),
        vec![
            GestureEvent::Start(Point::new(290.0, 100.0)),
            GestureEvent::Scroll(Point::new(215.0, 100.0)),
        ]
    );
}

#[test]
fn test_release_notifies_end_before_glide_lands() {
    let robot = pager();
    let log = robot.observe();

    robot.press(290.0, 100.0, 0);
    robot.move_pointer(240.0, 100.0, 40);
    robot.tick(40);
    robot.release(190.0, 100.0, 80);

    let events = log.events();
    assert_eq!(events.last(), Some(&GestureEvent::End(Point::new(190.0, 100.0))));
    assert!(
        robot.engine().needs_frame(),
        "the glide keeps animating after the gesture ends"
    );

    robot.pump_until_idle(16);
    // Fast enough to clamp into the far edge, which is page 2's dock.
    assert_eq!(robot.engine().offset(), Point::new(-600.0, 0.0));
}

#[test]
fn test_axis_lock_masks_cross_axis_momentum() {
    let transport = RecordingTransport::new(
        Rect::new(0.0, 0.0, 300.0, 200.0),
        Rect::new(0.0, 0.0, 900.0, 600.0),
    );
    let options = PanOptions {
        scroll_x: true,
        scroll_y: true,
        axis_lock_enabled: true,
        ..Default::default()
    };
    let robot = GestureRobot::launch(transport, options);
    robot.clear_frames();

    robot.press(150.0, 100.0, 0);
    // First decisive sample: 30px of x against 5px of y locks the x axis.
    robot.move_pointer(120.0, 105.0, 30);
    robot.tick(30);
    robot.move_pointer(90.0, 140.0, 80);
    robot.tick(80);
    robot.release(90.0, 140.0, 100);

    for frame in robot.frames() {
        assert_eq!(frame.offset.y, 0.0, "locked gesture leaked onto y");
    }
    // Masked release delta (-60, 0) over 100ms: vx = -0.6, travelling
    // 0.36/0.0016 = 225px past the -60 reached while dragging.
    let glide = robot.last_frame().unwrap();
    assert_eq!(glide.offset, Point::new(-285.0, 0.0));
    assert!((glide.duration_ms - 750.0).abs() < 0.5);
}

#[test]
fn test_edge_release_collapses_glide_duration() {
    let robot = pager();

    // Rightward fling while already at the left edge.
    robot.press(100.0, 100.0, 0);
    robot.release(150.0, 100.0, 100);

    // The whole projected travel is clamped away, so the transition is
    // immediate and the snap completion still runs.
    let glide = robot.last_frame().unwrap();
    assert_eq!(glide.offset, Point::ZERO);
    assert_eq!(glide.duration_ms, 0.0);
    assert!(robot.engine().needs_frame());

    robot.tick(116);
    let settle = robot.last_frame().unwrap();
    assert_eq!(settle.offset, Point::ZERO);
    assert_eq!(settle.duration_ms, 300.0);
    assert!(!robot.engine().needs_frame());
}

#[test]
fn test_zero_elapsed_release_snaps_immediately() {
    let robot = pager();

    robot.press(200.0, 100.0, 500);
    robot.release(150.0, 100.0, 500);

    // No measurable time, no velocity: straight to the nearest dock
    // without parking a timer.
    assert!(!robot.engine().needs_frame());
    let settle = robot.last_frame().unwrap();
    assert_eq!(settle.offset, Point::ZERO);
    assert_eq!(settle.duration_ms, 300.0);
    assert_eq!(settle.easing, Easing::Glide);
}

#[test]
fn test_release_without_momentum_snaps_directly() {
    let options = PanOptions {
        momentum_enabled: false,
        ..pager_options()
    };
    let robot = GestureRobot::horizontal_pager(3, 300.0, 200.0, options);
    robot.clear_frames();

    robot.press(290.0, 100.0, 0);
    robot.move_pointer(100.0, 100.0, 50);
    robot.tick(50);
    robot.release(100.0, 100.0, 80);

    // -190 is closer to page 1's dock at -300 than to the origin.
    let settle = robot.last_frame().unwrap();
    assert_eq!(settle.offset, Point::new(-300.0, 0.0));
    assert_eq!(settle.duration_ms, 300.0);
    assert_eq!(settle.easing, Easing::Glide);
    assert!(!robot.engine().needs_frame());
}

#[test]
fn test_cancel_behaves_like_release() {
    let robot = pager();

    robot.press(290.0, 100.0, 0);
    robot.move_pointer(240.0, 100.0, 40);
    robot.tick(40);
    robot.cancel(240.0, 100.0, 200);

    assert!(!robot.engine().is_dragging());
    // -50 over 200ms glides 39px further, then the snap pulls back.
    robot.pump_until_idle(16);
    assert_eq!(robot.engine().offset(), Point::ZERO);
}

#[test]
fn test_programmatic_scroll_is_clamped_like_gestures() {
    let robot = pager();

    let applied = robot
        .engine()
        .scroll_to(Point::new(-950.0, 0.0), 380.0, Easing::EaseInOut);

    assert_eq!(applied, Point::new(-600.0, 0.0));
    let frame = robot.last_frame().unwrap();
    assert_eq!(frame.offset, Point::new(-600.0, 0.0));
    // 600 of 950 intended pixels survive the clamp.
    assert!((frame.duration_ms - 380.0 * (600.0 / 950.0)).abs() < 0.01);
    assert_eq!(frame.easing, Easing::EaseInOut);
}

#[test]
fn test_refresh_after_layout_change_redocks() {
    let robot = pager();
    assert!(robot.engine().snap_to(1));
    assert_eq!(robot.engine().offset(), Point::new(-300.0, 0.0));

    // Pages shrink from 300px to 200px wide.
    robot.transport().set_container(Rect::new(0.0, 0.0, 200.0, 200.0));
    robot.transport().set_content(Rect::new(0.0, 0.0, 600.0, 200.0));
    robot.transport().set_children(vec![
        Rect::new(0.0, 0.0, 200.0, 200.0),
        Rect::new(200.0, 0.0, 200.0, 200.0),
        Rect::new(400.0, 0.0, 200.0, 200.0),
    ]);
    robot.clear_frames();
    robot.engine().refresh();

    let frames = robot.frames();
    assert_eq!(frames.len(), 3, "neutralize, restore, settle");
    assert_eq!(frames[0].offset, Point::ZERO);
    assert_eq!(frames[1].offset, Point::new(-300.0, 0.0));
    // -300 sits exactly between the new docks at -200 and -400; the tie
    // keeps the lower index.
    assert_eq!(frames[2].offset, Point::new(-200.0, 0.0));
    assert_eq!(robot.engine().offset(), Point::new(-200.0, 0.0));
    assert_eq!(robot.engine().geometry().children.len(), 3);
}

#[test]
fn test_snap_to_pages_through_the_strip() {
    let robot = pager();

    assert!(robot.engine().snap_to(1));
    assert_eq!(robot.engine().offset(), Point::new(-300.0, 0.0));
    assert!(robot.engine().snap_to(2));
    assert_eq!(robot.engine().offset(), Point::new(-600.0, 0.0));
    assert!(!robot.engine().snap_to(3));
    assert_eq!(robot.engine().offset(), Point::new(-600.0, 0.0));
}

use crate::*;

use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};

const VIEWPORT: Viewport = Viewport {
    width: 400,
    height: 200,
};

fn frame(content_height: u64, offset_y: u64) -> ScrollFrame {
    ScrollFrame {
        content: ContentSize {
            width: 0,
            height: content_height,
        },
        offset_x: 0,
        offset_y,
    }
}

/// A scroller with the viewport established and a vertical scrollbar shown.
fn shown_scroller() -> FastScroller {
    let mut s = FastScroller::new(FastScrollerOptions::new());
    s.draw_geometry(VIEWPORT, 0);
    s.update_scroll_position(frame(1000, 0), 10);
    s
}

#[test]
fn needs_scrollbar_thresholds() {
    let mut s = FastScroller::new(FastScrollerOptions::new());
    s.draw_geometry(VIEWPORT, 0);

    s.update_scroll_position(frame(1000, 0), 0);
    assert!(s.axis_metrics(Axis::Vertical).needs_scrollbar);

    s.update_scroll_position(frame(200, 0), 0);
    assert!(!s.axis_metrics(Axis::Vertical).needs_scrollbar);

    s.update_scroll_position(frame(150, 0), 0);
    assert!(!s.axis_metrics(Axis::Vertical).needs_scrollbar);

    // Zero content must not divide by zero; it simply needs no scrollbar.
    s.update_scroll_position(frame(0, 0), 0);
    assert!(!s.axis_metrics(Axis::Vertical).needs_scrollbar);

    // A viewport below the minimum range never shows a scrollbar.
    let mut small = FastScroller::new(FastScrollerOptions::new());
    small.draw_geometry(
        Viewport {
            width: 400,
            height: 40,
        },
        0,
    );
    small.update_scroll_position(frame(1000, 0), 0);
    assert!(!small.axis_metrics(Axis::Vertical).needs_scrollbar);
    assert_eq!(small.state(), ScrollbarState::Hidden);
}

#[test]
fn thumb_length_bounded_and_monotone() {
    let mut s = FastScroller::new(FastScrollerOptions::new());
    s.draw_geometry(VIEWPORT, 0);

    let mut prev = u32::MAX;
    for content in (201u64..=5000).step_by(7) {
        s.update_scroll_position(frame(content, 0), 0);
        let m = s.axis_metrics(Axis::Vertical);
        assert!(m.thumb_length <= m.viewport_length);
        assert!(m.thumb_length <= prev, "thumb grew at content={content}");
        prev = m.thumb_length;
    }
}

#[test]
fn thumb_geometry_values() {
    let mut s = shown_scroller();
    let m = s.axis_metrics(Axis::Vertical);
    assert_eq!(m.thumb_length, 40); // min(200, 200 * 200 / 1000)
    assert_eq!(m.thumb_center, 20); // 200 * (0 + 100) / 1000

    s.update_scroll_position(frame(1000, 800), 0);
    let m = s.axis_metrics(Axis::Vertical);
    assert_eq!(m.thumb_center, 180); // 200 * (800 + 100) / 1000
}

#[test]
fn lifecycle_is_deterministic() {
    let mut s = shown_scroller();
    assert_eq!(s.state(), ScrollbarState::Visible);
    assert_eq!(s.hide_deadline(), Some(10 + HIDE_DELAY_AFTER_VISIBLE_MS));

    // Fade-in completes.
    s.tick(510);
    assert_eq!(s.fade_state(), FadeState::In);
    assert_eq!(s.opacity(), 255);

    // Pointer down on the vertical thumb starts dragging and cancels the
    // pending hide.
    assert!(s.on_intercept_pointer(PointerEvent::down(396.0, 10.0), 600));
    assert_eq!(s.state(), ScrollbarState::Dragging);
    assert_eq!(s.drag_axis(), DragAxis::Vertical);
    assert_eq!(s.hide_deadline(), None);

    // Pointer up returns to visible with the post-drag grace period.
    s.on_pointer_event(PointerEvent::up(396.0, 10.0), &frame(1000, 0), 700);
    assert_eq!(s.state(), ScrollbarState::Visible);
    assert_eq!(s.drag_axis(), DragAxis::None);
    assert_eq!(s.hide_deadline(), Some(700 + HIDE_DELAY_AFTER_DRAGGING_MS));

    // Nothing happens until the deadline.
    s.tick(1899);
    assert_eq!(s.state(), ScrollbarState::Visible);
    assert_eq!(s.fade_state(), FadeState::In);

    // Deadline fires, the fade-out runs, and the scrollbar hides.
    s.tick(1900);
    assert_eq!(s.fade_state(), FadeState::FadingOut);
    s.tick(1900 + HIDE_DURATION_MS);
    assert_eq!(s.fade_state(), FadeState::Out);
    assert_eq!(s.state(), ScrollbarState::Hidden);
}

#[test]
fn show_during_fade_out_never_hides() {
    let mut s = shown_scroller();
    s.tick(510);
    assert_eq!(s.fade_state(), FadeState::In);

    // Hide deadline fires at 1510.
    s.tick(1510);
    assert_eq!(s.fade_state(), FadeState::FadingOut);

    s.tick(1760);
    assert_eq!(s.opacity(), 128);

    // Re-showing mid-fade-out retargets without ever reaching Hidden.
    s.show(1760);
    assert_eq!(s.fade_state(), FadeState::FadingIn);
    s.tick(1760 + SHOW_DURATION_MS);
    assert_eq!(s.fade_state(), FadeState::In);
    assert_eq!(s.opacity(), 255);
    assert_ne!(s.state(), ScrollbarState::Hidden);
}

#[test]
fn full_track_drag_reaches_exact_end() {
    let mut s = shown_scroller();
    let mut offset = 0u64;

    assert!(s.on_intercept_pointer(PointerEvent::down(396.0, 0.0), 20));

    for target in [100.0f32, 200.0] {
        let cmd = s.on_pointer_event(
            PointerEvent::moved(396.0, target),
            &frame(1000, offset),
            30,
        );
        let cmd = cmd.expect("move should scroll");
        assert_eq!(cmd.axis, Axis::Vertical);
        offset = offset.checked_add_signed(cmd.delta).unwrap();
        s.update_scroll_position(frame(1000, offset), 30);
    }
    assert_eq!(offset, 800); // content - viewport, exactly

    // Dragging past the end of the track does not overshoot.
    let cmd = s.on_pointer_event(PointerEvent::moved(396.0, 250.0), &frame(1000, offset), 40);
    assert_eq!(cmd, None);
    assert_eq!(offset, 800);
}

#[test]
fn single_jump_covers_whole_range() {
    let mut s = shown_scroller();
    assert!(s.on_intercept_pointer(PointerEvent::down(396.0, 0.0), 20));
    let cmd = s
        .on_pointer_event(PointerEvent::moved(396.0, 200.0), &frame(1000, 0), 30)
        .expect("move should scroll");
    assert_eq!(cmd.delta, 800);
}

#[test]
fn sub_noise_moves_are_ignored() {
    let mut s = shown_scroller();
    assert!(s.on_intercept_pointer(PointerEvent::down(396.0, 19.0), 20));

    // The thumb center sits at 20; moves landing within 2 units of it are
    // noise.
    let f = frame(1000, 0);
    assert_eq!(
        s.on_pointer_event(PointerEvent::moved(396.0, 20.5), &f, 30),
        None
    );
    assert_eq!(
        s.on_pointer_event(PointerEvent::moved(396.0, 21.9), &f, 31),
        None
    );

    // A real move still scrolls from the unchanged anchor.
    assert!(
        s.on_pointer_event(PointerEvent::moved(396.0, 50.0), &f, 32)
            .is_some()
    );
}

#[test]
fn viewport_resize_forces_hidden_on_next_draw() {
    let mut s = shown_scroller();
    assert!(s.draw_geometry(VIEWPORT, 20).is_some());

    let resized = Viewport {
        width: 400,
        height: 300,
    };
    assert_eq!(s.draw_geometry(resized, 30), None);
    assert_eq!(s.state(), ScrollbarState::Hidden);
}

#[test]
fn drag_survives_concurrent_scroll_updates() {
    let mut s = shown_scroller();
    assert!(s.on_intercept_pointer(PointerEvent::down(396.0, 10.0), 20));

    // A scroll-originated recompute must not interrupt the drag.
    s.update_scroll_position(frame(1000, 300), 30);
    assert_eq!(s.state(), ScrollbarState::Dragging);

    // Losing both scrollbars hides regardless.
    s.update_scroll_position(frame(100, 0), 40);
    assert_eq!(s.state(), ScrollbarState::Hidden);
}

#[test]
fn degenerate_track_is_a_noop() {
    let mut s = FastScroller::new(FastScrollerOptions::new().with_margin(100));
    s.draw_geometry(VIEWPORT, 0);
    s.update_scroll_position(frame(1000, 0), 0);

    assert!(s.on_intercept_pointer(PointerEvent::down(396.0, 10.0), 10));
    assert_eq!(
        s.on_pointer_event(PointerEvent::moved(396.0, 150.0), &frame(1000, 0), 20),
        None
    );
}

#[test]
fn pointer_events_ignored_while_hidden() {
    let mut s = FastScroller::new(FastScrollerOptions::new());
    s.draw_geometry(VIEWPORT, 0);

    assert!(!s.on_intercept_pointer(PointerEvent::down(396.0, 10.0), 10));
    assert_eq!(
        s.on_pointer_event(PointerEvent::down(396.0, 10.0), &frame(1000, 0), 10),
        None
    );
    assert_eq!(s.state(), ScrollbarState::Hidden);
}

#[test]
fn hide_deadline_is_replaced_not_duplicated() {
    let mut s = shown_scroller();
    assert_eq!(s.hide_deadline(), Some(10 + HIDE_DELAY_AFTER_VISIBLE_MS));

    // A new scroll event reschedules the single pending hide.
    s.update_scroll_position(frame(1000, 100), 1000);
    assert_eq!(s.hide_deadline(), Some(1000 + HIDE_DELAY_AFTER_VISIBLE_MS));

    // The old deadline does not fire.
    s.tick(1600);
    assert_eq!(s.fade_state(), FadeState::In);
    assert_eq!(s.state(), ScrollbarState::Visible);

    s.tick(2500);
    assert_eq!(s.fade_state(), FadeState::FadingOut);
}

#[test]
fn opacity_tracks_fade_value() {
    let mut s = shown_scroller();
    s.tick(260); // fade-in started at 10, half way through 500ms
    assert_eq!(s.opacity(), 128);
    s.tick(510);
    assert_eq!(s.opacity(), 255);
}

#[test]
fn horizontal_thumb_wins_corner_overlap() {
    let viewport = Viewport {
        width: 200,
        height: 200,
    };
    let mut s = FastScroller::new(FastScrollerOptions::new());
    s.draw_geometry(viewport, 0);
    s.update_scroll_position(
        ScrollFrame {
            content: ContentSize {
                width: 1000,
                height: 1000,
            },
            offset_x: 800,
            offset_y: 800,
        },
        0,
    );

    // (196, 196) lies inside both thumbs; the horizontal one takes the drag.
    assert!(s.on_intercept_pointer(PointerEvent::down(196.0, 196.0), 10));
    assert_eq!(s.drag_axis(), DragAxis::Horizontal);
}

#[test]
fn rtl_flips_vertical_band_and_geometry() {
    let mut s = FastScroller::new(FastScrollerOptions::new().with_rtl(true));
    s.draw_geometry(VIEWPORT, 0);
    s.update_scroll_position(frame(1000, 0), 10);

    // RTL hit band hugs the left edge.
    assert!(s.on_intercept_pointer(PointerEvent::down(3.0, 10.0), 20));
    assert_eq!(s.drag_axis(), DragAxis::Vertical);
    s.on_pointer_event(PointerEvent::up(3.0, 10.0), &frame(1000, 0), 30);

    let geometry = s.draw_geometry(VIEWPORT, 40).expect("visible frame");
    let bar = geometry.vertical.expect("vertical bar");
    assert_eq!(bar.track.x, 0);
    assert_eq!(bar.thumb.x, 0);
    assert!(bar.flipped);
}

#[test]
fn draw_geometry_reflects_pressed_thumb() {
    let mut s = shown_scroller();
    assert!(s.on_intercept_pointer(PointerEvent::down(396.0, 10.0), 20));

    let geometry = s.draw_geometry(VIEWPORT, 30).expect("visible frame");
    let bar = geometry.vertical.expect("vertical bar");
    assert!(bar.pressed);
    assert_eq!(bar.track, PxRect::new(392, 0, 8, 200));
    assert_eq!(bar.thumb, PxRect::new(392, 0, 8, 40));
    assert_eq!(geometry.horizontal, None);
}

#[test]
fn nothing_drawn_while_faded_out() {
    let mut s = shown_scroller();
    s.tick(510);
    s.tick(1510); // hide deadline
    s.tick(1510 + HIDE_DURATION_MS);
    assert_eq!(s.fade_state(), FadeState::Out);
    assert_eq!(s.draw_geometry(VIEWPORT, 2100), None);
}

#[test]
fn cancel_deferred_clears_timer_and_animation() {
    let mut s = shown_scroller();
    assert!(s.hide_deadline().is_some());
    s.cancel_deferred();
    assert_eq!(s.hide_deadline(), None);

    // The in-flight fade-in was dropped; ticking past its end changes
    // nothing further.
    let fade = s.fade_state();
    s.tick(10_000);
    assert_eq!(s.fade_state(), fade);
    assert_eq!(s.state(), ScrollbarState::Visible);
}

#[test]
fn change_notifications_are_batched() {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let mut s = FastScroller::new(
        FastScrollerOptions::new()
            .with_on_change(Some(move |_: &FastScroller| {
                seen.fetch_add(1, Ordering::Relaxed);
            })),
    );
    s.draw_geometry(VIEWPORT, 0);

    // Becoming visible only schedules work; repaints come from fade ticks.
    s.update_scroll_position(frame(1000, 0), 10);
    assert_eq!(count.load(Ordering::Relaxed), 0);

    s.tick(260);
    assert_eq!(count.load(Ordering::Relaxed), 1);

    // Forcing Hidden notifies exactly once despite nested state changes.
    s.update_scroll_position(frame(100, 0), 270);
    assert_eq!(count.load(Ordering::Relaxed), 2);
}

#[test]
fn fade_animation_samples_linearly() {
    let anim = FadeAnimation::new(0.0, 1.0, 100, 400);
    assert_eq!(anim.sample(100), 0.0);
    assert_eq!(anim.sample(300), 0.5);
    assert_eq!(anim.sample(500), 1.0);
    assert!(!anim.is_done(499));
    assert!(anim.is_done(500));

    // Clamped outside the run.
    assert_eq!(anim.sample(50), 0.0);
    assert_eq!(anim.sample(900), 1.0);
}

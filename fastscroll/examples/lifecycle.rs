// Example: deterministic walkthrough of the scrollbar lifecycle.
use fastscroll::{
    Axis, ContentSize, FastScroller, FastScrollerOptions, PointerEvent, ScrollFrame, Viewport,
};

fn frame(offset_y: u64) -> ScrollFrame {
    ScrollFrame {
        content: ContentSize {
            width: 0,
            height: 5000,
        },
        offset_x: 0,
        offset_y,
    }
}

fn main() {
    let mut scroller = FastScroller::new(FastScrollerOptions::new());
    let viewport = Viewport {
        width: 360,
        height: 640,
    };

    // The first draw pass caches the viewport.
    scroller.draw_geometry(viewport, 0);

    // The host scrolls; the scrollbar appears and fades in.
    scroller.update_scroll_position(frame(0), 0);
    println!(
        "state={:?} fade={:?}",
        scroller.state(),
        scroller.fade_state()
    );
    for now_ms in [100u64, 250, 500] {
        scroller.tick(now_ms);
        println!("t={now_ms}ms opacity={}", scroller.opacity());
    }

    // Grab the thumb and drag it toward the bottom.
    let thumb = scroller.axis_metrics(Axis::Vertical);
    let x = viewport.width as f32 - 2.0;
    let grabbed =
        scroller.on_intercept_pointer(PointerEvent::down(x, thumb.thumb_center as f32), 600);
    println!("grabbed={grabbed}");

    let mut offset = 0u64;
    for (y, now_ms) in [(200.0f32, 620u64), (400.0, 640), (640.0, 660)] {
        if let Some(cmd) = scroller.on_pointer_event(PointerEvent::moved(x, y), &frame(offset), now_ms)
        {
            offset = offset.saturating_add_signed(cmd.delta);
            scroller.update_scroll_position(frame(offset), now_ms);
        }
        println!("t={now_ms}ms offset={offset}");
    }

    scroller.on_pointer_event(PointerEvent::up(x, 640.0), &frame(offset), 700);
    println!("released: hide due at {:?}", scroller.hide_deadline());

    // Idle long enough and the scrollbar fades back out.
    for now_ms in [1900u64, 2150, 2400] {
        scroller.tick(now_ms);
        println!(
            "t={now_ms}ms state={:?} fade={:?} opacity={}",
            scroller.state(),
            scroller.fade_state(),
            scroller.opacity()
        );
    }
}

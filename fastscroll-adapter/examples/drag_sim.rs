// Example: a simulated list host driven through the adapter controller.
use fastscroll::{Axis, ContentSize, FastScrollerOptions, PointerEvent, PxRect, ScrollFrame, Viewport};
use fastscroll_adapter::{
    Controller, DrawSurface, LayoutListener, ListenerId, Rgba, ScrollHost, ScrollListener,
};

/// A minimal in-memory list host with an explicit clock.
struct SimList {
    content: ContentSize,
    viewport: Viewport,
    offset_y: u64,
    now_ms: u64,
    next_listener: u64,
    scroll_listeners: Vec<(ListenerId, ScrollListener)>,
    layout_listeners: Vec<(ListenerId, LayoutListener)>,
}

impl SimList {
    fn frame(&self) -> ScrollFrame {
        ScrollFrame {
            content: self.content,
            offset_x: 0,
            offset_y: self.offset_y,
        }
    }
}

impl ScrollHost for SimList {
    fn content_extent(&self, axis: Axis) -> u64 {
        self.content.extent(axis)
    }

    fn viewport_extent(&self, axis: Axis) -> u32 {
        self.viewport.extent(axis)
    }

    fn scroll_offset(&self, axis: Axis) -> u64 {
        match axis {
            Axis::Horizontal => 0,
            Axis::Vertical => self.offset_y,
        }
    }

    fn scroll_by(&mut self, axis: Axis, delta: i64) {
        if axis == Axis::Vertical {
            let max = self.content.height.saturating_sub(self.viewport.height as u64);
            self.offset_y = (self.offset_y as i128 + delta as i128).clamp(0, max as i128) as u64;
        }
        for (_, listener) in &self.scroll_listeners {
            listener(self.frame(), self.now_ms);
        }
    }

    fn add_scroll_listener(&mut self, listener: ScrollListener) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.scroll_listeners.push((id, listener));
        id
    }

    fn remove_scroll_listener(&mut self, id: ListenerId) {
        self.scroll_listeners.retain(|(l, _)| *l != id);
    }

    fn add_layout_listener(&mut self, listener: LayoutListener) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.layout_listeners.push((id, listener));
        id
    }

    fn remove_layout_listener(&mut self, id: ListenerId) {
        self.layout_listeners.retain(|(l, _)| *l != id);
    }
}

struct PrintSurface;

impl DrawSurface for PrintSurface {
    fn draw_track(&mut self, axis: Axis, rect: PxRect, color: Rgba) {
        println!("  track {axis:?} {rect:?} alpha={}", color.a);
    }

    fn draw_thumb(&mut self, axis: Axis, rect: PxRect, color: Rgba, flipped: bool) {
        println!("  thumb {axis:?} {rect:?} alpha={} flipped={flipped}", color.a);
    }
}

fn main() {
    let mut host = SimList {
        content: ContentSize {
            width: 0,
            height: 1000,
        },
        viewport: Viewport {
            width: 400,
            height: 200,
        },
        offset_y: 0,
        now_ms: 0,
        next_listener: 0,
        scroll_listeners: Vec::new(),
        layout_listeners: Vec::new(),
    };

    let mut controller = Controller::new(FastScrollerOptions::new());
    controller.attach(&mut host);

    let mut surface = PrintSurface;
    controller.draw(&host, &mut surface, 0); // caches the viewport

    host.now_ms = 10;
    host.scroll_by(Axis::Vertical, 40);
    controller.tick(260);
    println!("mid fade-in:");
    controller.draw(&host, &mut surface, 260);

    // Drag the thumb to the bottom of the track.
    let captured = controller.on_intercept_pointer(PointerEvent::down(396.0, 10.0), 300);
    println!("captured={captured}");
    for (y, now_ms) in [(100.0f32, 320u64), (200.0, 340)] {
        host.now_ms = now_ms;
        controller.on_pointer_event(&mut host, PointerEvent::moved(396.0, y), now_ms);
        println!("t={now_ms}ms offset_y={}", host.offset_y);
    }
    controller.on_pointer_event(&mut host, PointerEvent::up(396.0, 200.0), 360);

    controller.tick(860);
    println!("settled:");
    controller.draw(&host, &mut surface, 860);

    controller.detach(&mut host);
    println!("detached, listeners={}", host.scroll_listeners.len());
}

use std::sync::{Arc, Mutex};

use fastscroll::{FastScroller, FastScrollerOptions, PointerEvent, ScrollFrame, ScrollbarState};

use crate::host::{ListenerId, ScrollHost, scroll_frame_of, viewport_of};
use crate::render::{DrawSurface, ScrollbarPaint, ScrollbarPaints, draw_frame};

/// Shared handle to the engine, for listener closures and external access.
pub type SharedFastScroller = Arc<Mutex<FastScroller>>;

/// A framework-neutral controller that wraps a [`fastscroll::FastScroller`]
/// and wires it to a [`ScrollHost`].
///
/// This type does not hold any host reference. Adapters drive it by calling:
/// - `attach` / `detach` around the host's lifetime
/// - `on_intercept_pointer` / `on_pointer_event` from the host's touch
///   dispatch, ahead of normal handling
/// - `tick(now_ms)` each frame/timer tick (hide deadline, fade animation)
/// - `draw(host, surface, now_ms)` after the host's own content is painted
///
/// The engine's `on_change` callback fires while the internal lock is held;
/// it must not call back into this controller.
pub struct Controller {
    scroller: SharedFastScroller,
    paints: ScrollbarPaints,
    scroll_listener: Option<ListenerId>,
    layout_listener: Option<ListenerId>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(FastScrollerOptions::new())
    }
}

impl Controller {
    pub fn new(options: FastScrollerOptions) -> Self {
        Self::from_scroller(FastScroller::new(options))
    }

    pub fn from_scroller(scroller: FastScroller) -> Self {
        Self {
            scroller: Arc::new(Mutex::new(scroller)),
            paints: ScrollbarPaints::default(),
            scroll_listener: None,
            layout_listener: None,
        }
    }

    pub fn with_paints(mut self, paints: ScrollbarPaints) -> Self {
        self.paints = paints;
        self
    }

    /// Shared handle to the underlying engine.
    pub fn handle(&self) -> SharedFastScroller {
        Arc::clone(&self.scroller)
    }

    pub fn is_attached(&self) -> bool {
        self.scroll_listener.is_some()
    }

    pub fn state(&self) -> ScrollbarState {
        self.scroller.lock().unwrap().state()
    }

    pub fn is_dragging(&self) -> bool {
        self.scroller.lock().unwrap().is_dragging()
    }

    pub fn is_visible(&self) -> bool {
        self.scroller.lock().unwrap().is_visible()
    }

    pub fn vertical_paint(&self) -> &ScrollbarPaint {
        &self.paints.vertical
    }

    pub fn vertical_paint_mut(&mut self) -> &mut ScrollbarPaint {
        &mut self.paints.vertical
    }

    pub fn horizontal_paint(&self) -> &ScrollbarPaint {
        &self.paints.horizontal
    }

    pub fn horizontal_paint_mut(&mut self) -> &mut ScrollbarPaint {
        &mut self.paints.horizontal
    }

    /// Registers the scroll and layout listeners on `host`.
    ///
    /// A second attach while already attached is a no-op.
    pub fn attach<H: ScrollHost>(&mut self, host: &mut H) {
        if self.scroll_listener.is_some() {
            return;
        }
        fsdebug!("attach");

        let scroller = Arc::clone(&self.scroller);
        self.scroll_listener = Some(host.add_scroll_listener(Arc::new(
            move |frame: ScrollFrame, now_ms: u64| {
                scroller.lock().unwrap().update_scroll_position(frame, now_ms);
            },
        )));

        let scroller = Arc::clone(&self.scroller);
        self.layout_listener = Some(host.add_layout_listener(Arc::new(move || {
            // The next draw pass compares viewports and hides on a resize;
            // all the listener needs to do is get one scheduled.
            scroller.lock().unwrap().request_redraw();
        })));
    }

    /// Unregisters the listeners and cancels all deferred work.
    ///
    /// Detaching while not attached is a no-op.
    pub fn detach<H: ScrollHost>(&mut self, host: &mut H) {
        let Some(id) = self.scroll_listener.take() else {
            return;
        };
        fsdebug!("detach");
        host.remove_scroll_listener(id);
        if let Some(id) = self.layout_listener.take() {
            host.remove_layout_listener(id);
        }
        self.scroller.lock().unwrap().cancel_deferred();
    }

    /// Whether the scroller should capture this gesture instead of the host.
    pub fn on_intercept_pointer(&self, ev: PointerEvent, now_ms: u64) -> bool {
        self.scroller.lock().unwrap().on_intercept_pointer(ev, now_ms)
    }

    /// Routes a captured pointer event, applying any resulting scroll to the
    /// host. Returns whether the host was scrolled.
    pub fn on_pointer_event<H: ScrollHost>(
        &self,
        host: &mut H,
        ev: PointerEvent,
        now_ms: u64,
    ) -> bool {
        let command = {
            let mut scroller = self.scroller.lock().unwrap();
            let frame = scroll_frame_of(host);
            scroller.on_pointer_event(ev, &frame, now_ms)
        };
        match command {
            Some(command) => {
                fstrace!(delta = command.delta, "applying scroll command");
                host.scroll_by(command.axis, command.delta);
                true
            }
            None => false,
        }
    }

    /// Advances the hide deadline and fade animation.
    pub fn tick(&self, now_ms: u64) {
        self.scroller.lock().unwrap().tick(now_ms);
    }

    /// Paints the scrollbars over the host's content.
    pub fn draw<H: ScrollHost, S: DrawSurface>(&self, host: &H, surface: &mut S, now_ms: u64) {
        let mut scroller = self.scroller.lock().unwrap();
        scroller.set_rtl(host.layout_rtl());
        if let Some(geometry) = scroller.draw_geometry(viewport_of(host), now_ms) {
            draw_frame(surface, &geometry, &self.paints);
        }
    }
}

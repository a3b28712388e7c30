use core::cell::Cell;
use core::cmp;

use crate::fade::{FadeState, FadeTick, Fader};
use crate::state::{AxisMetrics, BarGeometry, FrameGeometry};
use crate::types::{
    Axis, DragAxis, PointerEvent, PointerEventKind, PxRect, ScrollCommand, ScrollFrame,
    ScrollbarState, Viewport,
};
use crate::{FastScrollerOptions, OnChangeCallback};

/// Duration of the fade-in started by [`FastScroller::show`].
pub const SHOW_DURATION_MS: u64 = 500;
/// Hide delay scheduled when the scrollbar becomes visible without a drag.
pub const HIDE_DELAY_AFTER_VISIBLE_MS: u64 = 1500;
/// Hide delay scheduled when a drag gesture ends.
pub const HIDE_DELAY_AFTER_DRAGGING_MS: u64 = 1200;
/// Duration of the fade-out started when the hide deadline fires.
pub const HIDE_DURATION_MS: u64 = 500;

const SCROLLBAR_FULL_OPAQUE: u8 = 255;

/// Pointer moves that land closer than this to the current thumb center are
/// treated as noise and produce no scroll.
const DRAG_NOISE_THRESHOLD: f32 = 2.0;

/// A headless fast-scroll engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by forwarding scroll frames, pointer events, and
///   periodic `tick(now_ms)` calls.
/// - Rendering is exposed via [`FastScroller::draw_geometry`].
///
/// For host wiring (listeners, attach/detach, painting), see the
/// `fastscroll-adapter` crate.
#[derive(Clone, Debug)]
pub struct FastScroller {
    options: FastScrollerOptions,
    viewport: Viewport,
    rtl: bool,

    horizontal: AxisMetrics,
    vertical: AxisMetrics,

    state: ScrollbarState,
    drag_axis: DragAxis,
    drag_x: f32,
    drag_y: f32,

    fader: Fader,
    opacity: u8,
    hide_deadline_ms: Option<u64>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl FastScroller {
    pub fn new(options: FastScrollerOptions) -> Self {
        fsdebug!(
            thumb_thickness = options.thumb_thickness,
            minimum_range = options.minimum_range,
            margin = options.margin,
            "FastScroller::new"
        );
        let rtl = options.rtl;
        Self {
            options,
            viewport: Viewport::default(),
            rtl,
            horizontal: AxisMetrics::default(),
            vertical: AxisMetrics::default(),
            state: ScrollbarState::Hidden,
            drag_axis: DragAxis::None,
            drag_x: 0.0,
            drag_y: 0.0,
            fader: Fader::default(),
            opacity: SCROLLBAR_FULL_OPAQUE,
            hide_deadline_ms: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &FastScrollerOptions {
        &self.options
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&FastScroller) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| alloc::sync::Arc::new(f) as OnChangeCallback);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// Asks the host to repaint. Equivalent to an `on_change` notification.
    pub fn request_redraw(&self) {
        self.notify();
    }

    pub fn state(&self) -> ScrollbarState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == ScrollbarState::Dragging
    }

    pub fn is_visible(&self) -> bool {
        self.state == ScrollbarState::Visible
    }

    pub fn drag_axis(&self) -> DragAxis {
        self.drag_axis
    }

    pub fn fade_state(&self) -> FadeState {
        self.fader.state()
    }

    /// Animated opacity for the thumb/track pairs, 0..=255.
    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    /// The viewport cached by the last draw pass.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn rtl(&self) -> bool {
        self.rtl
    }

    pub fn set_rtl(&mut self, rtl: bool) {
        self.rtl = rtl;
    }

    pub fn axis_metrics(&self, axis: Axis) -> AxisMetrics {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// When the pending hide is due, if any. Hosts driving a real clock can
    /// use this to schedule their next [`FastScroller::tick`].
    pub fn hide_deadline(&self) -> Option<u64> {
        self.hide_deadline_ms
    }

    /// Notify the scroller of an external change of the scroll, e.g. through
    /// dragging or flinging on the host list itself.
    ///
    /// Recomputes both axes' metrics from the frame and the cached viewport,
    /// then updates the scrollbar state. An in-progress drag is left
    /// undisturbed.
    pub fn update_scroll_position(&mut self, frame: ScrollFrame, now_ms: u64) {
        fstrace!(
            offset_x = frame.offset_x,
            offset_y = frame.offset_y,
            "update_scroll_position"
        );
        let viewport = self.viewport;
        self.batch_update(|s| {
            update_axis(
                &mut s.vertical,
                frame.content.height,
                viewport.height,
                frame.offset_y,
                s.options.minimum_range,
            );
            update_axis(
                &mut s.horizontal,
                frame.content.width,
                viewport.width,
                frame.offset_x,
                s.options.minimum_range,
            );

            if !s.vertical.needs_scrollbar && !s.horizontal.needs_scrollbar {
                if s.state != ScrollbarState::Hidden {
                    s.set_state(ScrollbarState::Hidden, now_ms);
                }
                return;
            }

            if matches!(s.state, ScrollbarState::Hidden | ScrollbarState::Visible) {
                s.set_state(ScrollbarState::Visible, now_ms);
            }
        });
    }

    /// Transitions the scrollbar state machine, running entry/exit actions.
    pub fn set_state(&mut self, state: ScrollbarState, now_ms: u64) {
        fsdebug!(from = ?self.state, to = ?state, "set_state");
        self.batch_update(|s| {
            if state == ScrollbarState::Dragging && s.state != ScrollbarState::Dragging {
                s.cancel_hide();
            }
            if state == ScrollbarState::Hidden {
                s.notify();
            } else {
                s.show(now_ms);
            }
            if s.state == ScrollbarState::Dragging && state != ScrollbarState::Dragging {
                s.reset_hide_delay(now_ms, HIDE_DELAY_AFTER_DRAGGING_MS);
            } else if state == ScrollbarState::Visible {
                s.reset_hide_delay(now_ms, HIDE_DELAY_AFTER_VISIBLE_MS);
            }
            s.state = state;
        });
    }

    /// Starts (or retargets) the fade-in.
    pub fn show(&mut self, now_ms: u64) {
        if self.fader.show(now_ms, SHOW_DURATION_MS) {
            fstrace!(now_ms, "fade-in started");
        }
    }

    /// Starts (or retargets) the fade-out over `duration_ms`.
    pub fn hide(&mut self, now_ms: u64, duration_ms: u64) {
        if self.fader.hide(now_ms, duration_ms) {
            fstrace!(now_ms, duration_ms, "fade-out started");
        }
    }

    fn cancel_hide(&mut self) {
        self.hide_deadline_ms = None;
    }

    fn reset_hide_delay(&mut self, now_ms: u64, delay_ms: u64) {
        self.hide_deadline_ms = Some(now_ms.saturating_add(delay_ms));
    }

    /// Advances deferred work: fires a due hide deadline and steps the fade
    /// animation. Hosts call this from their frame/timer loop.
    pub fn tick(&mut self, now_ms: u64) {
        self.batch_update(|s| {
            if let Some(deadline) = s.hide_deadline_ms {
                if now_ms >= deadline {
                    s.hide_deadline_ms = None;
                    s.hide(now_ms, HIDE_DURATION_MS);
                }
            }
            match s.fader.tick(now_ms) {
                FadeTick::Idle => {}
                FadeTick::Advanced => {
                    s.sync_opacity();
                    s.notify();
                }
                FadeTick::Completed { faded_out } => {
                    s.sync_opacity();
                    if faded_out {
                        s.set_state(ScrollbarState::Hidden, now_ms);
                    } else {
                        s.notify();
                    }
                }
            }
        });
    }

    /// Cancels the pending hide deadline and any in-flight fade animation.
    ///
    /// Called on detach so no deferred work outlives the host attachment.
    pub fn cancel_deferred(&mut self) {
        self.hide_deadline_ms = None;
        self.fader.cancel();
    }

    fn sync_opacity(&mut self) {
        self.opacity = (SCROLLBAR_FULL_OPAQUE as f32 * self.fader.value() + 0.5) as u8;
    }

    /// Whether this control should capture the gesture instead of the host
    /// list.
    ///
    /// Only intercepts a down event when the scrollbar is `Visible` and the
    /// pointer is inside either thumb; an already-dragging scrollbar claims
    /// every event.
    pub fn on_intercept_pointer(&mut self, ev: PointerEvent, now_ms: u64) -> bool {
        match self.state {
            ScrollbarState::Visible => {
                let inside_vertical = self.is_point_inside_vertical_thumb(ev.x, ev.y);
                let inside_horizontal = self.is_point_inside_horizontal_thumb(ev.x, ev.y);
                if ev.kind == PointerEventKind::Down && (inside_vertical || inside_horizontal) {
                    self.start_drag(inside_horizontal, ev, now_ms);
                    true
                } else {
                    false
                }
            }
            ScrollbarState::Dragging => true,
            ScrollbarState::Hidden => false,
        }
    }

    /// Handles a pointer event this control has captured.
    ///
    /// While dragging, move events translate into a relative scroll for the
    /// captured axis; the adapter applies the returned command to the host.
    /// `frame` carries the host's current content extents and offsets.
    pub fn on_pointer_event(
        &mut self,
        ev: PointerEvent,
        frame: &ScrollFrame,
        now_ms: u64,
    ) -> Option<ScrollCommand> {
        if self.state == ScrollbarState::Hidden {
            return None;
        }
        match ev.kind {
            PointerEventKind::Down => {
                let inside_vertical = self.is_point_inside_vertical_thumb(ev.x, ev.y);
                let inside_horizontal = self.is_point_inside_horizontal_thumb(ev.x, ev.y);
                if inside_vertical || inside_horizontal {
                    self.start_drag(inside_horizontal, ev, now_ms);
                }
                None
            }
            PointerEventKind::Up if self.state == ScrollbarState::Dragging => {
                self.drag_x = 0.0;
                self.drag_y = 0.0;
                self.set_state(ScrollbarState::Visible, now_ms);
                self.drag_axis = DragAxis::None;
                None
            }
            PointerEventKind::Move if self.state == ScrollbarState::Dragging => {
                self.show(now_ms);
                match self.drag_axis {
                    DragAxis::Horizontal => self.scroll_to(Axis::Horizontal, ev.x, frame),
                    DragAxis::Vertical => self.scroll_to(Axis::Vertical, ev.y, frame),
                    DragAxis::None => None,
                }
            }
            _ => None,
        }
    }

    fn start_drag(&mut self, inside_horizontal: bool, ev: PointerEvent, now_ms: u64) {
        if inside_horizontal {
            self.drag_axis = DragAxis::Horizontal;
            self.drag_x = (ev.x as i32) as f32;
        } else {
            self.drag_axis = DragAxis::Vertical;
            self.drag_y = (ev.y as i32) as f32;
        }
        fsdebug!(axis = ?self.drag_axis, "drag captured");
        self.set_state(ScrollbarState::Dragging, now_ms);
    }

    fn scroll_to(&mut self, axis: Axis, pos: f32, frame: &ScrollFrame) -> Option<ScrollCommand> {
        let (range_min, range_max) = self.track_range(axis);
        if range_max <= range_min {
            return None;
        }
        let pos = pos.clamp(range_min, range_max);
        let metrics = self.axis_metrics(axis);
        if abs_f32(metrics.thumb_center as f32 - pos) < DRAG_NOISE_THRESHOLD {
            return None;
        }
        let old_pos = match axis {
            Axis::Horizontal => self.drag_x,
            Axis::Vertical => self.drag_y,
        };
        let delta = scroll_delta(
            old_pos,
            pos,
            range_max - range_min,
            frame.content.extent(axis),
            frame.offset(axis),
            self.viewport.extent(axis),
        );
        match axis {
            Axis::Horizontal => self.drag_x = pos,
            Axis::Vertical => self.drag_y = pos,
        }
        if delta != 0 {
            fstrace!(axis = ?axis, delta, "scroll command");
            Some(ScrollCommand { axis, delta })
        } else {
            None
        }
    }

    /// The (min, max) draggable positions along `axis`, inset by the margin.
    fn track_range(&self, axis: Axis) -> (f32, f32) {
        let margin = self.options.margin;
        let extent = self.viewport.extent(axis);
        (margin as f32, extent.saturating_sub(margin) as f32)
    }

    fn is_point_inside_vertical_thumb(&self, x: f32, y: f32) -> bool {
        let thickness = self.options.thumb_thickness as f32;
        let m = &self.vertical;
        let in_band = if self.rtl {
            x <= thickness / 2.0
        } else {
            x >= self.viewport.width as f32 - thickness
        };
        in_band
            && y >= m.thumb_center as f32 - m.thumb_length as f32 / 2.0
            && y <= m.thumb_center as f32 + m.thumb_length as f32 / 2.0
    }

    fn is_point_inside_horizontal_thumb(&self, x: f32, y: f32) -> bool {
        let thickness = self.options.thumb_thickness as f32;
        let m = &self.horizontal;
        y >= self.viewport.height as f32 - thickness
            && x >= m.thumb_center as f32 - m.thumb_length as f32 / 2.0
            && x <= m.thumb_center as f32 + m.thumb_length as f32 / 2.0
    }

    /// Produces the draw geometry for the current frame, or `None` when
    /// nothing should be drawn.
    ///
    /// A viewport change between two draw passes forces `Hidden` and skips the
    /// frame entirely; geometry would be stale until the next scroll event
    /// recomputes it.
    pub fn draw_geometry(&mut self, viewport: Viewport, now_ms: u64) -> Option<FrameGeometry> {
        if self.viewport != viewport {
            fsdebug!(
                width = viewport.width,
                height = viewport.height,
                "viewport changed, hiding"
            );
            self.viewport = viewport;
            self.set_state(ScrollbarState::Hidden, now_ms);
            return None;
        }
        if self.fader.state() == FadeState::Out {
            return None;
        }
        let vertical = self
            .vertical
            .needs_scrollbar
            .then(|| self.vertical_bar_geometry());
        let horizontal = self
            .horizontal
            .needs_scrollbar
            .then(|| self.horizontal_bar_geometry());
        Some(FrameGeometry {
            vertical,
            horizontal,
            opacity: self.opacity,
        })
    }

    fn vertical_bar_geometry(&self) -> BarGeometry {
        let thickness = self.options.thumb_thickness;
        let m = &self.vertical;
        let top = m.thumb_center.saturating_sub(m.thumb_length / 2);
        let left = if self.rtl {
            0
        } else {
            self.viewport.width.saturating_sub(thickness)
        };
        BarGeometry {
            track: PxRect::new(left, 0, thickness, self.viewport.height),
            thumb: PxRect::new(left, top, thickness, m.thumb_length),
            pressed: self.state == ScrollbarState::Dragging && self.drag_axis == DragAxis::Vertical,
            flipped: self.rtl,
        }
    }

    fn horizontal_bar_geometry(&self) -> BarGeometry {
        let thickness = self.options.thumb_thickness;
        let m = &self.horizontal;
        let left = m.thumb_center.saturating_sub(m.thumb_length / 2);
        let top = self.viewport.height.saturating_sub(thickness);
        BarGeometry {
            track: PxRect::new(0, top, self.viewport.width, thickness),
            thumb: PxRect::new(left, top, m.thumb_length, thickness),
            pressed: self.state == ScrollbarState::Dragging
                && self.drag_axis == DragAxis::Horizontal,
            flipped: false,
        }
    }
}

fn update_axis(
    metrics: &mut AxisMetrics,
    content_length: u64,
    viewport_length: u32,
    scroll_offset: u64,
    minimum_range: u32,
) {
    metrics.content_length = content_length;
    metrics.viewport_length = viewport_length;
    metrics.scroll_offset = scroll_offset;
    metrics.needs_scrollbar =
        content_length > viewport_length as u64 && viewport_length >= minimum_range;
    if !metrics.needs_scrollbar {
        return;
    }

    let view = viewport_length as f64;
    let midpoint = scroll_offset as f64 + view / 2.0;
    metrics.thumb_center = (view * midpoint / content_length as f64) as u32;
    metrics.thumb_length = cmp::min(
        viewport_length as u64,
        viewport_length as u64 * viewport_length as u64 / content_length,
    ) as u32;
}

fn scroll_delta(
    old_drag: f32,
    new_drag: f32,
    track_length: f32,
    content_length: u64,
    scroll_offset: u64,
    viewport_length: u32,
) -> i64 {
    if track_length <= 0.0 {
        return 0;
    }
    let percentage = (new_drag - old_drag) / track_length;
    let total_possible = content_length.saturating_sub(viewport_length as u64);
    let scrolling_by = (percentage * total_possible as f32) as i64;
    // Landing exactly on either end of the valid offsets is allowed; a move
    // that would go past them is swallowed.
    let absolute = scroll_offset as i128 + scrolling_by as i128;
    if absolute >= 0 && absolute <= total_possible as i128 {
        scrolling_by
    } else {
        0
    }
}

fn abs_f32(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}

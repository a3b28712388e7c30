//! A headless fast-scroll engine: a draggable scrollbar thumb overlay for
//! scrollable list views.
//!
//! For adapter-level utilities (host wiring, rendering), see the
//! `fastscroll-adapter` crate.
//!
//! This crate focuses on the core state and math needed to overlay a
//! fast-scroll thumb on a long list: thumb geometry from content metrics, the
//! hidden/visible/dragging state machine, the fade-in/fade-out animation
//! state, and pointer-to-scroll translation.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport size (width/height)
//! - content extents and scroll offsets per axis
//! - pointer events, and a way to scroll the host by a relative delta
//!
//! Every time-dependent operation takes an explicit `now_ms`, so the engine
//! runs identically against a real-time clock or a deterministic test clock.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod fade;
mod options;
mod scroller;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use fade::{FadeAnimation, FadeState};
pub use options::{
    DEFAULT_MARGIN, DEFAULT_MINIMUM_RANGE, DEFAULT_THUMB_THICKNESS, FastScrollerOptions,
    OnChangeCallback,
};
pub use scroller::{
    FastScroller, HIDE_DELAY_AFTER_DRAGGING_MS, HIDE_DELAY_AFTER_VISIBLE_MS, HIDE_DURATION_MS,
    SHOW_DURATION_MS,
};
pub use state::{AxisMetrics, BarGeometry, FrameGeometry};
pub use types::{
    Axis, ContentSize, DragAxis, PointerEvent, PointerEventKind, PxRect, ScrollCommand,
    ScrollFrame, ScrollbarState, Viewport,
};

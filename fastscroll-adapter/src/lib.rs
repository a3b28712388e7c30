//! Adapter utilities for the `fastscroll` crate.
//!
//! The `fastscroll` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides the framework-neutral plumbing commonly needed
//! to put that engine in front of a real list view:
//!
//! - The [`ScrollHost`] collaborator contract (extents, offsets, listeners)
//! - An attachable [`Controller`] that wires the engine to a host
//! - The [`DrawSurface`] seam and paint pairs for rendering
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[cfg(feature = "std")]
#[macro_use]
mod macros;

#[cfg(feature = "std")]
mod controller;
mod host;
mod render;


#[cfg(feature = "std")]
pub use controller::{Controller, SharedFastScroller};
pub use host::{
    LayoutListener, ListenerId, ScrollHost, ScrollListener, scroll_frame_of, viewport_of,
};
pub use render::{DrawSurface, Rgba, ScrollbarPaint, ScrollbarPaints, ThumbPaint, draw_frame};

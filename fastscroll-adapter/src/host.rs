use alloc::sync::Arc;

use fastscroll::{Axis, ContentSize, ScrollFrame, Viewport};

/// Identifier of a registered host listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(pub u64);

/// A callback fired by the host after its scroll offsets change.
///
/// The second argument is the host's event timestamp in milliseconds.
pub type ScrollListener = Arc<dyn Fn(ScrollFrame, u64) + Send + Sync>;

/// A callback fired by the host after a layout pass changes its dimensions.
pub type LayoutListener = Arc<dyn Fn() + Send + Sync>;

/// The list view the fast scroller decorates.
///
/// The host is queried on demand and never owned; it must fire its scroll
/// listeners synchronously from [`ScrollHost::scroll_by`] so a drag-originated
/// geometry recompute lands before the next paint.
pub trait ScrollHost {
    /// Total scrollable extent of the content along `axis`.
    fn content_extent(&self, axis: Axis) -> u64;

    /// Visible extent of the host along `axis`.
    fn viewport_extent(&self, axis: Axis) -> u32;

    /// Current scroll offset along `axis`.
    fn scroll_offset(&self, axis: Axis) -> u64;

    /// Scrolls the host by a relative delta along `axis`, clamping to the
    /// valid offset range.
    fn scroll_by(&mut self, axis: Axis, delta: i64);

    /// Whether the host lays out right-to-left.
    fn layout_rtl(&self) -> bool {
        false
    }

    fn add_scroll_listener(&mut self, listener: ScrollListener) -> ListenerId;

    fn remove_scroll_listener(&mut self, id: ListenerId);

    fn add_layout_listener(&mut self, listener: LayoutListener) -> ListenerId;

    fn remove_layout_listener(&mut self, id: ListenerId);
}

/// Snapshots the host's current content extents and scroll offsets.
pub fn scroll_frame_of<H: ScrollHost + ?Sized>(host: &H) -> ScrollFrame {
    ScrollFrame {
        content: ContentSize {
            width: host.content_extent(Axis::Horizontal),
            height: host.content_extent(Axis::Vertical),
        },
        offset_x: host.scroll_offset(Axis::Horizontal),
        offset_y: host.scroll_offset(Axis::Vertical),
    }
}

/// Snapshots the host's current viewport dimensions.
pub fn viewport_of<H: ScrollHost + ?Sized>(host: &H) -> Viewport {
    Viewport {
        width: host.viewport_extent(Axis::Horizontal),
        height: host.viewport_extent(Axis::Vertical),
    }
}

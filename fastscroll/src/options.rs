use alloc::sync::Arc;

use crate::scroller::FastScroller;

/// A callback fired when the scroller's visual state changes and the host
/// should repaint.
pub type OnChangeCallback = Arc<dyn Fn(&FastScroller) + Send + Sync>;

/// Default thumb/track thickness in pixels.
pub const DEFAULT_THUMB_THICKNESS: u32 = 8;
/// Default viewport extent below which a scrollbar never appears.
pub const DEFAULT_MINIMUM_RANGE: u32 = 50;
/// Default inset from the container edges, in pixels.
pub const DEFAULT_MARGIN: u32 = 0;

/// Configuration for [`crate::FastScroller`].
///
/// This type is cheap to clone: the callback is stored in an `Arc` so adapters
/// can tweak a field and rebuild without reallocating closures.
pub struct FastScrollerOptions {
    /// Visual width/height of the thumb and track bands.
    pub thumb_thickness: u32,
    /// Viewport extent below which the scrollbar never appears.
    pub minimum_range: u32,
    /// Inset from the container edges, bounding the draggable track range.
    pub margin: u32,
    /// Initial layout direction; hosts with dynamic direction update it via
    /// [`crate::FastScroller::set_rtl`].
    pub rtl: bool,
    /// Optional callback fired when the scroller needs a repaint.
    pub on_change: Option<OnChangeCallback>,
}

impl FastScrollerOptions {
    /// Creates options with the default thickness/minimum-range/margin.
    pub fn new() -> Self {
        Self {
            thumb_thickness: DEFAULT_THUMB_THICKNESS,
            minimum_range: DEFAULT_MINIMUM_RANGE,
            margin: DEFAULT_MARGIN,
            rtl: false,
            on_change: None,
        }
    }

    pub fn with_thumb_thickness(mut self, thumb_thickness: u32) -> Self {
        self.thumb_thickness = thumb_thickness;
        self
    }

    pub fn with_minimum_range(mut self, minimum_range: u32) -> Self {
        self.minimum_range = minimum_range;
        self
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&FastScroller) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for FastScrollerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FastScrollerOptions {
    fn clone(&self) -> Self {
        Self {
            thumb_thickness: self.thumb_thickness,
            minimum_range: self.minimum_range,
            margin: self.margin,
            rtl: self.rtl,
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for FastScrollerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FastScrollerOptions")
            .field("thumb_thickness", &self.thumb_thickness)
            .field("minimum_range", &self.minimum_range)
            .field("margin", &self.margin)
            .field("rtl", &self.rtl)
            .finish_non_exhaustive()
    }
}

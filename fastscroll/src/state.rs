use crate::PxRect;

/// Per-axis scrollbar metrics, recomputed on every scroll event.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisMetrics {
    /// Total scrollable extent of the content along this axis.
    pub content_length: u64,
    /// Visible extent of the host along this axis.
    pub viewport_length: u32,
    /// Current scroll offset along this axis.
    pub scroll_offset: u64,
    /// Whether the content is long enough (and the viewport large enough) to
    /// warrant a scrollbar on this axis.
    pub needs_scrollbar: bool,
    /// Thumb extent along this axis.
    pub thumb_length: u32,
    /// Thumb center position along this axis.
    pub thumb_center: u32,
}

/// Resolved draw geometry for one scrollbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarGeometry {
    pub track: PxRect,
    pub thumb: PxRect,
    /// The thumb is under an active drag; render it in its pressed look.
    pub pressed: bool,
    /// The thumb artwork should be mirrored horizontally (RTL vertical bar).
    pub flipped: bool,
}

/// Everything a renderer needs for one frame.
///
/// `None` per axis means that axis does not currently need a scrollbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameGeometry {
    pub vertical: Option<BarGeometry>,
    pub horizontal: Option<BarGeometry>,
    /// Animated opacity for both thumb/track pairs, 0..=255.
    pub opacity: u8,
}

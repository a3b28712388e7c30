use fastscroll::{Axis, BarGeometry, FrameGeometry, PxRect};

/// An RGBA color with 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Scales this color's alpha by `opacity` (0..=255).
    pub fn modulate(self, opacity: u8) -> Self {
        Self {
            a: (self.a as u16 * opacity as u16 / 255) as u8,
            ..self
        }
    }
}

/// Paint for a thumb drawable, with its pressed variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThumbPaint {
    pub color: Rgba,
    pub pressed_color: Rgba,
}

/// Paint for one thumb/track pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollbarPaint {
    pub thumb: ThumbPaint,
    pub track: Rgba,
}

impl Default for ScrollbarPaint {
    fn default() -> Self {
        Self {
            thumb: ThumbPaint {
                color: Rgba::new(0x60, 0x60, 0x60, 0xFF),
                pressed_color: Rgba::new(0x30, 0x30, 0x30, 0xFF),
            },
            track: Rgba::new(0xE0, 0xE0, 0xE0, 0xFF),
        }
    }
}

/// The two thumb/track paint pairs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollbarPaints {
    pub vertical: ScrollbarPaint,
    pub horizontal: ScrollbarPaint,
}

/// The drawing surface the scrollbars are painted onto.
///
/// Implementations receive absolute viewport-space rectangles and retain no
/// state between calls.
pub trait DrawSurface {
    fn draw_track(&mut self, axis: Axis, rect: PxRect, color: Rgba);

    /// Draws a thumb; `flipped` asks for horizontally mirrored artwork (the
    /// RTL vertical bar).
    fn draw_thumb(&mut self, axis: Axis, rect: PxRect, color: Rgba, flipped: bool);
}

/// Paints one frame of scrollbar geometry, track before thumb per axis.
pub fn draw_frame(
    surface: &mut impl DrawSurface,
    geometry: &FrameGeometry,
    paints: &ScrollbarPaints,
) {
    if let Some(bar) = geometry.vertical {
        draw_bar(
            surface,
            Axis::Vertical,
            &bar,
            &paints.vertical,
            geometry.opacity,
        );
    }
    if let Some(bar) = geometry.horizontal {
        draw_bar(
            surface,
            Axis::Horizontal,
            &bar,
            &paints.horizontal,
            geometry.opacity,
        );
    }
}

fn draw_bar(
    surface: &mut impl DrawSurface,
    axis: Axis,
    bar: &BarGeometry,
    paint: &ScrollbarPaint,
    opacity: u8,
) {
    surface.draw_track(axis, bar.track, paint.track.modulate(opacity));
    let thumb = if bar.pressed {
        paint.thumb.pressed_color
    } else {
        paint.thumb.color
    };
    surface.draw_thumb(axis, bar.thumb, thumb.modulate(opacity), bar.flipped);
}

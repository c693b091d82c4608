//! Split geometry for before/after comparison widgets.
//!
//! Split positions are normalized to the `[0.0, 1.0]` range; rects
//! are in the hosting page's client pixel space.

use serde::{Deserialize, Serialize};

/// A pixel-space rectangle.
///
/// Used both for element bounding boxes reported by the hosting page
/// and for blit source/destination regions on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width, never negative.
    pub width: f64,
    /// Height, never negative.
    pub height: f64,
}

impl Rect {
    /// Create a new rect, clamping negative dimensions to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal offset of a client coordinate from the left edge.
    pub fn relative_x(&self, client_x: f64) -> f64 {
        client_x - self.x
    }

    /// Whether a client coordinate falls within the horizontal span.
    pub fn contains_x(&self, client_x: f64) -> bool {
        client_x >= self.x && client_x <= self.right()
    }
}

/// Normalized horizontal location of the before/after boundary.
///
/// `0.0` puts the boundary at the left edge (the full "after" side is
/// revealed), `1.0` at the right edge (only the "before" side shows).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SplitPosition(f64);

impl SplitPosition {
    /// Stock starting position: three quarters across.
    pub const DEFAULT: SplitPosition = SplitPosition(0.75);

    /// Create a split position, clamping into `[0.0, 1.0]`.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// The fractional offset of a pointer within a bounding rect,
    /// clamped into range. A degenerate rect maps to the left edge.
    pub fn from_pointer(client_x: f64, rect: &Rect) -> Self {
        if rect.width <= 0.0 {
            return Self(0.0);
        }
        Self::new(rect.relative_x(client_x) / rect.width)
    }

    /// The inner normalized value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SplitPosition {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Geometry of one half of a side-by-side "before|after" source frame.
///
/// Only constructed from decoded video metadata; consumers defer
/// drawing until one exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HalfFrame {
    /// Width of one half of the source frame, in source pixels.
    pub half_width: f64,
    /// Full frame height, in source pixels.
    pub height: f64,
}

impl HalfFrame {
    /// Derive half-frame geometry from a decoded source frame whose
    /// visual content is two equal horizontally-concatenated halves.
    pub fn from_source(video_width: u32, video_height: u32) -> Self {
        Self {
            half_width: video_width as f64 / 2.0,
            height: video_height as f64,
        }
    }

    /// The canvas x-coordinate of the split boundary.
    pub fn split_x(&self, position: SplitPosition) -> f64 {
        self.half_width * position.value()
    }

    /// The right-half clip for a split position.
    ///
    /// Both ends are clamped into `[0, half_width]`, and
    /// `start + width` never exceeds `half_width`, so the source read
    /// stays inside the right half.
    pub fn clip_at(&self, position: SplitPosition) -> ClipSpan {
        let offset = self.half_width * position.value();
        ClipSpan {
            start: offset.clamp(0.0, self.half_width),
            width: (self.half_width - offset).clamp(0.0, self.half_width),
        }
    }
}

/// Horizontal span of the right ("after") half revealed past the split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipSpan {
    /// Offset from the start of the right half, in source pixels.
    pub start: f64,
    /// Width of the revealed slice, in source pixels.
    pub width: f64,
}

impl ClipSpan {
    /// Whether the split leaves nothing of the "after" side visible.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn split_position_clamps() {
        assert_eq!(SplitPosition::new(-0.5).value(), 0.0);
        assert_eq!(SplitPosition::new(1.5).value(), 1.0);
        assert_eq!(SplitPosition::new(0.3).value(), 0.3);
    }

    #[test]
    fn from_pointer_is_fraction_of_rect() {
        let rect = Rect::new(100.0, 0.0, 400.0, 300.0);
        assert_eq!(SplitPosition::from_pointer(300.0, &rect).value(), 0.5);
        assert_eq!(SplitPosition::from_pointer(50.0, &rect).value(), 0.0);
        assert_eq!(SplitPosition::from_pointer(900.0, &rect).value(), 1.0);
    }

    #[test]
    fn from_pointer_handles_degenerate_rect() {
        let rect = Rect::new(10.0, 0.0, 0.0, 0.0);
        assert_eq!(SplitPosition::from_pointer(10.0, &rect).value(), 0.0);
    }

    #[test]
    fn half_frame_halves_the_source_width() {
        let frame = HalfFrame::from_source(800, 300);
        assert_eq!(frame.half_width, 400.0);
        assert_eq!(frame.height, 300.0);
    }

    #[test]
    fn clip_at_three_quarters() {
        let frame = HalfFrame::from_source(800, 300);
        let clip = frame.clip_at(SplitPosition::new(0.75));
        assert_eq!(clip.start, 300.0);
        assert_eq!(clip.width, 100.0);
    }

    #[test]
    fn clip_at_edges() {
        let frame = HalfFrame::from_source(800, 300);

        let full = frame.clip_at(SplitPosition::new(0.0));
        assert_eq!(full.start, 0.0);
        assert_eq!(full.width, 400.0);
        assert!(!full.is_empty());

        let none = frame.clip_at(SplitPosition::new(1.0));
        assert_eq!(none.start, 400.0);
        assert_eq!(none.width, 0.0);
        assert!(none.is_empty());
    }

    #[test]
    fn rect_rejects_negative_dimensions() {
        let rect = Rect::new(0.0, 0.0, -5.0, -5.0);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
    }

    proptest! {
        #[test]
        fn clip_never_reads_past_the_half(p in 0.0f64..=1.0, w in 1u32..=7680, h in 1u32..=4320) {
            let frame = HalfFrame::from_source(w, h);
            let clip = frame.clip_at(SplitPosition::new(p));

            prop_assert!(clip.start >= 0.0);
            prop_assert!(clip.width >= 0.0);
            prop_assert!(clip.start + clip.width <= frame.half_width + 1e-9);
        }

        #[test]
        fn pointer_fraction_stays_normalized(x in -1e6f64..1e6, left in -1e3f64..1e3, width in 1.0f64..1e4) {
            let rect = Rect::new(left, 0.0, width, 100.0);
            let position = SplitPosition::from_pointer(x, &rect);
            prop_assert!((0.0..=1.0).contains(&position.value()));
        }
    }
}

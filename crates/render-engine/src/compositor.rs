//! Pure split-frame composition.
//!
//! This module turns half-frame geometry and a split position into
//! the composition instructions applied frame-by-frame: two video
//! blits and the overlay glyphs.

use serde::{Deserialize, Serialize};
use wipekit_page_model::geometry::{HalfFrame, Rect, SplitPosition};

use crate::glyph::{self, OverlayGlyphs};

/// One source-to-canvas video copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Blit {
    /// Region of the source video frame.
    pub src: Rect,
    /// Destination region on the canvas.
    pub dst: Rect,
}

/// A single frame's composition instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitFrame {
    /// The full "before" half, drawn across the canvas unconditionally.
    pub before: Blit,
    /// The clipped "after" slice right of the split. `None` once the
    /// clip width reaches zero (split at the right edge).
    pub after: Option<Blit>,
    /// Disc, separator, and arrow drawn at the split.
    pub overlay: OverlayGlyphs,
}

/// Compose the instruction list for one frame.
///
/// The left half blits source `x ∈ [0, half_width]` onto the same
/// canvas coordinates; the revealed slice of the right half is offset
/// by `half_width` in the source and lands at the clip start on the
/// canvas, producing the reveal to the right of the split.
pub fn compose_split_frame(frame: &HalfFrame, position: SplitPosition) -> SplitFrame {
    let before = Blit {
        src: Rect::new(0.0, 0.0, frame.half_width, frame.height),
        dst: Rect::new(0.0, 0.0, frame.half_width, frame.height),
    };

    let clip = frame.clip_at(position);
    let after = (!clip.is_empty()).then(|| Blit {
        src: Rect::new(frame.half_width + clip.start, 0.0, clip.width, frame.height),
        dst: Rect::new(clip.start, 0.0, clip.width, frame.height),
    });

    SplitFrame {
        before,
        after,
        overlay: glyph::overlay_at(frame, position),
    }
}

//! Overlay glyph geometry: separator line, backing disc, and the
//! double-headed drag arrow.
//!
//! Every arrow dimension scales as a fixed fraction of frame height so
//! the glyph stays proportionate at any source resolution.

use serde::{Deserialize, Serialize};
use wipekit_page_model::color::Rgba;
use wipekit_page_model::geometry::{HalfFrame, SplitPosition};

/// Arrow length, fraction of frame height.
pub const ARROW_LENGTH_RATIO: f64 = 0.09;
/// Arrowhead width, fraction of frame height.
pub const ARROWHEAD_WIDTH_RATIO: f64 = 0.025;
/// Arrowhead length, fraction of frame height.
pub const ARROWHEAD_LENGTH_RATIO: f64 = 0.04;
/// Shaft thickness, fraction of frame height.
pub const SHAFT_WIDTH_RATIO: f64 = 0.007;
/// The glyph row sits one tenth of the frame height from the top.
pub const GLYPH_ROW_RATIO: f64 = 0.1;
/// Disc radius relative to arrow length.
pub const DISC_RADIUS_RATIO: f64 = 0.7;
/// Separator stroke width in canvas units.
pub const SEPARATOR_WIDTH: f64 = 5.0;

/// Translucent warm backing disc behind the arrow.
pub const DISC_COLOR: Rgba = Rgba::from_rgba8(0xFF, 0xD7, 0x93, 0x40);
/// Ink for the separator line and arrow.
pub const INK_COLOR: Rgba = Rgba::opaque(0x44, 0x44, 0x44);

/// Drawing instructions for the split overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayGlyphs {
    pub disc: Disc,
    pub separator: Separator,
    pub arrow: Arrow,
}

/// Filled circle behind the drag arrow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub color: Rgba,
}

/// Full-height vertical separator at the split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Separator {
    pub x: f64,
    pub height: f64,
    pub width: f64,
    pub color: Rgba,
}

/// The double-headed drag arrow as one closed filled polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub vertices: Vec<(f64, f64)>,
    pub color: Rgba,
}

/// Build the overlay for a split position.
pub fn overlay_at(frame: &HalfFrame, position: SplitPosition) -> OverlayGlyphs {
    let x = frame.split_x(position);
    let arrow_length = ARROW_LENGTH_RATIO * frame.height;
    let row_y = frame.height * GLYPH_ROW_RATIO;

    OverlayGlyphs {
        disc: Disc {
            center_x: x,
            center_y: row_y,
            radius: arrow_length * DISC_RADIUS_RATIO,
            color: DISC_COLOR,
        },
        separator: Separator {
            x,
            height: frame.height,
            width: SEPARATOR_WIDTH,
            color: INK_COLOR,
        },
        arrow: Arrow {
            vertices: arrow_vertices(x, frame.height),
            color: INK_COLOR,
        },
    }
}

/// Vertices of the double-headed arrow centered at `x`.
///
/// The outline starts at the shaft's top edge on the split line, walks
/// the right head tip-first, returns along the bottom to the left
/// head, and closes back at the start.
pub fn arrow_vertices(x: f64, frame_height: f64) -> Vec<(f64, f64)> {
    let length = ARROW_LENGTH_RATIO * frame_height;
    let head_width = ARROWHEAD_WIDTH_RATIO * frame_height;
    let head_length = ARROWHEAD_LENGTH_RATIO * frame_height;
    let shaft_width = SHAFT_WIDTH_RATIO * frame_height;
    let y = frame_height * GLYPH_ROW_RATIO;

    let right_tip = x + length / 2.0;
    let right_base = right_tip - head_length / 2.0;
    let left_tip = x - length / 2.0;
    let left_base = left_tip + head_length / 2.0;

    vec![
        (x, y - shaft_width / 2.0),
        (right_base, y - shaft_width / 2.0),
        (right_base, y - head_width / 2.0),
        (right_tip, y),
        (right_base, y + head_width / 2.0),
        (right_base, y + shaft_width / 2.0),
        (left_base, y + shaft_width / 2.0),
        (left_base, y + head_width / 2.0),
        (left_tip, y),
        (left_base, y - head_width / 2.0),
        (left_base, y),
        (left_base, y - shaft_width / 2.0),
        (x, y - shaft_width / 2.0),
    ]
}

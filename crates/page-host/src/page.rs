//! Element and document lookup contracts.

use serde::{Deserialize, Serialize};
use wipekit_page_model::geometry::Rect;
use wipekit_page_model::style::{StyleProperty, StyleValue};

use crate::surface::Surface;

/// Handle to a live element in the hosting page.
///
/// Handles are cheap clones of the same underlying element, mirroring
/// how script-side element references behave; style writes through any
/// clone are visible through all of them.
pub trait Element: Clone {
    /// Current rendered width in pixels.
    fn offset_width(&self) -> f64;

    /// Horizontal offset of the element's left edge within the page.
    fn offset_left(&self) -> f64;

    /// Bounding rectangle in client coordinates.
    fn bounding_rect(&self) -> Rect;

    /// Write one inline style property.
    fn set_style(&self, property: StyleProperty, value: StyleValue);
}

/// Media readiness ladder reported by a video element.
///
/// Mirrors the hosting page's readiness signal; comparison sessions
/// only start compositing on the top rung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadyState {
    HaveNothing,
    HaveMetadata,
    HaveCurrentData,
    HaveFutureData,
    HaveEnoughData,
}

impl ReadyState {
    /// Whether enough of the stream is buffered to begin compositing.
    pub fn has_enough_data(self) -> bool {
        matches!(self, ReadyState::HaveEnoughData)
    }
}

/// A video playback element whose visual frame is a single stream of
/// two equal horizontally-concatenated halves (before | after).
pub trait VideoElement: Element {
    /// Decoded frame width in pixels, covering both halves.
    fn video_width(&self) -> u32;

    /// Decoded frame height in pixels.
    fn video_height(&self) -> u32;

    /// Current buffering/readiness state.
    fn ready_state(&self) -> ReadyState;

    /// Begin (or resume) playback.
    fn play(&self);
}

/// A canvas element paired with one source video.
pub trait CanvasElement: Element {
    type Surface: Surface + 'static;

    /// Set the canvas backing-store size in pixels.
    fn set_pixel_size(&self, width: u32, height: u32);

    /// Acquire the 2D drawing surface. `None` when the context is
    /// unavailable.
    fn surface(&self) -> Option<Self::Surface>;
}

/// Lookup surface of the hosting page.
///
/// Lookups return `None` for anything absent; widgets convert that to
/// a typed configuration error and abort before any page mutation.
pub trait Page {
    type Elem: Element + 'static;
    type Video: VideoElement + 'static;
    type Canvas: CanvasElement + 'static;

    /// First element matching a CSS selector.
    fn query(&self, selector: &str) -> Option<Self::Elem>;

    /// First descendant of `root` matching a CSS selector.
    fn query_within(&self, root: &Self::Elem, selector: &str) -> Option<Self::Elem>;

    /// Video element with the given id.
    fn video_by_id(&self, id: &str) -> Option<Self::Video>;

    /// Canvas element with the given id.
    fn canvas_by_id(&self, id: &str) -> Option<Self::Canvas>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_top_rung_has_enough_data() {
        assert!(ReadyState::HaveEnoughData.has_enough_data());
        assert!(!ReadyState::HaveFutureData.has_enough_data());
        assert!(!ReadyState::HaveNothing.has_enough_data());
    }

    #[test]
    fn ready_state_orders_by_rung() {
        assert!(ReadyState::HaveNothing < ReadyState::HaveMetadata);
        assert!(ReadyState::HaveFutureData < ReadyState::HaveEnoughData);
    }
}

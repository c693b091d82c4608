//! Comparison session lifecycle.
//!
//! A session binds one video element to its paired canvas and tracks
//! the split state the compositor reads each frame.

use tracing::{debug, warn};
use wipekit_common::{WidgetDefaults, WipekitError, WipekitResult};
use wipekit_page_host::{CanvasElement, Element, Page, VideoElement};
use wipekit_page_model::event::PointerEvent;
use wipekit_page_model::geometry::{HalfFrame, SplitPosition};

use crate::compositor::{compose_split_frame, SplitFrame};
use crate::draw_loop;

/// Readiness of a comparison session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// The video has not buffered enough data; composition is
    /// deferred until the metadata-loaded signal re-enters.
    Waiting,
    /// Half-frame geometry is known and playback has started.
    Active,
}

/// One split-screen comparison bound to a video/canvas pair.
pub struct ComparisonSession<P: Page> {
    video: P::Video,
    canvas: P::Canvas,
    surface: <P::Canvas as CanvasElement>::Surface,
    phase: SessionPhase,
    position: SplitPosition,
    frame: Option<HalfFrame>,
}

impl<P: Page> ComparisonSession<P> {
    /// Open a session for the video with the given id.
    ///
    /// The paired canvas is found by id convention
    /// (`video_id + defaults.canvas_id_suffix`). Lookup failures abort
    /// with a typed error before any page mutation. When the video
    /// already has enough buffered data the session activates
    /// immediately; otherwise it opens in [`SessionPhase::Waiting`]
    /// and the host should wire the video's metadata-loaded signal to
    /// [`Self::on_metadata_loaded`].
    pub fn open(page: &P, video_id: &str, defaults: &WidgetDefaults) -> WipekitResult<Self> {
        let canvas_id = format!("{video_id}{}", defaults.canvas_id_suffix);

        let Some(video) = page.video_by_id(video_id) else {
            warn!(video_id, "comparison video not found");
            return Err(WipekitError::element_missing(video_id));
        };
        let Some(canvas) = page.canvas_by_id(&canvas_id) else {
            warn!(%canvas_id, "comparison canvas not found");
            return Err(WipekitError::element_missing(canvas_id));
        };
        let Some(surface) = canvas.surface() else {
            warn!(%canvas_id, "2D drawing surface unavailable");
            return Err(WipekitError::surface_unavailable(canvas_id));
        };

        let mut session = Self {
            video,
            canvas,
            surface,
            phase: SessionPhase::Waiting,
            position: SplitPosition::new(defaults.initial_split),
            frame: None,
        };

        if session.video.ready_state().has_enough_data() {
            session.activate();
        }
        Ok(session)
    }

    /// Metadata-loaded signal from the host.
    ///
    /// Entering from `Waiting` activates the session. Once active this
    /// only refreshes the stored half-frame geometry; the draw loop
    /// picks the new values up on its next tick and is not restarted.
    pub fn on_metadata_loaded(&mut self) {
        match self.phase {
            SessionPhase::Waiting => self.activate(),
            SessionPhase::Active => self.refresh_frame(),
        }
    }

    /// Move the split to a pointer sample over the canvas.
    pub fn on_pointer(&mut self, event: &PointerEvent) {
        let rect = self.canvas.bounding_rect();
        self.position = SplitPosition::from_pointer(event.client_x, &rect);
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    pub fn position(&self) -> SplitPosition {
        self.position
    }

    /// Compose this frame's instruction list, or `None` while waiting
    /// on metadata.
    pub fn compose(&self) -> Option<SplitFrame> {
        if self.phase != SessionPhase::Active {
            return None;
        }
        let frame = self.frame.as_ref()?;
        Some(compose_split_frame(frame, self.position))
    }

    /// Compose and replay one frame onto the surface. Returns whether
    /// anything was drawn.
    pub fn render_frame(&mut self) -> bool {
        let Some(frame) = self.compose() else {
            return false;
        };
        draw_loop::render(&frame, &mut self.surface);
        true
    }

    fn activate(&mut self) {
        self.refresh_frame();
        self.video.play();
        self.phase = SessionPhase::Active;
        debug!(frame = ?self.frame, "comparison session active");
    }

    fn refresh_frame(&mut self) {
        self.frame = Some(HalfFrame::from_source(
            self.video.video_width(),
            self.video.video_height(),
        ));
    }
}

/// Wire a video's ready signal: size the paired canvas to half the
/// video width and full height, start playback, collapse the native
/// video element so the canvas becomes the visible surface, and open
/// the session.
pub fn resize_and_attach<P: Page>(
    page: &P,
    video_id: &str,
    defaults: &WidgetDefaults,
) -> WipekitResult<ComparisonSession<P>> {
    use wipekit_page_model::style::{StyleProperty, StyleValue};

    let canvas_id = format!("{video_id}{}", defaults.canvas_id_suffix);

    let Some(video) = page.video_by_id(video_id) else {
        warn!(video_id, "comparison video not found");
        return Err(WipekitError::element_missing(video_id));
    };
    let Some(canvas) = page.canvas_by_id(&canvas_id) else {
        warn!(%canvas_id, "comparison canvas not found");
        return Err(WipekitError::element_missing(canvas_id));
    };

    canvas.set_pixel_size(video.video_width() / 2, video.video_height());
    video.play();
    video.set_style(StyleProperty::Height, StyleValue::Px(0.0));

    ComparisonSession::open(page, video_id, defaults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wipekit_page_host::memory::{MemoryCanvas, MemoryPage, MemoryVideo};
    use wipekit_page_host::ReadyState;
    use wipekit_page_model::geometry::Rect;
    use wipekit_page_model::style::{StyleProperty, StyleValue};

    fn page_with(ready: ReadyState) -> (MemoryPage, MemoryVideo, MemoryCanvas) {
        let page = MemoryPage::new();
        let video = MemoryVideo::new(800, 300, ready);
        let canvas = MemoryCanvas::new(Rect::new(0.0, 0.0, 400.0, 300.0));
        page.insert_video("vid1", video.clone());
        page.insert_canvas("vid1Merge", canvas.clone());
        (page, video, canvas)
    }

    #[test]
    fn ready_video_activates_and_plays() {
        let (page, video, _canvas) = page_with(ReadyState::HaveEnoughData);
        let session =
            ComparisonSession::open(&page, "vid1", &WidgetDefaults::default()).unwrap();

        assert!(session.is_active());
        assert_eq!(video.play_count(), 1);
        assert_eq!(session.position().value(), 0.75);
        assert!(session.compose().is_some());
    }

    #[test]
    fn unready_video_waits_without_composing() {
        let (page, video, _canvas) = page_with(ReadyState::HaveCurrentData);
        let mut session =
            ComparisonSession::open(&page, "vid1", &WidgetDefaults::default()).unwrap();

        assert_eq!(session.phase(), SessionPhase::Waiting);
        assert_eq!(video.play_count(), 0);
        assert!(session.compose().is_none());
        assert!(!session.render_frame());

        video.set_ready_state(ReadyState::HaveEnoughData);
        session.on_metadata_loaded();

        assert!(session.is_active());
        assert_eq!(video.play_count(), 1);
        assert!(session.compose().is_some());
    }

    #[test]
    fn metadata_change_after_activation_refreshes_geometry() {
        let (page, video, _canvas) = page_with(ReadyState::HaveEnoughData);
        let mut session =
            ComparisonSession::open(&page, "vid1", &WidgetDefaults::default()).unwrap();

        video.set_natural_size(1920, 540);
        session.on_metadata_loaded();

        // Still one playback start; geometry tracks the new frame.
        assert_eq!(video.play_count(), 1);
        let composed = session.compose().unwrap();
        assert_eq!(composed.before.src.width, 960.0);
        assert_eq!(composed.before.src.height, 540.0);
    }

    #[test]
    fn pointer_over_the_canvas_moves_the_split() {
        let (page, _video, _canvas) = page_with(ReadyState::HaveEnoughData);
        let mut session =
            ComparisonSession::open(&page, "vid1", &WidgetDefaults::default()).unwrap();

        session.on_pointer(&PointerEvent::mouse(100.0, 50.0));
        assert_eq!(session.position().value(), 0.25);

        // Clamped at the rect edges.
        session.on_pointer(&PointerEvent::touch(-50.0, 50.0));
        assert_eq!(session.position().value(), 0.0);
        session.on_pointer(&PointerEvent::touch(900.0, 50.0));
        assert_eq!(session.position().value(), 1.0);
    }

    #[test]
    fn missing_video_or_canvas_aborts() {
        let page = MemoryPage::new();
        let result = ComparisonSession::open(&page, "vid1", &WidgetDefaults::default());
        assert!(matches!(result, Err(WipekitError::ElementMissing { .. })));

        let video = MemoryVideo::new(800, 300, ReadyState::HaveEnoughData);
        page.insert_video("vid1", video);
        let result = ComparisonSession::open(&page, "vid1", &WidgetDefaults::default());
        assert!(matches!(result, Err(WipekitError::ElementMissing { .. })));
    }

    #[test]
    fn context_failure_surfaces_as_typed_error() {
        let page = MemoryPage::new();
        page.insert_video("vid1", MemoryVideo::new(800, 300, ReadyState::HaveEnoughData));
        page.insert_canvas(
            "vid1Merge",
            MemoryCanvas::without_surface(Rect::new(0.0, 0.0, 400.0, 300.0)),
        );

        let result = ComparisonSession::open(&page, "vid1", &WidgetDefaults::default());
        assert!(matches!(
            result,
            Err(WipekitError::SurfaceUnavailable { .. })
        ));
    }

    #[test]
    fn resize_and_attach_prepares_the_canvas_and_collapses_the_video() {
        let (page, video, canvas) = page_with(ReadyState::HaveEnoughData);
        let session = resize_and_attach(&page, "vid1", &WidgetDefaults::default()).unwrap();

        assert_eq!(canvas.pixel_size(), Some((400, 300)));
        assert_eq!(
            video.element().last_style(StyleProperty::Height),
            Some(StyleValue::Px(0.0))
        );
        // Played by the attach step and again on activation.
        assert_eq!(video.play_count(), 2);
        assert!(session.is_active());
    }
}

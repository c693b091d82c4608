//! Entry operation tying a session to its draw loop.

use std::cell::RefCell;
use std::rc::Rc;

use wipekit_common::{WidgetDefaults, WipekitResult};
use wipekit_page_host::{DisposeHandle, FrameScheduler, Page};
use wipekit_page_model::event::PointerEvent;

use crate::draw_loop::spawn_draw_loop;
use crate::session::{self, ComparisonSession};

/// A running comparison: the session plus the lifetime of its draw
/// loop.
///
/// The loop only spawns once the session is active; a comparison
/// opened against a still-buffering video waits for the host to relay
/// the metadata-loaded signal. Dropping the comparison disposes the
/// loop.
pub struct Comparison<P: Page> {
    session: Rc<RefCell<ComparisonSession<P>>>,
    loop_handle: Option<DisposeHandle>,
}

impl<P: Page + 'static> Comparison<P> {
    /// Open a session for `video_id` and start drawing if the video is
    /// already ready.
    pub fn start<S: FrameScheduler + ?Sized>(
        page: &P,
        scheduler: &S,
        video_id: &str,
        defaults: &WidgetDefaults,
    ) -> WipekitResult<Self> {
        let session = ComparisonSession::open(page, video_id, defaults)?;
        Ok(Self::from_session(scheduler, session))
    }

    /// Companion wiring point for the host's video-ready event: size
    /// and reveal the canvas, collapse the native video element, then
    /// start.
    pub fn resize_and_attach<S: FrameScheduler + ?Sized>(
        page: &P,
        scheduler: &S,
        video_id: &str,
        defaults: &WidgetDefaults,
    ) -> WipekitResult<Self> {
        let session = session::resize_and_attach(page, video_id, defaults)?;
        Ok(Self::from_session(scheduler, session))
    }

    fn from_session<S: FrameScheduler + ?Sized>(
        scheduler: &S,
        session: ComparisonSession<P>,
    ) -> Self {
        let active = session.is_active();
        let session = Rc::new(RefCell::new(session));
        let loop_handle = active.then(|| spawn_draw_loop(scheduler, session.clone()));
        Self {
            session,
            loop_handle,
        }
    }

    /// Relay of the video's metadata-loaded signal.
    ///
    /// Re-enters activation when the session was still waiting — at
    /// which point the draw loop spawns — and otherwise just refreshes
    /// the frame geometry.
    pub fn on_metadata_loaded<S: FrameScheduler + ?Sized>(&mut self, scheduler: &S) {
        self.session.borrow_mut().on_metadata_loaded();
        if self.loop_handle.is_none() && self.session.borrow().is_active() {
            self.loop_handle = Some(spawn_draw_loop(scheduler, self.session.clone()));
        }
    }

    /// Relay of pointer samples over the canvas.
    pub fn on_pointer(&self, event: &PointerEvent) {
        self.session.borrow_mut().on_pointer(event);
    }

    /// Whether the draw loop is currently running.
    pub fn is_running(&self) -> bool {
        self.loop_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_disposed())
    }

    /// Halt the draw loop; it stops on its next tick.
    pub fn dispose(&mut self) {
        if let Some(handle) = self.loop_handle.take() {
            handle.dispose();
        }
    }

    /// Shared access to the underlying session.
    pub fn session(&self) -> Rc<RefCell<ComparisonSession<P>>> {
        self.session.clone()
    }
}

impl<P: Page> Drop for Comparison<P> {
    fn drop(&mut self) {
        if let Some(handle) = self.loop_handle.take() {
            handle.dispose();
        }
    }
}

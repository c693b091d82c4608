//! Frame-by-frame replay of composed instructions.

use std::cell::RefCell;
use std::rc::Rc;

use wipekit_page_host::{DisposeHandle, FrameDirective, FrameScheduler, Page, Surface};

use crate::compositor::SplitFrame;
use crate::session::ComparisonSession;

/// Replay one composed frame onto a surface.
///
/// Draw order matters: before blit, clipped after blit, then the
/// overlay (disc, separator, arrow) on top.
pub fn render(frame: &SplitFrame, surface: &mut impl Surface) {
    surface.draw_video_region(frame.before.src, frame.before.dst);
    if let Some(after) = frame.after {
        surface.draw_video_region(after.src, after.dst);
    }

    let overlay = &frame.overlay;
    surface.fill_circle(
        overlay.disc.center_x,
        overlay.disc.center_y,
        overlay.disc.radius,
        overlay.disc.color,
    );
    surface.stroke_line(
        (overlay.separator.x, 0.0),
        (overlay.separator.x, overlay.separator.height),
        overlay.separator.width,
        overlay.separator.color,
    );
    surface.fill_polygon(&overlay.arrow.vertices, overlay.arrow.color);
}

/// Spawn the continuous draw task for a session.
///
/// The task composes and replays one frame per tick (skipping ticks
/// while the session is still waiting on metadata) and reschedules
/// itself until the returned handle is disposed.
pub fn spawn_draw_loop<P, S>(
    scheduler: &S,
    session: Rc<RefCell<ComparisonSession<P>>>,
) -> DisposeHandle
where
    P: Page + 'static,
    S: FrameScheduler + ?Sized,
{
    let handle = DisposeHandle::new();
    let task_handle = handle.clone();

    scheduler.spawn(Box::new(move || {
        if task_handle.is_disposed() {
            return FrameDirective::Stop;
        }
        session.borrow_mut().render_frame();
        FrameDirective::Continue
    }));

    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use wipekit_page_host::memory::{MemorySurface, RecordedOp};
    use wipekit_page_model::geometry::{HalfFrame, SplitPosition};

    use crate::compositor::compose_split_frame;

    #[test]
    fn render_issues_primitives_in_draw_order() {
        let frame = HalfFrame::from_source(800, 300);
        let composed = compose_split_frame(&frame, SplitPosition::new(0.5));

        let mut surface = MemorySurface::new();
        render(&composed, &mut surface);

        let ops = surface.ops();
        assert_eq!(ops.len(), 5);
        assert!(matches!(ops[0], RecordedOp::VideoRegion { .. }));
        assert!(matches!(ops[1], RecordedOp::VideoRegion { .. }));
        assert!(matches!(ops[2], RecordedOp::Circle { .. }));
        assert!(matches!(ops[3], RecordedOp::Line { .. }));
        assert!(matches!(ops[4], RecordedOp::Polygon { .. }));
    }

    #[test]
    fn render_skips_the_after_blit_at_the_right_edge() {
        let frame = HalfFrame::from_source(800, 300);
        let composed = compose_split_frame(&frame, SplitPosition::new(1.0));

        let mut surface = MemorySurface::new();
        render(&composed, &mut surface);

        let blits = surface
            .ops()
            .iter()
            .filter(|op| matches!(op, RecordedOp::VideoRegion { .. }))
            .count();
        assert_eq!(blits, 1);
    }
}

//! End-to-end comparison flow against the in-memory host.

use wipekit_common::WidgetDefaults;
use wipekit_page_host::memory::{MemoryCanvas, MemoryPage, MemoryScheduler, MemoryVideo, RecordedOp};
use wipekit_page_host::ReadyState;
use wipekit_page_model::event::PointerEvent;
use wipekit_page_model::geometry::Rect;
use wipekit_render_engine::Comparison;

fn host(ready: ReadyState) -> (MemoryPage, MemoryScheduler, MemoryVideo, MemoryCanvas) {
    let page = MemoryPage::new();
    let scheduler = MemoryScheduler::new();
    let video = MemoryVideo::new(800, 300, ready);
    let canvas = MemoryCanvas::new(Rect::new(0.0, 0.0, 400.0, 300.0));
    page.insert_video("vid1", video.clone());
    page.insert_canvas("vid1Merge", canvas.clone());
    (page, scheduler, video, canvas)
}

#[test]
fn waiting_video_draws_nothing_until_metadata_arrives() {
    let (page, scheduler, video, canvas) = host(ReadyState::HaveCurrentData);

    let mut comparison =
        Comparison::start(&page, &scheduler, "vid1", &WidgetDefaults::default()).unwrap();

    // No draw cycle while the video is still buffering.
    assert!(!comparison.is_running());
    assert_eq!(scheduler.task_count(), 0);
    scheduler.advance(3);
    let surface = canvas.surface_handle().unwrap();
    assert_eq!(surface.op_count(), 0);

    // The metadata signal re-enters activation exactly once.
    video.set_ready_state(ReadyState::HaveEnoughData);
    comparison.on_metadata_loaded(&scheduler);

    assert!(comparison.is_running());
    assert_eq!(scheduler.task_count(), 1);
    assert_eq!(video.play_count(), 1);

    scheduler.advance(2);
    // Two frames, five primitives each at the default split.
    assert_eq!(surface.op_count(), 10);
}

#[test]
fn pointer_moves_the_split_read_by_the_next_frame() {
    let (page, scheduler, _video, canvas) = host(ReadyState::HaveEnoughData);

    let comparison =
        Comparison::start(&page, &scheduler, "vid1", &WidgetDefaults::default()).unwrap();
    assert!(comparison.is_running());

    let surface = canvas.surface_handle().unwrap();
    scheduler.advance(1);
    surface.clear();

    comparison.on_pointer(&PointerEvent::mouse(100.0, 50.0));
    scheduler.advance(1);

    let ops = surface.ops();
    let separator_x = ops
        .iter()
        .find_map(|op| match op {
            RecordedOp::Line { from, .. } => Some(from.0),
            _ => None,
        })
        .unwrap();
    assert_eq!(separator_x, 100.0);

    let after_dst_x = ops
        .iter()
        .filter_map(|op| match op {
            RecordedOp::VideoRegion { dst, .. } => Some(dst.x),
            _ => None,
        })
        .nth(1)
        .unwrap();
    assert_eq!(after_dst_x, 100.0);
}

#[test]
fn dispose_halts_the_loop_and_releases_the_task() {
    let (page, scheduler, _video, canvas) = host(ReadyState::HaveEnoughData);

    let mut comparison =
        Comparison::start(&page, &scheduler, "vid1", &WidgetDefaults::default()).unwrap();
    scheduler.advance(1);

    let surface = canvas.surface_handle().unwrap();
    let drawn = surface.op_count();
    assert!(drawn > 0);

    comparison.dispose();
    assert!(!comparison.is_running());

    scheduler.advance(3);
    assert_eq!(surface.op_count(), drawn);
    assert_eq!(scheduler.task_count(), 0);
}

#[test]
fn dropping_the_comparison_disposes_the_loop() {
    let (page, scheduler, _video, canvas) = host(ReadyState::HaveEnoughData);

    let comparison =
        Comparison::start(&page, &scheduler, "vid1", &WidgetDefaults::default()).unwrap();
    assert_eq!(scheduler.task_count(), 1);
    drop(comparison);

    scheduler.advance(1);
    assert_eq!(scheduler.task_count(), 0);
    let surface = canvas.surface_handle().unwrap();
    assert_eq!(surface.op_count(), 0);
}

#[test]
fn resize_and_attach_wires_the_whole_surface() {
    let (page, scheduler, video, canvas) = host(ReadyState::HaveEnoughData);

    let comparison =
        Comparison::resize_and_attach(&page, &scheduler, "vid1", &WidgetDefaults::default())
            .unwrap();

    assert_eq!(canvas.pixel_size(), Some((400, 300)));
    assert!(comparison.is_running());
    assert!(video.play_count() >= 1);

    scheduler.advance(1);
    assert_eq!(canvas.surface_handle().unwrap().op_count(), 5);
}

//! In-memory host page for tests and headless embedding.
//!
//! Elements record every style write, surfaces record every draw op,
//! and the scheduler pumps frame tasks manually with
//! [`MemoryScheduler::advance`]. Selector matching is exact-token
//! (the string the fixture registered), not a CSS engine.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wipekit_page_model::color::Rgba;
use wipekit_page_model::geometry::Rect;
use wipekit_page_model::style::{StyleProperty, StyleValue};

use crate::page::{CanvasElement, Element, Page, ReadyState, VideoElement};
use crate::scheduler::{FrameDirective, FrameScheduler};
use crate::surface::Surface;

#[derive(Debug, Default)]
struct ElementState {
    rect: Rect,
    styles: Vec<(StyleProperty, StyleValue)>,
    children: Vec<(String, MemoryElement)>,
}

/// An element handle backed by shared in-memory state.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
    /// Create an element with the given client-space bounds.
    pub fn new(rect: Rect) -> Self {
        Self {
            state: Rc::new(RefCell::new(ElementState {
                rect,
                styles: Vec::new(),
                children: Vec::new(),
            })),
        }
    }

    /// Register a child reachable through `query_within`.
    pub fn append_child(&self, selector: impl Into<String>, child: MemoryElement) {
        self.state
            .borrow_mut()
            .children
            .push((selector.into(), child));
    }

    /// Depth-first search of descendants for an exact selector token.
    pub fn find(&self, selector: &str) -> Option<MemoryElement> {
        let state = self.state.borrow();
        for (token, child) in &state.children {
            if token == selector {
                return Some(child.clone());
            }
            if let Some(found) = child.find(selector) {
                return Some(found);
            }
        }
        None
    }

    /// Simulate a relayout (e.g. a viewport resize).
    pub fn set_rect(&self, rect: Rect) {
        self.state.borrow_mut().rect = rect;
    }

    /// Every style write, in order.
    pub fn style_writes(&self) -> Vec<(StyleProperty, StyleValue)> {
        self.state.borrow().styles.clone()
    }

    /// Number of style writes so far.
    pub fn style_write_count(&self) -> usize {
        self.state.borrow().styles.len()
    }

    /// The most recent write to a property, if any.
    pub fn last_style(&self, property: StyleProperty) -> Option<StyleValue> {
        self.state
            .borrow()
            .styles
            .iter()
            .rev()
            .find(|(prop, _)| *prop == property)
            .map(|(_, value)| *value)
    }
}

impl Element for MemoryElement {
    fn offset_width(&self) -> f64 {
        self.state.borrow().rect.width
    }

    fn offset_left(&self) -> f64 {
        self.state.borrow().rect.x
    }

    fn bounding_rect(&self) -> Rect {
        self.state.borrow().rect
    }

    fn set_style(&self, property: StyleProperty, value: StyleValue) {
        self.state.borrow_mut().styles.push((property, value));
    }
}

#[derive(Debug)]
struct MediaState {
    video_width: u32,
    video_height: u32,
    ready_state: ReadyState,
    play_count: u32,
}

/// A video element with scriptable readiness and natural size.
#[derive(Debug, Clone)]
pub struct MemoryVideo {
    element: MemoryElement,
    media: Rc<RefCell<MediaState>>,
}

impl MemoryVideo {
    pub fn new(video_width: u32, video_height: u32, ready_state: ReadyState) -> Self {
        Self {
            element: MemoryElement::new(Rect::new(
                0.0,
                0.0,
                video_width as f64,
                video_height as f64,
            )),
            media: Rc::new(RefCell::new(MediaState {
                video_width,
                video_height,
                ready_state,
                play_count: 0,
            })),
        }
    }

    /// Simulate buffering progress.
    pub fn set_ready_state(&self, ready_state: ReadyState) {
        self.media.borrow_mut().ready_state = ready_state;
    }

    /// Simulate a metadata change reporting a new decoded size.
    pub fn set_natural_size(&self, video_width: u32, video_height: u32) {
        let mut media = self.media.borrow_mut();
        media.video_width = video_width;
        media.video_height = video_height;
    }

    /// How many times playback was started.
    pub fn play_count(&self) -> u32 {
        self.media.borrow().play_count
    }

    /// The underlying element handle (for style inspection).
    pub fn element(&self) -> &MemoryElement {
        &self.element
    }
}

impl Element for MemoryVideo {
    fn offset_width(&self) -> f64 {
        self.element.offset_width()
    }

    fn offset_left(&self) -> f64 {
        self.element.offset_left()
    }

    fn bounding_rect(&self) -> Rect {
        self.element.bounding_rect()
    }

    fn set_style(&self, property: StyleProperty, value: StyleValue) {
        self.element.set_style(property, value);
    }
}

impl VideoElement for MemoryVideo {
    fn video_width(&self) -> u32 {
        self.media.borrow().video_width
    }

    fn video_height(&self) -> u32 {
        self.media.borrow().video_height
    }

    fn ready_state(&self) -> ReadyState {
        self.media.borrow().ready_state
    }

    fn play(&self) {
        self.media.borrow_mut().play_count += 1;
    }
}

/// One draw primitive issued against a [`MemorySurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedOp {
    VideoRegion {
        src: Rect,
        dst: Rect,
    },
    Circle {
        center_x: f64,
        center_y: f64,
        radius: f64,
        color: Rgba,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        color: Rgba,
    },
    Polygon {
        vertices: Vec<(f64, f64)>,
        color: Rgba,
    },
}

/// A drawing surface that records every primitive.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    ops: Rc<RefCell<Vec<RecordedOp>>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded ops, in draw order.
    pub fn ops(&self) -> Vec<RecordedOp> {
        self.ops.borrow().clone()
    }

    pub fn op_count(&self) -> usize {
        self.ops.borrow().len()
    }

    pub fn clear(&self) {
        self.ops.borrow_mut().clear();
    }
}

impl Surface for MemorySurface {
    fn draw_video_region(&mut self, src: Rect, dst: Rect) {
        self.ops.borrow_mut().push(RecordedOp::VideoRegion { src, dst });
    }

    fn fill_circle(&mut self, center_x: f64, center_y: f64, radius: f64, color: Rgba) {
        self.ops.borrow_mut().push(RecordedOp::Circle {
            center_x,
            center_y,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Rgba) {
        self.ops.borrow_mut().push(RecordedOp::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_polygon(&mut self, vertices: &[(f64, f64)], color: Rgba) {
        self.ops.borrow_mut().push(RecordedOp::Polygon {
            vertices: vertices.to_vec(),
            color,
        });
    }
}

/// A canvas element whose surface records draw ops.
#[derive(Debug, Clone)]
pub struct MemoryCanvas {
    element: MemoryElement,
    surface: Option<MemorySurface>,
    pixel_size: Rc<Cell<Option<(u32, u32)>>>,
}

impl MemoryCanvas {
    pub fn new(rect: Rect) -> Self {
        Self {
            element: MemoryElement::new(rect),
            surface: Some(MemorySurface::new()),
            pixel_size: Rc::new(Cell::new(None)),
        }
    }

    /// A canvas whose 2D context acquisition fails.
    pub fn without_surface(rect: Rect) -> Self {
        Self {
            element: MemoryElement::new(rect),
            surface: None,
            pixel_size: Rc::new(Cell::new(None)),
        }
    }

    /// The backing-store size set by `set_pixel_size`, if any.
    pub fn pixel_size(&self) -> Option<(u32, u32)> {
        self.pixel_size.get()
    }

    /// The shared recording surface (same ops the widgets draw into).
    pub fn surface_handle(&self) -> Option<MemorySurface> {
        self.surface.clone()
    }

    pub fn element(&self) -> &MemoryElement {
        &self.element
    }
}

impl Element for MemoryCanvas {
    fn offset_width(&self) -> f64 {
        self.element.offset_width()
    }

    fn offset_left(&self) -> f64 {
        self.element.offset_left()
    }

    fn bounding_rect(&self) -> Rect {
        self.element.bounding_rect()
    }

    fn set_style(&self, property: StyleProperty, value: StyleValue) {
        self.element.set_style(property, value);
    }
}

impl CanvasElement for MemoryCanvas {
    type Surface = MemorySurface;

    fn set_pixel_size(&self, width: u32, height: u32) {
        self.pixel_size.set(Some((width, height)));
    }

    fn surface(&self) -> Option<MemorySurface> {
        self.surface.clone()
    }
}

/// An in-memory page: selector-keyed roots plus id-keyed videos and
/// canvases.
#[derive(Debug, Default)]
pub struct MemoryPage {
    roots: RefCell<Vec<(String, MemoryElement)>>,
    videos: RefCell<HashMap<String, MemoryVideo>>,
    canvases: RefCell<HashMap<String, MemoryCanvas>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a top-level element under a selector token.
    pub fn insert(&self, selector: impl Into<String>, element: MemoryElement) {
        self.roots.borrow_mut().push((selector.into(), element));
    }

    pub fn insert_video(&self, id: impl Into<String>, video: MemoryVideo) {
        self.videos.borrow_mut().insert(id.into(), video);
    }

    pub fn insert_canvas(&self, id: impl Into<String>, canvas: MemoryCanvas) {
        self.canvases.borrow_mut().insert(id.into(), canvas);
    }
}

impl Page for MemoryPage {
    type Elem = MemoryElement;
    type Video = MemoryVideo;
    type Canvas = MemoryCanvas;

    fn query(&self, selector: &str) -> Option<MemoryElement> {
        self.roots
            .borrow()
            .iter()
            .find(|(token, _)| token == selector)
            .map(|(_, element)| element.clone())
    }

    fn query_within(&self, root: &MemoryElement, selector: &str) -> Option<MemoryElement> {
        root.find(selector)
    }

    fn video_by_id(&self, id: &str) -> Option<MemoryVideo> {
        self.videos.borrow().get(id).cloned()
    }

    fn canvas_by_id(&self, id: &str) -> Option<MemoryCanvas> {
        self.canvases.borrow().get(id).cloned()
    }
}

type FrameTask = Box<dyn FnMut() -> FrameDirective>;

/// A manually pumped frame scheduler.
#[derive(Default)]
pub struct MemoryScheduler {
    tasks: RefCell<Vec<FrameTask>>,
}

impl MemoryScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Pump `frames` animation frames. Tasks that return
    /// [`FrameDirective::Stop`] are dropped; tasks spawned during a
    /// frame start running on the next one.
    pub fn advance(&self, frames: usize) {
        for _ in 0..frames {
            let mut current = self.tasks.take();
            let mut kept = Vec::with_capacity(current.len());
            for mut task in current.drain(..) {
                if task() == FrameDirective::Continue {
                    kept.push(task);
                }
            }
            let mut tasks = self.tasks.borrow_mut();
            kept.append(&mut tasks);
            *tasks = kept;
        }
    }
}

impl FrameScheduler for MemoryScheduler {
    fn spawn(&self, task: FrameTask) {
        self.tasks.borrow_mut().push(task);
    }
}

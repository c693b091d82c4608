//! Wipekit Render Engine
//!
//! Continuous split-screen compositing of a side-by-side
//! "before|after" source video onto its paired canvas.
//!
//! # Per-frame pipeline
//!
//! ```text
//! video frame ──┐
//!               ├── left-half blit (full "before" side)
//! split pos ────┤
//!               ├── clipped right-half blit ("after" reveal)
//!               └── overlay: disc, separator, drag arrow
//! ```
//!
//! The compositor is pure: each frame it emits a [`SplitFrame`]
//! instruction list from the current half-frame geometry and split
//! position, and the draw loop replays it onto the host surface. The
//! loop is a cooperative frame task with an explicit dispose handle.

pub mod comparison;
pub mod compositor;
pub mod draw_loop;
pub mod glyph;
pub mod session;

pub use comparison::*;
pub use compositor::*;
pub use session::*;

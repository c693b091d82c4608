//! Canvas drawing surface contract.

use wipekit_page_model::color::Rgba;
use wipekit_page_model::geometry::Rect;

/// A canvas-2D-like drawing surface with RGBA semantics.
///
/// A surface is acquired from a canvas that is paired with one source
/// video; [`Surface::draw_video_region`] samples that video's current
/// decoded frame. Source-rect to destination-rect copies are assumed
/// to be supported.
pub trait Surface {
    /// Copy a region of the paired video's current frame onto the
    /// canvas.
    fn draw_video_region(&mut self, src: Rect, dst: Rect);

    /// Fill a circle.
    fn fill_circle(&mut self, center_x: f64, center_y: f64, radius: f64, color: Rgba);

    /// Stroke a straight line segment.
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Rgba);

    /// Fill a closed polygon given its vertices in draw order.
    fn fill_polygon(&mut self, vertices: &[(f64, f64)], color: Rgba);
}

use crate::coords::Rect;

use super::{Path, PathBuilder};

/// Builds the closed outline of a rounded rectangle.
///
/// Four 90° corner arcs, clockwise from the top-left, each bounded by a
/// `2r × 2r` square tucked into its corner; the rectangle's straight edges
/// are implied between them and the figure is explicitly closed.
///
/// Pure and unvalidated: zero radius collapses the corners to points (a
/// plain rectangle outline), a radius above `min(w, h) / 2` makes the arcs
/// overlap, and negative sizes yield whatever degenerate ellipses they
/// describe. The figure is well formed in every case.
pub fn rounded_rect_path(x: f32, y: f32, width: f32, height: f32, radius: f32) -> Path {
    let d = radius * 2.0;
    let right = x + width;
    let bottom = y + height;

    let mut pb = PathBuilder::new();
    // Top-left, top-right, bottom-right, bottom-left.
    pb.add_arc(Rect::new(x, y, d, d), 180.0, 90.0);
    pb.add_arc(Rect::new(right - d, y, d, d), 270.0, 90.0);
    pb.add_arc(Rect::new(right - d, bottom - d, d, d), 0.0, 90.0);
    pb.add_arc(Rect::new(x, bottom - d, d, d), 90.0, 90.0);
    pb.close();
    pb.finish()
}

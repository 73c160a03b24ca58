//! Coordinate and geometry types shared by paths, widgets, and backends.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles elsewhere in the crate are degrees, clockwise from +X in this space.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;

//! Paint model shared between widgets and backends.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - fill brushes and stroke pens
//!
//! Geometry types remain in `coords`; paths in `path`.

mod brush;
mod color;
mod pen;

pub use brush::Brush;
pub use color::Color;
pub use pen::Pen;

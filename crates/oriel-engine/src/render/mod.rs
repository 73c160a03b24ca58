//! Backend-facing drawing surface.
//!
//! This is intentionally small and stable: widgets paint through
//! [`Canvas`], backends implement it.

mod canvas;

pub use canvas::Canvas;

//! Oriel engine crate.
//!
//! Drawing primitives for the widget layer: coordinate types, the paint
//! model, arc-based paths, the [`Canvas`](render::Canvas) backend boundary,
//! and a recording [`DrawList`](scene::DrawList) backend.
//!
//! This crate knows nothing about widgets or redraw scheduling — that lives
//! in `oriel-ui`. Windowing and GPU rasterization belong to the host.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod path;
pub mod render;
pub mod scene;

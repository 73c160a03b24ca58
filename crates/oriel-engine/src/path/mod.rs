//! Path model: arcs joined into closed outlines.
//!
//! Responsibilities:
//! - arc segments described by bounding rect + start/sweep angles
//! - a builder that strings arcs together, inserting the implied straight
//!   edges, and closes the figure
//! - the rounded-rectangle outline used by panel widgets
//!
//! Paths are ephemeral values: built, handed to a [`Canvas`], and dropped
//! within a single redraw. Nothing here caches or validates.
//!
//! [`Canvas`]: crate::render::Canvas

mod arc;
mod builder;
mod path;
mod rounded_rect;

pub use arc::Arc;
pub use builder::PathBuilder;
pub use path::{Path, Segment};
pub use rounded_rect::rounded_rect_path;

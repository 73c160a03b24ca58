//! Oriel UI — widget layer over `oriel-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use oriel_ui::prelude::*;
//!
//! let mut panel = RoundedPanel::new();
//! panel.set_fill(Color::white());
//! panel.set_border_color(Color::black());
//! panel.set_border_width(2.0);
//!
//! let redraw = panel.redraw_flag();
//!
//! // In your host's redraw pass:
//! let mut frame = DrawList::new();
//! if redraw.take() {
//!     panel.render(&mut frame, Rect::new(0.0, 0.0, 100.0, 50.0));
//! }
//! // Hand frame.items() to your renderer.
//! ```
//!
//! Widgets here are paint-only. The host owns layout, input, and the redraw
//! schedule; a widget exposes [`Widget::render`] plus a [`RedrawFlag`] the
//! host polls.
//!
//! [`Widget::render`]: widget::Widget::render
//! [`RedrawFlag`]: redraw::RedrawFlag

pub mod redraw;
pub mod widget;
pub mod widgets;

/// Everything needed to use and extend the widget layer.
pub mod prelude {
    pub use crate::redraw::RedrawFlag;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::RoundedPanel;

    // Re-export the engine primitives widget code needs.
    pub use oriel_engine::coords::{Rect, Vec2};
    pub use oriel_engine::paint::{Brush, Color, Pen};
    pub use oriel_engine::path::{Path, PathBuilder, rounded_rect_path};
    pub use oriel_engine::render::Canvas;
    pub use oriel_engine::scene::{DrawCmd, DrawList};
}

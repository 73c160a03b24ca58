use anyhow::{Context, Result};

use oriel_engine::logging::{LoggingConfig, init_logging};
use oriel_ui::prelude::*;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Optional WIDTHxHEIGHT argument, e.g. `oriel-studio 320x180`.
    let bounds = match std::env::args().nth(1) {
        Some(arg) => parse_size(&arg).with_context(|| format!("invalid size argument {arg:?}"))?,
        None => Rect::new(0.0, 0.0, 100.0, 50.0),
    };

    let mut panel = RoundedPanel::new();
    panel.set_fill(Color::white());
    panel.set_border_color(Color::black());
    panel.set_border_width(2.0);
    let redraw = panel.redraw_flag();

    println!();
    println!("  oriel-studio — rounded panel demo");
    println!("  bounds {}x{}, radius {}", bounds.size.x, bounds.size.y, panel.radius());
    println!();

    // One host redraw pass: drain the flag, record the frame.
    let mut frame = DrawList::new();
    if redraw.take() {
        panel.render(&mut frame, bounds);
    }

    for (i, cmd) in frame.items().iter().enumerate() {
        println!("  [{i}] {}", describe(cmd));
    }
    println!();
    log::info!("frame recorded: {} commands", frame.len());

    Ok(())
}

fn parse_size(arg: &str) -> Result<Rect> {
    let (w, h) = arg.split_once('x').context("expected WIDTHxHEIGHT")?;
    let w: f32 = w.trim().parse().context("width is not a number")?;
    let h: f32 = h.trim().parse().context("height is not a number")?;
    Ok(Rect::new(0.0, 0.0, w, h))
}

fn describe(cmd: &DrawCmd) -> String {
    match cmd {
        DrawCmd::AntiAlias(on) => format!("anti-alias {}", if *on { "on" } else { "off" }),
        DrawCmd::Fill(f) => {
            let (r, g, b, a) = match &f.brush {
                Brush::Solid(c) => c.to_straight(),
            };
            format!(
                "fill    {} arcs, closed={}, rgba({r:.2}, {g:.2}, {b:.2}, {a:.2})",
                f.path.arcs().len(),
                f.path.is_closed(),
            )
        }
        DrawCmd::Stroke(s) => {
            let (r, g, b, a) = s.pen.color.to_straight();
            format!(
                "stroke  {} arcs, width {}, rgba({r:.2}, {g:.2}, {b:.2}, {a:.2})",
                s.path.arcs().len(),
                s.pen.width,
            )
        }
    }
}

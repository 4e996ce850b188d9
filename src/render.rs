use crate::constants::FONT_FAMILY;
use anyhow::anyhow;
use sketch_core::{DrawCommand, Frame};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Replays scene draw commands onto a 2D canvas context.
pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
    logical_w: f64,
    logical_h: f64,
}

impl CanvasRenderer {
    pub fn new(
        canvas: &web::HtmlCanvasElement,
        logical_w: f64,
        logical_h: f64,
    ) -> anyhow::Result<Self> {
        let ctx: web::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            ctx,
            logical_w,
            logical_h,
        })
    }

    /// Scale so drawing happens in logical units whatever the backing size.
    fn reset_transform(&self) {
        let Some(canvas) = self.ctx.canvas() else {
            return;
        };
        let sx = canvas.width() as f64 / self.logical_w;
        let sy = canvas.height() as f64 / self.logical_h;
        _ = self.ctx.set_transform(sx, 0.0, 0.0, sy, 0.0, 0.0);
    }

    pub fn render(&self, frame: &Frame) {
        if frame.skipped {
            return;
        }
        self.reset_transform();
        let ctx = &self.ctx;
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        for cmd in &frame.commands {
            match cmd {
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    weight,
                } => {
                    ctx.set_stroke_style_str(&color.css());
                    ctx.set_line_width(*weight as f64);
                    ctx.begin_path();
                    ctx.move_to(from.x as f64, from.y as f64);
                    ctx.line_to(to.x as f64, to.y as f64);
                    ctx.stroke();
                }
                DrawCommand::Polyline {
                    points,
                    color,
                    weight,
                } => {
                    let Some((first, rest)) = points.split_first() else {
                        continue;
                    };
                    ctx.set_stroke_style_str(&color.css());
                    ctx.set_line_width(*weight as f64);
                    ctx.begin_path();
                    ctx.move_to(first.x as f64, first.y as f64);
                    for p in rest {
                        ctx.line_to(p.x as f64, p.y as f64);
                    }
                    ctx.stroke();
                }
                DrawCommand::Circle {
                    center,
                    diameter,
                    color,
                } => {
                    if *diameter <= 0.0 {
                        continue;
                    }
                    ctx.set_fill_style_str(&color.css());
                    ctx.begin_path();
                    _ = ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        *diameter as f64 / 2.0,
                        0.0,
                        std::f64::consts::TAU,
                    );
                    ctx.fill();
                }
                DrawCommand::Text {
                    glyph,
                    position,
                    size,
                    color,
                } => {
                    ctx.set_fill_style_str(&color.css());
                    ctx.set_font(&format!("{}px {}", size, FONT_FAMILY));
                    // colour emoji ignore fillStyle alpha
                    ctx.set_global_alpha(color.a as f64 / 255.0);
                    _ = ctx.fill_text(glyph, position.x as f64, position.y as f64);
                    ctx.set_global_alpha(1.0);
                }
            }
        }
    }
}

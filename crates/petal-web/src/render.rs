use crate::constants::GLYPH_FONT_FAMILY;
use glam::DVec2;
use petal_core::{Color, Surface};
use web_sys as web;

/// Canvas2D implementation of the field's drawing contract.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn draw_glyph(&mut self, glyph: &str, pos: DVec2, size: f64, color: Color, alpha: f64) {
        if alpha < 1.0 {
            self.ctx.set_global_alpha(alpha);
        }
        self.ctx
            .set_font(&format!("{}px {}", size, GLYPH_FONT_FAMILY));
        self.ctx.set_fill_style_str(&color.css());
        let _ = self.ctx.fill_text(glyph, pos.x, pos.y);
        if alpha < 1.0 {
            self.ctx.set_global_alpha(1.0);
        }
    }
}

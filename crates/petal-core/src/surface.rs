//! Drawing abstraction consumed by the particle field.
//!
//! The field only needs "clear everything" and "draw one glyph"; it never
//! reads pixels back. Keeping this a trait lets host-side tests tick the
//! field without a real canvas, and keeps platform types out of this crate.

use crate::field::Color;
use glam::DVec2;

pub trait Surface {
    /// Clear the full drawing extent.
    fn clear(&mut self, width: f64, height: f64);

    /// Draw `glyph` at `pos` in the given size and fill color, with an extra
    /// alpha multiplier in [0, 1] applied on top of the color's own alpha.
    fn draw_glyph(&mut self, glyph: &str, pos: DVec2, size: f64, color: Color, alpha: f64);
}

/// Surface that draws nothing. Used to tick the field headlessly.
#[derive(Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _width: f64, _height: f64) {}
    fn draw_glyph(&mut self, _glyph: &str, _pos: DVec2, _size: f64, _color: Color, _alpha: f64) {}
}

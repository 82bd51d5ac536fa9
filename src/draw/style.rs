//! Stroke style applied to newly drawn primitives.

use super::color::Color;

/// Color and line width applied to all subsequently drawn primitives.
///
/// Changing the style never repaints existing raster content; it only affects
/// gestures committed after the change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Line width in surface units (at least 1)
    pub line_width: u32,
}

impl StrokeStyle {
    /// Creates a stroke style, forcing the line width to at least 1.
    pub fn new(color: Color, line_width: u32) -> Self {
        Self {
            color,
            line_width: line_width.max(1),
        }
    }

    /// Applies color, width, and rounded caps/joins to a Cairo context.
    pub(crate) fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.color.r, self.color.g, self.color.b, self.color.a);
        ctx.set_line_width(self.line_width as f64);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);
    }
}

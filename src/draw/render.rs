//! Cairo-based rendering for the annotation primitives.
//!
//! Primitives are baked straight into the raster surface at commit time; no
//! retained vector data survives a commit. All functions absorb Cairo errors
//! silently: a failed stroke leaves the surface unchanged, which the user can
//! recover from by redrawing.

use super::color::Color;
use super::font::FontDescriptor;
use super::style::StrokeStyle;
use crate::util::{self, Point};

/// Renders one incremental pen segment from `from` to `to`.
///
/// Called once per pointer-move event while a pen gesture is active, so this
/// must stay O(1): it strokes only the newest segment, never the whole path.
/// Round caps make consecutive segments read as one continuous stroke.
pub fn segment(ctx: &cairo::Context, from: Point, to: Point, style: &StrokeStyle) {
    style.apply(ctx);
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    let _ = ctx.stroke();
}

/// Renders an unfilled axis-aligned rectangle between two corner points.
///
/// The corners may arrive in any drag direction; the rectangle is normalized
/// to positive width/height before stroking. A zero-size rectangle (commit at
/// the anchor) produces no visible mark.
pub fn rectangle(ctx: &cairo::Context, anchor: Point, end: Point, style: &StrokeStyle) {
    style.apply(ctx);
    ctx.set_line_join(cairo::LineJoin::Miter);

    let x = anchor.x.min(end.x);
    let y = anchor.y.min(end.y);
    let w = (end.x - anchor.x).abs();
    let h = (end.y - anchor.y).abs();

    ctx.rectangle(x, y, w, h);
    let _ = ctx.stroke();
}

/// Renders an unfilled circle centered on the gesture anchor.
///
/// A non-positive radius (commit at the anchor) is silently skipped.
pub fn circle(ctx: &cairo::Context, center: Point, radius: f64, style: &StrokeStyle) {
    if radius <= 0.0 {
        return;
    }

    style.apply(ctx);
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * std::f64::consts::PI);
    let _ = ctx.stroke();
}

/// Renders an arrow: a shaft from `tail` to `tip` plus two head wings.
///
/// The wings are placed by [`util::arrowhead_points`]; each one is exactly
/// `head_length` units long and offset `head_angle_degrees` from the reverse
/// shaft direction.
pub fn arrow(
    ctx: &cairo::Context,
    tail: Point,
    tip: Point,
    style: &StrokeStyle,
    head_length: f64,
    head_angle_degrees: f64,
) {
    style.apply(ctx);

    // Shaft
    ctx.move_to(tail.x, tail.y);
    ctx.line_to(tip.x, tip.y);
    let _ = ctx.stroke();

    let [left, right] = util::arrowhead_points(tail, tip, head_length, head_angle_degrees);

    // Head wings, drawn back from the tip
    ctx.move_to(tip.x, tip.y);
    ctx.line_to(left.x, left.y);
    let _ = ctx.stroke();

    ctx.move_to(tip.x, tip.y);
    ctx.line_to(right.x, right.y);
    let _ = ctx.stroke();
}

/// Renders text with its baseline starting at `anchor` using Pango.
///
/// Pango handles newline characters, so multi-line labels lay out with
/// correct line spacing. The anchor Y coordinate is treated as the first
/// line's baseline, matching how the rest of the primitives interpret
/// surface coordinates.
pub fn text(
    ctx: &cairo::Context,
    anchor: Point,
    content: &str,
    color: Color,
    font: &FontDescriptor,
    size: f64,
) {
    // Save context state to keep font/antialias settings from leaking
    ctx.save().ok();

    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font.to_pango_string(size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(content);

    // Pango measures from the top-left corner; shift so the anchor lands on
    // the first line's baseline.
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    ctx.move_to(anchor.x, anchor.y - baseline);

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}

//! The annotation canvas engine.

use super::gesture::Gesture;
use super::history::SnapshotHistory;
use super::surface::Surface;
use super::tool::Tool;
use crate::config::Config;
use crate::draw::{render, Color, FontDescriptor, StrokeStyle};
use crate::error::CanvasError;
use crate::util::Point;

/// The annotation canvas engine embedded in the diagnosis form.
///
/// Owns one raster surface for the lifetime of a form session, interprets
/// pointer gestures according to the active tool, and keeps a linear
/// undo/redo history of full-surface snapshots. All state is instance-owned;
/// dropping the engine discards the surface and its history (persistence is
/// the hosting form's job, via [`AnnotationCanvas::export_png`]).
///
/// None of the gesture operations return errors: invalid call sequences and
/// degenerate geometry are silently absorbed, and internal raster failures
/// are logged and dropped. A missed stroke is trivially recoverable by the
/// clinician through undo and redraw.
pub struct AnnotationCanvas {
    surface: Surface,
    history: SnapshotHistory,
    tool: Tool,
    style: StrokeStyle,
    gesture: Gesture,
    arrow_head_length: f64,
    arrow_head_angle_degrees: f64,
    font: FontDescriptor,
    font_size: f64,
}

impl AnnotationCanvas {
    /// Creates an engine with a blank surface sized from configuration.
    ///
    /// # Errors
    /// Fails only if the raster surface cannot be allocated or its pixels
    /// cannot be captured for the baseline history entry.
    pub fn new(config: &Config) -> Result<Self, CanvasError> {
        let mut surface = Surface::new(
            config.surface.width,
            config.surface.height,
            config.surface.pixel_scale,
        )?;

        // The history floor restores to this pristine blank capture
        let baseline = surface.snapshot()?;
        let history = SnapshotHistory::new(baseline, config.history.max_depth);

        let color = config.style.color();
        let style = StrokeStyle::new(color, config.style.default_line_width);

        log::debug!(
            "annotation canvas created: {}x{} at {}x density",
            config.surface.width,
            config.surface.height,
            config.surface.pixel_scale
        );

        Ok(Self {
            surface,
            history,
            tool: Tool::Pen,
            style,
            gesture: Gesture::Idle,
            arrow_head_length: config.arrow.head_length,
            arrow_head_angle_degrees: config.arrow.head_angle_degrees,
            font: config.text.font_descriptor(),
            font_size: config.text.font_size,
        })
    }

    /// Sets the active tool. Never touches existing raster content.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Returns the active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Updates the stroke style for subsequent primitives.
    ///
    /// Content already committed keeps the style it was drawn with.
    pub fn set_style(&mut self, color: Color, line_width: u32) {
        self.style = StrokeStyle::new(color, line_width);
    }

    /// Returns the current stroke style.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Starts a gesture at a surface-local coordinate.
    ///
    /// For the pen the point opens a new path; for the shape tools it is
    /// recorded as the anchor with no visible mark yet. Ignored while another
    /// gesture is in flight or while the text tool is active (text commits
    /// directly via [`AnnotationCanvas::commit_text`]).
    pub fn begin_stroke(&mut self, point: Point) {
        if !self.gesture.is_idle() {
            log::trace!("begin_stroke ignored: gesture already active");
            return;
        }
        if self.tool == Tool::Text {
            log::trace!("begin_stroke ignored: text tool commits via commit_text");
            return;
        }

        self.gesture = Gesture::Active {
            tool: self.tool,
            anchor: point,
            last: point,
        };
    }

    /// Extends the active gesture to a new pointer position.
    ///
    /// Only the pen renders progressively: each call strokes the one new
    /// segment, keeping per-event cost O(1) even on long strokes. Shape tools
    /// draw nothing until commit; their final extent is unknown mid-drag.
    pub fn continue_stroke(&mut self, point: Point) {
        let Gesture::Active { tool, last, .. } = &mut self.gesture else {
            return;
        };
        if *tool != Tool::Pen {
            return;
        }

        let from = *last;
        *last = point;

        match self.surface.context() {
            Ok(ctx) => render::segment(&ctx, from, point, &self.style),
            Err(err) => log::warn!("pen segment dropped: {err}"),
        }
    }

    /// Finalizes the active gesture, baking its primitive into the raster.
    ///
    /// With no endpoint (pointer released off-surface), the anchor stands in,
    /// degenerating to a zero-size shape that the renderer absorbs. A commit
    /// without a prior begin is a no-op that leaves the history untouched.
    /// Every commit of an active gesture pushes exactly one history snapshot.
    pub fn commit_stroke(&mut self, point: Option<Point>) {
        let Gesture::Active { tool, anchor, .. } = self.gesture else {
            log::trace!("commit_stroke ignored: no active gesture");
            return;
        };
        self.gesture = Gesture::Idle;

        let end = point.unwrap_or(anchor);

        let ctx = match self.surface.context() {
            Ok(ctx) => ctx,
            Err(err) => {
                log::warn!("commit dropped, surface context unavailable: {err}");
                return;
            }
        };

        match tool {
            // Pen segments were rendered incrementally; just close out
            Tool::Pen => {}
            Tool::Rectangle => render::rectangle(&ctx, anchor, end, &self.style),
            Tool::Circle => render::circle(&ctx, anchor, anchor.distance_to(end), &self.style),
            Tool::Arrow => render::arrow(
                &ctx,
                anchor,
                end,
                &self.style,
                self.arrow_head_length,
                self.arrow_head_angle_degrees,
            ),
            // Unreachable: begin_stroke refuses to start a text gesture
            Tool::Text => {}
        }
        drop(ctx);

        self.push_snapshot();
    }

    /// Renders a text label and pushes a history snapshot.
    ///
    /// With no anchor the label lands at the quarter-canvas default position.
    /// Whitespace-only text is a no-op. Any in-flight gesture is ended, since
    /// text commits exit the gesture state machine the same way a stroke
    /// commit does.
    pub fn commit_text(&mut self, text: &str, anchor: Option<Point>) {
        self.gesture = Gesture::Idle;

        if text.trim().is_empty() {
            log::trace!("commit_text ignored: empty text");
            return;
        }

        let anchor = anchor.unwrap_or_else(|| {
            Point::new(
                self.surface.width() as f64 / 4.0,
                self.surface.height() as f64 / 4.0,
            )
        });

        match self.surface.context() {
            Ok(ctx) => {
                render::text(
                    &ctx,
                    anchor,
                    text,
                    self.style.color,
                    &self.font,
                    self.font_size,
                );
            }
            Err(err) => {
                log::warn!("text commit dropped, surface context unavailable: {err}");
                return;
            }
        }

        self.push_snapshot();
    }

    /// Steps the history cursor back and repaints. No-op at the floor.
    pub fn undo(&mut self) {
        match self.history.step_back() {
            Some(snapshot) => {
                if let Err(err) = self.surface.restore(snapshot) {
                    log::warn!("undo repaint failed: {err}");
                }
            }
            None => log::trace!("undo ignored: already at oldest state"),
        }
    }

    /// Steps the history cursor forward and repaints. No-op at the tail.
    pub fn redo(&mut self) {
        match self.history.step_forward() {
            Some(snapshot) => {
                if let Err(err) = self.surface.restore(snapshot) {
                    log::warn!("redo repaint failed: {err}");
                }
            }
            None => log::trace!("redo ignored: already at newest state"),
        }
    }

    /// Wipes the surface and pushes the blank state as a new snapshot.
    ///
    /// Prior history is kept, so clearing is itself undoable.
    pub fn clear(&mut self) {
        if let Err(err) = self.surface.wipe() {
            log::warn!("clear dropped: {err}");
            return;
        }
        self.gesture = Gesture::Idle;
        self.push_snapshot();
    }

    /// Exports the current surface contents as PNG bytes.
    ///
    /// Pure read with no side effects on history or gesture state; callable
    /// at any time, including on a blank surface.
    ///
    /// # Errors
    /// Fails only if PNG encoding itself fails.
    pub fn export_png(&self) -> Result<Vec<u8>, CanvasError> {
        self.surface.to_png()
    }

    /// Number of snapshots currently retained.
    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    /// True if an undo would change the displayed state.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True if a redo would change the displayed state.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn push_snapshot(&mut self) {
        match self.surface.snapshot() {
            Ok(snapshot) => self.history.push(snapshot),
            Err(err) => log::warn!("history snapshot skipped: {err}"),
        }
    }

    /// Captures the current pixels; test hook for pixel-identity checks.
    #[cfg(test)]
    fn raster(&mut self) -> super::surface::RasterSnapshot {
        self.surface.snapshot().expect("raster capture")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_canvas() -> AnnotationCanvas {
        let mut config = Config::default();
        config.surface.width = 64;
        config.surface.height = 64;
        AnnotationCanvas::new(&config).expect("canvas")
    }

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn pen_stroke_commits_one_snapshot_and_undoes_to_blank() {
        let mut canvas = test_canvas();
        canvas.set_tool(Tool::Pen);

        canvas.begin_stroke(p(5.0, 5.0));
        canvas.continue_stroke(p(20.0, 5.0));
        canvas.commit_stroke(None);

        assert_eq!(canvas.history_depth(), 1);
        assert!(!canvas.raster().is_blank());

        canvas.undo();
        assert!(canvas.raster().is_blank());
        assert!(!canvas.can_undo());
        assert!(canvas.can_redo());
    }

    #[test]
    fn undo_redo_round_trip_is_pixel_identical() {
        let mut canvas = test_canvas();

        canvas.set_tool(Tool::Rectangle);
        canvas.begin_stroke(p(10.0, 10.0));
        canvas.commit_stroke(Some(p(40.0, 30.0)));

        canvas.set_tool(Tool::Circle);
        canvas.begin_stroke(p(32.0, 32.0));
        canvas.commit_stroke(Some(p(44.0, 32.0)));

        canvas.set_tool(Tool::Arrow);
        canvas.begin_stroke(p(8.0, 50.0));
        canvas.commit_stroke(Some(p(56.0, 50.0)));

        let before = canvas.raster();

        canvas.undo();
        canvas.undo();
        canvas.redo();
        canvas.redo();

        assert_eq!(canvas.raster(), before);
    }

    #[test]
    fn fresh_commit_after_undo_truncates_redo() {
        let mut canvas = test_canvas();
        canvas.set_tool(Tool::Rectangle);

        canvas.begin_stroke(p(5.0, 5.0));
        canvas.commit_stroke(Some(p(20.0, 20.0)));
        canvas.begin_stroke(p(25.0, 25.0));
        canvas.commit_stroke(Some(p(40.0, 40.0)));

        canvas.undo();
        assert!(canvas.can_redo());

        canvas.begin_stroke(p(45.0, 45.0));
        canvas.commit_stroke(Some(p(60.0, 60.0)));

        assert!(!canvas.can_redo());
        let current = canvas.raster();
        canvas.redo();
        assert_eq!(canvas.raster(), current);
    }

    #[test]
    fn empty_undo_and_redo_are_idempotent() {
        let mut canvas = test_canvas();

        let blank = canvas.raster();
        canvas.undo();
        canvas.undo();
        canvas.redo();
        assert_eq!(canvas.raster(), blank);
        assert_eq!(canvas.history_depth(), 0);
    }

    #[test]
    fn commit_without_begin_is_a_no_op() {
        let mut canvas = test_canvas();

        canvas.commit_stroke(Some(p(30.0, 30.0)));

        assert_eq!(canvas.history_depth(), 0);
        assert!(canvas.raster().is_blank());
    }

    #[test]
    fn commit_without_endpoint_falls_back_to_anchor() {
        let mut canvas = test_canvas();
        canvas.set_tool(Tool::Rectangle);

        // Pointer left the surface before release: zero-size shape, but the
        // commit still completes and still pushes a snapshot.
        canvas.begin_stroke(p(12.0, 12.0));
        canvas.commit_stroke(None);

        assert_eq!(canvas.history_depth(), 1);
    }

    #[test]
    fn later_strokes_do_not_disturb_earlier_pixels() {
        let mut canvas = test_canvas();

        canvas.set_tool(Tool::Rectangle);
        canvas.begin_stroke(p(10.0, 10.0));
        canvas.commit_stroke(Some(p(30.0, 30.0)));

        let after_rect = canvas.raster();

        canvas.set_tool(Tool::Pen);
        canvas.begin_stroke(p(45.0, 45.0));
        canvas.continue_stroke(p(60.0, 60.0));
        canvas.commit_stroke(None);

        let after_pen = canvas.raster();

        // The rectangle occupies rows well above the pen stroke; its device
        // rows (2x density) must be byte-identical before and after.
        let stride = after_rect.stride() as usize;
        let rect_rows = stride * 70;
        assert_eq!(
            &after_rect.pixel_data()[..rect_rows],
            &after_pen.pixel_data()[..rect_rows]
        );
    }

    #[test]
    fn clear_is_undoable_and_redoable() {
        let mut canvas = test_canvas();
        canvas.set_tool(Tool::Circle);

        canvas.begin_stroke(p(32.0, 32.0));
        canvas.commit_stroke(Some(p(32.0, 48.0)));
        let drawn = canvas.raster();
        assert!(!drawn.is_blank());

        canvas.clear();
        assert!(canvas.raster().is_blank());
        assert_eq!(canvas.history_depth(), 2);

        canvas.undo();
        assert_eq!(canvas.raster(), drawn);

        canvas.redo();
        assert!(canvas.raster().is_blank());
    }

    #[test]
    fn text_commit_pushes_a_snapshot_and_empty_text_does_not() {
        let mut canvas = test_canvas();

        canvas.commit_text("   ", None);
        assert_eq!(canvas.history_depth(), 0);

        canvas.commit_text("OD 20/40", None);
        assert_eq!(canvas.history_depth(), 1);
        assert!(!canvas.raster().is_blank());
    }

    #[test]
    fn begin_while_active_is_ignored() {
        let mut canvas = test_canvas();
        canvas.set_tool(Tool::Rectangle);

        canvas.begin_stroke(p(10.0, 10.0));
        // A second begin must not move the anchor
        canvas.begin_stroke(p(50.0, 50.0));
        canvas.commit_stroke(Some(p(20.0, 20.0)));

        assert_eq!(canvas.history_depth(), 1);
        assert!(!canvas.raster().is_blank());
    }

    #[test]
    fn style_changes_do_not_repaint_existing_content() {
        let mut canvas = test_canvas();
        canvas.set_tool(Tool::Rectangle);

        canvas.begin_stroke(p(10.0, 10.0));
        canvas.commit_stroke(Some(p(30.0, 30.0)));
        let before = canvas.raster();

        canvas.set_style(Color::from_hex("#0000ff").unwrap(), 8);
        assert_eq!(canvas.raster(), before);
    }

    #[test]
    fn export_png_is_a_pure_read() {
        let mut canvas = test_canvas();
        canvas.set_tool(Tool::Pen);
        canvas.begin_stroke(p(5.0, 5.0));
        canvas.continue_stroke(p(25.0, 25.0));
        canvas.commit_stroke(None);

        let before = canvas.raster();
        let png = canvas.export_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(canvas.raster(), before);
        assert_eq!(canvas.history_depth(), 1);
    }

    #[test]
    fn text_tool_ignores_drag_gestures() {
        let mut canvas = test_canvas();
        canvas.set_tool(Tool::Text);

        canvas.begin_stroke(p(10.0, 10.0));
        canvas.continue_stroke(p(20.0, 20.0));
        canvas.commit_stroke(Some(p(30.0, 30.0)));

        assert_eq!(canvas.history_depth(), 0);
        assert!(canvas.raster().is_blank());
    }
}

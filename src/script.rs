//! Recorded annotation sessions for headless replay.
//!
//! The hosting form records the exact operation stream it feeds the engine
//! during a session. Replaying that stream against a fresh canvas reproduces
//! the raster deterministically, which is what the `eyemark` binary does for
//! server-side re-rendering and QA.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::canvas::{AnnotationCanvas, Tool};
use crate::draw::Color;
use crate::util::Point;

/// Script file format version this build reads and writes.
pub const CURRENT_VERSION: u32 = 1;

/// One recorded engine operation.
///
/// Mirrors the engine's public surface one-to-one so a recorded session can
/// be replayed without interpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptOp {
    SetTool {
        tool: Tool,
    },
    SetStyle {
        /// RGB hex string, e.g. "#e63946"
        color: String,
        line_width: u32,
    },
    BeginStroke {
        at: Point,
    },
    ContinueStroke {
        at: Point,
    },
    CommitStroke {
        #[serde(default)]
        at: Option<Point>,
    },
    CommitText {
        text: String,
        #[serde(default)]
        at: Option<Point>,
    },
    Undo,
    Redo,
    Clear,
}

/// A versioned list of recorded operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnnotationScript {
    /// File format version (currently 1)
    pub version: u32,
    /// Operations in the order the form issued them
    pub ops: Vec<ScriptOp>,
}

impl AnnotationScript {
    /// Parses a script from JSON text.
    ///
    /// # Errors
    /// Returns an error for malformed JSON or an unsupported version field.
    pub fn from_json(json: &str) -> Result<Self> {
        let script: AnnotationScript =
            serde_json::from_str(json).context("Failed to parse annotation script JSON")?;

        if script.version > CURRENT_VERSION {
            anyhow::bail!(
                "Unsupported script version {} (this build reads up to {})",
                script.version,
                CURRENT_VERSION
            );
        }

        Ok(script)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Replays every operation against the given canvas, in order.
    ///
    /// Individual malformed operations (e.g., a bad color hex) are logged and
    /// skipped rather than aborting the replay; the engine's own no-op
    /// degradations cover the rest.
    pub fn apply(&self, canvas: &mut AnnotationCanvas) {
        for op in &self.ops {
            match op {
                ScriptOp::SetTool { tool } => canvas.set_tool(*tool),
                ScriptOp::SetStyle { color, line_width } => match Color::from_hex(color) {
                    Ok(color) => canvas.set_style(color, *line_width),
                    Err(err) => log::warn!("skipping set_style: {err}"),
                },
                ScriptOp::BeginStroke { at } => canvas.begin_stroke(*at),
                ScriptOp::ContinueStroke { at } => canvas.continue_stroke(*at),
                ScriptOp::CommitStroke { at } => canvas.commit_stroke(*at),
                ScriptOp::CommitText { text, at } => canvas.commit_text(text, *at),
                ScriptOp::Undo => canvas.undo(),
                ScriptOp::Redo => canvas.redo(),
                ScriptOp::Clear => canvas.clear(),
            }
        }

        log::info!(
            "replayed {} ops, history depth {}",
            self.ops.len(),
            canvas.history_depth()
        );
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
        AnnotationCanvas::new(&config).unwrap()
    }

    const SAMPLE: &str = r##"{
        "version": 1,
        "ops": [
            { "op": "set_tool", "tool": "rectangle" },
            { "op": "set_style", "color": "#2a9d8f", "line_width": 2 },
            { "op": "begin_stroke", "at": { "x": 10.0, "y": 10.0 } },
            { "op": "commit_stroke", "at": { "x": 40.0, "y": 30.0 } },
            { "op": "set_tool", "tool": "pen" },
            { "op": "begin_stroke", "at": { "x": 5.0, "y": 50.0 } },
            { "op": "continue_stroke", "at": { "x": 25.0, "y": 55.0 } },
            { "op": "commit_stroke" },
            { "op": "undo" }
        ]
    }"##;

    #[test]
    fn parses_and_replays_a_recorded_session() {
        let script = AnnotationScript::from_json(SAMPLE).unwrap();
        assert_eq!(script.version, 1);
        assert_eq!(script.ops.len(), 9);

        let mut canvas = test_canvas();
        script.apply(&mut canvas);

        // Two commits, then one undo
        assert_eq!(canvas.history_depth(), 2);
        assert!(canvas.can_redo());
    }

    #[test]
    fn rejects_future_versions() {
        let json = r#"{ "version": 99, "ops": [] }"#;
        let err = AnnotationScript::from_json(json).unwrap_err();
        assert!(err.to_string().contains("Unsupported script version"));
    }

    #[test]
    fn bad_style_color_is_skipped_not_fatal() {
        let json = r#"{
            "version": 1,
            "ops": [
                { "op": "set_style", "color": "nope", "line_width": 4 },
                { "op": "set_tool", "tool": "circle" },
                { "op": "begin_stroke", "at": { "x": 32.0, "y": 32.0 } },
                { "op": "commit_stroke", "at": { "x": 32.0, "y": 44.0 } }
            ]
        }"#;

        let script = AnnotationScript::from_json(json).unwrap();
        let mut canvas = test_canvas();
        script.apply(&mut canvas);
        assert_eq!(canvas.history_depth(), 1);
    }

    #[test]
    fn script_round_trips_through_json() {
        let script = AnnotationScript::from_json(SAMPLE).unwrap();
        let json = serde_json::to_string(&script).unwrap();
        let reparsed = AnnotationScript::from_json(&json).unwrap();
        assert_eq!(reparsed.ops.len(), script.ops.len());
    }
}

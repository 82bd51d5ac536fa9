//! Drawing tool selection.

use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool determines how a begin/continue/commit gesture cycle is
/// interpreted. Exactly one tool is active at a time; switching tools has no
/// effect on raster content already committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand drawing - renders incrementally as the pointer moves
    Pen,
    /// Rectangle outline - from the anchor corner to the release point
    Rectangle,
    /// Circle outline - centered on the anchor, radius from drag distance
    Circle,
    /// Arrow with directional head at the release point
    Arrow,
    /// Text label - committed directly via `commit_text`, not by dragging
    Text,
}

//! Gesture lifecycle state machine.

use super::tool::Tool;
use crate::util::Point;

/// Current gesture state, orthogonal to the selected tool.
///
/// A gesture is one begin → (continue)* → commit cycle producing at most one
/// primitive. The tool is captured when the gesture begins, so switching
/// tools mid-drag cannot reinterpret an in-flight gesture. There is no
/// separate cancel transition: releasing without a coordinate commits against
/// the anchor, which degenerates to a zero-size shape.
#[derive(Debug, Clone, Copy)]
pub enum Gesture {
    /// Not drawing - waiting for a begin call
    Idle,
    /// A gesture is in flight (pointer held down)
    Active {
        /// Tool captured at begin time
        tool: Tool,
        /// Where the gesture started; shape tools use this as their anchor
        anchor: Point,
        /// Most recent point, advanced by the pen tool per segment
        last: Point,
    },
}

impl Gesture {
    /// Returns true when no gesture is in flight.
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }
}

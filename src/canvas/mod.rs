//! The annotation canvas engine and its supporting state.
//!
//! - [`AnnotationCanvas`]: the engine owning surface, tool, style, history
//! - [`Tool`]: which gesture interpretation is active
//! - [`Gesture`]: the begin → continue* → commit lifecycle state machine
//! - [`SnapshotHistory`]: linear truncating undo/redo stack
//! - [`Surface`] / [`RasterSnapshot`]: the raster buffer and its captures

pub mod engine;
pub mod gesture;
pub mod history;
pub mod surface;
pub mod tool;

pub use engine::AnnotationCanvas;
pub use gesture::Gesture;
pub use history::SnapshotHistory;
pub use surface::{RasterSnapshot, Surface};
pub use tool::Tool;

//! Annotation canvas engine for eye-diagram markup.
//!
//! The diagnosis form in the vision-screening front end embeds a small
//! freehand drawing panel where clinicians annotate an eye diagram. This
//! crate owns that panel's drawing state: a raster surface, the active tool
//! and stroke style, and a linear undo/redo history of full-surface
//! snapshots. The hosting form feeds it surface-local pointer coordinates
//! and reads the finished drawing back as PNG bytes.
//!
//! The engine performs no I/O of its own and has no event-loop coupling;
//! gestures are plain method calls on [`canvas::AnnotationCanvas`].

pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod script;
pub mod util;

pub use canvas::AnnotationCanvas;
pub use config::Config;
pub use error::CanvasError;

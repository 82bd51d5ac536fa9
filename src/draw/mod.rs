//! Rendering primitives for the annotation surface (Cairo-based).
//!
//! This module defines the drawing-side types used by the canvas engine:
//! - [`Color`]: RGBA color with hex string parsing
//! - [`StrokeStyle`]: color + line width applied to new primitives
//! - [`FontDescriptor`]: font configuration for the text tool
//! - Rendering functions that bake primitives into a Cairo context

pub mod color;
pub mod font;
pub mod render;
pub mod style;

pub use color::Color;
pub use font::FontDescriptor;
pub use style::StrokeStyle;

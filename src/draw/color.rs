//! RGBA color type with RGB hex parsing.

use crate::error::CanvasError;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum). Stroke
/// styles arrive from the hosting form as RGB hex strings (`#rrggbb`), so the
/// alpha channel is fully opaque unless set explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components in the 0.0 to 1.0 range.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parses an RGB hex string such as `#2a9d8f` (leading `#` optional).
    ///
    /// # Errors
    /// Returns [`CanvasError::InvalidColor`] if the string is not exactly six
    /// hex digits after the optional `#`.
    pub fn from_hex(hex: &str) -> Result<Self, CanvasError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CanvasError::InvalidColor(hex.to_string()));
        }

        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|byte| byte as f64 / 255.0)
                .map_err(|_| CanvasError::InvalidColor(hex.to_string()))
        };

        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
            a: 1.0,
        })
    }

    /// Formats the color as a lowercase `#rrggbb` hex string (alpha dropped).
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }
}

/// Default annotation color (clinical red used by the diagnosis form).
pub const RED: Color = Color {
    r: 0.9,
    g: 0.224,
    b: 0.275,
    a: 1.0,
};

/// Predefined black color
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

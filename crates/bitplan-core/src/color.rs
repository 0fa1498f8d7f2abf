//! Color handling for bitplan diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colors are accepted as any CSS color string and
//! rendered in the `#rrggbb` form draw.io style strings expect.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitplan_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the color as a draw.io style value.
    ///
    /// Opaque and translucent colors become `#rrggbb` (draw.io styles carry
    /// no alpha channel); fully transparent colors become `none`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitplan_core::color::Color;
    ///
    /// assert_eq!(Color::new("red").unwrap().to_style_value(), "#ff0000");
    /// assert_eq!(Color::new("transparent").unwrap().to_style_value(), "none");
    /// ```
    pub fn to_style_value(self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        if rgba.a == 0 {
            return "none".to_string();
        }

        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert!(red.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_invalid_color_message() {
        let err = Color::new("grey-ish").unwrap_err();
        assert!(err.starts_with("invalid color `grey-ish`"));
    }

    #[test]
    fn test_style_value_hex() {
        assert_eq!(Color::new("#f5f5f5").unwrap().to_style_value(), "#f5f5f5");
        assert_eq!(Color::new("#666").unwrap().to_style_value(), "#666666");
        assert_eq!(
            Color::new("rgb(51, 51, 51)").unwrap().to_style_value(),
            "#333333"
        );
    }

    #[test]
    fn test_style_value_transparent() {
        let color = Color::new("transparent").unwrap();
        assert_eq!(color.to_style_value(), "none");
    }

    #[test]
    fn test_color_display() {
        let color = Color::new("blue").unwrap();
        assert!(!color.to_string().is_empty());
    }
}

//! Color handling for rungview diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, providing convenience methods for working with colors
//! in the rungview project.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
/// This provides convenience methods for working with colors in the rungview project
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use rungview_core::color::Color;
    ///
    /// let rail = Color::new("#333").unwrap();
    /// let grid = Color::new("rgb(240, 240, 240)").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Arguments
    ///
    /// * `alpha` - The alpha value to set, typically between 0.0 (fully transparent)
    ///   and 1.0 (fully opaque)
    ///
    /// # Examples
    ///
    /// ```
    /// use rungview_core::color::Color;
    ///
    /// let backing = Color::new("white").unwrap().with_alpha(0.75);
    /// assert_eq!(backing.alpha(), 0.75);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    ///
    /// The alpha value is a `f32` between 0.0 (fully transparent) and
    /// 1.0 (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new_valid() {
        assert!(Color::new("black").is_ok());
        assert!(Color::new("#f0f0f0").is_ok());
        assert!(Color::new("rgb(51, 51, 51)").is_ok());
    }

    #[test]
    fn test_color_new_invalid() {
        let result = Color::new("definitely-not-a-color");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("invalid color"));
    }

    #[test]
    fn test_color_default_is_black() {
        let color = Color::default();
        assert_eq!(color, Color::new("black").unwrap());
    }

    #[test]
    fn test_color_alpha() {
        let opaque = Color::new("red").unwrap();
        assert_eq!(opaque.alpha(), 1.0);

        let translucent = opaque.with_alpha(0.5);
        assert_eq!(translucent.alpha(), 0.5);
    }
}

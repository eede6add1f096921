//! The abstract 2D drawing surface.
//!
//! The renderer issues all of its draw calls through the [`Surface`] trait so
//! the same layout and glyph logic can target any backend (an SVG document, a
//! raster canvas, a recording surface in tests). Backends receive screen-space
//! coordinates; the renderer applies the viewport transform before calling in.
//!
//! # Overview
//!
//! - [`Surface`]: the draw-call seam (clear, rects, lines, circles, text)
//! - [`Stroke`]: color + width for outlined primitives
//! - [`TextStyle`]: font, size, color, and optional backing for text calls

use crate::{
    color::Color,
    geometry::{Bounds, Point, Size},
};

/// A stroke for outlined primitives.
///
/// Reduced to the properties ladder glyphs need: every symbol in the original
/// renderer is a solid line of some color and width.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    color: Color,
    width: f32,
}

impl Stroke {
    /// Creates a solid stroke with the given color and width.
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the same stroke with its width multiplied by `factor`.
    ///
    /// Used by the renderer to keep stroke weight proportional to zoom.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            color: self.color,
            width: self.width * factor,
        }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
        }
    }
}

/// Visual style for text draw calls.
///
/// Text is always horizontally centered on the given position, matching the
/// label placement the ladder renderer needs everywhere it draws text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    font_family: String,
    font_size: f32,
    color: Color,
}

impl TextStyle {
    /// Creates a text style with the given color and size, using the default
    /// sans-serif family.
    pub fn new(color: Color, font_size: f32) -> Self {
        Self {
            font_family: String::from("sans-serif"),
            font_size,
            color,
        }
    }

    /// Sets the font family (builder style).
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Returns the font family name.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the font size in pixels.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the text color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the same style with its font size multiplied by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            font_family: self.font_family.clone(),
            font_size: self.font_size * factor,
            color: self.color,
        }
    }
}

/// A 2D surface the renderer draws a single frame onto.
///
/// A frame is always a full clear-and-redraw: [`Surface::clear`] is called
/// first with the canvas size, then primitives arrive in back-to-front order.
/// Implementations must not reorder calls.
pub trait Surface {
    /// Resets the surface to an empty canvas of the given size.
    fn clear(&mut self, size: Size);

    /// Fills a rectangle with a solid color.
    fn fill_rect(&mut self, bounds: Bounds, color: Color);

    /// Outlines a rectangle.
    fn stroke_rect(&mut self, bounds: Bounds, stroke: &Stroke);

    /// Draws a straight line segment.
    fn line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Outlines a circle centered on `center`.
    fn circle(&mut self, center: Point, radius: f32, stroke: &Stroke);

    /// Draws text centered on `position`, both horizontally and vertically.
    fn text(&mut self, content: &str, position: Point, style: &TextStyle);

    /// Measures the extent `content` would occupy when drawn with `style`.
    ///
    /// Backends without font metrics may approximate; the measurement only
    /// sizes label backing rectangles.
    fn measure_text(&mut self, content: &str, style: &TextStyle) -> Size;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_scaled_keeps_color() {
        let stroke = Stroke::solid(Color::new("#666").unwrap(), 2.0);
        let scaled = stroke.scaled(1.5);
        assert_eq!(scaled.width(), 3.0);
        assert_eq!(scaled.color(), stroke.color());
    }

    #[test]
    fn test_text_style_builder() {
        let style = TextStyle::new(Color::default(), 10.0).with_font_family("Arial");
        assert_eq!(style.font_family(), "Arial");
        assert_eq!(style.font_size(), 10.0);
    }

    #[test]
    fn test_text_style_scaled() {
        let style = TextStyle::new(Color::default(), 10.0);
        assert_eq!(style.scaled(2.0).font_size(), 20.0);
    }
}

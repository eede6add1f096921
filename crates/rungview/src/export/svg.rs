//! SVG drawing surface.
//!
//! [`SvgSurface`] accumulates renderer draw calls into an `svg::Document`.
//! Text measurement goes through cosmic-text so label backings are sized from
//! real font metrics rather than a character-count guess.

use std::{
    fs::File,
    io::Write,
    sync::{Arc, Mutex, OnceLock},
};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::{error, info};
use svg::{Document, Node, node::Text as SvgText, node::element as svg_element};

use rungview_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
    surface::{Stroke, Surface, TextStyle},
};

/// A [`Surface`] that builds an SVG document.
///
/// The document is rebuilt from scratch on every [`Surface::clear`], so one
/// surface can be reused across frames.
pub struct SvgSurface {
    document: Document,
    size: Size,
}

impl SvgSurface {
    /// Creates an empty surface. The document gets its dimensions from the
    /// first [`Surface::clear`] call.
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            size: Size::default(),
        }
    }

    /// Returns the canvas size set by the last [`Surface::clear`].
    pub fn size(&self) -> Size {
        self.size
    }

    /// Serializes the accumulated document to SVG markup.
    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }

    /// Writes the accumulated document to the specified file.
    pub fn save(&self, file_name: &str) -> Result<(), super::Error> {
        info!(file_name; "Creating SVG file");
        let f = match File::create(file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name, err:err; "Failed to create SVG file");
                return Err(super::Error::Io(err));
            }
        };

        if let Err(err) = write!(&f, "{}", self.document) {
            error!(file_name, err:err; "Failed to write SVG content");
            return Err(super::Error::Io(err));
        }

        Ok(())
    }
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self, size: Size) {
        self.size = size;
        self.document = Document::new()
            .set("width", size.width())
            .set("height", size.height())
            .set("viewBox", (0.0, 0.0, size.width(), size.height()));
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        let min = bounds.min_point();
        let rect = svg_element::Rectangle::new()
            .set("x", min.x())
            .set("y", min.y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha());
        self.document.append(rect);
    }

    fn stroke_rect(&mut self, bounds: Bounds, stroke: &Stroke) {
        let min = bounds.min_point();
        let rect = svg_element::Rectangle::new()
            .set("x", min.x())
            .set("y", min.y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", "none")
            .set("stroke", stroke.color().to_string())
            .set("stroke-width", stroke.width());
        self.document.append(rect);
    }

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let line = svg_element::Line::new()
            .set("x1", from.x())
            .set("y1", from.y())
            .set("x2", to.x())
            .set("y2", to.y())
            .set("stroke", stroke.color().to_string())
            .set("stroke-width", stroke.width());
        self.document.append(line);
    }

    fn circle(&mut self, center: Point, radius: f32, stroke: &Stroke) {
        let circle = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", radius)
            .set("fill", "none")
            .set("stroke", stroke.color().to_string())
            .set("stroke-width", stroke.width());
        self.document.append(circle);
    }

    fn text(&mut self, content: &str, position: Point, style: &TextStyle) {
        let text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", style.font_family())
            .set("font-size", style.font_size())
            .set("fill", style.color().to_string())
            .set("fill-opacity", style.color().alpha())
            .add(SvgText::new(content));
        self.document.append(text);
    }

    fn measure_text(&mut self, content: &str, style: &TextStyle) -> Size {
        TEXT_MEASURER
            .get_or_init(TextMeasurer::new)
            .measure(content, style)
    }
}

/// Measures text with cosmic-text.
///
/// Maintains a reusable FontSystem instance to avoid expensive recreation.
struct TextMeasurer {
    font_system: Arc<Mutex<FontSystem>>,
}

// Shared by every surface in the process; font discovery runs once.
static TEXT_MEASURER: OnceLock<TextMeasurer> = OnceLock::new();

impl TextMeasurer {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Measures the rendered extent of `content` from real font metrics and
    /// shaping. Falls back to an average-glyph-width estimate when no font
    /// matches the requested family.
    fn measure(&self, content: &str, style: &TextStyle) -> Size {
        if content.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        let font_size_px = style.font_size();
        let line_height = font_size_px * 1.15;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let family = match style.font_family() {
            "sans-serif" => Family::SansSerif,
            "serif" => Family::Serif,
            "monospace" => Family::Monospace,
            name => Family::Name(name),
        };
        let attrs = Attrs::new().family(family);

        // Unconstrained size so the text flows onto a single line.
        buffer.set_size(None, None);
        buffer.set_text(content, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if layout_runs.is_empty() {
            max_width = content.len() as f32 * (font_size_px * 0.55);
            total_height = metrics.line_height;
        } else {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                if let Some(last) = last {
                    max_width = max_width.max(last.x + last.w);
                }
                total_height += metrics.line_height;
            }
        }

        Size::new(max_width, total_height)
    }
}

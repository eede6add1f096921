//! Ladder-diagram renderer.
//!
//! Consumes placed geometry from [`layout`](crate::layout) and the current
//! [`Viewport`], and issues draw calls against an abstract
//! [`Surface`]. Every frame is a full clear-and-redraw: background, optional
//! reference grid, then per rung its power rail, connection segments, element
//! glyphs, and address labels.
//!
//! Rendering never fails: an empty layout produces the placeholder frame, an
//! unrecognized element is skipped with a warning, and out-of-range viewport
//! state cannot occur (the viewport clamps it at the source).

use log::warn;

use rungview_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
    model::Element,
    surface::{Stroke, Surface, TextStyle},
};

use crate::{
    config::StyleConfig,
    error::RungviewError,
    layout::{ELEMENT_HALF_HEIGHT, ELEMENT_HALF_WIDTH, LayoutResult, PlacedElement, RungLayout},
    viewport::Viewport,
};

/// Pitch of the reference grid, in diagram units.
const GRID_SIZE: f32 = 20.0;
/// Radius of the coil circle.
const COIL_RADIUS: f32 = 10.0;
/// Half-length of the gap in a normally-open contact.
const CONTACT_GAP: f32 = 5.0;
/// Half-extent of the normally-closed strike-through.
const CONTACT_STRIKE: f32 = 8.0;
/// Distance from an element center down to its label center.
const LABEL_OFFSET: f32 = 35.0;
/// Padding around the measured label text for its backing rectangle.
const LABEL_PADDING: f32 = 2.0;
/// Label font size in diagram units.
const LABEL_FONT_SIZE: f32 = 10.0;

fn palette(color_str: &str) -> Color {
    Color::new(color_str).expect("palette entries are valid CSS colors")
}

/// Draws frames for a ladder layout.
///
/// Holds the resolved style (background, grid toggle) so per-frame rendering
/// is infallible.
#[derive(Debug)]
pub struct Renderer {
    background: Color,
    show_grid: bool,
    grid_stroke: Stroke,
    rail_stroke: Stroke,
    wire_stroke: Stroke,
    symbol_stroke: Stroke,
    function_fill: Color,
    label_color: Color,
    label_backing: Color,
}

impl Renderer {
    /// Creates a renderer from the style configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RungviewError::Config`] if the configured background color
    /// string cannot be parsed.
    pub fn new(style: &StyleConfig) -> Result<Self, RungviewError> {
        let background = style
            .background_color()
            .map_err(RungviewError::Config)?
            .unwrap_or_else(|| palette("white"));

        Ok(Self {
            background,
            show_grid: style.show_grid(),
            grid_stroke: Stroke::solid(palette("#f0f0f0"), 1.0),
            rail_stroke: Stroke::solid(palette("#333"), 3.0),
            wire_stroke: Stroke::solid(palette("#666"), 2.0),
            symbol_stroke: Stroke::solid(palette("#333"), 2.0),
            function_fill: palette("#f8f8f8"),
            label_color: palette("#666"),
            label_backing: palette("white").with_alpha(0.75),
        })
    }

    /// Renders one full frame of `layout` onto `surface` under `viewport`.
    ///
    /// Idempotent: rendering the same inputs twice draws the same frame.
    pub fn render<S: Surface>(&self, surface: &mut S, layout: &LayoutResult, viewport: &Viewport) {
        let canvas = layout.canvas_size();
        surface.clear(canvas);
        surface.fill_rect(
            Bounds::new_from_top_left(Point::default(), canvas),
            self.background,
        );

        if layout.is_empty() {
            self.draw_placeholder(surface, canvas);
            return;
        }

        if self.show_grid {
            self.draw_grid(surface, canvas, viewport);
        }

        for rung in layout.rungs() {
            self.draw_rung(surface, rung, viewport);
        }
    }

    /// Static frame for the no-diagram state. Drawn untransformed.
    fn draw_placeholder<S: Surface>(&self, surface: &mut S, canvas: Size) {
        let style = TextStyle::new(self.label_color, 14.0);
        let center = Point::new(canvas.width() / 2.0, canvas.height() / 2.0);
        surface.text("No ladder diagram", center, &style);
    }

    fn draw_grid<S: Surface>(&self, surface: &mut S, canvas: Size, viewport: &Viewport) {
        let stroke = self.grid_stroke.scaled(viewport.scale());

        let mut x = 0.0;
        while x <= canvas.width() {
            surface.line(
                viewport.to_screen(Point::new(x, 0.0)),
                viewport.to_screen(Point::new(x, canvas.height())),
                &stroke,
            );
            x += GRID_SIZE;
        }

        let mut y = 0.0;
        while y <= canvas.height() {
            surface.line(
                viewport.to_screen(Point::new(0.0, y)),
                viewport.to_screen(Point::new(canvas.width(), y)),
                &stroke,
            );
            y += GRID_SIZE;
        }
    }

    fn draw_rung<S: Surface>(&self, surface: &mut S, rung: &RungLayout, viewport: &Viewport) {
        // Power rail segment.
        surface.line(
            viewport.to_screen(Point::new(rung.rail_x(), rung.rail_top_y())),
            viewport.to_screen(Point::new(rung.rail_x(), rung.rail_bottom_y())),
            &self.rail_stroke.scaled(viewport.scale()),
        );

        self.draw_connections(surface, rung, viewport);

        for placed in rung.placed() {
            self.draw_element(surface, placed, viewport);
        }
    }

    /// Horizontal wire segments: rail to first element, then element to
    /// element, all at the chain's center-y. Drawn for every index slot so an
    /// unknown element keeps its neighbors connected.
    fn draw_connections<S: Surface>(&self, surface: &mut S, rung: &RungLayout, viewport: &Viewport) {
        let Some(first) = rung.placed().first() else {
            return;
        };
        let stroke = self.wire_stroke.scaled(viewport.scale());
        let y = first.center().y();

        surface.line(
            viewport.to_screen(Point::new(rung.rail_x(), y)),
            viewport.to_screen(Point::new(first.center().x() - ELEMENT_HALF_WIDTH, y)),
            &stroke,
        );

        for pair in rung.placed().windows(2) {
            surface.line(
                viewport.to_screen(Point::new(pair[0].center().x() + ELEMENT_HALF_WIDTH, y)),
                viewport.to_screen(Point::new(pair[1].center().x() - ELEMENT_HALF_WIDTH, y)),
                &stroke,
            );
        }
    }

    fn draw_element<S: Surface>(&self, surface: &mut S, placed: &PlacedElement, viewport: &Viewport) {
        let center = placed.center();

        match placed.element() {
            Element::Contact { normally_open, .. } => {
                self.draw_contact(surface, center, *normally_open, viewport);
            }
            Element::Coil { .. } => self.draw_coil(surface, center, viewport),
            Element::Function { label, .. } => {
                self.draw_function(surface, center, label, viewport);
            }
            Element::Unknown => {
                warn!("Skipping element with unrecognized type");
                return;
            }
        }

        let label = placed
            .element()
            .address()
            .or_else(|| placed.element().description());
        if let Some(label) = label {
            self.draw_label(surface, center, label, viewport);
        }
    }

    fn draw_contact<S: Surface>(
        &self,
        surface: &mut S,
        center: Point,
        normally_open: bool,
        viewport: &Viewport,
    ) {
        let stroke = self.symbol_stroke.scaled(viewport.scale());
        let y = center.y();

        if normally_open {
            // Two collinear strokes with an open gap between them.
            surface.line(
                viewport.to_screen(Point::new(center.x() - ELEMENT_HALF_WIDTH, y)),
                viewport.to_screen(Point::new(center.x() - CONTACT_GAP, y)),
                &stroke,
            );
            surface.line(
                viewport.to_screen(Point::new(center.x() + CONTACT_GAP, y)),
                viewport.to_screen(Point::new(center.x() + ELEMENT_HALF_WIDTH, y)),
                &stroke,
            );
        } else {
            // Continuous stroke with a diagonal strike-through.
            surface.line(
                viewport.to_screen(Point::new(center.x() - ELEMENT_HALF_WIDTH, y)),
                viewport.to_screen(Point::new(center.x() + ELEMENT_HALF_WIDTH, y)),
                &stroke,
            );
            surface.line(
                viewport.to_screen(Point::new(center.x() - CONTACT_STRIKE, y - CONTACT_STRIKE)),
                viewport.to_screen(Point::new(center.x() + CONTACT_STRIKE, y + CONTACT_STRIKE)),
                &stroke,
            );
        }
    }

    fn draw_coil<S: Surface>(&self, surface: &mut S, center: Point, viewport: &Viewport) {
        let stroke = self.symbol_stroke.scaled(viewport.scale());
        let y = center.y();

        surface.line(
            viewport.to_screen(Point::new(center.x() - ELEMENT_HALF_WIDTH, y)),
            viewport.to_screen(Point::new(center.x() - COIL_RADIUS, y)),
            &stroke,
        );
        surface.line(
            viewport.to_screen(Point::new(center.x() + COIL_RADIUS, y)),
            viewport.to_screen(Point::new(center.x() + ELEMENT_HALF_WIDTH, y)),
            &stroke,
        );
        surface.circle(
            viewport.to_screen(center),
            COIL_RADIUS * viewport.scale(),
            &stroke,
        );
    }

    fn draw_function<S: Surface>(
        &self,
        surface: &mut S,
        center: Point,
        label: &str,
        viewport: &Viewport,
    ) {
        let body = Size::new(ELEMENT_HALF_WIDTH * 3.0, ELEMENT_HALF_HEIGHT * 2.0);
        let bounds = viewport
            .to_screen(center)
            .to_bounds(body.scale(viewport.scale()));

        surface.fill_rect(bounds, self.function_fill);
        surface.stroke_rect(bounds, &self.symbol_stroke.scaled(viewport.scale()));

        let style =
            TextStyle::new(self.symbol_stroke.color(), LABEL_FONT_SIZE).scaled(viewport.scale());
        surface.text(label, viewport.to_screen(center), &style);
    }

    /// Address/description text below the glyph, over a translucent backing
    /// rectangle sized to the measured text extent so it stays legible over
    /// the grid.
    fn draw_label<S: Surface>(
        &self,
        surface: &mut S,
        center: Point,
        label: &str,
        viewport: &Viewport,
    ) {
        let style = TextStyle::new(self.label_color, LABEL_FONT_SIZE).scaled(viewport.scale());
        let position = viewport.to_screen(Point::new(center.x(), center.y() + LABEL_OFFSET));

        let text_size = surface.measure_text(label, &style);
        let padding = LABEL_PADDING * viewport.scale();
        let backing = position.to_bounds(Size::new(
            text_size.width() + padding * 2.0,
            text_size.height() + padding * 2.0,
        ));

        surface.fill_rect(backing, self.label_backing);
        surface.text(label, position, &style);
    }
}

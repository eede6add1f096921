//! Rungview - layout and rendering for PLC ladder diagrams.
//!
//! Takes a [`Diagram`] of rungs and elements (contacts, coils, function
//! blocks), computes deterministic geometry for it, and renders frames through
//! a pluggable drawing surface. Pan and zoom state lives in a [`Viewport`]
//! driven either directly or through the [`interact`] state machine.

pub mod config;
pub mod export;
pub mod interact;
pub mod layout;
pub mod render;
pub mod viewport;

mod error;

pub use rungview_core::{color, geometry, model, surface};

pub use error::RungviewError;
pub use viewport::Viewport;

use log::{debug, info};

use rungview_core::{model::Diagram, surface::Surface};

use config::AppConfig;
use export::SvgSurface;
use layout::LayoutResult;
use render::Renderer;

/// A ladder-diagram view: layout, viewport, and renderer behind one API.
///
/// The view owns no diagram; [`LadderView::set_diagram`] consumes one into
/// placed geometry, and every later operation works off that layout. Loading
/// a new diagram replaces the layout and resets the viewport.
///
/// # Examples
///
/// ```
/// use rungview::{LadderView, config::AppConfig};
/// use rungview::model::Diagram;
///
/// let mut view = LadderView::new(AppConfig::default())
///     .expect("default config is valid");
///
/// view.set_diagram(&Diagram::default());
/// let svg = view.render_svg();
/// assert!(svg.contains("<svg"));
/// ```
pub struct LadderView {
    renderer: Renderer,
    layout: LayoutResult,
    viewport: Viewport,
}

impl LadderView {
    /// Creates a view with the given configuration and no diagram.
    ///
    /// # Errors
    ///
    /// Returns [`RungviewError::Config`] if the configured style cannot be
    /// resolved (for example an unparseable background color).
    pub fn new(config: AppConfig) -> Result<Self, RungviewError> {
        Ok(Self {
            renderer: Renderer::new(config.style())?,
            layout: LayoutResult::default(),
            viewport: Viewport::new(),
        })
    }

    /// Lays out `diagram` and makes it the view's content.
    ///
    /// The viewport resets to its default state so the new diagram is shown
    /// unzoomed from its origin.
    pub fn set_diagram(&mut self, diagram: &Diagram) {
        info!(rungs = diagram.rungs().len(); "Laying out diagram");
        self.layout = layout::layout(diagram);
        self.viewport.reset();
        debug!(
            width = self.layout.bounding_box().width(),
            height = self.layout.bounding_box().height();
            "Layout calculated"
        );
    }

    /// Removes the current diagram; later frames show the placeholder.
    pub fn clear_diagram(&mut self) {
        self.layout = LayoutResult::default();
        self.viewport.reset();
    }

    /// Returns the current layout.
    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// Returns the current viewport state.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the viewport for mutation, e.g. by an
    /// [`InteractionController`](interact::InteractionController).
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Adjusts the zoom by discrete steps; see [`Viewport::zoom_by`].
    pub fn zoom_by(&mut self, delta: f32) {
        self.viewport.zoom_by(delta);
    }

    /// Fits the current layout into the given available area.
    pub fn fit_to_view(&mut self, available_width: f32, available_height: f32) {
        self.viewport
            .fit_to_view(&self.layout, available_width, available_height);
    }

    /// Restores the default viewport (scale 1, zero offset).
    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// Renders one frame onto an arbitrary surface.
    pub fn render_to<S: Surface>(&self, surface: &mut S) {
        self.renderer.render(surface, &self.layout, &self.viewport);
    }

    /// Renders one frame and returns it as SVG markup.
    pub fn render_svg(&self) -> String {
        let mut surface = SvgSurface::new();
        self.render_to(&mut surface);
        info!("SVG rendered successfully");
        surface.to_svg_string()
    }

    /// Renders one frame and writes it to `file_name` as SVG.
    ///
    /// # Errors
    ///
    /// Returns [`RungviewError::Export`] if the file cannot be written.
    pub fn export_svg(&self, file_name: &str) -> Result<(), RungviewError> {
        let mut surface = SvgSurface::new();
        self.render_to(&mut surface);
        surface.save(file_name)?;
        Ok(())
    }
}

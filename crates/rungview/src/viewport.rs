//! Viewport transform between diagram space and screen space.
//!
//! The viewport is the only mutable state in the view pipeline: a scale
//! factor clamped to `[0.5, 3.0]` and an unconstrained offset, both in
//! diagram units. Screen mapping applies the offset before scaling
//! (`screen = scale * (point + offset)`), so panning speed in diagram units
//! is independent of zoom.

use rungview_core::geometry::Point;

use crate::layout::LayoutResult;

/// Lower bound of the zoom scale.
pub const MIN_SCALE: f32 = 0.5;
/// Upper bound of the zoom scale.
pub const MAX_SCALE: f32 = 3.0;
/// Scale change applied per discrete zoom step.
const ZOOM_STEP: f32 = 0.1;
/// Upper bound on the scale chosen by [`Viewport::fit_to_view`].
const FIT_MAX_SCALE: f32 = 1.5;
/// Diagram-space padding applied by [`Viewport::fit_to_view`] so content is
/// not flush against the viewport edge.
const FIT_PADDING: f32 = 20.0;

/// The scale + offset pair mapping diagram space to screen space.
///
/// Created once per view session and mutated only through the operations
/// below; the renderer reads it, never writes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f32,
    offset: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Point::default(),
        }
    }
}

impl Viewport {
    /// Creates a viewport at scale 1 with zero offset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scale, always within `[0.5, 3.0]`.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Returns the current offset in diagram units.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Maps a diagram-space point to screen space.
    pub fn to_screen(&self, point: Point) -> Point {
        point.add_point(self.offset).scale(self.scale)
    }

    /// Maps a screen-space point back to diagram space.
    ///
    /// Exact inverse of [`Viewport::to_screen`].
    pub fn to_diagram(&self, point: Point) -> Point {
        point.scale(1.0 / self.scale).sub_point(self.offset)
    }

    /// Adjusts the scale by `delta` zoom steps, clamped to the scale bounds.
    ///
    /// Out-of-range requests are clamped, never rejected.
    pub fn zoom_by(&mut self, delta: f32) {
        self.scale = (self.scale + delta * ZOOM_STEP).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Pans by a screen-space delta.
    ///
    /// The delta is converted to diagram units by dividing by the current
    /// scale, so a drag tracks the pointer 1:1 at any zoom level.
    pub fn pan_by(&mut self, dx_screen: f32, dy_screen: f32) {
        self.offset = self
            .offset
            .add_point(Point::new(dx_screen / self.scale, dy_screen / self.scale));
    }

    /// Sets the scale directly, clamped to the scale bounds. The offset is
    /// left untouched.
    pub fn zoom_to(&mut self, scale: f32) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Restores scale 1 and zero offset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Chooses a scale so the layout's bounding box fits the available area,
    /// capped at 1.5x and clamped into the scale bounds, with a small fixed
    /// padding offset.
    pub fn fit_to_view(&mut self, layout: &LayoutResult, available_width: f32, available_height: f32) {
        let bbox = layout.bounding_box();
        self.scale = (available_width / bbox.width())
            .min(available_height / bbox.height())
            .min(FIT_MAX_SCALE)
            .clamp(MIN_SCALE, MAX_SCALE);
        self.offset = Point::new(FIT_PADDING, FIT_PADDING);
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use rungview_core::model::Diagram;

    use super::*;
    use crate::layout;

    #[test]
    fn test_default_is_identity_offset() {
        let viewport = Viewport::new();
        assert_approx_eq!(f32, viewport.scale(), 1.0);
        assert_eq!(viewport.offset(), Point::default());

        let p = Point::new(12.0, -4.0);
        assert_eq!(viewport.to_screen(p), p);
    }

    #[test]
    fn test_to_screen_applies_offset_before_scale() {
        let mut viewport = Viewport::new();
        viewport.zoom_by(10.0); // scale 2.0
        viewport.pan_by(20.0, 40.0); // offset (10, 20) in diagram units

        let screen = viewport.to_screen(Point::new(5.0, 5.0));
        assert_approx_eq!(f32, screen.x(), (5.0 + 10.0) * 2.0);
        assert_approx_eq!(f32, screen.y(), (5.0 + 20.0) * 2.0);
    }

    #[test]
    fn test_zoom_clamps_at_bounds() {
        let mut viewport = Viewport::new();
        viewport.zoom_by(1000.0);
        assert_approx_eq!(f32, viewport.scale(), MAX_SCALE);

        viewport.zoom_by(-1000.0);
        assert_approx_eq!(f32, viewport.scale(), MIN_SCALE);

        // Clamped, not rejected: a further in-range step still applies.
        viewport.zoom_by(1.0);
        assert_approx_eq!(f32, viewport.scale(), MIN_SCALE + 0.1);
    }

    #[test]
    fn test_pan_divides_by_scale() {
        let mut viewport = Viewport::new();
        viewport.zoom_by(10.0); // scale 2.0
        viewport.pan_by(30.0, -10.0);

        assert_approx_eq!(f32, viewport.offset().x(), 15.0);
        assert_approx_eq!(f32, viewport.offset().y(), -5.0);
    }

    #[test]
    fn test_zoom_to_clamps() {
        let mut viewport = Viewport::new();
        viewport.zoom_to(2.2);
        assert_approx_eq!(f32, viewport.scale(), 2.2);

        viewport.zoom_to(10.0);
        assert_approx_eq!(f32, viewport.scale(), MAX_SCALE);

        viewport.zoom_to(0.0);
        assert_approx_eq!(f32, viewport.scale(), MIN_SCALE);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut viewport = Viewport::new();
        viewport.zoom_by(7.0);
        viewport.pan_by(123.0, -456.0);

        viewport.reset();
        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn test_fit_to_view_small_area_scales_down() {
        // Empty layout: 800x400 bounding box.
        let layout = layout::layout(&Diagram::default());
        let mut viewport = Viewport::new();

        viewport.fit_to_view(&layout, 400.0, 300.0);
        assert_approx_eq!(f32, viewport.scale(), 0.5); // 400/800, already at the floor
        assert_eq!(viewport.offset(), Point::new(20.0, 20.0));
    }

    #[test]
    fn test_fit_to_view_caps_upscale() {
        let layout = layout::layout(&Diagram::default());
        let mut viewport = Viewport::new();

        viewport.fit_to_view(&layout, 4000.0, 4000.0);
        assert_approx_eq!(f32, viewport.scale(), 1.5);
    }
}

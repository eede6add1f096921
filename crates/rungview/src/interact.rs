//! Pointer and wheel interaction for the diagram view.
//!
//! [`InteractionController`] is a two-state machine (idle / dragging) that
//! consumes [`InputEvent`]s and mutates a [`Viewport`]. It never touches the
//! diagram or the layout.
//!
//! Pointer capture is abstracted behind the [`InputSource`] capability so the
//! same controller logic runs against any event source (a browser canvas, a
//! native window, a test harness). Capture acquired at pointer-down is
//! released on pointer-up and, as a backstop, when the controller is dropped
//! mid-drag, so a missed pointer-up cannot leak a capture.

use log::trace;
use rungview_core::geometry::Point;

use crate::viewport::Viewport;

/// A raw input event observed on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed on the surface, in screen coordinates.
    PointerDown(Point),
    /// Pointer moved, in screen coordinates.
    PointerMove(Point),
    /// Pointer released (anywhere, thanks to capture).
    PointerUp,
    /// Wheel rotation; positive zooms in.
    Wheel(f32),
    /// Discrete zoom-in action (toolbar button).
    ZoomIn,
    /// Discrete zoom-out action (toolbar button).
    ZoomOut,
}

/// Capability for capturing pointer events for the duration of a drag.
///
/// `capture_pointer` is called exactly once when a drag starts and
/// `release_pointer` exactly once when it ends, on every exit path.
pub trait InputSource {
    /// Start routing pointer-move/up events to the view even when the
    /// pointer leaves the surface.
    fn capture_pointer(&mut self);

    /// Stop routing captured pointer events.
    fn release_pointer(&mut self);
}

/// An [`InputSource`] for hosts without capture semantics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullInputSource;

impl InputSource for NullInputSource {
    fn capture_pointer(&mut self) {}
    fn release_pointer(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    /// Holds the screen position of the last processed pointer event.
    Dragging { reference: Point },
}

/// Two-state drag/zoom controller over a [`Viewport`].
///
/// The drag reference point is updated after every move, so panning tracks
/// the pointer 1:1 instead of compounding deltas from the drag origin.
#[derive(Debug)]
pub struct InteractionController<S: InputSource> {
    source: S,
    state: DragState,
}

impl<S: InputSource> InteractionController<S> {
    /// Creates an idle controller over the given input source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: DragState::Idle,
        }
    }

    /// Returns true while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Feeds one input event through the state machine, mutating `viewport`.
    ///
    /// Zoom events apply in either state without a transition; reset and
    /// fit-to-view act on the viewport directly and do not pass through here,
    /// so they cannot interrupt a drag.
    pub fn handle(&mut self, event: InputEvent, viewport: &mut Viewport) {
        match event {
            InputEvent::PointerDown(position) => {
                if self.state == DragState::Idle {
                    self.source.capture_pointer();
                    self.state = DragState::Dragging {
                        reference: position,
                    };
                    trace!(x = position.x(), y = position.y(); "Drag started");
                }
            }
            InputEvent::PointerMove(position) => {
                if let DragState::Dragging { reference } = &mut self.state {
                    let delta = position.sub_point(*reference);
                    viewport.pan_by(delta.x(), delta.y());
                    *reference = position;
                }
            }
            InputEvent::PointerUp => {
                if self.is_dragging() {
                    self.state = DragState::Idle;
                    self.source.release_pointer();
                    trace!("Drag ended");
                }
            }
            InputEvent::Wheel(delta) => {
                if delta > 0.0 {
                    viewport.zoom_by(1.0);
                } else if delta < 0.0 {
                    viewport.zoom_by(-1.0);
                }
            }
            InputEvent::ZoomIn => viewport.zoom_by(1.0),
            InputEvent::ZoomOut => viewport.zoom_by(-1.0),
        }
    }
}

impl<S: InputSource> Drop for InteractionController<S> {
    fn drop(&mut self) {
        // Backstop for a drag abandoned without a pointer-up.
        if self.is_dragging() {
            self.source.release_pointer();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use float_cmp::assert_approx_eq;

    use super::*;

    /// Counts capture/release calls so tests can assert balance.
    #[derive(Default, Clone)]
    struct CountingSource {
        captures: Rc<Cell<u32>>,
        releases: Rc<Cell<u32>>,
    }

    impl InputSource for CountingSource {
        fn capture_pointer(&mut self) {
            self.captures.set(self.captures.get() + 1);
        }

        fn release_pointer(&mut self) {
            self.releases.set(self.releases.get() + 1);
        }
    }

    fn controller() -> (InteractionController<CountingSource>, CountingSource) {
        let source = CountingSource::default();
        (InteractionController::new(source.clone()), source)
    }

    #[test]
    fn test_drag_pans_by_screen_delta_over_scale() {
        let (mut controller, _) = controller();
        let mut viewport = Viewport::new();
        viewport.zoom_by(10.0); // scale 2.0

        controller.handle(InputEvent::PointerDown(Point::new(100.0, 100.0)), &mut viewport);
        controller.handle(InputEvent::PointerMove(Point::new(130.0, 80.0)), &mut viewport);
        controller.handle(InputEvent::PointerUp, &mut viewport);

        // Screen delta (30, -20) at scale 2 moves the offset by (15, -10).
        assert_approx_eq!(f32, viewport.offset().x(), 15.0);
        assert_approx_eq!(f32, viewport.offset().y(), -10.0);
    }

    #[test]
    fn test_drag_tracks_pointer_one_to_one() {
        let (mut controller, _) = controller();
        let mut viewport = Viewport::new();

        controller.handle(InputEvent::PointerDown(Point::new(0.0, 0.0)), &mut viewport);
        controller.handle(InputEvent::PointerMove(Point::new(10.0, 0.0)), &mut viewport);
        controller.handle(InputEvent::PointerMove(Point::new(20.0, 0.0)), &mut viewport);
        controller.handle(InputEvent::PointerMove(Point::new(30.0, 0.0)), &mut viewport);
        controller.handle(InputEvent::PointerUp, &mut viewport);

        // Three 10px moves accumulate to exactly 30, not 10+20+30.
        assert_approx_eq!(f32, viewport.offset().x(), 30.0);
    }

    #[test]
    fn test_capture_balanced_on_normal_drag() {
        let (mut controller, source) = controller();
        let mut viewport = Viewport::new();

        controller.handle(InputEvent::PointerDown(Point::new(0.0, 0.0)), &mut viewport);
        assert_eq!(source.captures.get(), 1);
        assert_eq!(source.releases.get(), 0);

        controller.handle(InputEvent::PointerUp, &mut viewport);
        assert_eq!(source.releases.get(), 1);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_capture_released_on_drop_mid_drag() {
        let source;
        {
            let (mut controller, s) = controller();
            source = s;
            let mut viewport = Viewport::new();
            controller.handle(InputEvent::PointerDown(Point::new(0.0, 0.0)), &mut viewport);
        }
        assert_eq!(source.captures.get(), 1);
        assert_eq!(source.releases.get(), 1);
    }

    #[test]
    fn test_move_and_up_ignored_while_idle() {
        let (mut controller, source) = controller();
        let mut viewport = Viewport::new();

        controller.handle(InputEvent::PointerMove(Point::new(50.0, 50.0)), &mut viewport);
        controller.handle(InputEvent::PointerUp, &mut viewport);

        assert_eq!(viewport.offset(), Point::default());
        assert_eq!(source.releases.get(), 0);
    }

    #[test]
    fn test_second_pointer_down_does_not_stack_captures() {
        let (mut controller, source) = controller();
        let mut viewport = Viewport::new();

        controller.handle(InputEvent::PointerDown(Point::new(0.0, 0.0)), &mut viewport);
        controller.handle(InputEvent::PointerDown(Point::new(5.0, 5.0)), &mut viewport);

        assert_eq!(source.captures.get(), 1);
    }

    #[test]
    fn test_zoom_applies_without_leaving_drag() {
        let (mut controller, _) = controller();
        let mut viewport = Viewport::new();

        controller.handle(InputEvent::PointerDown(Point::new(0.0, 0.0)), &mut viewport);
        controller.handle(InputEvent::Wheel(1.0), &mut viewport);
        controller.handle(InputEvent::ZoomOut, &mut viewport);

        assert!(controller.is_dragging());
        assert_approx_eq!(f32, viewport.scale(), 1.0);
    }

    #[test]
    fn test_zoom_buttons_step_scale() {
        let (mut controller, _) = controller();
        let mut viewport = Viewport::new();

        controller.handle(InputEvent::ZoomIn, &mut viewport);
        assert_approx_eq!(f32, viewport.scale(), 1.1);

        controller.handle(InputEvent::Wheel(-3.0), &mut viewport);
        assert_approx_eq!(f32, viewport.scale(), 1.0);
    }
}

//! Deterministic ladder layout.
//!
//! [`layout`] is a pure function from a [`Diagram`] to placed geometry in
//! diagram space. Vertical position comes from the rung's index, horizontal
//! position from the element's index within its rung; the diagram itself is
//! never mutated or reordered.

use rungview_core::{
    geometry::{Point, Size},
    model::{Diagram, Element},
};

/// Vertical origin of the rung grid.
pub const START_Y: f32 = 0.0;
/// Vertical distance between consecutive rungs.
pub const RUNG_SPACING: f32 = 100.0;
/// X position of the left power rail, identical for every rung.
pub const RAIL_X: f32 = 20.0;
/// Horizontal distance between consecutive element centers.
pub const ELEMENT_SPACING: f32 = 80.0;
/// Half the width of an element symbol.
pub const ELEMENT_HALF_WIDTH: f32 = 20.0;
/// Half the height of an element symbol.
pub const ELEMENT_HALF_HEIGHT: f32 = 20.0;

/// Margin added past the last element / rung when sizing the bounding box.
const MARGIN: f32 = 40.0;

/// Minimum bounding-box size, also the canvas for an empty diagram.
const MIN_BOUNDS: Size = Size::new(800.0, 400.0);
/// Minimum canvas size once a diagram is present.
const MIN_CANVAS: Size = Size::new(800.0, 600.0);

/// An element with its computed center position in diagram space.
#[derive(Debug, Clone)]
pub struct PlacedElement {
    element: Element,
    center: Point,
}

impl PlacedElement {
    /// Returns the placed element.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Returns the element's center in diagram space.
    pub fn center(&self) -> Point {
        self.center
    }
}

/// Placed geometry for a single rung: its power-rail segment and elements.
#[derive(Debug, Clone)]
pub struct RungLayout {
    rail_x: f32,
    rail_top_y: f32,
    rail_bottom_y: f32,
    placed: Vec<PlacedElement>,
}

impl RungLayout {
    /// Returns the x position of the power rail.
    pub fn rail_x(&self) -> f32 {
        self.rail_x
    }

    /// Returns the top y of the power-rail segment.
    pub fn rail_top_y(&self) -> f32 {
        self.rail_top_y
    }

    /// Returns the bottom y of the power-rail segment.
    pub fn rail_bottom_y(&self) -> f32 {
        self.rail_bottom_y
    }

    /// Returns the placed elements, in chain order.
    pub fn placed(&self) -> &[PlacedElement] {
        &self.placed
    }
}

/// The full output of the layout pass.
#[derive(Debug, Clone)]
pub struct LayoutResult {
    rungs: Vec<RungLayout>,
    bounding_box: Size,
}

impl Default for LayoutResult {
    fn default() -> Self {
        Self {
            rungs: Vec::new(),
            bounding_box: MIN_BOUNDS,
        }
    }
}

impl LayoutResult {
    /// Returns the per-rung layouts, in diagram order.
    pub fn rungs(&self) -> &[RungLayout] {
        &self.rungs
    }

    /// Returns the minimal diagram-space rectangle enclosing all rungs,
    /// floored at 800x400.
    pub fn bounding_box(&self) -> Size {
        self.bounding_box
    }

    /// Returns true if the layout contains no rungs.
    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
    }

    /// Returns the drawing-surface size for this layout.
    ///
    /// An empty diagram gets the 800x400 placeholder canvas; otherwise the
    /// bounding box floored at 800x600.
    pub fn canvas_size(&self) -> Size {
        if self.is_empty() {
            MIN_BOUNDS
        } else {
            self.bounding_box.max(MIN_CANVAS)
        }
    }
}

/// Computes placed geometry for every rung and element of `diagram`.
///
/// Pure and deterministic: the same diagram always yields the same layout.
/// A rung with zero elements still produces its power-rail segment.
pub fn layout(diagram: &Diagram) -> LayoutResult {
    let rungs: Vec<RungLayout> = diagram
        .rungs()
        .iter()
        .enumerate()
        .map(|(i, rung)| {
            let rung_y = START_Y + i as f32 * RUNG_SPACING;

            let placed = rung
                .elements()
                .iter()
                .enumerate()
                .map(|(j, element)| PlacedElement {
                    element: element.clone(),
                    center: Point::new(
                        RAIL_X + 60.0 + j as f32 * ELEMENT_SPACING,
                        rung_y + 50.0,
                    ),
                })
                .collect();

            RungLayout {
                rail_x: RAIL_X,
                rail_top_y: rung_y + 20.0,
                rail_bottom_y: rung_y + 80.0,
                placed,
            }
        })
        .collect();

    let max_elements = diagram
        .rungs()
        .iter()
        .map(|rung| rung.elements().len())
        .max()
        .unwrap_or(0);

    let bounding_box = if rungs.is_empty() {
        MIN_BOUNDS
    } else {
        Size::new(
            RAIL_X + 60.0 + max_elements as f32 * ELEMENT_SPACING + MARGIN,
            START_Y + rungs.len() as f32 * RUNG_SPACING + MARGIN,
        )
        .max(MIN_BOUNDS)
    };

    LayoutResult {
        rungs,
        bounding_box,
    }
}

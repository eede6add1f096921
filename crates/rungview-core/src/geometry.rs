//! Basic geometric types shared by layout, viewport, and surfaces.
//!
//! All coordinates are `f32` in either diagram space or screen space; the
//! types themselves are space-agnostic.

/// A point in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds, and the size
    /// is distributed equally in all directions around that center.
    pub fn to_bounds(self, size: Size) -> Bounds {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;

        Bounds {
            min_x: self.x - half_width,
            min_y: self.y - half_height,
            max_x: self.x + half_width,
            max_y: self.y + half_height,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from a top-left corner and a size.
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Returns the center of the bounds as a Point
    pub fn center(self) -> Point {
        Point {
            x: (self.min_x + self.max_x) / 2.0,
            y: (self.min_y + self.max_y) / 2.0,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_accessors() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_add_sub_round_trip() {
        let p = Point::new(5.0, 8.0);
        let delta = Point::new(2.0, -3.0);
        let back = p.add_point(delta).sub_point(delta);
        assert_approx_eq!(f32, back.x(), p.x());
        assert_approx_eq!(f32, back.y(), p.y());
    }

    #[test]
    fn test_point_scale() {
        let scaled = Point::new(2.0, 3.0).scale(2.5);
        assert_eq!(scaled.x(), 5.0);
        assert_eq!(scaled.y(), 7.5);
    }

    #[test]
    fn test_point_to_bounds_centers() {
        let bounds = Point::new(10.0, 20.0).to_bounds(Size::new(6.0, 8.0));
        assert_eq!(bounds.min_x(), 7.0);
        assert_eq!(bounds.min_y(), 16.0);
        assert_eq!(bounds.max_x(), 13.0);
        assert_eq!(bounds.max_y(), 24.0);
        assert_eq!(bounds.center(), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_size_max() {
        let max = Size::new(10.0, 20.0).max(Size::new(15.0, 18.0));
        assert_eq!(max.width(), 15.0);
        assert_eq!(max.height(), 20.0);
    }

    #[test]
    fn test_size_scale() {
        let scaled = Size::new(10.0, 20.0).scale(0.5);
        assert_eq!(scaled.width(), 5.0);
        assert_eq!(scaled.height(), 10.0);
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(2.0, 3.0), Size::new(5.0, 8.0));
        assert_eq!(bounds.min_point(), Point::new(2.0, 3.0));
        assert_eq!(bounds.width(), 5.0);
        assert_eq!(bounds.height(), 8.0);
        assert_eq!(bounds.to_size(), Size::new(5.0, 8.0));
    }
}

//! Geometry types shared by the view tree and the solver

use crate::edge::Edge;

/// A 2D point in the coordinate system (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle: origin at the top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Coordinate of one edge
    pub fn edge(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.y,
            Edge::Left => self.x,
            Edge::Bottom => self.bottom(),
            Edge::Right => self.right(),
        }
    }

    /// Translate the box so that its origin is relative to `origin`
    pub fn relative_to(&self, origin: Point) -> BoundingBox {
        BoundingBox::new(self.x - origin.x, self.y - origin.y, self.width, self.height)
    }

    /// Compare with another box within `tolerance` on every component
    pub fn approx_eq(&self, other: &BoundingBox, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

//! Geometric primitives for layout analysis.
//!
//! All coordinates are in document units with the origin at the top-left of
//! the page and `y` growing downwards, matching the `top` values reported for
//! glyphs by the page source.

use serde::{Deserialize, Serialize};

/// A rectangle in document space.
///
/// Serializes as `{x, y, width, height}`, which is the `bbox` / `position`
/// shape of the extraction output.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of top-left corner
    pub x: f32,
    /// Y coordinate of top-left corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corner points.
    ///
    /// This is the `(x0, y0, x1, y1)` form table geometries report.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::geometry::Rect;
    ///
    /// let rect = Rect::from_points(10.0, 20.0, 110.0, 70.0);
    /// assert_eq!(rect.x, 10.0);
    /// assert_eq!(rect.y, 20.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Horizontal midpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::geometry::Rect;
    ///
    /// let rect = Rect::new(250.0, 0.0, 100.0, 12.0);
    /// assert_eq!(rect.center_x(), 300.0);
    /// ```
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Check whether the top-left corners of two rectangles lie strictly
    /// within `tolerance` of each other on both axes.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::geometry::Rect;
    ///
    /// let r1 = Rect::new(50.0, 100.0, 200.0, 80.0);
    /// let r2 = Rect::new(55.0, 108.0, 150.0, 40.0);
    /// let r3 = Rect::new(50.0, 110.0, 200.0, 80.0);
    ///
    /// assert!(r1.same_origin(&r2, 10.0));
    /// assert!(!r1.same_origin(&r3, 10.0));
    /// ```
    pub fn same_origin(&self, other: &Rect, tolerance: f32) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }

    /// Compute the union of this rectangle with another.
    ///
    /// Returns the smallest rectangle that contains both rectangles.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::geometry::Rect;
    ///
    /// let r1 = Rect::new(0.0, 0.0, 50.0, 50.0);
    /// let r2 = Rect::new(25.0, 25.0, 50.0, 50.0);
    /// let union = r1.union(&r2);
    ///
    /// assert_eq!(union.x, 0.0);
    /// assert_eq!(union.y, 0.0);
    /// assert_eq!(union.right(), 75.0);
    /// assert_eq!(union.bottom(), 75.0);
    /// ```
    pub fn union(&self, other: &Rect) -> Rect {
        let x0 = self.left().min(other.left());
        let y0 = self.top().min(other.top());
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Rect::from_points(x0, y0, x1, y1)
    }
}

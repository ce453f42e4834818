use std::f64::consts::PI;

use crate::geometry::primitives::Point;

/// Geometric primitive representing a circle, the cross-section of a pipe
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        debug_assert!(
            center.0.is_finite() && center.1.is_finite(),
            "invalid circle center: {center:?}"
        );
        Self { center, radius }
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// True if the circles are closer than `min_gap` to each other
    pub fn collides_with(&self, other: &Circle, min_gap: f64) -> bool {
        self.center.distance(&other.center) < self.radius + other.radius + min_gap
    }

    /// True if the circle lies within the rectangle `[0, width] x [0, height]`
    pub fn fits_in_rect(&self, width: f64, height: f64) -> bool {
        let Point(x, y) = self.center;
        x - self.radius >= 0.0
            && x + self.radius <= width
            && y - self.radius >= 0.0
            && y + self.radius <= height
    }

    /// True if the circle lies within `container`, keeping half of `min_gap` from its boundary
    pub fn fits_in_circle(&self, container: &Circle, min_gap: f64) -> bool {
        self.center.distance(&container.center) + self.radius + min_gap / 2.0 <= container.radius
    }
}

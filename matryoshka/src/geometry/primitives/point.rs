/// Geometric primitive representing a point, coordinates in mm
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    pub fn distance(&self, other: &Point) -> f64 {
        ((self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)).sqrt()
    }

    /// Point at `distance` from `self` in the direction of `angle` (radians)
    pub fn polar_offset(&self, distance: f64, angle: f64) -> Point {
        Point(self.0 + distance * angle.cos(), self.1 + distance * angle.sin())
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point(x, y)
    }
}

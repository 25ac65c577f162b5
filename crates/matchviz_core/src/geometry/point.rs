use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Field position in the dataset's native unit, origin at the centre spot.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default, JsonSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Integer coordinates produced by [`Point::round`], ready for a pixel grid.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Point) -> Point {
        self + other
    }

    pub fn scale(self, k: f64) -> Point {
        self * k
    }

    /// Round both coordinates to the nearest integer.
    ///
    /// Ties go to the even neighbour (`0.5 -> 0`, `1.5 -> 2`, `-2.5 -> -2`),
    /// so the result never depends on the sign of the half.
    pub fn round(self) -> GridPoint {
        GridPoint { x: self.x.round_ties_even() as i64, y: self.y.round_ties_even() as i64 }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point { x: self.x + other.x, y: self.y + other.y }
    }
}

/// Scalar offset applied to both axes.
impl Add<f64> for Point {
    type Output = Point;

    fn add(self, offset: f64) -> Point {
        Point { x: self.x + offset, y: self.y + offset }
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        Point { x: self.x * k, y: self.y * k }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

//! Coordinate and rectangle primitives for jacket layout
//!
//! All values are millimetres with the origin at the bottom-left corner of the
//! jacket, abscissa growing to the right and ordinate growing upwards.

use crate::types::CanvasError;
use std::cmp::Ordering;
use std::ops::Add;

/// Pair of Cartesian coordinates.
///
/// Ordering is lexicographic: abscissa first, ordinate breaks ties. The
/// derived `PartialOrd` follows field order, which gives exactly that.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Point {
    abscissa: f32,
    ordinate: f32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    pub const fn new(abscissa: f32, ordinate: f32) -> Self {
        Self { abscissa, ordinate }
    }

    /// Horizontal coordinate
    pub fn abscissa(&self) -> f32 {
        self.abscissa
    }

    /// Vertical coordinate
    pub fn ordinate(&self) -> f32 {
        self.ordinate
    }

    /// Both coordinates as `(abscissa, ordinate)`
    pub fn components(&self) -> (f32, f32) {
        (self.abscissa, self.ordinate)
    }

    /// Total order over all values, NaN included.
    pub fn compare(&self, other: &Point) -> Ordering {
        self.abscissa
            .total_cmp(&other.abscissa)
            .then_with(|| self.ordinate.total_cmp(&other.ordinate))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.abscissa + rhs.abscissa, self.ordinate + rhs.ordinate)
    }
}

impl From<(f32, f32)> for Point {
    fn from((abscissa, ordinate): (f32, f32)) -> Self {
        Point::new(abscissa, ordinate)
    }
}

impl From<Point> for (f32, f32) {
    fn from(point: Point) -> Self {
        point.components()
    }
}

/// Non-rotated rectangular drawing area.
///
/// Invariant: `origin < termination`, both corners are finite, and the
/// rectangle has strictly positive width and height. A canvas that only differs in one axis is rejected even
/// though it would pass the lexicographic comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    origin: Point,
    termination: Point,
}

impl Canvas {
    pub fn new(origin: Point, termination: Point) -> Result<Self, CanvasError> {
        let finite = origin.abscissa.is_finite()
            && origin.ordinate.is_finite()
            && termination.abscissa.is_finite()
            && termination.ordinate.is_finite();

        let spans_both_axes = termination.abscissa - origin.abscissa > 0.0
            && termination.ordinate - origin.ordinate > 0.0;

        let ordered = origin.partial_cmp(&termination) == Some(Ordering::Less);

        if !finite || !ordered || !spans_both_axes {
            return Err(CanvasError::Precondition {
                origin,
                termination,
            });
        }

        Ok(Self {
            origin,
            termination,
        })
    }

    /// Bottom-left corner
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Top-right corner
    pub fn termination(&self) -> Point {
        self.termination
    }

    pub fn width(&self) -> f32 {
        self.termination.abscissa - self.origin.abscissa
    }

    pub fn height(&self) -> f32 {
        self.termination.ordinate - self.origin.ordinate
    }

    /// Same rectangle moved by `offset`
    pub fn translate(&self, offset: Point) -> Canvas {
        Canvas {
            origin: self.origin + offset,
            termination: self.termination + offset,
        }
    }
}

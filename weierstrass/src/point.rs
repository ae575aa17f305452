//! Curve points in affine coordinates.

use core::fmt;
use num_bigint::BigUint;

/// Point on a short Weierstrass curve, or the point at infinity.
///
/// Points carry no reference to their curve: they are plain coordinate
/// values, and whether one lies on a particular curve is decided by
/// [`Curve::contains`](crate::Curve::contains). Two points with equal
/// coordinates are interchangeable.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Point {
    /// Additive identity of the group a.k.a. the point at infinity.
    #[default]
    Infinity,

    /// Affine point `(x, y)` with both coordinates in `[0, p)`.
    Affine {
        /// x-coordinate
        x: BigUint,

        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// Create an affine point from its coordinates.
    ///
    /// Use [`Curve::point`](crate::Curve::point) to also check the curve equation.
    pub fn new(x: impl Into<BigUint>, y: impl Into<BigUint>) -> Self {
        Self::Affine {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Is this point the point at infinity?
    pub fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    /// Borrow the affine x-coordinate, if any.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Self::Infinity => None,
            Self::Affine { x, .. } => Some(x),
        }
    }

    /// Borrow the affine y-coordinate, if any.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Self::Infinity => None,
            Self::Affine { y, .. } => Some(y),
        }
    }

    /// Borrow both affine coordinates, if any.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Self::Infinity => None,
            Self::Affine { x, y } => Some((x, y)),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infinity => f.write_str("point at infinity"),
            Self::Affine { x, y } => write!(f, "({x}, {y})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn infinity_equals_only_itself() {
        assert_eq!(Point::Infinity, Point::default());
        assert_ne!(Point::Infinity, Point::new(0u32, 0u32));
        assert!(Point::Infinity.coordinates().is_none());
    }

    #[test]
    fn coordinate_equality() {
        assert_eq!(Point::new(7u32, 455u32), Point::new(7u32, 455u32));
        assert_ne!(Point::new(7u32, 455u32), Point::new(7u32, 428u32));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(7u32, 455u32).to_string(), "(7, 455)");
        assert_eq!(Point::Infinity.to_string(), "point at infinity");
    }
}

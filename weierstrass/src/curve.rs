//! Short Weierstrass curves over a prime field: `y² = x³ + ax + b (mod p)`.

use crate::{
    Error, Point, Result,
    field::Modulus,
    lookup_table::CodeTable,
    order::OrderStrategy,
};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use once_cell::sync::OnceCell;

/// Elliptic curve in short Weierstrass form together with a generator point.
///
/// Curve parameters never change after construction. Derived data (the
/// generator's order and the byte encoding table) is computed on first use
/// and then shared read-only, so a `Curve` can be used from several threads
/// at once.
#[derive(Clone, Debug)]
pub struct Curve {
    /// Coefficient `a` in the curve equation, reduced mod `p`.
    a: BigUint,

    /// Coefficient `b` in the curve equation, reduced mod `p`.
    b: BigUint,

    /// Field modulus.
    modulus: Modulus,

    /// Base point of the curve.
    generator: Point,

    /// How point orders are determined.
    order_strategy: OrderStrategy,

    /// Upper bound on group additions for a naive order computation.
    iteration_limit: Option<u64>,

    /// Order of the generator, once known.
    pub(crate) generator_order: OnceCell<BigUint>,

    /// Byte encoding table, once built.
    pub(crate) code_table: OnceCell<CodeTable>,
}

impl Curve {
    /// Construct a curve from its coefficients, field modulus and generator.
    ///
    /// The parameters are checked eagerly: `p` must be odd and at least 3, the
    /// curve must be non-singular, and `generator` must be an affine point on
    /// the curve with coordinates in `[0, p)`. Primality of `p` is assumed.
    pub fn new(a: BigUint, b: BigUint, p: BigUint, generator: Point) -> Result<Self> {
        let modulus = Modulus::new(p)?;
        let a = modulus.reduce(&a);
        let b = modulus.reduce(&b);

        // 4a³ + 27b²
        let discriminant = modulus.add(
            &modulus.mul(&BigUint::from(4u32), &modulus.mul(&a, &modulus.square(&a))),
            &modulus.mul(&BigUint::from(27u32), &modulus.square(&b)),
        );

        if discriminant.is_zero() {
            return Err(Error::SingularCurve);
        }

        let curve = Self {
            a,
            b,
            modulus,
            generator,
            order_strategy: OrderStrategy::default(),
            iteration_limit: None,
            generator_order: OnceCell::new(),
            code_table: OnceCell::new(),
        };

        if curve.generator.is_infinity() {
            return Err(Error::IdentityPoint);
        }

        if !curve.contains(&curve.generator) {
            return Err(Error::NotOnCurve);
        }

        log::debug!(
            "curve y^2 = x^3 + {}x + {} mod {} with generator {}",
            curve.a,
            curve.b,
            curve.modulus.get(),
            curve.generator
        );

        Ok(curve)
    }

    /// Select how point orders are determined.
    pub fn with_order_strategy(mut self, strategy: OrderStrategy) -> Self {
        self.order_strategy = strategy;
        self.generator_order = OnceCell::new();
        self
    }

    /// Cap the number of group additions a naive order computation may take.
    pub fn with_iteration_limit(mut self, limit: u64) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Field modulus `p`.
    pub fn p(&self) -> &BigUint {
        self.modulus.get()
    }

    /// Field arithmetic for this curve.
    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    /// Base point of the curve.
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// Configured order strategy.
    pub fn order_strategy(&self) -> &OrderStrategy {
        &self.order_strategy
    }

    /// Configured iteration limit for naive order computation, if any.
    pub fn iteration_limit(&self) -> Option<u64> {
        self.iteration_limit
    }

    /// Returns `x³ + ax + b mod p`.
    fn equation_rhs(&self, x: &BigUint) -> BigUint {
        let m = &self.modulus;
        let x3 = m.mul(&m.square(x), x);
        m.add(&m.add(&x3, &m.mul(&self.a, x)), &self.b)
    }

    /// Does `point` lie on this curve?
    ///
    /// The point at infinity is always considered part of the curve.
    pub fn contains(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                x < self.p() && y < self.p() && self.modulus.square(y) == self.equation_rhs(x)
            }
        }
    }

    /// Create a point from its coordinates, checking that it is on the curve.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point> {
        let point = Point::Affine { x, y };

        if self.contains(&point) {
            Ok(point)
        } else {
            Err(Error::NotOnCurve)
        }
    }

    /// Returns `lhs + rhs` under the group law.
    ///
    /// Both points must lie on the curve.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Point {
        let m = &self.modulus;

        let ((x1, y1), (x2, y2)) = match (lhs.coordinates(), rhs.coordinates()) {
            (None, _) => return rhs.clone(),
            (_, None) => return lhs.clone(),
            (Some(l), Some(r)) => (l, r),
        };

        let same_x = m.reduce(x1) == m.reduce(x2);

        // inverses, which also covers doubling a point with y = 0
        if same_x && m.add(y1, y2).is_zero() {
            return Point::Infinity;
        }

        let slope = if same_x && m.reduce(y1) == m.reduce(y2) {
            let numerator = m.add(&m.mul(&BigUint::from(3u32), &m.square(x1)), &self.a);
            let denominator = m.add(y1, y1);
            m.mul(&numerator, &self.invert_denominator(&denominator))
        } else {
            let numerator = m.sub(y2, y1);
            let denominator = m.sub(x2, x1);
            m.mul(&numerator, &self.invert_denominator(&denominator))
        };

        let x3 = m.sub(&m.sub(&m.square(&slope), x1), x2);
        let y3 = m.sub(&m.mul(&slope, &m.sub(x1, &x3)), y1);
        Point::Affine { x: x3, y: y3 }
    }

    /// Slope denominators only vanish for inverse points, which `add` handles
    /// before dividing. Anything else means a point is off the curve or `p` is
    /// not prime.
    fn invert_denominator(&self, denominator: &BigUint) -> BigUint {
        self.modulus
            .invert(denominator)
            .expect("slope denominator must be invertible for points on the curve")
    }

    /// Returns `point + point`.
    pub fn double(&self, point: &Point) -> Point {
        self.add(point, point)
    }

    /// Returns `-point`, i.e. `(x, -y mod p)`.
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: self.modulus.neg(y),
            },
        }
    }

    /// Returns `lhs - rhs`.
    pub fn subtract(&self, lhs: &Point, rhs: &Point) -> Point {
        self.add(lhs, &self.negate(rhs))
    }

    /// Returns `scalar * point` by double-and-add, least significant bit first.
    pub fn multiply(&self, point: &Point, scalar: &BigUint) -> Point {
        let mut result = Point::Infinity;
        let mut base = point.clone();
        let bits = scalar.bits();

        for i in 0..bits {
            if scalar.bit(i) {
                result = self.add(&base, &result);
            }

            if i + 1 < bits {
                base = self.double(&base);
            }
        }

        result
    }

    /// Returns `scalar * G`.
    pub fn multiply_generator(&self, scalar: &BigUint) -> Point {
        self.multiply(&self.generator, scalar)
    }

    /// Returns every point with the given x-coordinate: none when `x³ + ax + b`
    /// is a non-residue, one when it is zero, otherwise `(x, y)` then `(x, p - y)`.
    pub fn points_for_x(&self, x: &BigUint) -> Result<Vec<Point>> {
        let x = self.modulus.reduce(x);

        let y = match self.modulus.sqrt(&self.equation_rhs(&x))? {
            Some(y) => y,
            None => return Ok(Vec::new()),
        };

        let neg_y = self.modulus.neg(&y);

        if y == neg_y {
            Ok(vec![Point::Affine { x, y }])
        } else {
            Ok(vec![
                Point::Affine { x: x.clone(), y },
                Point::Affine { x, y: neg_y },
            ])
        }
    }

    /// Recover the point with the given x-coordinate whose y-coordinate has
    /// the requested parity.
    pub fn decompress(&self, x: &BigUint, y_is_odd: bool) -> Result<Point> {
        self.points_for_x(x)?
            .into_iter()
            .find(|point| point.y().is_some_and(|y| y.is_odd() == y_is_odd))
            .ok_or(Error::NotOnCurve)
    }

    /// Enumerate every affine point on the curve, scanning `x` over `[0, p)`.
    ///
    /// Only practical for small demonstration curves.
    pub fn affine_points(&self) -> Result<Vec<Point>> {
        let mut points = Vec::new();
        let mut x = BigUint::zero();

        while &x < self.p() {
            points.extend(self.points_for_x(&x)?);
            x += 1u32;
        }

        Ok(points)
    }
}

impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a
            && self.b == other.b
            && self.modulus == other.modulus
            && self.generator == other.generator
    }
}

impl Eq for Curve {}

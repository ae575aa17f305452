//! Orders of points: the size of the cyclic subgroup a point generates.

use crate::{Curve, Error, Point, Result};
use num_bigint::BigUint;
use num_traits::One;

/// How [`Curve::order`] determines the order of a point.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum OrderStrategy {
    /// Count multiples of the point until the identity comes around again.
    ///
    /// Takes one group addition per element of the subgroup, so it is only
    /// usable on small demonstration curves.
    #[default]
    Naive,

    /// The generator's order is a known curve parameter.
    ///
    /// Any other point still falls back to counting.
    Known(BigUint),
}

impl Curve {
    /// Returns the order of the subgroup generated by `point`.
    ///
    /// The point at infinity has order 1.
    pub fn order(&self, point: &Point) -> Result<BigUint> {
        match self.order_strategy() {
            OrderStrategy::Known(order) if point == self.generator() => Ok(order.clone()),
            _ => self.naive_order(point),
        }
    }

    /// Returns the order of the generator, computing it at most once.
    pub fn generator_order(&self) -> Result<&BigUint> {
        self.generator_order
            .get_or_try_init(|| self.order(self.generator()))
    }

    /// Walk `0·P, 1·P, 2·P, ...` counting each multiple, including the identity
    /// at `t = 0`, until the identity shows up a second time.
    fn naive_order(&self, point: &Point) -> Result<BigUint> {
        let limit = self.iteration_limit();
        let mut order = BigUint::one();
        let mut multiple = point.clone();
        let mut additions = 0u64;

        while !multiple.is_infinity() {
            if limit.is_some_and(|limit| additions >= limit) {
                log::debug!("order of {point} not found within {additions} additions");
                return Err(Error::IterationLimit);
            }

            order += 1u32;
            multiple = self.add(&multiple, point);
            additions += 1;
        }

        log::debug!("order of {point} is {order}");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::OrderStrategy;
    use crate::{Curve, Error, Point};
    use num_bigint::BigUint;

    fn toy() -> Curve {
        Curve::new(7u32.into(), 11u32.into(), 883u32.into(), Point::new(7u32, 455u32)).unwrap()
    }

    #[test]
    fn naive_generator_order() {
        let curve = toy();
        let order = curve.order(curve.generator()).unwrap();

        assert_eq!(order, BigUint::from(832u32));
        assert_eq!(curve.multiply_generator(&order), Point::Infinity);
        assert_eq!(curve.generator_order().unwrap(), &order);
    }

    #[test]
    fn identity_has_order_one() {
        assert_eq!(toy().order(&Point::Infinity), Ok(BigUint::from(1u32)));
    }

    #[test]
    fn order_of_a_multiple() {
        let curve = toy();
        // 832 = 2^6 * 13
        let point = curve.multiply_generator(&64u32.into());
        assert_eq!(curve.order(&point), Ok(BigUint::from(13u32)));
    }

    #[test]
    fn known_order() {
        let curve = toy().with_order_strategy(OrderStrategy::Known(BigUint::from(832u32)));
        assert_eq!(curve.generator_order(), Ok(&BigUint::from(832u32)));

        // other points are still counted
        let point = curve.multiply_generator(&416u32.into());
        assert_eq!(curve.order(&point), Ok(BigUint::from(2u32)));
    }

    #[test]
    fn iteration_limit() {
        let curve = toy().with_iteration_limit(100);
        assert_eq!(curve.order(curve.generator()), Err(Error::IterationLimit));
        assert_eq!(curve.generator_order(), Err(Error::IterationLimit));

        let point = curve.multiply_generator(&64u32.into());
        assert_eq!(curve.order(&point), Ok(BigUint::from(13u32)));
    }
}

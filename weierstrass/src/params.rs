//! Named curve parameters.

use crate::{Curve, Point, Result, order::OrderStrategy};
use hex_literal::hex;
use num_bigint::BigUint;

/// Parameters for a named curve in short Weierstrass form.
///
/// Integers are big-endian byte strings.
pub trait NamedCurve {
    /// Human-readable curve name.
    const NAME: &'static str;

    /// Field modulus `p`.
    const MODULUS: &'static [u8];

    /// Coefficient `a` in the curve equation.
    const EQUATION_A: &'static [u8];

    /// Coefficient `b` in the curve equation.
    const EQUATION_B: &'static [u8];

    /// Generator point's affine coordinates: (x, y).
    const GENERATOR: (&'static [u8], &'static [u8]);

    /// Order of the generator, when it is too large to count.
    const ORDER: Option<&'static [u8]> = None;

    /// Construct the curve engine for these parameters.
    fn curve() -> Result<Curve> {
        let curve = Curve::new(
            BigUint::from_bytes_be(Self::EQUATION_A),
            BigUint::from_bytes_be(Self::EQUATION_B),
            BigUint::from_bytes_be(Self::MODULUS),
            Point::new(
                BigUint::from_bytes_be(Self::GENERATOR.0),
                BigUint::from_bytes_be(Self::GENERATOR.1),
            ),
        )?;

        log::debug!("loaded named curve {}", Self::NAME);

        Ok(match Self::ORDER {
            Some(order) => curve.with_order_strategy(OrderStrategy::Known(BigUint::from_bytes_be(order))),
            None => curve,
        })
    }
}

/// Small demonstration curve `y² = x³ + 7x + 11 (mod 883)`.
///
/// The generator `(7, 455)` generates the whole group of 832 points, which is
/// small enough to count naively and large enough to host the byte encoding.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Toy883;

impl NamedCurve for Toy883 {
    const NAME: &'static str = "toy883";
    const MODULUS: &'static [u8] = &hex!("0373");
    const EQUATION_A: &'static [u8] = &hex!("07");
    const EQUATION_B: &'static [u8] = &hex!("0b");
    const GENERATOR: (&'static [u8], &'static [u8]) = (&hex!("07"), &hex!("01c7"));
}

/// secp256k1 (K-256) as defined in SEC 2.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Secp256k1;

impl NamedCurve for Secp256k1 {
    const NAME: &'static str = "secp256k1";

    const MODULUS: &'static [u8] =
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");

    const EQUATION_A: &'static [u8] = &hex!("00");

    const EQUATION_B: &'static [u8] = &hex!("07");

    const GENERATOR: (&'static [u8], &'static [u8]) = (
        &hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"),
        &hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"),
    );

    const ORDER: Option<&'static [u8]> =
        Some(&hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"));
}

#[cfg(test)]
mod tests {
    use super::{NamedCurve, Secp256k1, Toy883};
    use crate::{OrderStrategy, Point};
    use hex_literal::hex;
    use num_bigint::BigUint;

    #[test]
    fn toy883() {
        let curve = Toy883::curve().unwrap();
        assert_eq!(curve.p(), &BigUint::from(883u32));
        assert_eq!(curve.generator(), &Point::new(7u32, 455u32));
        assert_eq!(curve.order_strategy(), &OrderStrategy::Naive);
    }

    #[test]
    fn secp256k1_double_generator() {
        let curve = Secp256k1::curve().unwrap();
        let expected = Point::new(
            BigUint::from_bytes_be(&hex!(
                "C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5"
            )),
            BigUint::from_bytes_be(&hex!(
                "1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A"
            )),
        );

        assert_eq!(curve.double(curve.generator()), expected);
    }

    #[test]
    fn secp256k1_known_order() {
        let curve = Secp256k1::curve().unwrap();
        let order = curve.generator_order().unwrap().clone();

        assert_eq!(curve.multiply_generator(&order), Point::Infinity);
        assert_eq!(
            curve.multiply_generator(&(&order - 1u32)),
            curve.negate(curve.generator())
        );
    }
}

//! Arithmetic modulo the curve's field prime.

mod sqrt;

pub use self::sqrt::sqrt_mod_p;

use crate::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_integer::{ExtendedGcd, Integer};
use num_traits::{One, Zero};

/// Field modulus `p`: an odd integer `>= 3` which all coordinates are reduced by.
///
/// Primality is assumed but not checked.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Modulus(BigUint);

impl Modulus {
    /// Wrap `p`, rejecting even moduli and anything smaller than 3.
    pub fn new(p: BigUint) -> Result<Self> {
        if p.is_even() || p < BigUint::from(3u32) {
            return Err(Error::DegenerateModulus);
        }

        Ok(Self(p))
    }

    /// Borrow the modulus as an integer.
    pub fn get(&self) -> &BigUint {
        &self.0
    }

    /// Returns `n mod p`.
    pub fn reduce(&self, n: &BigUint) -> BigUint {
        n % &self.0
    }

    /// Returns `lhs + rhs mod p`.
    pub fn add(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        (lhs + rhs) % &self.0
    }

    /// Returns `lhs - rhs mod p`.
    pub fn sub(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        self.add(lhs, &self.neg(rhs))
    }

    /// Returns `lhs * rhs mod p`.
    pub fn mul(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        (lhs * rhs) % &self.0
    }

    /// Returns `n * n mod p`.
    pub fn square(&self, n: &BigUint) -> BigUint {
        self.mul(n, n)
    }

    /// Returns `-n mod p`.
    pub fn neg(&self, n: &BigUint) -> BigUint {
        let n = self.reduce(n);

        if n.is_zero() { n } else { &self.0 - n }
    }

    /// Returns `base^exp mod p`.
    pub fn pow(&self, base: &BigUint, exp: &BigUint) -> BigUint {
        base.modpow(exp, &self.0)
    }

    /// Returns the multiplicative inverse of `n`, or `None` when `gcd(n, p) != 1`.
    pub fn invert(&self, n: &BigUint) -> Option<BigUint> {
        let p = BigInt::from(self.0.clone());
        let ExtendedGcd { gcd, x, .. } = BigInt::from(self.reduce(n)).extended_gcd(&p);

        if !gcd.is_one() {
            return None;
        }

        x.mod_floor(&p).to_biguint()
    }

    /// Returns a square root of `n`, `None` if `n` is a quadratic non-residue.
    pub fn sqrt(&self, n: &BigUint) -> Result<Option<BigUint>> {
        sqrt_mod_p(n, &self.0)
    }
}

impl AsRef<BigUint> for Modulus {
    fn as_ref(&self) -> &BigUint {
        &self.0
    }
}

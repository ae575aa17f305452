//! Modular square roots by repeated halving of the Euler exponent.
//!
//! Starting from Euler's criterion `r^((p-1)/2) ≡ 1`, the exponent is halved
//! for as long as the power stays at 1. If it never leaves 1 the root has a
//! closed form; otherwise a quadratic non-residue is used to correct the
//! remaining bits, which is Tonelli-Shanks without explicit bit indexing.

use super::Modulus;
use crate::{Error, Result};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Returns `x` such that `x² ≡ residue (mod p)`, or `None` if `residue` is a
/// quadratic non-residue.
///
/// `p` must be an odd prime. Even moduli (and moduli below 3) are rejected
/// with [`Error::DegenerateModulus`]. A residue divisible by `p` has the single
/// root 0.
pub fn sqrt_mod_p(residue: &BigUint, p: &BigUint) -> Result<Option<BigUint>> {
    if p.is_even() || p < &BigUint::from(3u32) {
        return Err(Error::DegenerateModulus);
    }

    let residue = residue % p;
    if residue.is_zero() {
        return Ok(Some(residue));
    }

    let one = BigUint::one();
    let mut q = (p - 1u32) >> 1;

    if residue.modpow(&q, p) != one {
        return Ok(None);
    }

    while q.is_even() {
        q >>= 1;

        if residue.modpow(&q, p) != one {
            return correct_with_non_residue(&residue, q, p).map(Some);
        }
    }

    // residue^q ≡ 1 with q odd, so residue^((q+1)/2) squares to residue
    let q = (q + 1u32) >> 1;
    Ok(Some(residue.modpow(&q, p)))
}

/// General branch, entered with `residue^q ≡ -1 (mod p)`.
///
/// Keeps `residue^q ≡ a^t` while halving both exponents, flipping the sign of
/// `a^t` by adding `(p-1)/2` to `t` whenever the halves disagree.
fn correct_with_non_residue(residue: &BigUint, mut q: BigUint, p: &BigUint) -> Result<BigUint> {
    let a = find_non_residue(p).ok_or(Error::NoQuadraticNonResidue)?;
    let half: BigUint = (p - 1u32) >> 1;
    let mut t = half.clone();

    while q.is_even() {
        q >>= 1;
        t >>= 1;

        if residue.modpow(&q, p) != a.modpow(&t, p) {
            t += &half;
        }
    }

    let inverse = Modulus::new(p.clone())?
        .invert(residue)
        .ok_or(Error::DegenerateModulus)?;

    let q = (q - 1u32) >> 1;
    t >>= 1;

    Ok((inverse.modpow(&q, p) * a.modpow(&t, p)) % p)
}

/// Smallest `a >= 2` with `a^((p-1)/2) ≢ 1 (mod p)`.
///
/// Always found for an odd prime; `None` is a defensive guard against
/// moduli for which no such value exists below `p`.
fn find_non_residue(p: &BigUint) -> Option<BigUint> {
    let one = BigUint::one();
    let half = (p - 1u32) >> 1;
    let mut a = BigUint::from(2u32);

    while &a < p {
        if a.modpow(&half, p) != one {
            return Some(a);
        }

        a += 1u32;
    }

    None
}

//! Scalar sampling.

use crate::{Error, Result};
use num_bigint::BigUint;
use rand_core::CryptoRng;

#[cfg(feature = "os_rng")]
use rand_core::{OsRng, TryRngCore};

/// Returns a uniformly random integer in `[1, n-1]`.
///
/// Candidates with the bit length of `n - 1` are drawn from `rng` and rejected
/// until one falls in `[0, n-2]`, which is then shifted up by one. Rejection
/// (rather than reducing modulo the bound) keeps small values from being
/// favoured.
pub fn random_scalar<R: CryptoRng + ?Sized>(rng: &mut R, n: &BigUint) -> Result<BigUint> {
    if n < &BigUint::from(2u32) {
        return Err(Error::InvalidScalar);
    }

    let bound = n - 1u32;
    let bits = bound.bits();
    let len = bits.div_ceil(8) as usize;
    let mask = 0xffu8 >> (len as u64 * 8 - bits);
    let mut bytes = vec![0u8; len];

    loop {
        rng.fill_bytes(&mut bytes);
        bytes[0] &= mask;

        let candidate = BigUint::from_bytes_be(&bytes);
        if candidate < bound {
            return Ok(candidate + 1u32);
        }
    }
}

/// Returns a uniformly random integer in `[1, n-1]` drawn from the operating
/// system's cryptographically secure random number generator.
///
/// # Panics
///
/// If the operating system RNG fails.
#[cfg(feature = "os_rng")]
pub fn random_scalar_from_os_rng(n: &BigUint) -> Result<BigUint> {
    random_scalar(&mut OsRng.unwrap_err(), n)
}

#[cfg(test)]
mod tests {
    use super::random_scalar;
    use crate::Error;
    use num_bigint::BigUint;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    #[test]
    fn stays_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(883);

        for n in [2u32, 3, 17, 255, 256, 257, 832] {
            let n = BigUint::from(n);
            for _ in 0..200 {
                let k = random_scalar(&mut rng, &n).unwrap();
                assert!(k >= BigUint::from(1u32));
                assert!(k < n);
            }
        }
    }

    #[test]
    fn covers_whole_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let n = BigUint::from(6u32);
        let mut seen = [0usize; 6];

        for _ in 0..1000 {
            let k = random_scalar(&mut rng, &n).unwrap();
            seen[k.to_u32_digits().first().copied().unwrap_or(0) as usize] += 1;
        }

        assert_eq!(seen[0], 0);
        // 200 expected per value
        assert!(seen[1..].iter().all(|&count| count > 120), "{seen:?}");
    }

    #[test]
    fn two_only_yields_one() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let n = BigUint::from(2u32);

        for _ in 0..32 {
            assert_eq!(random_scalar(&mut rng, &n).unwrap(), BigUint::from(1u32));
        }
    }

    #[test]
    fn rejects_tiny_bounds() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);

        for n in [0u32, 1] {
            assert_eq!(
                random_scalar(&mut rng, &BigUint::from(n)),
                Err(Error::InvalidScalar)
            );
        }
    }

    #[test]
    fn wide_bound() {
        let mut rng = ChaCha20Rng::seed_from_u64(256);
        let n = (BigUint::from(1u32) << 256u32) - 1u32;

        for _ in 0..16 {
            let k = random_scalar(&mut rng, &n).unwrap();
            assert!(k < n);
        }
    }
}

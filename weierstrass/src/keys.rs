//! Secret and public keys: private scalars and the points they generate.

use crate::{Curve, Error, Point, Result, scalar::random_scalar};
use core::fmt;
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRng;

#[cfg(feature = "os_rng")]
use rand_core::{OsRng, TryRngCore};

/// Secret key: a scalar `d` in `[1, n-1]`, where `n` is the generator's order.
///
/// Its `Debug` output never includes the scalar.
#[derive(Clone, Eq, PartialEq)]
pub struct SecretKey {
    scalar: BigUint,
}

impl SecretKey {
    /// Generate a random secret key.
    pub fn random<R: CryptoRng + ?Sized>(curve: &Curve, rng: &mut R) -> Result<Self> {
        let scalar = random_scalar(rng, curve.generator_order()?)?;
        Ok(Self { scalar })
    }

    /// Generate a secret key using the operating system's cryptographically
    /// secure random number generator.
    ///
    /// # Panics
    ///
    /// If the operating system RNG fails.
    #[cfg(feature = "os_rng")]
    pub fn generate(curve: &Curve) -> Result<Self> {
        Self::random(curve, &mut OsRng.unwrap_err())
    }

    /// Wrap an existing scalar, checking that it lies in `[1, n-1]`.
    pub fn from_scalar(curve: &Curve, scalar: BigUint) -> Result<Self> {
        if scalar.is_zero() || &scalar >= curve.generator_order()? {
            return Err(Error::InvalidScalar);
        }

        Ok(Self { scalar })
    }

    /// Expose the secret scalar.
    pub fn as_scalar(&self) -> &BigUint {
        &self.scalar
    }

    /// Compute the matching public key `d·G`.
    pub fn public_key(&self, curve: &Curve) -> PublicKey {
        PublicKey {
            point: curve.multiply_generator(&self.scalar),
        }
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

/// Public key: a non-identity point on the curve.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PublicKey {
    point: Point,
}

impl PublicKey {
    /// Validate a point received from a peer.
    pub fn from_point(curve: &Curve, point: Point) -> Result<Self> {
        if point.is_infinity() {
            return Err(Error::IdentityPoint);
        }

        if !curve.contains(&point) {
            return Err(Error::NotOnCurve);
        }

        Ok(Self { point })
    }

    /// Borrow the public point.
    pub fn as_point(&self) -> &Point {
        &self.point
    }
}

impl AsRef<Point> for PublicKey {
    fn as_ref(&self) -> &Point {
        &self.point
    }
}

impl From<PublicKey> for Point {
    fn from(public_key: PublicKey) -> Point {
        public_key.point
    }
}

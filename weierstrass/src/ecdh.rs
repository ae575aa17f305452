//! Elliptic Curve Diffie-Hellman key agreement.
//!
//! Both parties multiply the peer's public point by their own secret scalar;
//! the x-coordinate of the resulting point `da·db·G` is the shared secret.

use crate::{Curve, Error, PublicKey, Result, SecretKey};
use core::fmt;
use num_bigint::BigUint;

/// Shared secret value computed via ECDH key agreement.
#[derive(Clone, Eq, PartialEq)]
pub struct SharedSecret {
    /// x-coordinate of the shared point
    x: BigUint,
}

impl SharedSecret {
    /// Shared secret as an integer: the x-coordinate of the shared point.
    ///
    /// This value is not uniformly random and should be passed through a
    /// key derivation function before use as a symmetric key.
    pub fn raw_secret(&self) -> &BigUint {
        &self.x
    }

    /// Big-endian bytes of [`SharedSecret::raw_secret`].
    pub fn raw_secret_bytes(&self) -> Vec<u8> {
        self.x.to_bytes_be()
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret").finish_non_exhaustive()
    }
}

/// Compute the shared secret between `secret` and a peer's `public_key`.
///
/// Fails with [`Error::IdentityPoint`] if the product is the point at
/// infinity, which can only happen when the peer's point lies in a subgroup
/// whose order divides the secret scalar.
pub fn diffie_hellman(
    curve: &Curve,
    secret: &SecretKey,
    public_key: &PublicKey,
) -> Result<SharedSecret> {
    curve
        .multiply(public_key.as_point(), secret.as_scalar())
        .x()
        .map(|x| SharedSecret { x: x.clone() })
        .ok_or(Error::IdentityPoint)
}

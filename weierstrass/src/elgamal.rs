//! ElGamal encryption of byte strings, one point pair per byte.
//!
//! Each byte `m` is encoded as a point `M` and encrypted under the
//! recipient's public point `Q` with a fresh scalar `k`:
//!
//! ```text
//! C = k·G
//! D = M + k·Q
//! ```
//!
//! The recipient, holding `d` with `Q = d·G`, recovers `M = D - d·C`.

use crate::{Curve, Error, Point, Result, scalar::random_scalar};
use num_bigint::BigUint;
use rand_core::CryptoRng;

#[cfg(feature = "os_rng")]
use rand_core::{OsRng, TryRngCore};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Ciphertext of a single byte.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct EncryptedByte {
    /// `C = k·G`
    pub ephemeral: Point,

    /// `D = M + k·Q`
    pub masked: Point,
}

/// Ciphertext of a byte string, positionally matching the plaintext.
pub type Ciphertext = Vec<EncryptedByte>;

impl Curve {
    /// Encrypt `plaintext` for the holder of `recipient`'s private scalar.
    ///
    /// Ephemeral scalars are drawn from `rng` in order, one per byte, before
    /// any point arithmetic happens.
    pub fn encrypt_with_rng<R: CryptoRng + ?Sized>(
        &self,
        plaintext: &[u8],
        recipient: &Point,
        rng: &mut R,
    ) -> Result<Ciphertext> {
        self.check_recipient(recipient)?;

        let order = self.generator_order()?;
        let scalars = plaintext
            .iter()
            .map(|_| random_scalar(&mut *rng, order))
            .collect::<Result<Vec<_>>>()?;

        // shared by every byte below
        self.code_table()?;

        #[cfg(not(feature = "parallel"))]
        let pairs = plaintext.iter().zip(&scalars);
        #[cfg(feature = "parallel")]
        let pairs = plaintext.par_iter().zip(&scalars);

        pairs
            .map(|(&byte, k)| self.encrypt_byte_with_scalar(byte, recipient, k))
            .collect()
    }

    /// Encrypt `plaintext` using the operating system's RNG.
    ///
    /// # Panics
    ///
    /// If the operating system RNG fails.
    #[cfg(feature = "os_rng")]
    pub fn encrypt(&self, plaintext: &[u8], recipient: &Point) -> Result<Ciphertext> {
        self.encrypt_with_rng(plaintext, recipient, &mut OsRng.unwrap_err())
    }

    /// Encrypt a single byte.
    pub fn encrypt_byte<R: CryptoRng + ?Sized>(
        &self,
        byte: u8,
        recipient: &Point,
        rng: &mut R,
    ) -> Result<EncryptedByte> {
        self.check_recipient(recipient)?;
        let k = random_scalar(rng, self.generator_order()?)?;
        self.encrypt_byte_with_scalar(byte, recipient, &k)
    }

    fn encrypt_byte_with_scalar(
        &self,
        byte: u8,
        recipient: &Point,
        k: &BigUint,
    ) -> Result<EncryptedByte> {
        let message = self.encode(byte)?;
        let ephemeral = self.multiply_generator(k);
        let masked = self.add(&message, &self.multiply(recipient, k));
        Ok(EncryptedByte { ephemeral, masked })
    }

    /// Decrypt `ciphertext` with the recipient's private scalar.
    pub fn decrypt(&self, ciphertext: &[EncryptedByte], secret: &BigUint) -> Result<Vec<u8>> {
        // shared by every byte below
        self.code_table()?;

        #[cfg(not(feature = "parallel"))]
        let pairs = ciphertext.iter();
        #[cfg(feature = "parallel")]
        let pairs = ciphertext.par_iter();

        pairs
            .map(|encrypted| self.decrypt_byte(encrypted, secret))
            .collect()
    }

    /// Decrypt a single byte.
    ///
    /// Points that are not on the curve are rejected with
    /// [`Error::NotOnCurve`]; a well-formed pair that does not decrypt to a
    /// table entry yields [`Error::UnmappableByte`].
    pub fn decrypt_byte(&self, encrypted: &EncryptedByte, secret: &BigUint) -> Result<u8> {
        if !self.contains(&encrypted.ephemeral) || !self.contains(&encrypted.masked) {
            return Err(Error::NotOnCurve);
        }

        let shared = self.multiply(&encrypted.ephemeral, secret);
        self.decode(&self.subtract(&encrypted.masked, &shared))
    }

    fn check_recipient(&self, recipient: &Point) -> Result<()> {
        if recipient.is_infinity() {
            Err(Error::IdentityPoint)
        } else if !self.contains(recipient) {
            Err(Error::NotOnCurve)
        } else {
            Ok(())
        }
    }
}

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

pub mod ecdh;
pub mod elgamal;
pub mod field;
pub mod params;

mod curve;
mod error;
mod keys;
mod lookup_table;
mod order;
mod point;
mod scalar;

pub use crate::{
    curve::Curve,
    elgamal::{Ciphertext, EncryptedByte},
    error::{Error, Result},
    field::sqrt_mod_p,
    keys::{PublicKey, SecretKey},
    lookup_table::CodeTable,
    order::OrderStrategy,
    params::{NamedCurve, Secp256k1, Toy883},
    point::Point,
    scalar::random_scalar,
};
pub use num_bigint::{self, BigUint};
pub use rand_core;

#[cfg(feature = "os_rng")]
pub use crate::scalar::random_scalar_from_os_rng;

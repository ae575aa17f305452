//! Error types.

use core::fmt::{self, Display};

/// Elliptic curve arithmetic and encryption errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Modulus is even (or smaller than 3), so no square root algorithm applies.
    DegenerateModulus,

    /// No quadratic non-residue exists below the modulus.
    ///
    /// Unreachable for an odd prime; seeing it means the modulus is not prime.
    NoQuadraticNonResidue,

    /// Coordinates (or a bare x-coordinate) do not describe a point on the curve.
    NotOnCurve,

    /// The curve equation is singular: `4a³ + 27b² ≡ 0 (mod p)`.
    SingularCurve,

    /// A decrypted point has no byte associated with it in the code table.
    UnmappableByte,

    /// The generator's subgroup is too small to host all 256 byte encodings.
    SubgroupTooSmall,

    /// The naive order computation exceeded its configured iteration limit.
    IterationLimit,

    /// A scalar (or scalar bound) is outside of its permitted range.
    InvalidScalar,

    /// An operation produced or was given the point at infinity where an
    /// affine point is required.
    IdentityPoint,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DegenerateModulus => "modulus must be an odd prime",
            Self::NoQuadraticNonResidue => "no quadratic non-residue found for modulus",
            Self::NotOnCurve => "point is not on the curve",
            Self::SingularCurve => "curve is singular",
            Self::UnmappableByte => "point does not have an associated byte",
            Self::SubgroupTooSmall => "generator subgroup has fewer than 256 non-identity points",
            Self::IterationLimit => "order computation exceeded its iteration limit",
            Self::InvalidScalar => "scalar out of range",
            Self::IdentityPoint => "unexpected point at infinity",
        })
    }
}

impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;

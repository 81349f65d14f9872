use num_bigint_dig::BigInt;

use crate::point::Point;

/// Why a set of curve parameters was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{name} must be an integer, got {value:?}")]
    NonIntegral { name: &'static str, value: String },
    #[error("modulus must be greater than or equal to 2, got {0}")]
    ModulusTooSmall(BigInt),
    #[error("only prime moduli are supported, {0} is composite")]
    NonPrimeModulus(BigInt),
    #[error("curve cannot have a characteristic of {0}")]
    DisallowedCharacteristic(BigInt),
    #[error("invalid a = {a} and/or b = {b}: discriminant is zero mod {p}")]
    SingularCurve { a: BigInt, b: BigInt, p: BigInt },
}

/// Discriminant of [`ValidationError`], for callers that branch on the kind
/// and print the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    NonIntegral,
    ModulusTooSmall,
    NonPrimeModulus,
    DisallowedCharacteristic,
    SingularCurve,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::NonIntegral { .. } => ValidationErrorKind::NonIntegral,
            ValidationError::ModulusTooSmall(_) => ValidationErrorKind::ModulusTooSmall,
            ValidationError::NonPrimeModulus(_) => ValidationErrorKind::NonPrimeModulus,
            ValidationError::DisallowedCharacteristic(_) => {
                ValidationErrorKind::DisallowedCharacteristic
            }
            ValidationError::SingularCurve { .. } => ValidationErrorKind::SingularCurve,
        }
    }
}

/// Misuse of the group law.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    #[error("point {0} does not lie on the curve")]
    PointNotOnCurve(Point),
}

use std::fmt;
use std::str::FromStr;

use num_bigint_dig::BigInt;
use num_traits::{One, Signed, Zero};

use crate::arith::{is_prime, reduce};
use crate::error::ValidationError;

/// Parameters of a short Weierstrass curve `y² = x³ + ax + b` over `𝔽_p`.
///
/// Only constructible through validation, so every value held is a
/// nonsingular curve over a prime field of characteristic > 3. The
/// coefficients are kept as given; arithmetic reduces them mod `p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParameters {
    p: BigInt,
    a: BigInt,
    b: BigInt,
}

impl CurveParameters {
    /// Validates `(p, a, b)`. Checks run in a fixed order and the first
    /// failing one is reported.
    pub fn new(p: BigInt, a: BigInt, b: BigInt) -> Result<Self, ValidationError> {
        if p < BigInt::from(2) {
            return Err(ValidationError::ModulusTooSmall(p));
        }
        if !is_prime(&p) {
            return Err(ValidationError::NonPrimeModulus(p));
        }
        if p == BigInt::from(2) || p == BigInt::from(3) {
            return Err(ValidationError::DisallowedCharacteristic(p));
        }

        let curve = Self { p, a, b };
        if curve.discriminant().is_zero() {
            return Err(ValidationError::SingularCurve {
                a: curve.a,
                b: curve.b,
                p: curve.p,
            });
        }

        Ok(curve)
    }

    /// Parses decimal strings, then validates as [`CurveParameters::new`].
    pub fn from_strs(p: &str, a: &str, b: &str) -> Result<Self, ValidationError> {
        Self::new(
            parse_integer("modulus", p)?,
            parse_integer("a", a)?,
            parse_integer("b", b)?,
        )
    }

    pub fn p(&self) -> &BigInt {
        &self.p
    }

    pub fn a(&self) -> &BigInt {
        &self.a
    }

    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// `-16(4a³ + 27b²) mod p`.
    pub fn discriminant(&self) -> BigInt {
        let a3 = &self.a * &self.a * &self.a;
        let b2 = &self.b * &self.b;
        let d = BigInt::from(-16) * (BigInt::from(4) * a3 + BigInt::from(27) * b2);
        reduce(&d, &self.p)
    }

    /// Right-hand side `x³ + ax + b mod p`.
    pub fn rhs(&self, x: &BigInt) -> BigInt {
        reduce(&(x * x * x + &self.a * x + &self.b), &self.p)
    }

    /// Whether `(x, y)` satisfies the curve equation.
    pub fn is_on_curve(&self, x: &BigInt, y: &BigInt) -> bool {
        reduce(&(y * y), &self.p) == self.rhs(x)
    }
}

fn parse_integer(name: &'static str, value: &str) -> Result<BigInt, ValidationError> {
    BigInt::from_str(value.trim()).map_err(|_| ValidationError::NonIntegral {
        name,
        value: value.to_owned(),
    })
}

/// Renders the curve equation, e.g. `y² ≡ x³ + x + 1 (mod 5)`.
impl fmt::Display for CurveParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y\u{b2} \u{2261} x\u{b3}")?;

        if !self.a.is_zero() {
            let sign = if self.a.is_negative() { '-' } else { '+' };
            let magnitude = self.a.abs();
            if magnitude.is_one() {
                write!(f, " {} x", sign)?;
            } else {
                write!(f, " {} {}x", sign, magnitude)?;
            }
        }

        if !self.b.is_zero() {
            let sign = if self.b.is_negative() { '-' } else { '+' };
            write!(f, " {} {}", sign, self.b.abs())?;
        }

        write!(f, " (mod {})", self.p)
    }
}

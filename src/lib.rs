//! Point groups of short Weierstrass curves `y² = x³ + ax + b` over small
//! prime fields.
//!
//! Everything is brute force: the point set is enumerated by trying every
//! `x`, scalar multiples are repeated additions and the order of a point is
//! the length of its orbit. Arithmetic is not constant time.
//!
//! ```
//! use ecc_group::{CurveParameters, EllipticCurve, Point};
//! use num_bigint_dig::BigInt;
//!
//! let params = CurveParameters::new(BigInt::from(5), BigInt::from(1), BigInt::from(1)).unwrap();
//! let curve = EllipticCurve::new(params);
//!
//! let p = Point::new(BigInt::from(0), BigInt::from(1));
//! assert_eq!(curve.group_order(), 9);
//! assert_eq!(curve.order(&p).unwrap(), 9);
//! ```

pub mod arith;
pub mod curve;
pub mod error;
pub mod group;
pub mod point;

pub use curve::CurveParameters;
pub use error::{GroupError, ValidationError, ValidationErrorKind};
pub use group::{EllipticCurve, Orbit};
pub use point::{Point, PointSet};

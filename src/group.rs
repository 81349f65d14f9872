//! Group law on the points of a short Weierstrass curve.
//!
//! Chord-and-tangent addition in affine coordinates:
//! - `P ≠ Q`: `λ = (y₂ - y₁) / (x₂ - x₁)`
//! - `P = Q`: `λ = (3x₁² + a) / 2y₁`
//! - `x₃ = λ² - x₁ - x₂`, `y₃ = -(λx₃ + y₁ - λx₁)`
//!
//! A zero denominator means the line through the operands is vertical, so
//! they are each other's negative and the sum is the identity.

use std::iter::FusedIterator;

use bitvec::prelude::*;
use num_bigint_dig::{BigInt, BigUint};

use crate::arith::{mod_inverse, reduce};
use crate::curve::CurveParameters;
use crate::error::GroupError;
use crate::point::{Point, PointSet};

/// A validated curve together with its enumerated point set.
#[derive(Debug, Clone)]
pub struct EllipticCurve {
    params: CurveParameters,
    points: PointSet,
}

impl EllipticCurve {
    pub fn new(params: CurveParameters) -> Self {
        let points = PointSet::enumerate(&params);
        Self { params, points }
    }

    pub fn params(&self) -> &CurveParameters {
        &self.params
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// `|E(𝔽_p)|`, identity included.
    pub fn group_order(&self) -> usize {
        self.points.len()
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.is_identity() || self.points.contains(point)
    }

    /// `-P` on this curve.
    pub fn negate(&self, point: &Point) -> Point {
        point.negate(self.params.p())
    }

    /// `P + Q`. Both operands must be points of this curve.
    pub fn add(&self, p1: &Point, p2: &Point) -> Result<Point, GroupError> {
        self.check(p1)?;
        self.check(p2)?;

        Ok(self.add_members(p1, p2))
    }

    /// Adds `base` to `start` `k` times. `k = 0` gives back `start`.
    pub fn multiply(&self, base: &Point, start: &Point, k: u64) -> Result<Point, GroupError> {
        let mut point = start.clone();
        for _ in 0..k {
            point = self.add(&point, base)?;
        }

        Ok(point)
    }

    /// `kP` by double-and-add over the bits of `k`, least significant first.
    ///
    /// Agrees with `multiply(P, O, k)` but takes `O(log k)` additions.
    pub fn scalar_mul(&self, point: &Point, k: &BigUint) -> Result<Point, GroupError> {
        self.check(point)?;

        let mut output = Point::Identity;
        let mut scaler = point.clone();
        let k_bytes = k.to_bytes_le();
        let bits = k_bytes.view_bits::<Lsb0>();

        for bit in bits {
            if *bit {
                output = self.add_members(&output, &scaler);
            }
            scaler = self.add_members(&scaler, &scaler);
        }

        Ok(output)
    }

    /// The multiples `P, 2P, 3P, …` ending with the identity.
    ///
    /// The sequence is recomputed on every call. Its length is the order of
    /// `start`; the orbit of the identity is just `[O]`.
    pub fn generate_orbit(&self, start: &Point) -> Result<Orbit<'_>, GroupError> {
        self.check(start)?;

        Ok(Orbit {
            curve: self,
            start: start.clone(),
            next: Some(start.clone()),
        })
    }

    /// Smallest `k ≥ 1` with `kP = O`.
    pub fn order(&self, point: &Point) -> Result<usize, GroupError> {
        Ok(self.generate_orbit(point)?.count())
    }

    fn check(&self, point: &Point) -> Result<(), GroupError> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(GroupError::PointNotOnCurve(point.clone()))
        }
    }

    /// Group law for operands already known to be on the curve.
    fn add_members(&self, p1: &Point, p2: &Point) -> Point {
        let ((x1, y1), (x2, y2)) = match (p1, p2) {
            (Point::Identity, _) => return p2.clone(),
            (_, Point::Identity) => return p1.clone(),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        let p = self.params.p();
        let inverse = if p1 == p2 {
            mod_inverse(&(BigInt::from(2) * y1), p)
                .map(|inv| (BigInt::from(3) * x1 * x1 + self.params.a()) * inv)
        } else {
            mod_inverse(&(x2 - x1), p).map(|inv| (y2 - y1) * inv)
        };

        let slope = match inverse {
            Some(slope) => reduce(&slope, p),
            None => return Point::Identity,
        };

        let intercept = y1 - &slope * x1;
        let x3 = reduce(&(&slope * &slope - x1 - x2), p);
        let y3 = reduce(&(-(&slope * &x3 + intercept)), p);

        Point::new(x3, y3)
    }
}

/// Lazy orbit of a point under repeated addition; see
/// [`EllipticCurve::generate_orbit`].
#[derive(Debug, Clone)]
pub struct Orbit<'a> {
    curve: &'a EllipticCurve,
    start: Point,
    next: Option<Point>,
}

impl Iterator for Orbit<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let current = self.next.take()?;
        if !current.is_identity() {
            self.next = Some(self.curve.add_members(&current, &self.start));
        }

        Some(current)
    }
}

impl FusedIterator for Orbit<'_> {}

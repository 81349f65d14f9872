use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

use num_bigint_dig::BigInt;
use num_traits::{One, Zero};

use crate::arith::{make_positive, modular_square_roots};
use crate::curve::CurveParameters;

/// An element of the curve group: the point at infinity or an affine pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Point {
    /// Point at infinity, the neutral element.
    Identity,
    Affine { x: BigInt, y: BigInt },
}

impl Point {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Point::Affine { x, y }
    }

    pub fn identity() -> Self {
        Point::Identity
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// `-P`, i.e. `(x, -y mod p)`. The identity is its own negative.
    pub fn negate(&self, p: &BigInt) -> Self {
        match self {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: make_positive(-y % p, p),
            },
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Identity => write!(f, "O"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}

/// Carrier set of the curve group: the identity and every affine solution.
///
/// Ordered so that iteration is deterministic, identity first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSet {
    points: BTreeSet<Point>,
}

impl PointSet {
    /// Brute-forces the curve: for each `x` in `[0, p)` every square root of
    /// `x³ + ax + b` gives a point.
    pub fn enumerate(params: &CurveParameters) -> Self {
        let mut points = BTreeSet::new();
        points.insert(Point::Identity);

        let mut x = BigInt::zero();
        while x < *params.p() {
            for y in modular_square_roots(&params.rhs(&x), params.p()) {
                points.insert(Point::new(x.clone(), y));
            }
            x += BigInt::one();
        }

        Self { points }
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    /// Number of points including the identity, i.e. the group order.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true: the identity is always present.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Point> {
        self.points.iter()
    }

    /// Affine points only.
    pub fn affine(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter().filter(|point| !point.is_identity())
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = btree_set::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: i64, y: i64) -> Point {
        Point::new(BigInt::from(x), BigInt::from(y))
    }

    fn curve(p: i64, a: i64, b: i64) -> CurveParameters {
        CurveParameters::new(BigInt::from(p), BigInt::from(a), BigInt::from(b)).unwrap()
    }

    #[test]
    fn enumerates_small_curve() {
        let points = PointSet::enumerate(&curve(5, 1, 1));

        let expected = vec![
            Point::Identity,
            point(0, 1),
            point(0, 4),
            point(2, 1),
            point(2, 4),
            point(3, 1),
            point(3, 4),
            point(4, 2),
            point(4, 3),
        ];
        assert_eq!(points.iter().cloned().collect::<Vec<_>>(), expected);
        assert_eq!(points.len(), 9);
    }

    #[test]
    fn every_affine_point_is_on_curve() {
        let params = curve(97, 2, 3);
        let points = PointSet::enumerate(&params);

        assert!(points.contains(&Point::Identity));
        for p in points.affine() {
            match p {
                Point::Affine { x, y } => {
                    assert!(*x >= BigInt::zero() && x < params.p());
                    assert!(*y >= BigInt::zero() && y < params.p());
                    assert!(params.is_on_curve(x, y));
                }
                Point::Identity => unreachable!(),
            }
        }
        assert_eq!(points.affine().count() + 1, points.len());
    }

    #[test]
    fn unreduced_coefficients_give_same_points() {
        let reduced = PointSet::enumerate(&curve(13, 2, 5));
        let unreduced = PointSet::enumerate(&curve(13, 2 + 13 * 4, 5 - 13));
        assert_eq!(reduced, unreduced);
    }

    #[test]
    fn two_torsion_point_has_single_root() {
        // x³ + x vanishes at x = 0, so (0, 0) is on the curve exactly once.
        let points = PointSet::enumerate(&curve(7, 1, 0));
        let on_axis: Vec<_> = points
            .affine()
            .filter(|p| matches!(p, Point::Affine { y, .. } if y.is_zero()))
            .collect();
        assert_eq!(on_axis, vec![&point(0, 0)]);
    }

    #[test]
    fn negation() {
        let p = BigInt::from(5);
        assert_eq!(point(0, 1).negate(&p), point(0, 4));
        assert_eq!(point(3, 0).negate(&p), point(3, 0));
        assert_eq!(Point::Identity.negate(&p), Point::Identity);
    }

    #[test]
    fn display() {
        assert_eq!(point(4, 2).to_string(), "(4, 2)");
        assert_eq!(Point::identity().to_string(), "O");
    }
}

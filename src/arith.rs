//! Modular arithmetic over a prime field `𝔽_p`.
//!
//! These helpers work on arbitrary-precision integers but are written for
//! small demonstration primes: the square root search is a linear scan.

use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::{BigInt, BigUint, ModInverse, ToBigUint};
use num_traits::{One, Zero};

/// Miller-Rabin rounds on top of the Baillie-PSW check `probably_prime` runs.
const PRIMALITY_ROUNDS: usize = 20;

/// Returns `true` if `n` is prime. Anything below 2 is not.
pub fn is_prime(n: &BigInt) -> bool {
    if *n < BigInt::from(2) {
        return false;
    }

    match n.to_biguint() {
        Some(n) => probably_prime(&n, PRIMALITY_ROUNDS),
        None => false,
    }
}

/// Multiplicative inverse of `a` modulo `p`, in `[0, p)`.
///
/// Returns `None` when `a ≡ 0 (mod p)`. Callers in the group law read this as
/// "the line is vertical" and answer with the identity.
pub fn mod_inverse(a: &BigInt, p: &BigInt) -> Option<BigInt> {
    let a = reduce(a, p);
    if a.is_zero() {
        return None;
    }

    a.mod_inverse(p).map(|inv| reduce(&inv, p))
}

/// Euler's criterion: `a` is a nonzero quadratic residue mod `p` iff
/// `a^((p-1)/2) ≡ 1 (mod p)`.
///
/// `p` must be an odd prime.
pub fn is_quadratic_residue(a: &BigInt, p: &BigInt) -> bool {
    debug_assert!(is_prime(p), "Euler's criterion needs a prime modulus");

    let (Some(a), Some(p)) = (reduce(a, p).to_biguint(), p.to_biguint()) else {
        return false;
    };
    if a.is_zero() {
        return false;
    }

    let exponent = (&p - BigUint::one()) / BigUint::from(2u32);
    a.modpow(&exponent, &p).is_one()
}

/// All `r` in `[0, p)` with `r² ≡ a (mod p)`, in ascending order.
///
/// Zero has the single root `0`, a non-residue has none and every other
/// residue has exactly two, `r` and `p - r`.
pub fn modular_square_roots(a: &BigInt, p: &BigInt) -> Vec<BigInt> {
    let a = reduce(a, p);
    if a.is_zero() {
        return vec![BigInt::zero()];
    }
    if !is_quadratic_residue(&a, p) {
        return Vec::new();
    }

    let mut roots = Vec::with_capacity(2);
    let mut r = BigInt::one();
    while r < *p {
        if reduce(&(&r * &r), p) == a {
            roots.push(r.clone());
            if roots.len() == 2 {
                break;
            }
        }
        r += BigInt::one();
    }

    roots
}

/// Reduces `q` into the canonical range `[0, p)`.
pub fn reduce(q: &BigInt, p: &BigInt) -> BigInt {
    make_positive(q % p, p)
}

pub(crate) fn make_positive(q: BigInt, p: &BigInt) -> BigInt {
    if q < BigInt::zero() {
        q + p
    } else {
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn primes_below_fifty() {
        let primes: Vec<i64> = (-3..50).filter(|n| is_prime(&int(*n))).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test]
    fn larger_primality() {
        assert!(is_prime(&int(7919)));
        assert!(!is_prime(&int(7917)));
        assert!(!is_prime(&int(561))); // Carmichael
    }

    #[test]
    fn inverse_of_every_unit() {
        let p = int(23);
        for a in 1..23 {
            let inv = mod_inverse(&int(a), &p).unwrap();
            assert!(inv >= BigInt::zero() && inv < p);
            assert_eq!(reduce(&(int(a) * inv), &p), BigInt::one());
        }
    }

    #[test]
    fn inverse_of_negative_and_unreduced() {
        let p = int(11);
        assert_eq!(mod_inverse(&int(-1), &p), Some(int(10)));
        assert_eq!(mod_inverse(&int(13), &p), Some(int(6)));
    }

    #[test]
    fn no_inverse_for_zero() {
        let p = int(7);
        assert_eq!(mod_inverse(&int(0), &p), None);
        assert_eq!(mod_inverse(&int(14), &p), None);
        assert_eq!(mod_inverse(&int(-7), &p), None);
    }

    #[test]
    fn euler_criterion_mod_eleven() {
        let p = int(11);
        let residues: Vec<i64> = (0..11)
            .filter(|a| is_quadratic_residue(&int(*a), &p))
            .collect();
        assert_eq!(residues, vec![1, 3, 4, 5, 9]);
    }

    #[test]
    fn square_roots_are_sound_and_paired() {
        for p in [5i64, 7, 13, 31] {
            let modulus = int(p);
            for a in 0..p {
                let roots = modular_square_roots(&int(a), &modulus);
                for r in &roots {
                    assert_eq!(reduce(&(r * r), &modulus), int(a));
                }
                match roots.len() {
                    0 => assert!(!is_quadratic_residue(&int(a), &modulus) && a != 0),
                    1 => assert_eq!(a, 0),
                    2 => assert!(reduce(&(&roots[0] + &roots[1]), &modulus).is_zero()),
                    n => panic!("{} roots of {} mod {}", n, a, p),
                }
            }
        }
    }

    #[test]
    fn square_roots_of_unreduced_input() {
        assert_eq!(modular_square_roots(&int(-1), &int(5)), vec![int(2), int(3)]);
        assert_eq!(modular_square_roots(&int(10), &int(5)), vec![int(0)]);
        assert!(modular_square_roots(&int(2), &int(5)).is_empty());
    }
}

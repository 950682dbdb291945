//! Integer number-theory primitives shared by the combinatorics routines.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Greatest common divisor of `a` and `b`.
///
/// Always non-negative; `gcd(0, 0) == 0`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    a.gcd(b)
}

/// Least common multiple of `a` and `b`. `lcm(x, 0) == 0`.
pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    a.lcm(b)
}

/// Divide both integers by their greatest common divisor.
///
/// The returned pair has no remaining common factor. When the GCD is 0
/// (both inputs zero) or 1 there is nothing to cancel and the inputs are
/// returned unchanged.
pub fn coprime(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let g = a.gcd(b);
    if g.is_zero() || g.is_one() {
        (a.clone(), b.clone())
    } else {
        (a / &g, b / &g)
    }
}

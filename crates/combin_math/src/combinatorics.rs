//! Binomial coefficients and falling factorials, exact at any size.
//!
//! [`comb`] carries the numerator and denominator of `n! / (m! * (n-m)!)`
//! as deques of factors and drives every denominator factor to 1 by GCD
//! cancellation before the final multiplication. The two compaction phases
//! merge factors into a bounded number of buckets first, which keeps the
//! cancellation loop short for large `n` and `m`. [`perm`] and
//! [`factorial`] are plain running products over the same substrate.

use std::collections::VecDeque;

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::CombinError;
use crate::number_theory::coprime;

/// Compaction targets for [`comb`]'s two factor-merging phases.
///
/// `top` bounds the number of live numerator/denominator factor pairs after
/// the pairwise-cancel phase; `bot` bounds the number of denominator buckets
/// after the denominator-merge phase. The defaults are tuned for large `n`
/// and `m`; for small inputs in a hot loop `CompactionTargets::new(1, 1)`
/// skips most of the bookkeeping. Targets change the cost of a call, never
/// its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactionTargets {
    /// Maximum live factor pairs after the pairwise-cancel phase.
    pub top: usize,
    /// Maximum denominator buckets after the denominator-merge phase.
    pub bot: usize,
}

impl CompactionTargets {
    pub const fn new(top: usize, bot: usize) -> Self {
        Self { top, bot }
    }
}

impl Default for CompactionTargets {
    fn default() -> Self {
        Self { top: 700, bot: 5 }
    }
}

/// Binomial coefficient `C(n, m)` with default compaction targets.
///
/// The number of `m`-element subsets of an `n`-element set, as an exact
/// integer. Returns [`CombinError::NegativeArgument`] if `n < 0` or `m < 0`.
pub fn comb(n: &BigInt, m: &BigInt) -> Result<BigInt, CombinError> {
    comb_with_targets(n, m, &CompactionTargets::default())
}

/// Binomial coefficient `C(n, m)` with explicit compaction targets.
pub fn comb_with_targets(
    n: &BigInt,
    m: &BigInt,
    targets: &CompactionTargets,
) -> Result<BigInt, CombinError> {
    if n.is_negative() || m.is_negative() {
        return Err(CombinError::NegativeArgument { op: "C(n, m)" });
    }

    if n == m || m.is_zero() {
        return Ok(BigInt::one());
    }
    if m > n {
        return Ok(BigInt::zero());
    }

    // C(n, m) = C(n, n - m): carry the smaller factor count.
    let m = if *m > (n >> 1u32) { n - m } else { m.clone() };

    // Numerator factors n-m+1..=n and denominator factors 1..=m. The
    // quotient of the two running products equals C(n, m) at every step
    // below, even as the sequences shrink, grow and regroup.
    let mut tops = int_range(n - &m + 1, n);
    let mut bots = int_range(BigInt::one(), &m);
    debug_assert_eq!(tops.len(), bots.len());

    // A target below 1 would starve the pop-two merge steps.
    let target_top = targets.top.max(1);
    let target_bot = targets.bot.max(1);

    // Phase 1: merge factor pairs and cancel across the fraction bar until
    // at most `target_top` pairs remain.
    let mut size = tops.len();
    while size > target_top {
        size -= 1;
        let (top, bot) = coprime(&merge_front(&mut tops), &merge_front(&mut bots));
        tops.push_back(top);
        bots.push_back(bot);
    }
    tracing::trace!(target: "comb", pairs = size, "pairwise_compaction_done");

    // Phase 2: merge the denominator alone down to `target_bot` buckets.
    while size > target_bot {
        size -= 1;
        let merged = merge_front(&mut bots);
        bots.push_back(merged);
    }
    tracing::trace!(target: "comb", tops = tops.len(), bots = bots.len(), "denominator_compaction_done");

    // Cancellation: distribute each bucket's prime content across the
    // numerator factors until the bucket is fully absorbed. Factors that
    // still carry content go back into circulation at the rear.
    for bot in &bots {
        let mut bot = bot.clone();
        for _ in 0..tops.len() {
            let top = match tops.pop_front() {
                Some(top) => top,
                None => break,
            };
            let (top, rest) = coprime(&top, &bot);
            bot = rest;
            if !top.is_one() {
                tops.push_back(top);
            }
            if bot.is_one() {
                break;
            }
        }
    }
    tracing::trace!(target: "comb", factors = tops.len(), "cancellation_done");

    Ok(tops.iter().fold(BigInt::one(), |acc, top| acc * top))
}

/// Falling factorial `P(n, m)`.
///
/// The number of ordered `m`-element arrangements drawn without repetition
/// from `n` items, as an exact integer. Returns
/// [`CombinError::NegativeArgument`] if `n < 0` or `m < 0`.
pub fn perm(n: &BigInt, m: &BigInt) -> Result<BigInt, CombinError> {
    if n.is_negative() || m.is_negative() {
        return Err(CombinError::NegativeArgument { op: "P(n, m)" });
    }

    if m > n {
        return Ok(BigInt::zero());
    }
    if n.is_zero() {
        return Ok(BigInt::one());
    }

    // No division is involved, so no cancellation is needed. The empty
    // range for m == 0 yields 1.
    Ok(product_range(n - m + 1, n))
}

/// `n!` as an exact integer (`0! == 1`).
///
/// Returns [`CombinError::NegativeArgument`] if `n < 0`.
pub fn factorial(n: &BigInt) -> Result<BigInt, CombinError> {
    if n.is_negative() {
        return Err(CombinError::NegativeArgument { op: "n!" });
    }
    Ok(product_range(BigInt::one(), n))
}

/// The integers `lo..=hi` as a deque, front-to-back in increasing order.
fn int_range(lo: BigInt, hi: &BigInt) -> VecDeque<BigInt> {
    let cap = (hi - &lo).to_usize().map_or(0, |d| d.saturating_add(1));
    let mut seq = VecDeque::with_capacity(cap);
    let mut k = lo;
    while &k <= hi {
        seq.push_back(k.clone());
        k += 1;
    }
    seq
}

/// Pop the two front elements and return their product.
fn merge_front(seq: &mut VecDeque<BigInt>) -> BigInt {
    match (seq.pop_front(), seq.pop_front()) {
        (Some(a), Some(b)) => a * b,
        (Some(a), None) => a,
        _ => BigInt::one(),
    }
}

/// Running product of the integers `lo..=hi`; empty ranges give 1.
fn product_range(lo: BigInt, hi: &BigInt) -> BigInt {
    let mut acc = BigInt::one();
    let mut k = lo;
    while &k <= hi {
        acc *= &k;
        k += 1;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn comb_edges() {
        assert_eq!(comb(&big(10), &big(0)).unwrap(), big(1));
        assert_eq!(comb(&big(10), &big(10)).unwrap(), big(1));
        assert_eq!(comb(&big(7), &big(9)).unwrap(), big(0));
        assert_eq!(comb(&big(0), &big(0)).unwrap(), big(1));
    }

    #[test]
    fn comb_values() {
        assert_eq!(comb(&big(5), &big(2)).unwrap(), big(10));
        assert_eq!(comb(&big(8), &big(3)).unwrap(), big(56));
        assert_eq!(comb(&big(52), &big(5)).unwrap(), big(2_598_960));
    }

    #[test]
    fn comb_rejects_negative_arguments() {
        assert!(comb(&big(-1), &big(0)).is_err());
        assert!(comb(&big(0), &big(-1)).is_err());
    }

    #[test]
    fn targets_do_not_change_the_result() {
        let n = big(60);
        let m = big(23);
        let want = comb(&n, &m).unwrap();
        for top in [1usize, 5, 700] {
            for bot in [1usize, 5, 700] {
                let targets = CompactionTargets::new(top, bot);
                let got = comb_with_targets(&n, &m, &targets).unwrap();
                assert_eq!(got, want, "targets ({top}, {bot})");
            }
        }
    }

    #[test]
    fn perm_values() {
        assert_eq!(perm(&big(5), &big(2)).unwrap(), big(20));
        assert_eq!(perm(&big(0), &big(0)).unwrap(), big(1));
        assert_eq!(perm(&big(4), &big(0)).unwrap(), big(1));
        assert_eq!(perm(&big(3), &big(5)).unwrap(), big(0));
    }

    #[test]
    fn perm_rejects_negative_arguments() {
        assert!(perm(&big(-1), &big(0)).is_err());
        assert!(perm(&big(0), &big(-1)).is_err());
    }

    #[test]
    fn factorial_values() {
        assert_eq!(factorial(&big(0)).unwrap(), big(1));
        assert_eq!(factorial(&big(1)).unwrap(), big(1));
        assert_eq!(factorial(&big(5)).unwrap(), big(120));
        assert_eq!(factorial(&big(10)).unwrap(), big(3_628_800));
        assert!(factorial(&big(-3)).is_err());
    }
}

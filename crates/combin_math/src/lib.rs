//! Exact combinatorial quantities over arbitrary-precision integers.
//!
//! Two public operations, [`comb`] (binomial coefficient `C(n, m)`) and
//! [`perm`] (falling factorial `P(n, m)`), computed exactly on
//! [`num_bigint::BigInt`]. The interesting part is [`comb`]: rather than
//! evaluating a factorial quotient it keeps the numerator and denominator as
//! deques of factors and cancels common content via GCD before every
//! multiplication, so intermediate products stay small even for very large
//! inputs.
//!
//! ```
//! use combin_math::comb;
//! use num_bigint::BigInt;
//!
//! let c = comb(&BigInt::from(5), &BigInt::from(2)).unwrap();
//! assert_eq!(c, BigInt::from(10));
//! ```

pub mod combinatorics;
pub mod error;
pub mod number_theory;

pub use combinatorics::{comb, comb_with_targets, factorial, perm, CompactionTargets};
pub use error::CombinError;

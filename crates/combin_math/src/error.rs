//! Error types for the combin_math crate.

use thiserror::Error;

/// Errors that can occur in combinatorial operations.
///
/// There is exactly one failure mode: a negative argument to an operation
/// defined only on non-negative integers. Arithmetic itself cannot fail,
/// since all integers are arbitrary-precision.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombinError {
    /// A negative `n` or `m` was passed to an operation.
    #[error("{op} requires non-negative arguments")]
    NegativeArgument {
        /// Operation that rejected its input, e.g. `"C(n, m)"`.
        op: &'static str,
    },
}

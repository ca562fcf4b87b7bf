//! Engine error type.
//!
//! Sub-crates may define their own error enums and convert `ModelError`
//! into them via `#[from]` variants, or use `ModelError` directly.  Both
//! patterns appear in this workspace; prefer whichever keeps error sites
//! clean.

use thiserror::Error;

/// The top-level error type for the engine crates.
///
/// All failures are terminal for the call that produced them — every
/// operation is deterministic given its random source, so there is nothing
/// transient to retry.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Rejected inputs: bad dimensions, out-of-range ratios, malformed
    /// distributions.  Raised before any state is mutated — no partial
    /// boards or partial populations ever escape.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A structural invariant of a live board was broken.  Unreachable
    /// through the public API as long as construction and population
    /// succeeded; reaching it indicates a bug in the engine itself.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Shorthand result type for all `schelling-*` crates.
pub type ModelResult<T> = Result<T, ModelError>;

//! Error types for the transform pipeline.
//!
//! Rewrite-rule mismatches are never errors: a call site that fails any
//! guard is left untouched and the pipeline moves on. The only observable
//! failures are input the syntax engine rejects and (in principle)
//! serialization failures while printing the rewritten tree.

use thiserror::Error;

/// Errors surfaced by [`transform`](crate::transform).
#[derive(Debug, Error)]
pub enum TransformError {
    /// The engine could not parse the input as an ECMAScript program.
    #[error("failed to parse program: {0}")]
    Parse(String),

    /// The engine failed while printing the rewritten tree.
    #[error("failed to serialize program: {0}")]
    Serialize(String),
}

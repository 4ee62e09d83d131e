use thiserror::Error;

/// Errors produced while building, preparing, or executing chain calls.
///
/// Engine errors are never swallowed: whenever a prepared statement is in
/// flight, it is finalized before the error reaches the caller. No variant is
/// retried by this crate; retry policy belongs to the caller or the engine.
#[derive(Debug, Error)]
pub enum ChainCallError {
    /// The caller's connection layer could not supply a usable handle.
    #[error("Handle acquisition error: {0}")]
    HandleAcquisition(String),

    /// The accumulated statement model could not be compiled by the engine.
    #[error("Statement error: {0}")]
    Statement(String),

    /// Stepping a valid prepared statement failed.
    #[error("Execution error: {0}")]
    Execution(String),

    /// A clause method was invoked after the cursor's statement was prepared.
    #[error("Statement already prepared; clause changes are no longer applied")]
    LateMutation,

    /// An advance was attempted after the prepared statement was finalized.
    #[error("Prepared statement already finalized")]
    AlreadyFinalized,
}

use thiserror::Error;

/// Backend-internal failure. Infeasibility and time-limit exhaustion are
/// statuses on the outcome, not errors.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The backend could not complete a solve call
    #[error("backend '{backend}' failed: {reason}")]
    Backend { backend: &'static str, reason: String },
}

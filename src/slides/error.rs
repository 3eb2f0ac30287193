use thiserror::Error;

/// Raised before candidate materialization when the vertical-pair blow-up
/// would exceed the configured bound
#[derive(Debug, Error)]
pub enum ScaleError {
    /// Projected candidate count exceeds the safety bound
    #[error("{projected} candidate slides would exceed the configured bound of {bound}")]
    TooManyCandidates { projected: usize, bound: usize },
}

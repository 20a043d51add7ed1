use thiserror::Error;

/// Failures reported by an [`AudioBackend`](crate::audio::AudioBackend).
///
/// None of these reach the user: the synthesizer logs them and carries on
/// silently.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AudioError {
    #[error("audio backend unavailable")]
    Unavailable,
    #[error("audio backend error: {0}")]
    Backend(String),
    #[error("noise buffer has not been built")]
    NoiseBufferMissing,
}

use thiserror::Error;

/// Every failure the scene can observe. None of them is fatal: callers log
/// and keep rendering.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("microphone permission denied: {0}")]
    MicPermissionDenied(String),
    #[error("surface operation failed: {0}")]
    Surface(String),
    #[error("media playback failed: {0}")]
    MediaPlayback(String),
    #[error("audio graph error: {0}")]
    Audio(String),
    #[error("dom error: {0}")]
    Dom(String),
}

pub type SceneResult<T> = Result<T, SceneError>;

use thiserror::Error;

/// Errors emitted by the rendering collaborator.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no document started: {0}")]
    NoDocument(&'static str),
    #[error("failed to encode page content: {0}")]
    Encode(String),
    #[error("failed to serialize document: {0}")]
    Persist(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

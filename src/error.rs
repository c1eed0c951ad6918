use thiserror::Error;

/// Errors surfaced by rendering and output.
///
/// Intersection and shading never fail; these cover settings that cannot
/// produce an image and failures writing one.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid render settings: {0}")]
    InvalidSettings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

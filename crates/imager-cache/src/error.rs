//! Generation error types.

use imager_identicon::IdenticonError;
use imager_render::RenderError;

/// Error returned when an identicon could not be produced.
///
/// Messages never include paths or command lines. The underlying cause is
/// available through [`std::error::Error::source`].
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The request was rejected before any work was done.
    #[error("invalid identicon request")]
    InvalidInput(#[from] IdenticonError),
    /// The renderer failed, timed out, or produced too much output.
    #[error("identicon generation failed")]
    Render(#[from] RenderError),
}


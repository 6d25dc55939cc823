// ── GfxError ──────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Errors reported by the layout and text drawing functions.
///
/// Degenerate geometry (zero radius, flat triangles) and empty text are not
/// errors; they have defined drawing behaviour.
#[derive(Debug, Error)]
pub enum GfxError {
    /// A caller-supplied size, scale or budget cannot produce any output.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The wrapped text needs more lines than the window can hold, even at
    /// scale 1.
    #[error("text does not fit: {lines} lines needed, {max_lines} available")]
    DoesNotFit { lines: usize, max_lines: usize },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl GfxError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GfxError::InvalidArgument(msg.into())
    }
}

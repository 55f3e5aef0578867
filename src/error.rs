//! Crate-level error types.

use std::fmt;

/// A drawing call rejected by the host output surface.
///
/// Surface failures are never handled inside the frame pipeline; they
/// propagate to whoever owns the surface and its repaint policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceError {
    message: String,
}

impl SurfaceError {
    /// Create a surface error carrying the host's description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The host's description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface error: {}", self.message)
    }
}

impl std::error::Error for SurfaceError {}

impl From<fmt::Error> for SurfaceError {
    fn from(_: fmt::Error) -> Self {
        Self::new("formatter rejected write")
    }
}

/// Errors produced by the molpaint crate.
#[derive(Debug)]
pub enum MolpaintError {
    /// The output surface failed while a frame was being drawn.
    Surface(SurfaceError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for MolpaintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(e) => write!(f, "frame aborted: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for MolpaintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<SurfaceError> for MolpaintError {
    fn from(e: SurfaceError) -> Self {
        Self::Surface(e)
    }
}

impl From<std::io::Error> for MolpaintError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

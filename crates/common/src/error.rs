//! Error types shared across wipekit crates.

/// Top-level error type for wipekit operations.
#[derive(Debug, thiserror::Error)]
pub enum WipekitError {
    /// A container, sub-element, video, or canvas lookup came back
    /// empty. Treated as a permanent configuration defect of the
    /// hosting page, not a transient condition.
    #[error("required element missing: {selector}")]
    ElementMissing { selector: String },

    /// The canvas exists but its 2D drawing surface could not be
    /// acquired.
    #[error("drawing surface unavailable for canvas '{id}'")]
    SurfaceUnavailable { id: String },

    #[error("render error: {message}")]
    Render { message: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using WipekitError.
pub type WipekitResult<T> = Result<T, WipekitError>;

impl WipekitError {
    pub fn element_missing(selector: impl Into<String>) -> Self {
        Self::ElementMissing {
            selector: selector.into(),
        }
    }

    pub fn surface_unavailable(id: impl Into<String>) -> Self {
        Self::SurfaceUnavailable { id: id.into() }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}

/// Convenience result type used across sketchfolio.
pub type SketchResult<T> = Result<T, SketchError>;

/// Top-level error taxonomy.
///
/// Navigation and gating never produce errors: invalid targets and missing optional elements
/// degrade to "nothing happens". These variants cover the fallible edges around that core
/// (configuration, path data, rasterization, output).
#[derive(thiserror::Error, Debug)]
pub enum SketchError {
    /// Invalid user-provided site configuration or document structure.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while generating or rasterizing sketch strokes.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SketchError {
    /// Build a [`SketchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SketchError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SketchError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

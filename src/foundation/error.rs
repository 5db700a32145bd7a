/// Convenience result type used across Pixelcat.
pub type PixelcatResult<T> = Result<T, PixelcatError>;

/// Top-level error taxonomy used by library APIs.
///
/// Decorative rendering paths never produce these: unknown variants, missing
/// placeholders and unmapped palette characters are silent skips. Errors are
/// reserved for construction-time validation, serialization and the form
/// transport boundary.
#[derive(thiserror::Error, Debug)]
pub enum PixelcatError {
    /// Invalid sprite or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors from the injected form-submission transport.
    #[error("transport error: {0}")]
    Transport(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixelcatError {
    /// Build a [`PixelcatError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PixelcatError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`PixelcatError::Transport`] value.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

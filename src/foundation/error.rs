/// Convenience result type used across the crate.
pub type PlacardResult<T> = Result<T, PlacardError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Image-resolution and storage failures are deliberately absent from most
/// public signatures: per the degradation policy they are contained where
/// they occur (`Resolve` and `Storage` exist for the few boundaries that do
/// report them).
#[derive(thiserror::Error, Debug)]
pub enum PlacardError {
    /// Invalid user-provided value (color string, zoom percent, shape input).
    #[error("validation error: {0}")]
    Validation(String),

    /// Blocking data error (no usable rows after sanitation).
    #[error("data error: {0}")]
    Data(String),

    /// Image reference could not be resolved into bytes.
    #[error("resolve error: {0}")]
    Resolve(String),

    /// Persistent state read/write failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlacardError {
    /// Build a [`PlacardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PlacardError::Data`] value.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Build a [`PlacardError::Resolve`] value.
    pub fn resolve(msg: impl Into<String>) -> Self {
        Self::Resolve(msg.into())
    }

    /// Build a [`PlacardError::Storage`] value.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Build a [`PlacardError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

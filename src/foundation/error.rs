/// Convenience result type used across zoomgrid.
pub type GridResult<T> = Result<T, GridError>;

/// Error taxonomy for externally supplied layout data.
///
/// Geometry queries never fail; these errors only surface when settings or
/// configurations come from outside the program (files, JSON, user input).
#[derive(thiserror::Error, Debug)]
pub enum GridError {
    /// Invalid grid parameters (column count, gaps, bounds, cache capacity).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing settings.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridError {
    /// Build a [`GridError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GridError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

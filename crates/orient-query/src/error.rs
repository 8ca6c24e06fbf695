//! Error types for orient-query

use thiserror::Error;

/// Result type alias for orient-query operations
pub type OrientResult<T> = Result<T, OrientError>;

/// Error types for statement building.
///
/// Rendering itself never fails: missing tokens render as empty text and
/// unsafe characters are filtered out. The only hard failure is asking the
/// façade for a command id its registry does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrientError {
    /// A verb-selecting call referenced a command id missing from the registry
    #[error("command {id} not found in {facade}")]
    CommandNotFound { id: String, facade: &'static str },
}

impl OrientError {
    /// Create a command-not-found error for the given façade type
    pub fn command_not_found(id: impl Into<String>, facade: &'static str) -> Self {
        Self::CommandNotFound {
            id: id.into(),
            facade,
        }
    }

    /// Check if this is a command-not-found error
    pub fn is_command_not_found(&self) -> bool {
        matches!(self, Self::CommandNotFound { .. })
    }

    /// The command id that failed to resolve, if any
    pub fn command_id(&self) -> Option<&str> {
        match self {
            Self::CommandNotFound { id, .. } => Some(id),
        }
    }
}

use thiserror::Error;

/// Raised whenever a game object would be built in a state that breaks one of its invariants.
///
/// The message is human-readable and names the invariant that failed.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The human-readable description of the failed invariant.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Failures when mapping game objects from their JSON representation.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown city '{0}'")]
    UnknownCity(String),
    #[error("malformed {0}")]
    Malformed(String),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_message() {
        let error = ValidationError::new("Player index must be in range.");
        assert_eq!(error.to_string(), "Player index must be in range.");
        assert_eq!(error.message(), "Player index must be in range.");
    }

    #[test]
    fn translation_error_wraps_validation_error() {
        let error: TranslationError = ValidationError::new("Bad city.").into();
        assert_eq!(error.to_string(), "Bad city.");
        assert_eq!(
            TranslationError::UnknownCity(String::from("boston")).to_string(),
            "unknown city 'boston'"
        );
    }
}

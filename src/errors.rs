//! Shared error types for fixture construction.
//!
//! Validation is local and immediate: constructors and transforms check their own
//! inputs and fail with [`FixtureError::InvalidArgument`] before any value is built.
//! Parse and compile problems in the fixture source are *not* errors of this crate;
//! they surface as diagnostics on the built document.

use thiserror::Error;

/// Main error type for fixture operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// A required argument was blank or outside its valid range
    #[error("Invalid argument '{parameter}': {message}")]
    InvalidArgument {
        parameter: &'static str,
        message: String,
    },

    /// The hosting runtime's standard libraries could not be located
    #[error("Environment resolution failure: {0}")]
    EnvironmentResolution(String),

    /// The ambient configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FixtureError {
    /// Create an invalid-argument error for the named parameter
    pub fn invalid_argument(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            message: message.into(),
        }
    }

    /// Create an environment resolution error
    pub fn environment(message: impl Into<String>) -> Self {
        Self::EnvironmentResolution(message.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Name of the offending parameter, for invalid-argument errors
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { parameter, .. } => Some(*parameter),
            _ => None,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Fail unless `value` contains at least one non-whitespace character.
pub(crate) fn ensure_not_blank(value: &str, parameter: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FixtureError::invalid_argument(
            parameter,
            format!("'{parameter}' cannot be empty or contain only whitespace."),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_names_parameter() {
        let err = FixtureError::invalid_argument("file_name", "blank");
        assert_eq!(err.parameter(), Some("file_name"));
        assert_eq!(err.to_string(), "Invalid argument 'file_name': blank");
    }

    #[test]
    fn test_other_variants_have_no_parameter() {
        assert_eq!(FixtureError::environment("no runtime").parameter(), None);
        assert_eq!(FixtureError::configuration("bad toml").parameter(), None);
    }

    #[test]
    fn test_ensure_not_blank() {
        assert!(ensure_not_blank("x", "source_code").is_ok());
        let err = ensure_not_blank(" \t\n", "source_code").unwrap_err();
        assert_eq!(err.parameter(), Some("source_code"));
        assert!(ensure_not_blank("", "assembly_name").is_err());
    }
}

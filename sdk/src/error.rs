//! SDK error types.
//!
//! Provides the error type for failures detected locally, before or after
//! talking to the API.

/// Local SDK errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdkError {
    /// Protocol name outside the supported set.
    #[error("invalid protocol: {name}. Must be one of: {accepted}")]
    InvalidProtocol {
        /// The rejected name, as given.
        name: String,
        /// Comma-separated list of accepted names.
        accepted: String,
    },

    /// A required parameter is missing or empty.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    /// A parameter is present but out of range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Wire name of the parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl SdkError {
    /// Shorthand for [`SdkError::InvalidParameter`].
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Fails with [`SdkError::MissingParameter`] when `value` is blank.
pub(crate) fn require(name: &'static str, value: &str) -> Result<(), SdkError> {
    if value.trim().is_empty() {
        return Err(SdkError::MissingParameter(name));
    }
    Ok(())
}

/// Fails with [`SdkError::MissingParameter`] when `values` is empty or holds a
/// blank entry.
pub(crate) fn require_all<S: AsRef<str>>(name: &'static str, values: &[S]) -> Result<(), SdkError> {
    if values.is_empty() || values.iter().any(|v| v.as_ref().trim().is_empty()) {
        return Err(SdkError::MissingParameter(name));
    }
    Ok(())
}

/// Fails unless `value` lies in `1..=100`.
pub(crate) fn require_percentage(name: &'static str, value: u8) -> Result<(), SdkError> {
    if !(1..=100).contains(&value) {
        return Err(SdkError::invalid(name, format!("{value} is not within 1-100")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SdkError::MissingParameter("tokenAddress");
        assert_eq!(err.to_string(), "missing parameter: tokenAddress");
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = SdkError::invalid("percentage", "0 is not within 1-100");
        assert_eq!(
            err.to_string(),
            "invalid parameter percentage: 0 is not within 1-100"
        );
    }

    #[test]
    fn test_require() {
        assert!(require("sender", "A").is_ok());
        assert_eq!(
            require("sender", "  "),
            Err(SdkError::MissingParameter("sender"))
        );
    }

    #[test]
    fn test_require_all() {
        assert!(require_all("walletAddresses", &["A", "B"]).is_ok());
        assert!(require_all::<&str>("walletAddresses", &[]).is_err());
        assert!(require_all("walletAddresses", &["A", ""]).is_err());
    }

    #[test]
    fn test_require_percentage() {
        assert!(require_percentage("percentage", 1).is_ok());
        assert!(require_percentage("percentage", 100).is_ok());
        assert!(require_percentage("percentage", 0).is_err());
        assert!(require_percentage("percentage", 101).is_err());
    }
}

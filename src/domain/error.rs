use thiserror::Error;

/// Core domain errors
///
/// Expected upstream failure modes are values here, matched explicitly at the
/// adapter boundary; nothing in this crate panics across the orchestrator.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Could not resolve destination: {destination}")]
    ResolutionFailure { destination: String },

    #[error("Network error after {attempts} attempt(s): {message}")]
    Network { message: String, attempts: u32 },

    #[error("Upstream HTTP {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("AI classifier unavailable: {message}")]
    AiUnavailable { message: String },

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn resolution_failure(destination: impl Into<String>) -> Self {
        Self::ResolutionFailure {
            destination: destination.into(),
        }
    }

    pub fn network(message: impl Into<String>, attempts: u32) -> Self {
        Self::Network {
            message: message.into(),
            attempts,
        }
    }

    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    pub fn ai_unavailable(message: impl Into<String>) -> Self {
        Self::AiUnavailable {
            message: message.into(),
        }
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Stable error-kind tag surfaced in per-category failure statuses
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ResolutionFailure { .. } => "RESOLUTION_FAILURE",
            Self::Network { .. } | Self::Upstream { .. } => "NETWORK_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidResponse { .. } => "INVALID_RESPONSE",
            Self::AiUnavailable { .. } => "AI_UNAVAILABLE",
            Self::Cache { .. } => "CACHE_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
        }
    }

    /// Whether the retry loop should attempt this failure again.
    ///
    /// 404 is a definitive "no data" answer and parse-level failures will not
    /// improve on a second request; everything network-shaped may.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Upstream { .. } | Self::InvalidResponse { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_display() {
        let error = DomainError::network("connection refused", 3);
        assert_eq!(
            error.to_string(),
            "Network error after 3 attempt(s): connection refused"
        );
    }

    #[test]
    fn test_not_found_error_display() {
        let error = DomainError::not_found("country 9999 has no feed entry");
        assert_eq!(
            error.to_string(),
            "Not found: country 9999 has no feed entry"
        );
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(DomainError::network("x", 1).kind(), "NETWORK_ERROR");
        assert_eq!(DomainError::upstream(500, "x").kind(), "NETWORK_ERROR");
        assert_eq!(DomainError::not_found("x").kind(), "NOT_FOUND");
        assert_eq!(DomainError::resolution_failure("x").kind(), "RESOLUTION_FAILURE");
    }

    #[test]
    fn test_transient_classification() {
        assert!(DomainError::network("timeout", 1).is_transient());
        assert!(DomainError::upstream(500, "server error").is_transient());
        assert!(DomainError::invalid_response("not xml").is_transient());
        assert!(!DomainError::not_found("gone").is_transient());
        assert!(!DomainError::resolution_failure("Atlantis").is_transient());
        assert!(!DomainError::ai_unavailable("no key").is_transient());
    }
}

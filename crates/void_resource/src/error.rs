//! Error and status types

use std::fmt;
use thiserror::Error;

/// Status reported to failure callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadResourceStatus {
    /// The resource does not exist
    NotExist,
    /// The resource exists but is not ready yet
    NotReady,
    /// A dependency of the resource failed to load
    DependencyError,
    /// The resource exists but has the wrong type
    TypeError,
    /// The resource could not be decoded
    AssetError,
}

impl fmt::Display for LoadResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotExist => write!(f, "not exist"),
            Self::NotReady => write!(f, "not ready"),
            Self::DependencyError => write!(f, "dependency error"),
            Self::TypeError => write!(f, "type error"),
            Self::AssetError => write!(f, "asset error"),
        }
    }
}

/// Errors returned from resource manager entry points
///
/// Not-found outcomes are never reported here; they arrive through the
/// failure callback of the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// The request failed presence validation and was dropped
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The platform primitive refused to start the operation
    #[error("Platform refused to start operation on '{0}'")]
    PlatformRejected(String),

    /// The backend does not implement this capability
    #[error("Not supported by this resource backend: {0}")]
    Unsupported(&'static str),
}

impl ResourceError {
    /// Check if this is a validation failure
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    /// Check if this is an unsupported-capability failure
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

/// Result type for resource manager operations
pub type ResourceResult<T> = Result<T, ResourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ResourceError::InvalidRequest("Asset name is invalid.".into());
        assert_eq!(err.to_string(), "Invalid request: Asset name is invalid.");
        assert!(err.is_invalid_request());
        assert!(!err.is_unsupported());

        let err = ResourceError::Unsupported("asset_count");
        assert!(err.is_unsupported());
        assert!(err.to_string().contains("asset_count"));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(LoadResourceStatus::NotExist.to_string(), "not exist");
    }
}

//! Optional backend capabilities
//!
//! Backends differ in what they can report. A simulated backend has no
//! bundle versions, no load agents and no object pools; instead of failing
//! those calls it answers [`Capability::Unsupported`] so callers can branch.

use crate::error::{ResourceError, ResourceResult};

/// Outcome of querying or configuring an optional capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability<T> {
    /// The backend implements the capability
    Supported(T),
    /// The backend does not implement the named capability
    Unsupported(&'static str),
}

impl<T> Capability<T> {
    /// Check if supported
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported(_))
    }

    /// Get the value, if supported
    pub fn supported(self) -> Option<T> {
        match self {
            Self::Supported(value) => Some(value),
            Self::Unsupported(_) => None,
        }
    }

    /// Map the supported value
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Capability<U> {
        match self {
            Self::Supported(value) => Capability::Supported(f(value)),
            Self::Unsupported(name) => Capability::Unsupported(name),
        }
    }

    /// Treat an unsupported capability as an error
    pub fn into_result(self) -> ResourceResult<T> {
        match self {
            Self::Supported(value) => Ok(value),
            Self::Unsupported(name) => Err(ResourceError::Unsupported(name)),
        }
    }
}

//! Error types for ARN access and construction.

use thiserror::Error;

/// Errors that can occur when reading, editing, or minting ARNs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArnError {
    /// The string is missing the `arn:` prefix or the resource field.
    #[error("invalid arn: {arn}")]
    Invalid { arn: String },

    /// The string does not have enough fields to resolve the index.
    #[error("invalid arn or field index {index}: {arn}")]
    InvalidField { index: usize, arn: String },

    /// The resource has no `/`-delimited path.
    #[error("no path: {arn}")]
    NoPath { arn: String },

    /// [`Ctx::arn`](crate::Ctx::arn) was called without a service.
    #[error("service not specified")]
    ServiceNotSpecified,

    /// The service needs a resource type to pick its rule.
    #[error("{service} requires resource")]
    ResourceRequired { service: String },
}

impl ArnError {
    pub(crate) fn invalid(arn: &str) -> Self {
        ArnError::Invalid {
            arn: arn.to_string(),
        }
    }

    pub(crate) fn invalid_field(index: usize, arn: &str) -> Self {
        ArnError::InvalidField {
            index,
            arn: arn.to_string(),
        }
    }

    pub(crate) fn no_path(arn: &str) -> Self {
        ArnError::NoPath {
            arn: arn.to_string(),
        }
    }

    /// Returns true if the ARN itself is malformed.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ArnError::Invalid { .. } | ArnError::InvalidField { .. })
    }

    /// Returns true if a valid ARN was missing a path.
    pub fn is_no_path(&self) -> bool {
        matches!(self, ArnError::NoPath { .. })
    }

    /// Returns true if a context rule rejected the arguments.
    pub fn is_context_error(&self) -> bool {
        matches!(
            self,
            ArnError::ServiceNotSpecified | ArnError::ResourceRequired { .. }
        )
    }
}

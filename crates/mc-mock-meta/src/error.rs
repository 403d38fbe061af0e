//! Metadata errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaError {
    /// A caller passed a value the metadata cannot hold.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl MetaError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        MetaError::InvalidArgument(reason.into())
    }
}

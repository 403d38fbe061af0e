//! Item-level errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("unknown material key: {0}")]
    UnknownMaterial(String),
}

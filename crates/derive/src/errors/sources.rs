//! Error types for sources.

use super::{PipelineError, PipelineErrorKind};
use alloc::string::{String, ToString};
use alloy_primitives::B256;

/// An error returned by a [BlobStore].
///
/// [BlobStore]: crate::traits::BlobStore
#[derive(derive_more::Display, Debug, Clone, PartialEq, Eq)]
pub enum BlobStoreError {
    /// The DA store has no blob for the given transaction id.
    #[display("Blob not found for tx id {_0}")]
    NotFound(B256),
    /// Error pertaining to the backend transport.
    #[display("{_0}")]
    Backend(String),
}

impl BlobStoreError {
    /// Returns `true` if the error is [BlobStoreError::NotFound].
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<BlobStoreError> for PipelineErrorKind {
    fn from(val: BlobStoreError) -> Self {
        PipelineError::Provider(val.to_string()).temp()
    }
}

impl core::error::Error for BlobStoreError {}

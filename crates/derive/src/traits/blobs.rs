//! Blob Store

use crate::errors::BlobStoreError;
use alloc::{boxed::Box, string::ToString};
use alloy_primitives::B256;
use async_trait::async_trait;
use op_near_primitives::DaBlob;

/// The BlobStore trait specifies the functionality of the external DA layer that batch blobs
/// are resolved from.
///
/// Reads must be idempotent: the same transaction id may be requested again when a block is
/// re-fetched after a failure.
#[async_trait]
pub trait BlobStore {
    /// Fetches the blob submitted in the DA transaction with the given id.
    ///
    /// Returns [BlobStoreError::NotFound] if the store has no such blob.
    async fn get_blob(&mut self, tx_id: B256) -> Result<DaBlob, BlobStoreError>;
}

/// The unit blob store is used by sources that only ever read inline calldata.
#[async_trait]
impl BlobStore for () {
    async fn get_blob(&mut self, _tx_id: B256) -> Result<DaBlob, BlobStoreError> {
        Err(BlobStoreError::Backend("no blob store configured".to_string()))
    }
}

//! Test Utilities for the blob store trait

use crate::{errors::BlobStoreError, traits::BlobStore};
use alloc::{boxed::Box, collections::BTreeMap, string::ToString, sync::Arc};
use alloy_primitives::B256;
use async_trait::async_trait;
use core::sync::atomic::{AtomicUsize, Ordering};
use op_near_primitives::DaBlob;

/// A mock blob store for testing.
#[derive(Debug, Clone, Default)]
pub struct TestBlobStore {
    /// Maps DA transaction ids to blobs.
    pub blobs: BTreeMap<B256, DaBlob>,
    /// Whether every lookup should fail with a backend error.
    pub should_error: bool,
    /// The number of lookups made, shared between clones.
    pub calls: Arc<AtomicUsize>,
}

impl TestBlobStore {
    /// Inserts a blob under the given DA transaction id.
    pub fn insert_blob(&mut self, tx_id: B256, blob: DaBlob) {
        self.blobs.insert(tx_id, blob);
    }

    /// Returns the number of lookups made.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlobStore for TestBlobStore {
    async fn get_blob(&mut self, tx_id: B256) -> Result<DaBlob, BlobStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_error {
            return Err(BlobStoreError::Backend("test blob store failure".to_string()));
        }
        self.blobs.get(&tx_id).cloned().ok_or(BlobStoreError::NotFound(tx_id))
    }
}

//! Test Utilities for chain provider traits

use crate::traits::{ChainProvider, ChainProviderError};
use alloc::{boxed::Box, collections::VecDeque, sync::Arc, vec::Vec};
use alloy_consensus::TxEnvelope;
use alloy_primitives::B256;
use async_trait::async_trait;
use core::sync::atomic::{AtomicUsize, Ordering};
use op_near_primitives::BlockInfo;
use spin::Mutex;

/// A mock chain provider for testing.
///
/// Clones share the queued errors, the stall budget and the call counter, so a test can keep a
/// handle on a provider after moving a clone into a data source.
#[derive(Debug, Clone, Default)]
pub struct TestChainProvider {
    /// Maps block hashes to block information and transactions using a tuple list.
    pub blocks: Vec<(BlockInfo, Vec<TxEnvelope>)>,
    /// Errors returned by the next calls, before any block lookup.
    pub errors: Arc<Mutex<VecDeque<TestProviderError>>>,
    /// The number of upcoming calls that never resolve.
    pub stalls: Arc<AtomicUsize>,
    /// The number of calls made to the provider.
    pub calls: Arc<AtomicUsize>,
}

impl TestChainProvider {
    /// Insert a block with transactions into the mock chain provider.
    pub fn insert_block_with_transactions(&mut self, block: BlockInfo, txs: Vec<TxEnvelope>) {
        self.blocks.push((block, txs));
    }

    /// Queues an error to be returned by the next call.
    pub fn push_error(&self, err: TestProviderError) {
        self.errors.lock().push_back(err);
    }

    /// Makes the next `n` calls hang forever.
    pub fn stall_next(&self, n: usize) {
        self.stalls.store(n, Ordering::SeqCst);
    }

    /// Returns the number of calls made to the provider.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// An error for the [TestChainProvider].
#[derive(derive_more::Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestProviderError {
    /// The block was not found.
    #[display("Block not found")]
    BlockNotFound,
    /// The provider could not be reached.
    #[display("Provider unavailable")]
    Unavailable,
}

impl ChainProviderError for TestProviderError {
    fn is_block_not_found(&self) -> bool {
        matches!(self, Self::BlockNotFound)
    }
}

#[async_trait]
impl ChainProvider for TestChainProvider {
    type Error = TestProviderError;

    async fn block_info_and_transactions_by_hash(
        &mut self,
        hash: B256,
    ) -> Result<(BlockInfo, Vec<TxEnvelope>), Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let stalled = self
            .stalls
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if stalled {
            core::future::pending::<()>().await;
        }
        if let Some(err) = self.errors.lock().pop_front() {
            return Err(err);
        }
        self.blocks
            .iter()
            .find(|(b, _)| b.hash == hash)
            .cloned()
            .ok_or(TestProviderError::BlockNotFound)
    }
}

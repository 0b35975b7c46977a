//! Contains traits that describe the functionality of the data sources handed to the
//! derivation pipeline.

use crate::errors::PipelineResult;
use alloc::{boxed::Box, fmt::Debug};
use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;
use op_near_primitives::BlockID;

/// Describes the functionality of a data source that can provide data availability information.
#[async_trait]
pub trait DataAvailabilityProvider {
    /// The item type of the data iterator.
    type Item: Send + Sync + Debug + Into<Bytes>;
    /// An iterator over returned bytes data.
    type DataIter: AsyncIterator<Item = Self::Item> + Send + Debug;

    /// Opens a data iterator over the batches submitted in the given L1 block by
    /// `batcher_address`.
    ///
    /// Opening never fails. Errors fetching the block are deferred to the iterator.
    async fn open_data(&self, block_id: BlockID, batcher_address: Address) -> Self::DataIter;
}

/// A simple asynchronous iterator trait.
///
/// Iterators are single-consumer: [AsyncIterator::next] takes `&mut self`, so overlapping calls
/// on one iterator are impossible. Dropping the returned future cancels the call; wrap it in a
/// timeout to bound a stuck upstream fetch.
#[async_trait]
pub trait AsyncIterator {
    /// The item type of the iterator.
    type Item: Send + Sync + Debug + Into<Bytes>;

    /// Returns the next item in the iterator, or [crate::errors::PipelineError::Eof] if the
    /// iterator is exhausted.
    async fn next(&mut self) -> PipelineResult<Self::Item>;
}

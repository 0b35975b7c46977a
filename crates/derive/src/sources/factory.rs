//! Contains a Factory for creating calldata sources.

use crate::{
    sources::CalldataSource,
    traits::{BlobStore, ChainProvider, DataAvailabilityProvider},
};
use alloc::{boxed::Box, fmt::Debug, sync::Arc};
use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;
use op_near_primitives::{BlockID, RollupConfig};

/// A factory for creating a [CalldataSource] per L1 block.
#[derive(Debug, Clone)]
pub struct DataSourceFactory<CP, B>
where
    CP: ChainProvider + Send + Clone,
    B: BlobStore + Send + Clone,
{
    /// The chain provider to use for the factory.
    pub chain_provider: CP,
    /// The DA blob store handed to every source.
    pub blob_store: B,
    /// The rollup configuration.
    pub cfg: Arc<RollupConfig>,
}

impl<CP, B> DataSourceFactory<CP, B>
where
    CP: ChainProvider + Send + Clone,
    B: BlobStore + Send + Clone,
{
    /// Creates a new factory.
    pub const fn new(chain_provider: CP, blob_store: B, cfg: Arc<RollupConfig>) -> Self {
        Self { chain_provider, blob_store, cfg }
    }
}

impl<CP> DataSourceFactory<CP, ()>
where
    CP: ChainProvider + Send + Clone,
{
    /// Creates a factory for a rollup that posts batches inline, without a blob store.
    ///
    /// Sources opened by this factory fail every external blob lookup, so it must only be used
    /// with a [RollupConfig] that has no DA configuration.
    pub const fn new_inline(chain_provider: CP, cfg: Arc<RollupConfig>) -> Self {
        Self::new(chain_provider, (), cfg)
    }
}

#[async_trait]
impl<CP, B> DataAvailabilityProvider for DataSourceFactory<CP, B>
where
    CP: ChainProvider + Send + Sync + Clone + Debug,
    B: BlobStore + Send + Sync + Clone + Debug,
{
    type Item = Bytes;
    type DataIter = CalldataSource<CP, B>;

    async fn open_data(&self, block_id: BlockID, batcher_address: Address) -> Self::DataIter {
        CalldataSource::open(
            self.chain_provider.clone(),
            self.blob_store.clone(),
            self.cfg.clone(),
            block_id,
            batcher_address,
        )
        .await
    }
}

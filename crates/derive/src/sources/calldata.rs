//! CallData Source

use crate::{
    errors::{PipelineError, PipelineErrorKind, PipelineResult, ResetError},
    sources::data_from_evm_transactions,
    traits::{AsyncIterator, BlobStore, ChainProvider, ChainProviderError},
};
use alloc::{boxed::Box, collections::VecDeque, string::ToString, sync::Arc};
use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;
use op_near_primitives::{BlockID, RollupConfig};
use tracing::{debug, warn};

/// The lifecycle of a [CalldataSource].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceState {
    /// The block has not been loaded yet.
    Unopened,
    /// The block has been loaded and filtered. The source never leaves this state.
    Open,
    /// The chain provider does not know the block.
    Missing,
}

/// A data iterator that reads batch payloads from the calldata of an L1 block.
///
/// The block is fetched and filtered lazily. Failures while loading are deferred to
/// [AsyncIterator::next], which retries the load until it succeeds, or until the chain provider
/// reports the block as missing.
#[derive(Debug, Clone)]
pub struct CalldataSource<CP, B>
where
    CP: ChainProvider + Send,
    B: BlobStore + Send,
{
    /// The chain provider to use for the calldata source.
    pub chain_provider: CP,
    /// The DA blob store that frame references are resolved against.
    pub blob_store: B,
    /// The rollup configuration.
    pub cfg: Arc<RollupConfig>,
    /// The L1 block to read batches from.
    pub block_id: BlockID,
    /// The address of the batcher.
    pub batcher_address: Address,
    /// The current load state.
    state: SourceState,
    /// Current calldata.
    data: VecDeque<Bytes>,
}

impl<CP, B> CalldataSource<CP, B>
where
    CP: ChainProvider + Send,
    B: BlobStore + Send,
{
    /// Creates a new, unopened calldata source.
    pub const fn new(
        chain_provider: CP,
        blob_store: B,
        cfg: Arc<RollupConfig>,
        block_id: BlockID,
        batcher_address: Address,
    ) -> Self {
        Self {
            chain_provider,
            blob_store,
            cfg,
            block_id,
            batcher_address,
            state: SourceState::Unopened,
            data: VecDeque::new(),
        }
    }

    /// Creates a new calldata source and makes a first attempt at loading the block.
    ///
    /// A failed attempt is logged and otherwise ignored; it surfaces again from the first call
    /// to [AsyncIterator::next].
    pub async fn open(
        chain_provider: CP,
        blob_store: B,
        cfg: Arc<RollupConfig>,
        block_id: BlockID,
        batcher_address: Address,
    ) -> Self {
        let mut source = Self::new(chain_provider, blob_store, cfg, block_id, batcher_address);
        if let Err(e) = source.load_calldata().await {
            debug!(
                target: "calldata-source",
                "deferring calldata load, block: {}, err: {e}",
                source.block_id
            );
        }
        source
    }

    /// Returns `true` once the block has been loaded.
    pub fn is_open(&self) -> bool {
        self.state == SourceState::Open
    }

    /// Loads the calldata into the source if it is not open.
    ///
    /// The source is only mutated after every fetch has completed, so dropping the future
    /// midway leaves it untouched.
    async fn load_calldata(&mut self) -> PipelineResult<()> {
        match self.state {
            SourceState::Open => return Ok(()),
            SourceState::Missing => {
                return Err(ResetError::BlockNotFound(self.block_id.hash).reset());
            }
            SourceState::Unopened => {}
        }

        let txs = match self
            .chain_provider
            .block_info_and_transactions_by_hash(self.block_id.hash)
            .await
        {
            Ok((_, txs)) => txs,
            Err(e) if e.is_block_not_found() => {
                warn!(target: "calldata-source", "L1 block not found: {}", self.block_id);
                self.state = SourceState::Missing;
                return Err(ResetError::BlockNotFound(self.block_id.hash).reset());
            }
            Err(e) => {
                return Err(PipelineError::Provider(e.to_string()).temp());
            }
        };

        let da = self.cfg.da_config.as_ref().map(|da| (da, &mut self.blob_store));
        let data = data_from_evm_transactions(
            &txs,
            self.cfg.batch_inbox_address,
            self.batcher_address,
            da,
        )
        .await?;

        debug!(
            target: "calldata-source",
            "loaded {} batch payloads from block {}",
            data.len(),
            self.block_id
        );
        self.data = data.into();
        self.state = SourceState::Open;
        Ok(())
    }
}

#[async_trait]
impl<CP, B> AsyncIterator for CalldataSource<CP, B>
where
    CP: ChainProvider + Send,
    B: BlobStore + Send,
{
    type Item = Bytes;

    async fn next(&mut self) -> PipelineResult<Self::Item> {
        self.load_calldata().await?;
        self.data.pop_front().ok_or(PipelineErrorKind::Temporary(PipelineError::Eof))
    }
}

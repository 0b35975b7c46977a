//! Chain providers for the data sources.

use alloc::{boxed::Box, vec::Vec};
use alloy_consensus::TxEnvelope;
use alloy_primitives::B256;
use async_trait::async_trait;
use core::fmt::Display;
use op_near_primitives::BlockInfo;

/// Classifies the errors returned by a [ChainProvider].
pub trait ChainProviderError: Display {
    /// Returns `true` if the requested block is unknown to the provider.
    ///
    /// A missing block is terminal for the data source that requested it, unlike every other
    /// provider failure which is retried.
    fn is_block_not_found(&self) -> bool;
}

/// Describes the functionality of a data source that can provide information from the L1 chain.
#[async_trait]
pub trait ChainProvider {
    /// The error type for the [ChainProvider].
    type Error: ChainProviderError + Send;

    /// Returns the [BlockInfo] and list of [TxEnvelope]s from the given block hash.
    async fn block_info_and_transactions_by_hash(
        &mut self,
        hash: B256,
    ) -> Result<(BlockInfo, Vec<TxEnvelope>), Self::Error>;
}

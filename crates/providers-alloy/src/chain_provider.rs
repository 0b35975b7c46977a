//! Providers that use alloy provider types on the backend.

use alloy_consensus::{Block, TxEnvelope};
use alloy_primitives::{Bytes, B256};
use alloy_provider::{Provider, ReqwestProvider};
use alloy_rlp::Decodable;
use alloy_transport::{RpcError, TransportErrorKind};
use async_trait::async_trait;
use lru::LruCache;
use op_near_derive::traits::{ChainProvider, ChainProviderError};
use op_near_primitives::BlockInfo;
use std::{boxed::Box, num::NonZeroUsize, vec::Vec};
use tracing::debug;

/// The JSON-RPC error code geth answers `debug_getRawBlock` with for an unknown block.
const BLOCK_NOT_FOUND_CODE: i64 = -32000;

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(16) {
    Some(size) => size,
    None => panic!("cache size must be non-zero"),
};

/// The [AlloyChainProvider] is a concrete implementation of the [ChainProvider] trait, providing
/// data over Ethereum JSON-RPC using an alloy provider as the backend.
///
/// **Note**:
/// This provider fetches data using the `debug_getRawBlock` method. The RPC must support this
/// namespace.
#[derive(Debug, Clone)]
pub struct AlloyChainProvider {
    /// The inner Ethereum JSON-RPC provider.
    inner: ReqwestProvider,
    /// `block_info_and_transactions_by_hash` LRU cache.
    block_info_and_transactions_by_hash_cache: LruCache<B256, (BlockInfo, Vec<TxEnvelope>)>,
}

impl AlloyChainProvider {
    /// Creates a new [AlloyChainProvider] with the given alloy provider.
    pub fn new(inner: ReqwestProvider) -> Self {
        Self { inner, block_info_and_transactions_by_hash_cache: LruCache::new(CACHE_SIZE) }
    }

    /// Creates a new [AlloyChainProvider] from the provided [reqwest::Url].
    pub fn new_http(url: reqwest::Url) -> Self {
        let inner = ReqwestProvider::new_http(url);
        Self::new(inner)
    }

    /// Returns the chain ID.
    pub async fn chain_id(&mut self) -> Result<u64, RpcError<TransportErrorKind>> {
        self.inner.get_chain_id().await
    }

    /// Returns the hash of the block with the given number, if the node knows it.
    pub async fn block_hash_by_number(
        &mut self,
        number: u64,
    ) -> Result<Option<B256>, RpcError<TransportErrorKind>> {
        let block = self.inner.get_block_by_number(number.into(), false.into()).await?;
        Ok(block.map(|b| b.header.hash))
    }
}

/// An error for the [AlloyChainProvider].
#[derive(Debug, thiserror::Error)]
pub enum AlloyChainProviderError {
    /// The node does not know the block.
    #[error("Block not found for hash {0}")]
    BlockNotFound(B256),
    /// Failed to fetch the raw block.
    #[error("Failed to fetch raw block for hash {0}: {1}")]
    RawBlockFetch(B256, RpcError<TransportErrorKind>),
    /// Failed to decode the raw block.
    #[error("Failed to decode raw block for hash {0}: {1}")]
    RawBlockDecoding(B256, alloy_rlp::Error),
}

impl ChainProviderError for AlloyChainProviderError {
    fn is_block_not_found(&self) -> bool {
        matches!(self, Self::BlockNotFound(_))
    }
}

/// Maps an RPC failure of `debug_getRawBlock` to an [AlloyChainProviderError].
///
/// Nodes report an unknown block either with a `null` result or with a `-32000` error response
/// whose message says the block was not found.
fn classify_fetch_error(
    hash: B256,
    err: RpcError<TransportErrorKind>,
) -> AlloyChainProviderError {
    let not_found = err.as_error_resp().is_some_and(|payload| {
        payload.code == BLOCK_NOT_FOUND_CODE && payload.message.contains("not found")
    });
    if not_found {
        AlloyChainProviderError::BlockNotFound(hash)
    } else {
        AlloyChainProviderError::RawBlockFetch(hash, err)
    }
}

#[async_trait]
impl ChainProvider for AlloyChainProvider {
    type Error = AlloyChainProviderError;

    async fn block_info_and_transactions_by_hash(
        &mut self,
        hash: B256,
    ) -> Result<(BlockInfo, Vec<TxEnvelope>), Self::Error> {
        if let Some(block_info_and_txs) = self.block_info_and_transactions_by_hash_cache.get(&hash)
        {
            return Ok(block_info_and_txs.clone());
        }

        let raw_block: Option<Bytes> = self
            .inner
            .raw_request("debug_getRawBlock".into(), [hash])
            .await
            .map_err(|e| classify_fetch_error(hash, e))?;
        let Some(raw_block) = raw_block else {
            return Err(AlloyChainProviderError::BlockNotFound(hash));
        };
        let block: Block<TxEnvelope> = Block::decode(&mut raw_block.as_ref())
            .map_err(|e| AlloyChainProviderError::RawBlockDecoding(hash, e))?;

        let block_info = BlockInfo {
            hash: block.header.hash_slow(),
            number: block.header.number,
            parent_hash: block.header.parent_hash,
            timestamp: block.header.timestamp,
        };
        debug!(
            target: "chain-provider",
            "fetched block {}, transactions: {}",
            block_info.number,
            block.body.transactions.len()
        );
        self.block_info_and_transactions_by_hash_cache
            .put(hash, (block_info, block.body.transactions.clone()));
        Ok((block_info, block.body.transactions))
    }
}

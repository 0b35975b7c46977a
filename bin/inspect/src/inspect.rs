//! Drives a data source over a single L1 block.

use crate::InspectCli;
use alloy_primitives::Bytes;
use anyhow::{anyhow, bail, Result};
use op_near_derive::{
    errors::PipelineErrorKind,
    sources::DataSourceFactory,
    traits::{AsyncIterator, BlobStore, ChainProvider, DataAvailabilityProvider},
};
use op_near_primitives::BlockID;
use op_near_providers_alloy::{AlloyChainProvider, OnlineBlobStore};
use std::{fmt::Debug, sync::Arc, time::Duration};
use tracing::{info, warn};

/// Drains every payload from `source`.
///
/// Temporary errors are retried up to `max_retries` times in a row, waiting `retry_delay` in
/// between. Reset and critical errors stop the drain.
pub async fn drain_source<I>(
    source: &mut I,
    max_retries: u32,
    retry_delay: Duration,
) -> Result<Vec<I::Item>>
where
    I: AsyncIterator + Send,
{
    let mut payloads = Vec::new();
    let mut retries = 0;
    loop {
        match source.next().await {
            Ok(payload) => {
                retries = 0;
                payloads.push(payload);
            }
            Err(e) if e.is_eof() => return Ok(payloads),
            Err(PipelineErrorKind::Temporary(e)) => {
                if retries >= max_retries {
                    bail!("giving up after {retries} retries: {e}");
                }
                retries += 1;
                warn!(target: "inspect", "temporary error, retry {retries}/{max_retries}: {e}");
                tokio::time::sleep(retry_delay).await;
            }
            Err(e) => bail!("data source failed: {e}"),
        }
    }
}

/// Runs the inspect command: resolves the L1 block, opens a data source for it and prints every
/// batch payload to stdout.
pub async fn run(cli: InspectCli) -> Result<()> {
    let cfg = cli.read_rollup_config()?;
    let mut chain_provider = AlloyChainProvider::new_http(cli.l1_node_address.clone());

    let chain_id = chain_provider.chain_id().await?;
    if chain_id != cfg.l1_chain_id {
        warn!(
            target: "inspect",
            "L1 chain id mismatch, rollup config: {}, node: {chain_id}",
            cfg.l1_chain_id
        );
    }

    let block_hash = match (cli.l1_block_hash, cli.l1_block_number) {
        (Some(hash), _) => hash,
        (None, Some(number)) => chain_provider
            .block_hash_by_number(number)
            .await?
            .ok_or_else(|| anyhow!("L1 block {number} not found"))?,
        (None, None) => bail!("either --l1-block-hash or --l1-block-number must be set"),
    };
    let (block_info, _) = chain_provider
        .block_info_and_transactions_by_hash(block_hash)
        .await
        .map_err(|e| anyhow!("Error fetching L1 block: {e}"))?;
    let block_id = block_info.id();
    let batcher_address = cli.batcher_address(&cfg);
    info!(target: "inspect", "reading batches from block {block_id}, batcher: {batcher_address}");

    let payloads = match cfg.da_config {
        Some(da_config) => {
            let da_address = cli
                .da_address
                .clone()
                .ok_or_else(|| anyhow!("--da-address is required when external DA is enabled"))?;
            let blob_store = OnlineBlobStore::new_http(da_address, da_config.namespace);
            let factory = DataSourceFactory::new(chain_provider, blob_store, Arc::new(cfg));
            open_and_drain(&factory, block_id, &cli).await?
        }
        None => {
            let factory = DataSourceFactory::new_inline(chain_provider, Arc::new(cfg));
            open_and_drain(&factory, block_id, &cli).await?
        }
    };

    info!(target: "inspect", "extracted {} batch payloads", payloads.len());
    for payload in payloads {
        println!("{payload}");
    }
    Ok(())
}

async fn open_and_drain<CP, B>(
    factory: &DataSourceFactory<CP, B>,
    block_id: BlockID,
    cli: &InspectCli,
) -> Result<Vec<Bytes>>
where
    CP: ChainProvider + Send + Sync + Clone + Debug,
    B: BlobStore + Send + Sync + Clone + Debug,
{
    let batcher_address = cli.batcher_address(factory.cfg.as_ref());
    let mut source = factory.open_data(block_id, batcher_address).await;
    drain_source(&mut source, cli.max_retries, cli.retry_delay()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::B256;
    use async_trait::async_trait;
    use op_near_derive::errors::{PipelineError, PipelineResult, ResetError};
    use std::collections::VecDeque;

    #[derive(Debug)]
    struct ScriptedSource {
        results: VecDeque<PipelineResult<Bytes>>,
        calls: usize,
    }

    impl ScriptedSource {
        fn new(results: Vec<PipelineResult<Bytes>>) -> Self {
            Self { results: results.into(), calls: 0 }
        }
    }

    #[async_trait]
    impl AsyncIterator for ScriptedSource {
        type Item = Bytes;

        async fn next(&mut self) -> PipelineResult<Self::Item> {
            self.calls += 1;
            self.results.pop_front().unwrap_or(Err(PipelineError::Eof.temp()))
        }
    }

    #[tokio::test]
    async fn test_drain_retries_temporary_errors() {
        let mut source = ScriptedSource::new(vec![
            Err(PipelineError::Provider("timeout".into()).temp()),
            Ok(Bytes::from_static(b"a")),
            Err(PipelineError::Provider("timeout".into()).temp()),
            Ok(Bytes::from_static(b"b")),
        ]);
        let payloads = drain_source(&mut source, 1, Duration::ZERO).await.unwrap();
        assert_eq!(payloads, vec![Bytes::from_static(b"a"), Bytes::from_static(b"b")]);
        assert_eq!(source.calls, 5);
    }

    #[tokio::test]
    async fn test_drain_gives_up_after_max_retries() {
        let mut source = ScriptedSource::new(vec![
            Err(PipelineError::Provider("timeout".into()).temp()),
            Err(PipelineError::Provider("timeout".into()).temp()),
            Ok(Bytes::from_static(b"late")),
        ]);
        let err = drain_source(&mut source, 1, Duration::ZERO).await.unwrap_err();
        assert!(err.to_string().contains("giving up after 1 retries"));
    }

    #[tokio::test]
    async fn test_drain_stops_on_reset() {
        let mut source = ScriptedSource::new(vec![
            Err(ResetError::BlockNotFound(B256::ZERO).reset()),
            Ok(Bytes::from_static(b"unreachable")),
        ]);
        assert!(drain_source(&mut source, 3, Duration::ZERO).await.is_err());
        assert_eq!(source.calls, 1);
    }
}

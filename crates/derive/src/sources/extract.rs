//! Batch data extraction from L1 transactions.

use crate::{
    errors::{BlobStoreError, PipelineResult},
    traits::{BlobStore, SignedRecoverable},
};
use alloc::vec::Vec;
use alloy_consensus::{Transaction, TxEnvelope};
use alloy_primitives::{Address, Bytes};
use op_near_primitives::{DaConfig, FrameRef};
use tracing::{debug, warn};

/// Filters the transactions of an L1 block down to the batches submitted by the batcher.
///
/// A transaction is admissible if it is sent to `batch_inbox_address` and its recovered sender
/// is `batcher_address`. Transactions with an invalid signature or from any other sender are
/// logged and skipped.
///
/// Without a DA configuration the calldata of each admissible transaction is returned as is, and
/// the blob store is never touched. With one, the calldata must be a [FrameRef] and the payload is
/// the blob it points at:
/// - a calldata that does not decode as a [FrameRef] aborts the whole block;
/// - a blob the store does not have is logged and skipped;
/// - any other store failure aborts the whole block;
/// - a commitment mismatch is logged, and the blob is skipped only if
///   [DaConfig::reject_commitment_mismatch] is set.
///
/// The returned payloads are in transaction order. An empty list is not an error.
pub async fn data_from_evm_transactions<B>(
    txs: &[TxEnvelope],
    batch_inbox_address: Address,
    batcher_address: Address,
    mut da: Option<(&DaConfig, &mut B)>,
) -> PipelineResult<Vec<Bytes>>
where
    B: BlobStore + Send + ?Sized,
{
    let mut out = Vec::new();
    for (index, tx) in txs.iter().enumerate() {
        let to: Option<Address> = tx.to().into();
        if to != Some(batch_inbox_address) {
            continue;
        }

        let sender = match tx.recover_sender() {
            Ok(sender) => sender,
            Err(e) => {
                warn!(
                    target: "extract",
                    "tx in inbox with invalid signature, index: {index}, err: {e}"
                );
                continue;
            }
        };
        if sender != batcher_address {
            warn!(
                target: "extract",
                "tx in inbox with unauthorized submitter, index: {index}, sender: {sender}"
            );
            continue;
        }

        let Some((da_config, store)) = da.as_mut() else {
            out.push(Bytes::copy_from_slice(tx.input()));
            continue;
        };

        let frame_ref = FrameRef::decode(tx.input()).inspect_err(|e| {
            warn!(target: "extract", "unable to decode frame reference, index: {index}, err: {e}");
        })?;

        debug!(
            target: "extract",
            "requesting blob, namespace: {}, tx_id: {}",
            da_config.namespace,
            frame_ref.tx_id
        );
        let blob = match store.get_blob(frame_ref.tx_id).await {
            Ok(blob) => blob,
            Err(BlobStoreError::NotFound(tx_id)) => {
                warn!(
                    target: "extract",
                    "no blob returned from the DA store, namespace: {}, tx_id: {tx_id}",
                    da_config.namespace
                );
                continue;
            }
            Err(e) => {
                warn!(target: "extract", "blob store failure, index: {index}, err: {e}");
                return Err(e.into());
            }
        };

        if blob.commitment != frame_ref.commitment {
            warn!(
                target: "extract",
                "blob commitment mismatch, index: {index}, expected: {}, got: {}",
                frame_ref.commitment,
                blob.commitment
            );
            if da_config.reject_commitment_mismatch {
                continue;
            }
        } else {
            debug!(target: "extract", "blob commitments match, tx_id: {}", frame_ref.tx_id);
        }

        out.push(blob.data);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::{PipelineError, PipelineErrorKind},
        test_utils::{
            batcher_signer, invalid_signature_tx, signed_tx, CollectingLayer, TestBlobStore,
            TraceStorage,
        },
    };
    use alloc::vec;
    use alloy_primitives::{address, B256};
    use alloy_signer_local::PrivateKeySigner;
    use op_near_primitives::{DaBlob, FrameRefError, Namespace};
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    const INBOX: Address = address!("ff00000000000000000000000000000000000010");
    const OTHER: Address = address!("000000000000000000000000000000000000dead");

    fn other_signer() -> PrivateKeySigner {
        PrivateKeySigner::from_bytes(&B256::repeat_byte(0x22)).unwrap()
    }

    /// Extracts the inbox payloads of `txs` with DA disabled.
    async fn inline_data(txs: &[TxEnvelope], batcher: Address) -> Vec<Bytes> {
        data_from_evm_transactions::<TestBlobStore>(txs, INBOX, batcher, None).await.unwrap()
    }

    fn da_config() -> DaConfig {
        DaConfig::new(Namespace::new(0, 1))
    }

    #[tokio::test]
    async fn test_inline_filters_inbox_and_sender() {
        let batcher = batcher_signer();
        let txs = vec![
            signed_tx(&batcher, INBOX, Bytes::from_static(b"A")),
            signed_tx(&other_signer(), INBOX, Bytes::from_static(b"B")),
            signed_tx(&batcher, OTHER, Bytes::from_static(b"C")),
        ];

        let data = inline_data(&txs, batcher.address()).await;
        assert_eq!(data, vec![Bytes::from_static(b"A")]);
    }

    #[tokio::test]
    async fn test_inline_preserves_transaction_order() {
        let batcher = batcher_signer();
        let txs = vec![
            signed_tx(&batcher, INBOX, Bytes::from_static(b"first")),
            signed_tx(&batcher, OTHER, Bytes::from_static(b"ignored")),
            signed_tx(&batcher, INBOX, Bytes::from_static(b"second")),
        ];

        let data = inline_data(&txs, batcher.address()).await;
        assert_eq!(data, vec![Bytes::from_static(b"first"), Bytes::from_static(b"second")]);
    }

    #[tokio::test]
    async fn test_inline_with_config_absent_never_touches_store() {
        let batcher = batcher_signer();
        let mut store = TestBlobStore::default();
        let frame_ref = FrameRef::new(B256::repeat_byte(1), B256::repeat_byte(2));
        store.insert_blob(frame_ref.tx_id, DaBlob::new(Bytes::from_static(b"blob"), B256::ZERO));
        let txs = vec![signed_tx(&batcher, INBOX, frame_ref.to_bytes())];

        let data = inline_data(&txs, batcher.address()).await;
        assert_eq!(data, vec![frame_ref.to_bytes()]);
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_signature_is_skipped() {
        let trace_store = TraceStorage::default();
        let layer = CollectingLayer::new(trace_store.clone());
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::Registry::default().with(layer));

        let batcher = batcher_signer();
        let txs = vec![
            invalid_signature_tx(INBOX, Bytes::from_static(b"forged")),
            signed_tx(&batcher, INBOX, Bytes::from_static(b"valid")),
        ];

        let data = inline_data(&txs, batcher.address()).await;
        assert_eq!(data, vec![Bytes::from_static(b"valid")]);

        let logs = trace_store.get_by_level(Level::WARN);
        assert_eq!(logs.len(), 1);
        assert!(logs[0].contains("tx in inbox with invalid signature"));
    }

    #[tokio::test]
    async fn test_unauthorized_submitter_is_logged() {
        let trace_store = TraceStorage::default();
        let layer = CollectingLayer::new(trace_store.clone());
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::Registry::default().with(layer));

        let batcher = batcher_signer();
        let txs = vec![signed_tx(&other_signer(), INBOX, Bytes::from_static(b"spam"))];

        let data = inline_data(&txs, batcher.address()).await;
        assert!(data.is_empty());

        let logs = trace_store.get_by_level(Level::WARN);
        assert_eq!(logs.len(), 1);
        assert!(logs[0].contains("unauthorized submitter"));
    }

    #[tokio::test]
    async fn test_da_resolves_blobs_and_skips_missing() {
        let batcher = batcher_signer();
        let found = FrameRef::new(B256::repeat_byte(1), B256::repeat_byte(0xc1));
        let missing = FrameRef::new(B256::repeat_byte(2), B256::repeat_byte(0xc2));
        let also_found = FrameRef::new(B256::repeat_byte(3), B256::repeat_byte(0xc3));

        let mut store = TestBlobStore::default();
        store.insert_blob(found.tx_id, DaBlob::new(Bytes::from_static(b"one"), found.commitment));
        store.insert_blob(
            also_found.tx_id,
            DaBlob::new(Bytes::from_static(b"three"), also_found.commitment),
        );

        let txs = vec![
            signed_tx(&batcher, INBOX, found.to_bytes()),
            signed_tx(&batcher, INBOX, missing.to_bytes()),
            signed_tx(&batcher, INBOX, also_found.to_bytes()),
        ];

        let cfg = da_config();
        let data = data_from_evm_transactions(
            &txs,
            INBOX,
            batcher.address(),
            Some((&cfg, &mut store)),
        )
        .await
        .unwrap();
        assert_eq!(data, vec![Bytes::from_static(b"one"), Bytes::from_static(b"three")]);
        assert_eq!(store.call_count(), 3);
    }

    #[tokio::test]
    async fn test_da_malformed_reference_aborts_block() {
        let batcher = batcher_signer();
        let valid = FrameRef::new(B256::repeat_byte(1), B256::repeat_byte(0xc1));
        let mut store = TestBlobStore::default();
        store.insert_blob(valid.tx_id, DaBlob::new(Bytes::from_static(b"one"), valid.commitment));

        let txs = vec![
            signed_tx(&batcher, INBOX, valid.to_bytes()),
            signed_tx(&batcher, INBOX, Bytes::from_static(b"bad")),
        ];

        let cfg = da_config();
        let err = data_from_evm_transactions(
            &txs,
            INBOX,
            batcher.address(),
            Some((&cfg, &mut store)),
        )
        .await
        .unwrap_err();
        assert_eq!(err, PipelineError::BadEncoding(FrameRefError::InvalidSize(3)).crit());
    }

    #[tokio::test]
    async fn test_da_store_failure_aborts_block() {
        let batcher = batcher_signer();
        let frame_ref = FrameRef::new(B256::repeat_byte(1), B256::repeat_byte(0xc1));
        let mut store = TestBlobStore { should_error: true, ..Default::default() };
        let txs = vec![signed_tx(&batcher, INBOX, frame_ref.to_bytes())];

        let cfg = da_config();
        let err = data_from_evm_transactions(
            &txs,
            INBOX,
            batcher.address(),
            Some((&cfg, &mut store)),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, PipelineErrorKind::Temporary(PipelineError::Provider(_))));
    }

    #[tokio::test]
    async fn test_da_commitment_mismatch_is_delivered() {
        let trace_store = TraceStorage::default();
        let layer = CollectingLayer::new(trace_store.clone());
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::Registry::default().with(layer));

        let batcher = batcher_signer();
        let frame_ref = FrameRef::new(B256::repeat_byte(1), B256::repeat_byte(0xc1));
        let mut store = TestBlobStore::default();
        store.insert_blob(
            frame_ref.tx_id,
            DaBlob::new(Bytes::from_static(b"payload"), B256::repeat_byte(0xff)),
        );
        let txs = vec![signed_tx(&batcher, INBOX, frame_ref.to_bytes())];

        let cfg = da_config();
        let data = data_from_evm_transactions(
            &txs,
            INBOX,
            batcher.address(),
            Some((&cfg, &mut store)),
        )
        .await
        .unwrap();
        assert_eq!(data, vec![Bytes::from_static(b"payload")]);

        let logs = trace_store.get_by_level(Level::WARN);
        assert_eq!(logs.len(), 1);
        assert!(logs[0].contains("blob commitment mismatch"));
    }

    #[tokio::test]
    async fn test_da_commitment_mismatch_rejected_when_strict() {
        let batcher = batcher_signer();
        let bad = FrameRef::new(B256::repeat_byte(1), B256::repeat_byte(0xc1));
        let good = FrameRef::new(B256::repeat_byte(2), B256::repeat_byte(0xc2));
        let mut store = TestBlobStore::default();
        store.insert_blob(bad.tx_id, DaBlob::new(Bytes::from_static(b"bad"), B256::ZERO));
        store.insert_blob(good.tx_id, DaBlob::new(Bytes::from_static(b"good"), good.commitment));
        let txs = vec![
            signed_tx(&batcher, INBOX, bad.to_bytes()),
            signed_tx(&batcher, INBOX, good.to_bytes()),
        ];

        let cfg = da_config().with_reject_commitment_mismatch(true);
        let data = data_from_evm_transactions(
            &txs,
            INBOX,
            batcher.address(),
            Some((&cfg, &mut store)),
        )
        .await
        .unwrap();
        assert_eq!(data, vec![Bytes::from_static(b"good")]);
    }

    #[tokio::test]
    async fn test_da_unauthorized_never_queries_store() {
        let batcher = batcher_signer();
        let frame_ref = FrameRef::new(B256::repeat_byte(1), B256::repeat_byte(0xc1));
        let mut store = TestBlobStore::default();
        let txs = vec![signed_tx(&other_signer(), INBOX, frame_ref.to_bytes())];

        let cfg = da_config();
        let data = data_from_evm_transactions(
            &txs,
            INBOX,
            batcher.address(),
            Some((&cfg, &mut store)),
        )
        .await
        .unwrap();
        assert!(data.is_empty());
        assert_eq!(store.call_count(), 0);
    }
}

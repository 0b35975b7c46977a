//! Test Utilities for `op-near-derive`.

mod chain_providers;
pub use chain_providers::{TestChainProvider, TestProviderError};

mod blob_store;
pub use blob_store::TestBlobStore;

mod transactions;
pub use transactions::{batcher_signer, invalid_signature_tx, signed_tx};

mod tracing;
pub use self::tracing::{CollectingLayer, TraceStorage};

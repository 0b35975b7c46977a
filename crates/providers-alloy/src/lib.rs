#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod chain_provider;
pub use chain_provider::{AlloyChainProvider, AlloyChainProviderError};

mod blob_store;
pub use blob_store::{APIBlobResponse, OnlineBlobStore};

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(any(test, feature = "test-utils")), warn(unused_crate_dependencies))]

extern crate alloc;

/// Re-export commonly used types and traits.
pub mod prelude {
    pub use crate::{
        errors::{PipelineError, PipelineErrorKind, PipelineResult, ResetError},
        sources::{data_from_evm_transactions, CalldataSource, DataSourceFactory},
        traits::{AsyncIterator, BlobStore, ChainProvider, DataAvailabilityProvider},
    };
}

pub mod errors;
pub mod sources;
pub mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

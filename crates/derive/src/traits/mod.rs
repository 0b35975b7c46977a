//! This module contains the traits describing the collaborators of the data sources.

mod data_sources;
pub use data_sources::{AsyncIterator, DataAvailabilityProvider};

mod blobs;
pub use blobs::BlobStore;

mod providers;
pub use providers::{ChainProvider, ChainProviderError};

mod ecrecover;
pub use ecrecover::SignedRecoverable;

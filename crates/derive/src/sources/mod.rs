//! The data source module.
//!
//! Data sources are data providers for the derivation pipeline.
//! They implement the [AsyncIterator] trait, yielding the batch payloads submitted in a single
//! L1 block, and are opened through the [DataAvailabilityProvider] implemented by the
//! [DataSourceFactory].
//!
//! [AsyncIterator]: crate::traits::AsyncIterator
//! [DataAvailabilityProvider]: crate::traits::DataAvailabilityProvider

mod extract;
pub use extract::data_from_evm_transactions;

mod calldata;
pub use calldata::CalldataSource;

mod factory;
pub use factory::DataSourceFactory;

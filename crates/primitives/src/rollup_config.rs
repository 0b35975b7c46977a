//! This module contains the [RollupConfig] type.

use crate::DaConfig;
use alloy_primitives::Address;

/// The subset of the rollup configuration needed to source batch data from L1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollupConfig {
    /// The L1 chain ID
    pub l1_chain_id: u64,
    /// `batch_inbox_address` is the L1 address that batches are sent to.
    pub batch_inbox_address: Address,
    /// The batcher address configured at genesis.
    pub batcher_address: Address,
    /// The external DA configuration. Batches are read inline from calldata when unset.
    #[cfg_attr(feature = "serde", serde(default))]
    pub da_config: Option<DaConfig>,
}

impl RollupConfig {
    /// Returns `true` if batch calldata references blobs in the external DA layer.
    pub const fn is_da_enabled(&self) -> bool {
        self.da_config.is_some()
    }
}

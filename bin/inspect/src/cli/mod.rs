//! This module contains all CLI-specific code for the inspect binary.

use alloy_primitives::{Address, B256};
use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser};
use op_near_primitives::{Namespace, RollupConfig};
use std::{path::PathBuf, time::Duration};

mod parser;
pub use parser::{parse_address, parse_b256, parse_namespace};

mod tracing_util;
pub use tracing_util::init_tracing_subscriber;

/// The inspect binary CLI application arguments.
#[derive(Parser, Clone, Debug)]
#[command(version, about)]
pub struct InspectCli {
    /// Verbosity level (0-4)
    #[arg(long, short, help = "Verbosity level (0-4)", action = ArgAction::Count)]
    pub v: u8,
    /// Address of L1 JSON-RPC endpoint to use (eth and debug namespace required).
    #[clap(long, env = "L1_NODE_ADDRESS")]
    pub l1_node_address: reqwest::Url,
    /// Address of the DA sidecar. Required when the rollup config enables external DA.
    #[clap(long, env = "DA_ADDRESS")]
    pub da_address: Option<String>,
    /// Path to the rollup config.
    #[clap(long)]
    pub rollup_config_path: PathBuf,
    /// Hash of the L1 block to read batches from.
    #[clap(
        long,
        value_parser = parse_b256,
        conflicts_with = "l1_block_number",
        required_unless_present = "l1_block_number"
    )]
    pub l1_block_hash: Option<B256>,
    /// Number of the L1 block to read batches from.
    #[clap(long, conflicts_with = "l1_block_hash", required_unless_present = "l1_block_hash")]
    pub l1_block_number: Option<u64>,
    /// Overrides the batcher address from the rollup config.
    #[clap(long, value_parser = parse_address)]
    pub batcher_address: Option<Address>,
    /// Overrides the DA namespace from the rollup config, as a hex encoded version 0 id.
    #[clap(long, value_parser = parse_namespace)]
    pub namespace: Option<Namespace>,
    /// Number of times a temporary data source error is retried before giving up.
    #[clap(long, default_value_t = 5)]
    pub max_retries: u32,
    /// Delay between retries, in milliseconds.
    #[clap(long, default_value_t = 1000)]
    pub retry_delay_ms: u64,
}

impl InspectCli {
    /// Reads the [RollupConfig] from the file system and applies the CLI overrides.
    pub fn read_rollup_config(&self) -> Result<RollupConfig> {
        // Read the serialized config from the file system.
        let ser_config = std::fs::read_to_string(&self.rollup_config_path)
            .map_err(|e| anyhow!("Error reading RollupConfig file: {e}"))?;

        // Deserialize the config and return it.
        let mut cfg: RollupConfig = serde_json::from_str(&ser_config)
            .map_err(|e| anyhow!("Error deserializing RollupConfig: {e}"))?;

        if let Some(namespace) = self.namespace {
            match cfg.da_config.as_mut() {
                Some(da_config) => da_config.namespace = namespace,
                None => {
                    return Err(anyhow!("--namespace requires a da_config in the rollup config"))
                }
            }
        }
        Ok(cfg)
    }

    /// Returns the batcher address to authenticate submissions against.
    pub fn batcher_address(&self, cfg: &RollupConfig) -> Address {
        self.batcher_address.unwrap_or(cfg.batcher_address)
    }

    /// Returns the delay between retries of temporary errors.
    pub const fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

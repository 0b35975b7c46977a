//! Parser functions for CLI arguments.

use alloy_primitives::{Address, B256};
use op_near_primitives::Namespace;
use std::str::FromStr;

/// Parse a string slice into [B256].
pub fn parse_b256(s: &str) -> Result<B256, String> {
    B256::from_str(s).map_err(|_| format!("Invalid B256 value: {}", s))
}

/// Parse a string slice into an [Address].
pub fn parse_address(s: &str) -> Result<Address, String> {
    Address::from_str(s).map_err(|_| format!("Invalid address: {}", s))
}

/// Parse a hex encoded version 0 namespace id into a [Namespace].
pub fn parse_namespace(s: &str) -> Result<Namespace, String> {
    Namespace::from_hex_v0(s).map_err(|e| format!("Invalid namespace {}: {}", s, e))
}

//! Contains the [DaBlob] type.

use alloy_primitives::{Bytes, B256};

/// A blob resolved from the external DA store.
///
/// Both fields are owned copies; a store backend must not hand out references into buffers it
/// releases afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaBlob {
    /// The blob payload.
    pub data: Bytes,
    /// The commitment reported by the store for the payload.
    pub commitment: B256,
}

impl DaBlob {
    /// Creates a new [DaBlob].
    pub const fn new(data: Bytes, commitment: B256) -> Self {
        Self { data, commitment }
    }
}

//! Contains the [FrameRef] type and its fixed-width binary codec.
//!
//! When an external DA layer is active, the batcher posts a [FrameRef] as the calldata of its
//! batch inbox transaction instead of the batch itself. The reference locates the blob in the DA
//! store by the DA transaction id, and carries the commitment the resolved blob must satisfy.
//!
//! ```text
//! +----------------------+----------------------+
//! | 32 byte tx id        | 32 byte commitment   |
//! +----------------------+----------------------+
//! | <---- [0, 32) -----> | <---- [32, 64) ----> |
//! +----------------------+----------------------+
//! ```

use alloy_primitives::{Bytes, B256};

/// The size of an encoded [FrameRef], in bytes.
pub const FRAME_REF_SIZE: usize = 64;

/// An error decoding a [FrameRef].
#[derive(derive_more::Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRefError {
    /// The input is not exactly [FRAME_REF_SIZE] bytes long.
    #[display("Invalid frame reference size: expected {FRAME_REF_SIZE}, got {_0}")]
    InvalidSize(usize),
}

impl core::error::Error for FrameRefError {}

/// A reference to a batch frame stored in the external DA layer.
///
/// Lookups are keyed by [FrameRef::tx_id], the id of the DA transaction that carried the blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameRef {
    /// The DA transaction id that the blob was submitted in.
    pub tx_id: B256,
    /// The commitment over the blob data.
    pub commitment: B256,
}

impl FrameRef {
    /// Creates a new [FrameRef].
    pub const fn new(tx_id: B256, commitment: B256) -> Self {
        Self { tx_id, commitment }
    }

    /// Encodes the [FrameRef] into its 64 byte wire format.
    pub fn encode(&self) -> [u8; FRAME_REF_SIZE] {
        let mut out = [0u8; FRAME_REF_SIZE];
        out[..32].copy_from_slice(self.tx_id.as_slice());
        out[32..].copy_from_slice(self.commitment.as_slice());
        out
    }

    /// Encodes the [FrameRef] into [Bytes], as posted in batcher calldata.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.encode())
    }

    /// Decodes a [FrameRef] from its wire format.
    ///
    /// The input must be exactly [FRAME_REF_SIZE] bytes long. Trailing bytes are rejected so a
    /// reference is never silently truncated.
    pub fn decode(data: &[u8]) -> Result<Self, FrameRefError> {
        if data.len() != FRAME_REF_SIZE {
            return Err(FrameRefError::InvalidSize(data.len()));
        }
        Ok(Self {
            tx_id: B256::from_slice(&data[..32]),
            commitment: B256::from_slice(&data[32..]),
        })
    }
}

impl TryFrom<&[u8]> for FrameRef {
    type Error = FrameRefError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::decode(data)
    }
}

impl From<FrameRef> for Bytes {
    fn from(frame_ref: FrameRef) -> Self {
        frame_ref.to_bytes()
    }
}

//! Contains the external DA configuration.

use alloy_primitives::hex;

/// The largest namespace id, in bytes.
const NAMESPACE_ID_SIZE: usize = 4;

/// An error parsing a [Namespace].
#[derive(derive_more::Display, Debug, Clone, PartialEq, Eq)]
pub enum NamespaceError {
    /// The namespace is not valid hex.
    #[display("Invalid namespace hex")]
    InvalidHex,
    /// The namespace is empty.
    #[display("Empty namespace")]
    Empty,
    /// The namespace id does not fit in [NAMESPACE_ID_SIZE] bytes.
    #[display("Namespace too long: expected at most {NAMESPACE_ID_SIZE} bytes, got {_0}")]
    TooLong(usize),
}

impl core::error::Error for NamespaceError {}

/// The DA namespace that batch blobs are posted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Namespace {
    /// The namespace version.
    pub version: u8,
    /// The namespace id.
    pub id: u32,
}

impl Namespace {
    /// Creates a new [Namespace].
    pub const fn new(version: u8, id: u32) -> Self {
        Self { version, id }
    }

    /// Parses a version 0 namespace from a big-endian hex encoded id, with or without a `0x`
    /// prefix.
    pub fn from_hex_v0(s: &str) -> Result<Self, NamespaceError> {
        let bytes = hex::decode(s).map_err(|_| NamespaceError::InvalidHex)?;
        if bytes.is_empty() {
            return Err(NamespaceError::Empty);
        }
        if bytes.len() > NAMESPACE_ID_SIZE {
            return Err(NamespaceError::TooLong(bytes.len()));
        }
        let id = bytes.iter().fold(0u32, |acc, b| (acc << 8) | *b as u32);
        Ok(Self::new(0, id))
    }
}

impl core::fmt::Display for Namespace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "v{}:{:#010x}", self.version, self.id)
    }
}

/// The external DA configuration.
///
/// When present in the [crate::RollupConfig], batch inbox calldata is interpreted as a
/// [crate::FrameRef] and the batch itself is resolved from the DA blob store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaConfig {
    /// The namespace that batches are posted under.
    pub namespace: Namespace,
    /// Skip blobs whose store commitment differs from the one in the frame reference.
    ///
    /// When unset, a mismatch is only logged and the blob is still returned.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reject_commitment_mismatch: bool,
}

impl DaConfig {
    /// Creates a new [DaConfig] for the given [Namespace].
    pub const fn new(namespace: Namespace) -> Self {
        Self { namespace, reject_commitment_mismatch: false }
    }

    /// Sets whether blobs with a mismatched commitment are rejected.
    pub const fn with_reject_commitment_mismatch(mut self, reject: bool) -> Self {
        self.reject_commitment_mismatch = reject;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_from_hex_v0() {
        assert_eq!(Namespace::from_hex_v0("0x01").unwrap(), Namespace::new(0, 1));
        assert_eq!(Namespace::from_hex_v0("deadbeef").unwrap(), Namespace::new(0, 0xdeadbeef));
        assert_eq!(Namespace::from_hex_v0("0x").unwrap_err(), NamespaceError::Empty);
        assert_eq!(Namespace::from_hex_v0("zz").unwrap_err(), NamespaceError::InvalidHex);
        assert_eq!(Namespace::from_hex_v0("0102030405").unwrap_err(), NamespaceError::TooLong(5));
    }

    #[test]
    fn test_namespace_display() {
        assert_eq!(Namespace::new(0, 0xbeef).to_string(), "v0:0x0000beef");
    }

    #[test]
    fn test_da_config_builder() {
        let cfg = DaConfig::new(Namespace::new(0, 1));
        assert!(!cfg.reject_commitment_mismatch);
        assert!(cfg.with_reject_commitment_mismatch(true).reject_commitment_mismatch);
    }
}

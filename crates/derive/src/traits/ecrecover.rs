//! This module contains the [SignedRecoverable] trait.
//!
//! This trait exists to allow for alternative implementations of sender recovery for signed
//! types that can supply the original message hash. It is implemented for
//! [alloy_consensus::TxEnvelope].

use alloy_consensus::TxEnvelope;
use alloy_primitives::{Address, Signature, SignatureError, B256};

/// Represents a signed transaction whose sender can be recovered.
pub trait SignedRecoverable {
    /// Recovers the sender address from the signature and the signature hash.
    fn recover_sender(&self) -> Result<Address, SignatureError>;
}

impl SignedRecoverable for TxEnvelope {
    fn recover_sender(&self) -> Result<Address, SignatureError> {
        match self {
            Self::Legacy(signed_tx) => {
                recover_sender(signed_tx.signature(), &signed_tx.signature_hash())
            }
            Self::Eip2930(signed_tx) => {
                recover_sender(signed_tx.signature(), &signed_tx.signature_hash())
            }
            Self::Eip1559(signed_tx) => {
                recover_sender(signed_tx.signature(), &signed_tx.signature_hash())
            }
            Self::Eip4844(signed_tx) => {
                recover_sender(signed_tx.signature(), &signed_tx.signature_hash())
            }
            Self::Eip7702(signed_tx) => {
                recover_sender(signed_tx.signature(), &signed_tx.signature_hash())
            }
            #[allow(unreachable_patterns)]
            _ => Err(SignatureError::FromBytes("unsupported transaction type")),
        }
    }
}

/// Recovers the signer address from a signature and a message hash.
#[inline]
fn recover_sender(sig: &Signature, message_hash: &B256) -> Result<Address, SignatureError> {
    sig.recover_address_from_prehash(message_hash)
}

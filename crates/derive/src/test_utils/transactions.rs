//! Helpers for building signed batcher transactions.

use alloy_consensus::{SignableTransaction, TxEip1559, TxEnvelope};
use alloy_primitives::{Address, Bytes, Parity, Signature, TxKind, B256, U256};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;

/// Returns the deterministic signer used as the batcher in tests.
pub fn batcher_signer() -> PrivateKeySigner {
    PrivateKeySigner::from_bytes(&B256::repeat_byte(0x11)).expect("valid private key")
}

fn unsigned_tx(to: Address, input: Bytes) -> TxEip1559 {
    TxEip1559 { chain_id: 1, to: TxKind::Call(to), input, ..Default::default() }
}

/// Builds an EIP-1559 transaction to `to` carrying `input`, signed by `signer`.
pub fn signed_tx(signer: &PrivateKeySigner, to: Address, input: Bytes) -> TxEnvelope {
    let tx = unsigned_tx(to, input);
    let sig = signer.sign_hash_sync(&tx.signature_hash()).expect("signing succeeds");
    tx.into_signed(sig).into()
}

/// Builds a transaction to `to` whose signature does not recover to any address.
pub fn invalid_signature_tx(to: Address, input: Bytes) -> TxEnvelope {
    let sig = Signature::new(U256::ZERO, U256::ZERO, Parity::Parity(false));
    unsigned_tx(to, input).into_signed(sig).into()
}

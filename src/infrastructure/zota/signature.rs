//! Request signatures.
//!
//! Zota recomputes the signature on its side, so the field order and the
//! plain concatenation (no separators, no structured encoding) must match
//! exactly.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 over the concatenation of `parts`, in order.
pub fn sign(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
    }
    hex::encode(hasher.finalize())
}

pub fn deposit_signature(
    endpoint_id: &str,
    merchant_order_id: &str,
    order_amount: &str,
    customer_email: &str,
    secret_key: &str,
) -> String {
    sign(&[
        endpoint_id,
        merchant_order_id,
        order_amount,
        customer_email,
        secret_key,
    ])
}

pub fn status_signature(
    merchant_id: &str,
    merchant_order_id: &str,
    order_id: &str,
    timestamp: &str,
    secret_key: &str,
) -> String {
    sign(&[merchant_id, merchant_order_id, order_id, timestamp, secret_key])
}

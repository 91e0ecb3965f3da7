//! Canonical JSON encoding and stable hashing helpers.

use gridlane_core::errors::{ErrorInfo, GridlaneError};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Encodes a serializable payload as canonical JSON bytes.
///
/// The payload is round-tripped through `serde_json::Value`, whose object
/// representation keeps keys sorted, so equal payloads always produce equal
/// bytes.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, GridlaneError> {
    let value = serde_json::to_value(value)
        .map_err(|err| GridlaneError::Serde(ErrorInfo::new("json-encode", err.to_string())))?;
    serde_json::to_vec(&value)
        .map_err(|err| GridlaneError::Serde(ErrorInfo::new("json-encode", err.to_string())))
}

/// Computes a stable hexadecimal hash for the provided serializable payload.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, GridlaneError> {
    let bytes = to_canonical_json_bytes(value)?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{:x}", digest))
}

//! Domain-separated SHA-256 digests.
//!
//! Every digest is `SHA-256(domain || data)` where `domain` is a
//! null-terminated ASCII prefix owned by the caller (e.g.
//! `b"LADDER::PLAY_REPORT::V1\0"`). Digests render as `sha256:<hex>`.
//!
//! JSON that feeds a digest goes through [`sorted_json_bytes`]: object keys
//! sorted, no whitespace, integers only. Two equal `serde_json::Value`s always
//! produce the same bytes regardless of key insertion order.

use std::fmt;

use serde_json::Value;
use sha2::{Digest as _, Sha256};

const ALGORITHM: &str = "sha256";

/// A SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Lowercase hex of the digest bytes (no algorithm prefix).
    #[must_use]
    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }

    /// First eight bytes as a little-endian integer. Used to derive
    /// deterministic indices from a digest.
    #[must_use]
    pub fn prefix_u64(&self) -> u64 {
        let mut head = [0u8; 8];
        head.copy_from_slice(&self.0[..8]);
        u64::from_le_bytes(head)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ALGORITHM}:{}", self.hex())
    }
}

/// `SHA-256(domain || data)`.
#[must_use]
pub fn domain_digest(domain: &[u8], data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    Digest(hasher.finalize().into())
}

/// Error producing digest input bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// A JSON number was not an integer.
    NonIntegerNumber { raw: String },
    /// `serde_json` failed to write a scalar.
    Serialize { detail: String },
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in digest input: {raw}")
            }
            Self::Serialize { detail } => write!(f, "JSON serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for DigestError {}

/// Compact JSON with object keys in byte order.
///
/// # Errors
///
/// Returns [`DigestError::NonIntegerNumber`] for floats (their textual form is
/// not stable enough to hash) and [`DigestError::Serialize`] if `serde_json`
/// fails to write a scalar.
pub fn sorted_json_bytes(value: &Value) -> Result<Vec<u8>, DigestError> {
    let mut out = Vec::new();
    write_sorted(value, &mut out)?;
    Ok(out)
}

/// [`domain_digest`] over [`sorted_json_bytes`].
///
/// # Errors
///
/// Propagates [`sorted_json_bytes`] failures.
pub fn json_digest(domain: &[u8], value: &Value) -> Result<Digest, DigestError> {
    Ok(domain_digest(domain, &sorted_json_bytes(value)?))
}

fn write_sorted(value: &Value, out: &mut Vec<u8>) -> Result<(), DigestError> {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            out.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_scalar(&Value::String(key.clone()), out)?;
                out.push(b':');
                write_sorted(item, out)?;
            }
            out.push(b'}');
        }
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_sorted(item, out)?;
            }
            out.push(b']');
        }
        Value::Number(n) if n.is_f64() => {
            return Err(DigestError::NonIntegerNumber { raw: n.to_string() });
        }
        scalar => write_scalar(scalar, out)?,
    }
    Ok(())
}

fn write_scalar(value: &Value, out: &mut Vec<u8>) -> Result<(), DigestError> {
    serde_json::to_writer(&mut *out, value).map_err(|e| DigestError::Serialize {
        detail: e.to_string(),
    })
}

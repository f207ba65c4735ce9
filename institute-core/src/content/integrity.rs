//! Checksummed cache envelopes
//!
//! A cache entry is `sha256:<hex>\n<value>`. An entry whose digest no longer
//! matches its value is refused, and the resolver falls through to the
//! bundled default.

use ring::digest::{digest, SHA256};
use thiserror::Error;

const PREFIX: &str = "sha256:";

/// `sha256:<hex>` digest of `data`
pub fn compute_checksum(data: &[u8]) -> String {
    format!("{}{}", PREFIX, hex::encode(digest(&SHA256, data)))
}

/// Check `data` against a `sha256:<hex>` checksum
pub fn verify_checksum(data: &[u8], checksum: &str) -> Result<(), IntegrityError> {
    if !checksum.starts_with(PREFIX) {
        return Err(IntegrityError::UnknownAlgorithm(
            checksum.split(':').next().unwrap_or_default().to_string(),
        ));
    }
    let actual = compute_checksum(data);
    if actual != checksum {
        return Err(IntegrityError::Mismatch);
    }
    Ok(())
}

/// Wrap a cache value in its envelope
pub fn seal(value: &str) -> String {
    format!("{}\n{}", compute_checksum(value.as_bytes()), value)
}

/// Verify an envelope and borrow the value inside it
///
/// ```
/// use institute_core::content::{seal, unseal};
///
/// let entry = seal(r#"{"title":"About"}"#);
/// assert_eq!(unseal(&entry).unwrap(), r#"{"title":"About"}"#);
/// assert!(unseal(&entry.replace("About", "Tampered")).is_err());
/// ```
pub fn unseal(entry: &str) -> Result<&str, IntegrityError> {
    let (checksum, value) = entry.split_once('\n').ok_or(IntegrityError::Unsealed)?;
    verify_checksum(value.as_bytes(), checksum)?;
    Ok(value)
}

/// Why a cache entry was refused
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("Entry has no checksum line")]
    Unsealed,

    #[error("Unsupported checksum algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("Checksum does not match the stored value")]
    Mismatch,
}

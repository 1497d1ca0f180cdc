//! SHA-256 digest computation over files, readers and text.
//!
//! Every computation owns a fresh [`HashAccumulator`]; nothing is shared
//! between inputs.

mod accumulator;
pub mod file;
pub mod text;

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Serialize, Serializer};
use thiserror::Error;

pub use accumulator::HashAccumulator;
pub use file::{
    DEFAULT_BLOCK_SIZE, compute_file_digest, compute_file_digest_with_block_size,
    compute_reader_digest, compute_stdin_digest,
};
pub use text::{
    compute_bytes_digest, compute_os_string_digest, compute_string_digest, compute_utf8_digest,
};

/// Length in bytes of a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("no such file or directory")]
    NotFound { path: PathBuf },
    #[error("permission denied")]
    PermissionDenied { path: PathBuf },
    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("input is not valid UTF-8")]
    OsEncoding,
    #[error("block size must be greater than zero")]
    InvalidBlockSize,
}

impl DigestError {
    /// Classifies an I/O failure on `path` into the digest error taxonomy.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => DigestError::NotFound { path },
            io::ErrorKind::PermissionDenied => DigestError::PermissionDenied { path },
            _ => DigestError::Io { path, source },
        }
    }
}

/// A finalized SHA-256 digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DigestResult([u8; DIGEST_LEN]);

impl DigestResult {
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hexadecimal rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl fmt::Display for DigestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for DigestResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_io_errors() {
        let err = DigestError::from_io("a", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, DigestError::NotFound { .. }));
        let err = DigestError::from_io("a", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, DigestError::PermissionDenied { .. }));
        let err = DigestError::from_io("a", io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(matches!(err, DigestError::Io { .. }));
    }

    #[test]
    fn renders_lowercase_hex() {
        let mut bytes = [0u8; DIGEST_LEN];
        bytes[0] = 0xAB;
        bytes[31] = 0x0F;
        let digest = DigestResult::from_bytes(bytes);
        let hex = digest.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.starts_with("ab"));
        assert!(hex.ends_with("0f"));
        assert_eq!(digest.to_string(), hex);
    }

    #[test]
    fn serializes_as_hex_string() {
        let digest = compute_string_digest("abc");
        let json = serde_json::to_string(&digest).expect("serialize digest");
        assert_eq!(
            json,
            "\"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\""
        );
    }
}

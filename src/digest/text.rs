use std::ffi::OsStr;

use super::{DigestError, DigestResult, HashAccumulator};

pub fn compute_bytes_digest(bytes: &[u8]) -> DigestResult {
    let mut accumulator = HashAccumulator::new();
    accumulator.absorb(bytes);
    accumulator.finalize()
}

/// Digests the UTF-8 encoding of `text`.
pub fn compute_string_digest(text: &str) -> DigestResult {
    compute_bytes_digest(text.as_bytes())
}

/// Digests `bytes` as text, rejecting anything that is not valid UTF-8.
pub fn compute_utf8_digest(bytes: &[u8]) -> Result<DigestResult, DigestError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(compute_string_digest(text))
}

/// Digests text that arrived from the operating system, such as a
/// command-line argument.
pub fn compute_os_string_digest(text: &OsStr) -> Result<DigestResult, DigestError> {
    let text = text.to_str().ok_or(DigestError::OsEncoding)?;
    Ok(compute_string_digest(text))
}

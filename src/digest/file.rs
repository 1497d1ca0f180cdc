use std::fs::File;
use std::io::{self, Read};
use std::num::NonZeroUsize;
use std::path::Path;

use super::{DigestError, DigestResult, HashAccumulator};

/// Bytes requested per read unless the caller asks otherwise.
pub const DEFAULT_BLOCK_SIZE: usize = 64 * 1024;

pub fn compute_file_digest(path: &Path) -> Result<DigestResult, DigestError> {
    compute_file_digest_with_block_size(path, DEFAULT_BLOCK_SIZE)
}

pub fn compute_file_digest_with_block_size(
    path: &Path,
    block_size: usize,
) -> Result<DigestResult, DigestError> {
    let block_size = NonZeroUsize::new(block_size).ok_or(DigestError::InvalidBlockSize)?;
    let file = File::open(path).map_err(|err| DigestError::from_io(path, err))?;
    let digest =
        compute_reader_digest(file, block_size).map_err(|err| DigestError::from_io(path, err))?;
    log::debug!("digested {:?} with {} byte blocks: {}", path, block_size, digest);
    Ok(digest)
}

/// Digests standard input until end of stream.
pub fn compute_stdin_digest(block_size: NonZeroUsize) -> Result<DigestResult, DigestError> {
    let stdin = io::stdin().lock();
    compute_reader_digest(stdin, block_size).map_err(|err| DigestError::from_io("-", err))
}

/// Reads `reader` to exhaustion in blocks of at most `block_size` bytes and
/// absorbs each block in order.
pub fn compute_reader_digest<R: Read>(
    mut reader: R,
    block_size: NonZeroUsize,
) -> io::Result<DigestResult> {
    let mut accumulator = HashAccumulator::new();
    let mut buffer = vec![0u8; block_size.get()];
    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        accumulator.absorb(&buffer[..bytes_read]);
    }
    log::trace!("absorbed {} bytes", accumulator.bytes_absorbed());
    Ok(accumulator.finalize())
}

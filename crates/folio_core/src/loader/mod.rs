//! File-to-buffer loading with a flat, no-retry error taxonomy.
//!
//! [`load`] reads an entire file into a sentinel-terminated
//! [`Document`]: open, size query by seeking to the end, one
//! zero-initialized allocation of the padded buffer, an exact-length
//! read, then UTF-8 validation. Every failure aborts the whole load and
//! propagates to the caller; no partial document escapes.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::document::{self, Document};

/// Why a document failed to load.
///
/// Flat taxonomy; no variant is ever retried.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened (missing, unreadable).
    #[error("cannot open `{path}`: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file size could not be determined, or does not fit the
    /// 4 GiB document limit.
    #[error("cannot determine size of `{path}`: {source}")]
    SizeQuery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document buffer could not be allocated.
    #[error("cannot allocate {bytes} bytes for `{path}`")]
    Allocation { path: PathBuf, bytes: usize },

    /// Fewer bytes were read than the file's reported size. Read-level
    /// I/O failures surface here too, with `got` counting the bytes
    /// read before the failure.
    #[error("short read on `{path}`: expected {expected} bytes, got {got}")]
    ShortRead {
        path: PathBuf,
        expected: usize,
        got: usize,
    },

    /// The file handle failed to close cleanly.
    ///
    /// Retained for contract compatibility: Rust's `File` reports close
    /// failures through no safe API, so this variant is never produced
    /// by [`load`] today.
    #[error("cannot close `{path}`: {source}")]
    Close {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file content is not valid UTF-8.
    #[error("`{path}` is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidUtf8 { path: PathBuf, valid_up_to: usize },
}

/// Load an entire file into a sentinel-terminated [`Document`].
///
/// The buffer is allocated once at the padded size (content + `0x00`
/// sentinel + zero padding) and filled with exactly the file's reported
/// size in bytes.
pub fn load(path: impl AsRef<Path>) -> Result<Document, LoadError> {
    let path = path.as_ref();

    let mut file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let size = query_size(&mut file, path)?;
    let mut buf = alloc_padded(size, path)?;
    read_content(&mut file, &mut buf[..size], path)?;

    // Close the handle before validation; failures are not observable
    // through safe Rust (see `LoadError::Close`).
    drop(file);

    if let Err(err) = std::str::from_utf8(&buf[..size]) {
        return Err(LoadError::InvalidUtf8 {
            path: path.to_path_buf(),
            valid_up_to: err.valid_up_to(),
        });
    }

    let content_len = u32::try_from(size).map_err(|_| oversize_error(path))?;
    Ok(Document::from_padded(buf, content_len))
}

/// Determine the file size by seeking to the end, then rewind.
fn query_size(file: &mut File, path: &Path) -> Result<usize, LoadError> {
    let size = file
        .seek(SeekFrom::End(0))
        .map_err(|source| LoadError::SizeQuery {
            path: path.to_path_buf(),
            source,
        })?;

    file.rewind().map_err(|source| LoadError::SizeQuery {
        path: path.to_path_buf(),
        source,
    })?;

    // Positions are u32; reject anything past the document limit here
    // rather than truncating silently.
    if size > u64::from(u32::MAX) {
        return Err(oversize_error(path));
    }
    usize::try_from(size).map_err(|_| oversize_error(path))
}

fn oversize_error(path: &Path) -> LoadError {
    LoadError::SizeQuery {
        path: path.to_path_buf(),
        source: io::Error::other("file size exceeds the 4 GiB document limit"),
    }
}

/// Allocate the zero-filled padded buffer for `size` content bytes.
///
/// Uses `try_reserve_exact` so an allocation failure surfaces as
/// [`LoadError::Allocation`] instead of aborting the process.
fn alloc_padded(size: usize, path: &Path) -> Result<Vec<u8>, LoadError> {
    let padded = document::padded_len(size);
    let mut buf = Vec::new();
    buf.try_reserve_exact(padded)
        .map_err(|_| LoadError::Allocation {
            path: path.to_path_buf(),
            bytes: padded,
        })?;
    buf.resize(padded, 0);
    Ok(buf)
}

/// Read exactly `dest.len()` bytes from `file` into `dest`.
///
/// A premature end-of-stream or a read failure yields
/// [`LoadError::ShortRead`] with the byte count reached so far.
fn read_content(file: &mut File, dest: &mut [u8], path: &Path) -> Result<(), LoadError> {
    let expected = dest.len();
    let mut got = 0;
    while got < expected {
        match file.read(&mut dest[got..]) {
            Ok(0) => break,
            Ok(n) => got += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(_) => break,
        }
    }
    if got < expected {
        return Err(LoadError::ShortRead {
            path: path.to_path_buf(),
            expected,
            got,
        });
    }
    Ok(())
}

//! Sentinel-terminated document buffer for bounds-check-free scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the document
//! content, allowing the splitters to detect end-of-content without
//! explicit bounds checking. The total buffer size is rounded up to the
//! next 64-byte boundary, which also provides safe padding for `peek()`
//! near the end of the buffer.
//!
//! The buffer is immutable after construction: tokens are expressed as
//! `(start, len)` views into it rather than by writing terminator bytes
//! at delimiter positions.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Total buffer length for `content_len` bytes of content: room for the
/// content plus the sentinel, rounded up to the next 64-byte boundary.
pub(crate) fn padded_len(content_len: usize) -> usize {
    (content_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1)
}

/// Owned, sentinel-terminated document buffer.
///
/// # Layout
///
/// ```text
/// [content_bytes..., 0x00, padding_zeros...]
///  ^                 ^     ^
///  0                 |     rounded up to 64-byte boundary
///              content_len (sentinel)
/// ```
///
/// The sentinel byte at `content_len` is always `0x00`. All subsequent
/// bytes (padding) are also `0x00`, ensuring safe reads for `peek()`
/// near the end of the buffer.
#[derive(Clone, Debug)]
pub struct Document {
    /// Owned buffer: `[content_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual content (excludes sentinel and padding).
    content_len: u32,
}

impl Document {
    /// Create a sentinel-terminated document from in-memory text.
    ///
    /// Copies the bytes into a padded buffer with a `0x00` sentinel
    /// appended.
    ///
    /// # Panics
    ///
    /// Panics when `content` exceeds `u32::MAX` bytes; positions are
    /// `u32`, and the file loader rejects such inputs upstream.
    pub fn new(content: &str) -> Self {
        let content_bytes = content.as_bytes();
        let content_len = checked_content_len(content_bytes.len());

        // Allocate zero-filled buffer, then copy content bytes.
        // The sentinel (buf[content_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len(content_bytes.len())];
        buf[..content_bytes.len()].copy_from_slice(content_bytes);

        Self { buf, content_len }
    }

    /// Assemble a document from a buffer the loader has already padded
    /// and filled.
    ///
    /// # Contract
    ///
    /// `buf` must be laid out as `[content..., 0x00 sentinel, 0x00
    /// padding...]` with `buf.len() == padded_len(content_len)`, and the
    /// content must be valid UTF-8. The loader guarantees both.
    pub(crate) fn from_padded(buf: Vec<u8>, content_len: u32) -> Self {
        debug_assert_eq!(buf.len(), padded_len(content_len as usize));
        debug_assert_eq!(buf[content_len as usize], 0, "sentinel byte must be 0x00");
        Self { buf, content_len }
    }

    /// Returns the content bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.content_len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`).
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.content_len)
    }

    /// Length of the content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.content_len
    }

    /// Returns `true` if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content_len == 0
    }

    /// Extract a content substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the content (`end <= len()`) and on
    /// UTF-8 character boundaries. Token boundaries satisfy this: the
    /// content was validated as UTF-8 at construction, and every token
    /// boundary the splitters produce sits next to an ASCII byte.
    #[allow(
        unsafe_code,
        reason = "from_utf8_unchecked on content validated as UTF-8 at construction"
    )]
    pub fn slice(&self, start: u32, end: u32) -> &str {
        debug_assert!(
            end <= self.content_len,
            "slice end {end} exceeds content length {}",
            self.content_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        // SAFETY: The buffer content was constructed from `&str` or
        // UTF-8-validated file bytes, and the splitters only produce
        // boundaries adjacent to ASCII delimiter bytes.
        unsafe { std::str::from_utf8_unchecked(&self.buf[start as usize..end as usize]) }
    }
}

/// Content length as `u32`.
///
/// The sentinel invariant requires `buf[content_len] == 0x00`, so a
/// length past the `u32` position limit cannot be represented; reject
/// it outright instead of wrapping or saturating.
#[allow(
    clippy::cast_possible_truncation,
    reason = "the length is checked against the u32 limit on the line above"
)]
fn checked_content_len(len: usize) -> u32 {
    assert!(
        len <= u32::MAX as usize,
        "document content of {len} bytes exceeds the u32 position limit"
    );
    len as u32
}

/// Size assertion: `Document` should stay a thin handle.
/// Vec<u8> = 24, u32 = 4, + 4 padding = 32 on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<Document>() <= 32);

//! Zero-cost cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. End-of-content
//! is detected when the current byte equals the sentinel (`0x00`) and
//! the position has reached the content length. No explicit bounds
//! checking is performed in the common case; the sentinel guarantees
//! safe termination.
//!
//! # Interior Null Bytes
//!
//! Documents built from in-memory `&str` may contain interior null
//! bytes (U+0000). The cursor distinguishes them from end-of-content by
//! comparing `pos` against `content_len`: a null at `pos < content_len`
//! is an ordinary (non-alphabetic) content byte, a null at
//! `pos >= content_len` is the sentinel.

/// Zero-cost cursor over a sentinel-terminated byte buffer.
///
/// Created via [`Document::cursor()`](crate::Document::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[content_len] == 0x00`, and
/// all bytes after `content_len` are `0x00` (padding). This is
/// guaranteed by [`Document`](crate::Document) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (content + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual content (excludes sentinel and padding).
    content_len: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], content_len: u32) -> Self {
        debug_assert!(
            (content_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[content_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            content_len,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` when at end-of-content (the sentinel byte).
    /// Interior null bytes also return `0x00`; use
    /// [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe to call at any position: the sentinel and padding guarantee
    /// valid reads beyond the content.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Returns `true` if the cursor has reached end-of-content.
    ///
    /// End-of-content is when the current byte is the sentinel (`0x00`)
    /// and the position is at or past the content length. This
    /// distinguishes the sentinel from interior null bytes.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.content_len
    }

    /// Current byte offset in the content.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel terminates the
    /// loop. This holds for all standard byte classification predicates
    /// (`is_ascii_alphabetic`, `is_ascii_whitespace`, etc.).
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance past non-alphabetic content bytes.
    ///
    /// Stops at the first ASCII alphabetic byte or at end-of-content,
    /// whichever comes first. Interior null bytes are skipped like any
    /// other non-alphabetic byte; only the sentinel stops the scan.
    pub fn eat_non_alphabetic(&mut self) {
        loop {
            let b = self.buf[self.pos as usize];
            if b.is_ascii_alphabetic() {
                break;
            }
            // Distinguish interior null (pos < content_len) from sentinel.
            if b == 0 && self.pos >= self.content_len {
                break;
            }
            self.pos += 1;
        }
    }
}

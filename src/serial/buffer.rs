use core::fmt;

/// Size of the render buffer used for every serial print, terminator included.
pub const FORMAT_BUFFER_SIZE: usize = 512;

/// Fixed-size text buffer that lives on the caller's stack.
///
/// One byte of the `N` is reserved for the terminator a C-style sink would
/// expect, so at most `N - 1` bytes of text are kept. Writes past that point
/// are dropped without failing; the cut always lands on a char boundary so
/// the contents stay valid UTF-8.
pub struct FormatBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
    truncated: bool,
}

impl<const N: usize> FormatBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
            truncated: false,
        }
    }

    /// Maximum number of text bytes the buffer keeps.
    pub const fn limit() -> usize {
        N.saturating_sub(1)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn as_str(&self) -> &str {
        // only whole chars are ever copied in
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    /// Text followed by its NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..(self.len + 1).min(N)]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether any write was cut short since the last [`clear`](Self::clear).
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Append `s` only if all of it fits; otherwise leave the text alone and
    /// mark the buffer truncated. Returns whether `s` was appended.
    pub fn push_str_whole(&mut self, s: &str) -> bool {
        if s.len() > Self::limit() - self.len {
            self.truncated = true;
            return false;
        }
        let _ = fmt::Write::write_str(self, s);
        true
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.truncated = false;
        if N > 0 {
            self.buf[0] = 0;
        }
    }
}

impl<const N: usize> Default for FormatBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for FormatBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = Self::limit() - self.len;
        let mut n = s.len();
        if n > room {
            self.truncated = true;
            n = room;
            while !s.is_char_boundary(n) {
                n -= 1;
            }
        }

        self.buf[self.len..self.len + n].copy_from_slice(&s.as_bytes()[..n]);
        self.len += n;
        if self.len < N {
            self.buf[self.len] = 0;
        }
        // Never report an error: formatting keeps going and the overflow is dropped.
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for FormatBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatBuffer")
            .field("text", &self.as_str())
            .field("truncated", &self.truncated)
            .finish()
    }
}

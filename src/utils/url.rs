use std::ffi::CStr;
use std::fmt;

const HEX: &[u8; 16] = b"0123456789abcdef";

fn is_passthrough(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Percent-encode arbitrary bytes into URL-safe text.
///
/// ASCII letters and digits are left as-is. Every other byte, including the
/// RFC 3986 marks `-._~`, is written as `%hh` with lowercase hex.
pub fn url_encode(bytes: &[u8]) -> String {
    // In the worst case, every byte becomes "%xx" (3 chars)
    let mut out = String::with_capacity(bytes.len() * 3);
    out.extend(percent_encode(bytes));
    out
}

/// Same as [`url_encode`] for a NUL-terminated string. The terminator is not encoded.
pub fn url_encode_cstr(message: &CStr) -> String {
    url_encode(message.to_bytes())
}

/// Lazily percent-encode `bytes`, one output char at a time.
pub fn percent_encode(bytes: &[u8]) -> PercentEncode<'_> {
    PercentEncode {
        bytes: bytes.iter(),
        pending: [0; 2],
        pending_len: 0,
    }
}

/// Single-pass encoder returned by [`percent_encode`].
///
/// Also implements `Display`, which lets the encoded form be written into a
/// fixed buffer without allocating.
#[derive(Clone, Debug)]
pub struct PercentEncode<'a> {
    bytes: std::slice::Iter<'a, u8>,
    // Hex digits still owed for the current escape, stored back to front.
    pending: [u8; 2],
    pending_len: usize,
}

impl Iterator for PercentEncode<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.pending_len > 0 {
            self.pending_len -= 1;
            return Some(self.pending[self.pending_len] as char);
        }

        let b = *self.bytes.next()?;
        if is_passthrough(b) {
            return Some(b as char);
        }

        self.pending = [HEX[(b & 0x0F) as usize], HEX[(b >> 4) as usize]];
        self.pending_len = 2;
        Some('%')
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len();
        (
            remaining + self.pending_len,
            Some(remaining * 3 + self.pending_len),
        )
    }
}

impl fmt::Display for PercentEncode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.pending_len).rev() {
            fmt::Write::write_char(f, self.pending[i] as char)?;
        }
        for &b in self.bytes.as_slice() {
            if is_passthrough(b) {
                fmt::Write::write_char(f, b as char)?;
            } else {
                write!(
                    f,
                    "%{}{}",
                    HEX[(b >> 4) as usize] as char,
                    HEX[(b & 0x0F) as usize] as char
                )?;
            }
        }
        Ok(())
    }
}

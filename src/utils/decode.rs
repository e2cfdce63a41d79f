use crate::error::DecodeError;

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decode `%HH` escapes (hex in either case) back into raw bytes.
///
/// Every other character is copied through unchanged; `+` is not a space.
pub fn url_decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        let hi = bytes.get(i + 1).copied().and_then(hex_value);
        let lo = bytes.get(i + 2).copied().and_then(hex_value);
        match (hi, lo) {
            (Some(hi), Some(lo)) => out.push((hi << 4) | lo),
            _ => return Err(DecodeError::InvalidEscape { offset: i }),
        }
        i += 3;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::url_encode;

    #[test]
    fn decodes_escapes_in_either_case() {
        assert_eq!(url_decode("a%20b").unwrap(), b"a b");
        assert_eq!(url_decode("%ff%FF").unwrap(), vec![0xFF, 0xFF]);
    }

    #[test]
    fn plus_is_kept_literally() {
        assert_eq!(url_decode("a+b").unwrap(), b"a+b");
    }

    #[test]
    fn rejects_truncated_escape() {
        assert_eq!(
            url_decode("abc%2"),
            Err(DecodeError::InvalidEscape { offset: 3 })
        );
        assert_eq!(
            url_decode("%"),
            Err(DecodeError::InvalidEscape { offset: 0 })
        );
    }

    #[test]
    fn rejects_non_hex_escape() {
        assert_eq!(
            url_decode("x%zz"),
            Err(DecodeError::InvalidEscape { offset: 1 })
        );
    }

    #[test]
    fn round_trips_every_byte() {
        let all: Vec<u8> = (0..=255u8).collect();
        assert_eq!(url_decode(&url_encode(&all)).unwrap(), all);
    }
}

//! The percent-encoding codec itself: a pure, symmetric transform pair
//! over single input units.
//!
//! Encoding follows RFC 3986: unreserved characters pass through, every
//! other byte of the charset-encoded text becomes `%XX` with uppercase
//! hex. Decoding reverses that byte-by-byte and accepts either hex case.
//! A literal `+` is a plus sign in both directions, never a space.

use crate::charset::Charset;
use crate::error::DecodeError;

/// Transform direction, fixed once per run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

impl Mode {
    /// Apply this transform to one input unit.
    pub fn apply(self, unit: &str, charset: Charset) -> Result<String, DecodeError> {
        match self {
            Mode::Encode => Ok(encode(unit, charset)),
            Mode::Decode => decode(unit, charset),
        }
    }
}

const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// RFC 3986 unreserved characters, the only bytes never escaped.
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

/// Percent-encode `text`. The text is first converted to raw bytes with
/// `charset`, so the escapes always describe bytes of that encoding.
/// Encoding cannot fail.
pub fn encode(text: &str, charset: Charset) -> String {
    let bytes = charset.encode_bytes(text);
    // worst case every byte becomes %XX
    let mut out = String::with_capacity(bytes.len() * 3);
    for &byte in &bytes {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(UPPER_HEX[(byte >> 4) as usize] as char);
            out.push(UPPER_HEX[(byte & 0x0F) as usize] as char);
        }
    }
    out
}

/// Percent-decode `text`: reverse the escapes to raw bytes, then decode
/// the whole byte sequence as `charset` text. Malformed escapes report
/// the byte offset of the offending `%`.
pub fn decode(text: &str, charset: Charset) -> Result<String, DecodeError> {
    let bytes = percent_unescape(text.as_bytes())?;
    charset.decode_bytes(&bytes)
}

fn percent_unescape(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        let byte = input[i];
        if byte != b'%' {
            out.push(byte);
            i += 1;
            continue;
        }
        if i + 2 >= input.len() {
            return Err(DecodeError::TruncatedEscape { offset: i });
        }
        match (hex_val(input[i + 1]), hex_val(input[i + 2])) {
            (Some(hi), Some(lo)) => out.push(hi << 4 | lo),
            _ => return Err(DecodeError::InvalidEscape { offset: i }),
        }
        i += 3;
    }
    Ok(out)
}

fn hex_val(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _ => None,
    }
}

//! Character encodings for the text<->bytes conversions around the codec.

use encoding_rs::{Encoding, UTF_8};

use crate::error::{DecodeError, Error};

/// Label used when `--encoding` is not given.
pub const DEFAULT_LABEL: &str = "utf-8";

/// A character encoding resolved from a WHATWG label such as `utf-8`,
/// `latin1`, `windows-1252` or `shift_jis`.
#[derive(Clone, Copy, Debug)]
pub struct Charset(&'static Encoding);

impl Charset {
    /// Resolve a charset by label, case-insensitively. Unknown labels and
    /// labels without a byte encoder are runtime errors, not usage errors:
    /// the run fails with exit code 1.
    pub fn resolve(label: &str) -> Result<Self, Error> {
        let encoding =
            Encoding::for_label(label.as_bytes()).ok_or_else(|| Error::UnknownEncoding {
                name: label.to_string(),
            })?;
        // utf-16le, utf-16be and replacement decode only: encoding_rs
        // encodes their text as UTF-8 instead.
        if encoding.output_encoding() != encoding {
            return Err(Error::UnsupportedEncoding {
                name: label.to_string(),
            });
        }
        Ok(Self(encoding))
    }

    /// Canonical name of the resolved encoding, e.g. `windows-1252`.
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Convert text to raw bytes. This never fails: a character the
    /// charset cannot represent is replaced with its numeric character
    /// reference and a warning is emitted.
    pub fn encode_bytes(&self, text: &str) -> Vec<u8> {
        // resolve() only admits encodings that are their own output
        // encoding, so the middle element is always self.
        let (bytes, _, had_errors) = self.0.encode(text);
        if had_errors {
            log::warn!(
                "some characters are not representable in {} and were substituted",
                self.name()
            );
        }
        bytes.into_owned()
    }

    /// Convert raw bytes back to text, strictly: any malformed sequence
    /// fails the unit instead of inserting replacement characters.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        let (text, had_errors) = self.0.decode_without_bom_handling(bytes);
        if had_errors {
            return Err(DecodeError::InvalidText {
                charset: self.name(),
            });
        }
        Ok(text.into_owned())
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self(UTF_8)
    }
}

//! PDF name objects, the keys of every dictionary.
//!
//! A name is identified by its canonical raw string (`Type`, `MediaBox`). Two
//! names built independently from the same string are equal and hash the same,
//! so they collide to one dictionary entry.

use crate::buffer::{write_byte, write_raw};
use crate::error::ObjectError;
use crate::object::PdfNode;
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// A PDF name, e.g. `/Type`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PdfName(Arc<str>);

impl PdfName {
    /// Creates a name from its canonical string, without the leading slash.
    ///
    /// Never fails: a NUL byte, which PDF does not allow in names, is written as `#00`.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the canonical string of this name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Bytes that must be written as `#XX` inside a name.
fn needs_escape(byte: u8) -> bool {
    !(b'!'..=b'~').contains(&byte)
        || matches!(
            byte,
            b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
        )
}

impl From<String> for PdfName {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for PdfName {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<&PdfName> for PdfName {
    fn from(name: &PdfName) -> Self {
        name.clone()
    }
}

impl From<Arc<str>> for PdfName {
    fn from(s: Arc<str>) -> Self {
        Self(s)
    }
}

impl AsRef<str> for PdfName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PdfName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PdfName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/")?;
        for &byte in self.0.as_bytes() {
            if needs_escape(byte) {
                write!(f, "#{:02X}", byte)?;
            } else {
                write!(f, "{}", byte as char)?;
            }
        }
        Ok(())
    }
}

impl PdfNode for PdfName {
    fn byte_len(&self) -> usize {
        1 + self
            .0
            .bytes()
            .map(|byte| if needs_escape(byte) { 3 } else { 1 })
            .sum::<usize>()
    }

    fn write_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ObjectError> {
        let mut remaining = write_byte(b'/', buf)?;
        for &byte in self.0.as_bytes() {
            remaining = if needs_escape(byte) {
                let escaped = [
                    b'#',
                    HEX_DIGITS[(byte >> 4) as usize],
                    HEX_DIGITS[(byte & 0x0F) as usize],
                ];
                write_raw(&escaped, remaining)?
            } else {
                write_byte(byte, remaining)?
            };
        }
        Ok(remaining)
    }
}

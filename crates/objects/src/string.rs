use crate::buffer::{write_byte, write_raw};
use crate::error::ObjectError;
use crate::object::PdfNode;
use std::fmt;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringFormat {
    /// `(text)` with `(`, `)` and `\` backslash-escaped and non-printable bytes as `\ddd`.
    #[default]
    Literal,
    /// `<48656C6C6F>`
    Hexadecimal,
}

/// A PDF string object. Content is raw bytes; PDF strings need not be UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfString {
    bytes: Vec<u8>,
    format: StringFormat,
}

impl PdfString {
    pub fn literal(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into(), format: StringFormat::Literal }
    }

    pub fn hex(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into(), format: StringFormat::Hexadecimal }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> StringFormat {
        self.format
    }
}

/// Encodes one byte of a literal string. Delimiters get a backslash; bytes
/// outside printable ASCII become `\ddd` octal, so the output is always ASCII.
fn escape_literal(byte: u8) -> ([u8; 4], usize) {
    match byte {
        b'(' | b')' | b'\\' => ([b'\\', byte, 0, 0], 2),
        b' '..=b'~' => ([byte, 0, 0, 0], 1),
        _ => ([b'\\', b'0' + (byte >> 6), b'0' + ((byte >> 3) & 0o7), b'0' + (byte & 0o7)], 4),
    }
}

impl fmt::Display for PdfString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            StringFormat::Literal => {
                f.write_str("(")?;
                for &byte in &self.bytes {
                    let (escaped, len) = escape_literal(byte);
                    for &b in &escaped[..len] {
                        write!(f, "{}", b as char)?;
                    }
                }
                f.write_str(")")
            }
            StringFormat::Hexadecimal => {
                f.write_str("<")?;
                for byte in &self.bytes {
                    write!(f, "{:02X}", byte)?;
                }
                f.write_str(">")
            }
        }
    }
}

impl PdfNode for PdfString {
    fn byte_len(&self) -> usize {
        match self.format {
            StringFormat::Literal => {
                2 + self.bytes.iter().map(|&b| escape_literal(b).1).sum::<usize>()
            }
            StringFormat::Hexadecimal => 2 + 2 * self.bytes.len(),
        }
    }

    fn write_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ObjectError> {
        match self.format {
            StringFormat::Literal => {
                let mut remaining = write_byte(b'(', buf)?;
                for &byte in &self.bytes {
                    let (escaped, len) = escape_literal(byte);
                    remaining = write_raw(&escaped[..len], remaining)?;
                }
                write_byte(b')', remaining)
            }
            StringFormat::Hexadecimal => {
                let mut remaining = write_byte(b'<', buf)?;
                for &byte in &self.bytes {
                    let pair = [HEX_DIGITS[(byte >> 4) as usize], HEX_DIGITS[(byte & 0x0F) as usize]];
                    remaining = write_raw(&pair, remaining)?;
                }
                write_byte(b'>', remaining)
            }
        }
    }
}

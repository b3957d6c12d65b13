use crate::buffer::write_str;
use crate::error::ObjectError;
use crate::object::PdfNode;
use std::fmt;

/// A PDF numeric object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PdfNumber {
    Integer(i64),
    Real(f64),
}

impl PdfNumber {
    /// Creates a real number. PDF has no representation for NaN or infinities.
    pub fn real(value: f64) -> Result<Self, ObjectError> {
        if value.is_finite() {
            Ok(PdfNumber::Real(value))
        } else {
            Err(ObjectError::NonFiniteNumber(value))
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            PdfNumber::Integer(i) => Some(i),
            PdfNumber::Real(_) => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            PdfNumber::Integer(i) => i as f64,
            PdfNumber::Real(r) => r,
        }
    }

    /// Calls `f` with the textual form, formatted on the stack for integers.
    fn with_text<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        match *self {
            PdfNumber::Integer(i) => f(itoa::Buffer::new().format(i)),
            PdfNumber::Real(r) => f(&format_real(r)),
        }
    }
}

/// Renders a real with at most three fractional digits and no trailing zeros.
fn format_real(value: f64) -> String {
    let mut text = format!("{:.3}", value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

impl From<i64> for PdfNumber {
    fn from(value: i64) -> Self {
        PdfNumber::Integer(value)
    }
}

impl From<i32> for PdfNumber {
    fn from(value: i32) -> Self {
        PdfNumber::Integer(value.into())
    }
}

impl From<u32> for PdfNumber {
    fn from(value: u32) -> Self {
        PdfNumber::Integer(value.into())
    }
}

impl TryFrom<f64> for PdfNumber {
    type Error = ObjectError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        PdfNumber::real(value)
    }
}

impl fmt::Display for PdfNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_text(|text| f.write_str(text))
    }
}

impl PdfNode for PdfNumber {
    fn byte_len(&self) -> usize {
        self.with_text(str::len)
    }

    fn write_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ObjectError> {
        self.with_text(|text| write_str(text, buf))
    }
}

//! The node capability and the closed set of node kinds.

use crate::array::PdfArray;
use crate::buffer::write_str;
use crate::dictionary::PdfDictionary;
use crate::error::ObjectError;
use crate::indirect::{PdfIndirectObject, PdfIndirectReference};
use crate::name::PdfName;
use crate::number::PdfNumber;
use crate::stream::PdfStream;
use crate::string::PdfString;
use std::fmt;
use std::sync::Arc;

/// Anything that can report its textual form, its exact serialized size, and
/// write itself into a pre-sized buffer.
///
/// `byte_len` must equal the number of bytes `write_bytes` consumes. Callers
/// allocate from `byte_len` before writing, so any disagreement corrupts the
/// surrounding file.
pub trait PdfNode: fmt::Display {
    fn byte_len(&self) -> usize;

    /// Writes into the front of `buf` and returns the unwritten remainder.
    fn write_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ObjectError>;
}

/// Any value of the document object model.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    Null,
    Boolean(bool),
    Number(PdfNumber),
    String(PdfString),
    Name(PdfName),
    Array(PdfArray),
    Dictionary(PdfDictionary),
    Stream(PdfStream),
    /// A forward reference that has not been resolved yet.
    Reference(PdfIndirectReference),
    /// A resolved indirect object, shared with every other place that refers to it.
    Indirect(Arc<PdfIndirectObject>),
}

/// How a value is rendered when it sits inside a container.
///
/// Indirect objects are written by reference (`5 0 R`), never by their own
/// full form. Textual form, size and bytes all go through this one view.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Embedded<'a> {
    Reference(PdfIndirectReference),
    Direct(&'a PdfObject),
}

impl PdfObject {
    pub fn name(name: impl Into<PdfName>) -> Self {
        PdfObject::Name(name.into())
    }

    pub fn literal(text: impl Into<Vec<u8>>) -> Self {
        PdfObject::String(PdfString::literal(text))
    }

    pub fn real(value: f64) -> Result<Self, ObjectError> {
        PdfNumber::real(value).map(PdfObject::Number)
    }

    pub fn reference(object_number: u32, generation: u16) -> Self {
        PdfObject::Reference(PdfIndirectReference::new(object_number, generation))
    }

    pub(crate) fn embedded(&self) -> Embedded<'_> {
        match self {
            PdfObject::Indirect(object) => Embedded::Reference(object.reference()),
            direct => Embedded::Direct(direct),
        }
    }

    /// A short description of the node kind, used in type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            PdfObject::Null => "null",
            PdfObject::Boolean(_) => "boolean",
            PdfObject::Number(_) => "number",
            PdfObject::String(_) => "string",
            PdfObject::Name(_) => "name",
            PdfObject::Array(_) => "array",
            PdfObject::Dictionary(_) => "dictionary",
            PdfObject::Stream(_) => "stream",
            PdfObject::Reference(_) => "reference",
            PdfObject::Indirect(_) => "indirect object",
        }
    }

    fn mismatch(&self, expected: &'static str) -> ObjectError {
        ObjectError::TypeMismatch { expected, found: self.type_name() }
    }

    pub fn as_bool(&self) -> Result<bool, ObjectError> {
        match self {
            PdfObject::Boolean(b) => Ok(*b),
            other => Err(other.mismatch("boolean")),
        }
    }

    pub fn as_i64(&self) -> Result<i64, ObjectError> {
        match self {
            PdfObject::Number(PdfNumber::Integer(i)) => Ok(*i),
            other => Err(other.mismatch("integer")),
        }
    }

    pub fn as_f64(&self) -> Result<f64, ObjectError> {
        match self {
            PdfObject::Number(number) => Ok(number.as_f64()),
            other => Err(other.mismatch("number")),
        }
    }

    pub fn as_name(&self) -> Result<&PdfName, ObjectError> {
        match self {
            PdfObject::Name(name) => Ok(name),
            other => Err(other.mismatch("name")),
        }
    }

    pub fn as_string(&self) -> Result<&PdfString, ObjectError> {
        match self {
            PdfObject::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    pub fn as_array(&self) -> Result<&PdfArray, ObjectError> {
        match self {
            PdfObject::Array(array) => Ok(array),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn as_dict(&self) -> Result<&PdfDictionary, ObjectError> {
        match self {
            PdfObject::Dictionary(dict) => Ok(dict),
            other => Err(other.mismatch("dictionary")),
        }
    }

    pub fn as_dict_mut(&mut self) -> Result<&mut PdfDictionary, ObjectError> {
        match self {
            PdfObject::Dictionary(dict) => Ok(dict),
            other => Err(other.mismatch("dictionary")),
        }
    }

    pub fn as_stream(&self) -> Result<&PdfStream, ObjectError> {
        match self {
            PdfObject::Stream(stream) => Ok(stream),
            other => Err(other.mismatch("stream")),
        }
    }

    /// The reference this value points at, whether resolved or not.
    pub fn as_reference(&self) -> Result<PdfIndirectReference, ObjectError> {
        match self {
            PdfObject::Reference(reference) => Ok(*reference),
            PdfObject::Indirect(object) => Ok(object.reference()),
            other => Err(other.mismatch("reference")),
        }
    }

    pub fn as_indirect(&self) -> Result<&Arc<PdfIndirectObject>, ObjectError> {
        match self {
            PdfObject::Indirect(object) => Ok(object),
            other => Err(other.mismatch("indirect object")),
        }
    }
}

impl fmt::Display for PdfObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfObject::Null => f.write_str("null"),
            PdfObject::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            PdfObject::Number(number) => fmt::Display::fmt(number, f),
            PdfObject::String(s) => fmt::Display::fmt(s, f),
            PdfObject::Name(name) => fmt::Display::fmt(name, f),
            PdfObject::Array(array) => fmt::Display::fmt(array, f),
            PdfObject::Dictionary(dict) => fmt::Display::fmt(dict, f),
            PdfObject::Stream(stream) => fmt::Display::fmt(stream, f),
            PdfObject::Reference(reference) => fmt::Display::fmt(reference, f),
            PdfObject::Indirect(object) => fmt::Display::fmt(object, f),
        }
    }
}

impl PdfNode for PdfObject {
    fn byte_len(&self) -> usize {
        match self {
            PdfObject::Null => 4,
            PdfObject::Boolean(b) => if *b { 4 } else { 5 },
            PdfObject::Number(number) => number.byte_len(),
            PdfObject::String(s) => s.byte_len(),
            PdfObject::Name(name) => name.byte_len(),
            PdfObject::Array(array) => array.byte_len(),
            PdfObject::Dictionary(dict) => dict.byte_len(),
            PdfObject::Stream(stream) => stream.byte_len(),
            PdfObject::Reference(reference) => reference.byte_len(),
            PdfObject::Indirect(object) => object.byte_len(),
        }
    }

    fn write_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ObjectError> {
        match self {
            PdfObject::Null => write_str("null", buf),
            PdfObject::Boolean(b) => write_str(if *b { "true" } else { "false" }, buf),
            PdfObject::Number(number) => number.write_bytes(buf),
            PdfObject::String(s) => s.write_bytes(buf),
            PdfObject::Name(name) => name.write_bytes(buf),
            PdfObject::Array(array) => array.write_bytes(buf),
            PdfObject::Dictionary(dict) => dict.write_bytes(buf),
            PdfObject::Stream(stream) => stream.write_bytes(buf),
            PdfObject::Reference(reference) => reference.write_bytes(buf),
            PdfObject::Indirect(object) => object.write_bytes(buf),
        }
    }
}

impl fmt::Display for Embedded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Embedded::Reference(reference) => fmt::Display::fmt(reference, f),
            Embedded::Direct(object) => fmt::Display::fmt(object, f),
        }
    }
}

impl PdfNode for Embedded<'_> {
    fn byte_len(&self) -> usize {
        match self {
            Embedded::Reference(reference) => reference.byte_len(),
            Embedded::Direct(object) => object.byte_len(),
        }
    }

    fn write_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ObjectError> {
        match self {
            Embedded::Reference(reference) => reference.write_bytes(buf),
            Embedded::Direct(object) => object.write_bytes(buf),
        }
    }
}

impl From<bool> for PdfObject {
    fn from(value: bool) -> Self {
        PdfObject::Boolean(value)
    }
}

impl From<i64> for PdfObject {
    fn from(value: i64) -> Self {
        PdfObject::Number(value.into())
    }
}

impl From<i32> for PdfObject {
    fn from(value: i32) -> Self {
        PdfObject::Number(value.into())
    }
}

impl From<u32> for PdfObject {
    fn from(value: u32) -> Self {
        PdfObject::Number(value.into())
    }
}

impl From<PdfNumber> for PdfObject {
    fn from(value: PdfNumber) -> Self {
        PdfObject::Number(value)
    }
}

impl From<PdfString> for PdfObject {
    fn from(value: PdfString) -> Self {
        PdfObject::String(value)
    }
}

impl From<PdfName> for PdfObject {
    fn from(value: PdfName) -> Self {
        PdfObject::Name(value)
    }
}

impl From<PdfArray> for PdfObject {
    fn from(value: PdfArray) -> Self {
        PdfObject::Array(value)
    }
}

impl From<PdfDictionary> for PdfObject {
    fn from(value: PdfDictionary) -> Self {
        PdfObject::Dictionary(value)
    }
}

impl From<PdfStream> for PdfObject {
    fn from(value: PdfStream) -> Self {
        PdfObject::Stream(value)
    }
}

impl From<PdfIndirectReference> for PdfObject {
    fn from(value: PdfIndirectReference) -> Self {
        PdfObject::Reference(value)
    }
}

impl From<Arc<PdfIndirectObject>> for PdfObject {
    fn from(value: Arc<PdfIndirectObject>) -> Self {
        PdfObject::Indirect(value)
    }
}

impl From<PdfIndirectObject> for PdfObject {
    fn from(value: PdfIndirectObject) -> Self {
        PdfObject::Indirect(Arc::new(value))
    }
}

impl From<Vec<PdfObject>> for PdfObject {
    fn from(value: Vec<PdfObject>) -> Self {
        PdfObject::Array(value.into())
    }
}

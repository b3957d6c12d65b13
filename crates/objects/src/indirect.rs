//! Indirect references (`5 0 R`) and the indirect objects they resolve to.

use crate::buffer::write_str;
use crate::error::ObjectError;
use crate::object::{PdfNode, PdfObject};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Lookup table used to resolve references once a whole object graph is loaded.
pub type IndirectObjects = HashMap<PdfIndirectReference, Arc<PdfIndirectObject>>;

/// A not-yet-resolved pointer to an object defined elsewhere in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PdfIndirectReference {
    pub object_number: u32,
    pub generation: u16,
}

impl PdfIndirectReference {
    pub fn new(object_number: u32, generation: u16) -> Self {
        Self { object_number, generation }
    }

    /// Writes `N G` followed by `suffix`, the shared prefix of `N G R` and `N G obj`.
    fn write_with_suffix<'a>(&self, suffix: &str, buf: &'a mut [u8]) -> Result<&'a mut [u8], ObjectError> {
        let mut remaining = write_str(itoa::Buffer::new().format(self.object_number), buf)?;
        remaining = write_str(" ", remaining)?;
        remaining = write_str(itoa::Buffer::new().format(self.generation), remaining)?;
        write_str(suffix, remaining)
    }

    fn numbers_len(&self) -> usize {
        itoa::Buffer::new().format(self.object_number).len() + 1 + itoa::Buffer::new().format(self.generation).len()
    }
}

impl From<(u32, u16)> for PdfIndirectReference {
    fn from((object_number, generation): (u32, u16)) -> Self {
        Self::new(object_number, generation)
    }
}

impl fmt::Display for PdfIndirectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.object_number, self.generation)
    }
}

impl PdfNode for PdfIndirectReference {
    fn byte_len(&self) -> usize {
        self.numbers_len() + 2
    }

    fn write_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ObjectError> {
        self.write_with_suffix(" R", buf)
    }
}

/// An object with an identity, written once at file level and referred to
/// everywhere else by its reference form.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfIndirectObject {
    reference: PdfIndirectReference,
    object: PdfObject,
}

impl PdfIndirectObject {
    pub fn new(reference: impl Into<PdfIndirectReference>, object: impl Into<PdfObject>) -> Self {
        Self { reference: reference.into(), object: object.into() }
    }

    pub fn reference(&self) -> PdfIndirectReference {
        self.reference
    }

    pub fn object(&self) -> &PdfObject {
        &self.object
    }

    /// The short `N G R` form used wherever this object appears as a value.
    pub fn to_reference(&self) -> String {
        self.reference.to_string()
    }
}

impl fmt::Display for PdfIndirectObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} obj\n{}\nendobj\n",
            self.reference.object_number,
            self.reference.generation,
            self.object.embedded()
        )
    }
}

impl PdfNode for PdfIndirectObject {
    fn byte_len(&self) -> usize {
        // "N G" + " obj\n" + object + "\nendobj\n"
        self.reference.numbers_len() + 5 + self.object.embedded().byte_len() + 8
    }

    fn write_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ObjectError> {
        let remaining = self.reference.write_with_suffix(" obj\n", buf)?;
        let remaining = self.object.embedded().write_bytes(remaining)?;
        write_str("\nendobj\n", remaining)
    }
}

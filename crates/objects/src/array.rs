use crate::buffer::write_str;
use crate::error::ObjectError;
use crate::indirect::IndirectObjects;
use crate::object::{PdfNode, PdfObject};
use std::fmt;
use std::sync::Arc;

/// An ordered PDF array, written as `[a b c]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PdfArray {
    elements: Vec<PdfObject>,
}

impl PdfArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: impl Into<PdfObject>) -> &mut Self {
        self.elements.push(value.into());
        self
    }

    pub fn get(&self, index: usize) -> Option<&PdfObject> {
        self.elements.get(index)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PdfObject> {
        self.elements.iter()
    }

    /// Replaces every element that is an unresolved reference with the object
    /// it points at. Nested containers are left to the caller.
    pub fn dereference(&mut self, objects: &IndirectObjects) -> Result<(), ObjectError> {
        for (index, element) in self.elements.iter_mut().enumerate() {
            let PdfObject::Reference(reference) = *element else {
                continue;
            };
            let resolved = objects.get(&reference).ok_or_else(|| ObjectError::UnresolvedReference {
                location: format!("[{}]", index),
                reference,
            })?;
            *element = PdfObject::Indirect(Arc::clone(resolved));
        }
        Ok(())
    }
}

impl From<Vec<PdfObject>> for PdfArray {
    fn from(elements: Vec<PdfObject>) -> Self {
        Self { elements }
    }
}

impl<T: Into<PdfObject>> FromIterator<T> for PdfArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { elements: iter.into_iter().map(Into::into).collect() }
    }
}

impl fmt::Display for PdfArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", element.embedded())?;
        }
        f.write_str("]")
    }
}

impl PdfNode for PdfArray {
    fn byte_len(&self) -> usize {
        let separators = self.elements.len().saturating_sub(1);
        2 + separators + self.elements.iter().map(|e| e.embedded().byte_len()).sum::<usize>()
    }

    fn write_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ObjectError> {
        let mut remaining = write_str("[", buf)?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                remaining = write_str(" ", remaining)?;
            }
            remaining = element.embedded().write_bytes(remaining)?;
        }
        write_str("]", remaining)
    }
}

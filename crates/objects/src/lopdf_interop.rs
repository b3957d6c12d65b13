//! Conversions to and from the `lopdf` object model.
//!
//! Resolved indirect objects become plain `lopdf` references; `lopdf`
//! references come back as unresolved [`PdfObject::Reference`]s, ready for a
//! [`dereference`](crate::PdfDictionary::dereference) pass against the table
//! built by [`indirect_objects`].

use crate::array::PdfArray;
use crate::dictionary::PdfDictionary;
use crate::error::ObjectError;
use crate::indirect::{IndirectObjects, PdfIndirectObject, PdfIndirectReference};
use crate::number::PdfNumber;
use crate::object::PdfObject;
use crate::stream::PdfStream;
use crate::string::{PdfString, StringFormat};
use lopdf::{Document, Object, ObjectId, Stream};
use std::sync::Arc;

impl From<PdfIndirectReference> for ObjectId {
    fn from(reference: PdfIndirectReference) -> Self {
        (reference.object_number, reference.generation)
    }
}

impl From<&PdfDictionary> for lopdf::Dictionary {
    fn from(dict: &PdfDictionary) -> Self {
        let mut out = lopdf::Dictionary::new();
        for (key, value) in dict.iter() {
            out.set(key.as_str().as_bytes().to_vec(), Object::from(value));
        }
        out
    }
}

impl From<&PdfObject> for Object {
    fn from(object: &PdfObject) -> Self {
        match object {
            PdfObject::Null => Object::Null,
            PdfObject::Boolean(b) => Object::Boolean(*b),
            PdfObject::Number(PdfNumber::Integer(i)) => Object::Integer(*i),
            PdfObject::Number(PdfNumber::Real(r)) => Object::Real(*r as _),
            PdfObject::String(s) => {
                let format = match s.format() {
                    StringFormat::Literal => lopdf::StringFormat::Literal,
                    StringFormat::Hexadecimal => lopdf::StringFormat::Hexadecimal,
                };
                Object::String(s.as_bytes().to_vec(), format)
            }
            PdfObject::Name(name) => Object::Name(name.as_str().as_bytes().to_vec()),
            PdfObject::Array(array) => Object::Array(array.iter().map(Object::from).collect()),
            PdfObject::Dictionary(dict) => Object::Dictionary(dict.into()),
            PdfObject::Stream(stream) => {
                Object::Stream(Stream::new(stream.dict().into(), stream.content().to_vec()))
            }
            PdfObject::Reference(reference) => Object::Reference((*reference).into()),
            PdfObject::Indirect(object) => Object::Reference(object.reference().into()),
        }
    }
}

impl TryFrom<&lopdf::Dictionary> for PdfDictionary {
    type Error = ObjectError;

    fn try_from(dict: &lopdf::Dictionary) -> Result<Self, Self::Error> {
        let mut out = PdfDictionary::new();
        for (key, value) in dict.iter() {
            out.set_unchecked(String::from_utf8_lossy(key).into_owned(), PdfObject::try_from(value)?);
        }
        Ok(out)
    }
}

/// Fails only on reals PDF cannot represent (NaN, infinities).
impl TryFrom<&Object> for PdfObject {
    type Error = ObjectError;

    fn try_from(object: &Object) -> Result<Self, Self::Error> {
        Ok(match object {
            Object::Null => PdfObject::Null,
            Object::Boolean(b) => PdfObject::Boolean(*b),
            Object::Integer(i) => PdfObject::from(*i),
            Object::Real(r) => PdfObject::Number(PdfNumber::real(f64::from(*r))?),
            Object::Name(name) => PdfObject::name(String::from_utf8_lossy(name).into_owned()),
            Object::String(bytes, lopdf::StringFormat::Literal) => PdfString::literal(bytes.clone()).into(),
            Object::String(bytes, lopdf::StringFormat::Hexadecimal) => PdfString::hex(bytes.clone()).into(),
            Object::Array(items) => items
                .iter()
                .map(PdfObject::try_from)
                .collect::<Result<PdfArray, _>>()?
                .into(),
            Object::Dictionary(dict) => PdfObject::Dictionary(dict.try_into()?),
            Object::Stream(stream) => {
                PdfStream::new(PdfDictionary::try_from(&stream.dict)?, stream.content.clone()).into()
            }
            Object::Reference((object_number, generation)) => PdfObject::reference(*object_number, *generation),
        })
    }
}

/// Builds a dereference table from every object of a loaded `lopdf` document.
pub fn indirect_objects(doc: &Document) -> Result<IndirectObjects, ObjectError> {
    doc.objects
        .iter()
        .map(|(&id, object)| {
            let reference = PdfIndirectReference::from(id);
            let object = PdfIndirectObject::new(reference, PdfObject::try_from(object)?);
            Ok((reference, Arc::new(object)))
        })
        .collect()
}

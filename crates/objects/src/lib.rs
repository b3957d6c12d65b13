//! Document object model for PDF files.
//!
//! This crate provides the node types a PDF writer assembles before emission:
//! - Names, numbers, strings, arrays, streams and ordered dictionaries
//! - Indirect references and the indirect objects they resolve to
//! - Exact size computation (`PdfNode::byte_len`) that always agrees with the
//!   bytes written by `PdfNode::write_bytes`, so output buffers can be sized
//!   before anything is written

mod array;
pub mod buffer;
mod dictionary;
mod error;
mod indirect;
mod keys;
#[cfg(feature = "lopdf")]
mod lopdf_interop;
mod name;
mod number;
mod object;
mod stream;
mod string;

pub use array::PdfArray;
pub use dictionary::PdfDictionary;
pub use error::ObjectError;
pub use indirect::{IndirectObjects, PdfIndirectObject, PdfIndirectReference};
pub use keys::KeyPolicy;
#[cfg(feature = "lopdf")]
pub use lopdf_interop::indirect_objects;
pub use name::PdfName;
pub use number::PdfNumber;
pub use object::{PdfNode, PdfObject};
pub use stream::PdfStream;
pub use string::{PdfString, StringFormat};

//! PDF document object model.
//!
//! Build dictionaries, arrays and indirect objects, resolve forward references
//! once the whole graph is loaded, then size and write every object into one
//! pre-allocated buffer:
//!
//! ```
//! use pdfdom::prelude::*;
//!
//! let mut catalog = PdfDictionary::with_allowed_keys(KeyPolicy::catalog());
//! catalog
//!     .set("Type", PdfObject::name("Catalog"))?
//!     .set("Pages", PdfObject::reference(2, 0))?;
//!
//! let mut buf = vec![0u8; catalog.byte_len()];
//! let rest = catalog.write_bytes(&mut buf)?;
//! assert!(rest.is_empty());
//! assert_eq!(buf, b"<<\n/Type /Catalog\n/Pages 2 0 R\n>>");
//! # Ok::<(), pdfdom::ObjectError>(())
//! ```

pub use pdfdom_objects::*;

pub mod prelude {
    pub use pdfdom_objects::buffer::to_bytes;
    pub use pdfdom_objects::{
        IndirectObjects, KeyPolicy, ObjectError, PdfArray, PdfDictionary, PdfIndirectObject,
        PdfIndirectReference, PdfName, PdfNode, PdfObject, PdfNumber, PdfStream, PdfString,
    };
}

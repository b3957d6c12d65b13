pub mod fixtures;

use pdfdom::prelude::*;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

const HEADER: &str = "%PDF-1.7\n";

/// Minimal file-level writer: sizes every object up front, writes them all into
/// one buffer through the remainder chain, then appends the xref table and trailer.
///
/// Objects must be numbered `1..=n` in order.
pub fn assemble_file(objects: &[Arc<PdfIndirectObject>], root: PdfIndirectReference) -> Result<Vec<u8>, ObjectError> {
    let body_len: usize = objects.iter().map(|o| o.byte_len()).sum();
    let mut file = vec![0u8; HEADER.len() + body_len];

    let mut offsets = Vec::with_capacity(objects.len());
    let mut offset = HEADER.len();
    let mut remaining = pdfdom::buffer::write_str(HEADER, &mut file)?;
    for object in objects {
        offsets.push(offset);
        offset += object.byte_len();
        remaining = object.write_bytes(remaining)?;
    }
    assert!(remaining.is_empty(), "{} bytes left unwritten", remaining.len());

    let xref_start = file.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{:010} 00000 n \n", offset));
    }
    file.extend_from_slice(xref.as_bytes());

    let mut trailer = PdfDictionary::with_allowed_keys(KeyPolicy::trailer());
    trailer
        .set("Size", (objects.len() + 1) as i64)?
        .set("Root", root)?;
    file.extend_from_slice(b"trailer\n");
    file.extend_from_slice(&to_bytes(&trailer)?);
    file.extend_from_slice(format!("\nstartxref\n{}\n%%EOF", xref_start).as_bytes());
    Ok(file)
}

/// Wraps each object as indirect object `i + 1`.
pub fn number_objects(objects: Vec<PdfObject>) -> Vec<Arc<PdfIndirectObject>> {
    objects
        .into_iter()
        .enumerate()
        .map(|(i, object)| Arc::new(PdfIndirectObject::new((i as u32 + 1, 0), object)))
        .collect()
}

pub fn table_of(objects: &[Arc<PdfIndirectObject>]) -> IndirectObjects {
    objects.iter().map(|o| (o.reference(), Arc::clone(o))).collect()
}

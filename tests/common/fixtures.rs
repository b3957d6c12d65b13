use pdfdom::prelude::*;

pub fn catalog(pages: PdfIndirectReference) -> PdfDictionary {
    let mut dict = PdfDictionary::with_allowed_keys(KeyPolicy::catalog());
    dict.set("Type", PdfObject::name("Catalog"))
        .and_then(|d| d.set("Pages", pages))
        .expect("catalog keys are valid");
    dict
}

pub fn page_tree(kids: &[PdfIndirectReference]) -> PdfDictionary {
    let mut dict = PdfDictionary::with_allowed_keys(KeyPolicy::pages());
    dict.set("Type", PdfObject::name("Pages"))
        .and_then(|d| d.set("Kids", kids.iter().copied().collect::<PdfArray>()))
        .and_then(|d| d.set("Count", kids.len() as i64))
        .expect("page tree keys are valid");
    dict
}

pub fn page(parent: PdfIndirectReference, contents: PdfIndirectReference) -> PdfDictionary {
    let mut dict = PdfDictionary::with_allowed_keys(KeyPolicy::page());
    dict.set("Type", PdfObject::name("Page"))
        .and_then(|d| d.set("Parent", parent))
        .and_then(|d| d.set("MediaBox", [0, 0, 612, 792].into_iter().collect::<PdfArray>()))
        .and_then(|d| d.set("Contents", contents))
        .expect("page keys are valid");
    dict
}

pub fn content_stream(operations: &str) -> PdfStream {
    PdfStream::new(PdfDictionary::new(), operations.as_bytes().to_vec())
}

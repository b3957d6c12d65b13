use crate::indirect::PdfIndirectReference;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObjectError {
    #[error("Invalid key: \"{0}\"")]
    InvalidKey(String),

    #[error("Failed to dereference: ({location}, {reference})")]
    UnresolvedReference {
        location: String,
        reference: PdfIndirectReference,
    },

    #[error("Expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Buffer too small: needed {needed} bytes, {available} available")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("Serialized length mismatch: computed {computed} bytes, wrote {written}")]
    LengthMismatch { computed: usize, written: usize },

    #[error("Real numbers must be finite, got {0}")]
    NonFiniteNumber(f64),
}

use crate::buffer::{write_raw, write_str};
use crate::dictionary::PdfDictionary;
use crate::error::ObjectError;
use crate::object::PdfNode;
use std::fmt;

const LENGTH_KEY: &str = "Length";
const STREAM_START: &str = "\nstream\n";
const STREAM_END: &str = "\nendstream";

/// A stream object: a dictionary followed by raw content.
///
/// `/Length` always matches the content length.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfStream {
    dict: PdfDictionary,
    content: Vec<u8>,
}

impl PdfStream {
    pub fn new(dict: PdfDictionary, content: Vec<u8>) -> Self {
        let mut stream = Self { dict, content: Vec::new() };
        stream.set_content(content);
        stream
    }

    pub fn dict(&self) -> &PdfDictionary {
        &self.dict
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn set_content(&mut self, content: Vec<u8>) {
        self.dict.set_unchecked(LENGTH_KEY, content.len() as i64);
        self.content = content;
    }
}

/// Content bytes are shown one character per byte: ASCII as itself, anything
/// else as `.`. The text always has `byte_len()` characters and equals the
/// written bytes whenever the content is ASCII.
impl fmt::Display for PdfStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.dict, STREAM_START)?;
        for &byte in &self.content {
            let shown = if byte.is_ascii() { byte as char } else { '.' };
            write!(f, "{}", shown)?;
        }
        f.write_str(STREAM_END)
    }
}

impl PdfNode for PdfStream {
    fn byte_len(&self) -> usize {
        self.dict.byte_len() + STREAM_START.len() + self.content.len() + STREAM_END.len()
    }

    fn write_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ObjectError> {
        let remaining = self.dict.write_bytes(buf)?;
        let remaining = write_str(STREAM_START, remaining)?;
        let remaining = write_raw(&self.content, remaining)?;
        write_str(STREAM_END, remaining)
    }
}

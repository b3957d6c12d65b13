//! Write-and-return-remainder helpers over a pre-sized output buffer.
//!
//! Every node writes into the front of the slice it is handed and returns the
//! unwritten tail, so a whole object graph can be emitted into one allocation
//! sized up front with [`PdfNode::byte_len`].

use crate::error::ObjectError;
use crate::object::PdfNode;

/// Copies `bytes` into the front of `buf` and returns the rest of `buf`.
pub fn write_raw<'a>(bytes: &[u8], buf: &'a mut [u8]) -> Result<&'a mut [u8], ObjectError> {
    if buf.len() < bytes.len() {
        return Err(ObjectError::BufferTooSmall {
            needed: bytes.len(),
            available: buf.len(),
        });
    }
    let (head, tail) = buf.split_at_mut(bytes.len());
    head.copy_from_slice(bytes);
    Ok(tail)
}

pub fn write_str<'a>(s: &str, buf: &'a mut [u8]) -> Result<&'a mut [u8], ObjectError> {
    write_raw(s.as_bytes(), buf)
}

pub(crate) fn write_byte(byte: u8, buf: &mut [u8]) -> Result<&mut [u8], ObjectError> {
    write_raw(&[byte], buf)
}

/// Serializes a node into a freshly allocated buffer of exactly `byte_len()` bytes.
///
/// Fails with [`ObjectError::LengthMismatch`] when the node writes fewer bytes
/// than it reported; writing more surfaces as [`ObjectError::BufferTooSmall`].
pub fn to_bytes<N: PdfNode + ?Sized>(node: &N) -> Result<Vec<u8>, ObjectError> {
    let computed = node.byte_len();
    let mut out = vec![0u8; computed];
    let remaining = node.write_bytes(&mut out)?.len();
    if remaining != 0 {
        return Err(ObjectError::LengthMismatch {
            computed,
            written: computed - remaining,
        });
    }
    Ok(out)
}

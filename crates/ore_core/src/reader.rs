use crate::error::FieldError;
use crate::layout::ByteRange;

/// Read-only view over a save buffer with bounds-checked little-endian reads.
///
/// Offsets passed to the methods are relative to the view. A view created
/// with [`ByteBuffer::window`] remembers where it sits in the file so errors
/// and diagnostics can report absolute positions.
#[derive(Debug, Clone, Copy)]
pub struct ByteBuffer<'a> {
    bytes: &'a [u8],
    base: usize,
}

impl<'a> ByteBuffer<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, base: 0 }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Absolute file offset of the first byte of this view.
    pub fn base(&self) -> usize {
        self.base
    }

    pub fn range(&self) -> ByteRange {
        ByteRange::new(self.base, self.base + self.bytes.len())
    }

    /// Exact sub-slice; fails if `offset + len` runs past the end.
    pub fn slice(&self, offset: usize, len: usize) -> Result<&'a [u8], FieldError> {
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(FieldError::OutOfRange {
                offset: self.base.saturating_add(offset),
                len,
                available: self.bytes.len(),
            })?;
        Ok(&self.bytes[offset..end])
    }

    /// Sub-view of up to `len` bytes starting at `offset`, clamped to the end.
    pub fn window(&self, offset: usize, len: usize) -> ByteBuffer<'a> {
        let start = offset.min(self.bytes.len());
        let end = start.saturating_add(len).min(self.bytes.len());
        ByteBuffer {
            bytes: &self.bytes[start..end],
            base: self.base + start,
        }
    }

    pub fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N], FieldError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.slice(offset, N)?);
        Ok(buf)
    }

    pub fn read_i32_le(&self, offset: usize) -> Result<i32, FieldError> {
        self.read_array(offset).map(i32::from_le_bytes)
    }

    pub fn read_i64_le(&self, offset: usize) -> Result<i64, FieldError> {
        self.read_array(offset).map(i64::from_le_bytes)
    }

    /// Read an `i32` length followed by that many bytes of string data.
    ///
    /// The length counts the trailing NUL. Text stops at the first NUL.
    /// Lengths outside `1..=max_len` are rejected. Returns the text and the
    /// offset just past the string.
    pub fn read_len_prefixed_string(
        &self,
        offset: usize,
        max_len: usize,
    ) -> Result<(String, usize), FieldError> {
        let raw_len = self.read_i32_le(offset)?;
        if raw_len <= 0 || raw_len as usize > max_len {
            return Err(FieldError::InvalidLength {
                offset: self.base + offset,
                value: i64::from(raw_len),
            });
        }

        let len = raw_len as usize;
        let start = offset + 4;
        // The terminator itself may be missing at the very end of a buffer.
        let bytes = self.slice(start, len - 1)?;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let text = String::from_utf8_lossy(&bytes[..end]).into_owned();
        Ok((text, start + len))
    }
}

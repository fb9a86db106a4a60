use crate::error::FieldError;
use crate::reader::ByteBuffer;
use crate::scanner;

const MAX_TYPE_NAME_LEN: usize = 64;
const SIZE_FIELD_LEN: usize = 8;

/// Header of one named property in the container:
/// `<name + NUL><i32 type len><type name + NUL><8-byte size><value>`.
///
/// Only the header is decoded; the value is read on demand at
/// `value_offset` by whoever knows what the type means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRecord {
    pub name_offset: usize,
    pub type_name: String,
    pub size: i64,
    pub value_offset: usize,
}

impl PropertyRecord {
    /// Find the first `name\0` in `buf` and decode the header behind it.
    pub fn find(buf: &ByteBuffer<'_>, name: &'static str) -> Result<Self, FieldError> {
        let mut marker = Vec::with_capacity(name.len() + 1);
        marker.extend_from_slice(name.as_bytes());
        marker.push(0);

        let name_offset =
            scanner::find_first(buf, &marker, 0).ok_or(FieldError::MarkerNotFound(name))?;
        Self::parse_at(buf, name_offset, marker.len())
    }

    /// Decode the header of a property whose `name\0` (of `marker_len`
    /// bytes) starts at `name_offset`.
    pub fn parse_at(
        buf: &ByteBuffer<'_>,
        name_offset: usize,
        marker_len: usize,
    ) -> Result<Self, FieldError> {
        let type_offset = name_offset + marker_len;
        let (type_name, size_offset) =
            buf.read_len_prefixed_string(type_offset, MAX_TYPE_NAME_LEN)?;
        let size = buf.read_i64_le(size_offset)?;

        Ok(Self {
            name_offset,
            type_name,
            size,
            value_offset: size_offset + SIZE_FIELD_LEN,
        })
    }

    pub fn expect_type(self, expected: &'static str) -> Result<Self, FieldError> {
        if self.type_name == expected {
            Ok(self)
        } else {
            Err(FieldError::TypeMismatch {
                expected,
                found: self.type_name,
            })
        }
    }

    pub fn read_i32(&self, buf: &ByteBuffer<'_>) -> Result<i32, FieldError> {
        buf.read_i32_le(self.value_offset)
    }
}

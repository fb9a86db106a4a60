use crate::error::FieldError;
use crate::property::PropertyRecord;
use crate::reader::ByteBuffer;
use crate::scanner;

use super::types::{INT_PROPERTY, MONEY_PROPERTY};

// --- Money ---

/// Raw (scaled) value of the player's current money.
pub fn parse_money(buf: &ByteBuffer<'_>) -> Result<i32, FieldError> {
    let record = PropertyRecord::find(buf, MONEY_PROPERTY)?.expect_type(INT_PROPERTY)?;
    record.read_i32(buf)
}

// --- Level ---

/// First of `known_maps` that appears anywhere in the buffer. List order
/// decides ties, not file position.
pub fn parse_map_name<S: AsRef<str>>(
    buf: &ByteBuffer<'_>,
    known_maps: &[S],
) -> Result<String, FieldError> {
    known_maps
        .iter()
        .map(AsRef::as_ref)
        .find(|name| scanner::contains(buf, name.as_bytes()))
        .map(str::to_string)
        .ok_or(FieldError::PatternNotFound("known map name"))
}

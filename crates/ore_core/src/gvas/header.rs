use crate::error::FieldError;
use crate::reader::ByteBuffer;
use crate::scanner;

use super::types::{ENGINE_VERSION_OFFSET, MAGIC, MAX_ENGINE_VERSION_LEN};

#[derive(Debug)]
pub struct SaveHeader {
    pub engine_version: Result<String, FieldError>,
    pub game_version: Result<String, FieldError>,
}

impl SaveHeader {
    /// Check the magic and pull the version strings out of the preamble.
    ///
    /// Only a bad magic fails; the version fields carry their own errors.
    pub fn parse(buf: &ByteBuffer<'_>, scan_len: usize) -> Result<Self, FieldError> {
        validate_magic(buf)?;

        Ok(Self {
            engine_version: parse_engine_version(buf),
            game_version: parse_game_version(buf, scan_len),
        })
    }
}

pub fn validate_magic(buf: &ByteBuffer<'_>) -> Result<(), FieldError> {
    let found = buf.window(0, MAGIC.len()).as_bytes();
    if found == MAGIC {
        return Ok(());
    }
    Err(FieldError::TypeMismatch {
        expected: "GVAS",
        found: String::from_utf8_lossy(found).into_owned(),
    })
}

/// Length-prefixed engine string after the fixed header integers. A string
/// cut off by the end of the buffer keeps the text that is there.
pub fn parse_engine_version(buf: &ByteBuffer<'_>) -> Result<String, FieldError> {
    let raw_len = buf.read_i32_le(ENGINE_VERSION_OFFSET)?;
    if raw_len <= 0 || raw_len as usize > MAX_ENGINE_VERSION_LEN {
        return Err(FieldError::InvalidLength {
            offset: buf.base() + ENGINE_VERSION_OFFSET,
            value: i64::from(raw_len),
        });
    }

    let text = buf
        .window(ENGINE_VERSION_OFFSET + 4, raw_len as usize - 1)
        .as_bytes();
    let end = text.iter().position(|&b| b == 0).unwrap_or(text.len());
    Ok(String::from_utf8_lossy(&text[..end]).into_owned())
}

/// First `x.y.z` string near the top of the file. Builds stamp the game
/// version somewhere in the preamble but not at a fixed offset.
pub fn parse_game_version(buf: &ByteBuffer<'_>, scan_len: usize) -> Result<String, FieldError> {
    scanner::find_version(&buf.window(0, scan_len))
        .map(|(_, version)| version)
        .ok_or(FieldError::PatternNotFound("game version"))
}

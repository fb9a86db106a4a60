use thiserror::Error;

/// Failure to decode a single field or record.
///
/// These never cross the public decode boundary; the orchestrator turns each
/// one into a default value and a [`FieldStatus`](crate::core_api::FieldStatus).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("read of {len} bytes at offset {offset} exceeds buffer of {available} bytes")]
    OutOfRange {
        offset: usize,
        len: usize,
        available: usize,
    },

    #[error("marker {0:?} not found")]
    MarkerNotFound(&'static str),

    #[error("expected {expected}, found {found:?}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("length field {value} at offset {offset} is out of bounds")]
    InvalidLength { offset: usize, value: i64 },

    #[error("no {0} found")]
    PatternNotFound(&'static str),
}

impl FieldError {
    /// True when the error means "not present in this save" rather than
    /// "present but not in the layout we expect".
    pub fn is_absence(&self) -> bool {
        matches!(self, Self::MarkerNotFound(_) | Self::PatternNotFound(_))
    }
}

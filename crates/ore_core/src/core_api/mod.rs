mod engine;
mod error;
mod types;

pub use crate::gvas::DecodeOptions;
pub use engine::{Engine, decode};
pub use error::{CoreError, CoreErrorCode};
pub use types::{CategoryTotal, DecodeReport, FieldStatus, SaveContainer, TransactionRecord};

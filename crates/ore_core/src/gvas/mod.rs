pub mod header;
pub mod sections;
pub mod transactions;
pub mod types;

use crate::error::FieldError;
use crate::reader::ByteBuffer;
use header::SaveHeader;
use sections::{parse_map_name, parse_money};
use transactions::{TransactionScan, parse_transactions};

/// Limits and tables that steer the heuristic scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Bytes after the `TransactionsHistory` marker searched for entries.
    pub transaction_window: usize,
    /// Bytes searched per transaction entry, from the start of its marker.
    pub record_window: usize,
    /// Leading bytes searched for a game version string.
    pub header_scan_len: usize,
    pub known_maps: Vec<String>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            transaction_window: types::TRANSACTION_WINDOW,
            record_window: types::RECORD_WINDOW,
            header_scan_len: types::HEADER_SCAN_LEN,
            known_maps: types::KNOWN_MAPS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Outcome of every field decoder run over one buffer.
///
/// Each field is computed independently from the same bytes and keeps its
/// own error; turning errors into defaults is left to the caller.
#[derive(Debug)]
pub struct SaveGame {
    pub header: SaveHeader,
    pub money_raw: Result<i32, FieldError>,
    pub transactions: Result<TransactionScan, FieldError>,
    pub map_name: Result<String, FieldError>,
}

impl SaveGame {
    /// Fails only when the buffer does not start with the `GVAS` magic.
    pub fn parse(bytes: &[u8], options: &DecodeOptions) -> Result<Self, FieldError> {
        let buf = ByteBuffer::new(bytes);
        let header = SaveHeader::parse(&buf, options.header_scan_len)?;

        Ok(Self {
            header,
            money_raw: parse_money(&buf),
            transactions: parse_transactions(
                &buf,
                options.transaction_window,
                options.record_window,
            ),
            map_name: parse_map_name(&buf, &options.known_maps),
        })
    }
}

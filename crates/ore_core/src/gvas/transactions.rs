use log::trace;

use crate::core_api::TransactionRecord;
use crate::error::FieldError;
use crate::layout::ByteRange;
use crate::reader::ByteBuffer;
use crate::scanner;

use super::types::{
    AMOUNT_MARKER, AMOUNT_PREFIXED_MARKER, AMOUNT_VALUE_SKIP, AMOUNT_WINDOW, CATEGORY_MARKER,
    CATEGORY_TOKEN_SKIP, CATEGORY_WINDOW, INT_PROPERTY, TRANSACTION_NAME_MARKER,
    TRANSACTIONS_SECTION, UNKNOWN_CATEGORY,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionScan {
    /// File range that was searched for entries.
    pub section: ByteRange,
    pub records: Vec<TransactionRecord>,
    /// Candidates that matched the entry marker but did not decode.
    pub discarded: usize,
}

/// Decode every transaction entry in the history section.
///
/// A missing section marker is the only error; it means the save has no
/// history at all. Individual entries that fail to decode are counted and
/// skipped.
pub fn parse_transactions(
    buf: &ByteBuffer<'_>,
    section_len: usize,
    record_window: usize,
) -> Result<TransactionScan, FieldError> {
    let section_start = scanner::find_first(buf, TRANSACTIONS_SECTION, 0)
        .ok_or(FieldError::MarkerNotFound("TransactionsHistory"))?;
    let section = buf.window(section_start, section_len);

    let mut scan = TransactionScan {
        section: section.range(),
        ..TransactionScan::default()
    };

    let markers: Vec<usize> =
        scanner::find_all_within_window(buf, TRANSACTION_NAME_MARKER, section_start, section_len)
            .into_iter()
            .map(|marker| marker - section_start)
            .collect();
    for (i, &marker) in markers.iter().enumerate() {
        let next_marker = markers.get(i + 1).copied();
        match parse_entry(&section, marker, next_marker, record_window) {
            Ok(record) => scan.records.push(record),
            Err(e) => {
                trace!(
                    "discarding transaction candidate at {:#x}: {e}",
                    section.base() + marker
                );
                scan.discarded += 1;
            }
        }
    }

    Ok(scan)
}

/// Decode the entry whose `Name` marker starts at `marker` within `section`.
///
/// The entry ends `record_window` bytes after its marker or where the next
/// entry's marker begins, whichever comes first.
pub fn parse_entry(
    section: &ByteBuffer<'_>,
    marker: usize,
    next_marker: Option<usize>,
    record_window: usize,
) -> Result<TransactionRecord, FieldError> {
    let start = marker + TRANSACTION_NAME_MARKER.len();
    let mut end = marker.saturating_add(record_window);
    if let Some(next) = next_marker {
        end = end.min(next);
    }
    let entry = section.window(start, end.saturating_sub(start));

    let (_, item_code) =
        scanner::find_item_code(&entry).ok_or(FieldError::PatternNotFound("item code"))?;

    let category_pos = scanner::find_first(&entry, CATEGORY_MARKER, 0)
        .ok_or(FieldError::MarkerNotFound("Category"))?;
    // The label is cosmetic; the amount is what the audit needs.
    let category =
        parse_category(&entry, category_pos).unwrap_or_else(|_| UNKNOWN_CATEGORY.to_string());

    let amount_raw = parse_amount(&entry)?;

    Ok(TransactionRecord {
        item_code,
        category,
        amount_raw,
    })
}

fn parse_category(entry: &ByteBuffer<'_>, category_pos: usize) -> Result<String, FieldError> {
    let mut end = (category_pos + CATEGORY_WINDOW).min(entry.len());
    // Stop before the Amount property so its name is never taken as a label.
    if let Some(amount) = scanner::find_first(entry, AMOUNT_PREFIXED_MARKER, category_pos) {
        end = end.min(amount);
    }

    let start = category_pos + CATEGORY_TOKEN_SKIP;
    if start >= end {
        return Err(FieldError::PatternNotFound("category label"));
    }

    scanner::find_nul_bounded_token(&entry.window(start, end - start))
        .map(|(_, token)| token)
        .ok_or(FieldError::PatternNotFound("category label"))
}

fn parse_amount(entry: &ByteBuffer<'_>) -> Result<i32, FieldError> {
    let amount_pos =
        scanner::find_first(entry, AMOUNT_MARKER, 0).ok_or(FieldError::MarkerNotFound("Amount"))?;
    let area = entry.window(amount_pos, AMOUNT_WINDOW);

    let tag_pos = scanner::find_first(&area, INT_PROPERTY.as_bytes(), 0)
        .ok_or(FieldError::MarkerNotFound(INT_PROPERTY))?;
    area.read_i32_le(tag_pos + AMOUNT_VALUE_SKIP)
}

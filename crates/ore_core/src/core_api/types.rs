use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::gvas::types::MONEY_SCALE;
use crate::layout::ByteRange;

/// One entry of the in-game transaction history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransactionRecord {
    pub item_code: String,
    pub category: String,
    /// Signed amount at 256x scale. Negative is a purchase, positive a sale.
    pub amount_raw: i32,
}

impl TransactionRecord {
    pub fn amount(&self) -> f64 {
        f64::from(self.amount_raw) / MONEY_SCALE
    }

    pub fn is_purchase(&self) -> bool {
        self.amount_raw < 0
    }

    pub fn is_sale(&self) -> bool {
        self.amount_raw > 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldStatus {
    Decoded,
    /// No trace of the field in this save.
    #[default]
    Absent,
    /// The field's marker is there but its layout did not match.
    Malformed,
}

impl FieldStatus {
    pub fn of<T>(outcome: &Result<T, FieldError>) -> Self {
        match outcome {
            Ok(_) => Self::Decoded,
            Err(e) if e.is_absence() => Self::Absent,
            Err(_) => Self::Malformed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decoded => "decoded",
            Self::Absent => "absent",
            Self::Malformed => "malformed",
        }
    }
}

/// Which fields of a [`SaveContainer`] came from the file and which are
/// defaults, so a zero balance can be told apart from an unreadable one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecodeReport {
    pub engine_version: FieldStatus,
    pub game_version: FieldStatus,
    pub money: FieldStatus,
    pub transactions: FieldStatus,
    pub map: FieldStatus,
    pub transaction_section: Option<ByteRange>,
    pub discarded_candidates: usize,
}

impl DecodeReport {
    pub fn fields(&self) -> [(&'static str, FieldStatus); 5] {
        [
            ("engine_version", self.engine_version),
            ("game_version", self.game_version),
            ("money", self.money),
            ("transactions", self.transactions),
            ("map", self.map),
        ]
    }

    pub fn is_complete(&self) -> bool {
        self.fields()
            .iter()
            .all(|(_, status)| *status == FieldStatus::Decoded)
    }
}

/// Everything extracted from one save file.
///
/// Always fully populated: fields that could not be decoded hold their
/// empty or zero default and are flagged in `report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveContainer {
    pub source_path: PathBuf,
    pub size_bytes: u64,
    pub current_money_raw: i32,
    /// In the order found in the file, which is not necessarily chronological.
    pub transactions: Vec<TransactionRecord>,
    pub map_name: String,
    pub engine_version: String,
    pub game_version: String,
    pub report: DecodeReport,
}

impl SaveContainer {
    pub fn current_money(&self) -> f64 {
        f64::from(self.current_money_raw) / MONEY_SCALE
    }

    pub fn purchases(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.transactions.iter().filter(|t| t.is_purchase())
    }

    pub fn sales(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.transactions.iter().filter(|t| t.is_sale())
    }

    /// Sum of all purchases; negative or zero.
    pub fn total_purchases(&self) -> f64 {
        scaled_sum(self.purchases())
    }

    /// Sum of all sales; positive or zero.
    pub fn total_sales(&self) -> f64 {
        scaled_sum(self.sales())
    }

    /// Net amount per category, in the order categories first appear.
    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        let mut out: Vec<CategoryTotal> = Vec::new();
        for t in &self.transactions {
            match out.iter_mut().find(|c| c.category == t.category) {
                Some(total) => {
                    total.count += 1;
                    total.amount_raw += i64::from(t.amount_raw);
                }
                None => out.push(CategoryTotal {
                    category: t.category.clone(),
                    count: 1,
                    amount_raw: i64::from(t.amount_raw),
                }),
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryTotal {
    pub category: String,
    pub count: usize,
    pub amount_raw: i64,
}

impl CategoryTotal {
    pub fn amount(&self) -> f64 {
        self.amount_raw as f64 / MONEY_SCALE
    }
}

fn scaled_sum<'a>(records: impl Iterator<Item = &'a TransactionRecord>) -> f64 {
    let raw: i64 = records.map(|t| i64::from(t.amount_raw)).sum();
    raw as f64 / MONEY_SCALE
}

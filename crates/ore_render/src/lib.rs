use std::fmt::Write as _;

use ore_core::core_api::{CategoryTotal, DecodeReport, SaveContainer, TransactionRecord};
use serde_json::{Map as JsonMap, Value as JsonValue};

const LABEL_WIDTH: usize = 16;
const CODE_COL_WIDTH: usize = 10;
const CATEGORY_COL_WIDTH: usize = 18;
const AMOUNT_COL_WIDTH: usize = 14;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub money: bool,
    pub map: bool,
    pub versions: bool,
    pub transactions: bool,
    pub totals: bool,
    pub report: bool,
}

impl FieldSelection {
    pub fn is_any_selected(&self) -> bool {
        self.money
            || self.map
            || self.versions
            || self.transactions
            || self.totals
            || self.report
    }
}

pub fn render_json_full(save: &SaveContainer) -> JsonValue {
    let mut out = JsonMap::new();

    out.insert("file".to_string(), JsonValue::String(file_name(save)));
    out.insert("size_bytes".to_string(), JsonValue::from(save.size_bytes));
    out.insert(
        "engine_version".to_string(),
        JsonValue::String(save.engine_version.clone()),
    );
    out.insert(
        "game_version".to_string(),
        JsonValue::String(save.game_version.clone()),
    );
    out.insert("map".to_string(), JsonValue::String(save.map_name.clone()));
    insert_money(&mut out, save);
    insert_totals(&mut out, save);
    out.insert(
        "transactions".to_string(),
        transactions_to_json(&save.transactions),
    );
    out.insert("report".to_string(), report_to_json(&save.report));

    JsonValue::Object(out)
}

pub fn render_json_selected(save: &SaveContainer, fields: &FieldSelection) -> JsonValue {
    let mut out = JsonMap::new();

    if fields.versions {
        out.insert(
            "engine_version".to_string(),
            JsonValue::String(save.engine_version.clone()),
        );
        out.insert(
            "game_version".to_string(),
            JsonValue::String(save.game_version.clone()),
        );
    }
    if fields.map {
        out.insert("map".to_string(), JsonValue::String(save.map_name.clone()));
    }
    if fields.money {
        insert_money(&mut out, save);
    }
    if fields.totals {
        insert_totals(&mut out, save);
    }
    if fields.transactions {
        out.insert(
            "transactions".to_string(),
            transactions_to_json(&save.transactions),
        );
    }
    if fields.report {
        out.insert("report".to_string(), report_to_json(&save.report));
    }

    JsonValue::Object(out)
}

/// `key=value` lines for the selected fields, one entry per line.
pub fn render_selected_pairs(
    save: &SaveContainer,
    fields: &FieldSelection,
) -> Vec<(&'static str, String)> {
    let mut out = Vec::new();

    if fields.versions {
        out.push(("engine_version", save.engine_version.clone()));
        out.push(("game_version", save.game_version.clone()));
    }
    if fields.map {
        out.push(("map", save.map_name.clone()));
    }
    if fields.money {
        out.push(("money", format_money(save.current_money())));
        out.push(("money_raw", save.current_money_raw.to_string()));
    }
    if fields.totals {
        out.push(("transaction_count", save.transactions.len().to_string()));
        out.push(("total_sales", format_money(save.total_sales())));
        out.push(("total_purchases", format_money(save.total_purchases())));
    }
    if fields.transactions {
        for t in &save.transactions {
            out.push((
                "transaction",
                format!("{} {} {}", t.item_code, t.category, format_money(t.amount())),
            ));
        }
    }
    if fields.report {
        for (name, status) in save.report.fields() {
            out.push(("status", format!("{name}={}", status.as_str())));
        }
        out.push(("complete", save.report.is_complete().to_string()));
        out.push((
            "discarded_candidates",
            save.report.discarded_candidates.to_string(),
        ));
    }

    out
}

/// Plain-text overview of a decoded save.
pub fn render_summary(save: &SaveContainer) -> String {
    render_summary_with_options(save, false)
}

/// As [`render_summary`], optionally followed by the transaction table,
/// per-category totals and field status report.
pub fn render_summary_with_options(save: &SaveContainer, verbose: bool) -> String {
    let mut out = String::new();

    line(&mut out, "File", &file_name(save));
    line(&mut out, "Size", &format!("{} bytes", group_thousands(save.size_bytes as i64)));
    line(&mut out, "Engine", &save.engine_version);
    line(&mut out, "Game Version", &save.game_version);
    line(&mut out, "Map", &save.map_name);
    line(&mut out, "Current Money", &format_money(save.current_money()));
    line(&mut out, "Transactions", &save.transactions.len().to_string());
    line(&mut out, "Total Sales", &format_money(save.total_sales()));
    line(&mut out, "Total Purchases", &format_money(save.total_purchases()));

    if verbose {
        out.push('\n');
        render_transaction_table(&mut out, &save.transactions);
        out.push('\n');
        render_category_totals(&mut out, &save.category_totals());
        out.push('\n');
        render_report(&mut out, &save.report);
    }

    out
}

/// Whole currency units with thousands separators, e.g. `-$1,250`.
pub fn format_money(amount: f64) -> String {
    let rounded = amount.round() as i64;
    if rounded < 0 {
        format!("-${}", group_thousands(-rounded))
    } else {
        format!("${}", group_thousands(rounded))
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn file_name(save: &SaveContainer) -> String {
    save.source_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| save.source_path.display().to_string())
}

fn line(out: &mut String, label: &str, value: &str) {
    writeln!(out, "{:<width$}{value}", format!("{label}:"), width = LABEL_WIDTH)
        .expect("writing to String cannot fail");
}

fn render_transaction_table(out: &mut String, transactions: &[TransactionRecord]) {
    writeln!(
        out,
        "{:<c$}{:<k$}{:>a$}  Type",
        "Code",
        "Category",
        "Amount",
        c = CODE_COL_WIDTH,
        k = CATEGORY_COL_WIDTH,
        a = AMOUNT_COL_WIDTH,
    )
    .expect("writing to String cannot fail");
    for t in transactions {
        writeln!(
            out,
            "{:<c$}{:<k$}{:>a$}  {}",
            t.item_code,
            t.category,
            format_money(t.amount()),
            direction(t),
            c = CODE_COL_WIDTH,
            k = CATEGORY_COL_WIDTH,
            a = AMOUNT_COL_WIDTH,
        )
        .expect("writing to String cannot fail");
    }
}

fn render_category_totals(out: &mut String, totals: &[CategoryTotal]) {
    for total in totals {
        writeln!(
            out,
            "{:<k$}{:>4} x {:>a$}",
            total.category,
            total.count,
            format_money(total.amount()),
            k = CATEGORY_COL_WIDTH,
            a = AMOUNT_COL_WIDTH,
        )
        .expect("writing to String cannot fail");
    }
}

fn render_report(out: &mut String, report: &DecodeReport) {
    for (name, status) in report.fields() {
        line(out, name, status.as_str());
    }
    line(out, "complete", if report.is_complete() { "yes" } else { "no" });
    line(out, "discarded", &report.discarded_candidates.to_string());
}

fn direction(t: &TransactionRecord) -> &'static str {
    if t.is_purchase() {
        "Purchase"
    } else if t.is_sale() {
        "Sale"
    } else {
        "-"
    }
}

fn insert_money(out: &mut JsonMap<String, JsonValue>, save: &SaveContainer) {
    out.insert(
        "current_money".to_string(),
        JsonValue::from(save.current_money()),
    );
    out.insert(
        "current_money_raw".to_string(),
        JsonValue::from(save.current_money_raw),
    );
}

fn insert_totals(out: &mut JsonMap<String, JsonValue>, save: &SaveContainer) {
    out.insert(
        "transaction_count".to_string(),
        JsonValue::from(save.transactions.len()),
    );
    out.insert("total_sales".to_string(), JsonValue::from(save.total_sales()));
    out.insert(
        "total_purchases".to_string(),
        JsonValue::from(save.total_purchases()),
    );
}

fn transactions_to_json(transactions: &[TransactionRecord]) -> JsonValue {
    JsonValue::Array(
        transactions
            .iter()
            .map(|t| {
                let mut m = JsonMap::new();
                m.insert("item_code".to_string(), JsonValue::String(t.item_code.clone()));
                m.insert("category".to_string(), JsonValue::String(t.category.clone()));
                m.insert("amount".to_string(), JsonValue::from(t.amount()));
                m.insert("amount_raw".to_string(), JsonValue::from(t.amount_raw));
                m.insert(
                    "type".to_string(),
                    JsonValue::String(direction(t).to_string()),
                );
                JsonValue::Object(m)
            })
            .collect(),
    )
}

fn report_to_json(report: &DecodeReport) -> JsonValue {
    let mut m = JsonMap::new();
    for (name, status) in report.fields() {
        m.insert(name.to_string(), JsonValue::String(status.as_str().to_string()));
    }
    m.insert("complete".to_string(), JsonValue::Bool(report.is_complete()));
    m.insert(
        "discarded_candidates".to_string(),
        JsonValue::from(report.discarded_candidates),
    );
    m.insert(
        "transaction_section".to_string(),
        match report.transaction_section {
            Some(range) => JsonValue::String(range.to_string()),
            None => JsonValue::Null,
        },
    );
    JsonValue::Object(m)
}

#![allow(dead_code)]

/// Builds synthetic `GVAS` containers shaped like the records the decoder
/// targets.
pub struct SaveBuilder {
    bytes: Vec<u8>,
}

impl SaveBuilder {
    /// Magic plus the three header integers, nothing else.
    pub fn new() -> Self {
        let mut bytes = b"GVAS".to_vec();
        for value in [2i32, 522, 0] {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn string(mut self, text: &str) -> Self {
        push_string(&mut self.bytes, text);
        self
    }

    pub fn int_property(mut self, name: &str, value: i32) -> Self {
        push_int_property(&mut self.bytes, name, value);
        self
    }

    pub fn str_property(mut self, name: &str, value: &str) -> Self {
        push_str_property(&mut self.bytes, name, value);
        self
    }

    pub fn money(self, raw: i32) -> Self {
        self.int_property("NewMoney", raw)
    }

    /// `TransactionsHistory` array property header.
    pub fn transactions_section(mut self, count: i32) -> Self {
        push_string(&mut self.bytes, "TransactionsHistory");
        push_string(&mut self.bytes, "ArrayProperty");
        self.bytes.extend_from_slice(&0i64.to_le_bytes());
        push_string(&mut self.bytes, "StructProperty");
        self.bytes.push(0);
        self.bytes.extend_from_slice(&count.to_le_bytes());
        self
    }

    pub fn transaction(mut self, item_code: &str, category: &str, amount_raw: i32) -> Self {
        push_entry_head(&mut self.bytes, item_code, category);
        push_int_property(&mut self.bytes, "Amount", amount_raw);
        self.bytes.extend(none_terminator());
        self
    }

    /// Entry whose `Amount` property stops right after its name.
    pub fn truncated_transaction(mut self, item_code: &str, category: &str) -> Self {
        push_entry_head(&mut self.bytes, item_code, category);
        push_string(&mut self.bytes, "Amount");
        self
    }

    /// Entry that ends after its `Category` property.
    pub fn amountless_transaction(mut self, item_code: &str, category: &str) -> Self {
        push_entry_head(&mut self.bytes, item_code, category);
        self.bytes.extend(none_terminator());
        self
    }

    /// Entry without a `Category` property.
    pub fn uncategorised_transaction(mut self, item_code: &str, amount_raw: i32) -> Self {
        push_string(&mut self.bytes, "Name");
        push_str_property_value(&mut self.bytes, item_code);
        push_int_property(&mut self.bytes, "Amount", amount_raw);
        self.bytes.extend(none_terminator());
        self
    }

    pub fn pad_to(mut self, len: usize) -> Self {
        if self.bytes.len() < len {
            self.bytes.resize(len, 0);
        }
        self
    }

    pub fn pad(mut self, n: usize) -> Self {
        self.bytes.resize(self.bytes.len() + n, 0);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// The 600-byte reference save: 10 000 in cash, one purchase of 100 and
/// one sale of 500.
pub fn reference_save() -> Vec<u8> {
    SaveBuilder::new()
        .money(2_560_000)
        .transactions_section(2)
        .transaction("300001", "Equipment", -25_600)
        .transaction("400187", "Factory", 128_000)
        .pad_to(600)
        .build()
}

fn push_string(out: &mut Vec<u8>, text: &str) {
    out.extend_from_slice(&(text.len() as i32 + 1).to_le_bytes());
    out.extend_from_slice(text.as_bytes());
    out.push(0);
}

fn push_int_property(out: &mut Vec<u8>, name: &str, value: i32) {
    push_string(out, name);
    push_string(out, "IntProperty");
    out.extend_from_slice(&4i64.to_le_bytes());
    out.extend_from_slice(&value.to_le_bytes());
}

fn push_str_property(out: &mut Vec<u8>, name: &str, value: &str) {
    push_string(out, name);
    push_str_property_value(out, value);
}

// Type header and value of a `StrProperty`, for when the name is already out.
fn push_str_property_value(out: &mut Vec<u8>, value: &str) {
    push_string(out, "StrProperty");
    out.extend_from_slice(&(value.len() as i64 + 5).to_le_bytes());
    push_string(out, value);
}

fn push_entry_head(out: &mut Vec<u8>, item_code: &str, category: &str) {
    push_string(out, "Name");
    push_str_property_value(out, item_code);
    push_str_property(out, "Category", category);
}

fn none_terminator() -> Vec<u8> {
    let mut out = Vec::new();
    push_string(&mut out, "None");
    out
}

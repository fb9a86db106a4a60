// Container constants
pub const MAGIC: &[u8] = b"GVAS";

// Magic + save game version + package version + one unknown i32.
pub const ENGINE_VERSION_OFFSET: usize = 16;
pub const MAX_ENGINE_VERSION_LEN: usize = 99;
pub const HEADER_SCAN_LEN: usize = 500;

/// Every monetary integer in the save is stored at 256x the displayed value.
pub const MONEY_SCALE: f64 = 256.0;

pub const INT_PROPERTY: &str = "IntProperty";

// --- Money ---

pub const MONEY_PROPERTY: &str = "NewMoney";

// --- Transaction history ---

pub const TRANSACTIONS_SECTION: &[u8] = b"TransactionsHistory";
pub const TRANSACTION_WINDOW: usize = 20_000;

/// Length-prefixed `Name` property that opens every transaction entry.
pub const TRANSACTION_NAME_MARKER: &[u8] = b"\x05\x00\x00\x00Name\x00";
/// Bytes searched per entry, measured from the start of its `Name` marker.
pub const RECORD_WINDOW: usize = 250;

pub const CATEGORY_MARKER: &[u8] = b"Category\x00";
pub const CATEGORY_TOKEN_SKIP: usize = 20;
pub const CATEGORY_WINDOW: usize = 100;
pub const UNKNOWN_CATEGORY: &str = "Unknown";

pub const AMOUNT_MARKER: &[u8] = b"Amount\x00";
pub const AMOUNT_PREFIXED_MARKER: &[u8] = b"\x07\x00\x00\x00Amount\x00";
pub const AMOUNT_WINDOW: usize = 50;
/// `IntProperty\0` followed by the 8-byte size field.
pub const AMOUNT_VALUE_SKIP: usize = 12 + 8;

// --- Levels ---

pub const KNOWN_MAPS: [&str; 4] = ["FOREST_QUARRY", "DESERT_MINE", "ARCTIC_MINE", "VOLCANO_MINE"];

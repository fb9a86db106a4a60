use std::fs;
use std::path::Path;

use log::debug;

use crate::error::FieldError;
use crate::gvas::{DecodeOptions, SaveGame};

use super::error::CoreError;
use super::types::{DecodeReport, FieldStatus, SaveContainer};

#[derive(Debug, Default, Clone)]
pub struct Engine {
    options: DecodeOptions,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Read and decode a save file.
    ///
    /// Fails with [`CoreErrorCode::Io`](super::CoreErrorCode::Io) if the file
    /// cannot be read and with
    /// [`CoreErrorCode::InvalidFormat`](super::CoreErrorCode::InvalidFormat)
    /// if it is not a `GVAS` container.
    pub fn decode<P: AsRef<Path>>(&self, path: P) -> Result<SaveContainer, CoreError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| CoreError::unreadable(path, &e))?;
        self.decode_bytes(path, bytes)
    }

    /// Decode bytes already in memory; `source_path` is only recorded.
    pub fn decode_bytes<P: AsRef<Path>, B: AsRef<[u8]>>(
        &self,
        source_path: P,
        bytes: B,
    ) -> Result<SaveContainer, CoreError> {
        let source_path = source_path.as_ref();
        let bytes = bytes.as_ref();

        let save = SaveGame::parse(bytes, &self.options)
            .map_err(|e| CoreError::not_a_save(source_path, &e))?;

        let container = assemble(source_path, bytes.len() as u64, save);
        debug!(
            "decoded {}: money={} transactions={} discarded={} map={:?}",
            source_path.display(),
            container.current_money_raw,
            container.transactions.len(),
            container.report.discarded_candidates,
            container.map_name,
        );
        Ok(container)
    }
}

/// Decode a save file with the default options.
pub fn decode<P: AsRef<Path>>(path: P) -> Result<SaveContainer, CoreError> {
    Engine::new().decode(path)
}

fn assemble(source_path: &Path, size_bytes: u64, save: SaveGame) -> SaveContainer {
    let mut report = DecodeReport::default();

    let engine_version = settle(
        "engine version",
        save.header.engine_version,
        &mut report.engine_version,
    );
    let game_version = settle(
        "game version",
        save.header.game_version,
        &mut report.game_version,
    );
    let current_money_raw = settle("money", save.money_raw, &mut report.money);
    let scan = settle("transactions", save.transactions, &mut report.transactions);
    let map_name = settle("map", save.map_name, &mut report.map);

    if report.transactions == FieldStatus::Decoded {
        report.transaction_section = Some(scan.section);
    }
    report.discarded_candidates = scan.discarded;

    SaveContainer {
        source_path: source_path.to_path_buf(),
        size_bytes,
        current_money_raw,
        transactions: scan.records,
        map_name,
        engine_version,
        game_version,
        report,
    }
}

/// Keep a decoded value, or fall back to the type's default and record why.
fn settle<T: Default>(
    field: &'static str,
    outcome: Result<T, FieldError>,
    status: &mut FieldStatus,
) -> T {
    *status = FieldStatus::of(&outcome);
    outcome.unwrap_or_else(|e| {
        debug!("{field} not decoded, using default: {e}");
        T::default()
    })
}

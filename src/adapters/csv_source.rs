//! Catalog rows from CSV.
//!
//! Expected header: `kit_id,variant,base_price`. Prices are parsed as exact
//! decimals from their text form.

use crate::core::{KitEntry, KitSource, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CsvKitSource {
    path: PathBuf,
}

impl CsvKitSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KitSource for CsvKitSource {
    fn load_kits(&self) -> Result<Vec<KitEntry>> {
        tracing::debug!("Reading kit catalog from {}", self.path.display());
        let file = std::fs::File::open(&self.path)?;
        read_kit_entries(file)
    }
}

pub fn read_kit_entries<R: Read>(reader: R) -> Result<Vec<KitEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for row in csv_reader.deserialize() {
        let entry: KitEntry = row?;
        entries.push(entry);
    }

    Ok(entries)
}

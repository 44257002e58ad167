//! Bulk inventory import from CSV exports.

mod bank_statement;
mod inventory_csv;

pub use bank_statement::{
    parse_bank_statement, BankImport, FoodPurchase, Grocer, Transaction, KNOWN_GROCERS,
};
pub use inventory_csv::{parse_inventory_csv, CsvImport};

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ImportError;

/// A data row that was not imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRow {
    /// 1-based line number in the file, header included.
    pub line: u64,
    pub reason: String,
}

/// Column positions resolved from a header row, matched case-insensitively.
pub(crate) struct Columns {
    headers: Vec<String>,
}

impl Columns {
    pub(crate) fn new(headers: &csv::StringRecord) -> Self {
        Self {
            headers: headers
                .iter()
                .map(|h| h.trim().trim_start_matches('\u{feff}').to_lowercase())
                .collect(),
        }
    }

    /// Index of the first header equal to any of `names`.
    pub(crate) fn find(&self, names: &[&str]) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| names.iter().any(|n| h == n))
    }

    pub(crate) fn require(&self, names: &[&str]) -> Result<usize, ImportError> {
        self.find(names)
            .ok_or_else(|| ImportError::MissingColumn(names[0].to_string()))
    }
}

pub(crate) fn reader<R: std::io::Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

/// Value of column `idx`, or `None` if absent or blank.
pub(crate) fn field(record: &csv::StringRecord, idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| record.get(i)).filter(|v| !v.is_empty())
}

pub(crate) fn line_of(record: &csv::StringRecord, fallback: u64) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(fallback)
}

use chrono::NaiveDate;
use iso_currency::Currency;
use serde::{Serialize, Serializer};

use crate::errors::Result;

use super::{account_tree::AccountTree, raw_entry::RawEntry};

/// One raw string table as supplied by the spreadsheet host: rows of cells,
/// no header interpretation applied yet.
pub type RawTable = Vec<Vec<String>>;

/// The full set of input tables for one report invocation.
#[derive(Debug, Clone, Default)]
pub struct ReportTables {
    pub account_types: RawTable,
    pub accounts: RawTable,
    pub currencies: RawTable,
    pub ledgers: Vec<RawTable>,
}

/// Parsed report inputs: the chart of accounts, the output currency order,
/// and the raw transactions resolved against the tree.
#[derive(Debug)]
pub struct ReportInputs {
    pub tree: AccountTree,
    pub currencies: Vec<Currency>,
    pub raw_entries: Vec<RawEntry>,
}

/// One output matrix cell. Serializes to the host-friendly scalar (`null`,
/// string, ISO date string, or number).
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Date(NaiveDate),
    Number(f64),
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Cell::Empty => serializer.serialize_unit(),
            Cell::Text(text) => serializer.serialize_str(text),
            Cell::Date(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            Cell::Number(number) => serializer.serialize_f64(*number),
        }
    }
}

/// The three statement matrices produced by one report invocation, each
/// row-major with two header rows followed by account and roll-up rows.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct ReportOutput {
    pub income_statement: Vec<Vec<Cell>>,
    pub balance_sheet: Vec<Vec<Cell>>,
    pub budget_review: Vec<Vec<Cell>>,
}

impl ReportOutput {
    /// JSON form of the three matrices, for hosts that take the output over
    /// a serialized boundary instead of in-process.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

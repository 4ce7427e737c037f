use crate::entities::RawTable;
use crate::errors::Result;

/// Splits CSV text into a raw string table, headers uninterpreted, ragged
/// rows allowed (spreadsheet exports rarely pad trailing cells).
pub(crate) fn table_from_csv(s: &str) -> Result<RawTable> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(s.as_bytes())
        .records()
        .map(|record| {
            let record = record?;
            Ok(record.iter().map(|cell| cell.to_string()).collect())
        })
        .collect()
}

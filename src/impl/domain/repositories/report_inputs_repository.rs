use async_trait::async_trait;

use crate::entities::{ReportInputs, ReportTables};
use crate::errors::Result;

/// Bundles the parsed host tables into one set of report inputs.
#[async_trait]
pub(crate) trait ReportInputsRepository: Send + Sync {
    fn from_tables(&self, tables: &ReportTables) -> Result<ReportInputs>;

    fn from_csv_strings(
        &self,
        account_types_csv: &str,
        accounts_csv: &str,
        currencies_csv: &str,
        ledgers_csv: &[&str],
    ) -> Result<ReportInputs>;

    async fn from_csv_files<P>(
        &self,
        account_types_csv: P,
        accounts_csv: P,
        currencies_csv: P,
        ledgers_csv: &[P],
    ) -> Result<ReportInputs>
    where
        P: AsRef<std::path::Path> + Send + Sync;
}

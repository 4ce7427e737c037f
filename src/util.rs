use crate::domain::usecases::report_usecase::{GenerateReportUsecase as _, GenerateReportUsecaseImpl};
use crate::entities::{Cell, ReportOutput, ReportTables};
use crate::errors::Result;
use crate::presentation::table_printer::TablePrinter;

/// Public entry point: computes the income statement, balance sheet, and
/// budget review from the host's raw tables.
///
/// Each call is a pure function of its inputs; nothing is retained between
/// invocations.
pub struct StatementsUtil {
    generate_report_usecase: GenerateReportUsecaseImpl,
    printer: TablePrinter,
}

impl StatementsUtil {
    pub fn new() -> Self {
        Self {
            generate_report_usecase: GenerateReportUsecaseImpl::new(),
            printer: TablePrinter::new(),
        }
    }

    /// Builds the report from already-split string tables.
    pub fn from_tables(&self, tables: &ReportTables) -> Result<ReportOutput> {
        self.generate_report_usecase.from_tables(tables)
    }

    /// Builds the report from CSV text, one string per table.
    pub fn from_csv_strings(
        &self,
        account_types_csv: &str,
        accounts_csv: &str,
        currencies_csv: &str,
        ledgers_csv: &[&str],
    ) -> Result<ReportOutput> {
        self.generate_report_usecase.from_csv_strings(
            account_types_csv,
            accounts_csv,
            currencies_csv,
            ledgers_csv,
        )
    }

    /// Builds the report from CSV files; ledger files are read concurrently.
    pub async fn from_csv_files<P>(
        &self,
        account_types_csv: P,
        accounts_csv: P,
        currencies_csv: P,
        ledgers_csv: &[P],
    ) -> Result<ReportOutput>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        self.generate_report_usecase
            .from_csv_files(account_types_csv, accounts_csv, currencies_csv, ledgers_csv)
            .await
    }

    /// Renders one statement matrix as aligned plain text, for logs or
    /// terminal display.
    pub fn render_text(&self, table: &[Vec<Cell>]) -> String {
        self.printer.print_table(table)
    }
}

impl Default for StatementsUtil {
    fn default() -> Self {
        Self::new()
    }
}

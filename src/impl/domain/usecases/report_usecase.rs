use async_trait::async_trait;
use log::debug;

use crate::data::repositories::report_inputs_repository_impl::ReportInputsRepositoryImpl;
use crate::domain::logic::{
    aggregator::{net_revenue_totals, Aggregator, DateBasis, DateSelector},
    month_periods, normalizer,
};
use crate::domain::repositories::report_inputs_repository::ReportInputsRepository;
use crate::entities::{
    Account, AccountInfo, AccountTotals, AccountTree, Entry, Normality, ReportInputs,
    ReportOutput, ReportTables, ReportTotals, StatementKind,
};
use crate::errors::{Result, StatementError};
use crate::presentation::statement_fmt::StatementFormatter;

// Well-known roots used for statement assembly. Input tables are expected to
// declare them; when one is absent its contribution reads as zero and the
// derived equity line is skipped.
const REVENUE_ROOT: &str = "revenue";
const EXPENSES_ROOT: &str = "expenses";
const EXCHANGE_ROOT: &str = "exchange";
const EQUITY_ROOT: &str = "equity";
const NET_REVENUE_NAME: &str = "Net Revenue";

/// Runs the full pipeline: build tree → normalize postings → aggregate →
/// format the three statements.
#[async_trait]
pub(crate) trait GenerateReportUsecase: Send + Sync {
    fn from_tables(&self, tables: &ReportTables) -> Result<ReportOutput>;

    fn from_csv_strings(
        &self,
        account_types_csv: &str,
        accounts_csv: &str,
        currencies_csv: &str,
        ledgers_csv: &[&str],
    ) -> Result<ReportOutput>;

    async fn from_csv_files<P>(
        &self,
        account_types_csv: P,
        accounts_csv: P,
        currencies_csv: P,
        ledgers_csv: &[P],
    ) -> Result<ReportOutput>
    where
        P: AsRef<std::path::Path> + Send + Sync;
}

pub(crate) struct GenerateReportUsecaseImpl<
    R = ReportInputsRepositoryImpl, // Default.
> where
    R: ReportInputsRepository,
{
    report_inputs_repository: R,
}

#[async_trait]
impl<R> GenerateReportUsecase for GenerateReportUsecaseImpl<R>
where
    R: ReportInputsRepository,
{
    fn from_tables(&self, tables: &ReportTables) -> Result<ReportOutput> {
        generate(self.report_inputs_repository.from_tables(tables)?)
    }

    fn from_csv_strings(
        &self,
        account_types_csv: &str,
        accounts_csv: &str,
        currencies_csv: &str,
        ledgers_csv: &[&str],
    ) -> Result<ReportOutput> {
        generate(self.report_inputs_repository.from_csv_strings(
            account_types_csv,
            accounts_csv,
            currencies_csv,
            ledgers_csv,
        )?)
    }

    async fn from_csv_files<P>(
        &self,
        account_types_csv: P,
        accounts_csv: P,
        currencies_csv: P,
        ledgers_csv: &[P],
    ) -> Result<ReportOutput>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        generate(
            self.report_inputs_repository
                .from_csv_files(account_types_csv, accounts_csv, currencies_csv, ledgers_csv)
                .await?,
        )
    }
}

impl GenerateReportUsecaseImpl {
    pub(crate) fn new() -> Self {
        GenerateReportUsecaseImpl {
            report_inputs_repository: ReportInputsRepositoryImpl::new(),
        }
    }
}

fn statement_roots(tree: &AccountTree, statement: StatementKind) -> Vec<&Account> {
    tree.roots()
        .iter()
        .filter(|root| root.info.statement == statement)
        .collect()
}

fn root_totals<'a>(
    tree: &AccountTree,
    totals: &'a ReportTotals,
    name: &str,
) -> Option<&'a AccountTotals> {
    tree.find_by_name(name)
        .and_then(|account| totals.account(account.id()))
}

fn generate(inputs: ReportInputs) -> Result<ReportOutput> {
    let ReportInputs {
        mut tree,
        currencies,
        raw_entries,
    } = inputs;

    let entries: Vec<Entry> = raw_entries.iter().flat_map(normalizer::expand).collect();

    // The reporting range covers every posting and promised-payment date, so
    // both posting-date and term-based bucketing land inside the period set.
    let start = entries
        .iter()
        .map(|e| e.term.map_or(e.date, |term| term.min(e.date)))
        .min()
        .ok_or(StatementError::NoPostings)?;
    let end = entries
        .iter()
        .map(|e| e.term.map_or(e.date, |term| term.max(e.date)))
        .max()
        .ok_or(StatementError::NoPostings)?;
    let periods = month_periods(start, end);
    debug!(
        "aggregating {} postings over {} periods and {} currencies",
        entries.len(),
        periods.len(),
        currencies.len()
    );

    let (income_totals, budget_totals, mut balance_totals, net_revenue) = {
        let income_roots = statement_roots(&tree, StatementKind::IncomeStatement);
        let balance_roots = statement_roots(&tree, StatementKind::BalanceSheet);
        let aggregator = Aggregator::new(&tree, &entries, &periods, &currencies);
        let income_totals =
            aggregator.totals_for_roots(&income_roots, DateBasis::Flow, DateSelector::PostingDate);
        let budget_totals = aggregator.totals_for_roots(
            &income_roots,
            DateBasis::Flow,
            DateSelector::TermOrPostingDate,
        );
        let balance_totals =
            aggregator.totals_for_roots(&balance_roots, DateBasis::AsOf, DateSelector::PostingDate);
        // The derived equity line is cumulative, so it reads the
        // income-statement roots on the as-of basis.
        let cumulative =
            aggregator.totals_for_roots(&income_roots, DateBasis::AsOf, DateSelector::PostingDate);
        let net_revenue = net_revenue_totals(
            &periods,
            &currencies,
            root_totals(&tree, &cumulative, REVENUE_ROOT),
            root_totals(&tree, &cumulative, EXCHANGE_ROOT),
            root_totals(&tree, &cumulative, EXPENSES_ROOT),
        );
        (income_totals, budget_totals, balance_totals, net_revenue)
    };

    match tree.insert_child_of(
        EQUITY_ROOT,
        NET_REVENUE_NAME,
        AccountInfo {
            normality: Normality::Credit,
            statement: StatementKind::IncomeStatement,
        },
    ) {
        Some(net_revenue_id) => balance_totals.insert(net_revenue_id, net_revenue),
        None => debug!(
            "no '{}' root declared: skipping the derived '{}' line",
            EQUITY_ROOT, NET_REVENUE_NAME
        ),
    }

    let income_roots = statement_roots(&tree, StatementKind::IncomeStatement);
    let balance_roots = statement_roots(&tree, StatementKind::BalanceSheet);
    let formatter = StatementFormatter::new(&periods, &currencies);
    Ok(ReportOutput {
        income_statement: formatter.format(
            &income_roots,
            &income_totals,
            StatementKind::IncomeStatement,
        ),
        balance_sheet: formatter.format(
            &balance_roots,
            &balance_totals,
            StatementKind::BalanceSheet,
        ),
        budget_review: formatter.format(
            &income_roots,
            &budget_totals,
            StatementKind::IncomeStatement,
        ),
    })
}

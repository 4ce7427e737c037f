use async_trait::async_trait;

use crate::data::datasources::{
    accounts_table_datasource::{AccountsTableDatasource, AccountsTableDatasourceImpl},
    csv_table::table_from_csv,
    currencies_table_datasource::{CurrenciesTableDatasource, CurrenciesTableDatasourceImpl},
    ledger_table_datasource::{LedgerTableDatasource, LedgerTableDatasourceImpl},
};
use crate::domain::repositories::report_inputs_repository::ReportInputsRepository;
use crate::entities::{ReportInputs, ReportTables};
use crate::errors::Result;

pub(crate) struct ReportInputsRepositoryImpl<
    DS1 = AccountsTableDatasourceImpl, // Defaults.
    DS2 = CurrenciesTableDatasourceImpl,
    DS3 = LedgerTableDatasourceImpl,
> where
    DS1: AccountsTableDatasource,
    DS2: CurrenciesTableDatasource,
    DS3: LedgerTableDatasource,
{
    accounts_datasource: DS1,
    currencies_datasource: DS2,
    ledger_datasource: DS3,
}

#[async_trait]
impl<DS1, DS2, DS3> ReportInputsRepository for ReportInputsRepositoryImpl<DS1, DS2, DS3>
where
    DS1: AccountsTableDatasource + Send + Sync,
    DS2: CurrenciesTableDatasource + Send + Sync,
    DS3: LedgerTableDatasource + Send + Sync,
{
    fn from_tables(&self, tables: &ReportTables) -> Result<ReportInputs> {
        let tree = self
            .accounts_datasource
            .build_tree(&tables.account_types, &tables.accounts);
        let currencies = self.currencies_datasource.parse(&tables.currencies)?;
        let mut raw_entries = Vec::new();
        for ledger in &tables.ledgers {
            let parsed = self
                .ledger_datasource
                .parse(&tree, ledger, raw_entries.len() as u64)?;
            raw_entries.extend(parsed);
        }
        Ok(ReportInputs {
            tree,
            currencies,
            raw_entries,
        })
    }

    fn from_csv_strings(
        &self,
        account_types_csv: &str,
        accounts_csv: &str,
        currencies_csv: &str,
        ledgers_csv: &[&str],
    ) -> Result<ReportInputs> {
        let tables = ReportTables {
            account_types: table_from_csv(account_types_csv)?,
            accounts: table_from_csv(accounts_csv)?,
            currencies: table_from_csv(currencies_csv)?,
            ledgers: ledgers_csv
                .iter()
                .map(|s| table_from_csv(s))
                .collect::<Result<_>>()?,
        };
        self.from_tables(&tables)
    }

    async fn from_csv_files<P>(
        &self,
        account_types_csv: P,
        accounts_csv: P,
        currencies_csv: P,
        ledgers_csv: &[P],
    ) -> Result<ReportInputs>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let account_types = tokio::fs::read_to_string(account_types_csv.as_ref()).await?;
        let accounts = tokio::fs::read_to_string(accounts_csv.as_ref()).await?;
        let currencies = tokio::fs::read_to_string(currencies_csv.as_ref()).await?;
        let ledgers = futures::future::try_join_all(
            ledgers_csv
                .iter()
                .map(|path| tokio::fs::read_to_string(path.as_ref())),
        )
        .await?;
        let ledger_refs: Vec<&str> = ledgers.iter().map(String::as_str).collect();
        self.from_csv_strings(&account_types, &accounts, &currencies, &ledger_refs)
    }
}

impl
    ReportInputsRepositoryImpl<
        AccountsTableDatasourceImpl,
        CurrenciesTableDatasourceImpl,
        LedgerTableDatasourceImpl,
    >
{
    pub(crate) fn new() -> Self {
        ReportInputsRepositoryImpl {
            accounts_datasource: AccountsTableDatasourceImpl::new(),
            currencies_datasource: CurrenciesTableDatasourceImpl::new(),
            ledger_datasource: LedgerTableDatasourceImpl::new(),
        }
    }
}

use std::str::FromStr;

use iso_currency::Currency;
use log::warn;

use crate::data::models::{
    amount_model::AmountModel, currency_model::CurrencyModel, iso_date_model::IsoDateModel,
    ledger_kind_model::LedgerKindModel,
};
use crate::entities::{AccountId, AccountTree, RawEntry, RawEntryId, RawEntryKind};
use crate::errors::{Result, StatementError};

/// Parses one ledger table against the chart of accounts.
///
/// The table starts with a 2-row header: row 1 names the ledger kind (cell 1)
/// and, for general/liability ledgers, the ledger currency (cell 3); row 2 is
/// a human-readable sub-header and is skipped. Rows whose account names do
/// not resolve in the tree are dropped, as are rows with a blank first cell.
pub(crate) trait LedgerTableDatasource {
    fn parse(
        &self,
        tree: &AccountTree,
        table: &[Vec<String>],
        id_offset: u64,
    ) -> Result<Vec<RawEntry>>;
}

pub(crate) struct LedgerTableDatasourceImpl;

impl LedgerTableDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

fn cell(row: &[String], i: usize) -> &str {
    row.get(i).map(String::as_str).unwrap_or("")
}

fn resolve(tree: &AccountTree, name: &str, description: &str) -> Option<AccountId> {
    match tree.find_by_name(name.trim()) {
        Some(account) => Some(account.id()),
        None => {
            warn!(
                "dropping ledger row '{}': account '{}' does not resolve",
                description, name
            );
            None
        }
    }
}

impl LedgerTableDatasource for LedgerTableDatasourceImpl {
    fn parse(
        &self,
        tree: &AccountTree,
        table: &[Vec<String>],
        id_offset: u64,
    ) -> Result<Vec<RawEntry>> {
        if table.len() < 2 {
            return Err(StatementError::MissingLedgerHeader);
        }
        let kind = LedgerKindModel::from_str(cell(&table[0], 1))?;
        let rows = &table[2..];
        match kind {
            LedgerKindModel::General => {
                let currency = CurrencyModel::from_str(cell(&table[0], 3))?.into();
                parse_transfer_rows(tree, rows, currency, false, id_offset)
            }
            LedgerKindModel::Liability => {
                let currency = CurrencyModel::from_str(cell(&table[0], 3))?.into();
                parse_transfer_rows(tree, rows, currency, true, id_offset)
            }
            LedgerKindModel::Exchange => parse_exchange_rows(tree, rows, id_offset),
        }
    }
}

/// General and liability ledger rows:
/// date, description, debit name, credit name, value [, payment term].
fn parse_transfer_rows(
    tree: &AccountTree,
    rows: &[Vec<String>],
    currency: Currency,
    with_term: bool,
    id_offset: u64,
) -> Result<Vec<RawEntry>> {
    let mut entries = Vec::new();
    for row in rows {
        if cell(row, 0).trim().is_empty() {
            continue;
        }
        let date = IsoDateModel::from_str(cell(row, 0))?.into();
        let description = cell(row, 1).to_string();
        let Some(debit) = resolve(tree, cell(row, 2), &description) else {
            continue;
        };
        let Some(credit) = resolve(tree, cell(row, 3), &description) else {
            continue;
        };
        let value = AmountModel::from_str(cell(row, 4))?.into();
        let kind = if with_term {
            RawEntryKind::Liability {
                debit,
                credit,
                currency,
                value,
                payment_term: IsoDateModel::from_str(cell(row, 5))?.into(),
            }
        } else {
            RawEntryKind::Transfer {
                debit,
                credit,
                currency,
                value,
            }
        };
        entries.push(RawEntry {
            id: RawEntryId(id_offset + entries.len() as u64),
            date,
            description,
            kind,
        });
    }
    Ok(entries)
}

/// Exchange ledger rows: date, description, debit name, credit name,
/// exchange name, debit currency, debit value, credit currency, credit value.
fn parse_exchange_rows(
    tree: &AccountTree,
    rows: &[Vec<String>],
    id_offset: u64,
) -> Result<Vec<RawEntry>> {
    let mut entries = Vec::new();
    for row in rows {
        if cell(row, 0).trim().is_empty() {
            continue;
        }
        let date = IsoDateModel::from_str(cell(row, 0))?.into();
        let description = cell(row, 1).to_string();
        let Some(debit) = resolve(tree, cell(row, 2), &description) else {
            continue;
        };
        let Some(credit) = resolve(tree, cell(row, 3), &description) else {
            continue;
        };
        let Some(exchange) = resolve(tree, cell(row, 4), &description) else {
            continue;
        };
        entries.push(RawEntry {
            id: RawEntryId(id_offset + entries.len() as u64),
            date,
            description,
            kind: RawEntryKind::Exchange {
                debit,
                credit,
                exchange,
                debit_currency: CurrencyModel::from_str(cell(row, 5))?.into(),
                debit_value: AmountModel::from_str(cell(row, 6))?.into(),
                credit_currency: CurrencyModel::from_str(cell(row, 7))?.into(),
                credit_value: AmountModel::from_str(cell(row, 8))?.into(),
            },
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{AccountInfo, Normality, StatementKind};
    use chrono::NaiveDate;

    fn table(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn test_tree() -> AccountTree {
        let mut tree = AccountTree::new();
        let debit_info = AccountInfo {
            normality: Normality::Debit,
            statement: StatementKind::BalanceSheet,
        };
        let credit_info = AccountInfo {
            normality: Normality::Credit,
            statement: StatementKind::IncomeStatement,
        };
        tree.add_root("assets", debit_info);
        tree.add_root("revenue", credit_info);
        tree.add_root("exchange", credit_info);
        tree.insert_path(&["assets", "checking"]);
        tree.insert_path(&["assets", "euros"]);
        tree.insert_path(&["revenue", "sales"]);
        tree.insert_path(&["exchange", "fx"]);
        tree
    }

    #[test]
    fn general_ledger_rows_become_transfers_in_the_header_currency() {
        let tree = test_tree();
        let datasource = LedgerTableDatasourceImpl::new();
        let entries = datasource
            .parse(
                &tree,
                &table(&[
                    &["", "General Ledger", "", "USD"],
                    &["Date", "Description", "Debit", "Credit", "Value"],
                    &["2024-01-15", "sale", "checking", "sales", "100"],
                ]),
                0,
            )
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        match &entries[0].kind {
            RawEntryKind::Transfer {
                currency, value, ..
            } => {
                assert_eq!(*currency, Currency::USD);
                assert_eq!(*value, 100.0);
            }
            other => panic!("expected a transfer, got {:?}", other),
        }
    }

    #[test]
    fn rows_with_unresolvable_accounts_are_dropped() {
        let tree = test_tree();
        let datasource = LedgerTableDatasourceImpl::new();
        let entries = datasource
            .parse(
                &tree,
                &table(&[
                    &["", "General Ledger", "", "USD"],
                    &["Date", "Description", "Debit", "Credit", "Value"],
                    &["2024-01-15", "bad", "nonexistent", "sales", "100"],
                    &["2024-01-16", "good", "checking", "sales", "25"],
                    &["", "", "", "", ""],
                ]),
                0,
            )
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "good");
        assert_eq!(entries[0].id, RawEntryId(0));
    }

    #[test]
    fn liability_ledger_rows_carry_the_payment_term() {
        let tree = test_tree();
        let datasource = LedgerTableDatasourceImpl::new();
        let entries = datasource
            .parse(
                &tree,
                &table(&[
                    &["", "Liability Ledger", "", "USD"],
                    &["Date", "Description", "Debit", "Credit", "Value", "Term"],
                    &["2024-01-15", "rent", "checking", "sales", "100", "2024-03-01"],
                ]),
                3,
            )
            .unwrap();
        assert_eq!(entries[0].id, RawEntryId(3));
        match &entries[0].kind {
            RawEntryKind::Liability { payment_term, .. } => {
                assert_eq!(*payment_term, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
            }
            other => panic!("expected a liability, got {:?}", other),
        }
    }

    #[test]
    fn exchange_ledger_rows_carry_both_currency_legs() {
        let tree = test_tree();
        let datasource = LedgerTableDatasourceImpl::new();
        let entries = datasource
            .parse(
                &tree,
                &table(&[
                    &["", "Exchange Ledger", "", ""],
                    &["Date", "Description", "Debit", "Credit", "Exchange", "", "", "", ""],
                    &[
                        "2024-01-20",
                        "convert",
                        "euros",
                        "checking",
                        "fx",
                        "EUR",
                        "90",
                        "USD",
                        "100",
                    ],
                ]),
                0,
            )
            .unwrap();
        match &entries[0].kind {
            RawEntryKind::Exchange {
                debit_currency,
                debit_value,
                credit_currency,
                credit_value,
                ..
            } => {
                assert_eq!(*debit_currency, Currency::EUR);
                assert_eq!(*debit_value, 90.0);
                assert_eq!(*credit_currency, Currency::USD);
                assert_eq!(*credit_value, 100.0);
            }
            other => panic!("expected an exchange, got {:?}", other),
        }
    }

    #[test]
    fn unrecognized_kind_and_missing_header_fail() {
        let tree = test_tree();
        let datasource = LedgerTableDatasourceImpl::new();
        assert!(matches!(
            datasource.parse(&tree, &table(&[&["", "Mystery Ledger", "", "USD"], &[""]]), 0),
            Err(StatementError::UnknownLedgerKind { .. })
        ));
        assert!(matches!(
            datasource.parse(&tree, &table(&[&["", "General Ledger", "", "USD"]]), 0),
            Err(StatementError::MissingLedgerHeader)
        ));
    }
}

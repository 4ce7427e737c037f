use crate::entities::{AccountInfo, AccountTree, Normality, StatementKind};

/// Builds the chart of accounts from the two host tables: account types
/// (one root per row) and account paths (one nested path per row).
pub(crate) trait AccountsTableDatasource {
    fn build_tree(&self, account_types: &[Vec<String>], accounts: &[Vec<String>]) -> AccountTree;
}

pub(crate) struct AccountsTableDatasourceImpl;

impl AccountsTableDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

fn cell(row: &[String], i: usize) -> &str {
    row.get(i).map(String::as_str).unwrap_or("")
}

impl AccountsTableDatasource for AccountsTableDatasourceImpl {
    fn build_tree(&self, account_types: &[Vec<String>], accounts: &[Vec<String>]) -> AccountTree {
        let mut tree = AccountTree::new();
        for row in account_types {
            let name = cell(row, 0).trim();
            if name.is_empty() {
                continue;
            }
            let normality = if cell(row, 1).trim() == "Credit" {
                Normality::Credit
            } else {
                Normality::Debit
            };
            let statement = if cell(row, 2).trim() == "Yes" {
                StatementKind::IncomeStatement
            } else {
                StatementKind::BalanceSheet
            };
            tree.add_root(name, AccountInfo { normality, statement });
        }
        for row in accounts {
            if cell(row, 0).trim().is_empty() {
                continue;
            }
            // insert_path drops blank inner cells and ignores unknown roots.
            tree.insert_path(row);
        }
        tree
    }
}

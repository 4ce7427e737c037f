use iso_currency::Currency;

use crate::entities::{Account, Cell, Period, ReportTotals, StatementKind};

/// Indentation token accumulated per nesting level in the name column.
const INDENT: &str = "    ";
const TOTAL_PREFIX: &str = "TOTAL: ";

struct Walk {
    prefix: String,
    rows: Vec<Vec<Cell>>,
}

/// Renders one statement: two header rows (currency codes, then period
/// begin dates; columns period-major, currency-minor), then one row per
/// account in document order, with a roll-up row after each internal node's
/// subtree.
pub(crate) struct StatementFormatter<'a> {
    periods: &'a [Period],
    currencies: &'a [Currency],
}

impl<'a> StatementFormatter<'a> {
    pub(crate) fn new(periods: &'a [Period], currencies: &'a [Currency]) -> Self {
        Self {
            periods,
            currencies,
        }
    }

    pub(crate) fn format(
        &self,
        roots: &[&Account],
        totals: &ReportTotals,
        statement: StatementKind,
    ) -> Vec<Vec<Cell>> {
        let mut rows = self.header_rows();

        let mut enter = |mut walk: Walk, account: &Account| {
            walk.rows
                .push(self.account_row(&walk.prefix, account, totals, statement));
            walk.prefix.push_str(INDENT);
            walk
        };
        let mut leave = |mut walk: Walk, account: &Account| {
            walk.prefix.truncate(walk.prefix.len() - INDENT.len());
            if !account.children.is_empty() {
                walk.rows
                    .push(self.total_row(&walk.prefix, account, totals));
            }
            walk
        };

        let walk = roots.iter().fold(
            Walk {
                prefix: String::new(),
                rows: Vec::new(),
            },
            |walk, root| root.pre_order_map(walk, &mut enter, &mut leave),
        );
        rows.extend(walk.rows);
        rows
    }

    fn header_rows(&self) -> Vec<Vec<Cell>> {
        let mut currencies_row = vec![Cell::Empty];
        let mut periods_row = vec![Cell::Empty];
        for period in self.periods {
            for currency in self.currencies {
                currencies_row.push(Cell::Text(currency.code().to_string()));
                periods_row.push(Cell::Date(period.begin));
            }
        }
        vec![currencies_row, periods_row]
    }

    fn account_row(
        &self,
        prefix: &str,
        account: &Account,
        totals: &ReportTotals,
        statement: StatementKind,
    ) -> Vec<Cell> {
        // On the balance sheet, a node whose subtree holds no further
        // balance-sheet rows absorbs its descendants here; when a roll-up row
        // follows on exit, showing only the direct total avoids counting the
        // subtree twice.
        let show_rolled_up = match statement {
            StatementKind::IncomeStatement => false,
            StatementKind::BalanceSheet => !account
                .children
                .iter()
                .any(|child| child.info.statement == StatementKind::BalanceSheet),
        };
        self.row(format!("{}{}", prefix, account.name), |period, currency| {
            let cell = totals.get(account.id(), period, currency);
            if show_rolled_up {
                cell.rolled_up()
            } else {
                cell.total_account
            }
        })
    }

    fn total_row(&self, prefix: &str, account: &Account, totals: &ReportTotals) -> Vec<Cell> {
        self.row(
            format!("{}{}{}", prefix, TOTAL_PREFIX, account.name),
            |period, currency| totals.get(account.id(), period, currency).rolled_up(),
        )
    }

    fn row(&self, name: String, value: impl Fn(Period, Currency) -> f64) -> Vec<Cell> {
        let mut cells = vec![Cell::Text(name)];
        for &period in self.periods {
            for &currency in self.currencies {
                cells.push(Cell::Number(value(period, currency)));
            }
        }
        cells
    }
}

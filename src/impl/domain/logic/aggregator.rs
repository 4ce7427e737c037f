use std::collections::HashMap;

use chrono::NaiveDate;
use iso_currency::Currency;

use crate::entities::{
    Account, AccountId, AccountTotals, AccountTree, Entry, EntrySide, Normality, Period,
    PeriodTotals, ReportTotals,
};

/// Which edge comparison bounds a period bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateBasis {
    /// `begin <= d < end`: flow statements.
    Flow,
    /// `d < end`, unbounded below: point-in-time balances.
    AsOf,
}

/// Which date of a posting is bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateSelector {
    PostingDate,
    /// Promised payment date when present, posting date otherwise.
    TermOrPostingDate,
}

#[derive(Clone, Copy)]
enum Selection {
    Direct,
    Subaccounts,
}

/// Computes, for every account reached from the requested roots and every
/// (period, currency) pair, the direct total and the strict-subaccount
/// total. The two sums are kept separate; callers decide whether a row shows
/// the account alone or the account plus everything beneath it.
pub(crate) struct Aggregator<'a> {
    entries: &'a [Entry],
    periods: &'a [Period],
    currencies: &'a [Currency],
    names: HashMap<AccountId, &'a str>,
}

impl<'a> Aggregator<'a> {
    pub(crate) fn new(
        tree: &'a AccountTree,
        entries: &'a [Entry],
        periods: &'a [Period],
        currencies: &'a [Currency],
    ) -> Self {
        let mut names = HashMap::new();
        for root in tree.roots() {
            names = root.pre_order_reduce(names, &mut |mut acc, node| {
                acc.insert(node.id(), node.name.as_str());
                acc
            });
        }
        Self {
            entries,
            periods,
            currencies,
            names,
        }
    }

    pub(crate) fn totals_for_roots(
        &self,
        roots: &[&Account],
        basis: DateBasis,
        selector: DateSelector,
    ) -> ReportTotals {
        let mut totals = ReportTotals::default();
        for root in roots {
            let accounts = root.pre_order_reduce(Vec::new(), &mut |mut acc, node| {
                acc.push(node);
                acc
            });
            for account in accounts {
                totals.insert(account.id(), self.account_totals(account, basis, selector));
            }
        }
        totals
    }

    fn account_totals(
        &self,
        account: &Account,
        basis: DateBasis,
        selector: DateSelector,
    ) -> AccountTotals {
        let mut totals = AccountTotals::default();
        for &period in self.periods {
            for &currency in self.currencies {
                totals.insert(
                    period,
                    currency,
                    PeriodTotals {
                        total_account: self
                            .sum(account, period, currency, basis, selector, Selection::Direct),
                        total_subaccount: self.sum(
                            account,
                            period,
                            currency,
                            basis,
                            selector,
                            Selection::Subaccounts,
                        ),
                    },
                );
            }
        }
        totals
    }

    fn sum(
        &self,
        account: &Account,
        period: Period,
        currency: Currency,
        basis: DateBasis,
        selector: DateSelector,
        selection: Selection,
    ) -> f64 {
        self.entries
            .iter()
            .filter(|entry| match selection {
                Selection::Direct => entry.account == account.id(),
                Selection::Subaccounts => self
                    .names
                    .get(&entry.account)
                    .is_some_and(|name| account.is_subaccount(name)),
            })
            .filter(|entry| entry.currency == currency)
            .filter(|entry| in_bucket(period, basis, effective_date(entry, selector)))
            .map(|entry| signed(account.info.normality, entry))
            .sum()
    }
}

fn effective_date(entry: &Entry, selector: DateSelector) -> NaiveDate {
    match selector {
        DateSelector::PostingDate => entry.date,
        DateSelector::TermOrPostingDate => entry.term.unwrap_or(entry.date),
    }
}

fn in_bucket(period: Period, basis: DateBasis, date: NaiveDate) -> bool {
    match basis {
        DateBasis::Flow => period.contains(date),
        DateBasis::AsOf => date < period.end,
    }
}

/// Sign convention: under credit normality a credit leg adds and a debit leg
/// subtracts; under debit normality the polarity reverses. The *observing*
/// account's normality applies, also for subaccount sums.
fn signed(normality: Normality, entry: &Entry) -> f64 {
    match (normality, entry.side) {
        (Normality::Credit, EntrySide::Credit) | (Normality::Debit, EntrySide::Debit) => {
            entry.value
        }
        _ => -entry.value,
    }
}

/// Derived totals for the synthetic net-revenue line: revenue plus exchange
/// minus expenses, roll-ups included, per (period, currency). The result is
/// injected as the synthetic account's totals map; it never feeds back into
/// any parent's subaccount total.
pub(crate) fn net_revenue_totals(
    periods: &[Period],
    currencies: &[Currency],
    revenue: Option<&AccountTotals>,
    exchange: Option<&AccountTotals>,
    expenses: Option<&AccountTotals>,
) -> AccountTotals {
    let rolled = |totals: Option<&AccountTotals>, period: Period, currency: Currency| {
        totals
            .map(|t| t.get(period, currency).rolled_up())
            .unwrap_or(0.0)
    };
    let mut out = AccountTotals::default();
    for &period in periods {
        for &currency in currencies {
            let value = rolled(revenue, period, currency) + rolled(exchange, period, currency)
                - rolled(expenses, period, currency);
            out.insert(
                period,
                currency,
                PeriodTotals {
                    total_account: value,
                    total_subaccount: 0.0,
                },
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{AccountInfo, RawEntryId, StatementKind};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(account: AccountId, side: EntrySide, value: f64, day: NaiveDate) -> Entry {
        Entry {
            account,
            date: day,
            term: None,
            side,
            currency: Currency::USD,
            value,
            source: RawEntryId(0),
        }
    }

    fn tree(normality: Normality) -> AccountTree {
        let mut tree = AccountTree::new();
        tree.add_root(
            "root",
            AccountInfo {
                normality,
                statement: StatementKind::IncomeStatement,
            },
        );
        tree.insert_path(&["root", "child", "grandchild"]);
        tree
    }

    fn january() -> Period {
        Period {
            begin: date(2024, 1, 1),
            end: date(2024, 2, 1),
        }
    }

    #[test]
    fn credit_posting_adds_under_credit_normality() {
        let tree = tree(Normality::Credit);
        let root = tree.find_by_name("root").unwrap();
        let entries = vec![entry(root.id(), EntrySide::Credit, 40.0, date(2024, 1, 10))];
        let periods = [january()];
        let currencies = [Currency::USD];
        let aggregator = Aggregator::new(&tree, &entries, &periods, &currencies);
        let totals = aggregator.totals_for_roots(&[root], DateBasis::Flow, DateSelector::PostingDate);
        assert_eq!(
            totals.get(root.id(), january(), Currency::USD).total_account,
            40.0
        );
    }

    #[test]
    fn the_same_posting_subtracts_under_debit_normality() {
        let tree = tree(Normality::Debit);
        let root = tree.find_by_name("root").unwrap();
        let entries = vec![entry(root.id(), EntrySide::Credit, 40.0, date(2024, 1, 10))];
        let periods = [january()];
        let currencies = [Currency::USD];
        let aggregator = Aggregator::new(&tree, &entries, &periods, &currencies);
        let totals = aggregator.totals_for_roots(&[root], DateBasis::Flow, DateSelector::PostingDate);
        assert_eq!(
            totals.get(root.id(), january(), Currency::USD).total_account,
            -40.0
        );
    }

    #[test]
    fn subaccount_total_sums_strict_descendants_with_the_parents_normality() {
        let tree = tree(Normality::Credit);
        let root = tree.find_by_name("root").unwrap();
        let child = tree.find_by_name("child").unwrap();
        let grandchild = tree.find_by_name("grandchild").unwrap();
        let entries = vec![
            entry(root.id(), EntrySide::Credit, 5.0, date(2024, 1, 3)),
            entry(child.id(), EntrySide::Credit, 10.0, date(2024, 1, 10)),
            entry(grandchild.id(), EntrySide::Debit, 4.0, date(2024, 1, 20)),
        ];
        let periods = [january()];
        let currencies = [Currency::USD];
        let aggregator = Aggregator::new(&tree, &entries, &periods, &currencies);
        let totals = aggregator.totals_for_roots(&[root], DateBasis::Flow, DateSelector::PostingDate);

        let root_totals = totals.get(root.id(), january(), Currency::USD);
        // Direct postings never leak into the subaccount sum.
        assert_eq!(root_totals.total_account, 5.0);
        assert_eq!(root_totals.total_subaccount, 6.0);

        // The child observes only its own strict descendants.
        let child_totals = totals.get(child.id(), january(), Currency::USD);
        assert_eq!(child_totals.total_account, 10.0);
        assert_eq!(child_totals.total_subaccount, -4.0);
    }

    #[test]
    fn flow_and_as_of_bases_bound_periods_differently() {
        let tree = tree(Normality::Credit);
        let root = tree.find_by_name("root").unwrap();
        let entries = vec![
            entry(root.id(), EntrySide::Credit, 10.0, date(2024, 1, 10)),
            entry(root.id(), EntrySide::Credit, 25.0, date(2024, 2, 10)),
        ];
        let february = Period {
            begin: date(2024, 2, 1),
            end: date(2024, 3, 1),
        };
        let periods = [january(), february];
        let currencies = [Currency::USD];
        let aggregator = Aggregator::new(&tree, &entries, &periods, &currencies);

        let flow = aggregator.totals_for_roots(&[root], DateBasis::Flow, DateSelector::PostingDate);
        assert_eq!(flow.get(root.id(), february, Currency::USD).total_account, 25.0);

        // As-of is cumulative: February includes January's posting.
        let as_of = aggregator.totals_for_roots(&[root], DateBasis::AsOf, DateSelector::PostingDate);
        assert_eq!(as_of.get(root.id(), february, Currency::USD).total_account, 35.0);
    }

    #[test]
    fn term_selector_rebuckets_liability_legs() {
        let tree = tree(Normality::Credit);
        let root = tree.find_by_name("root").unwrap();
        let mut termed = entry(root.id(), EntrySide::Credit, 12.0, date(2024, 1, 10));
        termed.term = Some(date(2024, 2, 15));
        let entries = vec![termed];
        let february = Period {
            begin: date(2024, 2, 1),
            end: date(2024, 3, 1),
        };
        let periods = [january(), february];
        let currencies = [Currency::USD];
        let aggregator = Aggregator::new(&tree, &entries, &periods, &currencies);

        let by_term =
            aggregator.totals_for_roots(&[root], DateBasis::Flow, DateSelector::TermOrPostingDate);
        assert_eq!(by_term.get(root.id(), january(), Currency::USD).total_account, 0.0);
        assert_eq!(by_term.get(root.id(), february, Currency::USD).total_account, 12.0);
    }

    #[test]
    fn empty_selections_read_as_zero() {
        let tree = tree(Normality::Credit);
        let root = tree.find_by_name("root").unwrap();
        let entries: Vec<Entry> = Vec::new();
        let periods = [january()];
        let currencies = [Currency::USD];
        let aggregator = Aggregator::new(&tree, &entries, &periods, &currencies);
        let totals = aggregator.totals_for_roots(&[root], DateBasis::Flow, DateSelector::PostingDate);
        assert_eq!(
            totals.get(root.id(), january(), Currency::USD),
            PeriodTotals::default()
        );
    }

    #[test]
    fn net_revenue_combines_rolled_up_roots() {
        let periods = [january()];
        let currencies = [Currency::USD];
        let mut revenue = AccountTotals::default();
        revenue.insert(
            january(),
            Currency::USD,
            PeriodTotals {
                total_account: 10.0,
                total_subaccount: 90.0,
            },
        );
        let mut expenses = AccountTotals::default();
        expenses.insert(
            january(),
            Currency::USD,
            PeriodTotals {
                total_account: 30.0,
                total_subaccount: 0.0,
            },
        );
        let net = net_revenue_totals(
            &periods,
            &currencies,
            Some(&revenue),
            None,
            Some(&expenses),
        );
        let cell = net.get(january(), Currency::USD);
        assert_eq!(cell.total_account, 70.0);
        assert_eq!(cell.total_subaccount, 0.0);
    }
}

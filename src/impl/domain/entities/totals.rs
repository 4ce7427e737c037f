use std::collections::HashMap;

use iso_currency::Currency;

use super::{account::AccountId, period::Period};

/// The two running sums kept for every (account, period, currency) triple.
/// They are never pre-summed; callers pick the direct total (leaf display)
/// or the rolled-up pair (roll-up display).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeriodTotals {
    /// Postings directly on the account.
    pub total_account: f64,
    /// Postings on any strict descendant.
    pub total_subaccount: f64,
}

impl PeriodTotals {
    pub fn rolled_up(&self) -> f64 {
        self.total_account + self.total_subaccount
    }
}

/// Totals for one account: period → currency → sums.
#[derive(Debug, Clone, Default)]
pub struct AccountTotals {
    cells: HashMap<Period, HashMap<Currency, PeriodTotals>>,
}

impl AccountTotals {
    pub fn insert(&mut self, period: Period, currency: Currency, totals: PeriodTotals) {
        self.cells.entry(period).or_default().insert(currency, totals);
    }

    /// Missing cells read as zero, never as absent.
    pub fn get(&self, period: Period, currency: Currency) -> PeriodTotals {
        self.cells
            .get(&period)
            .and_then(|by_currency| by_currency.get(&currency))
            .copied()
            .unwrap_or_default()
    }
}

/// All per-account totals computed for one statement walk.
#[derive(Debug, Default)]
pub struct ReportTotals {
    by_account: HashMap<AccountId, AccountTotals>,
}

impl ReportTotals {
    pub fn insert(&mut self, account: AccountId, totals: AccountTotals) {
        self.by_account.insert(account, totals);
    }

    pub fn account(&self, account: AccountId) -> Option<&AccountTotals> {
        self.by_account.get(&account)
    }

    /// Missing accounts and cells read as zero.
    pub fn get(&self, account: AccountId, period: Period, currency: Currency) -> PeriodTotals {
        self.by_account
            .get(&account)
            .map(|totals| totals.get(period, currency))
            .unwrap_or_default()
    }
}

use chrono::NaiveDate;
use iso_currency::Currency;

use super::{account::AccountId, raw_entry::RawEntryId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySide {
    Debit,
    Credit,
}

/// One signed leg of a transaction against a single account.
///
/// `value` is always non-negative. The effective sign is applied at
/// aggregation time from `side` and the observing account's normality; it is
/// never stored on the posting itself.
#[derive(Debug, Clone)]
pub struct Entry {
    pub account: AccountId,
    pub date: NaiveDate,
    /// Promised payment date, set only on liability-ledger legs. Orthogonal
    /// to `date`: budget views bucket by this instead of the posting date.
    pub term: Option<NaiveDate>,
    pub side: EntrySide,
    pub currency: Currency,
    pub value: f64,
    /// The transaction this leg was expanded from.
    pub source: RawEntryId,
}

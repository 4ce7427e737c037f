use chrono::NaiveDate;
use iso_currency::Currency;

use super::account::AccountId;

/// Position of a transaction in the combined ledger input, used as the
/// back-reference carried by every posting expanded from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawEntryId(pub(crate) u64);

/// One parsed ledger transaction, before expansion into postings.
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub id: RawEntryId,
    pub date: NaiveDate,
    pub description: String,
    pub kind: RawEntryKind,
}

/// The closed set of transaction kinds. New kinds extend this union and the
/// normalizer's match, never anything else.
#[derive(Debug, Clone)]
pub enum RawEntryKind {
    /// Single-currency transfer between two accounts.
    Transfer {
        debit: AccountId,
        credit: AccountId,
        currency: Currency,
        value: f64,
    },
    /// Transfer carrying a promised payment date on both legs.
    Liability {
        debit: AccountId,
        credit: AccountId,
        currency: Currency,
        value: f64,
        payment_term: NaiveDate,
    },
    /// Currency conversion routed through a clearing account, which ends up
    /// holding one leg in each currency.
    Exchange {
        debit: AccountId,
        credit: AccountId,
        exchange: AccountId,
        debit_currency: Currency,
        debit_value: f64,
        credit_currency: Currency,
        credit_value: f64,
    },
}

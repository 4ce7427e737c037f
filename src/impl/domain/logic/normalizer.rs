use chrono::NaiveDate;
use iso_currency::Currency;

use crate::entities::{AccountId, Entry, EntrySide, RawEntry, RawEntryKind};

/// Expands one raw transaction into its posting legs.
///
/// Transfers and liabilities yield one credit and one debit leg with the
/// same currency and value; liabilities additionally stamp the promised
/// payment date on both. Exchanges yield four legs: the two outer legs plus
/// a mirrored pair on the clearing account, one per currency, which together
/// hold the conversion spread. Expansion never fails.
pub(crate) fn expand(raw: &RawEntry) -> Vec<Entry> {
    match raw.kind {
        RawEntryKind::Transfer {
            debit,
            credit,
            currency,
            value,
        } => vec![
            leg(raw, credit, EntrySide::Credit, currency, value, None),
            leg(raw, debit, EntrySide::Debit, currency, value, None),
        ],
        RawEntryKind::Liability {
            debit,
            credit,
            currency,
            value,
            payment_term,
        } => vec![
            leg(raw, credit, EntrySide::Credit, currency, value, Some(payment_term)),
            leg(raw, debit, EntrySide::Debit, currency, value, Some(payment_term)),
        ],
        RawEntryKind::Exchange {
            debit,
            credit,
            exchange,
            debit_currency,
            debit_value,
            credit_currency,
            credit_value,
        } => vec![
            leg(raw, credit, EntrySide::Credit, credit_currency, credit_value, None),
            leg(raw, debit, EntrySide::Debit, debit_currency, debit_value, None),
            leg(raw, exchange, EntrySide::Debit, credit_currency, credit_value, None),
            leg(raw, exchange, EntrySide::Credit, debit_currency, debit_value, None),
        ],
    }
}

fn leg(
    raw: &RawEntry,
    account: AccountId,
    side: EntrySide,
    currency: Currency,
    value: f64,
    term: Option<NaiveDate>,
) -> Entry {
    Entry {
        account,
        date: raw.date,
        term,
        side,
        currency,
        value,
        source: raw.id,
    }
}

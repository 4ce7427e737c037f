use chrono::{Datelike, NaiveDate};

use crate::entities::Period;

/// Returns the first day of the month of the given date.
fn month_start_date(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .expect("copying a NaiveDate with overridden day=1 should never fail")
}

/// Returns the first day of the month following the given date.
fn next_month_start(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("the first day of the next month should always be a valid date")
}

/// Returns the ordered sequence of disjoint, contiguous one-calendar-month
/// periods covering `[start, end]`. Each period is half-open, running from
/// the first day of a month to the first day of the next.
pub(crate) fn month_periods(start: NaiveDate, end: NaiveDate) -> Vec<Period> {
    let mut periods = Vec::new();
    let mut begin = month_start_date(start);
    while begin <= end {
        let period_end = next_month_start(begin);
        periods.push(Period {
            begin,
            end: period_end,
        });
        begin = period_end;
    }
    periods
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn covers_the_range_with_contiguous_months() {
        let periods = month_periods(date(2023, 11, 15), date(2024, 2, 3));
        assert_eq!(periods.len(), 4);
        assert_eq!(periods[0].begin, date(2023, 11, 1));
        assert_eq!(periods[3].begin, date(2024, 2, 1));
        assert_eq!(periods[3].end, date(2024, 3, 1));
        for pair in periods.windows(2) {
            assert_eq!(pair[0].end, pair[1].begin);
        }
    }

    #[test]
    fn single_date_yields_its_own_month() {
        let periods = month_periods(date(2024, 1, 15), date(2024, 1, 15));
        assert_eq!(periods.len(), 1);
        assert!(periods[0].contains(date(2024, 1, 15)));
        assert!(!periods[0].contains(date(2024, 2, 1)));
    }
}

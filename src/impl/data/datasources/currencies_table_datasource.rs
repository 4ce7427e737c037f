use std::str::FromStr;

use iso_currency::Currency;

use crate::data::models::currency_model::CurrencyModel;
use crate::errors::Result;

/// Parses the currencies table; row order defines the output column order.
pub(crate) trait CurrenciesTableDatasource {
    fn parse(&self, table: &[Vec<String>]) -> Result<Vec<Currency>>;
}

pub(crate) struct CurrenciesTableDatasourceImpl;

impl CurrenciesTableDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl CurrenciesTableDatasource for CurrenciesTableDatasourceImpl {
    fn parse(&self, table: &[Vec<String>]) -> Result<Vec<Currency>> {
        table
            .iter()
            .filter_map(|row| {
                let code = row.first().map(String::as_str).unwrap_or("").trim();
                if code.is_empty() {
                    return None;
                }
                Some(CurrencyModel::from_str(code).map(Currency::from))
            })
            .collect()
    }
}

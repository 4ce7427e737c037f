use std::str::FromStr;

use iso_currency::Currency;

use crate::errors::StatementError;

#[derive(Debug, Clone, Copy)]
pub(crate) struct CurrencyModel(pub(crate) Currency);

impl FromStr for CurrencyModel {
    type Err = StatementError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s.trim())
            .map(CurrencyModel)
            .ok_or_else(|| StatementError::InvalidCurrencyCode {
                code: s.to_string(),
            })
    }
}

impl From<CurrencyModel> for Currency {
    fn from(model: CurrencyModel) -> Self {
        model.0
    }
}

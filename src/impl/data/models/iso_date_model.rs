use std::str::FromStr;

use chrono::NaiveDate;

use crate::errors::StatementError;

#[derive(Debug, Clone, Copy)]
pub(crate) struct IsoDateModel(pub(crate) NaiveDate);

impl FromStr for IsoDateModel {
    type Err = StatementError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(IsoDateModel)
            .map_err(|_| StatementError::InvalidDate {
                date: s.to_string(),
            })
    }
}

impl From<IsoDateModel> for NaiveDate {
    fn from(model: IsoDateModel) -> Self {
        model.0
    }
}

use std::str::FromStr;

use crate::errors::StatementError;

/// Numeric cell as spreadsheets emit it: optional thousands separators,
/// negatives either signed or parenthesized.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AmountModel(pub(crate) f64);

impl FromStr for AmountModel {
    type Err = StatementError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(',', "");
        let trimmed = raw.trim();
        let is_negative = trimmed.starts_with('(') && trimmed.ends_with(')');
        let numeric_part = trimmed.trim_matches(|c| c == '(' || c == ')');
        let amount = numeric_part
            .parse::<f64>()
            .map_err(|_| StatementError::InvalidAmount {
                value: s.to_string(),
            })?;
        Ok(AmountModel(if is_negative { -amount } else { amount }))
    }
}

impl From<AmountModel> for f64 {
    fn from(model: AmountModel) -> Self {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_separated_and_parenthesized_amounts() {
        assert_eq!(AmountModel::from_str("100").unwrap().0, 100.0);
        assert_eq!(AmountModel::from_str("1,234.50").unwrap().0, 1234.5);
        assert_eq!(AmountModel::from_str("(250)").unwrap().0, -250.0);
        assert!(AmountModel::from_str("abc").is_err());
    }
}

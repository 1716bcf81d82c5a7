use crate::base::Amount;
use crate::base::GroupField;
use crate::base::Value;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transaction {
    transaction_type: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    transaction_number: Option<Value>,
    #[serde(default = "unknown_amount", deserialize_with = "deserialize_amount")]
    amount: Amount,
    status: Value,
    year: Value,
}

impl Transaction {
    #[cfg(test)]
    pub fn new<T, S, Y>(transaction_type: T, amount: f64, status: S, year: Y) -> Self
    where
        T: Into<Value>,
        S: Into<Value>,
        Y: Into<Value>,
    {
        Self {
            transaction_type: transaction_type.into(),
            transaction_number: None,
            amount: Amount(amount),
            status: status.into(),
            year: year.into(),
        }
    }

    #[cfg(test)]
    pub fn with_number<N>(mut self, number: N) -> Self
    where
        N: Into<Value>,
    {
        self.transaction_number = Some(number.into());
        self
    }

    /// Returns the value of a grouping field.
    pub fn value(&self, field: GroupField) -> &Value {
        match field {
            GroupField::TransactionType => &self.transaction_type,
            GroupField::Status => &self.status,
            GroupField::Year => &self.year,
        }
    }

    pub fn transaction_number(&self) -> Option<&Value> {
        self.transaction_number.as_ref()
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Transaction {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

fn unknown_amount() -> Amount {
    Amount::UNKNOWN
}

/// Amounts arrive as strings, but numbers and nulls are accepted too.
/// Anything that does not read as a number becomes [`Amount::UNKNOWN`].
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Amount, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let raw = <Option<RawAmount> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawAmount::Number(n)) if n.is_finite() => Amount(n),
        Some(RawAmount::Text(s)) => s.parse().unwrap_or(Amount::UNKNOWN),
        Some(RawAmount::Number(_) | RawAmount::Other(_)) | None => Amount::UNKNOWN,
    })
}

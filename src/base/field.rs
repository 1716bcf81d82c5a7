/// A categorical transaction field that rows or columns can be grouped by.
///
/// The measure (`amount`) is deliberately absent: it is summed, never
/// grouped by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case", try_from = "&str")]
pub enum GroupField {
    TransactionType,
    Status,
    Year,
}

impl GroupField {
    pub const MEASURE: &str = "amount";

    /// Returns the field name in a human readable form.
    pub fn label(self) -> String {
        self.as_ref().replace('_', " ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldParseError {
    #[error("'{}' is the measure and cannot be used for grouping", GroupField::MEASURE)]
    Measure,
    #[error("unknown field '{0}', expected one of: transaction_type, status, year")]
    Unknown(String),
}

impl std::str::FromStr for GroupField {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        if normalized == Self::MEASURE {
            return Err(FieldParseError::Measure);
        }
        <Self as strum::IntoEnumIterator>::iter()
            .find(|field| field.as_ref() == normalized)
            .ok_or_else(|| FieldParseError::Unknown(s.to_string()))
    }
}

impl TryFrom<&str> for GroupField {
    type Error = FieldParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

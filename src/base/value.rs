use std::cmp::Ordering;

/// A grouping value: the content of a categorical field of a transaction.
///
/// Values are totally ordered. Numeric-like values (numbers, and text that
/// reads as a finite number) come first, ordered by magnitude, so `"9"`
/// sorts before `"10"`. All other values follow, ordered as text ignoring
/// case first and placing lowercase before uppercase on ties. Equal
/// magnitudes of different variants (`2024` and `"2024"`) are distinct
/// values, the number sorting first.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    pub fn text<T>(s: T) -> Self
    where
        T: Into<String>,
    {
        Self::Text(s.into())
    }

    /// Returns the value as a finite number if it is numeric-like.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Value::Number(n) => *n,
            Value::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return None;
                }
                s.parse::<f64>().ok()?
            }
        };
        n.is_finite().then_some(n)
    }

    /// Returns the value in a human readable form, with underscores replaced
    /// by spaces.
    pub fn label(&self) -> String {
        self.to_string().replace('_', " ")
    }

    fn variant_rank(&self) -> u8 {
        match self {
            Value::Number(_) => 0,
            Value::Text(_) => 1,
        }
    }

    /// Orders values that compare equal under the canonical rule, keeping the
    /// ordering consistent with equality.
    fn tiebreak(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) if a == b => Ordering::Equal,
            (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            _ => self.variant_rank().cmp(&other.variant_rank()),
        }
    }
}

/// Compares text case-insensitively, then with lowercase before uppercase.
fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl std::hash::Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Value::Number(n) => {
                state.write_u8(0);
                // -0.0 and 0.0 are equal keys.
                let n = if *n == 0.0 { 0.0 } else { *n };
                n.to_bits().hash(state)
            }
            Value::Text(s) => {
                state.write_u8(1);
                s.hash(state)
            }
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        let ord = match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => collate(&self.to_string(), &other.to_string()),
        };
        ord.then_with(|| self.tiebreak(other))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => n.fmt(f),
            Value::Text(s) => s.fmt(f),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

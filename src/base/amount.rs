/// Signed decimal measure of a transaction. An amount that could not be
/// parsed is stored as NaN and measures as zero.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    derive_more::From,
    derive_more::Into,
    derive_more::Neg,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Amount(pub f64);

impl Amount {
    pub const UNKNOWN: Self = Self(f64::NAN);

    pub fn is_known(self) -> bool {
        !self.0.is_nan()
    }

    /// Returns the value this amount contributes to a sum.
    pub fn measure(self) -> f64 {
        if self.is_known() { self.0 } else { 0.0 }
    }

    /// Rounds to the nearest cent.
    fn cents(self) -> i64 {
        (self.measure() * 100.0).round() as i64
    }

    pub fn is_negative(self) -> bool {
        self.cents() < 0
    }
}

/// Unknown amounts are equal to each other.
impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 || !(self.is_known() || other.is_known())
    }
}

impl std::fmt::Display for Amount {
    /// Formats with two decimal places and thousands separators. Negative
    /// quantities are wrapped in parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cents = self.cents();
        let mut rest = cents.unsigned_abs();
        let mut bytes = Vec::<u8>::new();
        macro_rules! pop_digit {
            () => {
                bytes.push(b'0' + (rest % 10) as u8);
                rest /= 10
            };
        }

        pop_digit!();
        pop_digit!();
        bytes.push(b'.');
        pop_digit!();
        let mut i = 1;
        while rest > 0 {
            if i % 3 == 0 {
                bytes.push(b',');
            }
            i += 1;
            pop_digit!();
        }
        bytes.reverse();
        if cents < 0 {
            bytes.insert(0, b'(');
            bytes.push(b')');
        }
        let s = std::str::from_utf8(&bytes).expect("all chars should be ascii");
        f.write_str(s)
    }
}

impl std::str::FromStr for Amount {
    type Err = ParseAmountError;

    /// Parses a finite decimal quantity, which may contain comma thousands
    /// separators and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s.trim().replace(',', "").parse::<f64>()?;
        if !n.is_finite() {
            return Err(ParseAmountError::NotFinite(s.to_string()));
        }
        Ok(Self(n))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAmountError {
    #[error(transparent)]
    Float(#[from] std::num::ParseFloatError),
    #[error("'{0}' is not a finite amount")]
    NotFinite(String),
}

impl TryFrom<&str> for Amount {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

use crate::base::GroupField;
use crate::base::Selection;
use crate::base::SelectionError;

/// Application config.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,
    /// Row field used when none is given on the command line.
    pub rows: GroupField,
    /// Column fields used when none are given on the command line.
    pub cols: Vec<GroupField>,
}

impl Default for Config {
    fn default() -> Self {
        let selection = Selection::default();
        Self {
            use_colored_output: false,
            use_unicode_symbols: false,
            rows: selection.row(),
            cols: selection.cols().to_vec(),
        }
    }
}

impl Config {
    pub fn selection(&self) -> Result<Selection, SelectionError> {
        Selection::new(self.rows, self.cols.clone())
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

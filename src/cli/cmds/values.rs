use crate::base;
use crate::cli;

/// List the distinct values of a field
#[derive(clap::Parser)]
pub struct Values {
    /// Field whose values to list
    ///
    /// One of transaction_type, status, year.
    field: base::GroupField,

    /// Wildcard patterns to match values of interest
    ///
    /// Matching is case-insensitive. If multiple patterns are provided,
    /// include values that match any pattern.
    #[arg(default_value = "*")]
    pattern: Vec<String>,
}

impl Values {
    pub fn run(&self, session: &base::Session) -> anyhow::Result<cli::Output> {
        let values = base::pivot::distinct_values(session.transactions().iter(), self.field)
            .into_iter()
            .map(|v| v.to_string())
            .filter(|v| cli::util::matches_any(v, &self.pattern))
            .collect::<Vec<_>>();
        Ok(if values.is_empty() {
            cli::Output::Str("No values.".to_string())
        } else {
            cli::Output::Str(values.join("\n"))
        })
    }
}

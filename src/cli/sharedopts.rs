use anyhow::Context;

use crate::base;

#[derive(clap::Args)]
pub struct SelectionOpts {
    /// Field to group rows by
    ///
    /// One of transaction_type, status, year. Defaults to the 'rows' entry of
    /// the config file. If given without '--cols', the configured column
    /// fields are kept, minus this field.
    #[arg(short, long, value_name = "FIELD")]
    pub rows: Option<base::GroupField>,

    /// Fields to group columns by, outermost first
    ///
    /// Use commas to separate multiple fields. Defaults to the 'cols' entry of
    /// the config file.
    #[arg(short, long, value_name = "FIELDS", value_delimiter = ',')]
    pub cols: Option<Vec<base::GroupField>>,

    /// Group by rows only, with a single total column
    #[arg(long, conflicts_with = "cols")]
    pub no_cols: bool,

    /// Fields to add to or remove from the column fields
    ///
    /// Use commas to separate multiple fields. Each field is appended if it is
    /// not a column field yet and removed otherwise, in the order given.
    /// Toggling the row field has no effect.
    #[arg(short, long, value_name = "FIELDS", value_delimiter = ',')]
    pub toggle: Vec<base::GroupField>,
}

impl SelectionOpts {
    /// Resolves the requested selection, falling back to `config` for
    /// anything not given on the command line.
    pub fn selection(&self, config: &base::Config) -> anyhow::Result<base::Selection> {
        let cols = if self.no_cols {
            Some(Vec::new())
        } else {
            self.cols.clone()
        };
        let selection = match (self.rows, cols) {
            (None, None) => config
                .selection()
                .context("invalid selection in config")?,
            (Some(row), None) => config
                .selection()
                .context("invalid selection in config")?
                .with_row(row),
            (row, Some(cols)) => base::Selection::new(row.unwrap_or(config.rows), cols)?,
        };
        let selection = self
            .toggle
            .iter()
            .fold(selection, |selection, &field| selection.toggle_column(field));
        log::debug!("selected {}", selection);
        Ok(selection)
    }
}

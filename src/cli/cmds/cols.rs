use crate::base;
use crate::cli;

/// Show the column header tree
///
/// Each header spanning more than one data column is annotated with its span.
#[derive(clap::Parser)]
pub struct Cols {
    #[command(flatten)]
    selection: cli::sharedopts::SelectionOpts,
}

impl Cols {
    pub fn run(&self, session: &base::Session, config: &base::Config) -> anyhow::Result<cli::Output> {
        let selection = self.selection.selection(config)?;
        Ok(cli::Output::Tree(base::tree::forcolumns::Config {
            charset: cli::util::charset_from_config(config),
            result: session.pivot(&selection),
        }))
    }
}

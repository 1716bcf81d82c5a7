use crate::base;
use crate::cli;

/// Show the pivot table
#[derive(clap::Parser)]
pub struct Table {
    #[command(flatten)]
    selection: cli::sharedopts::SelectionOpts,
}

impl Table {
    pub fn run(&self, session: &base::Session, config: &base::Config) -> anyhow::Result<cli::Output> {
        let selection = self.selection.selection(config)?;
        Ok(cli::Output::Table(base::table::Config {
            charset: cli::util::charset_from_config(config),
            result: session.pivot(&selection),
        }))
    }
}

use anyhow::Context;

use crate::base;
use crate::base::fs::Io;
use crate::cli;

/// Pivot table over financial transactions
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Table(cli::cmds::table::Table),
    Cols(cli::cmds::cols::Cols),
    Values(cli::cmds::values::Values),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", base::Config::FILENAME))?;
        let transactions = fs
            .read::<base::Transactions>()
            .with_context(|| format!("failed to read '{}'", base::Transactions::FILENAME))?;
        if transactions.is_empty() {
            log::info!("no transactions in '{}'", base::Transactions::FILENAME);
        }
        let session = base::Session::new(transactions);

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Table(cmd) => cmd.run(&session, &config),
            Commands::Cols(cmd) => cmd.run(&session, &config),
            Commands::Values(cmd) => cmd.run(&session),
        }
    }
}

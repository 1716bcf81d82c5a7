use anyhow::Context;

use crate::base;
use crate::base::fs::Io;
use crate::cli;

/// Write a config file to the current directory
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing config to defaults
    #[arg(long)]
    reset_config: bool,
}

fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let already_initialized = fs.is_initialized();

        let config = if self.reset_config || !already_initialized {
            initial_config()
        } else {
            fs.read::<base::Config>()
                .with_context(|| format!("failed to read '{}'", base::Config::FILENAME))?
        };
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", base::Config::FILENAME))?;

        Ok(if !already_initialized {
            cli::Output::Str(format!(
                "Pivot configuration initialized in '{}'",
                fs.dir().display()
            ))
        } else if self.reset_config {
            cli::Output::Str("Pivot configuration reset to defaults.".to_string())
        } else {
            cli::Output::Str(format!(
                "Pivot configuration reinitialized in '{}'",
                fs.dir().display()
            ))
        })
    }
}

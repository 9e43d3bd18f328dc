use clap::Parser;
use opgroup::cli::{run_cli, Cli};
use opgroup::logging::{init_logging, LogConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    if cli.verbose {
        log_config = log_config.verbose();
    }
    init_logging(&log_config)?;

    run_cli(cli)
}

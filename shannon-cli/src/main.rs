//! Entry point for the `shannon` binary

use clap::Parser;
use shannon_cli::commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    log::debug!("Arguments: {:?}", cli);
    cli.command.execute(cli.quiet)
}

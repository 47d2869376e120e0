use anyhow::Result;
use clap::Parser;

mod cli;

use cli::dispatch::dispatch;
use cli::types::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    pseo::logging::init_logging(cli.verbose);
    dispatch(cli)
}

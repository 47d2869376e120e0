use std::io;

use anyhow::Result;
use chrono::Utc;
use clap::CommandFactory;
use pseo::commands::{breadcrumbs, check, link, related, routes, sitemap, stats, variant};
use pseo::Site;

use super::types::{Cli, Commands};

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = cli.config;
    let now = Utc::now();

    match cli.command {
        Commands::Check { json } => check::execute(&config, now, json),
        Commands::Routes { json } => routes::execute(&Site::load(&config)?, now, json),
        Commands::Sitemap { output } => {
            sitemap::execute(&Site::load(&config)?, now, output.as_deref())
        }
        Commands::Variant { path, slot, json } => {
            variant::execute(&Site::load(&config)?, &path, slot.as_deref(), json)
        }
        Commands::Related { slug, json } => related::execute(&Site::load(&config)?, &slug, json),
        Commands::Breadcrumbs { path, json } => {
            breadcrumbs::execute(&Site::load(&config)?, &path, json)
        }
        Commands::Link { slug } => link::execute(&Site::load(&config)?, &slug),
        Commands::Stats { region, json } => {
            stats::execute(&Site::load(&config)?, region.as_deref(), json)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "pseo", &mut io::stdout());
            Ok(())
        }
    }
}

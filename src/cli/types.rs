use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use pseo::config::DEFAULT_CONFIG_FILE;
use pseo::validation::clap_slug_validator;

#[derive(Parser)]
#[command(name = "pseo")]
#[command(about = "Programmatic SEO pages, internal links and sitemaps", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Path to the site configuration
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load all inputs and run every integrity check
    Check {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every route with its sitemap values
    Routes {
        /// Print routes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the sitemap XML
    Sitemap {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the variant keys chosen for a geo page
    Variant {
        /// Route path, e.g. /bayern/muenchen
        path: String,

        /// Only this slot
        #[arg(short, long)]
        slot: Option<String>,

        /// Print choices as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the related-content block of an article
    Related {
        /// Article slug
        #[arg(value_parser = clap_slug_validator)]
        slug: String,

        /// Print the block as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the breadcrumb trail for an article or geo path
    Breadcrumbs {
        /// Route path, e.g. /ratgeber/spesen or /bayern/muenchen
        path: String,

        /// Print the trail as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print an article body with keyword links injected
    Link {
        /// Article slug
        #[arg(value_parser = clap_slug_validator)]
        slug: String,
    },

    /// Show region aggregates
    Stats {
        /// Region slug (all regions when omitted)
        region: Option<String>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

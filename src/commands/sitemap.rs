//! `pseo sitemap`: write the sitemap XML

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::routes::to_sitemap_xml;
use crate::site::Site;

/// Execute the sitemap command
pub fn execute(site: &Site, now: DateTime<Utc>, output: Option<&Path>) -> Result<()> {
    let entries = site.routes(now)?;
    let xml = to_sitemap_xml(&entries);

    match output {
        Some(path) => {
            std::fs::write(path, &xml)
                .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;
            eprintln!(
                "{} Wrote {} URLs to {}",
                "✓".green().bold(),
                entries.len(),
                path.display()
            );
        }
        None => print!("{xml}"),
    }
    Ok(())
}

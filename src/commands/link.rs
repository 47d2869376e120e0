//! `pseo link`: article body with keyword links

use anyhow::{Context, Result};

use crate::site::Site;

/// Execute the link command
pub fn execute(site: &Site, slug: &str) -> Result<()> {
    let body = site
        .linker()
        .linked_body(slug)
        .with_context(|| format!("Article '{slug}' not found"))?;
    print!("{body}");
    Ok(())
}

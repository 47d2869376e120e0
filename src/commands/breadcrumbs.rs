//! `pseo breadcrumbs`: trail for an article or geo path

use anyhow::{Context, Result};

use crate::linking::BreadcrumbItem;
use crate::site::Site;

/// Execute the breadcrumbs command
pub fn execute(site: &Site, path: &str, json: bool) -> Result<()> {
    let trail = site
        .linker()
        .breadcrumbs_for_path(path)
        .with_context(|| format!("No page at '{path}'"))?;

    if json {
        println!("{}", super::to_json(&trail)?);
    } else {
        println!("{}", render(&trail));
    }
    Ok(())
}

/// `Home › Bayern › München`, unlinked segments in parentheses
pub fn render(trail: &[BreadcrumbItem]) -> String {
    trail
        .iter()
        .map(|item| match &item.url {
            Some(_) => item.title.clone(),
            None => format!("({})", item.title),
        })
        .collect::<Vec<_>>()
        .join(" › ")
}

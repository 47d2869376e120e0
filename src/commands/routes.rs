//! `pseo routes`: list every route

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::routes::{format_priority, RouteEntry};
use crate::site::Site;

/// Execute the routes command
pub fn execute(site: &Site, now: DateTime<Utc>, json: bool) -> Result<()> {
    let entries = site.routes(now)?;
    if json {
        println!("{}", super::to_json(&entries)?);
    } else {
        print!("{}", render_table(&entries));
    }
    Ok(())
}

/// One line per route: type, priority, changefreq, lastmod, path
pub fn render_table(entries: &[RouteEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "{:<17} {:<4} {:<8} {}  {}\n",
            entry.page_type().as_str(),
            format_priority(entry.priority),
            entry.changefreq.as_str(),
            entry.lastmod.format("%Y-%m-%d"),
            entry.path
        ));
    }
    out
}

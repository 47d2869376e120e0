//! `pseo related`: related-content block of an article

use anyhow::{Context, Result};
use colored::Colorize;

use crate::linking::{Link, RelatedContent};
use crate::site::Site;

/// Execute the related command
pub fn execute(site: &Site, slug: &str, json: bool) -> Result<()> {
    let related = site
        .linker()
        .related(slug)
        .with_context(|| format!("Article '{slug}' not found"))?;

    if json {
        println!("{}", super::to_json(&related)?);
    } else {
        print!("{}", render(slug, &related));
    }
    Ok(())
}

fn push_links(out: &mut String, heading: &str, links: &[Link]) {
    if links.is_empty() {
        return;
    }
    out.push_str(&format!("  {}\n", heading.bold()));
    for link in links {
        out.push_str(&format!("    {}  {}\n", link.title, link.url.dimmed()));
    }
}

pub fn render(slug: &str, related: &RelatedContent) -> String {
    let mut out = format!("{} ({})\n", slug.bold(), related.role);

    if related.is_empty() {
        out.push_str("  nothing related\n");
        return out;
    }
    if let Some(pillar) = &related.pillar {
        push_links(&mut out, "Pillar", std::slice::from_ref(pillar));
    }
    push_links(&mut out, "Related", &related.items);
    push_links(&mut out, "Services", &related.services);
    out
}

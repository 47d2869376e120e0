//! `pseo variant`: variant keys for a geo page

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::page::{normalize_path, PageType};
use crate::site::Site;
use crate::variant::VariantChoice;

/// Everything that decides how a geo page is worded
#[derive(Debug, Clone, Serialize)]
pub struct VariantPlan {
    pub path: String,
    pub entity: String,
    pub page_type: PageType,
    pub population: u64,
    pub eligible: bool,
    pub choices: Vec<VariantChoice>,
}

/// Resolve `path` and select variants for one slot or for every required slot
pub fn plan(site: &Site, path: &str, slot: Option<&str>) -> Result<VariantPlan> {
    let path = normalize_path(path);
    let entity = site
        .geo
        .resolve_path(&path)
        .with_context(|| format!("No geo page at '{path}'"))?;

    let choices = match slot {
        Some(slot) => vec![site.selector.select(&entity, slot)?],
        None => site.selector.select_all(&entity)?,
    };

    Ok(VariantPlan {
        entity: entity.entity_ref().to_string(),
        page_type: entity.page_type(),
        population: entity.population(),
        eligible: site.eligibility().is_eligible(&entity),
        choices,
        path,
    })
}

/// Execute the variant command
pub fn execute(site: &Site, path: &str, slot: Option<&str>, json: bool) -> Result<()> {
    let plan = plan(site, path, slot)?;
    if json {
        println!("{}", super::to_json(&plan)?);
    } else {
        print!("{}", render(&plan));
    }
    Ok(())
}

pub fn render(plan: &VariantPlan) -> String {
    let eligibility = if plan.eligible {
        "eligible".green().to_string()
    } else {
        "not eligible".yellow().to_string()
    };
    let mut out = format!(
        "{} ({}, {}, population {}, {})\n",
        plan.path.bold(),
        plan.entity,
        plan.page_type,
        plan.population,
        eligibility
    );
    for choice in &plan.choices {
        out.push_str(&format!(
            "  {:<12} {:<7} #{}  {}\n",
            choice.slot, choice.bucket, choice.index, choice.key
        ));
    }
    out
}

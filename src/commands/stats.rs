//! `pseo stats`: region aggregates

use anyhow::{Context, Result};

use crate::geo::RegionStats;
use crate::site::Site;

/// Stats for one region by slug, or for every region
pub fn collect(site: &Site, region: Option<&str>) -> Result<Vec<RegionStats>> {
    let eligibility = site.eligibility();
    match region {
        Some(slug) => {
            let region = site
                .geo
                .region_by_slug(slug)
                .with_context(|| format!("Region '{slug}' not found"))?;
            Ok(vec![site.geo.region_stats(region, eligibility)])
        }
        None => Ok(site
            .geo
            .list_regions()
            .iter()
            .map(|region| site.geo.region_stats(region, eligibility))
            .collect()),
    }
}

/// Execute the stats command
pub fn execute(site: &Site, region: Option<&str>, json: bool) -> Result<()> {
    let stats = collect(site, region)?;
    if json {
        println!("{}", super::to_json(&stats)?);
    } else {
        print!("{}", render(&stats));
    }
    Ok(())
}

pub fn render(stats: &[RegionStats]) -> String {
    let mut out = format!(
        "{:<24} {:>9} {:>9} {:>9} {:>9} {:>10} {:>14}\n",
        "region", "districts", "eligible", "cities", "eligible", "kreisfrei", "population"
    );
    for s in stats {
        out.push_str(&format!(
            "{:<24} {:>9} {:>9} {:>9} {:>9} {:>10} {:>14}\n",
            s.region,
            s.districts,
            s.eligible_districts,
            s.cities,
            s.eligible_cities,
            s.independent_cities,
            s.city_population
        ));
    }
    out
}

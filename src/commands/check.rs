//! `pseo check`: load everything and report every integrity problem

use std::path::Path;

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::site::{IntegrityReport, Site};

/// Execute the check command
pub fn execute(config_path: &Path, now: DateTime<Utc>, json: bool) -> Result<()> {
    let site = match Site::load(config_path) {
        Ok(site) => site,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            bail!("Site failed to load");
        }
    };

    let report = site.check(now);
    if json {
        println!("{}", super::to_json(&report)?);
    } else {
        print!("{}", render_report(&report));
    }

    if !report.is_clean() {
        bail!("{} integrity problem(s) found", report.problem_count());
    }
    Ok(())
}

pub fn render_report(report: &IntegrityReport) -> String {
    let mut out = String::new();

    if report.is_clean() {
        out.push_str(&format!(
            "{} {} routes, no integrity problems\n",
            "✓".green().bold(),
            report.routes
        ));
        return out;
    }

    out.push_str(&format!(
        "{} {} problem(s) across {} routes:\n",
        "✗".red().bold(),
        report.problem_count(),
        report.routes
    ));
    for problem in report.problems() {
        out.push_str(&format!("  - {problem}\n"));
    }
    out
}

//! Command implementations behind the `pseo` binary.
//!
//! Each command renders to a `String` first so the output can be tested
//! without capturing stdout.

pub mod breadcrumbs;
pub mod check;
pub mod link;
pub mod related;
pub mod routes;
pub mod sitemap;
pub mod stats;
pub mod variant;

use anyhow::{Context, Result};
use serde::Serialize;

/// Pretty JSON for `--json` output
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
}

//! Programmatic SEO core: geo taxonomy, deterministic variant selection,
//! pillar/cluster content graph, internal linking and route enumeration.
//!
//! Everything here is built once from static inputs and is read-only
//! afterwards, so a [`site::Site`] can be shared freely across threads.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod fs;
pub mod geo;
pub mod linking;
pub mod logging;
pub mod page;
pub mod routes;
pub mod site;
pub mod validation;
pub mod variant;

#[cfg(test)]
mod testing;

pub use site::Site;

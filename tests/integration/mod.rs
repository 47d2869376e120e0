//! Integration tests for the pseo pipeline
//!
//! These tests load complete site trees from disk and drive the library
//! end-to-end: config, geo tables, articles, graph and variant catalog.

pub mod helpers;
pub mod pipeline;
pub mod shipped_data;
pub mod sitemap;

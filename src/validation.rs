//! Slug validation and derivation.
//!
//! Slugs become URL path segments and sitemap entries, so they are held to a
//! strict alphabet: lowercase ASCII letters, digits and single dashes.

use anyhow::{bail, Result};

/// Maximum allowed length for a slug.
pub const MAX_SLUG_LENGTH: usize = 128;

/// Validates that a slug is safe to use as a URL path segment.
///
/// A slug is valid if:
/// - It is not empty
/// - It is no longer than MAX_SLUG_LENGTH characters
/// - It contains only lowercase ASCII letters, digits and dashes
/// - It neither starts nor ends with a dash and has no doubled dashes
///
/// # Examples
///
/// ```
/// use pseo::validation::validate_slug;
///
/// assert!(validate_slug("bayern").is_ok());
/// assert!(validate_slug("landkreis-muenchen").is_ok());
/// assert!(validate_slug("").is_err());
/// assert!(validate_slug("München").is_err());
/// ```
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        bail!("slug cannot be empty");
    }

    if slug.len() > MAX_SLUG_LENGTH {
        bail!(
            "slug too long: {} characters (max {})",
            slug.len(),
            MAX_SLUG_LENGTH
        );
    }

    let valid_chars = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid_chars {
        bail!("slug '{slug}' contains invalid characters. Use only a-z, 0-9 and dashes (-)");
    }

    if slug.starts_with('-') || slug.ends_with('-') {
        bail!("slug '{slug}' cannot start or end with a dash");
    }

    if slug.contains("--") {
        bail!("slug '{slug}' contains consecutive dashes");
    }

    Ok(())
}

/// Derive a slug from a German display name.
///
/// Umlauts and ß are transliterated (`ä` → `ae`, `ß` → `ss`), every other
/// run of non-alphanumeric characters collapses into a single dash.
///
/// ```
/// use pseo::validation::slugify;
///
/// assert_eq!(slugify("Baden-Württemberg"), "baden-wuerttemberg");
/// assert_eq!(slugify("Garching b. München"), "garching-b-muenchen");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars().flat_map(char::to_lowercase) {
        let mapped: &str = match ch {
            'ä' => "ae",
            'ö' => "oe",
            'ü' => "ue",
            'ß' => "ss",
            'é' | 'è' | 'ê' => "e",
            'á' | 'à' | 'â' => "a",
            'ó' | 'ò' | 'ô' => "o",
            _ => "",
        };

        if !mapped.is_empty() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push_str(mapped);
        } else if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Clap value parser for slug arguments.
pub fn clap_slug_validator(s: &str) -> Result<String, String> {
    validate_slug(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

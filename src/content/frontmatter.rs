//! Front-matter extraction for markdown articles

use anyhow::{bail, Result};

/// Split a markdown document into its YAML front matter and body.
///
/// The front matter is the block between a leading `---` line and the next
/// `---` line. A document without front matter is an error since every
/// article needs at least a title and a date.
pub fn split_front_matter(content: &str) -> Result<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut lines = content.split_inclusive('\n');
    let first = lines.next().unwrap_or_default();
    if first.trim_end() != "---" {
        bail!("no front matter block found (document must start with ---)");
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == "---" {
            let yaml = &content[yaml_start..offset];
            let body = &content[offset + line.len()..];
            return Ok((yaml, body.trim_start_matches(['\r', '\n'])));
        }
        offset += line.len();
    }

    bail!("no closing --- for front matter block")
}

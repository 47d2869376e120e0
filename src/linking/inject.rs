//! Keyword link injection for markdown text

use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::page::normalize_path;

/// Spans that must never receive a link: fenced code, inline code,
/// existing markdown/HTML links, autolinks, bare URLs and heading lines
static PROTECTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?ms)^```.*?^```",
        r"|`[^`\n]*`",
        r"|!?\[[^\]\n]*\]\([^)\n]*\)",
        r"|<a\s[^>]*>.*?</a>",
        r"|<[a-zA-Z][a-zA-Z0-9+.-]*://[^>\s]+>",
        r"|(?i:https?://|www\.)\S+",
        r"|^#{1,6}\s[^\n]*",
    ))
    .expect("protected-span pattern is valid")
});

/// Target of existing markdown links, used to count them against the
/// one-link-per-URL rule
static LINK_TARGET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\]\(([^)\s]+)[^)]*\)|href="([^"]+)""#).expect("link-target pattern is valid")
});

/// A phrase that links to a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub keyword: String,
    pub url: String,
}

impl LinkTarget {
    pub fn new(keyword: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            url: url.into(),
        }
    }
}

/// Turn keyword mentions into markdown links.
///
/// Matching is case-insensitive on whole words and keeps the original
/// spelling as anchor text. Each URL is linked at most once per document,
/// counting links already present; `self_url` is never linked. Longer
/// keywords are placed first so a phrase wins over a word inside it.
pub fn inject_links(text: &str, targets: &[LinkTarget], self_url: Option<&str>) -> String {
    let mut protected: Vec<Range<usize>> =
        PROTECTED_RE.find_iter(text).map(|m| m.range()).collect();

    let mut linked: HashSet<String> = LINK_TARGET_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| normalize_path(m.as_str()))
        .collect();
    if let Some(url) = self_url {
        linked.insert(normalize_path(url));
    }

    let mut ordered: Vec<&LinkTarget> = targets
        .iter()
        .filter(|t| !t.keyword.trim().is_empty())
        .collect();
    ordered.sort_by(|a, b| {
        b.keyword
            .chars()
            .count()
            .cmp(&a.keyword.chars().count())
            .then_with(|| a.keyword.cmp(&b.keyword))
    });

    let mut replacements: Vec<(Range<usize>, &str)> = Vec::new();
    for target in ordered {
        let url = normalize_path(&target.url);
        if linked.contains(&url) {
            continue;
        }

        let pattern = regex::escape(target.keyword.trim());
        let Ok(re) = RegexBuilder::new(&pattern).case_insensitive(true).build() else {
            continue;
        };

        let hit = re
            .find_iter(text)
            .map(|m| m.range())
            .filter(|range| is_whole_word(text, range))
            .find(|range| !protected.iter().any(|p| overlaps(p, range)));

        if let Some(range) = hit {
            protected.push(range.clone());
            replacements.push((range, target.url.as_str()));
            linked.insert(url);
        }
    }

    replacements.sort_by_key(|(range, _)| range.start);

    let mut out = String::with_capacity(text.len() + replacements.len() * 32);
    let mut cursor = 0;
    for (range, url) in replacements {
        out.push_str(&text[cursor..range.start]);
        out.push('[');
        out.push_str(&text[range.clone()]);
        out.push_str("](");
        out.push_str(url);
        out.push(')');
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Neither neighbour of the match continues a word.
///
/// Checked on the characters around the match rather than with `\b`, so
/// keywords that start or end with punctuation (`z.B.`) still match.
fn is_whole_word(text: &str, range: &Range<usize>) -> bool {
    let before = text[..range.start].chars().next_back();
    let after = text[range.end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

//! Build-time pattern classification for fast-path matching.
//!
//! Each pattern is analysed once and assigned to the cheapest strategy that
//! can decide a match:
//!
//! | Strategy | Example pattern | Match cost |
//! |----------|----------------|------------|
//! | Extension | `*.rs`, `**/*.rs` | hash lookup on file extension |
//! | Literal | `Cargo.toml` | hash lookup |
//! | Prefix | `src/**` | `starts_with` |
//! | Suffix | `**/foo.txt` | `ends_with` |
//! | Matcher | everything else | AC pre-filter + the full engine |
//!
//! Ant syntax has no character classes, braces, or escapes, so
//! classification works on the canonical pattern text directly.
//! Case-insensitive patterns always take the `Matcher` strategy: the lookup
//! structures are case-sensitive.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::pattern::Pattern;

/// The strategy chosen for a single pattern at build time.
#[derive(Debug)]
pub(crate) enum PatternStrategy {
    /// `**/*.ext` -- any path with this extension matches, no verification.
    ExtensionAny(String),
    /// `*.ext` -- the extension must match AND the path must be a single
    /// segment; verified with the engine.
    ExtensionLocal(String),
    /// No wildcards at all -- exact match on the canonical path.
    Literal(String),
    /// `prefix/**` -- stored with a trailing separator; the bare prefix
    /// also matches, since the deep wildcard covers zero segments.
    Prefix(String),
    /// `**/tail` -- stored with a leading separator; the bare tail also
    /// matches.
    Suffix(String),
    /// Needs the full engine.
    Matcher,
}

/// Classify a pattern into its optimal strategy.
pub(crate) fn classify(pattern: &Pattern) -> PatternStrategy {
    if pattern.is_case_insensitive() {
        return PatternStrategy::Matcher;
    }
    let text = pattern.tokens().to_string();

    if !ant_matcher::has_wildcard(&text) {
        return PatternStrategy::Literal(text);
    }

    if let Some(strategy) = classify_extension(&text) {
        return strategy;
    }

    if let Some(prefix) = text.strip_suffix("/**")
        && !prefix.is_empty()
        && !ant_matcher::has_wildcard(prefix)
    {
        let mut stored = String::with_capacity(prefix.len() + 1);
        stored.push_str(prefix);
        stored.push(path_tokenizer::SEPARATOR);
        return PatternStrategy::Prefix(stored);
    }

    if let Some(tail) = text.strip_prefix("**/")
        && !tail.is_empty()
        && !ant_matcher::has_wildcard(tail)
    {
        let mut stored = String::with_capacity(tail.len() + 1);
        stored.push(path_tokenizer::SEPARATOR);
        stored.push_str(tail);
        return PatternStrategy::Suffix(stored);
    }

    PatternStrategy::Matcher
}

/// `**/*.ext` and `*.ext` patterns, where the extension is a single literal
/// component (no wildcards, no separators, no further dots).
fn classify_extension(text: &str) -> Option<PatternStrategy> {
    let mut rest = text;
    let mut any_depth = false;
    while let Some(stripped) = rest.strip_prefix("**/") {
        rest = stripped;
        any_depth = true;
    }
    let ext = rest.strip_prefix("*.")?;
    if ext.is_empty() || ext.contains(['*', '?', '/', '.']) {
        return None;
    }
    let mut stored = String::with_capacity(ext.len() + 1);
    stored.push('.');
    stored.push_str(ext);
    Some(if any_depth {
        PatternStrategy::ExtensionAny(stored)
    } else {
        PatternStrategy::ExtensionLocal(stored)
    })
}

/// The extension of `path`'s final segment, with the dot (`.txt`), or
/// `None` when the final segment has none.
pub(crate) fn path_extension(path: &str) -> Option<&str> {
    let last_sep = path.rfind('/').map_or(0, |i| i + 1);
    let basename = &path[last_sep..];
    let dot = basename.rfind('.')?;
    if dot + 1 >= basename.len() {
        return None;
    }
    Some(&basename[dot..])
}

/// Classification results for a whole pattern list, keyed for matching.
pub(crate) struct Strategies {
    /// Extension → indices where the extension alone decides (`**/*.ext`).
    pub ext_any: HashMap<String, Vec<usize>>,
    /// Extension → indices that need engine verification (`*.ext`).
    pub ext_local: HashMap<String, Vec<usize>>,
    /// Canonical literal path → indices.
    pub literals: HashMap<String, Vec<usize>>,
    /// Prefixes (with trailing separator) → pattern index.
    pub prefixes: Vec<(String, usize)>,
    /// Suffixes (with leading separator) → pattern index.
    pub suffixes: Vec<(String, usize)>,
    /// Indices of patterns that need the full engine.
    pub matcher_indices: Vec<usize>,
}

pub(crate) fn build(patterns: &[Pattern]) -> Strategies {
    let mut ext_any: HashMap<String, Vec<usize>> = HashMap::new();
    let mut ext_local: HashMap<String, Vec<usize>> = HashMap::new();
    let mut literals: HashMap<String, Vec<usize>> = HashMap::new();
    let mut prefixes = Vec::new();
    let mut suffixes = Vec::new();
    let mut matcher_indices = Vec::new();

    for (i, pattern) in patterns.iter().enumerate() {
        match classify(pattern) {
            PatternStrategy::ExtensionAny(ext) => {
                ext_any.entry(ext).or_default().push(i);
            }
            PatternStrategy::ExtensionLocal(ext) => {
                ext_local.entry(ext).or_default().push(i);
            }
            PatternStrategy::Literal(lit) => {
                literals.entry(lit).or_default().push(i);
            }
            PatternStrategy::Prefix(prefix) => {
                prefixes.push((prefix, i));
            }
            PatternStrategy::Suffix(suffix) => {
                suffixes.push((suffix, i));
            }
            PatternStrategy::Matcher => {
                matcher_indices.push(i);
            }
        }
    }

    Strategies {
        ext_any,
        ext_local,
        literals,
        prefixes,
        suffixes,
        matcher_indices,
    }
}

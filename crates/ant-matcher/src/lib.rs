#![doc = include_str!("../README.md")]
#![no_std]
extern crate alloc;

mod syntax;
pub use syntax::{has_wildcard, is_deep_wildcard};

use alloc::vec::Vec;

pub use path_tokenizer::TokenizedPath;

/// The pattern segment matching zero or more whole path segments.
pub const DEEP_WILDCARD: &str = "**";

/// Match `path` against an Ant-style `pattern`, case-sensitively.
///
/// Both arguments are tokenized (either separator is accepted) and matched
/// segment-wise. An absolute pattern keeps its root separator as a literal
/// first segment, so it never matches a relative path.
///
/// # Example
///
/// ```
/// use ant_matcher::ant_match;
///
/// assert!(ant_match("**/*.txt", "a/b/c.txt"));
/// assert!(ant_match("a/*/test", "a/foo/test"));
/// assert!(!ant_match("a/*/test", "a/foo/bar/test"));
/// ```
pub fn ant_match(pattern: &str, path: &str) -> bool {
    match_tokenized(
        &TokenizedPath::parse(pattern),
        &TokenizedPath::parse(path),
        true,
    )
}

/// Match `path` against `pattern`, ignoring character case.
///
/// Characters are compared after uppercase-folding both sides; wildcards
/// are unaffected.
pub fn ant_match_ignore_case(pattern: &str, path: &str) -> bool {
    match_tokenized(
        &TokenizedPath::parse(pattern),
        &TokenizedPath::parse(path),
        false,
    )
}

/// Segment-level matching over tokenized forms.
///
/// Callers matching one pattern against many paths should tokenize the
/// pattern once and call this directly instead of [`ant_match`].
pub fn match_tokenized(
    pattern: &TokenizedPath,
    path: &TokenizedPath,
    case_sensitive: bool,
) -> bool {
    match_run(
        pattern.segments(),
        path.segments(),
        |segment| is_deep_wildcard(segment),
        |pattern, segment| match_segment(pattern, segment, case_sensitive),
    )
}

/// Character-level matching of one pattern segment against one path segment.
///
/// `*` matches zero or more characters, `?` exactly one. The deep wildcard
/// has no meaning at this level; a segment consisting of two stars is just
/// two adjacent `*` wildcards.
///
/// # Example
///
/// ```
/// use ant_matcher::match_segment;
///
/// assert!(match_segment("f*o*o", "fooooo", true));
/// assert!(match_segment("a?c", "abc", true));
/// assert!(!match_segment("a?c", "ac", true));
/// assert!(match_segment("READ*", "readme.md", false));
/// ```
pub fn match_segment(pattern: &str, segment: &str, case_sensitive: bool) -> bool {
    // Fast path: without `*` the characters must line up one-to-one.
    if !pattern.contains('*') {
        let mut pattern = pattern.chars();
        let mut segment = segment.chars();
        loop {
            match (pattern.next(), segment.next()) {
                (Some(p), Some(c)) => {
                    if !wildcard_char_match(p, c, case_sensitive) {
                        return false;
                    }
                }
                (None, None) => return true,
                _ => return false,
            }
        }
    }

    let pattern: Vec<char> = pattern.chars().collect();
    let segment: Vec<char> = segment.chars().collect();
    match_run(
        &pattern,
        &segment,
        |&c| c == '*',
        |&p, &c| wildcard_char_match(p, c, case_sensitive),
    )
}

fn wildcard_char_match(pattern: char, actual: char, case_sensitive: bool) -> bool {
    pattern == '?' || chars_eq(pattern, actual, case_sensitive)
}

fn chars_eq(a: char, b: char, case_sensitive: bool) -> bool {
    a == b || (!case_sensitive && a.to_uppercase().eq(b.to_uppercase()))
}

/// The shared two-phase scan, used at segment granularity (tokens, `**`)
/// and at character granularity (chars, `*`).
///
/// `is_deep` identifies the zero-or-more wildcard token; `matches` decides
/// one pattern token against one input token. First a literal run is
/// consumed from the front up to the first deep wildcard, then another from
/// the back up to the last one; each literal run between consecutive deep
/// wildcards is then resolved against the leftmost input window accepting
/// it. The leftmost commitment is never revisited.
fn match_run<T>(
    mut pat: &[T],
    mut input: &[T],
    is_deep: impl Fn(&T) -> bool,
    matches: impl Fn(&T, &T) -> bool,
) -> bool {
    // Literal run from the front.
    while let ([p, pat_rest @ ..], [i, input_rest @ ..]) = (pat, input) {
        if is_deep(p) {
            break;
        }
        if !matches(p, i) {
            return false;
        }
        pat = pat_rest;
        input = input_rest;
    }
    if input.is_empty() {
        // Input exhausted: only deep wildcards may remain.
        return pat.iter().all(&is_deep);
    }
    if pat.is_empty() {
        return false;
    }

    // Literal run from the back.
    while let ([pat_rest @ .., p], [input_rest @ .., i]) = (pat, input) {
        if is_deep(p) {
            break;
        }
        if !matches(p, i) {
            return false;
        }
        pat = pat_rest;
        input = input_rest;
    }
    if input.is_empty() {
        return pat.iter().all(&is_deep);
    }

    // `pat` now begins and ends with a deep wildcard. Resolve each literal
    // run between consecutive deep wildcards in turn.
    while pat.len() > 1 && !input.is_empty() {
        if is_deep(&pat[1]) {
            // Adjacent deep wildcards are redundant.
            pat = &pat[1..];
            continue;
        }
        let Some(next) = pat[1..].iter().position(&is_deep).map(|i| i + 1) else {
            // The trailing deep wildcard guarantees a next one.
            unreachable!()
        };
        let run = &pat[1..next];
        let Some(found) = input
            .windows(run.len())
            .position(|window| run.iter().zip(window).all(|(p, i)| matches(p, i)))
        else {
            return false;
        };
        pat = &pat[next..];
        input = &input[found + run.len()..];
    }

    pat.iter().all(&is_deep)
}

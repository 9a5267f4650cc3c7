use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use aho_corasick::AhoCorasick;
use hashbrown::HashMap;

use crate::error::Error;
use crate::literal;
use crate::pattern::{Candidate, Pattern};
use crate::strategy;

/// A set of Ant-style patterns matched against paths efficiently.
///
/// `PatternSet` classifies each pattern at build time into the fastest
/// applicable strategy (extension hash, literal, prefix, suffix) and only
/// falls back to the full engine for patterns that need it, pre-filtered by
/// an Aho-Corasick automaton over the patterns' literal runs.
///
/// # Example
///
/// ```
/// use ant_set::{Pattern, PatternSet, PatternSetBuilder};
///
/// let mut builder = PatternSetBuilder::new();
/// builder.add(Pattern::new("**/*.rs"));
/// builder.add(Pattern::new("docs/**"));
/// let set = builder.build().unwrap();
///
/// assert!(set.is_match("src/main.rs"));
/// assert!(set.is_match("docs/guide/index.md"));
/// assert!(!set.is_match("Cargo.lock"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
    /// Extension → indices for `**/*.ext` patterns (extension alone decides).
    ext_any: HashMap<String, Vec<usize>>,
    /// Extension → indices for `*.ext` patterns (engine verification needed).
    ext_local: HashMap<String, Vec<usize>>,
    /// Canonical literal path → indices.
    literals: HashMap<String, Vec<usize>>,
    /// Prefix (with trailing separator) → pattern index.
    prefixes: Vec<(String, usize)>,
    /// Suffix (with leading separator) → pattern index.
    suffixes: Vec<(String, usize)>,
    /// Aho-Corasick automaton over literal runs of the engine patterns.
    ac: Option<AhoCorasick>,
    /// AC pattern index → pattern index.
    ac_to_pattern: Vec<usize>,
    /// Pattern indices with no usable literal (always engine-checked).
    always_check: Vec<usize>,
}

impl PatternSet {
    /// Return the number of patterns in this set.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Return whether this set is empty.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Test whether any pattern matches the given path.
    pub fn is_match(&self, path: impl AsRef<str>) -> bool {
        self.is_match_candidate(&Candidate::new(path.as_ref()))
    }

    /// Test whether any pattern matches the given candidate.
    pub fn is_match_candidate(&self, candidate: &Candidate<'_>) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let path = candidate.path();

        if let Some(ext) = strategy::path_extension(path) {
            // 1a. ExtensionAny — `**/*.ext`: the extension decides.
            if self.ext_any.contains_key(ext) {
                return true;
            }
            // 1b. ExtensionLocal — `*.ext`: still needs the engine (the
            //     path must be a single segment).
            if let Some(indices) = self.ext_local.get(ext) {
                for &idx in indices {
                    if self.engine_match(idx, candidate) {
                        return true;
                    }
                }
            }
        }

        // 2. Literal strategy.
        if self.literals.contains_key(path) {
            return true;
        }

        // 3. Prefix strategy. The stored prefix carries a trailing
        //    separator; the bare prefix also matches, since the deep
        //    wildcard covers zero segments.
        for (prefix, _) in &self.prefixes {
            if path.starts_with(prefix.as_str()) || path == &prefix[..prefix.len() - 1] {
                return true;
            }
        }

        // 4. Suffix strategy, mirrored.
        for (suffix, _) in &self.suffixes {
            if path.ends_with(suffix.as_str()) || path == &suffix[1..] {
                return true;
            }
        }

        // 5. Engine fallback — always-check patterns.
        for &idx in &self.always_check {
            if self.engine_match(idx, candidate) {
                return true;
            }
        }

        // 6. Engine fallback — AC pre-filter.
        if let Some(ac) = &self.ac {
            for mat in ac.find_overlapping_iter(path) {
                let idx = self.ac_to_pattern[mat.pattern().as_usize()];
                if self.engine_match(idx, candidate) {
                    return true;
                }
            }
        }

        false
    }

    /// Return the indices of all patterns that match the given path.
    pub fn matches(&self, path: impl AsRef<str>) -> Vec<usize> {
        self.matches_candidate(&Candidate::new(path.as_ref()))
    }

    /// Append the indices of all matching patterns to `into`.
    pub fn matches_into(&self, path: impl AsRef<str>, into: &mut Vec<usize>) {
        self.matches_candidate_into(&Candidate::new(path.as_ref()), into);
    }

    /// Return the indices of all patterns that match the given candidate.
    pub fn matches_candidate(&self, candidate: &Candidate<'_>) -> Vec<usize> {
        let mut result = Vec::new();
        self.matches_candidate_into(candidate, &mut result);
        result
    }

    /// Append the indices of all patterns matching the candidate to `into`.
    pub fn matches_candidate_into(&self, candidate: &Candidate<'_>, into: &mut Vec<usize>) {
        if self.patterns.is_empty() {
            return;
        }
        let path = candidate.path();
        let mut seen = vec![false; self.patterns.len()];

        if let Some(ext) = strategy::path_extension(path) {
            if let Some(indices) = self.ext_any.get(ext) {
                for &idx in indices {
                    if !seen[idx] {
                        into.push(idx);
                        seen[idx] = true;
                    }
                }
            }
            if let Some(indices) = self.ext_local.get(ext) {
                for &idx in indices {
                    if !seen[idx] && self.engine_match(idx, candidate) {
                        into.push(idx);
                        seen[idx] = true;
                    }
                }
            }
        }

        if let Some(indices) = self.literals.get(path) {
            for &idx in indices {
                if !seen[idx] {
                    into.push(idx);
                    seen[idx] = true;
                }
            }
        }

        for (prefix, idx) in &self.prefixes {
            if !seen[*idx]
                && (path.starts_with(prefix.as_str()) || path == &prefix[..prefix.len() - 1])
            {
                into.push(*idx);
                seen[*idx] = true;
            }
        }

        for (suffix, idx) in &self.suffixes {
            if !seen[*idx] && (path.ends_with(suffix.as_str()) || path == &suffix[1..]) {
                into.push(*idx);
                seen[*idx] = true;
            }
        }

        for &idx in &self.always_check {
            if !seen[idx] && self.engine_match(idx, candidate) {
                into.push(idx);
                seen[idx] = true;
            }
        }

        if let Some(ac) = &self.ac {
            for mat in ac.find_overlapping_iter(path) {
                let idx = self.ac_to_pattern[mat.pattern().as_usize()];
                if !seen[idx] && self.engine_match(idx, candidate) {
                    into.push(idx);
                    seen[idx] = true;
                }
            }
        }
    }

    fn engine_match(&self, idx: usize, candidate: &Candidate<'_>) -> bool {
        let pattern = &self.patterns[idx];
        ant_matcher::match_tokenized(
            pattern.tokens(),
            candidate.tokens(),
            !pattern.is_case_insensitive(),
        )
    }
}

/// A builder for constructing a [`PatternSet`].
#[derive(Clone, Debug, Default)]
pub struct PatternSetBuilder {
    patterns: Vec<Pattern>,
}

impl PatternSetBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pattern to the set.
    pub fn add(&mut self, pattern: Pattern) -> &mut Self {
        self.patterns.push(pattern);
        self
    }

    /// Build the [`PatternSet`].
    ///
    /// This classifies each pattern into the fastest applicable strategy
    /// and constructs the Aho-Corasick pre-filter for the rest.
    ///
    /// # Errors
    ///
    /// Returns an error if the Aho-Corasick automaton cannot be constructed.
    pub fn build(&self) -> Result<PatternSet, Error> {
        let strategies = strategy::build(&self.patterns);

        let mut ac_literals: Vec<String> = Vec::new();
        let mut ac_to_pattern: Vec<usize> = Vec::new();
        let mut always_check: Vec<usize> = Vec::new();

        for &idx in &strategies.matcher_indices {
            let pattern = &self.patterns[idx];
            let lit = if pattern.is_case_insensitive() {
                // A case-sensitive automaton would wrongly filter these out.
                None
            } else {
                let canonical = pattern.tokens().to_string();
                literal::extract_literal(&canonical).map(String::from)
            };
            match lit {
                Some(lit) => {
                    ac_literals.push(lit);
                    ac_to_pattern.push(idx);
                }
                None => always_check.push(idx),
            }
        }

        let ac = if ac_literals.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::builder()
                    .build(&ac_literals)
                    .map_err(|err| Error::prefilter(&err))?,
            )
        };

        Ok(PatternSet {
            patterns: self.patterns.clone(),
            ext_any: strategies.ext_any,
            ext_local: strategies.ext_local,
            literals: strategies.literals,
            prefixes: strategies.prefixes,
            suffixes: strategies.suffixes,
            ac,
            ac_to_pattern,
            always_check,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::pattern::PatternBuilder;

    fn build_set(patterns: &[&str]) -> PatternSet {
        let mut builder = PatternSetBuilder::new();
        for p in patterns {
            builder.add(Pattern::new(p));
        }
        builder.build().unwrap()
    }

    #[test]
    fn empty_set() {
        let set = build_set(&[]);
        assert!(!set.is_match("anything"));
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn default_set() {
        let set = PatternSet::default();
        assert!(set.is_empty());
        assert!(!set.is_match("anything"));
    }

    #[test]
    fn single_pattern() {
        let set = build_set(&["*.rs"]);
        assert!(set.is_match("foo.rs"));
        assert!(!set.is_match("foo.txt"));
    }

    #[test]
    fn multiple_patterns() {
        let set = build_set(&["*.rs", "*.toml", "*.md"]);
        assert!(set.is_match("main.rs"));
        assert!(set.is_match("Cargo.toml"));
        assert!(set.is_match("README.md"));
        assert!(!set.is_match("main.js"));
    }

    #[test]
    fn literal_strategy() {
        let set = build_set(&["Cargo.toml"]);
        assert!(set.is_match("Cargo.toml"));
        assert!(!set.is_match("cargo.toml"));
        assert!(!set.is_match("src/Cargo.toml"));
    }

    #[test]
    fn prefix_strategy() {
        let set = build_set(&["src/**"]);
        assert!(set.is_match("src/main.rs"));
        assert!(set.is_match("src/lib/util.rs"));
        assert!(set.is_match("src")); // deep wildcard matches zero segments
        assert!(!set.is_match("srcx"));
        assert!(!set.is_match("tests/main.rs"));
    }

    #[test]
    fn suffix_strategy() {
        let set = build_set(&["**/foo.txt"]);
        assert!(set.is_match("a/b/foo.txt"));
        assert!(set.is_match("foo.txt")); // also matches without a parent
        assert!(!set.is_match("bar.txt"));
        assert!(!set.is_match("xfoo.txt"));
    }

    #[test]
    fn extension_any_matches_deep_paths() {
        let set = build_set(&["**/*.rs"]);
        assert!(set.is_match("a/b/c/d.rs"));
        assert!(set.is_match("d.rs"));
        assert!(!set.is_match("d.rsx"));
    }

    #[test]
    fn extension_local_rejects_deep_paths() {
        let set = build_set(&["*.rs"]);
        assert!(set.is_match("d.rs"));
        assert!(!set.is_match("src/main.rs"));
    }

    #[test]
    fn question_mark_pattern() {
        let set = build_set(&["a?c"]);
        assert!(set.is_match("abc"));
        assert!(set.is_match("axc"));
        assert!(!set.is_match("abbc"));
    }

    #[test]
    fn wildcard_only_patterns_in_always_check() {
        // "*" and "**" have no literal, so they bypass the AC pre-filter.
        let set = build_set(&["*", "*.rs"]);
        assert!(set.is_match("anything"));
        assert!(set.is_match("foo.rs"));
        assert!(!set.is_match("a/b"));

        let set = build_set(&["**"]);
        assert!(set.is_match("a/b"));
        assert!(set.is_match(""));
    }

    #[test]
    fn engine_fallback_with_prefilter() {
        let set = build_set(&["a/**/needle/*.txt"]);
        assert!(set.is_match("a/x/y/needle/note.txt"));
        assert!(set.is_match("a/needle/note.txt"));
        assert!(!set.is_match("a/x/needle/note.rs"));
        assert!(!set.is_match("b/needle/note.txt"));
    }

    #[test]
    fn matches_returns_indices() {
        let set = build_set(&["*.rs", "*.toml", "**/*.rs"]);
        let indices = set.matches("src/main.rs");
        assert!(indices.contains(&2)); // **/*.rs matches
        assert!(!indices.contains(&0)); // *.rs needs a single segment
        assert!(!indices.contains(&1)); // *.toml doesn't match
    }

    #[test]
    fn matches_into_mixed_strategies() {
        let set = build_set(&[
            "**/*.rs", // ext_any     (idx 0)
            "src/**",  // prefix      (idx 1)
            "*",       // always-check (idx 2)
        ]);
        let mut results = Vec::new();
        set.matches_into("src/main.rs", &mut results);
        results.sort_unstable();
        assert_eq!(results, vec![0, 1]);

        results.clear();
        set.matches_into("main.rs", &mut results);
        results.sort_unstable();
        assert_eq!(results, vec![0, 2]);
    }

    #[test]
    fn duplicate_patterns_each_report_their_index() {
        let set = build_set(&["Cargo.toml", "Cargo.toml"]);
        let mut indices = set.matches("Cargo.toml");
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn candidate_matching() {
        let set = build_set(&["**/*.rs"]);
        let c = Candidate::new("src\\main.rs");
        assert!(set.is_match_candidate(&c));
    }

    #[test]
    fn non_canonical_paths_hit_the_fast_paths() {
        let set = build_set(&["src/**", "Cargo.toml", "**/*.rs"]);
        assert!(set.is_match("src//deep//file.c"));
        assert!(set.is_match("Cargo.toml/"));
        assert!(set.is_match("src\\main.rs"));
    }

    #[test]
    fn case_insensitive_patterns_fall_back_to_the_engine() {
        let mut builder = PatternSetBuilder::new();
        builder.add(
            PatternBuilder::new("**/README.md")
                .case_insensitive(true)
                .build(),
        );
        builder.add(Pattern::new("**/LICENSE"));
        let set = builder.build().unwrap();
        assert!(set.is_match("docs/readme.MD"));
        assert!(set.is_match("LICENSE"));
        assert!(!set.is_match("license"));
    }

    #[test]
    fn mixed_strategies() {
        let set = build_set(&[
            "*.rs",          // extension local
            "Cargo.toml",    // literal
            "src/**",        // prefix
            "**/README.md",  // suffix
            "a/**/b/*.js",   // engine fallback
        ]);
        assert!(set.is_match("foo.rs"));
        assert!(set.is_match("Cargo.toml"));
        assert!(set.is_match("src/lib.rs"));
        assert!(set.is_match("docs/README.md"));
        assert!(set.is_match("a/components/b/app.js"));
        assert!(!set.is_match("foo.py"));
    }
}

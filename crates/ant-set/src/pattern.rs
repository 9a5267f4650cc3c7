use alloc::string::{String, ToString};
use core::convert::Infallible;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use path_tokenizer::TokenizedPath;

/// A single Ant-style path pattern.
///
/// A `Pattern` tokenizes its text once at construction and reuses the
/// tokenized form for every match. Construction never fails: any string is
/// a well-formed Ant pattern.
///
/// # Example
///
/// ```
/// use ant_set::Pattern;
///
/// let pattern = Pattern::new("**/*.txt");
/// let matcher = pattern.compile_matcher();
/// assert!(matcher.is_match("a/b/c.txt"));
/// assert!(!matcher.is_match("a/b/c.rs"));
/// ```
#[derive(Clone, Debug)]
pub struct Pattern {
    text: String,
    tokens: TokenizedPath,
    case_insensitive: bool,
}

impl Pattern {
    /// Create a new case-sensitive `Pattern` from the given text.
    pub fn new(text: &str) -> Self {
        Self {
            text: String::from(text),
            tokens: TokenizedPath::parse(text),
            case_insensitive: false,
        }
    }

    /// The original pattern text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The tokenized pattern.
    pub fn tokens(&self) -> &TokenizedPath {
        &self.tokens
    }

    /// Whether this pattern matches case-insensitively.
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Compile this pattern into a matcher.
    pub fn compile_matcher(&self) -> PatternMatcher {
        PatternMatcher {
            pattern: self.clone(),
        }
    }
}

impl Eq for Pattern {}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.case_insensitive == other.case_insensitive
    }
}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.case_insensitive.hash(state);
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// A builder for configuring a pattern.
#[derive(Clone, Debug)]
pub struct PatternBuilder {
    text: String,
    case_insensitive: bool,
}

impl PatternBuilder {
    /// Create a new builder from the given pattern text.
    pub fn new(text: &str) -> Self {
        Self {
            text: String::from(text),
            case_insensitive: false,
        }
    }

    /// Toggle case-insensitive matching.
    ///
    /// When enabled, characters are compared after uppercase-folding both
    /// sides at match time; wildcards are unaffected.
    pub fn case_insensitive(&mut self, yes: bool) -> &mut Self {
        self.case_insensitive = yes;
        self
    }

    /// Build the pattern.
    pub fn build(&self) -> Pattern {
        Pattern {
            text: self.text.clone(),
            tokens: TokenizedPath::parse(&self.text),
            case_insensitive: self.case_insensitive,
        }
    }
}

/// A compiled matcher for a single pattern.
///
/// Created by [`Pattern::compile_matcher`].
#[derive(Clone, Debug)]
pub struct PatternMatcher {
    pattern: Pattern,
}

impl PatternMatcher {
    /// Return a reference to the underlying `Pattern`.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Test whether the given path matches this pattern.
    pub fn is_match(&self, path: impl AsRef<str>) -> bool {
        self.is_match_candidate(&Candidate::new(path.as_ref()))
    }

    /// Test whether the given [`Candidate`] matches this pattern.
    pub fn is_match_candidate(&self, candidate: &Candidate<'_>) -> bool {
        ant_matcher::match_tokenized(
            &self.pattern.tokens,
            candidate.tokens(),
            !self.pattern.case_insensitive,
        )
    }
}

/// A pre-tokenized path for matching against many patterns.
///
/// `Candidate` tokenizes the path once on construction and keeps the
/// canonical rendering (separators normalized, duplicate and trailing
/// separators collapsed) for [`PatternSet`](crate::PatternSet)'s string
/// fast paths. The original string is borrowed when it is already
/// canonical.
#[derive(Clone, Debug)]
pub struct Candidate<'a> {
    path: CandidatePath<'a>,
    tokens: TokenizedPath,
}

#[derive(Clone, Debug)]
enum CandidatePath<'a> {
    Borrowed(&'a str),
    Owned(String),
}

impl<'a> Candidate<'a> {
    /// Create a new candidate from a path string.
    pub fn new(path: &'a str) -> Self {
        let tokens = TokenizedPath::parse(path);
        let canonical = tokens.to_string();
        let path = if canonical == path {
            CandidatePath::Borrowed(path)
        } else {
            CandidatePath::Owned(canonical)
        };
        Self { path, tokens }
    }

    /// The canonical path string.
    pub fn path(&self) -> &str {
        match &self.path {
            CandidatePath::Borrowed(s) => s,
            CandidatePath::Owned(s) => s.as_str(),
        }
    }

    /// The tokenized path.
    pub fn tokens(&self) -> &TokenizedPath {
        &self.tokens
    }
}

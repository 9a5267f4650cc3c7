#![doc = include_str!("../README.md")]
#![no_std]
extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;
use core::slice;
use core::str::FromStr;

/// The canonical path separator. All tokenized forms are rendered with it.
pub const SEPARATOR: char = '/';

/// Whether `c` is accepted as a path separator on input.
///
/// Both separators are accepted everywhere; [`normalize`] rewrites
/// backslashes to [`SEPARATOR`].
#[inline]
pub fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Normalize all path separators in `path` to [`SEPARATOR`].
///
/// Borrows when the path contains no backslashes.
pub fn normalize(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Whether `path` is absolute: non-empty and starting with a separator.
///
/// # Example
///
/// ```
/// assert!(path_tokenizer::is_absolute("/a/b"));
/// assert!(path_tokenizer::is_absolute("\\a\\b"));
/// assert!(!path_tokenizer::is_absolute("a/b"));
/// assert!(!path_tokenizer::is_absolute(""));
/// ```
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(is_separator)
}

/// Split an absolute path into its root separator and the remainder.
///
/// # Example
///
/// ```
/// let (root, rest) = path_tokenizer::dissect_absolute("/a/b");
/// assert_eq!(root, '/');
/// assert_eq!(rest, "a/b");
/// ```
///
/// # Panics
///
/// Panics if `path` is not absolute. Callers are expected to guard with
/// [`is_absolute`] first; a non-absolute argument is a programming error,
/// not a recoverable condition.
pub fn dissect_absolute(path: &str) -> (char, Cow<'_, str>) {
    assert!(
        is_absolute(path),
        "dissect_absolute on non-absolute path {path:?}"
    );
    // The leading separator is a single byte, so byte offset 1 is safe.
    match normalize(path) {
        Cow::Borrowed(s) => (SEPARATOR, Cow::Borrowed(&s[1..])),
        Cow::Owned(mut s) => (SEPARATOR, Cow::Owned(s.split_off(1))),
    }
}

/// Tokenize a path into its segments. Convenience for [`TokenizedPath::parse`].
pub fn tokenize(path: &str) -> TokenizedPath {
    TokenizedPath::parse(path)
}

/// A path split into its ordered, root-to-leaf segments.
///
/// Tokenization never produces empty segments: consecutive and trailing
/// separators collapse. For an absolute path the root separator is kept as
/// the first segment, to be matched literally by consumers. The empty path
/// tokenizes to zero segments.
///
/// # Example
///
/// ```
/// use path_tokenizer::TokenizedPath;
///
/// let path = TokenizedPath::parse("/a//b/");
/// assert_eq!(path.segments(), ["/", "a", "b"]);
/// assert!(path.is_absolute());
/// assert_eq!(path.to_string(), "/a/b");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TokenizedPath {
    segments: Vec<String>,
}

impl TokenizedPath {
    /// Tokenize a path, accepting either separator.
    pub fn parse(path: &str) -> Self {
        let mut segments = Vec::new();
        let rest = if is_absolute(path) {
            let (root, rest) = dissect_absolute(path);
            segments.push(String::from(root));
            rest
        } else {
            normalize(path)
        };
        segments.extend(
            rest.split(SEPARATOR)
                .filter(|segment| !segment.is_empty())
                .map(String::from),
        );
        Self { segments }
    }

    /// The segments, root first for absolute paths.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments (the "current directory" path).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether the first segment is a root separator.
    pub fn is_absolute(&self) -> bool {
        self.segments.first().is_some_and(|segment| segment == "/")
    }

    /// Iterate over the segments.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.segments.iter()
    }
}

impl fmt::Display for TokenizedPath {
    /// Renders the canonical form: the root, if any, followed by the
    /// segments joined with [`SEPARATOR`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.segments.as_slice();
        if self.is_absolute() {
            write!(f, "{SEPARATOR}")?;
            rest = &rest[1..];
        }
        let mut first = true;
        for segment in rest {
            if !first {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for TokenizedPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<'a> IntoIterator for &'a TokenizedPath {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

use alloc::string::{String, ToString};
use core::fmt;

/// An error that occurs when building a [`PatternSet`](crate::PatternSet).
///
/// Pattern construction itself is infallible -- every string is a
/// well-formed Ant pattern -- so the only fallible step is constructing the
/// Aho-Corasick pre-filter over the patterns' literal runs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn prefilter(err: &aho_corasick::BuildError) -> Self {
        Self {
            kind: ErrorKind::Prefilter(err.to_string()),
        }
    }

    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error building pattern set: {}", self.kind)
    }
}

impl core::error::Error for Error {}

/// The kind of error that can occur when building a pattern set.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The literal pre-filter automaton could not be constructed, e.g.
    /// because it would exceed its internal size limits.
    Prefilter(String),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefilter(msg) => write!(f, "literal pre-filter: {msg}"),
        }
    }
}

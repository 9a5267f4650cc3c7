#![doc = include_str!("../README.md")]
#![no_std]
extern crate alloc;

mod error;
mod literal;
mod pattern;
mod set;
mod strategy;

pub use crate::error::{Error, ErrorKind};
pub use crate::pattern::{Candidate, Pattern, PatternBuilder, PatternMatcher};
pub use crate::set::{PatternSet, PatternSetBuilder};

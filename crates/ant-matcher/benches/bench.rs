#![allow(clippy::unwrap_used)]

use criterion::{Criterion, criterion_group, criterion_main};

const PATH: &str = "some/a/bigger/path/to/the/crazy/needle.txt";
const PATTERN: &str = "some/**/needle.txt";

#[inline]
fn glob(pat: &str, s: &str) -> bool {
    let pat = glob::Pattern::new(pat).expect("valid glob pattern");
    pat.matches(s)
}

#[inline]
fn globset(pat: &str, s: &str) -> bool {
    let pat = globset::Glob::new(pat)
        .expect("valid glob")
        .compile_matcher();
    pat.is_match(s)
}

fn ant_matcher_crate(b: &mut Criterion) {
    b.bench_function("ant_matcher_crate", |b| {
        b.iter(|| assert!(ant_matcher::ant_match(PATTERN, PATH)));
    });
}

fn ant_matcher_tokenized(b: &mut Criterion) {
    let pattern = path_tokenizer::tokenize(PATTERN);
    let path = path_tokenizer::tokenize(PATH);
    b.bench_function("ant_matcher_tokenized", |b| {
        b.iter(|| assert!(ant_matcher::match_tokenized(&pattern, &path, true)));
    });
}

fn glob_match_crate(b: &mut Criterion) {
    b.bench_function("glob_match_crate", |b| {
        b.iter(|| assert!(glob_match::glob_match(PATTERN, PATH)));
    });
}

fn glob_crate(b: &mut Criterion) {
    b.bench_function("glob_crate", |b| b.iter(|| assert!(glob(PATTERN, PATH))));
}

fn globset_crate(b: &mut Criterion) {
    b.bench_function("globset_crate", |b| {
        b.iter(|| assert!(globset(PATTERN, PATH)));
    });
}

criterion_group!(
    benches,
    globset_crate,
    glob_crate,
    glob_match_crate,
    ant_matcher_crate,
    ant_matcher_tokenized,
);
criterion_main!(benches);

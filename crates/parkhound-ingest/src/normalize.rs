//! Park-name canonicalization for cross-dataset matching.
//!
//! The fountain dataset names sites after their parent park but with
//! inconsistent decoration ("New Farm Park Off-Leash Area", "NEW FARM
//! PARK!!"). Matching happens on a canonical key with the decoration
//! stripped.

use std::sync::LazyLock;

use regex::Regex;

static OFF_LEASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"off[- ]?leash").expect("valid regex"));
static DOG_OFF_LEASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"dog[- ]?off[- ]?leash").expect("valid regex"));
static STOP_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:area|park|reserve)\b").expect("valid regex"));
static PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,/#!$%^&*;:{}=_'`~()]").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Maps a free-text park name to its canonical matching key: lowercase,
/// off-leash phrasing and the generic words "area"/"park"/"reserve"
/// stripped, punctuation removed, whitespace collapsed. An empty input
/// yields the empty key, which never matches anything.
#[must_use]
pub fn normalize_park_name(name: &str) -> String {
    let s = name.to_lowercase();
    // The inner "off leash" is stripped first, so "dog off leash" names
    // keep their leading "dog" in the key.
    let s = OFF_LEASH_RE.replace_all(&s, "");
    let s = DOG_OFF_LEASH_RE.replace_all(&s, "");
    let s = STOP_WORD_RE.replace_all(&s, "");
    let s = PUNCTUATION_RE.replace_all(&s, " ");
    let s = WHITESPACE_RE.replace_all(&s, " ");
    s.trim().to_string()
}

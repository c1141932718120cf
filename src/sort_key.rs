//! Sort keys derived from page file names.

use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit-run pattern compiles"));

/// Returns the value of the first run of ASCII digits in `name`.
///
/// Names without digits, and digit runs that do not fit in a `u64`, yield `0`.
pub fn extract_sort_key(name: &str) -> u64 {
    DIGIT_RUN
        .find(name)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

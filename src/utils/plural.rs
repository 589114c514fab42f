//! Pluralization helpers for report summaries.

/// `"s"` unless `n` is exactly one (`0 settings`, `1 setting`).
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Count followed by a pluralized noun, e.g. `"3 problems"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}

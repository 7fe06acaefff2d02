//! Helpers shared by the unit tests.

/// Install `env_logger` for the test harness, repeated calls are fine.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sort the space separated tokens of a bracketed rendering like `[b a a]` so that renderings
/// can be compared independently of the multiset's iteration order.
pub fn sorted(rendered: String) -> String {
    let inner = rendered
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(&rendered);
    let mut tokens: Vec<&str> = inner.split_whitespace().collect();
    tokens.sort();
    format!("[{}]", tokens.join(" "))
}

//! Domain-specific assertion macros for svcsheet harnesses.
//!
//! These wrap `pretty_assertions` and say which record or field broke.

/// Assert the slugs of a record slice, in order.
///
/// ```rust
/// assert_slugs!(records, ["web-design", "seo-audit"]);
/// ```
#[macro_export]
macro_rules! assert_slugs {
    ($records:expr, [$($slug:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $records.iter().map(|r| r.slug.as_str()).collect();
        let expected: Vec<&str> = vec![$($slug),*];
        pretty_assertions::assert_eq!(actual, expected, "record slugs (in output order)");
    }};
}

/// Assert a parsed money value: `assert_money!(m, 12.5)` or `assert_money!(m, None)`.
#[macro_export]
macro_rules! assert_money {
    ($actual:expr, None) => {{
        let actual: Option<svcsheet_core::Money> = $actual;
        assert!(actual.is_none(), "expected absent money, got {:?}", actual);
    }};
    ($actual:expr, $expected:expr) => {{
        let actual: Option<svcsheet_core::Money> = $actual;
        let expected: f64 = $expected;
        match actual {
            Some(m) if (m.value() - expected).abs() < 1e-9 => {}
            other => panic!("assert_money! failed:\n  expected: {}\n  actual:   {:?}", expected, other),
        }
    }};
}

/// Assert the set of JSON keys on one output object (order-insensitive).
#[macro_export]
macro_rules! assert_json_keys {
    ($object:expr, [$($key:expr),* $(,)?]) => {{
        let object = $object.as_object().expect("expected a JSON object");
        let actual: Vec<&str> = object.keys().map(String::as_str).collect();
        let mut expected: Vec<&str> = vec![$($key),*];
        let mut sorted = actual.clone();
        sorted.sort_unstable();
        expected.sort_unstable();
        pretty_assertions::assert_eq!(sorted, expected, "output object keys");
    }};
}

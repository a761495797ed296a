//! Assertion macros for cafe harnesses.
//!
//! These wrap `pretty_assertions` and say which response broke which rule.

/// Assert the status and exact (trimmed) body of a [`TestResponse`](super::TestResponse).
///
/// ```rust,ignore
/// assert_response!(send("/cafe").await, StatusCode::BAD_REQUEST, "unknown city");
/// ```
#[macro_export]
macro_rules! assert_response {
    ($response:expr, $status:expr, $body:expr) => {{
        let response = $response;
        pretty_assertions::assert_eq!(
            response.status,
            $status,
            "unexpected status, body {:?}",
            response.body
        );
        pretty_assertions::assert_eq!(response.body.trim(), $body);
    }};
}

/// Assert that every name contains `needle`, ignoring case.
#[macro_export]
macro_rules! assert_all_contain {
    ($names:expr, $needle:expr) => {{
        let needle = cafe::fold_case(&$needle);
        for name in $names.iter() {
            if !cafe::fold_case(name).contains(&needle) {
                panic!(
                    "assert_all_contain! failed: {:?} does not contain {:?}",
                    name, needle
                );
            }
        }
    }};
}

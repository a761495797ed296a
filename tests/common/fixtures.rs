//! Request fixtures and catalog files shared across harnesses.

use std::io::Write;

/// Requests that must be rejected, with the exact expected body.
pub const NEGATIVE_REQUESTS: &[(&str, &str)] = &[
    ("/cafe", "unknown city"),
    ("/cafe?city=omsk", "unknown city"),
    ("/cafe?city=tula&count=na", "incorrect count"),
];

/// Requests that must succeed against the built-in catalog. Cyrillic is
/// percent-encoded.
pub fn ok_requests() -> Vec<String> {
    vec![
        "/cafe?count=2&city=moscow".to_string(),
        "/cafe?city=tula".to_string(),
        format!("/cafe?city=moscow&search={}", urlencoding::encode("ложка")),
    ]
}

/// A small catalog in the JSON file format, distinct from the built-in one.
pub const CATALOG_JSON: &str = r#"{
    "kazan": ["Чак-чак", "Эчпочмак", "Кофе на Баумана"],
    "perm": ["Пельменная"]
}"#;

/// Split a response body into cafe names; the empty body is zero names.
pub fn split_names(body: &str) -> Vec<&str> {
    let body = body.trim();
    if body.is_empty() {
        Vec::new()
    } else {
        body.split(',').collect()
    }
}

/// Write `json` to a temporary `.json` file that lives as long as the handle.
pub fn catalog_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp catalog");
    file.write_all(json.as_bytes()).expect("write temp catalog");
    file
}

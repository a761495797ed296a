//! Core types for cafe-core.
//!
//! This module defines the data shared across the layers: the catalogued
//! [`Cafe`], and the raw, unvalidated [`CafeParams`] a request carries.

/// A single venue in the catalog.
///
/// Cafes have no identity beyond their name, which is also the only text
/// searched by a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cafe {
    pub name: String,
    /// `name` after [`fold_case`], computed once at catalog build time.
    folded: String,
}

impl Cafe {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let folded = fold_case(&name);
        Self { name, folded }
    }

    /// Case-insensitive substring match on the name.
    ///
    /// `needle` must already be folded with [`fold_case`], so `"КОФЕ"` matches
    /// `"кофе"` and `"Σ"` matches `"ΚΑΦΕΣ"`.
    pub fn matches(&self, needle: &str) -> bool {
        self.folded.contains(needle)
    }
}

/// Lowercase `s` one `char` at a time.
///
/// Unlike [`str::to_lowercase`] this ignores the context-sensitive final-sigma
/// rule, so a substring folds to a substring of the folded whole.
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

impl std::fmt::Display for Cafe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Query-string parameters of a `GET /cafe` request, exactly as received.
///
/// Every field is optional here; [`CafeQuery::from_params`](crate::query::CafeQuery::from_params)
/// decides which absences and values are errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CafeParams {
    /// City to look up. Required by validation.
    pub city: Option<String>,
    /// Maximum number of cafes to return, as text.
    pub count: Option<String>,
    /// Case-insensitive name filter.
    pub search: Option<String>,
}

impl CafeParams {
    pub fn city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Self::default()
        }
    }

    pub fn with_count(mut self, count: impl Into<String>) -> Self {
        self.count = Some(count.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Collect parameters from decoded query-string pairs.
    ///
    /// The first value of a repeated key wins and later ones are ignored.
    /// Unrecognised keys are ignored too.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "city" => &mut params.city,
                "count" => &mut params.count,
                "search" => &mut params.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

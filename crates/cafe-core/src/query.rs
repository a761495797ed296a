//! Query engine — validates request parameters and filters one city's cafes.
//!
//! The pipeline is three steps:
//!
//! ```text
//! CafeParams ──► CafeQuery::from_params ──► CafeQuery::run ──► render
//!   (raw)          (city, count checked)     (search, truncate)  (comma-joined)
//! ```
//!
//! [`Catalog::select`] runs all three for callers that only want the body.

use crate::{fold_case, Cafe, CafeParams, Catalog};

/// A request the catalog rejected. The `Display` text is the exact response
/// body sent to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// `city` was missing, empty, or not in the catalog.
    #[error("unknown city")]
    UnknownCity { city: Option<String> },
    /// `count` was present but not a non-negative integer.
    #[error("incorrect count")]
    InvalidCount { count: String },
}

/// A validated query bound to one city's cafes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeQuery<'a> {
    cafes: &'a [Cafe],
    /// `None` means no cap.
    count: Option<usize>,
    /// Case-folded needle; `None` when no filtering applies.
    search: Option<String>,
}

impl<'a> CafeQuery<'a> {
    /// Validate `params` against `catalog`.
    ///
    /// `city` is checked before `count`, so a request wrong on both reports
    /// [`QueryError::UnknownCity`]. An empty `count` or `search` value is
    /// treated the same as an absent one.
    pub fn from_params(catalog: &'a Catalog, params: &CafeParams) -> Result<Self, QueryError> {
        let cafes = params
            .city
            .as_deref()
            .and_then(|city| catalog.city(city))
            .ok_or_else(|| QueryError::UnknownCity {
                city: params.city.clone(),
            })?;

        let count = match params.count.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<usize>().map_err(|_| QueryError::InvalidCount {
                count: raw.to_string(),
            })?),
        };

        let search = params
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(fold_case);

        Ok(Self {
            cafes,
            count,
            search,
        })
    }

    /// Matching cafes in catalog order, at most `count` of them.
    pub fn run(&self) -> Vec<&'a Cafe> {
        let limit = self.count.unwrap_or(usize::MAX);
        self.cafes
            .iter()
            .filter(|cafe| self.search.as_deref().map_or(true, |needle| cafe.matches(needle)))
            .take(limit)
            .collect()
    }
}

/// Join cafe names with `,`. Zero cafes render as the empty string.
pub fn render(cafes: &[&Cafe]) -> String {
    cafes
        .iter()
        .map(|cafe| cafe.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

impl Catalog {
    /// Validate, filter and render in one call.
    pub fn select(&self, params: &CafeParams) -> Result<String, QueryError> {
        let query = CafeQuery::from_params(self, params)?;
        Ok(render(&query.run()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

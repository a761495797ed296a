//! Catalog — the read-only mapping from city name to its cafes.
//!
//! A [`Catalog`] is built once before the server starts, either from the
//! built-in dataset ([`Catalog::builtin`]) or from a JSON file
//! ([`Catalog::from_json_file`]), and is never mutated afterwards. Readers share
//! it behind an `Arc` without locking.

use crate::{config::CatalogConfig, Cafe};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Built-in dataset
// ---------------------------------------------------------------------------

const MOSCOW: &[&str] = &[
    "Мир кофе",
    "Сладкоежка",
    "Кофе и завтраки",
    "Сытый студент",
    "Ложка и вилка",
];

const TULA: &[&str] = &["Тульский пряник", "Самовар", "Кофейня на Советской"];

static BUILTIN: phf::Map<&'static str, &'static [&'static str]> = phf::phf_map! {
    "moscow" => MOSCOW,
    "tula" => TULA,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to build a [`Catalog`] from an external source.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not a JSON object of city → [cafe names]")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no cities")]
    Empty,
    #[error("catalog contains a city with an empty name")]
    EmptyCity,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    cities: BTreeMap<String, Vec<Cafe>>,
}

impl Catalog {
    /// The reference dataset compiled into the binary.
    pub fn builtin() -> Self {
        BUILTIN
            .entries()
            .map(|(city, names)| {
                let cafes = names.iter().copied().map(Cafe::new).collect::<Vec<_>>();
                (city.to_string(), cafes)
            })
            .collect()
    }

    /// Parse a catalog from JSON of the form `{"city": ["cafe", ...], ...}`.
    /// Cafe order within a city follows the array order.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        if raw.is_empty() {
            return Err(CatalogError::Empty);
        }
        if raw.keys().any(String::is_empty) {
            return Err(CatalogError::EmptyCity);
        }

        Ok(raw
            .into_iter()
            .map(|(city, names)| (city, names.into_iter().map(Cafe::new).collect::<Vec<_>>()))
            .collect())
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load the catalog named by `config`, falling back to [`Catalog::builtin`]
    /// when no file is configured.
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let catalog = match config.path.as_deref() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading catalog file");
                Self::from_json_file(path)?
            }
            None => Self::builtin(),
        };
        tracing::debug!(cities = catalog.len(), cafes = catalog.cafe_count(), "catalog ready");
        Ok(catalog)
    }

    /// Cafes for `city` in catalog order, or `None` if the city is unknown.
    /// Lookup is exact and case-sensitive.
    pub fn city(&self, city: &str) -> Option<&[Cafe]> {
        self.cities.get(city).map(Vec::as_slice)
    }

    /// City names in sorted order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Total number of cafes across all cities.
    pub fn cafe_count(&self) -> usize {
        self.cities.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, Vec<Cafe>)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Cafe>)>>(iter: I) -> Self {
        Self {
            cities: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! cafe-core — catalog and query engine for the cafe lookup service.
//!
//! This crate holds everything below the HTTP surface: the read-only
//! [`Catalog`], request parameter validation and filtering in [`query`], and
//! the layered [`config`].
//!
//! # Architecture
//!
//! ```text
//! config ──► catalog ──► query ──► (cafe-http handler)
//! ```
//!
//! The catalog is built once at startup and never mutated, so queries run
//! concurrently against a shared reference with no locking.

pub mod catalog;
pub mod config;
pub mod query;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use query::{CafeQuery, QueryError};
pub use types::{fold_case, Cafe, CafeParams};

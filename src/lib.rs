//! cafe — plain-text HTTP lookup of cafes by city.
//!
//! This crate re-exports the two workspace layers so that integration tests
//! and benchmarks can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! config ──► catalog ──► query ──► handler ──► axum server
//! └──────── cafe-core ────────┘   └────── cafe-http ─────┘
//! ```
//!
//! The catalog is loaded once before the listener starts accepting
//! connections and is shared read-only by every request.

pub use cafe_core::{
    catalog, config, fold_case, query, types, Cafe, CafeParams, CafeQuery, Catalog, CatalogError,
    QueryError,
};
pub use cafe_http::{router, serve, ApiError, AppState};

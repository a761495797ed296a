//! Route handlers.

use crate::{error::ApiError, AppState};
use axum::extract::{Query, State};
use cafe_core::{query, CafeParams, CafeQuery};

/// `GET /cafe?city=<city>[&count=<n>][&search=<text>]`
///
/// Responds with the matching cafe names joined by `,` as `text/plain`.
/// The query string is read as ordered pairs so that a repeated key keeps
/// its first value.
#[tracing::instrument(
    name = "cafe",
    skip_all,
    fields(
        city = tracing::field::Empty,
        count = tracing::field::Empty,
        search = tracing::field::Empty,
    )
)]
pub async fn list_cafes(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, ApiError> {
    let params = CafeParams::from_pairs(pairs);

    let span = tracing::Span::current();
    span.record("city", params.city.as_deref());
    span.record("count", params.count.as_deref());
    span.record("search", params.search.as_deref());

    let query = CafeQuery::from_params(&state.catalog, &params).inspect_err(|err| {
        tracing::debug!(error = ?err, "rejected");
    })?;

    let cafes = query.run();
    tracing::debug!(results = cafes.len(), "ok");
    Ok(query::render(&cafes))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

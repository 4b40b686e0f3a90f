use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::criteria::{ListingQuery, NeighborhoodQuery};
use super::domain::{Language, ListingId};
use super::service::MarketService;
use super::snapshot::SnapshotStore;
use super::view::Currency;

/// Router exposing the read-only market endpoints.
pub fn market_router<S>(service: Arc<MarketService<S>>) -> Router
where
    S: SnapshotStore + 'static,
{
    Router::new()
        .route("/api/v1/listings", get(listings_handler::<S>))
        .route("/api/v1/listings/:listing_id", get(listing_handler::<S>))
        .route("/api/v1/neighborhoods", get(neighborhoods_handler::<S>))
        .route("/api/v1/market/snapshot", get(snapshot_handler::<S>))
        .route("/api/v1/sources", get(sources_handler::<S>))
        .with_state(service)
}

pub(crate) async fn listings_handler<S>(
    State(service): State<Arc<MarketService<S>>>,
    Query(query): Query<ListingQuery>,
) -> Response
where
    S: SnapshotStore + 'static,
{
    let response = service.search_listings(&query);
    (StatusCode::OK, Json(response)).into_response()
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DisplayQuery {
    lang: Option<Language>,
    currency: Option<Currency>,
}

pub(crate) async fn listing_handler<S>(
    State(service): State<Arc<MarketService<S>>>,
    Path(listing_id): Path<String>,
    Query(display): Query<DisplayQuery>,
) -> Response
where
    S: SnapshotStore + 'static,
{
    let context = service
        .display()
        .with_overrides(display.lang, display.currency);
    let id = ListingId(listing_id);
    match service.listing(&id, context) {
        Some(view) => (StatusCode::OK, Json(view)).into_response(),
        None => {
            let payload = json!({
                "error": format!("listing {id} not found"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn neighborhoods_handler<S>(
    State(service): State<Arc<MarketService<S>>>,
    Query(query): Query<NeighborhoodQuery>,
) -> Response
where
    S: SnapshotStore + 'static,
{
    let response = service.search_neighborhoods(&query);
    (StatusCode::OK, Json(response)).into_response()
}

pub(crate) async fn snapshot_handler<S>(State(service): State<Arc<MarketService<S>>>) -> Response
where
    S: SnapshotStore + 'static,
{
    (StatusCode::OK, Json(service.snapshot())).into_response()
}

pub(crate) async fn sources_handler<S>(State(service): State<Arc<MarketService<S>>>) -> Response
where
    S: SnapshotStore + 'static,
{
    (StatusCode::OK, Json(service.sources())).into_response()
}

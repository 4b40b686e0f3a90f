use super::common::*;

use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use crate::market::market_router;

fn get(uri: &str) -> Request<axum::body::Body> {
    Request::get(uri)
        .body(axum::body::Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn listings_route_filters_and_projects() {
    let router = market_router(build_service());

    let response = router
        .oneshot(get("/api/v1/listings?search=durr%C3%ABs&sort=low-high&lang=en"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let results = body["results"].as_array().expect("results array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["id"], "dur-001");
    assert_eq!(results[0]["title"], "Sea view apartment");
    assert_eq!(results[0]["price_label"], "€98,000");
    assert!(results[1].get("rooms").is_none(), "land omits rooms");
    assert_eq!(body["stats"]["count"], 2);
    assert_eq!(body["unapplied_filters"], serde_json::json!([]));
}

#[tokio::test]
async fn listings_route_reports_unapplied_advanced_filters() {
    let router = market_router(build_service());

    let response = router
        .oneshot(get("/api/v1/listings?bathrooms=2&status=for_sale"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(
        body["unapplied_filters"],
        serde_json::json!(["bathrooms", "status"])
    );
    assert_eq!(
        body["results"].as_array().map(Vec::len),
        Some(crate::market::ListingCatalog::standard().listings().len())
    );
}

#[tokio::test]
async fn listings_route_rejects_unknown_keys() {
    let router = market_router(build_service());

    let response = router
        .oneshot(get("/api/v1/listings?colour=blue"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_result_is_not_an_error() {
    let router = market_router(build_service());

    let response = router
        .oneshot(get("/api/v1/listings?rooms=abc"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["results"], serde_json::json!([]));
    assert_eq!(body["stats"]["mean_price"], 0.0);
}

#[tokio::test]
async fn unknown_listing_returns_not_found() {
    let router = market_router(build_service());

    let response = router
        .oneshot(get("/api/v1/listings/nope"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_route_honours_currency_override() {
    let router = market_router(build_service());

    let response = router
        .oneshot(get("/api/v1/listings/tir-002?currency=all"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["price_label"], "120,000 ALL");
    assert_eq!(body["category_label"], "Apartament");
}

#[tokio::test]
async fn neighborhoods_route_sorts_by_growth() {
    let router = market_router(build_service());

    let response = router
        .oneshot(get("/api/v1/neighborhoods?sort=growth"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let results = body["results"].as_array().expect("results array");
    assert_eq!(results[0]["id"], "liqeni-i-thate");
    assert_eq!(results.last().map(|last| &last["id"]), Some(&serde_json::json!("kombinat")));
    assert_eq!(body["stats"]["count"], 5);
}

#[tokio::test]
async fn neighborhoods_route_rejects_unknown_sort_key() {
    let router = market_router(build_service());

    let response = router
        .oneshot(get("/api/v1/neighborhoods?sort=newest"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn snapshot_route_reports_state() {
    let response = market_router(build_service())
        .oneshot(get("/api/v1/market/snapshot"))
        .await
        .expect("route executes");
    let body = json_body(response).await;
    assert_eq!(body["state"], "ready");
    assert_eq!(body["snapshot"]["id"], "2024-q3");
    assert_eq!(body["snapshot"]["opportunity_index"], 71);

    let response = market_router(build_empty_snapshot_service())
        .oneshot(get("/api/v1/market/snapshot"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["state"], "no_data");
}

#[tokio::test]
async fn sources_route_lists_loaded_sources() {
    let response = market_router(build_service())
        .oneshot(get("/api/v1/sources"))
        .await
        .expect("route executes");
    let body = json_body(response).await;
    let sources = body.as_array().expect("sources array");
    assert_eq!(sources.len(), 3);
    assert_eq!(sources[0]["source"], "MerrJep");
}

#[tokio::test]
async fn snapshot_handler_reports_unavailable_store() {
    use crate::market::snapshot::JsonFileSnapshotStore;
    use crate::market::{DisplayContext, ListingCatalog, MarketService};
    use axum::extract::State;
    use std::sync::Arc;

    let service = Arc::new(MarketService::new(
        Arc::new(ListingCatalog::standard()),
        Arc::new(JsonFileSnapshotStore::new("/nonexistent/snapshots.json")),
        DisplayContext::default(),
    ));

    let response =
        crate::market::router::snapshot_handler::<JsonFileSnapshotStore>(State(service)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["state"], "unavailable");
    assert!(body["reason"]
        .as_str()
        .is_some_and(|reason| reason.contains("unreadable")));
}

#[tokio::test]
async fn four_plus_rooms_survive_query_string_decoding() {
    for uri in [
        "/api/v1/listings?rooms=4+",
        "/api/v1/listings?rooms=4%2B",
        "/api/v1/listings?rooms=4%2B&property_type=house",
    ] {
        let response = market_router(build_service())
            .oneshot(get(uri))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let ids: Vec<&str> = body["results"]
            .as_array()
            .expect("results array")
            .iter()
            .filter_map(|item| item["id"].as_str())
            .collect();
        assert_eq!(ids, vec!["tir-003", "vlo-001"], "{uri}");
    }
}

#[tokio::test]
async fn uppercase_all_room_selector_keeps_everything() {
    let response = market_router(build_service())
        .oneshot(get("/api/v1/listings?rooms=ALL"))
        .await
        .expect("route executes");
    let body = json_body(response).await;
    assert_eq!(
        body["results"].as_array().map(Vec::len),
        Some(crate::market::ListingCatalog::standard().listings().len())
    );
}

use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::market::domain::{
    Listing, ListingId, LocalizedText, NeighborhoodId, NeighborhoodProfile, PropertyCategory,
};
use crate::market::snapshot::{standard_snapshots, InMemorySnapshotStore};
use crate::market::{DisplayContext, ListingCatalog, MarketService};

pub(super) fn listing(
    id: &str,
    price: u64,
    size: f64,
    rooms: u32,
    category: PropertyCategory,
    location: &str,
) -> Listing {
    Listing {
        id: ListingId(id.to_string()),
        title: LocalizedText::new(format!("Pronë {id}"), format!("Property {id}")),
        price,
        size,
        rooms,
        location: location.to_string(),
        category,
        image: format!("/images/{id}.jpg"),
        source: "MerrJep".to_string(),
        source_url: format!("https://www.merrjep.al/njoftim/{id}"),
    }
}

pub(super) fn neighborhood(
    id: &str,
    name: (&str, &str),
    description: (&str, &str),
    avg_price: u32,
    price_change: f64,
) -> NeighborhoodProfile {
    NeighborhoodProfile {
        id: NeighborhoodId(id.to_string()),
        name: LocalizedText::new(name.0, name.1),
        description: LocalizedText::new(description.0, description.1),
        avg_price,
        price_change,
        property_types: Vec::new(),
        amenities: Vec::new(),
        commute_times: Vec::new(),
        price_history: Vec::new(),
    }
}

/// Mixed collection covering every category and a spread of prices.
pub(super) fn mixed_listings() -> Vec<Listing> {
    vec![
        listing("a", 120_000, 85.0, 2, PropertyCategory::Apartment, "Tiranë, Bllok"),
        listing("b", 350_000, 1_200.0, 0, PropertyCategory::Land, "Durrës, Plazh"),
        listing("c", 95_000, 60.0, 1, PropertyCategory::Apartment, "Vlorë, Skelë"),
        listing("d", 420_000, 210.0, 4, PropertyCategory::House, "Vlorë, Lungomare"),
        listing("e", 120_000, 140.0, 3, PropertyCategory::Commercial, "Tiranë, Qendër"),
        listing("f", 640_000, 320.0, 5, PropertyCategory::House, "Tiranë, Kodra e Diellit"),
    ]
}

pub(super) fn ids(listings: &[&Listing]) -> Vec<String> {
    listings.iter().map(|listing| listing.id.0.clone()).collect()
}

pub(super) fn build_service() -> Arc<MarketService<InMemorySnapshotStore>> {
    Arc::new(MarketService::new(
        Arc::new(ListingCatalog::standard()),
        Arc::new(InMemorySnapshotStore::new(standard_snapshots())),
        DisplayContext::default(),
    ))
}

pub(super) fn build_empty_snapshot_service() -> Arc<MarketService<InMemorySnapshotStore>> {
    Arc::new(MarketService::new(
        Arc::new(ListingCatalog::standard()),
        Arc::new(InMemorySnapshotStore::default()),
        DisplayContext::default(),
    ))
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json body")
}

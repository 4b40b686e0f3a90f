//! Listing search, neighborhood ranking and market snapshots.

pub mod catalog;
pub mod criteria;
pub mod domain;
mod filter;
mod fixtures;
pub mod import;
pub mod router;
pub mod service;
pub mod snapshot;
pub mod sort;
pub mod sources;
pub mod stats;
pub mod view;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, ListingCatalog};
pub use criteria::{
    AdvancedFilters, CategorySelector, FilterCriteria, FloorLevel, ListingQuery, ListingStatus,
    NeighborhoodQuery, PriceRange, RoomSelector, SizeRange, ValueRange,
};
pub use domain::{
    Language, Listing, ListingId, LocalizedText, NeighborhoodId, NeighborhoodProfile,
    PropertyCategory,
};
pub use filter::{filter_listings, search_neighborhoods};
pub use import::CatalogImporter;
pub use router::market_router;
pub use service::{ListingSearchResponse, MarketService, NeighborhoodSearchResponse};
pub use sort::{ListingSort, NeighborhoodSort};
pub use sources::SourceSummary;
pub use stats::{ListingStats, NeighborhoodStats};
pub use view::{Currency, DisplayContext, ListingView, NeighborhoodView};

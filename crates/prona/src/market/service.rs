use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::catalog::ListingCatalog;
use super::criteria::{FilterCriteria, ListingQuery, NeighborhoodQuery};
use super::domain::ListingId;
use super::snapshot::{MarketSnapshotService, SnapshotState, SnapshotStore};
use super::sources::SourceSummary;
use super::stats::{ListingStats, NeighborhoodStats};
use super::view::{DisplayContext, ListingView, NeighborhoodView};

/// Filtered listings, projected for display, with headline statistics.
#[derive(Debug, Clone, Serialize)]
pub struct ListingSearchResponse {
    pub results: Vec<ListingView>,
    pub stats: ListingStats,
    /// Advanced fields that were accepted but have no effect on the result.
    pub unapplied_filters: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NeighborhoodSearchResponse {
    pub results: Vec<NeighborhoodView>,
    pub stats: NeighborhoodStats,
}

/// Read-side service composing the catalog, the snapshot store and the
/// configured display defaults.
pub struct MarketService<S> {
    catalog: Arc<ListingCatalog>,
    snapshots: MarketSnapshotService<S>,
    display: DisplayContext,
}

impl<S> MarketService<S>
where
    S: SnapshotStore + 'static,
{
    pub fn new(catalog: Arc<ListingCatalog>, snapshots: Arc<S>, display: DisplayContext) -> Self {
        Self {
            catalog,
            snapshots: MarketSnapshotService::new(snapshots),
            display,
        }
    }

    pub fn catalog(&self) -> &ListingCatalog {
        &self.catalog
    }

    pub fn display(&self) -> DisplayContext {
        self.display
    }

    pub fn search_listings(&self, query: &ListingQuery) -> ListingSearchResponse {
        let criteria = query.to_criteria();
        let context = self.display.with_overrides(query.lang, query.currency);
        self.search_with_criteria(&criteria, context)
    }

    pub fn search_with_criteria(
        &self,
        criteria: &FilterCriteria,
        context: DisplayContext,
    ) -> ListingSearchResponse {
        let unapplied_filters = criteria.unapplied_fields();
        if !unapplied_filters.is_empty() {
            debug!(fields = ?unapplied_filters, "advanced filters accepted without effect");
        }

        let matched = self.catalog.search_listings(criteria);
        debug!(
            matched = matched.len(),
            total = self.catalog.listings().len(),
            sort = ?criteria.sort,
            "listing search evaluated"
        );

        ListingSearchResponse {
            stats: ListingStats::from_listings(matched.iter().copied()),
            results: matched
                .into_iter()
                .map(|listing| ListingView::project(listing, context))
                .collect(),
            unapplied_filters,
        }
    }

    pub fn listing(&self, id: &ListingId, context: DisplayContext) -> Option<ListingView> {
        self.catalog
            .listing(id)
            .map(|listing| ListingView::project(listing, context))
    }

    pub fn search_neighborhoods(&self, query: &NeighborhoodQuery) -> NeighborhoodSearchResponse {
        let context = self.display.with_overrides(query.lang, query.currency);
        let search = query.search.as_deref().unwrap_or_default();
        let sort = query.sort.unwrap_or_default();

        let matched = self.catalog.search_neighborhoods(search, sort);
        debug!(
            matched = matched.len(),
            total = self.catalog.neighborhoods().len(),
            ?sort,
            "neighborhood search evaluated"
        );

        NeighborhoodSearchResponse {
            stats: NeighborhoodStats::from_neighborhoods(matched.iter().copied()),
            results: matched
                .into_iter()
                .map(|neighborhood| NeighborhoodView::project(neighborhood, context))
                .collect(),
        }
    }

    pub fn snapshot(&self) -> SnapshotState {
        self.snapshots.current()
    }

    pub fn sources(&self) -> Vec<SourceSummary> {
        SourceSummary::from_listings(self.catalog.listings())
    }
}

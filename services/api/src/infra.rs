use metrics_exporter_prometheus::PrometheusHandle;
use prona::config::AppConfig;
use prona::error::AppError;
use prona::market::criteria::{FloorLevel, ListingStatus};
use prona::market::snapshot::{
    standard_snapshots, InMemorySnapshotStore, JsonFileSnapshotStore, MarketSnapshot,
    SnapshotError, SnapshotStore,
};
use prona::market::{
    CatalogImporter, Currency, Language, ListingSort, MarketService, NeighborhoodSort,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Snapshot backend chosen at start-up: a JSON export when configured,
/// otherwise the seeded in-memory records.
#[derive(Debug, Clone)]
pub(crate) enum ConfiguredSnapshotStore {
    Seeded(InMemorySnapshotStore),
    File(JsonFileSnapshotStore),
}

impl ConfiguredSnapshotStore {
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        match &config.data.snapshot_path {
            Some(path) => {
                info!(path = %path.display(), "reading market snapshots from file");
                Self::File(JsonFileSnapshotStore::new(path.clone()))
            }
            None => Self::Seeded(InMemorySnapshotStore::new(standard_snapshots())),
        }
    }
}

impl SnapshotStore for ConfiguredSnapshotStore {
    fn latest(&self) -> Result<Option<MarketSnapshot>, SnapshotError> {
        match self {
            Self::Seeded(store) => store.latest(),
            Self::File(store) => store.latest(),
        }
    }
}

pub(crate) type ApiMarketService = MarketService<ConfiguredSnapshotStore>;

pub(crate) fn build_market_service(config: &AppConfig) -> Result<Arc<ApiMarketService>, AppError> {
    let catalog = CatalogImporter::load(
        config.data.listings_csv.as_deref(),
        config.data.neighborhoods_json.as_deref(),
    )?;
    let store = ConfiguredSnapshotStore::from_config(config);

    Ok(Arc::new(MarketService::new(
        Arc::new(catalog),
        Arc::new(store),
        config.display,
    )))
}

pub(crate) fn parse_listing_sort(raw: &str) -> Result<ListingSort, String> {
    ListingSort::parse(raw).ok_or_else(|| {
        format!("unknown sort '{raw}' (expected default, low-high, high-low, size, price-per-area)")
    })
}

pub(crate) fn parse_neighborhood_sort(raw: &str) -> Result<NeighborhoodSort, String> {
    NeighborhoodSort::parse(raw).ok_or_else(|| {
        format!("unknown sort '{raw}' (expected default, low-high, high-low, growth)")
    })
}

pub(crate) fn parse_language(raw: &str) -> Result<Language, String> {
    Language::parse(raw).ok_or_else(|| format!("unknown language '{raw}' (expected sq or en)"))
}

pub(crate) fn parse_currency(raw: &str) -> Result<Currency, String> {
    Currency::parse(raw).ok_or_else(|| format!("unknown currency '{raw}' (expected eur or all)"))
}

pub(crate) fn parse_floor(raw: &str) -> Result<FloorLevel, String> {
    FloorLevel::parse(raw)
        .ok_or_else(|| format!("unknown floor '{raw}' (expected ground, low, middle, high)"))
}

pub(crate) fn parse_status(raw: &str) -> Result<ListingStatus, String> {
    ListingStatus::parse(raw).ok_or_else(|| {
        format!("unknown status '{raw}' (expected for-sale, for-rent, new-construction)")
    })
}

//! Aggregate market snapshot: the single most recent record of headline
//! statistics, fetched from a store that may hold nothing yet.

mod service;
mod store;

pub use service::{MarketSnapshotService, SnapshotState};
pub use store::{InMemorySnapshotStore, JsonFileSnapshotStore, SnapshotError, SnapshotStore};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketSentiment {
    Bullish,
    Neutral,
    Bearish,
}

impl MarketSentiment {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::Neutral => "Neutral",
            Self::Bearish => "Bearish",
        }
    }
}

/// Composite 0–100 attractiveness score, supplied by the data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct OpportunityIndex(u8);

impl OpportunityIndex {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for OpportunityIndex {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("opportunity index {value} exceeds 100"))
    }
}

impl From<OpportunityIndex> for u8 {
    fn from(value: OpportunityIndex) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub id: String,
    pub date: NaiveDate,
    /// Average asking price per m² across the market.
    pub avg_price_per_sqm: u32,
    pub total_listings: u32,
    pub quarterly_change: f64,
    pub yearly_change: f64,
    pub most_active_region: String,
    #[serde(default)]
    pub growth_regions: Vec<String>,
    pub sentiment: MarketSentiment,
    pub opportunity_index: OpportunityIndex,
}

/// Snapshot records seeded into the in-memory store for demos and tests.
pub fn standard_snapshots() -> Vec<MarketSnapshot> {
    let record = |id: &str,
                  (year, month, day): (i32, u32, u32),
                  (avg_price_per_sqm, total_listings): (u32, u32),
                  (quarterly_change, yearly_change): (f64, f64),
                  sentiment: MarketSentiment,
                  opportunity: u8| {
        NaiveDate::from_ymd_opt(year, month, day).map(|date| MarketSnapshot {
            id: id.to_string(),
            date,
            avg_price_per_sqm,
            total_listings,
            quarterly_change,
            yearly_change,
            most_active_region: "Tiranë".to_string(),
            growth_regions: vec![
                "Tiranë".to_string(),
                "Durrës".to_string(),
                "Vlorë".to_string(),
            ],
            sentiment,
            opportunity_index: OpportunityIndex(opportunity.min(OpportunityIndex::MAX)),
        })
    };

    [
        record(
            "2024-q2",
            (2024, 6, 30),
            (1_480, 11_820),
            (2.9, 10.4),
            MarketSentiment::Neutral,
            64,
        ),
        record(
            "2024-q3",
            (2024, 9, 30),
            (1_540, 12_310),
            (3.4, 11.8),
            MarketSentiment::Bullish,
            71,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

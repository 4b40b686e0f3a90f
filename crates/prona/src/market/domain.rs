use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a listing inside the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub String);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable identifier of a neighborhood profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeighborhoodId(pub String);

impl fmt::Display for NeighborhoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display language. Albanian is the primary language of every record,
/// English the fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "sq")]
    Albanian,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sq" | "al" | "albanian" => Some(Self::Albanian),
            "en" | "english" => Some(Self::English),
            _ => None,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Albanian => "sq",
            Self::English => "en",
        }
    }
}

/// Primary (Albanian) and fallback (English) rendition of the same text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub sq: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(sq: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            sq: sq.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Albanian => &self.sq,
            Language::English => &self.en,
        }
    }

    /// Case-insensitive substring match against both renditions. `needle`
    /// must already be lower-cased.
    pub(crate) fn contains_lowercase(&self, needle: &str) -> bool {
        self.sq.to_lowercase().contains(needle) || self.en.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCategory {
    Apartment,
    House,
    Land,
    Commercial,
}

impl PropertyCategory {
    pub const fn ordered() -> [Self; 4] {
        [Self::Apartment, Self::House, Self::Land, Self::Commercial]
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "apartment" => Some(Self::Apartment),
            "house" => Some(Self::House),
            "land" => Some(Self::Land),
            "commercial" => Some(Self::Commercial),
            _ => None,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
            Self::Land => "land",
            Self::Commercial => "commercial",
        }
    }

    pub const fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Apartment, Language::Albanian) => "Apartament",
            (Self::Apartment, Language::English) => "Apartment",
            (Self::House, Language::Albanian) => "Shtëpi",
            (Self::House, Language::English) => "House",
            (Self::Land, Language::Albanian) => "Tokë",
            (Self::Land, Language::English) => "Land",
            (Self::Commercial, Language::Albanian) => "Ambient komercial",
            (Self::Commercial, Language::English) => "Commercial",
        }
    }

    /// Land parcels have no rooms; their room count is carried as zero.
    pub const fn has_rooms(self) -> bool {
        !matches!(self, Self::Land)
    }
}

/// A single property offered for sale or rent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: LocalizedText,
    /// Asking price in whole currency units.
    pub price: u64,
    /// Floor (or plot) area in square meters.
    pub size: f64,
    pub rooms: u32,
    pub location: String,
    pub category: PropertyCategory,
    pub image: String,
    pub source: String,
    pub source_url: String,
}

impl Listing {
    pub fn price_per_sqm(&self) -> f64 {
        if self.size > 0.0 {
            self.price as f64 / self.size
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyTypeShare {
    pub label: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmenityCategory {
    Education,
    Healthcare,
    Shopping,
    Recreation,
    Transport,
    Dining,
}

/// Amenity rating on a 0–5 scale. Ratings are display-only and never
/// range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub category: AmenityCategory,
    pub name: LocalizedText,
    pub rating: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommuteMode {
    Car,
    Bus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommuteTime {
    pub destination: LocalizedText,
    pub minutes: u32,
    pub mode: CommuteMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub year: String,
    pub price: u32,
}

/// Descriptive and statistical profile of a named sub-area of a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodProfile {
    pub id: NeighborhoodId,
    pub name: LocalizedText,
    pub description: LocalizedText,
    /// Average asking price per square meter.
    pub avg_price: u32,
    /// Signed year-over-year price change, in percent.
    pub price_change: f64,
    #[serde(default)]
    pub property_types: Vec<PropertyTypeShare>,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[serde(default)]
    pub commute_times: Vec<CommuteTime>,
    #[serde(default)]
    pub price_history: Vec<PricePoint>,
}

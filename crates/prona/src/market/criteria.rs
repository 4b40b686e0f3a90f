use super::domain::{Language, PropertyCategory};
use super::sort::{ListingSort, NeighborhoodSort};
use super::view::Currency;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Inclusive `[min, max]` bound on a numeric listing attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> ValueRange<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

pub type PriceRange = ValueRange<u64>;
pub type SizeRange = ValueRange<f64>;

impl PriceRange {
    pub const fn unbounded() -> Self {
        Self {
            min: 0,
            max: u64::MAX,
        }
    }
}

impl SizeRange {
    pub const fn unbounded() -> Self {
        Self {
            min: 0.0,
            max: f64::MAX,
        }
    }
}

/// Room count constraint as selected by the user.
///
/// A selector that does not parse never raises: it matches no listing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomSelector {
    #[default]
    All,
    FourOrMore,
    Exact(u32),
    Unparsable(String),
}

impl RoomSelector {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        // A `+` left unescaped in a query string decodes to a space.
        if trimmed == "4+" || (trimmed == "4" && raw.trim_start().starts_with("4 ")) {
            return Self::FourOrMore;
        }

        match trimmed {
            "" => Self::All,
            all if all.eq_ignore_ascii_case("all") => Self::All,
            other => other
                .parse::<u32>()
                .map(Self::Exact)
                .unwrap_or_else(|_| Self::Unparsable(other.to_string())),
        }
    }

    pub fn matches(&self, rooms: u32) -> bool {
        match self {
            Self::All => true,
            Self::FourOrMore => rooms >= 4,
            Self::Exact(expected) => rooms == *expected,
            Self::Unparsable(_) => false,
        }
    }
}

impl From<String> for RoomSelector {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<RoomSelector> for String {
    fn from(value: RoomSelector) -> Self {
        value.to_string()
    }
}

impl fmt::Display for RoomSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::FourOrMore => f.write_str("4+"),
            Self::Exact(rooms) => write!(f, "{rooms}"),
            Self::Unparsable(raw) => f.write_str(raw),
        }
    }
}

/// Category constraint. An unknown category name matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategorySelector {
    #[default]
    All,
    Only(PropertyCategory),
    Unknown(String),
}

impl CategorySelector {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Self::All;
        }

        PropertyCategory::parse(trimmed)
            .map(Self::Only)
            .unwrap_or_else(|| Self::Unknown(trimmed.to_string()))
    }

    pub fn matches(&self, category: PropertyCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => *expected == category,
            Self::Unknown(_) => false,
        }
    }
}

impl From<String> for CategorySelector {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<CategorySelector> for String {
    fn from(value: CategorySelector) -> Self {
        match value {
            CategorySelector::All => "all".to_string(),
            CategorySelector::Only(category) => category.key().to_string(),
            CategorySelector::Unknown(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorLevel {
    Ground,
    Low,
    Middle,
    High,
}

impl FloorLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ground" => Some(Self::Ground),
            "low" => Some(Self::Low),
            "middle" => Some(Self::Middle),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    ForSale,
    ForRent,
    NewConstruction,
}

impl ListingStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "for_sale" => Some(Self::ForSale),
            "for_rent" => Some(Self::ForRent),
            "new_construction" => Some(Self::NewConstruction),
            _ => None,
        }
    }
}

/// Extra constraints collected from the search form. Listings carry none of
/// these attributes, so they are kept for reporting and never evaluated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancedFilters {
    pub bathrooms: Option<u32>,
    pub year_built: Option<ValueRange<u16>>,
    pub floor: Option<FloorLevel>,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    pub status: Option<ListingStatus>,
}

impl AdvancedFilters {
    pub fn unapplied_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.bathrooms.is_some() {
            fields.push("bathrooms");
        }
        if self.year_built.is_some() {
            fields.push("year_built");
        }
        if self.floor.is_some() {
            fields.push("floor");
        }
        if !self.amenities.is_empty() {
            fields.push("amenities");
        }
        if self.status.is_some() {
            fields.push("status");
        }
        fields
    }
}

/// Every constraint that can be placed on a listing search.
///
/// `Default` is the "show all" configuration: unbounded ranges, every room
/// count, every category, no search term and input order preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub price: PriceRange,
    pub size: SizeRange,
    pub rooms: RoomSelector,
    pub category: CategorySelector,
    pub search: String,
    pub sort: ListingSort,
    pub advanced: AdvancedFilters,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            price: PriceRange::unbounded(),
            size: SizeRange::unbounded(),
            rooms: RoomSelector::All,
            category: CategorySelector::All,
            search: String::new(),
            sort: ListingSort::Default,
            advanced: AdvancedFilters::default(),
        }
    }
}

impl FilterCriteria {
    pub fn show_all() -> Self {
        Self::default()
    }

    pub fn unapplied_fields(&self) -> Vec<&'static str> {
        self.advanced.unapplied_fields()
    }

    /// Lower-cased search needle, `None` when the term is blank. A
    /// non-blank term keeps its surrounding whitespace.
    pub(crate) fn search_needle(&self) -> Option<String> {
        if self.search.trim().is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }
}

/// Flat, boundary-facing form of a listing search (HTTP query string or CLI
/// flags). Unknown keys are rejected during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListingQuery {
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_size: Option<f64>,
    pub max_size: Option<f64>,
    pub rooms: Option<String>,
    pub property_type: Option<String>,
    pub search: Option<String>,
    pub sort: Option<ListingSort>,
    pub bathrooms: Option<u32>,
    pub year_built_min: Option<u16>,
    pub year_built_max: Option<u16>,
    pub floor: Option<FloorLevel>,
    /// Comma separated amenity tags.
    pub amenities: Option<String>,
    pub status: Option<ListingStatus>,
    pub lang: Option<Language>,
    pub currency: Option<Currency>,
}

impl ListingQuery {
    pub fn to_criteria(&self) -> FilterCriteria {
        let defaults = FilterCriteria::default();

        let year_built = match (self.year_built_min, self.year_built_max) {
            (None, None) => None,
            (min, max) => Some(ValueRange::new(min.unwrap_or(0), max.unwrap_or(u16::MAX))),
        };

        let amenities = self
            .amenities
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_lowercase)
                    .collect()
            })
            .unwrap_or_default();

        FilterCriteria {
            price: ValueRange::new(
                self.min_price.unwrap_or(defaults.price.min),
                self.max_price.unwrap_or(defaults.price.max),
            ),
            size: ValueRange::new(
                self.min_size.unwrap_or(defaults.size.min),
                self.max_size.unwrap_or(defaults.size.max),
            ),
            rooms: self
                .rooms
                .as_deref()
                .map(RoomSelector::parse)
                .unwrap_or_default(),
            category: self
                .property_type
                .as_deref()
                .map(CategorySelector::parse)
                .unwrap_or_default(),
            search: self.search.clone().unwrap_or_default(),
            sort: self.sort.unwrap_or_default(),
            advanced: AdvancedFilters {
                bathrooms: self.bathrooms,
                year_built,
                floor: self.floor,
                amenities,
                status: self.status,
            },
        }
    }
}

/// Boundary-facing neighborhood search parameters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NeighborhoodQuery {
    pub search: Option<String>,
    pub sort: Option<NeighborhoodSort>,
    pub lang: Option<Language>,
    pub currency: Option<Currency>,
}

use super::domain::{
    AmenityCategory, CommuteMode, Language, Listing, ListingId, NeighborhoodId,
    NeighborhoodProfile, PricePoint, PropertyCategory, PropertyTypeShare,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Eur,
    /// Albanian lek.
    All,
}

impl Currency {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "eur" | "euro" | "€" => Some(Self::Eur),
            "all" | "lek" | "leke" => Some(Self::All),
            _ => None,
        }
    }

    pub fn format(self, amount: u64) -> String {
        let grouped = group_thousands(amount);
        match self {
            Self::Eur => format!("€{grouped}"),
            Self::All => format!("{grouped} ALL"),
        }
    }
}

/// Explicit rendering preferences handed to every projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayContext {
    pub language: Language,
    pub currency: Currency,
}

impl DisplayContext {
    pub fn new(language: Language, currency: Currency) -> Self {
        Self { language, currency }
    }

    /// Request-level overrides on top of configured defaults.
    pub fn with_overrides(self, language: Option<Language>, currency: Option<Currency>) -> Self {
        Self {
            language: language.unwrap_or(self.language),
            currency: currency.unwrap_or(self.currency),
        }
    }
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn format_area(size: f64) -> String {
    if size.fract() == 0.0 {
        format!("{size:.0} m²")
    } else {
        format!("{size:.1} m²")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingView {
    pub id: ListingId,
    pub title: String,
    pub price: u64,
    pub price_label: String,
    pub size: f64,
    pub size_label: String,
    pub price_per_sqm_label: String,
    /// Absent for land parcels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<u32>,
    pub location: String,
    pub category: PropertyCategory,
    pub category_label: &'static str,
    pub image: String,
    pub source: String,
    pub source_url: String,
}

impl ListingView {
    pub fn project(listing: &Listing, context: DisplayContext) -> Self {
        let rooms = listing.category.has_rooms().then_some(listing.rooms);
        Self {
            id: listing.id.clone(),
            title: listing.title.get(context.language).to_string(),
            price: listing.price,
            price_label: context.currency.format(listing.price),
            size: listing.size,
            size_label: format_area(listing.size),
            price_per_sqm_label: format!(
                "{}/m²",
                context.currency.format(listing.price_per_sqm().round() as u64)
            ),
            rooms,
            location: listing.location.clone(),
            category: listing.category,
            category_label: listing.category.label(context.language),
            image: listing.image.clone(),
            source: listing.source.clone(),
            source_url: listing.source_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AmenityView {
    pub category: AmenityCategory,
    pub name: String,
    pub rating: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommuteView {
    pub destination: String,
    pub minutes: u32,
    pub mode: CommuteMode,
}

#[derive(Debug, Clone, Serialize)]
pub struct NeighborhoodView {
    pub id: NeighborhoodId,
    pub name: String,
    pub description: String,
    pub avg_price: u32,
    pub avg_price_label: String,
    pub price_change: f64,
    pub price_change_label: String,
    pub property_types: Vec<PropertyTypeShare>,
    pub amenities: Vec<AmenityView>,
    pub commute_times: Vec<CommuteView>,
    pub price_history: Vec<PricePoint>,
}

impl NeighborhoodView {
    pub fn project(neighborhood: &NeighborhoodProfile, context: DisplayContext) -> Self {
        let language = context.language;
        Self {
            id: neighborhood.id.clone(),
            name: neighborhood.name.get(language).to_string(),
            description: neighborhood.description.get(language).to_string(),
            avg_price: neighborhood.avg_price,
            avg_price_label: format!(
                "{}/m²",
                context.currency.format(u64::from(neighborhood.avg_price))
            ),
            price_change: neighborhood.price_change,
            price_change_label: format!("{:+.1}%", neighborhood.price_change),
            property_types: neighborhood.property_types.clone(),
            amenities: neighborhood
                .amenities
                .iter()
                .map(|amenity| AmenityView {
                    category: amenity.category,
                    name: amenity.name.get(language).to_string(),
                    rating: amenity.rating,
                })
                .collect(),
            commute_times: neighborhood
                .commute_times
                .iter()
                .map(|commute| CommuteView {
                    destination: commute.destination.get(language).to_string(),
                    minutes: commute.minutes,
                    mode: commute.mode,
                })
                .collect(),
            price_history: neighborhood.price_history.clone(),
        }
    }
}

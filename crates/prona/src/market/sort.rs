use super::domain::{Listing, NeighborhoodProfile};
use serde::{Deserialize, Serialize};

/// Ordering applied to a filtered listing set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingSort {
    #[default]
    Default,
    LowHigh,
    HighLow,
    Size,
    PricePerArea,
}

impl ListingSort {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Self::Default),
            "low-high" => Some(Self::LowHigh),
            "high-low" => Some(Self::HighLow),
            "size" => Some(Self::Size),
            "price-per-area" => Some(Self::PricePerArea),
            _ => None,
        }
    }

    /// Sorts in place. `sort_by` is stable, so ties keep their input order.
    pub fn apply(self, listings: &mut [&Listing]) {
        match self {
            Self::Default => {}
            Self::LowHigh => listings.sort_by(|a, b| a.price.cmp(&b.price)),
            Self::HighLow => listings.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::Size => listings.sort_by(|a, b| b.size.total_cmp(&a.size)),
            Self::PricePerArea => {
                listings.sort_by(|a, b| a.price_per_sqm().total_cmp(&b.price_per_sqm()))
            }
        }
    }
}

/// Ordering applied to a filtered neighborhood set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NeighborhoodSort {
    #[default]
    Default,
    LowHigh,
    HighLow,
    Growth,
}

impl NeighborhoodSort {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Self::Default),
            "low-high" => Some(Self::LowHigh),
            "high-low" => Some(Self::HighLow),
            "growth" => Some(Self::Growth),
            _ => None,
        }
    }

    pub fn apply(self, neighborhoods: &mut [&NeighborhoodProfile]) {
        match self {
            Self::Default => {}
            Self::LowHigh => neighborhoods.sort_by(|a, b| a.avg_price.cmp(&b.avg_price)),
            Self::HighLow => neighborhoods.sort_by(|a, b| b.avg_price.cmp(&a.avg_price)),
            Self::Growth => {
                neighborhoods.sort_by(|a, b| b.price_change.total_cmp(&a.price_change))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kebab_case_keys() {
        assert_eq!(ListingSort::parse("Low-High"), Some(ListingSort::LowHigh));
        assert_eq!(
            ListingSort::parse("price-per-area"),
            Some(ListingSort::PricePerArea)
        );
        assert_eq!(NeighborhoodSort::parse("growth"), Some(NeighborhoodSort::Growth));
        assert_eq!(NeighborhoodSort::parse("newest"), None);
    }

    #[test]
    fn serde_names_match_parse() {
        let sort: ListingSort = serde_json::from_str("\"high-low\"").expect("valid key");
        assert_eq!(sort, ListingSort::HighLow);
        let sort: NeighborhoodSort = serde_json::from_str("\"low-high\"").expect("valid key");
        assert_eq!(sort, NeighborhoodSort::LowHigh);
    }
}

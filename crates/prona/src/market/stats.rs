use super::domain::{Listing, NeighborhoodProfile};
use serde::Serialize;

/// Headline figures for a filtered neighborhood set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NeighborhoodStats {
    pub count: usize,
    /// Mean of the per-neighborhood average price per m². Zero when empty.
    pub mean_avg_price: f64,
}

impl NeighborhoodStats {
    pub fn from_neighborhoods<'a, I>(neighborhoods: I) -> Self
    where
        I: IntoIterator<Item = &'a NeighborhoodProfile>,
    {
        let (count, total) = neighborhoods
            .into_iter()
            .fold((0usize, 0f64), |(count, total), neighborhood| {
                (count + 1, total + f64::from(neighborhood.avg_price))
            });

        Self {
            count,
            mean_avg_price: mean(total, count),
        }
    }
}

/// Headline figures for a filtered listing set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ListingStats {
    pub count: usize,
    pub mean_price: f64,
    pub mean_price_per_sqm: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
}

impl ListingStats {
    pub fn from_listings<'a, I>(listings: I) -> Self
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        let mut count = 0usize;
        let mut total_price = 0f64;
        let mut total_per_sqm = 0f64;
        let mut min_price: Option<u64> = None;
        let mut max_price: Option<u64> = None;

        for listing in listings {
            count += 1;
            total_price += listing.price as f64;
            total_per_sqm += listing.price_per_sqm();
            min_price = Some(min_price.map_or(listing.price, |min| min.min(listing.price)));
            max_price = Some(max_price.map_or(listing.price, |max| max.max(listing.price)));
        }

        Self {
            count,
            mean_price: mean(total_price, count),
            mean_price_per_sqm: mean(total_per_sqm, count),
            min_price,
            max_price,
        }
    }
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sets_report_zero_means() {
        let stats = NeighborhoodStats::from_neighborhoods(std::iter::empty());
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean_avg_price, 0.0);
        assert!(!stats.mean_avg_price.is_nan());

        let stats = ListingStats::from_listings(std::iter::empty());
        assert_eq!(stats.mean_price, 0.0);
        assert_eq!(stats.mean_price_per_sqm, 0.0);
        assert_eq!(stats.min_price, None);
    }
}

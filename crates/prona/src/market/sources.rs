use super::domain::{Listing, PropertyCategory};
use serde::Serialize;

/// Listings contributed by one data source, computed from the loaded catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSummary {
    pub source: String,
    pub listings: usize,
    pub categories: Vec<PropertyCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_url: Option<String>,
}

impl SourceSummary {
    /// Groups listings by source label, in order of first appearance.
    pub fn from_listings<'a, I>(listings: I) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        let mut summaries: Vec<Self> = Vec::new();

        for listing in listings {
            let index = match summaries
                .iter()
                .position(|summary| summary.source == listing.source)
            {
                Some(index) => index,
                None => {
                    summaries.push(Self {
                        source: listing.source.clone(),
                        listings: 0,
                        categories: Vec::new(),
                        sample_url: None,
                    });
                    summaries.len() - 1
                }
            };

            let summary = &mut summaries[index];
            summary.listings += 1;
            if !summary.categories.contains(&listing.category) {
                summary.categories.push(listing.category);
            }
            if summary.sample_url.is_none() && !listing.source_url.is_empty() {
                summary.sample_url = Some(listing.source_url.clone());
            }
        }

        for summary in &mut summaries {
            summary.categories.sort();
        }

        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::ListingCatalog;

    #[test]
    fn counts_every_listing_exactly_once() {
        let catalog = ListingCatalog::standard();
        let summaries = SourceSummary::from_listings(catalog.listings());

        let total: usize = summaries.iter().map(|summary| summary.listings).sum();
        assert_eq!(total, catalog.listings().len());
        assert_eq!(summaries[0].source, "MerrJep");
        assert!(summaries
            .iter()
            .all(|summary| summary.sample_url.is_some()));
    }

    #[test]
    fn categories_follow_canonical_order() {
        let catalog = ListingCatalog::standard();
        let remax = SourceSummary::from_listings(catalog.listings())
            .into_iter()
            .find(|summary| summary.source == "RE/MAX Albania")
            .expect("remax present");
        assert_eq!(
            remax.categories,
            vec![PropertyCategory::House, PropertyCategory::Land]
        );
    }
}

use super::criteria::FilterCriteria;
use super::domain::{Listing, ListingId, NeighborhoodId, NeighborhoodProfile};
use super::filter::{filter_listings, search_neighborhoods};
use super::fixtures::{standard_listings, standard_neighborhoods};
use super::sort::NeighborhoodSort;
use std::collections::HashSet;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read market data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid listing CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid neighborhood JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("listing {id} is invalid: {reason}")]
    InvalidListing { id: ListingId, reason: &'static str },
    #[error("listing {0} appears more than once")]
    DuplicateListing(ListingId),
    #[error("neighborhood {0} appears more than once")]
    DuplicateNeighborhood(NeighborhoodId),
}

/// Read-only record store. Built once, then only borrowed.
#[derive(Debug, Clone)]
pub struct ListingCatalog {
    listings: Vec<Listing>,
    neighborhoods: Vec<NeighborhoodProfile>,
}

impl ListingCatalog {
    /// Compiled-in market fixture.
    pub fn standard() -> Self {
        Self {
            listings: standard_listings(),
            neighborhoods: standard_neighborhoods(),
        }
    }

    pub fn new(
        listings: Vec<Listing>,
        neighborhoods: Vec<NeighborhoodProfile>,
    ) -> Result<Self, CatalogError> {
        validate_listings(&listings)?;

        let mut seen = HashSet::new();
        for neighborhood in &neighborhoods {
            if !seen.insert(&neighborhood.id) {
                return Err(CatalogError::DuplicateNeighborhood(neighborhood.id.clone()));
            }
        }

        Ok(Self {
            listings,
            neighborhoods,
        })
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn neighborhoods(&self) -> &[NeighborhoodProfile] {
        &self.neighborhoods
    }

    pub fn listing(&self, id: &ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| &listing.id == id)
    }

    pub fn search_listings(&self, criteria: &FilterCriteria) -> Vec<&Listing> {
        filter_listings(&self.listings, criteria)
    }

    pub fn search_neighborhoods(
        &self,
        search: &str,
        sort: NeighborhoodSort,
    ) -> Vec<&NeighborhoodProfile> {
        search_neighborhoods(&self.neighborhoods, search, sort)
    }
}

fn validate_listings(listings: &[Listing]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for listing in listings {
        if listing.price == 0 {
            return Err(CatalogError::InvalidListing {
                id: listing.id.clone(),
                reason: "price must be greater than zero",
            });
        }
        if listing.size.is_nan() || listing.size <= 0.0 {
            return Err(CatalogError::InvalidListing {
                id: listing.id.clone(),
                reason: "size must be greater than zero",
            });
        }
        if !seen.insert(&listing.id) {
            return Err(CatalogError::DuplicateListing(listing.id.clone()));
        }
    }
    Ok(())
}

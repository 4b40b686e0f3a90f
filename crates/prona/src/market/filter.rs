use super::criteria::FilterCriteria;
use super::domain::{Listing, NeighborhoodProfile};
use super::sort::NeighborhoodSort;

impl FilterCriteria {
    /// Evaluates every predicate against `listing`. All predicates must hold.
    pub fn matches(&self, listing: &Listing) -> bool {
        let needle = self.search_needle();
        self.matches_with_needle(listing, needle.as_deref())
    }

    fn matches_with_needle(&self, listing: &Listing, needle: Option<&str>) -> bool {
        self.price.contains(listing.price)
            && self.size.contains(listing.size)
            && self.category.matches(listing.category)
            && self.rooms.matches(listing.rooms)
            && needle.map_or(true, |needle| listing_contains(listing, needle))
    }
}

fn listing_contains(listing: &Listing, needle: &str) -> bool {
    listing.title.contains_lowercase(needle) || listing.location.to_lowercase().contains(needle)
}

/// Keeps the listings matching `criteria`, then orders them by its sort key.
/// The result borrows from the input and never contains anything else.
pub fn filter_listings<'a, I>(listings: I, criteria: &FilterCriteria) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let needle = criteria.search_needle();
    let mut matched: Vec<&Listing> = listings
        .into_iter()
        .filter(|listing| criteria.matches_with_needle(listing, needle.as_deref()))
        .collect();
    criteria.sort.apply(&mut matched);
    matched
}

/// Keeps neighborhoods whose names or descriptions contain `search`
/// (case-insensitive), then applies `sort`.
pub fn search_neighborhoods<'a, I>(
    neighborhoods: I,
    search: &str,
    sort: NeighborhoodSort,
) -> Vec<&'a NeighborhoodProfile>
where
    I: IntoIterator<Item = &'a NeighborhoodProfile>,
{
    let blank = search.trim().is_empty();
    let needle = search.to_lowercase();
    let mut matched: Vec<&NeighborhoodProfile> = neighborhoods
        .into_iter()
        .filter(|neighborhood| {
            blank
                || neighborhood.name.contains_lowercase(&needle)
                || neighborhood.description.contains_lowercase(&needle)
        })
        .collect();
    sort.apply(&mut matched);
    matched
}

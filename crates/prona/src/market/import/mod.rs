mod parser;

use super::catalog::{CatalogError, ListingCatalog};
use super::domain::{Listing, NeighborhoodProfile};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Loads catalog records from CSV (listings) and JSON (neighborhoods) exports.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn listings_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Listing>, CatalogError> {
        let file = File::open(path)?;
        Self::listings_from_reader(file)
    }

    pub fn listings_from_reader<R: Read>(reader: R) -> Result<Vec<Listing>, CatalogError> {
        Ok(parser::parse_listings(reader)?)
    }

    pub fn neighborhoods_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<NeighborhoodProfile>, CatalogError> {
        let file = File::open(path)?;
        Self::neighborhoods_from_reader(BufReader::new(file))
    }

    pub fn neighborhoods_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<NeighborhoodProfile>, CatalogError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Builds a catalog, replacing each fixture collection whose export path
    /// is provided.
    pub fn load(
        listings_csv: Option<&Path>,
        neighborhoods_json: Option<&Path>,
    ) -> Result<ListingCatalog, CatalogError> {
        let standard = ListingCatalog::standard();

        let listings = match listings_csv {
            Some(path) => {
                let listings = Self::listings_from_path(path)?;
                info!(path = %path.display(), count = listings.len(), "imported listings");
                listings
            }
            None => standard.listings().to_vec(),
        };

        let neighborhoods = match neighborhoods_json {
            Some(path) => {
                let neighborhoods = Self::neighborhoods_from_path(path)?;
                info!(
                    path = %path.display(),
                    count = neighborhoods.len(),
                    "imported neighborhoods"
                );
                neighborhoods
            }
            None => standard.neighborhoods().to_vec(),
        };

        ListingCatalog::new(listings, neighborhoods)
    }
}

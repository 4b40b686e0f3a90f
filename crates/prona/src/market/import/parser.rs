use crate::market::domain::{Listing, ListingId, LocalizedText, PropertyCategory};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_listings<R: Read>(reader: R) -> Result<Vec<Listing>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut listings = Vec::new();

    for record in csv_reader.deserialize::<ListingRow>() {
        listings.push(record?.into_listing());
    }

    Ok(listings)
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    id: String,
    title_sq: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    title_en: Option<String>,
    price: u64,
    size: f64,
    #[serde(default)]
    rooms: Option<u32>,
    location: String,
    category: PropertyCategory,
    #[serde(default)]
    image: String,
    source: String,
    #[serde(default)]
    source_url: String,
}

impl ListingRow {
    fn into_listing(self) -> Listing {
        let title_en = self.title_en.unwrap_or_else(|| self.title_sq.clone());
        let rooms = if self.category.has_rooms() {
            self.rooms.unwrap_or(0)
        } else {
            0
        };

        Listing {
            id: ListingId(self.id),
            title: LocalizedText::new(self.title_sq, title_en),
            price: self.price,
            size: self.size,
            rooms,
            location: self.location,
            category: self.category,
            image: self.image,
            source: self.source,
            source_url: self.source_url,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str =
        "id,title_sq,title_en,price,size,rooms,location,category,image,source,source_url\n";

    #[test]
    fn falls_back_to_primary_title_when_english_missing() {
        let csv = format!(
            "{HEADER}x-1,Apartament i ri,,90000,70,2,\"Tiranë, Ali Demi\",apartment,,MerrJep,\n"
        );
        let listings = parse_listings(Cursor::new(csv)).expect("csv parses");
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title.en, "Apartament i ri");
        assert_eq!(listings[0].location, "Tiranë, Ali Demi");
    }

    #[test]
    fn land_rows_drop_room_counts() {
        let csv = format!(
            "{HEADER}x-2,Truall,Plot,150000,800,3,Golem,land,,RE/MAX Albania,https://example.al/x-2\n"
        );
        let listings = parse_listings(Cursor::new(csv)).expect("csv parses");
        assert_eq!(listings[0].rooms, 0);
        assert_eq!(listings[0].category, PropertyCategory::Land);
    }

    #[test]
    fn unknown_category_is_a_csv_error() {
        let csv = format!("{HEADER}x-3,Kështjellë,Castle,1,1,1,Berat,castle,,Owner,\n");
        assert!(parse_listings(Cursor::new(csv)).is_err());
    }
}

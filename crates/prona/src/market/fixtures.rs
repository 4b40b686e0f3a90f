use super::domain::{
    Amenity, AmenityCategory, CommuteMode, CommuteTime, Listing, ListingId, LocalizedText,
    NeighborhoodId, NeighborhoodProfile, PricePoint, PropertyCategory, PropertyTypeShare,
};

struct ListingSeed {
    id: &'static str,
    title_sq: &'static str,
    title_en: &'static str,
    price: u64,
    size: f64,
    rooms: u32,
    location: &'static str,
    category: PropertyCategory,
    image: &'static str,
    source: &'static str,
    source_url: &'static str,
}

const LISTING_SEEDS: &[ListingSeed] = &[
    ListingSeed {
        id: "tir-001",
        title_sq: "Apartament 2+1 në Bllok",
        title_en: "2-bedroom apartment in Blloku",
        price: 185_000,
        size: 95.0,
        rooms: 2,
        location: "Tiranë, Bllok",
        category: PropertyCategory::Apartment,
        image: "/images/listings/tir-001.jpg",
        source: "MerrJep",
        source_url: "https://www.merrjep.al/njoftim/tir-001",
    },
    ListingSeed {
        id: "tir-002",
        title_sq: "Apartament 1+1 pranë Liqenit Artificial",
        title_en: "1-bedroom apartment near the Artificial Lake",
        price: 120_000,
        size: 62.0,
        rooms: 1,
        location: "Tiranë, Liqeni i Thatë",
        category: PropertyCategory::Apartment,
        image: "/images/listings/tir-002.jpg",
        source: "Century 21 Albania",
        source_url: "https://www.century21albania.com/property/tir-002",
    },
    ListingSeed {
        id: "tir-003",
        title_sq: "Vilë me oborr në Kodrën e Diellit",
        title_en: "Villa with garden at Sun Hill",
        price: 640_000,
        size: 320.0,
        rooms: 5,
        location: "Tiranë, Kodra e Diellit",
        category: PropertyCategory::House,
        image: "/images/listings/tir-003.jpg",
        source: "RE/MAX Albania",
        source_url: "https://www.remax-albania.com/listing/tir-003",
    },
    ListingSeed {
        id: "tir-004",
        title_sq: "Ambient biznesi në Rrugën e Kavajës",
        title_en: "Commercial unit on Kavaja Street",
        price: 210_000,
        size: 140.0,
        rooms: 3,
        location: "Tiranë, Rruga e Kavajës",
        category: PropertyCategory::Commercial,
        image: "/images/listings/tir-004.jpg",
        source: "MerrJep",
        source_url: "https://www.merrjep.al/njoftim/tir-004",
    },
    ListingSeed {
        id: "tir-005",
        title_sq: "Apartament 3+1 në Komunën e Parisit",
        title_en: "3-bedroom apartment in Komuna e Parisit",
        price: 165_000,
        size: 118.0,
        rooms: 3,
        location: "Tiranë, Komuna e Parisit",
        category: PropertyCategory::Apartment,
        image: "/images/listings/tir-005.jpg",
        source: "Century 21 Albania",
        source_url: "https://www.century21albania.com/property/tir-005",
    },
    ListingSeed {
        id: "dur-001",
        title_sq: "Apartament me pamje nga deti",
        title_en: "Sea view apartment",
        price: 98_000,
        size: 74.0,
        rooms: 2,
        location: "Durrës, Plazh",
        category: PropertyCategory::Apartment,
        image: "/images/listings/dur-001.jpg",
        source: "MerrJep",
        source_url: "https://www.merrjep.al/njoftim/dur-001",
    },
    ListingSeed {
        id: "dur-002",
        title_sq: "Truall për ndërtim në Shkozet",
        title_en: "Building plot in Shkozet",
        price: 350_000,
        size: 1_200.0,
        rooms: 0,
        location: "Durrës, Shkozet",
        category: PropertyCategory::Land,
        image: "/images/listings/dur-002.jpg",
        source: "RE/MAX Albania",
        source_url: "https://www.remax-albania.com/listing/dur-002",
    },
    ListingSeed {
        id: "vlo-001",
        title_sq: "Shtëpi dykatëshe në Lungomare",
        title_en: "Two-storey house on the Lungomare",
        price: 420_000,
        size: 210.0,
        rooms: 4,
        location: "Vlorë, Lungomare",
        category: PropertyCategory::House,
        image: "/images/listings/vlo-001.jpg",
        source: "Century 21 Albania",
        source_url: "https://www.century21albania.com/property/vlo-001",
    },
    ListingSeed {
        id: "sar-001",
        title_sq: "Studio pranë portit",
        title_en: "Studio near the port",
        price: 72_000,
        size: 41.5,
        rooms: 1,
        location: "Sarandë, Qendër",
        category: PropertyCategory::Apartment,
        image: "/images/listings/sar-001.jpg",
        source: "MerrJep",
        source_url: "https://www.merrjep.al/njoftim/sar-001",
    },
    ListingSeed {
        id: "shk-001",
        title_sq: "Tokë bujqësore pranë liqenit",
        title_en: "Farmland near the lake",
        price: 45_000,
        size: 5_000.0,
        rooms: 0,
        location: "Shkodër, Shiroka",
        category: PropertyCategory::Land,
        image: "/images/listings/shk-001.jpg",
        source: "RE/MAX Albania",
        source_url: "https://www.remax-albania.com/listing/shk-001",
    },
];

pub(crate) fn standard_listings() -> Vec<Listing> {
    LISTING_SEEDS
        .iter()
        .map(|seed| Listing {
            id: ListingId(seed.id.to_string()),
            title: LocalizedText::new(seed.title_sq, seed.title_en),
            price: seed.price,
            size: seed.size,
            rooms: seed.rooms,
            location: seed.location.to_string(),
            category: seed.category,
            image: seed.image.to_string(),
            source: seed.source.to_string(),
            source_url: seed.source_url.to_string(),
        })
        .collect()
}

fn text(sq: &str, en: &str) -> LocalizedText {
    LocalizedText::new(sq, en)
}

fn shares(entries: &[(&str, f64)]) -> Vec<PropertyTypeShare> {
    entries
        .iter()
        .map(|(label, percentage)| PropertyTypeShare {
            label: label.to_string(),
            percentage: *percentage,
        })
        .collect()
}

fn history(entries: &[(&str, u32)]) -> Vec<PricePoint> {
    entries
        .iter()
        .map(|(year, price)| PricePoint {
            year: year.to_string(),
            price: *price,
        })
        .collect()
}

fn amenity(category: AmenityCategory, sq: &str, en: &str, rating: f32) -> Amenity {
    Amenity {
        category,
        name: text(sq, en),
        rating,
    }
}

fn commute(sq: &str, en: &str, minutes: u32, mode: CommuteMode) -> CommuteTime {
    CommuteTime {
        destination: text(sq, en),
        minutes,
        mode,
    }
}

pub(crate) fn standard_neighborhoods() -> Vec<NeighborhoodProfile> {
    vec![
        NeighborhoodProfile {
            id: NeighborhoodId("blloku".to_string()),
            name: text("Blloku", "Blloku"),
            description: text(
                "Zona më e gjallë e Tiranës me kafene, restorante dhe jetë nate.",
                "Tirana's liveliest district with cafes, restaurants and nightlife.",
            ),
            avg_price: 2_450,
            price_change: 12.5,
            property_types: shares(&[("Apartament", 78.0), ("Komercial", 18.0), ("Shtëpi", 4.0)]),
            amenities: vec![
                amenity(AmenityCategory::Dining, "Restorante", "Restaurants", 4.9),
                amenity(AmenityCategory::Shopping, "Dyqane", "Shops", 4.5),
                amenity(AmenityCategory::Education, "Shkolla", "Schools", 3.8),
            ],
            commute_times: vec![
                commute("Sheshi Skënderbej", "Skanderbeg Square", 8, CommuteMode::Car),
                commute("Aeroporti Rinas", "Rinas Airport", 30, CommuteMode::Car),
            ],
            price_history: history(&[("2020", 1_650), ("2021", 1_820), ("2022", 2_050), ("2023", 2_180), ("2024", 2_450)]),
        },
        NeighborhoodProfile {
            id: NeighborhoodId("komuna-e-parisit".to_string()),
            name: text("Komuna e Parisit", "Paris Commune"),
            description: text(
                "Lagje banimi me parqe dhe qasje të shpejtë në qendër.",
                "Residential neighborhood with parks and quick access to the center.",
            ),
            avg_price: 1_750,
            price_change: 9.8,
            property_types: shares(&[("Apartament", 88.0), ("Komercial", 10.0), ("Shtëpi", 2.0)]),
            amenities: vec![
                amenity(AmenityCategory::Recreation, "Parqe", "Parks", 4.2),
                amenity(AmenityCategory::Transport, "Transport publik", "Public transport", 4.0),
            ],
            commute_times: vec![
                commute("Sheshi Skënderbej", "Skanderbeg Square", 15, CommuteMode::Bus),
                commute("Aeroporti Rinas", "Rinas Airport", 35, CommuteMode::Car),
            ],
            price_history: history(&[("2020", 1_200), ("2021", 1_310), ("2022", 1_450), ("2023", 1_590), ("2024", 1_750)]),
        },
        NeighborhoodProfile {
            id: NeighborhoodId("liqeni-i-thate".to_string()),
            name: text("Liqeni i Thatë", "Dry Lake"),
            description: text(
                "Zonë e re rezidenciale pranë Liqenit Artificial dhe Parkut të Madh.",
                "New residential area next to the Artificial Lake and the Grand Park.",
            ),
            avg_price: 2_100,
            price_change: 15.2,
            property_types: shares(&[("Apartament", 82.0), ("Vilë", 12.0), ("Komercial", 6.0)]),
            amenities: vec![
                amenity(AmenityCategory::Recreation, "Parku i Madh", "Grand Park", 4.8),
                amenity(AmenityCategory::Healthcare, "Klinika", "Clinics", 3.9),
            ],
            commute_times: vec![
                commute("Sheshi Skënderbej", "Skanderbeg Square", 12, CommuteMode::Car),
                commute("Universiteti", "University", 10, CommuteMode::Bus),
            ],
            price_history: history(&[("2020", 1_350), ("2021", 1_500), ("2022", 1_690), ("2023", 1_820), ("2024", 2_100)]),
        },
        NeighborhoodProfile {
            id: NeighborhoodId("don-bosko".to_string()),
            name: text("Don Bosko", "Don Bosco"),
            description: text(
                "Lagje e përballueshme me tregje lokale dhe shkolla.",
                "Affordable neighborhood with local markets and schools.",
            ),
            avg_price: 1_150,
            price_change: 6.4,
            property_types: shares(&[("Apartament", 70.0), ("Shtëpi", 25.0), ("Komercial", 5.0)]),
            amenities: vec![
                amenity(AmenityCategory::Shopping, "Tregje", "Markets", 4.1),
                amenity(AmenityCategory::Education, "Shkolla", "Schools", 4.0),
            ],
            commute_times: vec![
                commute("Sheshi Skënderbej", "Skanderbeg Square", 20, CommuteMode::Bus),
                commute("Aeroporti Rinas", "Rinas Airport", 25, CommuteMode::Car),
            ],
            price_history: history(&[("2020", 850), ("2021", 910), ("2022", 990), ("2023", 1_080), ("2024", 1_150)]),
        },
        NeighborhoodProfile {
            id: NeighborhoodId("kombinat".to_string()),
            name: text("Kombinat", "Kombinat"),
            description: text(
                "Ish-zonë industriale në rigjenerim, me çmime ende të ulëta.",
                "Former industrial zone under regeneration, with prices still low.",
            ),
            avg_price: 950,
            price_change: -1.5,
            property_types: shares(&[("Apartament", 65.0), ("Shtëpi", 30.0), ("Tokë", 5.0)]),
            amenities: vec![
                amenity(AmenityCategory::Transport, "Transport publik", "Public transport", 3.5),
                amenity(AmenityCategory::Healthcare, "Qendër shëndetësore", "Health center", 3.2),
            ],
            commute_times: vec![
                commute("Sheshi Skënderbej", "Skanderbeg Square", 25, CommuteMode::Bus),
                commute("Aeroporti Rinas", "Rinas Airport", 40, CommuteMode::Car),
            ],
            price_history: history(&[("2020", 900), ("2021", 930), ("2022", 980), ("2023", 965), ("2024", 950)]),
        },
    ]
}

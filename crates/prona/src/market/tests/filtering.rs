use super::common::*;

use crate::market::criteria::{CategorySelector, FilterCriteria, PriceRange, RoomSelector, SizeRange};
use crate::market::domain::PropertyCategory;
use crate::market::{filter_listings, ListingSort};

#[test]
fn price_and_size_ranges_drop_large_land_plot() {
    let listings = vec![
        listing("apt", 120_000, 85.0, 2, PropertyCategory::Apartment, "Tiranë, Bllok"),
        listing("plot", 350_000, 1_200.0, 0, PropertyCategory::Land, "Durrës, Shkozet"),
    ];
    let criteria = FilterCriteria {
        price: PriceRange::new(0, 200_000),
        size: SizeRange::new(0.0, 300.0),
        ..FilterCriteria::show_all()
    };

    let result = filter_listings(&listings, &criteria);
    assert_eq!(ids(&result), vec!["apt"]);
}

#[test]
fn four_plus_keeps_only_large_room_counts() {
    let listings: Vec<_> = [2, 4, 5, 3]
        .into_iter()
        .enumerate()
        .map(|(index, rooms)| {
            listing(
                &format!("r{index}"),
                100_000,
                90.0,
                rooms,
                PropertyCategory::Apartment,
                "Tiranë",
            )
        })
        .collect();
    let criteria = FilterCriteria {
        rooms: RoomSelector::parse("4+"),
        ..FilterCriteria::show_all()
    };

    let result = filter_listings(&listings, &criteria);
    let rooms: Vec<u32> = result.iter().map(|listing| listing.rooms).collect();
    assert_eq!(rooms, vec![4, 5]);
}

#[test]
fn search_matches_location_case_insensitively() {
    let listings = vec![
        listing("t", 100_000, 70.0, 2, PropertyCategory::Apartment, "Tiranë, Bllok"),
        listing("d", 100_000, 70.0, 2, PropertyCategory::Apartment, "Durrës, Plazh"),
    ];
    let criteria = FilterCriteria {
        search: "durrës".to_string(),
        ..FilterCriteria::show_all()
    };

    assert_eq!(ids(&filter_listings(&listings, &criteria)), vec!["d"]);

    let upper = FilterCriteria {
        search: "DURRËS".to_string(),
        ..FilterCriteria::show_all()
    };
    assert_eq!(ids(&filter_listings(&listings, &upper)), vec!["d"]);
}

#[test]
fn search_matches_either_title() {
    let listings = mixed_listings();
    let criteria = FilterCriteria {
        search: "property c".to_string(),
        ..FilterCriteria::show_all()
    };
    assert_eq!(ids(&filter_listings(&listings, &criteria)), vec!["c"]);

    let criteria = FilterCriteria {
        search: "pronë d".to_string(),
        ..FilterCriteria::show_all()
    };
    assert_eq!(ids(&filter_listings(&listings, &criteria)), vec!["d"]);
}

#[test]
fn show_all_returns_input_in_order() {
    let listings = mixed_listings();
    let result = filter_listings(&listings, &FilterCriteria::show_all());
    assert_eq!(result.len(), listings.len());
    assert!(result
        .iter()
        .zip(listings.iter())
        .all(|(kept, original)| std::ptr::eq(*kept, original)));
}

#[test]
fn filtering_is_idempotent_and_never_invents_records() {
    let listings = mixed_listings();
    let criteria = FilterCriteria {
        price: PriceRange::new(100_000, 500_000),
        category: CategorySelector::parse("house"),
        sort: ListingSort::HighLow,
        ..FilterCriteria::show_all()
    };

    let once = filter_listings(&listings, &criteria);
    let twice = filter_listings(once.iter().copied(), &criteria);
    assert_eq!(ids(&once), ids(&twice));
    assert!(once
        .iter()
        .all(|kept| listings.iter().any(|original| std::ptr::eq(*kept, original))));
}

#[test]
fn category_selector_requires_exact_match() {
    let listings = mixed_listings();
    let criteria = FilterCriteria {
        category: CategorySelector::Only(PropertyCategory::Commercial),
        ..FilterCriteria::show_all()
    };
    assert_eq!(ids(&filter_listings(&listings, &criteria)), vec!["e"]);
}

#[test]
fn malformed_room_selector_excludes_every_listing() {
    let listings = mixed_listings();
    let criteria = FilterCriteria {
        rooms: RoomSelector::parse("three"),
        ..FilterCriteria::show_all()
    };
    assert!(filter_listings(&listings, &criteria).is_empty());
}

#[test]
fn exact_room_selector_matches_land_with_zero() {
    let listings = mixed_listings();
    let criteria = FilterCriteria {
        rooms: RoomSelector::parse("0"),
        ..FilterCriteria::show_all()
    };
    assert_eq!(ids(&filter_listings(&listings, &criteria)), vec!["b"]);
}

#[test]
fn price_sorts_are_monotonic_and_stable() {
    let listings = mixed_listings();

    let low_high = FilterCriteria {
        sort: ListingSort::LowHigh,
        ..FilterCriteria::show_all()
    };
    let ascending = filter_listings(&listings, &low_high);
    assert!(ascending.windows(2).all(|pair| pair[0].price <= pair[1].price));
    // "a" and "e" share a price and keep their input order.
    assert_eq!(ids(&ascending), vec!["c", "a", "e", "b", "d", "f"]);

    let high_low = FilterCriteria {
        sort: ListingSort::HighLow,
        ..FilterCriteria::show_all()
    };
    let descending = filter_listings(&listings, &high_low);
    assert!(descending.windows(2).all(|pair| pair[0].price >= pair[1].price));
    assert_eq!(ids(&descending), vec!["f", "d", "b", "a", "e", "c"]);
}

#[test]
fn size_and_price_per_area_sorts() {
    let listings = mixed_listings();

    let by_size = FilterCriteria {
        sort: ListingSort::Size,
        ..FilterCriteria::show_all()
    };
    let sized = filter_listings(&listings, &by_size);
    assert!(sized.windows(2).all(|pair| pair[0].size >= pair[1].size));

    let by_rate = FilterCriteria {
        sort: ListingSort::PricePerArea,
        ..FilterCriteria::show_all()
    };
    let rated = filter_listings(&listings, &by_rate);
    assert_eq!(rated[0].id.0, "b");
    assert!(rated
        .windows(2)
        .all(|pair| pair[0].price_per_sqm() <= pair[1].price_per_sqm()));
}

#[test]
fn matches_agrees_with_filter() {
    let listings = mixed_listings();
    let criteria = FilterCriteria {
        size: SizeRange::new(80.0, 250.0),
        ..FilterCriteria::show_all()
    };
    let expected: Vec<String> = listings
        .iter()
        .filter(|listing| criteria.matches(listing))
        .map(|listing| listing.id.0.clone())
        .collect();
    assert_eq!(ids(&filter_listings(&listings, &criteria)), expected);
}

#[test]
fn padded_search_term_is_matched_verbatim() {
    let listings = vec![
        listing("beach", 100_000, 70.0, 2, PropertyCategory::Apartment, "Durrës, Plazh"),
        listing("bay", 100_000, 70.0, 2, PropertyCategory::Apartment, "Plazhi i Gjirit"),
    ];
    let criteria = FilterCriteria {
        search: " Plazh".to_string(),
        ..FilterCriteria::show_all()
    };
    assert_eq!(ids(&filter_listings(&listings, &criteria)), vec!["beach"]);

    let blank = FilterCriteria {
        search: "  ".to_string(),
        ..FilterCriteria::show_all()
    };
    assert_eq!(filter_listings(&listings, &blank).len(), 2);
}

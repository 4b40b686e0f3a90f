use crate::infra::{
    build_market_service, parse_currency, parse_floor, parse_language, parse_listing_sort,
    parse_neighborhood_sort, parse_status, ApiMarketService,
};
use clap::Args;
use prona::config::AppConfig;
use prona::error::AppError;
use prona::market::criteria::{FloorLevel, ListingStatus};
use prona::market::snapshot::SnapshotState;
use prona::market::{
    CategorySelector, Currency, DisplayContext, FilterCriteria, Language, ListingQuery,
    ListingSearchResponse, ListingSort, ListingView, NeighborhoodQuery,
    NeighborhoodSearchResponse, NeighborhoodSort, PriceRange, PropertyCategory, RoomSelector,
    SizeRange, SourceSummary,
};
use serde::Serialize;

#[derive(Args, Debug, Default, Clone, Copy)]
pub(crate) struct DisplayArgs {
    /// Language for titles and labels (sq or en). Defaults to PRONA_LANGUAGE.
    #[arg(long, value_parser = parse_language)]
    pub(crate) lang: Option<Language>,
    /// Currency for price labels (eur or all). Defaults to PRONA_CURRENCY.
    #[arg(long, value_parser = parse_currency)]
    pub(crate) currency: Option<Currency>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ListingsArgs {
    #[arg(long)]
    pub(crate) min_price: Option<u64>,
    #[arg(long)]
    pub(crate) max_price: Option<u64>,
    /// Minimum area in m²
    #[arg(long)]
    pub(crate) min_size: Option<f64>,
    /// Maximum area in m²
    #[arg(long)]
    pub(crate) max_size: Option<f64>,
    /// Room count: all, an exact number, or 4+
    #[arg(long)]
    pub(crate) rooms: Option<String>,
    /// apartment, house, land, commercial or all
    #[arg(long)]
    pub(crate) property_type: Option<String>,
    /// Case-insensitive match against title and location
    #[arg(long)]
    pub(crate) search: Option<String>,
    #[arg(long, value_parser = parse_listing_sort)]
    pub(crate) sort: Option<ListingSort>,
    #[arg(long)]
    pub(crate) bathrooms: Option<u32>,
    #[arg(long)]
    pub(crate) year_built_min: Option<u16>,
    #[arg(long)]
    pub(crate) year_built_max: Option<u16>,
    #[arg(long, value_parser = parse_floor)]
    pub(crate) floor: Option<FloorLevel>,
    /// Comma separated amenity tags
    #[arg(long)]
    pub(crate) amenities: Option<String>,
    #[arg(long, value_parser = parse_status)]
    pub(crate) status: Option<ListingStatus>,
    #[command(flatten)]
    pub(crate) display: DisplayArgs,
    /// Print the response as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl ListingsArgs {
    pub(crate) fn to_query(&self) -> ListingQuery {
        ListingQuery {
            min_price: self.min_price,
            max_price: self.max_price,
            min_size: self.min_size,
            max_size: self.max_size,
            rooms: self.rooms.clone(),
            property_type: self.property_type.clone(),
            search: self.search.clone(),
            sort: self.sort,
            bathrooms: self.bathrooms,
            year_built_min: self.year_built_min,
            year_built_max: self.year_built_max,
            floor: self.floor,
            amenities: self.amenities.clone(),
            status: self.status,
            lang: self.display.lang,
            currency: self.display.currency,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct NeighborhoodsArgs {
    /// Case-insensitive match against names and descriptions
    #[arg(long)]
    pub(crate) search: Option<String>,
    #[arg(long, value_parser = parse_neighborhood_sort)]
    pub(crate) sort: Option<NeighborhoodSort>,
    #[command(flatten)]
    pub(crate) display: DisplayArgs,
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SnapshotArgs {
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    #[command(flatten)]
    pub(crate) display: DisplayArgs,
}

fn load_service() -> Result<std::sync::Arc<ApiMarketService>, AppError> {
    let config = AppConfig::load()?;
    build_market_service(&config)
}

pub(crate) fn run_listings(args: ListingsArgs) -> Result<(), AppError> {
    let service = load_service()?;
    let query = args.to_query();
    let context = service
        .display()
        .with_overrides(query.lang, query.currency);
    let response = service.search_listings(&query);

    if args.json {
        print_json(&response);
    } else {
        render_listings(&response, context);
    }
    Ok(())
}

pub(crate) fn run_neighborhoods(args: NeighborhoodsArgs) -> Result<(), AppError> {
    let service = load_service()?;
    let query = NeighborhoodQuery {
        search: args.search,
        sort: args.sort,
        lang: args.display.lang,
        currency: args.display.currency,
    };
    let response = service.search_neighborhoods(&query);

    if args.json {
        print_json(&response);
    } else {
        render_neighborhoods(&response);
    }
    Ok(())
}

pub(crate) fn run_snapshot(args: SnapshotArgs) -> Result<(), AppError> {
    let service = load_service()?;
    let state = service.snapshot();

    if args.json {
        print_json(&state);
    } else {
        render_snapshot(&state, service.display());
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = load_service()?;
    let context = service
        .display()
        .with_overrides(args.display.lang, args.display.currency);

    println!("Property market demo");
    render_sources(&service.sources());

    println!();
    render_snapshot(&service.snapshot(), context);

    println!("\nApartments up to €200,000, under 300 m², cheapest first");
    let affordable = FilterCriteria {
        price: PriceRange::new(0, 200_000),
        size: SizeRange::new(0.0, 300.0),
        category: CategorySelector::parse("apartment"),
        sort: ListingSort::LowHigh,
        ..FilterCriteria::show_all()
    };
    render_listings(&service.search_with_criteria(&affordable, context), context);

    println!("\nFamily homes with four or more rooms, largest first");
    render_listings(
        &service.search_with_criteria(&family_homes_criteria(), context),
        context,
    );

    println!("\nNeighborhoods ranked by yearly growth");
    let ranking = service.search_neighborhoods(&NeighborhoodQuery {
        sort: Some(NeighborhoodSort::Growth),
        lang: Some(context.language),
        currency: Some(context.currency),
        ..NeighborhoodQuery::default()
    });
    render_neighborhoods(&ranking);

    Ok(())
}

pub(crate) fn family_homes_criteria() -> FilterCriteria {
    FilterCriteria {
        rooms: RoomSelector::FourOrMore,
        category: CategorySelector::Only(PropertyCategory::House),
        sort: ListingSort::Size,
        ..FilterCriteria::show_all()
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("JSON output unavailable: {err}"),
    }
}

pub(crate) fn listing_line(view: &ListingView) -> String {
    let rooms = match view.rooms {
        Some(rooms) => format!("{rooms} rooms"),
        None => "no rooms".to_string(),
    };
    format!(
        "- [{}] {} | {} | {} ({}) | {} | {} | {}",
        view.id,
        view.title,
        view.price_label,
        view.size_label,
        view.price_per_sqm_label,
        rooms,
        view.location,
        view.source
    )
}

fn render_listings(response: &ListingSearchResponse, context: DisplayContext) {
    let stats = &response.stats;
    if response.results.is_empty() {
        println!("No listings match the current filters");
    } else {
        println!(
            "{} listings | mean price {} | mean {}/m²",
            stats.count,
            context.currency.format(stats.mean_price.round() as u64),
            context.currency.format(stats.mean_price_per_sqm.round() as u64)
        );
        for view in &response.results {
            println!("{}", listing_line(view));
        }
    }

    if !response.unapplied_filters.is_empty() {
        println!(
            "Note: not applied to results: {}",
            response.unapplied_filters.join(", ")
        );
    }
}

fn render_neighborhoods(response: &NeighborhoodSearchResponse) {
    if response.results.is_empty() {
        println!("No neighborhoods match the search");
        return;
    }

    println!(
        "{} neighborhoods | mean {:.0} per m²",
        response.stats.count, response.stats.mean_avg_price
    );
    for view in &response.results {
        println!(
            "- {} | {} | {} yearly",
            view.name, view.avg_price_label, view.price_change_label
        );
    }
}

fn render_snapshot(state: &SnapshotState, context: DisplayContext) {
    match state {
        SnapshotState::Ready { snapshot } => {
            println!("Market snapshot {} ({})", snapshot.id, snapshot.date);
            println!(
                "- Average {}/m² across {} listings",
                context
                    .currency
                    .format(u64::from(snapshot.avg_price_per_sqm)),
                snapshot.total_listings
            );
            println!(
                "- Quarterly {:+.1}% | yearly {:+.1}%",
                snapshot.quarterly_change, snapshot.yearly_change
            );
            println!(
                "- Most active: {} | growth regions: {}",
                snapshot.most_active_region,
                snapshot.growth_regions.join(", ")
            );
            println!(
                "- Sentiment {} | opportunity index {}/100",
                snapshot.sentiment.label(),
                snapshot.opportunity_index.value()
            );
        }
        SnapshotState::NoData => println!("Market snapshot: no data recorded yet"),
        SnapshotState::Unavailable { reason } => {
            println!("Market snapshot unavailable: {reason}")
        }
    }
}

fn render_sources(sources: &[SourceSummary]) {
    println!("Data sources");
    for summary in sources {
        let categories: Vec<&str> = summary
            .categories
            .iter()
            .map(|category| category.key())
            .collect();
        println!(
            "- {}: {} listings ({})",
            summary.source,
            summary.listings,
            categories.join(", ")
        );
    }
}

use crate::demo::{
    run_demo, run_listings, run_neighborhoods, run_snapshot, DemoArgs, ListingsArgs,
    NeighborhoodsArgs, SnapshotArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use prona::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "prona",
    about = "Search Albanian property listings and run the market data service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Filter and sort listings from the configured catalog
    Listings(ListingsArgs),
    /// Search and rank neighborhoods
    Neighborhoods(NeighborhoodsArgs),
    /// Show the most recent market snapshot
    Snapshot(SnapshotArgs),
    /// Walk through sources, snapshot, listing searches and neighborhood rankings
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Listings(args) => run_listings(args),
        Command::Neighborhoods(args) => run_neighborhoods(args),
        Command::Snapshot(args) => run_snapshot(args),
        Command::Demo(args) => run_demo(args),
    }
}

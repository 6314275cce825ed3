use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use tracing::info;

use gf_core::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use gf_core::parse::is_recent;
use gf_core::query::{comparators, QueryDescriptor, QueryEngine, QueryEngineConfig, SortMode};
use gf_core::source::{load_listings_from_path, toggle_saved};
use gf_core::{Category, CompensationKind, ExperienceLevel};

/// Query a gigfeed listings catalog.
#[derive(Debug, Parser)]
#[command(name = "gf", version, about)]
struct Args {
    /// Path to a JSON array of listings.
    listings: PathBuf,

    /// Free-text search over title, company, description, and tags.
    #[arg(short = 'q', long, default_value = "")]
    search: String,

    /// Substring search over the location field.
    #[arg(short, long, default_value = "")]
    location: String,

    /// Experience level facet (entry, intermediate, advanced); repeatable.
    #[arg(long = "level")]
    levels: Vec<String>,

    /// Payment kind facet (hourly, fixed); repeatable.
    #[arg(long = "payment")]
    payment_kinds: Vec<String>,

    /// Category facet (web_development, design, ...); repeatable.
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Sort mode: recently_listed, most_proposals, highest_budget,
    /// most_relevant.
    #[arg(short, long, default_value = "recently_listed")]
    sort: String,

    /// Toggle the saved flag on this listing id before querying.
    #[arg(long)]
    save: Option<String>,

    /// Emit the result as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn build_descriptor(args: &Args) -> Result<QueryDescriptor, String> {
    let mut descriptor = QueryDescriptor::default();
    descriptor.search_text = args.search.clone();
    descriptor.search_location = args.location.clone();
    descriptor.sort_mode = SortMode::from_str(&args.sort)
        .map_err(|_| format!("unknown sort mode: {}", args.sort))?;

    for raw in &args.levels {
        let level = ExperienceLevel::from_str(raw)
            .map_err(|_| format!("unknown experience level: {raw}"))?;
        descriptor.levels.insert(level);
    }
    for raw in &args.payment_kinds {
        let kind = CompensationKind::from_str(raw)
            .map_err(|_| format!("unknown payment kind: {raw}"))?;
        descriptor.payment_kinds.insert(kind);
    }
    for raw in &args.categories {
        let category =
            Category::from_str(raw).map_err(|_| format!("unknown category: {raw}"))?;
        descriptor.categories.insert(category);
    }

    Ok(descriptor)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing_subscriber("gf-cli");
    install_tracing_panic_hook("gf-cli");

    let args = Args::parse();
    let descriptor = build_descriptor(&args)?;

    let mut listings = load_listings_from_path(&args.listings)?;
    info!(count = listings.len(), path = %args.listings.display(), "catalog loaded");

    if let Some(id) = &args.save {
        if !toggle_saved(&mut listings, id) {
            return Err(format!("no listing with id {id}").into());
        }
    }

    let engine = QueryEngine::new(QueryEngineConfig::default());
    let results = engine.execute(&listings, &descriptor);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("no listings match the current filters");
        return Ok(());
    }

    for listing in &results {
        let badge = if is_recent(&listing.posted_text) {
            " [NEW]"
        } else {
            ""
        };
        let saved = if listing.saved { " *saved*" } else { "" };
        println!(
            "{}{badge}  {} | {} | {} ({}) | {} proposals | {}{saved}",
            listing.title,
            listing.company,
            listing.location,
            listing.compensation_text,
            listing.compensation_kind,
            listing.proposal_count,
            listing.posted_text,
        );
        tracing::debug!(
            id = %listing.id,
            budget = comparators::comparable_budget(listing),
            "listed"
        );
    }
    println!("{} listing(s)", results.len());

    Ok(())
}

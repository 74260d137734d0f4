use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mineclass::{storage, Category, Classifier, GeoPoint, Metric, Params, Query, SiteRegistry};

#[derive(Parser)]
#[command(name = "mineclass", about = "Classify locations against known legal mining sites")]
struct Cli {
    /// Site catalog file to use instead of the built-in table.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PolicyArgs {
    /// geodesic | great_circle
    #[arg(long, default_value = "geodesic")]
    metric: Metric,
    /// JSON file with policy thresholds.
    #[arg(long)]
    params: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one location.
    Classify {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[arg(long, default_value = "iron")]
        mineral: Category,
        #[arg(long, allow_negative_numbers = true)]
        coverage: f64,
        #[command(flatten)]
        policy: PolicyArgs,
    },
    /// Show sites near a location without classifying it.
    Search {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[arg(long, default_value = "iron")]
        mineral: Category,
        #[arg(long, default_value = "geodesic")]
        metric: Metric,
    },
    /// List registered sites.
    Sites {
        #[arg(long)]
        mineral: Option<Category>,
        #[arg(long)]
        country: Option<String>,
    },
    /// Registry statistics.
    Stats,
    /// Write the built-in table as a catalog file.
    Export { path: PathBuf },
    /// Classify a JSON array of queries.
    Batch {
        path: PathBuf,
        #[command(flatten)]
        policy: PolicyArgs,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mineclass=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_registry(catalog: Option<&PathBuf>) -> Result<SiteRegistry> {
    match catalog {
        Some(path) => storage::load_registry(path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => Ok(SiteRegistry::builtin()?),
    }
}

fn load_params(path: Option<&PathBuf>) -> Result<Params> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading params {}", path.display()))?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(Params::default()),
    }
}

fn point(lat: f64, lon: f64) -> Result<GeoPoint> {
    let p = GeoPoint::new(lat, lon);
    if !p.is_valid() {
        return Err(anyhow!("coordinates out of range: ({lat}, {lon})"));
    }
    Ok(p)
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            lat,
            lon,
            mineral,
            coverage,
            policy,
        } => {
            let registry = load_registry(cli.catalog.as_ref())?;
            let params = load_params(policy.params.as_ref())?;
            let classifier = Classifier::with_params(&registry, policy.metric, params);
            print(&classifier.classify(point(lat, lon)?, mineral, coverage))?;
        }
        Commands::Search {
            lat,
            lon,
            mineral,
            metric,
        } => {
            let registry = load_registry(cli.catalog.as_ref())?;
            let classifier = Classifier::with_params(&registry, metric, Params::default());
            print(&classifier.search(point(lat, lon)?, mineral))?;
        }
        Commands::Sites { mineral, country } => {
            let registry = load_registry(cli.catalog.as_ref())?;
            let sites = registry.filter(mineral, country.as_deref());
            print(&json!({ "total": sites.len(), "sites": sites }))?;
        }
        Commands::Stats => {
            let registry = load_registry(cli.catalog.as_ref())?;
            let by_category: serde_json::Map<String, serde_json::Value> = registry
                .count_by_category()
                .into_iter()
                .map(|(c, n)| (c.label().to_string(), json!(n)))
                .collect();
            print(&json!({
                "total": registry.len(),
                "by_category": by_category,
                "countries": registry.countries(),
            }))?;
        }
        Commands::Export { path } => {
            let registry = SiteRegistry::builtin()?;
            storage::write_catalog(&path, registry.all_sites())?;
            info!(path = %path.display(), "exported built-in catalog");
        }
        Commands::Batch { path, policy } => {
            let registry = load_registry(cli.catalog.as_ref())?;
            let params = load_params(policy.params.as_ref())?;
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading queries {}", path.display()))?;
            let queries: Vec<Query> = serde_json::from_str(&text)?;
            if let Some(bad) = queries.iter().find(|q| !q.point.is_valid()) {
                return Err(anyhow!("coordinates out of range: {:?}", bad.point));
            }
            let classifier = Classifier::with_params(&registry, policy.metric, params);
            print(&classifier.classify_batch(&queries))?;
        }
    }
    Ok(())
}

//! labelscan - Extract physical measurements from product label photos
//!
//! CLI front-end over the labelscan library: acquire a label image (local
//! file or URL), run OCR, and extract measurements for the requested
//! category.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use labelscan::config::{self, AppConfig};
use labelscan::extract::{Category, Extractor};
use labelscan::vision::OcrPipeline;
use labelscan::{fetch, Measurement};

/// labelscan - measurement extraction from product labels
#[derive(Parser, Debug)]
#[command(name = "labelscan")]
#[command(about = "Extract physical measurements from product label photos via OCR")]
struct Args {
    /// Measurement category to extract (e.g. item_weight, width, voltage)
    #[arg(short, long)]
    category: Option<String>,

    /// Path to a label image
    #[arg(short, long, conflicts_with_all = ["url", "text"])]
    image: Option<PathBuf>,

    /// URL of a label image
    #[arg(short, long, conflicts_with = "text")]
    url: Option<String>,

    /// Skip OCR and extract directly from this text
    #[arg(short, long)]
    text: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// List supported categories and exit
    #[arg(long)]
    list_categories: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    if args.list_categories {
        println!("Supported categories:");
        for category in Category::ALL {
            println!("  {}", category);
        }
        return Ok(());
    }

    let Some(category) = args.category.as_deref() else {
        anyhow::bail!("--category is required (see --list-categories)");
    };

    let config = load_or_create_config();
    let extractor = Extractor::new()?;

    let text = match (&args.image, &args.url, &args.text) {
        (_, _, Some(text)) => text.clone(),
        (Some(path), _, _) => {
            let image = fetch::load_image(path)?;
            OcrPipeline::new(config)?.recognize(&image)?
        }
        (_, Some(url), _) => {
            let image = fetch::fetch_image(url, &config.fetch)?;
            OcrPipeline::new(config)?.recognize(&image)?
        }
        (None, None, None) => {
            anyhow::bail!("one of --image, --url or --text is required");
        }
    };

    let results = extractor.extract(&text, category)?;

    print_results(&results, args.json)?;

    Ok(())
}

/// Load configuration from the platform config dir or fall back to defaults
fn load_or_create_config() -> AppConfig {
    if let Ok(config_dir) = config::get_config_dir() {
        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            if let Ok(config) = config::load_config(&config_path) {
                info!("Loaded configuration from {:?}", config_path);
                return config;
            }
        }
    }
    info!("Using default configuration");
    AppConfig::default()
}

/// Render extraction results to stdout
fn print_results(results: &[Measurement], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No measurements found");
    } else {
        for measurement in results {
            println!("{}", measurement);
        }
    }

    Ok(())
}

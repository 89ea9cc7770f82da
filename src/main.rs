mod catalog;
mod config;
mod generator;
mod matcher;
mod model;

use catalog::CatalogStore;
use config::{AppConfig, load_config};
use generator::{BuildGenerator, OpenRouterGenerator};
use matcher::resolver::resolve_build;
use std::env;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut args = env::args().skip(1);
    let usage = match args.next() {
        Some(u) if !u.trim().is_empty() => u,
        _ => {
            eprintln!("usage: rigmatch \"<what the PC is for>\" [budget]");
            return ExitCode::FAILURE;
        }
    };
    let budget = match args.next() {
        Some(raw) => match raw.parse::<f64>() {
            Ok(b) => Some(b),
            Err(_) => {
                eprintln!("budget must be a number, got '{raw}'");
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    // Load configuration from file
    let config: AppConfig = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Load all six catalogs up front; matching needs them in file order
    let store = CatalogStore::new(&config.data_dir);
    let catalogs = match store.load_all() {
        Ok(c) => c,
        Err(e) => {
            error!("Catalog load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Requesting build suggestion for: {}", usage);
    let generator = OpenRouterGenerator::new(config.openrouter_api_key.clone(), config.model.clone());
    let build = match generator.generate(&usage, budget).await {
        Ok(b) => b,
        Err(e) => {
            error!("Generation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Matching suggested components against catalogs...");
    let resolved = resolve_build(&build, &catalogs, &config.matcher);

    match serde_json::to_string_pretty(&resolved) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            error!("Failed to render result: {}", e);
            return ExitCode::FAILURE;
        }
    }
    println!("Total (known prices): {:.2} USD", resolved.total_price());

    ExitCode::SUCCESS
}

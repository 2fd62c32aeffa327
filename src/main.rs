//! view-router: resolve and navigate the application's route table from the command line.
//!
//! # Architecture Overview
//!
//! ```text
//!     location ──▶ navigation ──▶ routing ──▶ views
//!                  (normalize,    (table,      (cache,
//!                   history,       resolver)    loaders)
//!                   tickets)          │
//!                      ▲              ▼
//!                      └──── mount (latest ticket only)
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use view_router::config::{load_config, RouterConfig, ViewSource};
use view_router::lifecycle::{build_host, build_resolver};
use view_router::navigation::{normalize_path, MountedSummary, NavigationOutcome};
use view_router::observability::{logging, metrics};
use view_router::Resolver;

#[derive(Parser)]
#[command(name = "view-router")]
#[command(about = "Resolve paths against the application's route table", long_about = None)]
struct Cli {
    /// Route configuration file (TOML). Defaults to the built-in route table.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Load view modules from this directory.
    #[arg(long, conflicts_with = "base_url")]
    views: Option<String>,

    /// Load view modules from this base URL.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table
    Routes,
    /// Resolve each path and print the matched route and view
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Navigate through the paths concurrently, in order, and print the mounted view
    Navigate {
        /// Initial browser location.
        #[arg(long, default_value = "/")]
        initial: String,

        #[arg(required = true)]
        paths: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    if let Some(dir) = cli.views {
        config.views.source = ViewSource::Dir;
        config.views.dir = dir;
    }
    if let Some(base_url) = cli.base_url {
        config.views.source = ViewSource::Http;
        config.views.base_url = base_url;
    }

    logging::init(&config.observability.log_level);

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    match cli.command {
        Commands::Routes => print_json(&routes_json(&config))?,
        Commands::Resolve { paths } => {
            let resolver = build_resolver(&config)?;
            let mut results = Vec::with_capacity(paths.len());
            for path in paths {
                results.push(resolve_entry(&resolver, &path).await);
            }
            print_json(&Value::Array(results))?;
        }
        Commands::Navigate { initial, paths } => {
            let host = Arc::new(build_host(&config, &initial)?);
            host.start().await?;

            // Tickets are issued here in argument order; only settling runs concurrently.
            let mut pending = Vec::with_capacity(paths.len());
            for path in paths {
                let task = host.begin_navigation(&path).map(|ticket| {
                    let host = host.clone();
                    tokio::spawn(async move { host.complete(ticket).await })
                });
                pending.push((path, task));
            }

            let mut navigations = Vec::with_capacity(pending.len());
            for (path, task) in pending {
                let outcome = match task {
                    Ok(handle) => handle.await?,
                    Err(e) => Err(e),
                };
                let entry = match outcome {
                    Ok(NavigationOutcome::Mounted(m)) => {
                        json!({ "path": path, "outcome": "mounted", "view": m.view.id() })
                    }
                    Ok(NavigationOutcome::Superseded { current_path, .. }) => {
                        json!({ "path": path, "outcome": "superseded", "current": current_path })
                    }
                    Err(e) => json!({ "path": path, "outcome": "failed", "error": e.to_string() }),
                };
                navigations.push(entry);
            }

            let mounted = host.mounted().map(|m| MountedSummary::from(m.as_ref()));
            print_json(&json!({
                "navigations": navigations,
                "mounted": mounted,
                "location": host.location(),
            }))?;
        }
    }

    Ok(())
}

/// Normalize `raw` the way the mount host does, then resolve it.
async fn resolve_entry(resolver: &Resolver, raw: &str) -> Value {
    let path = match normalize_path(raw) {
        Ok(path) => path,
        Err(e) => return json!({ "path": raw, "error": e.to_string() }),
    };
    match resolver.resolve_match(&path).await {
        Ok(resolved) => json!({
            "path": path,
            "route": resolved.route,
            "view": resolved.view.id(),
        }),
        Err(e) => json!({ "path": path, "error": e.to_string() }),
    }
}

fn routes_json(config: &RouterConfig) -> Value {
    let routes: Vec<Value> = config
        .routes
        .iter()
        .map(|r| {
            json!({
                "name": r.display_name(),
                "pattern": r.pattern,
                "aliases": r.aliases,
                "view": r.view,
            })
        })
        .collect();
    json!({ "routes": routes, "fallback": config.views.fallback })
}

fn print_json(value: &Value) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

//! Command line interface
//!
//! Commands return their report as a string; the binary prints it.

use crate::application::ports::registry::list_cache_types;
use crate::domain::CacheInstance;
use crate::domain::constants::DEFAULT_CONFIG_KEY;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::{AppContext, ConfigLoader, init_app};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fmt::Write;
use std::path::PathBuf;

/// Command line interface for Cachewire
#[derive(Parser, Debug)]
#[command(name = "cachewire")]
#[command(about = "Cachewire - Configuration-driven cache factory")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the registered cache types
    Types,
    /// Resolve every configured cache
    Caches,
    /// Resolve a single configured cache
    Resolve {
        /// Configuration key under `doctrine.cache`
        #[arg(default_value = DEFAULT_CONFIG_KEY)]
        key: String,
    },
}

/// Run `cli`, returning the text to print
pub async fn run(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        Command::Types => Ok(render_types()),
        Command::Caches => {
            let context = bootstrap(cli)?;
            let mut out = String::new();
            for (key, cache) in context.caches()? {
                out.push_str(&describe(&key, &cache).await?);
            }
            Ok(out)
        }
        Command::Resolve { key } => {
            let context = bootstrap(cli)?;
            let cache = context
                .cache(key)
                .with_context(|| format!("Failed to resolve cache '{key}'"))?;
            describe(key, &cache).await
        }
    }
}

fn bootstrap(cli: &Cli) -> anyhow::Result<AppContext> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        // Logging is not up yet, so a missing file must fail here to be seen
        anyhow::ensure!(
            path.exists(),
            "Configuration file not found: {}",
            path.display()
        );
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;
    Ok(init_app(config)?)
}

/// One line per registered cache type: name and description
pub fn render_types() -> String {
    list_cache_types()
        .into_iter()
        .fold(String::new(), |mut out, (name, description)| {
            let _ = writeln!(out, "{name:<16} {description}");
            out
        })
}

/// One line describing a resolved cache
pub async fn describe(key: &str, cache: &CacheInstance) -> anyhow::Result<String> {
    let namespace = cache
        .as_namespaced()
        .map_or_else(|| "-".to_string(), |n| n.namespace());
    let mut line = format!(
        "{key}: kind={} name={} namespace={namespace}",
        cache.kind(),
        cache.name()
    );
    if let Some(provider) = cache.as_provider() {
        let stats = provider.stats().await?;
        let _ = write!(line, " entries={}", stats.entries);
    }
    line.push('\n');
    Ok(line)
}

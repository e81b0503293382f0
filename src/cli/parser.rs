//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros. Every setting has a
//! `POKEDEX_*` environment fallback.

use crate::config::{
    AppConfig, CatalogConfig, DEFAULT_API_URL, DEFAULT_BIND, DEFAULT_CATALOG_LIMIT,
    DEFAULT_DETAIL_CONCURRENCY, DEFAULT_TIMEOUT_SECS, ttl_from_secs,
};
use crate::core::DEFAULT_PAGE_SIZE;
use crate::storage::DEFAULT_IDENTITY;
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Pokédex: browse the PokéAPI catalog and build a team of six.
#[derive(Parser, Debug)]
#[command(name = "pokedex-rs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web server.
    Serve(ServeArgs),

    /// Fetch the catalog once and print one page of it.
    Catalog(CatalogCommandArgs),
}

/// Where the catalog comes from.
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Upstream API root.
    #[arg(long, env = "POKEDEX_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Number of Pokémon to list.
    #[arg(long, env = "POKEDEX_LIMIT", default_value_t = DEFAULT_CATALOG_LIMIT)]
    pub limit: usize,

    /// Upstream request timeout in seconds.
    #[arg(long, env = "POKEDEX_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Detail requests in flight at once.
    #[arg(long, env = "POKEDEX_CONCURRENCY", default_value_t = DEFAULT_DETAIL_CONCURRENCY)]
    pub concurrency: usize,

    /// Serve a fixed catalog from a JSON file instead of the API.
    #[arg(long, env = "POKEDEX_CATALOG_FILE")]
    pub catalog_file: Option<PathBuf>,
}

impl CatalogArgs {
    /// Converts the flags into a catalog configuration.
    #[must_use]
    pub fn to_config(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.api_url.clone(),
            limit: self.limit,
            timeout: Duration::from_secs(self.timeout_secs),
            detail_concurrency: self.concurrency,
            catalog_file: self.catalog_file.clone(),
        }
    }
}

/// Arguments for `serve`.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Catalog source.
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Address to listen on.
    #[arg(long, env = "POKEDEX_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Identity whose team the server manages.
    #[arg(long, env = "POKEDEX_IDENTITY", default_value = DEFAULT_IDENTITY)]
    pub identity: String,

    /// Pokémon per page.
    #[arg(long, env = "POKEDEX_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Reuse a fetched catalog for this many seconds (0 disables).
    #[arg(long, env = "POKEDEX_CACHE_TTL_SECS", default_value_t = 0)]
    pub cache_ttl_secs: u64,
}

impl ServeArgs {
    /// Converts the flags into a server configuration.
    #[must_use]
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            bind: self.bind,
            identity: self.identity.clone(),
            page_size: self.page_size,
            cache_ttl: ttl_from_secs(self.cache_ttl_secs),
            catalog: self.catalog.to_config(),
        }
    }
}

/// Arguments for `catalog`.
#[derive(Args, Debug, Clone)]
pub struct CatalogCommandArgs {
    /// Catalog source.
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Filter by name or type.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Page to show (1-based).
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Pokémon per page.
    #[arg(long, env = "POKEDEX_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

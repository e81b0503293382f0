//! CLI command implementations.

use crate::catalog::create_catalog;
use crate::cli::output::{OutputFormat, format_catalog_page};
use crate::cli::parser::{CatalogCommandArgs, Cli, Commands, ServeArgs};
use crate::core::browse::{browse, normalize_term};
use crate::error::{CommandError, Error, Result};
use crate::storage::MemoryRosterStore;
use crate::web::{AppState, WebSettings, serve};
use std::sync::Arc;

/// Executes the CLI command.
///
/// # Returns
///
/// Output to print on success (empty for `serve`).
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the catalog cannot be
/// loaded, or the server fails.
pub async fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Serve(args) => cmd_serve(args).await,
        Commands::Catalog(args) => cmd_catalog(args, format).await,
    }
}

async fn cmd_serve(args: &ServeArgs) -> Result<String> {
    let config = args.to_config();
    config.validate()?;

    let catalog = create_catalog(&config.catalog, config.cache_ttl)?;
    let rosters = Arc::new(MemoryRosterStore::new());
    let state = AppState::with_settings(catalog, rosters, WebSettings::from(&config));

    serve(&config, state).await?;
    Ok(String::new())
}

async fn cmd_catalog(args: &CatalogCommandArgs, format: OutputFormat) -> Result<String> {
    if args.page == 0 {
        return Err(CommandError::InvalidArgument("--page must be at least 1".to_string()).into());
    }
    if args.page_size == 0 {
        return Err(Error::config("page size must be positive"));
    }

    let config = args.catalog.to_config();
    config.validate()?;

    let catalog = create_catalog(&config, None)?;
    let items = catalog.fetch_catalog().await?;

    let term = normalize_term(args.search.as_deref());
    let page = browse(&items, &term, args.page, args.page_size);
    Ok(format_catalog_page(&page, &term, format))
}

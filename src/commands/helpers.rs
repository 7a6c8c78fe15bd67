//! Command helper utilities

use crate::cli::Cli;
use crate::config::SplitterConfig;
use crate::domain::InventorySnapshot;
use crate::error::Result;
use crate::lookup::CatalogLookup;
use crate::plugin::Splitter;

/// Splitter as assembled from the command line
pub type CliSplitter = Splitter<InventorySnapshot, SplitterConfig, CatalogLookup>;

/// Resolve the configuration, load the catalog and assemble a splitter
///
/// The configuration file comes first, then the command line overrides.
pub fn build_splitter(cli: &Cli) -> Result<CliSplitter> {
    let config = cli.apply_overrides(SplitterConfig::resolve(cli.config.as_deref())?);
    let catalog = config.load_catalog()?;
    let lookup = CatalogLookup::new(catalog, config.price_source());

    Ok(Splitter::new(cli.inventory(), config, lookup))
}

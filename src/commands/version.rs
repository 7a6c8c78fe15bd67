//! Version command implementation
//!
//! Besides the build, reports which configuration and catalog a split would
//! use, so a surprising price can be traced back to its source.

use crate::cli::Cli;
use crate::config::SplitterConfig;
use crate::error::Result;

/// Run version command
pub fn run(cli: &Cli) -> Result<()> {
    let config_path = SplitterConfig::locate(cli.config.as_deref());
    let config = cli.apply_overrides(SplitterConfig::resolve(cli.config.as_deref())?);

    println!("splitter {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Minimum Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!("Settings:");
    match &config_path {
        Some(path) => println!("  Config file: {}", path.display()),
        None => println!("  Config file: none (built-in defaults)"),
    }
    println!("  Default split size: {}", config.default_split_size);
    println!("  Price source: {}", config.price_source().label());
    match &config.catalog {
        Some(path) => {
            let catalog = config.load_catalog()?;
            println!("  Catalog: {} ({} items)", path.display(), catalog.len());
        }
        None => println!("  Catalog: none"),
    }

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

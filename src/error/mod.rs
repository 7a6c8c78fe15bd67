//! Error types and handling for Splitter
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Split failures (no cash, unknown item, zero divisor) are not errors: they are
//! ordinary outcomes rendered for the player, see [`crate::domain::SplitFailure`].
//! This enum covers everything around the split itself:
//! - [`config`]: Configuration file errors
//! - [`catalog`]: Item catalog errors

pub mod catalog;
pub mod config;


pub use catalog::{
    invalid as catalog_invalid, parse_failed as catalog_parse_failed,
    read_failed as catalog_read_failed,
};
pub use config::{
    not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Splitter operations
#[derive(Error, Diagnostic, Debug)]
pub enum SplitterError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(splitter::config::not_found),
        help("Pass an existing file with --config or unset SPLITTER_CONFIG")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(splitter::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(splitter::config::parse_failed),
        help("Expected keys: default_split_size, use_wiki_prices, catalog")
    )]
    ConfigParseFailed { path: String, reason: String },

    // Catalog errors
    #[error("Failed to read item catalog: {path}: {reason}")]
    #[diagnostic(code(splitter::catalog::read_failed))]
    CatalogReadFailed { path: String, reason: String },

    #[error("Failed to parse item catalog: {path}: {reason}")]
    #[diagnostic(
        code(splitter::catalog::parse_failed),
        help("A catalog is a list of items, each with a name and a price")
    )]
    CatalogParseFailed { path: String, reason: String },

    #[error("Invalid item catalog: {message}")]
    #[diagnostic(code(splitter::catalog::invalid))]
    CatalogInvalid { message: String },

    // Command line errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(splitter::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(splitter::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SplitterError {
    fn from(err: std::io::Error) -> Self {
        SplitterError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SplitterError {
    fn from(err: serde_yaml::Error) -> Self {
        SplitterError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SplitterError {
    fn from(err: serde_json::Error) -> Self {
        SplitterError::CatalogParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SplitterError>;

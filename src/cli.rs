//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::SplitterConfig;
use crate::domain::InventorySnapshot;

/// Splitter - split loot evenly
///
/// Divide coins, platinum tokens or the value of an item among a group.
#[derive(Parser, Debug)]
#[command(
    name = "splitter",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Split coins, platinum tokens or item values evenly among a group",
    long_about = "Splitter divides the coins or platinum tokens in your inventory, or the value \
                  of a named item, among a number of people and prints each share.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  splitter --coins 1000000 split          \x1b[90m# Split coins by the default size\x1b[0m\n   \
                  splitter --coins 1000000 split 4        \x1b[90m# Split coins four ways\x1b[0m\n   \
                  splitter split dragon bones 5           \x1b[90m# Split an item's value five ways\x1b[0m\n   \
                  splitter chat '!split 3 abyssal whip'   \x1b[90m# Answer a chat message\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to <config dir>/splitter/config.yaml)
    #[arg(long, short = 'c', global = true, env = "SPLITTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Coins in the inventory
    #[arg(long, global = true, value_name = "N")]
    pub coins: Option<u32>,

    /// Platinum tokens in the inventory
    #[arg(long, global = true, value_name = "N")]
    pub platinum: Option<u32>,

    /// Default split size (overrides the configuration file)
    #[arg(long, global = true, value_name = "N", allow_negative_numbers = true)]
    pub split_size: Option<i32>,

    /// Item catalog file, YAML or JSON (overrides the configuration file)
    #[arg(long, global = true, env = "SPLITTER_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Value items at their wiki price
    #[arg(long, global = true)]
    pub wiki_prices: bool,

    /// Print messages without colour
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Inventory described by `--coins` / `--platinum`
    pub fn inventory(&self) -> InventorySnapshot {
        InventorySnapshot::from_counts(
            self.coins.map(i64::from),
            self.platinum.map(i64::from),
        )
    }

    /// Apply command line overrides on top of a loaded configuration
    pub fn apply_overrides(&self, mut config: SplitterConfig) -> SplitterConfig {
        if let Some(split_size) = self.split_size {
            config.default_split_size = i64::from(split_size);
        }
        if let Some(catalog) = &self.catalog {
            config.catalog = Some(catalog.clone());
        }
        if self.wiki_prices {
            config.use_wiki_prices = true;
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split currency or an item's value
    Split(SplitArgs),

    /// Answer a `!split` chat message
    Chat(ChatArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the split command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Split inventory currency by the default size:\n    splitter --coins 5000 split\n\n\
                  Split inventory currency three ways:\n    splitter --coins 5000 split 3\n\n\
                  Split an item's value (size at either end):\n    splitter split dragon bones 5\n    splitter split 5 dragon bones")]
pub struct SplitArgs {
    /// Split size, item name, or item name with a split size first or last
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the chat command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Answer a chat message:\n    splitter --coins 900 chat '!split 3'")]
pub struct ChatArgs {
    /// Full chat message, e.g. "!split dragon bones 5"
    pub message: String,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    splitter completions --shell bash > ~/.bash_completion.d/splitter\n\n\
                  Generate zsh completions:\n    splitter completions --shell zsh > ~/.zfunc/_splitter")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

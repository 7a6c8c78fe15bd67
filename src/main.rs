//! Splitter - split loot evenly
//!
//! Command line front end for the split command.

use clap::Parser;

use splitter::cli::{Cli, Commands};
use splitter::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Split(args) => commands::split::run(&cli, args),
        Commands::Chat(args) => commands::chat::run(&cli, args),
        Commands::Version => commands::version::run(&cli),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Split command implementation
//!
//! Runs the split resolver on the command arguments and prints the message.
//! Failures such as an empty inventory are messages too, not errors.

use crate::cli::{Cli, SplitArgs};
use crate::error::Result;
use crate::plugin::SPLIT_COMMAND;
use crate::ui::StdoutSink;

use super::helpers::build_splitter;

/// Run split command
pub fn run(cli: &Cli, args: &SplitArgs) -> Result<()> {
    let splitter = build_splitter(cli)?;
    let mut sink = StdoutSink::new(cli.plain);

    splitter.on_command_executed(SPLIT_COMMAND, args.args.as_slice(), &mut sink);
    Ok(())
}

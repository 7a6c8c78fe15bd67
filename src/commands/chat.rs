//! Chat command implementation
//!
//! Feeds a chat line through the `!split` trigger. Lines without the trigger
//! produce no output.

use crate::cli::{ChatArgs, Cli};
use crate::error::Result;
use crate::ui::StdoutSink;

use super::helpers::build_splitter;

/// Run chat command
pub fn run(cli: &Cli, args: &ChatArgs) -> Result<()> {
    let splitter = build_splitter(cli)?;
    let mut sink = StdoutSink::new(cli.plain);

    if !splitter.on_chat_message(&args.message, &mut sink) {
        tracing::debug!(message = %args.message, "Not a split message");
    }
    Ok(())
}

//! Split command host
//!
//! [`Splitter`] wires the split resolver to its collaborators: where the
//! inventory comes from, where the default split size comes from, how items
//! are looked up, and where the resulting message goes. It answers the two
//! ways a player can ask for a split: the `::split` command and a `!split`
//! chat message.

use crate::config::SplitterConfig;
use crate::domain::{InventorySnapshot, SplitOutcome};
use crate::lookup::ItemLookup;
use crate::resolver;
use crate::ui::{DisplaySink, format_message};

/// Command name handled by [`Splitter::on_command_executed`]
pub const SPLIT_COMMAND: &str = "split";

/// Chat trigger handled by [`Splitter::on_chat_message`]
pub const SPLIT_CHAT_TRIGGER: &str = "!split";

/// Source of the current inventory
pub trait InventoryProvider {
    fn inventory(&self) -> InventorySnapshot;
}

impl InventoryProvider for InventorySnapshot {
    fn inventory(&self) -> InventorySnapshot {
        *self
    }
}

/// Source of the configured default split size
pub trait ConfigProvider {
    fn default_split_size(&self) -> i64;
}

impl ConfigProvider for SplitterConfig {
    fn default_split_size(&self) -> i64 {
        self.default_split_size
    }
}

impl ConfigProvider for i64 {
    fn default_split_size(&self) -> i64 {
        *self
    }
}

/// The split command with its collaborators
pub struct Splitter<I, C, L> {
    inventory: I,
    config: C,
    lookup: L,
}

impl<I, C, L> Splitter<I, C, L>
where
    I: InventoryProvider,
    C: ConfigProvider,
    L: ItemLookup,
{
    pub fn new(inventory: I, config: C, lookup: L) -> Self {
        tracing::info!(
            split_size = config.default_split_size(),
            "Splitter started"
        );
        Self {
            inventory,
            config,
            lookup,
        }
    }

    /// Resolve a split from command arguments, reading the collaborators fresh
    pub fn compute_split<S: AsRef<str>>(&self, args: &[S]) -> SplitOutcome {
        resolver::resolve(
            args,
            self.config.default_split_size(),
            &self.inventory.inventory(),
            &self.lookup,
        )
    }

    /// Handle an executed command; only `split` is handled
    ///
    /// Returns whether the command was handled.
    pub fn on_command_executed<S: AsRef<str>>(
        &self,
        command: &str,
        args: &[S],
        sink: &mut dyn DisplaySink,
    ) -> bool {
        if command != SPLIT_COMMAND {
            return false;
        }

        let outcome = self.compute_split(args);
        sink.display(&format_message(&outcome));
        true
    }

    /// Handle a chat message starting with `!split`
    ///
    /// The rest of the message is split on whitespace into the command
    /// arguments. Returns whether the message was handled.
    pub fn on_chat_message(&self, message: &str, sink: &mut dyn DisplaySink) -> bool {
        match parse_chat_command(message) {
            Some(args) => self.on_command_executed(SPLIT_COMMAND, args.as_slice(), sink),
            None => false,
        }
    }
}

/// Arguments of a `!split` chat message, or `None` for any other message
///
/// The trigger word is matched ignoring case.
pub fn parse_chat_command(message: &str) -> Option<Vec<&str>> {
    let mut words = message.split_whitespace();
    let trigger = words.next()?;
    if !trigger.eq_ignore_ascii_case(SPLIT_CHAT_TRIGGER) {
        return None;
    }
    Some(words.collect())
}

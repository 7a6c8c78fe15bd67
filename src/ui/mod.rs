//! Presentation layer
//!
//! This module handles:
//! - Formatting split outcomes into messages ([`formatter`])
//! - Number grouping for quantities ([`number`])
//! - Delivering messages through the [`DisplaySink`] trait
//!
//! The split logic never prints. It hands finished messages to a sink, which
//! allows different implementations for the terminal and for tests.

pub mod formatter;
pub mod number;

pub use formatter::{Message, Segment, Tone, format, format_message};
pub use number::format_number;

/// Receiver of formatted messages
pub trait DisplaySink {
    fn display(&mut self, message: &Message);
}

/// Sink printing each message on stdout
#[derive(Debug, Default)]
pub struct StdoutSink {
    /// Print without terminal styling
    pub plain: bool,
}

impl StdoutSink {
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }
}

impl DisplaySink for StdoutSink {
    fn display(&mut self, message: &Message) {
        if self.plain {
            println!("{}", message.plain());
        } else {
            println!("{}", message.styled());
        }
    }
}

/// Sink keeping the plain text of every message
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub messages: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl DisplaySink for RecordingSink {
    fn display(&mut self, message: &Message) {
        self.messages.push(message.plain());
    }
}

//! Formatting of split outcomes
//!
//! Every outcome becomes a [`Message`]: a sequence of normal and highlighted
//! segments. The plain text of a message is what the player reads; the
//! highlighting only marks which parts are values.

use std::fmt;

use console::Style;

use crate::domain::{ResolvedSplit, SplitFailure, SplitOutcome, Subject};

use super::number::format_number;

/// How a segment is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Highlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
}

/// A formatted message made of toned segments
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    segments: Vec<Segment>,
}

impl Message {
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Text without any styling
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Text with highlighted segments styled for the terminal
    ///
    /// `console` drops the styling when colours are disabled, e.g. when stdout
    /// is not a terminal.
    pub fn styled(&self) -> String {
        let highlight = Style::new().bold().cyan();
        self.segments
            .iter()
            .map(|s| match s.tone {
                Tone::Normal => s.text.clone(),
                Tone::Highlight => highlight.apply_to(&s.text).to_string(),
            })
            .collect()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain())
    }
}

/// Builder appending segments in order
#[derive(Debug, Default)]
pub struct MessageBuilder {
    segments: Vec<Segment>,
}

impl MessageBuilder {
    #[must_use]
    pub fn normal(self, text: impl Into<String>) -> Self {
        self.push(text.into(), Tone::Normal)
    }

    #[must_use]
    pub fn highlight(self, text: impl Into<String>) -> Self {
        self.push(text.into(), Tone::Highlight)
    }

    fn push(mut self, text: String, tone: Tone) -> Self {
        if text.is_empty() {
            return self;
        }
        // Merge with the previous segment when the tone does not change
        match self.segments.last_mut() {
            Some(last) if last.tone == tone => last.text.push_str(&text),
            _ => self.segments.push(Segment { text, tone }),
        }
        self
    }

    pub fn build(self) -> Message {
        Message {
            segments: self.segments,
        }
    }
}

/// Format an outcome as plain text
pub fn format(outcome: &SplitOutcome) -> String {
    format_message(outcome).plain()
}

/// Format an outcome as a toned message
pub fn format_message(outcome: &SplitOutcome) -> Message {
    match outcome {
        SplitOutcome::Success { split, per_share } => format_split(split, *per_share),
        SplitOutcome::Failure(reason) => format_failure(reason),
    }
}

fn format_split(split: &ResolvedSplit, per_share: i64) -> Message {
    let builder = match &split.subject {
        Subject::Item { name } => Message::builder()
            .normal("Splitting ")
            .highlight(name.as_str())
            .normal(": "),
        currency => Message::builder().normal(format!("Splitting {}s ", currency.label())),
    };

    builder
        .highlight(format_number(per_share))
        .normal(", ( ")
        .highlight(format_number(split.quantity))
        .normal(" / ")
        .highlight(format_number(split.split_size))
        .normal(" )")
        .build()
}

fn format_failure(reason: &SplitFailure) -> Message {
    match reason {
        SplitFailure::InventoryNotLoaded | SplitFailure::NoCash => {
            Message::builder().highlight(reason.to_string()).build()
        }
        SplitFailure::ItemNotFound(phrase) => Message::builder()
            .highlight("Unable to find item '")
            .normal(phrase.as_str())
            .highlight("'.")
            .build(),
        SplitFailure::DivideByZero | SplitFailure::InvalidSplitSize(_) => {
            Message::builder().normal(reason.to_string()).build()
        }
    }
}

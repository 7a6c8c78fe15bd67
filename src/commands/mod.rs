//! Command implementations for Splitter CLI

pub mod chat;
pub mod completions;
pub mod helpers;
pub mod split;
pub mod version;

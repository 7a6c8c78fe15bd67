//! Split size extraction
//!
//! Finds the integer split size in an argument list. Only the ends of the list
//! are candidates: the last token first, then the first token. Interior tokens
//! are always part of the item phrase.

/// Where the split size token was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitSizePosition {
    AtStart,
    AtEnd,
    NotFound,
}

/// Result of scanning an argument list for a split size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSizeExtraction<'a, S> {
    pub position: SplitSizePosition,

    /// Parsed split size; zero when `position` is `NotFound`
    pub split_size: i64,

    /// Arguments left after removing the split size token
    pub residual: &'a [S],
}

impl<'a, S: AsRef<str>> SplitSizeExtraction<'a, S> {
    /// Scan `args` for a split size, last token first
    pub fn scan(args: &'a [S]) -> Self {
        if let Some((last, rest)) = args.split_last() {
            if let Some(split_size) = parse_split_size(last.as_ref()) {
                return Self {
                    position: SplitSizePosition::AtEnd,
                    split_size,
                    residual: rest,
                };
            }
        }

        if let Some((first, rest)) = args.split_first() {
            if let Some(split_size) = parse_split_size(first.as_ref()) {
                return Self {
                    position: SplitSizePosition::AtStart,
                    split_size,
                    residual: rest,
                };
            }
        }

        Self {
            position: SplitSizePosition::NotFound,
            split_size: 0,
            residual: args,
        }
    }

    pub fn found(&self) -> bool {
        self.position != SplitSizePosition::NotFound
    }

    /// Residual tokens joined into a lookup phrase
    pub fn phrase(&self) -> String {
        join_phrase(self.residual)
    }
}

/// Parse a token as a split size
///
/// Accepts what a 32-bit signed integer parse accepts: an optional sign and
/// ASCII digits, nothing else. Out-of-range values are not split sizes.
pub fn parse_split_size(token: &str) -> Option<i64> {
    token.parse::<i32>().ok().map(i64::from)
}

/// Join tokens with single spaces
pub fn join_phrase<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

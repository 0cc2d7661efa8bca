// Error types for signal configuration, tracking, and row split/join

use thiserror::Error;

use crate::core::SignalKind;

/// Result type for row operations
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid use of a `SignalTracker`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerError {
    /// A character was fed to a tracker whose signal already matched.
    /// The tracker must be reset before it can process more input.
    #[error("signal already triggered; reset the tracker before processing more characters")]
    AlreadyTriggered,
}

/// Rejected `Signals` configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalsError {
    /// The delimiter is the only mandatory signal
    #[error("delimiter must be specified")]
    DelimiterNotSpecified,

    /// Two specified signals are equal or one contains the other
    #[error("{first} and {second} signals overlap: one contains the other")]
    Overlap {
        first: SignalKind,
        second: SignalKind,
    },
}

/// Row split/join error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid signal configuration
    #[error("invalid signals: {0}")]
    Signals(#[from] SignalsError),

    /// Tracker contract violation
    #[error("tracker error: {0}")]
    Tracker(#[from] TrackerError),

    /// `force_quotes` was requested but no quote signal is configured
    #[error("force_quotes requires a quote signal")]
    ForceQuotesWithoutQuote,

    /// Field content needs quoting or escaping but neither signal is configured
    #[error("field {field} contains the {kind} signal but neither quote nor escape is specified")]
    Unrepresentable { field: usize, kind: SignalKind },

    /// Row ended inside a quoted region
    #[error("unterminated quote in field {field}")]
    UnterminatedQuote { field: usize },

    /// Characters found after the row terminator
    #[error("unexpected characters after row terminator at position {position}")]
    TrailingCharacters { position: usize },

    /// Failure inside a multi-row operation
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<Error>,
    },

    /// Fixed-width row length differs from the sum of column widths
    #[error("fixed-width row has {actual} characters, expected {expected}")]
    FixedWidthMismatch { expected: usize, actual: usize },

    /// Field count differs from the number of fixed-width columns
    #[error("got {actual} fields for {expected} fixed-width columns")]
    ColumnCountMismatch { expected: usize, actual: usize },

    /// Field does not fit its fixed-width column
    #[error("field {field} has {len} characters but its column is {width} wide")]
    FieldTooWide {
        field: usize,
        width: usize,
        len: usize,
    },

    /// No schema entry header is a prefix of the row
    #[error("no schema entry matches row")]
    NoSchemaEntry,

    /// No schema entry was registered under this header
    #[error("no schema entry with header {0:?}")]
    UnknownHeader(String),

    /// Schema headers must be non-empty
    #[error("schema entry header must not be empty")]
    EmptyHeader,

    /// Two schema headers where one is a prefix of the other
    #[error("header {new:?} conflicts with registered header {existing:?}")]
    HeaderConflict { existing: String, new: String },
}

impl Error {
    /// Attach a row index to an error from a multi-row operation
    pub(crate) fn in_row(self, row: usize) -> Self {
        Error::Row {
            row,
            source: Box::new(self),
        }
    }
}

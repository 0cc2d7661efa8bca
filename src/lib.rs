// textcolumns - column-oriented text row processing
//
// Strategies:
// Split: single-row quoted decode driven by per-signal trackers (split_quoted_row)
// Join: single-pass quoted/escaped encode (join_quoted_row)
// Batch: enumerable and rayon-parallel multi-row overloads (split_quoted_rows*)
// Streaming: chunked multi-row decode (StreamingSplitter)
// Fixed: fixed-width columns (split_fixed, join_fixed)
// Schema: per-row layout selected by header prefix (Schema)

pub mod core;
pub mod error;
pub mod schema;
pub mod strategy;

#[cfg(feature = "serde")]
pub mod config;

pub use crate::core::{Signal, SignalKind, SignalSet, SignalTracker, Signals, NEWLINE};
pub use crate::error::{Error, Result, SignalsError, TrackerError};
pub use crate::schema::{Layout, Row, Schema, SchemaEntry};
pub use crate::strategy::{
    join_fixed, join_quoted_row, join_quoted_rows, join_quoted_rows_parallel, split_fixed,
    split_quoted_row, split_quoted_rows, split_quoted_rows_parallel, split_text, FieldEncoding,
    RowDecoder, Step, StreamingSplitter,
};

#[cfg(feature = "serde")]
pub use crate::config::{Preset, SignalsConfig};

/// Build a validated signal bundle. Pass `""` to leave quote, new-row, or
/// escape unspecified.
pub fn create_signals(
    delimiter: &str,
    quote: &str,
    new_row: &str,
    escape: &str,
) -> std::result::Result<Signals, SignalsError> {
    Signals::new(delimiter, quote, new_row, escape)
}

/// Tracker for a single signal, in its initial state
pub fn create_signal_tracker(signal: &str) -> SignalTracker {
    SignalTracker::new(signal)
}

//! Signal configuration: delimiter, quote, row terminator, and escape.
//!
//! A `Signals` bundle is validated once and then shared read-only by any
//! number of split/join calls. No specified signal may equal or contain
//! another, so at most one signal can complete on any given character.

use std::fmt;

use tracing::debug;

use crate::error::SignalsError;

/// Platform row terminator used by the presets
#[cfg(windows)]
pub const NEWLINE: &str = "\r\n";
/// Platform row terminator used by the presets
#[cfg(not(windows))]
pub const NEWLINE: &str = "\n";

/// Role a signal plays in a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Delimiter,
    Quote,
    NewRow,
    Escape,
}

impl SignalKind {
    pub const ALL: [SignalKind; 4] = [
        SignalKind::Delimiter,
        SignalKind::Quote,
        SignalKind::NewRow,
        SignalKind::Escape,
    ];
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignalKind::Delimiter => "delimiter",
            SignalKind::Quote => "quote",
            SignalKind::NewRow => "new-row",
            SignalKind::Escape => "escape",
        };
        f.write_str(name)
    }
}

/// A string with special meaning in row text. Empty means "not specified".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Signal {
    text: String,
    chars: usize,
}

impl Signal {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let chars = text.chars().count();
        Signal { text, chars }
    }

    /// The unspecified signal
    pub fn none() -> Self {
        Signal::default()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is_specified(&self) -> bool {
        !self.text.is_empty()
    }

    /// Length in characters
    #[inline]
    pub fn char_len(&self) -> usize {
        self.chars
    }

    /// Length in bytes
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    /// True if the signal is specified and occurs in `field`
    #[inline]
    pub fn occurs_in(&self, field: &str) -> bool {
        self.is_specified() && field.contains(self.text.as_str())
    }

    /// Equal to or contained in the other signal, in either direction
    fn overlaps(&self, other: &Signal) -> bool {
        self.text.contains(other.text.as_str()) || other.text.contains(self.text.as_str())
    }
}

impl From<&str> for Signal {
    fn from(text: &str) -> Self {
        Signal::new(text)
    }
}

impl From<String> for Signal {
    fn from(text: String) -> Self {
        Signal::new(text)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.text)
    }
}

/// Validated bundle of the four row signals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signals {
    delimiter: Signal,
    quote: Signal,
    new_row: Signal,
    escape: Signal,
}

impl Signals {
    /// Build and validate a signal bundle. Pass `""` for any signal other
    /// than the delimiter to leave it unspecified.
    pub fn new(
        delimiter: impl Into<Signal>,
        quote: impl Into<Signal>,
        new_row: impl Into<Signal>,
        escape: impl Into<Signal>,
    ) -> Result<Self, SignalsError> {
        let signals = Signals {
            delimiter: delimiter.into(),
            quote: quote.into(),
            new_row: new_row.into(),
            escape: escape.into(),
        };
        signals.validate()?;
        Ok(signals)
    }

    fn validate(&self) -> Result<(), SignalsError> {
        if !self.delimiter.is_specified() {
            debug!("rejected signals: delimiter not specified");
            return Err(SignalsError::DelimiterNotSpecified);
        }

        let specified: Vec<(SignalKind, &Signal)> = SignalKind::ALL
            .iter()
            .map(|&kind| (kind, self.get(kind)))
            .filter(|(_, signal)| signal.is_specified())
            .collect();

        for (i, &(first, a)) in specified.iter().enumerate() {
            for &(second, b) in &specified[i + 1..] {
                if a.overlaps(b) {
                    debug!(%first, %second, "rejected signals: {} overlaps {}", a, b);
                    return Err(SignalsError::Overlap { first, second });
                }
            }
        }
        Ok(())
    }

    /// Comma-delimited, double-quoted, platform newline, no escape
    pub fn csv() -> Self {
        Self::preset(",")
    }

    /// Tab-delimited, double-quoted, platform newline, no escape
    pub fn tab_delimited() -> Self {
        Self::preset("\t")
    }

    /// Pipe-delimited, double-quoted, platform newline, no escape
    pub fn pipe_delimited() -> Self {
        Self::preset("|")
    }

    // Preset signals are known not to overlap
    fn preset(delimiter: &str) -> Self {
        Signals {
            delimiter: Signal::new(delimiter),
            quote: Signal::new("\""),
            new_row: Signal::new(NEWLINE),
            escape: Signal::none(),
        }
    }

    pub fn get(&self, kind: SignalKind) -> &Signal {
        match kind {
            SignalKind::Delimiter => &self.delimiter,
            SignalKind::Quote => &self.quote,
            SignalKind::NewRow => &self.new_row,
            SignalKind::Escape => &self.escape,
        }
    }

    #[inline]
    pub fn delimiter(&self) -> &Signal {
        &self.delimiter
    }

    #[inline]
    pub fn quote(&self) -> &Signal {
        &self.quote
    }

    #[inline]
    pub fn new_row(&self) -> &Signal {
        &self.new_row
    }

    #[inline]
    pub fn escape(&self) -> &Signal {
        &self.escape
    }

    /// Always true for a constructed bundle
    #[inline]
    pub fn delimiter_is_specified(&self) -> bool {
        self.delimiter.is_specified()
    }

    #[inline]
    pub fn quote_is_specified(&self) -> bool {
        self.quote.is_specified()
    }

    #[inline]
    pub fn new_row_is_specified(&self) -> bool {
        self.new_row.is_specified()
    }

    #[inline]
    pub fn escape_is_specified(&self) -> bool {
        self.escape.is_specified()
    }

    /// Longest signal in characters
    pub fn max_char_len(&self) -> usize {
        SignalKind::ALL
            .iter()
            .map(|&kind| self.get(kind).char_len())
            .max()
            .unwrap_or(0)
    }
}

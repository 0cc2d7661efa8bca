// Quoted-row decoder
//
// Single pass over the row's characters with no look-ahead. A SignalSet
// classifies each character; the decoder appends every character to the
// current field and, when a signal completes, strips the signal's text back
// off the end of the field buffer (or keeps it, if the signal was escaped).
//
// Rules:
// - Quote opens a region only as the first content of a field
// - Inside quotes, delimiter and new-row are literal
// - Quote directly after a closing quote is one literal quote
// - Escape makes the signal that immediately follows it literal, inside
//   or outside quotes; escape before ordinary text is kept as-is
// - Unquoted new-row ends the row

use tracing::trace;

use crate::core::{SignalKind, SignalSet, Signals};
use crate::error::{Error, Result};

/// Outcome of feeding one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// An unquoted new-row signal completed the row
    RowEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Unquoted,
    Quoted,
    /// Just past a closing quote; `since` counts characters after it
    Closed { since: usize },
}

/// Escape seen, waiting to find out whether a signal follows it
#[derive(Debug, Clone, Copy)]
struct PendingEscape {
    /// Byte offset of the escape text in the field buffer
    start: usize,
    /// Characters pushed after the escape
    since: usize,
}

/// Incremental decoder for quoted rows.
///
/// Feed characters with `push`; collect the row with `finish` (end of input)
/// or `take_fields` (after `Step::RowEnd`).
pub struct RowDecoder<'s> {
    signals: &'s Signals,
    set: SignalSet,
    max_len: usize,
    fields: Vec<String>,
    field: String,
    region: Region,
    escape: Option<PendingEscape>,
    chars: usize,
}

impl<'s> RowDecoder<'s> {
    pub fn new(signals: &'s Signals) -> Self {
        RowDecoder {
            signals,
            set: SignalSet::new(signals),
            max_len: signals.max_char_len(),
            fields: Vec::with_capacity(8),
            field: String::new(),
            region: Region::Unquoted,
            escape: None,
            chars: 0,
        }
    }

    /// Feed the next character of the row.
    pub fn push(&mut self, c: char) -> Result<Step> {
        self.field.push(c);
        self.chars += 1;
        if let Some(pending) = self.escape.as_mut() {
            pending.since += 1;
        }
        if let Region::Closed { since } = &mut self.region {
            *since += 1;
        }

        let Some(kind) = self.set.process_char(c)? else {
            self.expire();
            return Ok(Step::Continue);
        };

        if let Some(pending) = self.escape.take() {
            if pending.since == self.signals.get(kind).char_len() {
                // Escaped signal: drop the escape text, keep the signal literally
                let end = pending.start + self.signals.escape().byte_len();
                self.field.replace_range(pending.start..end, "");
                self.leave_closed();
                return Ok(Step::Continue);
            }
        }

        match kind {
            SignalKind::Escape => {
                let start = self.field.len() - self.signals.escape().byte_len();
                self.escape = Some(PendingEscape { start, since: 0 });
                self.leave_closed();
            }
            SignalKind::Quote => self.on_quote(),
            SignalKind::Delimiter => {
                if self.region != Region::Quoted {
                    self.strip(kind);
                    self.end_field();
                }
            }
            SignalKind::NewRow => {
                if self.region != Region::Quoted {
                    self.strip(kind);
                    self.end_field();
                    return Ok(Step::RowEnd);
                }
            }
        }
        Ok(Step::Continue)
    }

    fn on_quote(&mut self) {
        let quote_len = self.signals.quote().byte_len();
        match self.region {
            Region::Unquoted if self.field.len() == quote_len => {
                self.strip(SignalKind::Quote);
                self.region = Region::Quoted;
            }
            // Quote inside unquoted content is literal
            Region::Unquoted => {}
            Region::Quoted => {
                self.strip(SignalKind::Quote);
                self.region = Region::Closed { since: 0 };
            }
            // Doubled quote: the closing quote was stripped, keep this one
            Region::Closed { .. } => self.region = Region::Quoted,
        }
    }

    /// Drop pending states that can no longer be completed by a signal
    fn expire(&mut self) {
        if let Some(pending) = self.escape {
            if pending.since >= self.max_len {
                self.escape = None;
            }
        }
        if let Region::Closed { since } = self.region {
            if since >= self.signals.quote().char_len() {
                self.region = Region::Unquoted;
            }
        }
    }

    fn leave_closed(&mut self) {
        if let Region::Closed { .. } = self.region {
            self.region = Region::Unquoted;
        }
    }

    /// Remove the text of a just-completed signal from the end of the field
    fn strip(&mut self, kind: SignalKind) {
        let len = self.signals.get(kind).byte_len();
        self.field.truncate(self.field.len() - len);
    }

    fn end_field(&mut self) {
        self.fields.push(std::mem::take(&mut self.field));
        self.region = Region::Unquoted;
        self.escape = None;
    }

    /// True if any character has been pushed since the last completed row
    pub fn has_partial(&self) -> bool {
        self.chars > 0
    }

    /// Take the fields of a row ended by `Step::RowEnd`
    pub fn take_fields(&mut self) -> Vec<String> {
        self.reset();
        std::mem::take(&mut self.fields)
    }

    /// End of input: close the last field and return the row.
    pub fn finish(&mut self) -> Result<Vec<String>> {
        if self.region == Region::Quoted {
            let field = self.fields.len();
            self.fields.clear();
            self.field.clear();
            self.reset();
            return Err(Error::UnterminatedQuote { field });
        }
        self.end_field();
        Ok(self.take_fields())
    }

    fn reset(&mut self) {
        self.set.reset();
        self.region = Region::Unquoted;
        self.escape = None;
        self.chars = 0;
    }
}

/// Split one row into unquoted, unescaped field values.
///
/// A single trailing new-row signal is accepted; anything after it is an error.
pub fn split_quoted_row(row: &str, signals: &Signals) -> Result<Vec<String>> {
    let mut decoder = RowDecoder::new(signals);

    for (position, (offset, c)) in row.char_indices().enumerate() {
        if decoder.push(c)? == Step::RowEnd {
            if offset + c.len_utf8() < row.len() {
                return Err(Error::TrailingCharacters {
                    position: position + 1,
                });
            }
            let fields = decoder.take_fields();
            trace!(fields = fields.len(), "split terminated row");
            return Ok(fields);
        }
    }

    let fields = decoder.finish()?;
    trace!(fields = fields.len(), "split row");
    Ok(fields)
}

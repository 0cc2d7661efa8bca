// Streaming multi-row splitter
//
// Stateful decoder for text that holds many rows. Feed chunks as they
// arrive and take complete rows as they become available.
//
// Key design:
// - Rows end at an unquoted, unescaped new-row signal
// - Quote, escape, and partial signal state carry across chunk boundaries,
//   so a chunk may end anywhere, including inside a multi-character signal
// - Blank rows are skipped

use tracing::debug;

use super::split::{RowDecoder, Step};
use crate::core::Signals;
use crate::error::Result;

/// State for a streaming row splitter
pub struct StreamingSplitter<'s> {
    decoder: RowDecoder<'s>,
    /// Complete rows ready to be taken
    complete_rows: Vec<Vec<String>>,
    /// Rows completed so far, including skipped blank rows
    rows_seen: usize,
}

impl<'s> StreamingSplitter<'s> {
    pub fn new(signals: &'s Signals) -> Self {
        StreamingSplitter {
            decoder: RowDecoder::new(signals),
            complete_rows: Vec::new(),
            rows_seen: 0,
        }
    }

    /// Feed a chunk of text. Errors name the row they occurred in.
    pub fn feed(&mut self, chunk: &str) -> Result<()> {
        for c in chunk.chars() {
            let step = self
                .decoder
                .push(c)
                .map_err(|e| e.in_row(self.rows_seen))?;
            if step == Step::RowEnd {
                let row = self.decoder.take_fields();
                self.complete_row(row);
            }
        }
        Ok(())
    }

    fn complete_row(&mut self, row: Vec<String>) {
        self.rows_seen += 1;
        if !is_blank(&row) {
            self.complete_rows.push(row);
        }
    }

    /// Take up to `max` complete rows
    pub fn take_rows(&mut self, max: usize) -> Vec<Vec<String>> {
        let take_count = max.min(self.complete_rows.len());
        self.complete_rows.drain(0..take_count).collect()
    }

    pub fn available_rows(&self) -> usize {
        self.complete_rows.len()
    }

    /// True if text of an unfinished row has been fed
    pub fn has_partial(&self) -> bool {
        self.decoder.has_partial()
    }

    /// End of input: decode the final unterminated row and return every
    /// row not yet taken.
    pub fn finalize(&mut self) -> Result<Vec<Vec<String>>> {
        if self.decoder.has_partial() {
            let row = self
                .decoder
                .finish()
                .map_err(|e| e.in_row(self.rows_seen))?;
            self.complete_row(row);
        }
        debug!(
            rows = self.rows_seen,
            pending = self.complete_rows.len(),
            "streaming split finalized"
        );
        Ok(std::mem::take(&mut self.complete_rows))
    }
}

fn is_blank(row: &[String]) -> bool {
    row.is_empty() || (row.len() == 1 && row[0].is_empty())
}

/// Split a block of text into rows at unquoted new-row signals
pub fn split_text(text: &str, signals: &Signals) -> Result<Vec<Vec<String>>> {
    let mut splitter = StreamingSplitter::new(signals);
    splitter.feed(text)?;
    splitter.finalize()
}

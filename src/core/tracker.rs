// Streaming matcher for a single signal
//
// Characters are fed one at a time with no look-ahead. A multi-character
// signal keeps a list of active offsets: offset `o` means the last `o`
// characters matched `signal[..o]`. Several partial matches can be in flight
// at once, which is what lets "abac" be found inside "ababac".

use crate::error::TrackerError;

/// Tracks partial and complete matches of one signal in a character stream.
#[derive(Debug, Clone)]
pub struct SignalTracker {
    signal: Vec<char>,
    /// Offsets into `signal` that the next character may extend
    active: Vec<usize>,
    triggered: bool,
}

impl SignalTracker {
    /// Create a tracker for `signal`. An empty signal never matches.
    pub fn new(signal: &str) -> Self {
        let signal: Vec<char> = signal.chars().collect();
        SignalTracker {
            active: Vec::with_capacity(signal.len()),
            signal,
            triggered: false,
        }
    }

    /// Feed the next character.
    ///
    /// Returns `Err(TrackerError::AlreadyTriggered)` if the previous character
    /// completed the signal and `reset` has not been called since.
    pub fn process_char(&mut self, c: char) -> Result<(), TrackerError> {
        if self.signal.is_empty() {
            return Ok(());
        }
        if self.triggered {
            return Err(TrackerError::AlreadyTriggered);
        }

        if self.signal.len() == 1 {
            self.triggered = c == self.signal[0];
            return Ok(());
        }

        // Reverse order so removals don't shift unvisited entries
        let mut i = self.active.len();
        while i > 0 {
            i -= 1;
            let offset = self.active[i];
            if self.signal[offset] != c {
                self.active.remove(i);
            } else if offset + 1 < self.signal.len() {
                self.active[i] = offset + 1;
            } else {
                self.triggered = true;
                self.active.clear();
                return Ok(());
            }
        }

        // Every recurrence of the first character may start a new match
        if c == self.signal[0] {
            self.active.push(1);
        }
        Ok(())
    }

    /// True while at least one partial match of a multi-character signal is in progress
    #[inline]
    pub fn is_counting(&self) -> bool {
        !self.active.is_empty()
    }

    /// True when the most recent character completed the signal
    #[inline]
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Return to the initial state
    pub fn reset(&mut self) {
        self.triggered = false;
        self.active.clear();
    }

    /// Signal length in characters
    #[inline]
    pub fn signal_len(&self) -> usize {
        self.signal.len()
    }
}

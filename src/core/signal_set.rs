// Classify a character stream against all four signals at once
//
// Each signal has its own tracker; every character goes to all of them.
// Because no signal contains another, at most one can complete on a given
// character. The first signal to complete wins: once it fires, every tracker
// is reset so the matched characters can't be reused by a competing signal.

use super::signals::{SignalKind, Signals};
use super::tracker::SignalTracker;
use crate::error::TrackerError;

/// One tracker per signal role
#[derive(Debug, Clone)]
pub struct SignalSet {
    trackers: [(SignalKind, SignalTracker); 4],
}

impl SignalSet {
    pub fn new(signals: &Signals) -> Self {
        // Escape first: it changes the meaning of whatever completes next
        let tracker = |kind| (kind, SignalTracker::new(signals.get(kind).as_str()));
        SignalSet {
            trackers: [
                tracker(SignalKind::Escape),
                tracker(SignalKind::Quote),
                tracker(SignalKind::Delimiter),
                tracker(SignalKind::NewRow),
            ],
        }
    }

    /// Feed one character to every tracker.
    ///
    /// Returns the signal completed by this character, if any. All trackers
    /// are reset after a completion.
    pub fn process_char(&mut self, c: char) -> Result<Option<SignalKind>, TrackerError> {
        let mut completed = None;
        for (kind, tracker) in self.trackers.iter_mut() {
            tracker.process_char(c)?;
            if completed.is_none() && tracker.is_triggered() {
                completed = Some(*kind);
            }
        }
        if completed.is_some() {
            self.reset();
        }
        Ok(completed)
    }

    /// True while any signal has a partial match in progress
    pub fn is_counting(&self) -> bool {
        self.trackers.iter().any(|(_, t)| t.is_counting())
    }

    pub fn reset(&mut self) {
        for (_, tracker) in self.trackers.iter_mut() {
            tracker.reset();
        }
    }
}

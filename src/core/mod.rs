// Core primitives: signals, trackers, and field scanning

pub mod scanner;
pub mod signal_set;
pub mod signals;
pub mod tracker;

pub use scanner::*;
pub use signal_set::SignalSet;
pub use signals::{Signal, SignalKind, Signals, NEWLINE};
pub use tracker::SignalTracker;

// Row split/join strategies

pub mod fixed;
pub mod join;
pub mod parallel;
pub mod split;
pub mod streaming;

pub use fixed::*;
pub use join::*;
pub use parallel::*;
pub use split::*;
pub use streaming::*;

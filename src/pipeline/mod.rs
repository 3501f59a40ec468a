// Lead pipeline controller: board grouping, move requests and
// confirmation of guarded (terminal) transitions.

pub mod board;
pub mod controller;
pub mod error;

pub use board::*;
pub use controller::*;
pub use error::*;

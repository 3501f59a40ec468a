// Core data models for leadboard
// These structs represent the domain entities

pub mod stage;
pub mod lead;
pub mod closing;

pub use stage::*;
pub use lead::*;
pub use closing::*;

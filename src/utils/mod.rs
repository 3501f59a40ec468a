pub mod date;
pub mod fuzzy;

pub use date::{format_age, format_date};

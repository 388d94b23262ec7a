pub mod ai;
pub mod articles;
pub mod error;
pub mod extractors;

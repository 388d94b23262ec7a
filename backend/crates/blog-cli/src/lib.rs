//! blog-cli library
//!
//! Exports the HTTP client for use in tests and other crates.

pub(crate) mod client;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};

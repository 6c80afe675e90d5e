//! Searcher services implementations

pub mod github_client;

#[cfg(test)]
pub mod tests;

pub use github_client::*;

//! Command implementations for the dfs-lineup CLI

pub mod common;
pub mod export;
pub mod lineup;
pub mod validate;

pub use common::{load_pool, CommandContext};

#[cfg(test)]
mod tests;

//! # Utilities
//!
//! Operator message formatting. Messages are written with `&` colour codes
//! (`&c`, `&7`, ...); [`colorize`] turns them into the host's section-sign
//! codes and [`strip_colors`] removes them for plain consoles.
pub mod message;

pub use message::{colorize, strip_colors};

// Test module declaration
#[cfg(test)]
mod tests;

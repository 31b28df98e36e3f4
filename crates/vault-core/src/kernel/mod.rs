//! # Vault Core Kernel
//!
//! The `kernel` module is the composition root of `vault-core`.
//!
//! ## Key Responsibilities & Components:
//!
//! - **Application Bootstrapping**: [`Application`](bootstrap::Application) owns the
//!   process-wide [`ServiceRegistry`](crate::service::ServiceRegistry), registers the
//!   fallback permission provider on start and clears Vault's registrations on shutdown.
//! - **Core Constants**: message fragments, permission nodes and URLs in `constants`.
//! - **Error Handling**: the crate [`Error`](error::Error) and `Result` alias in `error`.
pub mod bootstrap;
pub mod constants;
pub mod error;

pub use bootstrap::Application;
pub use error::{Error, KernelLifecyclePhase, Result};
// Test module declaration
#[cfg(test)]
mod tests;

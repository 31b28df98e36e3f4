//! # Vault Core Errors
//!
//! Defines the crate-wide [`Error`] enum and its [`Result`] alias.
//!
//! Registry operations never produce an error; absence of a provider is an
//! `Option::None`. Errors come from provider contracts declining an operation
//! ([`Error::UnsupportedCapability`]), from configuration loading, from the
//! update checker, and from misuse of the [`Application`](crate::kernel::Application)
//! lifecycle.
use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

/// Error type shared by every Vault subsystem
#[derive(Debug, ThisError)]
pub enum Error {
    /// A provider declined an operation its backing system has no model for.
    /// The message reads `"<provider><reason>"`, e.g. `"SuperPerms has no group permissions."`.
    #[error("{provider}{reason}")]
    UnsupportedCapability { provider: String, reason: String },

    /// Configuration file could not be read or parsed
    #[error("Configuration error for '{}': {message}", path.display())]
    Config {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration file extension does not map to an enabled format
    #[error("Unknown or unsupported config format for path: {}", path.display())]
    UnsupportedConfigFormat { path: PathBuf },

    /// Update check failed (network or response shape)
    #[error("Update check failed: {message}")]
    Update {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Error occurring during a specific kernel lifecycle phase.
    #[error("Kernel lifecycle error during {phase}: {message}")]
    KernelLifecycleError {
        phase: KernelLifecyclePhase,
        message: String,
    },

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Represents a specific phase in the kernel's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum KernelLifecyclePhase {
    #[error("Start")]
    Start,
    #[error("Shutdown")]
    Shutdown,
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl Error {
    /// Build an [`Error::UnsupportedCapability`] for `provider`.
    pub fn unsupported(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::UnsupportedCapability {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is a provider declining an operation
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::UnsupportedCapability { .. })
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Update {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

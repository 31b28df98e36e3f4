pub mod chat;
pub mod command;
pub mod config;
pub mod economy;
pub mod host;
pub mod kernel;
pub mod permission;
pub mod service;
pub mod update;
pub mod utils;

// Re-export key public types/traits for the binary and provider crates
pub use chat::Chat;
pub use command::{CommandSender, VaultCommand};
pub use config::VaultConfig;
pub use economy::{Economy, EconomyResponse, ResponseType};
pub use host::{PlayerDirectory, PlayerIdentity, PlayerRef};
pub use kernel::Application;
pub use kernel::error::{Error as KernelError, Result};
pub use permission::Permission;
pub use service::{CapabilityKind, ServicePriority, ServiceRegistry};

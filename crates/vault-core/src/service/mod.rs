//! # Vault Service Registry
//!
//! The capability-provider registry: for each [`CapabilityKind`] it keeps every
//! [`Registration`] (provider handle, owner, [`ServicePriority`], sequence) and
//! resolves the single active provider.
//!
//! - **[`capability`]**: the kind tag and the [`Capability`] trait binding a
//!   contract trait object to its kind.
//! - **[`priority`]**: the ordered [`ServicePriority`] rank with the host's named levels.
//! - **[`registration`]**: the type-erased [`ProviderHandle`] and immutable [`Registration`].
//! - **[`registry`]**: the shared [`ServiceRegistry`].
//!
//! Resolution rule: highest priority wins; among equal priorities the most
//! recent registration wins. An empty kind resolves to `None`.
pub mod capability;
pub mod priority;
pub mod registration;
pub mod registry;

pub use capability::{Capability, CapabilityKind};
pub use priority::ServicePriority;
pub use registration::{ProviderHandle, Registration};
pub use registry::{ServiceRegistry, normalize_provider_name};

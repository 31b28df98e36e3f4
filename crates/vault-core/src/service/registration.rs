use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::service::capability::{Capability, CapabilityKind};
use crate::service::priority::ServicePriority;

/// Type-erased handle to a provider implementation.
///
/// Wraps an `Arc<S>` for some contract type `S` (usually `dyn Economy` and
/// friends) behind `dyn Any` so the registry can store every kind in one map.
#[derive(Clone)]
pub struct ProviderHandle {
    inner: Arc<dyn Any + Send + Sync>,
    name: String,
}

impl ProviderHandle {
    /// Wrap a typed provider
    pub fn new<S: Capability + ?Sized>(provider: Arc<S>) -> Self {
        let name = provider.provider_name();
        Self {
            inner: Arc::new(provider),
            name,
        }
    }

    /// Display name captured at wrap time
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recover the typed provider; `None` when the handle wraps another contract
    pub fn downcast<S: Capability + ?Sized>(&self) -> Option<Arc<S>> {
        self.inner.downcast_ref::<Arc<S>>().cloned()
    }

    /// Whether two handles wrap the same provider allocation
    pub fn ptr_eq(&self, other: &ProviderHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderHandle").field("name", &self.name).finish()
    }
}

/// One provider registered for one capability kind.
///
/// Immutable once created; the registry removes registrations wholesale.
#[derive(Debug, Clone)]
pub struct Registration {
    kind: CapabilityKind,
    provider: ProviderHandle,
    owner: String,
    priority: ServicePriority,
    sequence: u64,
}

impl Registration {
    pub(crate) fn new(
        kind: CapabilityKind,
        provider: ProviderHandle,
        owner: String,
        priority: ServicePriority,
        sequence: u64,
    ) -> Self {
        Self {
            kind,
            provider,
            owner,
            priority,
            sequence,
        }
    }

    pub fn kind(&self) -> CapabilityKind {
        self.kind
    }

    pub fn handle(&self) -> &ProviderHandle {
        &self.provider
    }

    /// Typed provider behind this registration
    pub fn provider<S: Capability + ?Sized>(&self) -> Option<Arc<S>> {
        self.provider.downcast::<S>()
    }

    /// Display name of the provider
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Plugin or module that made the registration
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn priority(&self) -> ServicePriority {
        self.priority
    }

    /// Monotonic registration counter; later registrations have larger values
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

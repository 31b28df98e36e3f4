use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::service::capability::{Capability, CapabilityKind};
use crate::service::priority::ServicePriority;
use crate::service::registration::{ProviderHandle, Registration};

#[derive(Debug, Default)]
struct RegistryState {
    /// Registrations per kind, in sequence order
    by_kind: HashMap<CapabilityKind, Vec<Registration>>,
    next_sequence: u64,
}

/// Process-wide registry of capability providers.
///
/// Writers (`register`, `unregister_all`, ...) take the lock exclusively;
/// queries share it. No operation performs I/O, so every call returns promptly
/// and a registration is visible to every query that runs after it.
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    state: RwLock<RegistryState>,
}

/// Normalise a provider display name for selection: whitespace removed, lowercase
pub fn normalize_provider_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl ServiceRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider handle for `kind`.
    ///
    /// Always succeeds. The same owner may register several providers for the
    /// same kind; only one of them is active at a time.
    pub fn register(
        &self,
        kind: CapabilityKind,
        provider: ProviderHandle,
        owner: impl Into<String>,
        priority: ServicePriority,
    ) -> Registration {
        let owner = owner.into();
        let mut state = self.state.write();
        let sequence = state.next_sequence;
        state.next_sequence += 1;

        let registration = Registration::new(kind, provider, owner, priority, sequence);
        log::debug!(
            "Registered {} provider '{}' for owner '{}' at priority {} (#{})",
            kind,
            registration.provider_name(),
            registration.owner(),
            priority,
            sequence
        );
        state.by_kind.entry(kind).or_default().push(registration.clone());
        registration
    }

    /// Register a typed provider under its contract's kind
    pub fn register_provider<S: Capability + ?Sized>(
        &self,
        provider: Arc<S>,
        owner: impl Into<String>,
        priority: ServicePriority,
    ) -> Registration {
        self.register(S::KIND, ProviderHandle::new(provider), owner, priority)
    }

    /// Remove every registration belonging to `owner`, across all kinds.
    /// Returns how many were removed; zero when the owner had none.
    pub fn unregister_all(&self, owner: &str) -> usize {
        let mut state = self.state.write();
        let mut removed = 0;
        for registrations in state.by_kind.values_mut() {
            let before = registrations.len();
            registrations.retain(|r| r.owner() != owner);
            removed += before - registrations.len();
        }
        state.by_kind.retain(|_, registrations| !registrations.is_empty());

        if removed > 0 {
            log::debug!("Removed {} registration(s) owned by '{}'", removed, owner);
        }
        removed
    }

    /// Remove the single registration with `sequence` from `kind`
    pub fn unregister(&self, kind: CapabilityKind, sequence: u64) -> Option<Registration> {
        let mut state = self.state.write();
        let registrations = state.by_kind.get_mut(&kind)?;
        let index = registrations.iter().position(|r| r.sequence() == sequence)?;
        let removed = registrations.remove(index);
        if registrations.is_empty() {
            state.by_kind.remove(&kind);
        }
        Some(removed)
    }

    /// The registration callers should use for `kind`: highest priority, then most recent.
    pub fn active(&self, kind: CapabilityKind) -> Option<Registration> {
        let state = self.state.read();
        state
            .by_kind
            .get(&kind)?
            .iter()
            .max_by_key(|r| (r.priority(), r.sequence()))
            .cloned()
    }

    /// Every registration for `kind`, in registration order
    pub fn registrations(&self, kind: CapabilityKind) -> Vec<Registration> {
        self.state
            .read()
            .by_kind
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    /// Active provider of contract `S`
    pub fn get_registration<S: Capability + ?Sized>(&self) -> Option<Arc<S>> {
        self.active(S::KIND).and_then(|r| r.provider::<S>())
    }

    /// Every provider of contract `S`, in registration order
    pub fn get_registrations<S: Capability + ?Sized>(&self) -> Vec<Arc<S>> {
        self.registrations(S::KIND)
            .iter()
            .filter_map(|r| r.provider::<S>())
            .collect()
    }

    /// Find a registration of `kind` by display name, ignoring case and whitespace.
    /// When several providers share a name the most recent registration wins.
    pub fn find_by_name(&self, kind: CapabilityKind, name: &str) -> Option<Registration> {
        let wanted = normalize_provider_name(name);
        let state = self.state.read();
        state
            .by_kind
            .get(&kind)?
            .iter()
            .rev()
            .find(|r| normalize_provider_name(r.provider_name()) == wanted)
            .cloned()
    }

    /// Typed variant of [`find_by_name`](Self::find_by_name)
    pub fn find_provider<S: Capability + ?Sized>(&self, name: &str) -> Option<Arc<S>> {
        self.find_by_name(S::KIND, name).and_then(|r| r.provider::<S>())
    }

    /// Check whether any provider is registered for `kind`
    pub fn is_provided_for(&self, kind: CapabilityKind) -> bool {
        self.state.read().by_kind.contains_key(&kind)
    }

    /// Kinds with at least one registration
    pub fn known_kinds(&self) -> Vec<CapabilityKind> {
        let mut kinds: Vec<CapabilityKind> = self.state.read().by_kind.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Total number of registrations across all kinds
    pub fn len(&self) -> usize {
        self.state.read().by_kind.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every registration. The sequence counter keeps counting.
    pub fn clear(&self) {
        self.state.write().by_kind.clear();
    }
}

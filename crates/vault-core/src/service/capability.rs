use std::fmt;

/// Tag identifying which contract a registration satisfies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CapabilityKind {
    Economy,
    Permission,
    Chat,
    /// Any further contract a host or plugin defines; the registry treats it like the built-ins
    Custom(&'static str),
}

impl CapabilityKind {
    /// The three contracts Vault itself defines, in display order
    pub const BUILT_IN: [CapabilityKind; 3] = [
        CapabilityKind::Economy,
        CapabilityKind::Permission,
        CapabilityKind::Chat,
    ];

    /// Human-readable label used in operator output
    pub fn label(&self) -> &'static str {
        match self {
            CapabilityKind::Economy => "Economy",
            CapabilityKind::Permission => "Permission",
            CapabilityKind::Chat => "Chat",
            CapabilityKind::Custom(name) => name,
        }
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Binds a contract type to its [`CapabilityKind`].
///
/// Implemented on the trait-object type of each contract (`dyn Economy`,
/// `dyn Permission`, `dyn Chat`) so registrations can be resolved back to a
/// typed `Arc<dyn Contract>`.
///
/// ```ignore
/// impl Capability for dyn Regions {
///     const KIND: CapabilityKind = CapabilityKind::Custom("Regions");
///     fn provider_name(&self) -> String { self.name().to_string() }
/// }
/// ```
pub trait Capability: Send + Sync + 'static {
    /// The kind every provider of this contract is registered under
    const KIND: CapabilityKind;

    /// Display name of a concrete provider, used for listing and selection by name
    fn provider_name(&self) -> String;
}

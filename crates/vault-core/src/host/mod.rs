//! # Host Seams
//!
//! The hosting game server owns the player registry; Vault only sees it
//! through the [`PlayerDirectory`] and [`OnlinePlayer`] traits defined here.
//!
//! [`PlayerRef`] is the identity-normalisation layer: callers hand in whatever
//! they hold (a unique id or a display name) and it is mapped to the canonical
//! [`Uuid`] before any contract method is called.
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod memory;

pub use memory::{MemoryDirectory, MemoryPlayer};

/// Unique id plus last known display name of a player
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub id: Uuid,
    pub name: String,
}

impl PlayerIdentity {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A player currently connected to the host
pub trait OnlinePlayer: Send + Sync {
    fn identity(&self) -> &PlayerIdentity;

    /// The host's own effective permission check
    fn has_permission(&self, node: &str) -> bool;

    /// Set `node` on the session attachment held by `owner`, creating the attachment if needed
    fn set_attachment_permission(&self, owner: &str, node: &str, value: bool);

    /// Unset `node` on the attachment held by `owner`; `false` when `owner` holds no attachment
    fn unset_attachment_permission(&self, owner: &str, node: &str) -> bool;
}

/// Presence and identity lookups supplied by the host
pub trait PlayerDirectory: Send + Sync {
    /// Connected player with `id`
    fn online_player(&self, id: Uuid) -> Option<Arc<dyn OnlinePlayer>>;

    /// Online or previously seen player whose name matches, ignoring case
    fn player_by_name(&self, name: &str) -> Option<PlayerIdentity>;

    /// Every identity the host has ever seen
    fn known_players(&self) -> Vec<PlayerIdentity>;
}

/// Caller-supplied reference to a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerRef {
    Id(Uuid),
    Name(String),
}

impl PlayerRef {
    /// Map to the canonical id. `None` when a name is unknown to the host.
    pub fn resolve(&self, directory: &dyn PlayerDirectory) -> Option<Uuid> {
        match self {
            PlayerRef::Id(id) => Some(*id),
            PlayerRef::Name(name) => directory.player_by_name(name).map(|identity| identity.id),
        }
    }
}

impl From<Uuid> for PlayerRef {
    fn from(id: Uuid) -> Self {
        PlayerRef::Id(id)
    }
}

impl From<&str> for PlayerRef {
    fn from(name: &str) -> Self {
        PlayerRef::Name(name.to_string())
    }
}

impl From<&PlayerIdentity> for PlayerRef {
    fn from(identity: &PlayerIdentity) -> Self {
        PlayerRef::Id(identity.id)
    }
}

impl fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerRef::Id(id) => write!(f, "{}", id),
            PlayerRef::Name(name) => write!(f, "{}", name),
        }
    }
}

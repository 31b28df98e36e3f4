//! # Permission Contract
//!
//! [`Permission`] is the contract permission plugins implement. Identity-keyed
//! operations take a [`Uuid`]; group operations are optional and a provider
//! without a group model answers them with
//! [`Error::UnsupportedCapability`](crate::kernel::Error::UnsupportedCapability).
//!
//! Transient (session-only) permissions live on the host's online player, so
//! they are provided as adapter functions over a [`PlayerDirectory`] rather
//! than as contract methods.
use uuid::Uuid;

use crate::host::{PlayerDirectory, PlayerRef};
use crate::kernel::constants::NO_TRANSIENT_PERMISSIONS;
use crate::kernel::error::{Error, Result};
use crate::service::{Capability, CapabilityKind};

pub mod superperms;

pub use superperms::SuperPerms;

/// Contract implemented by permission providers
pub trait Permission: Send + Sync {
    /// Display name of the provider
    fn name(&self) -> &str;

    fn is_enabled(&self) -> bool;

    /// Whether the provider mirrors its nodes into the host's own permission checks
    fn has_super_perms_compat(&self) -> bool;

    fn has_group_support(&self) -> bool;

    fn player_has(&self, player: Uuid, node: &str) -> Result<bool>;

    /// Grant `node`; `false` when the provider did not apply it
    fn player_add(&self, player: Uuid, node: &str) -> Result<bool>;

    fn player_remove(&self, player: Uuid, node: &str) -> Result<bool>;

    fn group_has(&self, group: &str, node: &str) -> Result<bool>;

    fn group_add(&self, group: &str, node: &str) -> Result<bool>;

    fn group_remove(&self, group: &str, node: &str) -> Result<bool>;

    fn player_in_group(&self, player: Uuid, group: &str) -> Result<bool>;

    fn player_add_group(&self, player: Uuid, group: &str) -> Result<bool>;

    fn player_remove_group(&self, player: Uuid, group: &str) -> Result<bool>;

    fn player_groups(&self, player: Uuid) -> Result<Vec<String>>;

    fn primary_group(&self, player: Uuid) -> Result<Option<String>>;

    /// Every group the provider knows
    fn groups(&self) -> Vec<String>;
}

impl Capability for dyn Permission {
    const KIND: CapabilityKind = CapabilityKind::Permission;

    fn provider_name(&self) -> String {
        self.name().to_string()
    }
}

/// Grant `node` for the player's current session.
///
/// The grant lives on an attachment held by `owner` on the online player; an
/// offline or unknown player raises `UnsupportedCapability` naming `permission`.
pub fn add_transient(
    permission: &dyn Permission,
    directory: &dyn PlayerDirectory,
    owner: &str,
    player: Uuid,
    node: &str,
) -> Result<bool> {
    let online = directory
        .online_player(player)
        .ok_or_else(|| Error::unsupported(permission.name(), NO_TRANSIENT_PERMISSIONS))?;
    online.set_attachment_permission(owner, node, true);
    Ok(true)
}

/// Remove a session grant made through [`add_transient`].
/// Returns `false` when `owner` holds no attachment on the player.
pub fn remove_transient(
    permission: &dyn Permission,
    directory: &dyn PlayerDirectory,
    owner: &str,
    player: Uuid,
    node: &str,
) -> Result<bool> {
    let online = directory
        .online_player(player)
        .ok_or_else(|| Error::unsupported(permission.name(), NO_TRANSIENT_PERMISSIONS))?;
    Ok(online.unset_attachment_permission(owner, node))
}

/// Node check for a player given by id or name; unknown names have no permissions
pub fn has_permission(
    permission: &dyn Permission,
    directory: &dyn PlayerDirectory,
    player: &PlayerRef,
    node: &str,
) -> Result<bool> {
    match player.resolve(directory) {
        Some(id) => permission.player_has(id, node),
        None => Ok(false),
    }
}

/// Group check for a player given by id or name; unknown names are in no group
pub fn in_group(
    permission: &dyn Permission,
    directory: &dyn PlayerDirectory,
    player: &PlayerRef,
    group: &str,
) -> Result<bool> {
    match player.resolve(directory) {
        Some(id) => permission.player_in_group(id, group),
        None => Ok(false),
    }
}

/// Primary group of a player given by id or name
pub fn primary_group_of(
    permission: &dyn Permission,
    directory: &dyn PlayerDirectory,
    player: &PlayerRef,
) -> Result<Option<String>> {
    match player.resolve(directory) {
        Some(id) => permission.primary_group(id),
        None => Ok(None),
    }
}

// Test module declaration
#[cfg(test)]
mod tests;

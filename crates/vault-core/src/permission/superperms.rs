use std::sync::Arc;

use uuid::Uuid;

use crate::host::PlayerDirectory;
use crate::kernel::constants::NO_GROUP_PERMISSIONS;
use crate::kernel::error::{Error, Result};
use crate::permission::Permission;

/// Fallback permission provider backed by the host's own permission checks.
///
/// Read-only: it answers node checks for online players, refuses grants and
/// has no group model. Registered at the lowest priority so any real
/// permission plugin takes precedence.
pub struct SuperPerms {
    directory: Arc<dyn PlayerDirectory>,
}

impl SuperPerms {
    pub const NAME: &'static str = "SuperPerms";

    pub fn new(directory: Arc<dyn PlayerDirectory>) -> Self {
        Self { directory }
    }

    fn no_groups<T>(&self) -> Result<T> {
        Err(Error::unsupported(Self::NAME, NO_GROUP_PERMISSIONS))
    }
}

impl Permission for SuperPerms {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn has_super_perms_compat(&self) -> bool {
        true
    }

    fn has_group_support(&self) -> bool {
        false
    }

    fn player_has(&self, player: Uuid, node: &str) -> Result<bool> {
        Ok(self
            .directory
            .online_player(player)
            .is_some_and(|online| online.has_permission(node)))
    }

    fn player_add(&self, _player: Uuid, _node: &str) -> Result<bool> {
        Ok(false)
    }

    fn player_remove(&self, _player: Uuid, _node: &str) -> Result<bool> {
        Ok(false)
    }

    fn group_has(&self, _group: &str, _node: &str) -> Result<bool> {
        self.no_groups()
    }

    fn group_add(&self, _group: &str, _node: &str) -> Result<bool> {
        self.no_groups()
    }

    fn group_remove(&self, _group: &str, _node: &str) -> Result<bool> {
        self.no_groups()
    }

    // Membership is modelled as a "groups.<name>" node
    fn player_in_group(&self, player: Uuid, group: &str) -> Result<bool> {
        self.player_has(player, &format!("groups.{}", group))
    }

    fn player_add_group(&self, _player: Uuid, _group: &str) -> Result<bool> {
        self.no_groups()
    }

    fn player_remove_group(&self, _player: Uuid, _group: &str) -> Result<bool> {
        self.no_groups()
    }

    fn player_groups(&self, _player: Uuid) -> Result<Vec<String>> {
        self.no_groups()
    }

    fn primary_group(&self, _player: Uuid) -> Result<Option<String>> {
        self.no_groups()
    }

    fn groups(&self) -> Vec<String> {
        Vec::new()
    }
}

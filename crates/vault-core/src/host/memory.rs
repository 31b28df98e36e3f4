use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::host::{OnlinePlayer, PlayerDirectory, PlayerIdentity};

/// Node values set by one owner for the session
type Attachment = (String, HashMap<String, bool>);

/// In-memory player with granted nodes and per-owner session attachments.
///
/// Attachments are kept in creation order; when two owners set the same node
/// the most recently created attachment wins.
#[derive(Debug)]
pub struct MemoryPlayer {
    identity: PlayerIdentity,
    granted: HashSet<String>,
    attachments: RwLock<Vec<Attachment>>,
}

impl MemoryPlayer {
    pub fn new(identity: PlayerIdentity, granted: impl IntoIterator<Item = String>) -> Self {
        Self {
            identity,
            granted: granted.into_iter().collect(),
            attachments: RwLock::new(Vec::new()),
        }
    }
}

impl OnlinePlayer for MemoryPlayer {
    fn identity(&self) -> &PlayerIdentity {
        &self.identity
    }

    fn has_permission(&self, node: &str) -> bool {
        // Attachments override the base grants
        let attachments = self.attachments.read();
        let attached = attachments
            .iter()
            .rev()
            .find_map(|(_, nodes)| nodes.get(node).copied());
        attached.unwrap_or_else(|| self.granted.contains(node) || self.granted.contains("*"))
    }

    fn set_attachment_permission(&self, owner: &str, node: &str, value: bool) {
        let mut attachments = self.attachments.write();
        let index = match attachments.iter().position(|(held_by, _)| held_by == owner) {
            Some(index) => index,
            None => {
                attachments.push((owner.to_string(), HashMap::new()));
                attachments.len() - 1
            }
        };
        attachments[index].1.insert(node.to_string(), value);
    }

    fn unset_attachment_permission(&self, owner: &str, node: &str) -> bool {
        match self
            .attachments
            .write()
            .iter_mut()
            .find(|(held_by, _)| held_by == owner)
        {
            Some((_, nodes)) => {
                nodes.remove(node);
                true
            }
            None => false,
        }
    }
}

/// In-memory [`PlayerDirectory`] used by the CLI's simulated host and by tests
#[derive(Default)]
pub struct MemoryDirectory {
    known: RwLock<Vec<PlayerIdentity>>,
    online: RwLock<HashMap<Uuid, Arc<MemoryPlayer>>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember an identity without connecting it
    pub fn add_known(&self, identity: PlayerIdentity) {
        let mut known = self.known.write();
        if let Some(existing) = known.iter_mut().find(|p| p.id == identity.id) {
            existing.name = identity.name;
        } else {
            known.push(identity);
        }
    }

    /// Connect a player, remembering its identity
    pub fn connect(&self, player: MemoryPlayer) -> Arc<MemoryPlayer> {
        self.add_known(player.identity.clone());
        let player = Arc::new(player);
        self.online.write().insert(player.identity.id, player.clone());
        player
    }

    /// Disconnect a player; the identity stays known
    pub fn disconnect(&self, id: Uuid) -> bool {
        self.online.write().remove(&id).is_some()
    }
}

impl PlayerDirectory for MemoryDirectory {
    fn online_player(&self, id: Uuid) -> Option<Arc<dyn OnlinePlayer>> {
        self.online
            .read()
            .get(&id)
            .map(|player| player.clone() as Arc<dyn OnlinePlayer>)
    }

    fn player_by_name(&self, name: &str) -> Option<PlayerIdentity> {
        let online = self
            .online
            .read()
            .values()
            .find(|p| p.identity.name.eq_ignore_ascii_case(name))
            .map(|p| p.identity.clone());
        online.or_else(|| {
            self.known
                .read()
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(name))
                .cloned()
        })
    }

    fn known_players(&self) -> Vec<PlayerIdentity> {
        self.known.read().clone()
    }
}

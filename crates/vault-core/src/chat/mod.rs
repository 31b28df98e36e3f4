//! # Chat Contract
//!
//! [`Chat`] is the contract chat-metadata plugins implement: prefixes,
//! suffixes and free-form info nodes for players and groups, each optionally
//! scoped to a world.
//!
//! Info nodes carry an [`InfoValue`]; the typed getters below fall back to a
//! caller-supplied default when a node is missing or holds another type.
//! Group membership is not part of this contract; ask the active
//! [`Permission`](crate::permission::Permission) provider instead.
use std::fmt;

use uuid::Uuid;

use crate::service::{Capability, CapabilityKind};

/// Value stored on a chat info node
#[derive(Debug, Clone, PartialEq)]
pub enum InfoValue {
    Integer(i32),
    Double(f64),
    Boolean(bool),
    Text(String),
}

impl fmt::Display for InfoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoValue::Integer(v) => write!(f, "{}", v),
            InfoValue::Double(v) => write!(f, "{}", v),
            InfoValue::Boolean(v) => write!(f, "{}", v),
            InfoValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Contract implemented by chat providers
pub trait Chat: Send + Sync {
    /// Display name of the provider
    fn name(&self) -> &str;

    fn is_enabled(&self) -> bool;

    fn player_prefix(&self, world: Option<&str>, player: Uuid) -> Option<String>;

    fn set_player_prefix(&self, world: Option<&str>, player: Uuid, prefix: &str);

    fn player_suffix(&self, world: Option<&str>, player: Uuid) -> Option<String>;

    fn set_player_suffix(&self, world: Option<&str>, player: Uuid, suffix: &str);

    fn group_prefix(&self, world: Option<&str>, group: &str) -> Option<String>;

    fn set_group_prefix(&self, world: Option<&str>, group: &str, prefix: &str);

    fn group_suffix(&self, world: Option<&str>, group: &str) -> Option<String>;

    fn set_group_suffix(&self, world: Option<&str>, group: &str, suffix: &str);

    fn player_info(&self, world: Option<&str>, player: Uuid, node: &str) -> Option<InfoValue>;

    fn set_player_info(&self, world: Option<&str>, player: Uuid, node: &str, value: InfoValue);

    fn group_info(&self, world: Option<&str>, group: &str, node: &str) -> Option<InfoValue>;

    fn set_group_info(&self, world: Option<&str>, group: &str, node: &str, value: InfoValue);
}

impl Capability for dyn Chat {
    const KIND: CapabilityKind = CapabilityKind::Chat;

    fn provider_name(&self) -> String {
        self.name().to_string()
    }
}

pub fn player_info_integer(chat: &dyn Chat, world: Option<&str>, player: Uuid, node: &str, default: i32) -> i32 {
    match chat.player_info(world, player, node) {
        Some(InfoValue::Integer(v)) => v,
        _ => default,
    }
}

pub fn player_info_double(chat: &dyn Chat, world: Option<&str>, player: Uuid, node: &str, default: f64) -> f64 {
    match chat.player_info(world, player, node) {
        Some(InfoValue::Double(v)) => v,
        // Integers widen losslessly
        Some(InfoValue::Integer(v)) => f64::from(v),
        _ => default,
    }
}

pub fn player_info_boolean(chat: &dyn Chat, world: Option<&str>, player: Uuid, node: &str, default: bool) -> bool {
    match chat.player_info(world, player, node) {
        Some(InfoValue::Boolean(v)) => v,
        _ => default,
    }
}

pub fn player_info_string(chat: &dyn Chat, world: Option<&str>, player: Uuid, node: &str, default: &str) -> String {
    match chat.player_info(world, player, node) {
        Some(InfoValue::Text(v)) => v,
        _ => default.to_string(),
    }
}

pub fn group_info_integer(chat: &dyn Chat, world: Option<&str>, group: &str, node: &str, default: i32) -> i32 {
    match chat.group_info(world, group, node) {
        Some(InfoValue::Integer(v)) => v,
        _ => default,
    }
}

pub fn group_info_double(chat: &dyn Chat, world: Option<&str>, group: &str, node: &str, default: f64) -> f64 {
    match chat.group_info(world, group, node) {
        Some(InfoValue::Double(v)) => v,
        Some(InfoValue::Integer(v)) => f64::from(v),
        _ => default,
    }
}

pub fn group_info_boolean(chat: &dyn Chat, world: Option<&str>, group: &str, node: &str, default: bool) -> bool {
    match chat.group_info(world, group, node) {
        Some(InfoValue::Boolean(v)) => v,
        _ => default,
    }
}

pub fn group_info_string(chat: &dyn Chat, world: Option<&str>, group: &str, node: &str, default: &str) -> String {
    match chat.group_info(world, group, node) {
        Some(InfoValue::Text(v)) => v,
        _ => default.to_string(),
    }
}

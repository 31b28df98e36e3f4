use std::sync::Arc;

use uuid::Uuid;

use crate::host::{MemoryDirectory, MemoryPlayer, PlayerDirectory, PlayerIdentity, PlayerRef};
use crate::kernel::error::Error;
use crate::permission::{self, Permission, SuperPerms};

fn setup() -> (Arc<MemoryDirectory>, SuperPerms, Uuid) {
    let directory = Arc::new(MemoryDirectory::new());
    let id = Uuid::new_v4();
    directory.connect(MemoryPlayer::new(
        PlayerIdentity::new(id, "Alex"),
        vec!["vault.info".to_string(), "groups.builders".to_string()],
    ));
    let perms = SuperPerms::new(directory.clone());
    (directory, perms, id)
}

#[test]
fn test_player_has_checks_online_player() {
    let (directory, perms, id) = setup();
    assert!(perms.player_has(id, "vault.info").unwrap());
    assert!(!perms.player_has(id, "vault.convert").unwrap());

    directory.disconnect(id);
    assert!(!perms.player_has(id, "vault.info").unwrap());
    assert!(!perms.player_has(Uuid::new_v4(), "vault.info").unwrap());
}

#[test]
fn test_grants_are_refused() {
    let (_directory, perms, id) = setup();
    assert!(!perms.player_add(id, "fly").unwrap());
    assert!(!perms.player_remove(id, "vault.info").unwrap());
    assert!(perms.player_has(id, "vault.info").unwrap());
}

#[test]
fn test_group_operations_raise_unsupported_naming_provider() {
    let (_directory, perms, id) = setup();
    assert!(!perms.has_group_support());

    let err = perms.group_add("admins", "fly").unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(err.to_string(), "SuperPerms has no group permissions.");
    match perms.player_groups(id) {
        Err(Error::UnsupportedCapability { provider, .. }) => assert_eq!(provider, "SuperPerms"),
        other => panic!("expected UnsupportedCapability, got {:?}", other),
    }
    assert!(perms.primary_group(id).is_err());
    assert!(perms.player_add_group(id, "admins").is_err());
    assert!(perms.groups().is_empty());
}

#[test]
fn test_group_membership_via_node() {
    let (_directory, perms, id) = setup();
    assert!(perms.player_in_group(id, "builders").unwrap());
    assert!(!perms.player_in_group(id, "admins").unwrap());
}

#[test]
fn test_transient_permissions_need_online_player() {
    let (directory, perms, id) = setup();

    assert!(permission::add_transient(&perms, directory.as_ref(), "Vault", id, "fly").unwrap());
    assert!(perms.player_has(id, "fly").unwrap());
    assert!(permission::remove_transient(&perms, directory.as_ref(), "Vault", id, "fly").unwrap());
    assert!(!perms.player_has(id, "fly").unwrap());
    assert!(!permission::remove_transient(&perms, directory.as_ref(), "Other", id, "fly").unwrap());

    directory.disconnect(id);
    let err = permission::add_transient(&perms, directory.as_ref(), "Vault", id, "fly").unwrap_err();
    assert_eq!(
        err.to_string(),
        "SuperPerms does not support offline player transient permissions."
    );
}

#[test]
fn test_name_adapters() {
    let (directory, perms, id) = setup();
    let alex = PlayerRef::from("alex");

    assert!(permission::has_permission(&perms, directory.as_ref(), &alex, "vault.info").unwrap());
    assert!(permission::in_group(&perms, directory.as_ref(), &alex, "builders").unwrap());
    assert!(permission::primary_group_of(&perms, directory.as_ref(), &alex).is_err());

    let nobody = PlayerRef::from("nobody");
    assert!(!permission::has_permission(&perms, directory.as_ref(), &nobody, "vault.info").unwrap());
    assert_eq!(permission::primary_group_of(&perms, directory.as_ref(), &nobody).unwrap(), None);
    assert!(permission::has_permission(&perms, directory.as_ref(), &PlayerRef::from(id), "vault.info").unwrap());
}

#[test]
fn test_conflicting_transient_grants_resolve_to_latest_owner() {
    let (directory, perms, id) = setup();
    permission::add_transient(&perms, directory.as_ref(), "PluginA", id, "vault.convert").unwrap();
    directory
        .online_player(id)
        .expect("online")
        .set_attachment_permission("PluginB", "vault.convert", false);

    assert!(!perms.player_has(id, "vault.convert").unwrap());
}

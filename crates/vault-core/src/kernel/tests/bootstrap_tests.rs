use std::sync::Arc;

use crate::config::VaultConfig;
use crate::economy::{Economy, MemoryEconomy};
use crate::host::MemoryDirectory;
use crate::kernel::bootstrap::*;
use crate::kernel::error::{Error, KernelLifecyclePhase};
use crate::permission::{Permission, SuperPerms};
use crate::service::{CapabilityKind, ServicePriority};
use crate::update::UpdateStatus;

fn offline_config() -> VaultConfig {
    let mut config = VaultConfig::default();
    config.update.enabled = false;
    config
}

fn new_app(config: VaultConfig) -> Application {
    Application::new(config, Arc::new(MemoryDirectory::new()))
}

#[test]
fn test_new_application_has_empty_registry() {
    let app = new_app(offline_config());
    assert!(!app.is_started());
    assert!(app.services().is_empty());
    assert!(!app.config().update.enabled);
}

#[test]
fn test_start_registers_fallback_permission() {
    let mut app = new_app(offline_config());
    app.start().expect("start");
    assert!(app.is_started());

    let active = app
        .services()
        .active(CapabilityKind::Permission)
        .expect("fallback permission provider");
    assert_eq!(active.provider_name(), SuperPerms::NAME);
    assert_eq!(active.owner(), "Vault");
    assert_eq!(active.priority(), ServicePriority::LOWEST);
}

#[test]
fn test_plugin_permission_outranks_fallback() {
    let mut app = new_app(offline_config());
    app.start().expect("start");

    let plugin_perms: Arc<dyn Permission> = Arc::new(SuperPerms::new(app.directory()));
    let registration = app
        .services()
        .register_provider(plugin_perms, "perm-plugin", ServicePriority::NORMAL);

    let active = app.services().active(CapabilityKind::Permission).expect("active");
    assert_eq!(active.sequence(), registration.sequence());
    assert_eq!(active.owner(), "perm-plugin");
}

#[test]
fn test_start_twice_is_a_lifecycle_error() {
    let mut app = new_app(offline_config());
    app.start().expect("first start");
    match app.start() {
        Err(Error::KernelLifecycleError { phase, .. }) => assert_eq!(phase, KernelLifecyclePhase::Start),
        other => panic!("expected lifecycle error, got {:?}", other),
    }
    assert_eq!(app.services().registrations(CapabilityKind::Permission).len(), 1);
}

#[test]
fn test_shutdown_removes_only_vault_registrations() {
    let mut app = new_app(offline_config());
    app.start().expect("start");
    let services = app.services();
    let gold: Arc<dyn Economy> = Arc::new(MemoryEconomy::new("Gold"));
    services.register_provider(gold, "gold-plugin", ServicePriority::NORMAL);

    app.shutdown().expect("shutdown");
    assert!(!app.is_started());
    assert!(services.active(CapabilityKind::Permission).is_none());
    assert_eq!(services.len(), 1);
    assert_eq!(services.registrations(CapabilityKind::Economy)[0].owner(), "gold-plugin");
}

#[test]
fn test_shutdown_before_start_is_a_lifecycle_error() {
    let mut app = new_app(offline_config());
    assert!(matches!(
        app.shutdown(),
        Err(Error::KernelLifecycleError {
            phase: KernelLifecyclePhase::Shutdown,
            ..
        })
    ));
}

#[test]
fn test_restart_after_shutdown() {
    let mut app = new_app(offline_config());
    app.start().expect("start");
    app.shutdown().expect("shutdown");
    app.start().expect("restart");
    assert_eq!(app.services().registrations(CapabilityKind::Permission).len(), 1);
}

#[test]
fn test_update_check_skipped_without_runtime() {
    // Enabled, but no tokio runtime on this thread
    let mut app = new_app(VaultConfig::default());
    app.start().expect("start");
    app.shutdown().expect("shutdown");
}

#[tokio::test]
async fn test_shutdown_aborts_pending_update_check() {
    let mut config = VaultConfig::default();
    config.update.api_url = "http://127.0.0.1:9/releases/latest".to_string();
    let mut app = new_app(config);
    app.start().expect("start");
    app.shutdown().expect("shutdown");
    assert!(app.services().is_empty());
}

#[tokio::test]
async fn test_await_update_check_reports_unreachable_source() {
    let mut config = VaultConfig::default();
    config.update.api_url = "http://127.0.0.1:9/releases/latest".to_string();
    let mut app = new_app(config);
    app.start().expect("start");

    assert_eq!(app.await_update_check().await, Some(UpdateStatus::Unknown));
    assert_eq!(app.await_update_check().await, None);
    app.shutdown().expect("shutdown");
}

#[tokio::test]
async fn test_disabled_update_check_is_not_scheduled() {
    let mut app = new_app(offline_config());
    app.start().expect("start");
    assert_eq!(app.await_update_check().await, None);
}

use std::fs;
use std::path::Path;

use tempfile::tempdir;
use uuid::Uuid;

use crate::config::{ConfigFormat, VaultConfig};
use crate::kernel::constants;
use crate::kernel::error::Error;

const PLAYER_ID: &str = "6f1e2d3c-4b5a-4978-8695-a4b3c2d1e0f9";

#[test]
fn test_defaults() {
    let config = VaultConfig::default();
    assert!(config.update.enabled);
    assert_eq!(config.update.api_url, constants::RELEASES_API_URL);
    assert_eq!(config.update.download_url, constants::DOWNLOAD_URL);
    assert!(config.host.players.is_empty());
    assert!(config.host.economies.is_empty());
}

#[test]
fn test_format_from_path() {
    assert_eq!(ConfigFormat::from_path(Path::new("vault.json")), Some(ConfigFormat::Json));
    assert_eq!(ConfigFormat::from_path(Path::new("VAULT.JSON")), Some(ConfigFormat::Json));
    assert_eq!(ConfigFormat::from_path(Path::new("vault.yml")), Some(ConfigFormat::Yaml));
    assert_eq!(ConfigFormat::from_path(Path::new("vault.toml")), Some(ConfigFormat::Toml));
    assert_eq!(ConfigFormat::from_path(Path::new("vault.ini")), None);
    assert_eq!(ConfigFormat::from_path(Path::new("vault")), None);
    assert_eq!(ConfigFormat::Yaml.extension(), "yaml");
}

#[test]
fn test_load_json_with_partial_sections() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("vault.json");
    let json = format!(
        r#"{{
            "update": {{ "enabled": false }},
            "host": {{
                "players": [{{ "id": "{id}", "name": "Alex", "online": true, "permissions": ["vault.info"] }}],
                "economies": [{{ "name": "Gold", "priority": "high", "balances": {{ "{id}": 12.5 }} }}]
            }}
        }}"#,
        id = PLAYER_ID
    );
    fs::write(&path, json).expect("write config");

    let config = VaultConfig::load(&path).expect("load config");
    let id: Uuid = PLAYER_ID.parse().expect("uuid");

    assert!(!config.update.enabled);
    assert_eq!(config.update.api_url, constants::RELEASES_API_URL);
    let player = &config.host.players[0];
    assert_eq!(player.id, id);
    assert!(player.online);
    assert_eq!(player.permissions, vec!["vault.info".to_string()]);
    let economy = &config.host.economies[0];
    assert_eq!(economy.name, "Gold");
    assert_eq!(economy.priority.as_deref(), Some("high"));
    assert_eq!(economy.owner, None);
    assert_eq!(economy.currency_singular, "dollar");
    assert_eq!(economy.currency_plural, "dollars");
    assert_eq!(economy.balances.get(&id), Some(&12.5));
}

#[test]
fn test_load_yaml() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("vault.yaml");
    let yaml = format!(
        "update:\n  enabled: false\nhost:\n  players:\n    - id: {}\n      name: Steve\n",
        PLAYER_ID
    );
    fs::write(&path, yaml).expect("write config");

    let config = VaultConfig::load(&path).expect("load yaml");
    assert_eq!(config.host.players[0].name, "Steve");
    assert!(!config.host.players[0].online);
}

#[test]
fn test_load_toml() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("vault.toml");
    let toml = "[update]\nenabled = false\ndownload_url = \"https://example.invalid/dl\"\n\n[[host.economies]]\nname = \"Gems\"\ncurrency_singular = \"gem\"\ncurrency_plural = \"gems\"\n";
    fs::write(&path, toml).expect("write config");

    let config = VaultConfig::load(&path).expect("load toml");
    assert_eq!(config.update.download_url, "https://example.invalid/dl");
    assert_eq!(config.host.economies[0].currency_plural, "gems");
}

#[test]
fn test_serialize_then_load_keeps_values() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("vault.json");
    let mut config = VaultConfig::default();
    config.update.enabled = false;

    fs::write(&path, config.serialize(ConfigFormat::Json).expect("serialize")).expect("write");
    assert_eq!(VaultConfig::load(&path).expect("load"), config);
}

#[test]
fn test_unknown_extension_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("vault.ini");
    fs::write(&path, "enabled=true").expect("write");

    match VaultConfig::load(&path) {
        Err(Error::UnsupportedConfigFormat { path: reported }) => assert_eq!(reported, path),
        other => panic!("expected UnsupportedConfigFormat, got {:?}", other),
    }
}

#[test]
fn test_missing_file_and_bad_syntax_report_path() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("absent.json");
    match VaultConfig::load(&missing) {
        Err(Error::Config { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected Config error, got {:?}", other),
    }

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").expect("write");
    let err = VaultConfig::load(&broken).unwrap_err();
    assert!(err.to_string().contains("broken.json"), "unexpected message: {}", err);
}

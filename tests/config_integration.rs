//! Integration tests for the pipeboard-config crate.

use std::fs;

use pipeboard_config::{Config, ConfigError, LoggingConfig, SourceConfig, persistence};
use pipeboard_protocol::{SortOrder, ViewerContext};
use tempfile::TempDir;

#[tokio::test]
async fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("pipeboard.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Configuration for pipeboard
            source: {
                snapshot_path: "applications.json5",
                page_size: 5,
                order: "oldest",
            },
            viewer: { name: "Sam", enterprise: "Acme Corp" },
            logging: { level: "DEBUG", file: "pipeboard.log" },
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert!(config.uses_snapshot_file());
    assert_eq!(config.source.page_size, 5);
    assert_eq!(config.source.order, SortOrder::Oldest);
    assert_eq!(config.viewer.display_label(), "Sam @ Acme Corp");
    assert!(config.logging.is_enabled());

    let request = config.source.first_page().unwrap();
    assert_eq!(request.page, 1);
    assert_eq!(request.page_size, 5);
}

#[tokio::test]
async fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    let original = Config {
        source: SourceConfig::from_file("/srv/exports/applications.json"),
        viewer: ViewerContext::new("Noor"),
        logging: LoggingConfig::to_file("/tmp/pipeboard.log"),
    };

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(original, loaded);
}

#[tokio::test]
async fn config_load_nonexistent_file_fails() {
    // Config::load() falls back to defaults, but an explicit path must exist.
    let err = Config::load_from("/nonexistent/path/config.json").unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[tokio::test]
async fn async_read_matches_sync_read() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json5");
    fs::write(&config_path, "{ source: { page_size: 7 } }").unwrap();

    let sync: Config = persistence::read_config_file(&config_path).unwrap();
    let async_read: Config = persistence::read_config_file_async(&config_path)
        .await
        .unwrap();

    assert_eq!(sync, async_read);
    assert_eq!(async_read.source.page_size, 7);
}

#[test]
fn empty_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, "{}").unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.viewer.display_label(), "guest");
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let dir = TempDir::new().unwrap();

    let page_size = dir.path().join("page_size.json");
    fs::write(&page_size, r#"{"source": {"page_size": 0}}"#).unwrap();
    assert!(matches!(
        Config::load_from(&page_size).unwrap_err(),
        ConfigError::InvalidSource { .. }
    ));

    let level = dir.path().join("level.json");
    fs::write(&level, r#"{"logging": {"level": "loud"}}"#).unwrap();
    assert!(matches!(
        Config::load_from(&level).unwrap_err(),
        ConfigError::InvalidLogLevel(_)
    ));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, "{ source: ").unwrap();

    assert!(matches!(
        Config::load_from(&config_path).unwrap_err(),
        ConfigError::ParseJson5(_)
    ));
}

#[test]
fn local_config_wins_over_user_config() {
    let local = TempDir::new().unwrap();
    let user = TempDir::new().unwrap();
    fs::write(user.path().join("config.json5"), "{}").unwrap();

    let found = persistence::find_config_file_in(local.path(), Some(user.path()));
    assert_eq!(found, Some(user.path().join("config.json5")));

    fs::write(local.path().join("pipeboard.json"), "{}").unwrap();
    let found = persistence::find_config_file_in(local.path(), Some(user.path()));
    assert_eq!(found, Some(local.path().join("pipeboard.json")));
}

#[test]
fn no_config_file_found() {
    let local = TempDir::new().unwrap();
    assert!(persistence::find_config_file_in(local.path(), None).is_none());
}

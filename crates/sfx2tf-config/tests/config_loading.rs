//! Loading, saving and validating configuration

use serial_test::serial;
use sfx2tf_config::{AppConfig, ConfigError, ConfigManager, ConfigManagerTrait, DEFAULT_API_URL};
use tempfile::TempDir;

fn isolated(path: std::path::PathBuf) -> ConfigManager {
    ConfigManager::with_path(path).with_env_prefix("SFX2TF_TEST")
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.api.url, DEFAULT_API_URL);
    assert_eq!(config.api.token, None);
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.api.retry_count, 3);
    assert_eq!(config.export.resource_prefix, "signalfx");
    assert_eq!(config.export.name_prefix, "");
    assert_eq!(config.server.address, "localhost");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_default_config_is_valid() {
    let manager = ConfigManager::new();
    assert!(manager.validate_config(&AppConfig::default()).is_ok());
}

#[test]
fn test_default_path_is_under_sfx2tf() {
    let manager = ConfigManager::new();
    assert!(manager.config_path().ends_with("sfx2tf/config.toml"));
}

#[test]
fn test_validate_rejects_empty_url() {
    let mut config = AppConfig::default();
    config.api.url = "  ".to_string();
    let err = ConfigManager::new().validate_config(&config).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn test_validate_rejects_port_zero() {
    let mut config = AppConfig::default();
    config.server.port = 0;
    let err = ConfigManager::new().validate_config(&config).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn test_validate_rejects_unknown_level() {
    let mut config = AppConfig::default();
    config.logging.level = "chatty".to_string();
    let err = ConfigManager::new().validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("chatty"));

    config.logging.level = "DEBUG".to_string();
    assert!(ConfigManager::new().validate_config(&config).is_ok());
}

#[test]
#[serial]
fn test_missing_explicit_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let mut manager = isolated(dir.path().join("absent.toml"));
    let err = manager.load_config().unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
#[serial]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[api]\ntoken = \"abc\"\n\n[export]\nname_prefix = \"test-\"\n",
    )
    .unwrap();

    let config = isolated(path).load_config().unwrap();
    assert_eq!(config.api.token.as_deref(), Some("abc"));
    assert_eq!(config.api.url, DEFAULT_API_URL);
    assert_eq!(config.export.name_prefix, "test-");
    assert_eq!(config.export.resource_prefix, "signalfx");
    assert_eq!(config.server.port, 8080);
}

#[test]
#[serial]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.api.url = "https://api.us1.signalfx.com".to_string();
    config.server.port = 9090;
    config.logging.level = "debug".to_string();

    let mut manager = isolated(path.clone());
    manager.save_config(&config).unwrap();
    assert!(path.exists());

    let loaded = manager.load_config().unwrap();
    assert_eq!(loaded, config);
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server]\nport = 8081\n").unwrap();

    std::env::set_var("SFX2TF_TEST_SERVER__PORT", "9191");
    std::env::set_var("SFX2TF_TEST_API__TOKEN", "from-env");
    let result = isolated(path).load_config();
    std::env::remove_var("SFX2TF_TEST_SERVER__PORT");
    std::env::remove_var("SFX2TF_TEST_API__TOKEN");

    let config = result.unwrap();
    assert_eq!(config.server.port, 9191);
    assert_eq!(config.api.token.as_deref(), Some("from-env"));
}

#[test]
#[serial]
fn test_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server]\nport = \"not a port\"\n").unwrap();

    let err = isolated(path).load_config().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

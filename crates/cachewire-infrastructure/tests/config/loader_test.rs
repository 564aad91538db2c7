//! Configuration Loader Tests

use cachewire_domain::Error;
use cachewire_infrastructure::config::{ConfigBuilder, ConfigLoader, LoggingConfig};
use cachewire_infrastructure::constants::DEFAULT_LOG_LEVEL;
use figment::Jail;
use serde_json::json;
use tempfile::TempDir;

const SAMPLE_CONFIG: &str = r#"
[logging]
level = "debug"

[doctrine.cache.orm_default]
class = "ArrayCache"
namespace = "orm"

[doctrine.cache.pool]
class = "MokaItemPool"
"#;

#[test]
fn test_config_loader_defaults() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().expect("defaults should load");

        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert!(!config.logging.json_format);
        assert!(config.doctrine.cache.is_empty());
        Ok(())
    });
}

#[test]
fn test_config_loader_finds_default_file() {
    Jail::expect_with(|jail| {
        jail.create_file("cachewire.toml", SAMPLE_CONFIG)?;

        let config = ConfigLoader::new().load().expect("config should load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.cache_keys(), vec!["orm_default", "pool"]);
        assert_eq!(
            config.doctrine.cache["orm_default"],
            json!({ "class": "ArrayCache", "namespace": "orm" })
        );
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("cachewire.toml", SAMPLE_CONFIG)?;
        jail.set_env("CACHEWIRE_DOCTRINE__CACHE__ORM_DEFAULT__NAMESPACE", "from-env");
        jail.set_env("CACHEWIRE_DOCTRINE__CACHE__EXTRA__CLASS", "VoidCache");

        let config = ConfigLoader::new().load().expect("config should load");

        assert_eq!(
            config.doctrine.cache["orm_default"]["namespace"],
            json!("from-env")
        );
        assert_eq!(config.doctrine.cache["extra"]["class"], json!("VoidCache"));
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("MYAPP_LOGGING__LEVEL", "warn");

        let config = ConfigLoader::new()
            .with_env_prefix("MYAPP")
            .load()
            .expect("config should load");

        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_uses_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("cachewire.toml", SAMPLE_CONFIG)?;

        // An explicit path disables discovery of cachewire.toml
        let loader = ConfigLoader::new().with_config_path("does-not-exist.toml");
        let config = loader.load().expect("defaults should load");

        assert!(config.doctrine.cache.is_empty());
        assert!(loader.config_path().is_some());
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("cachewire.toml", "[logging]\nlevel = \"loud\"\n")?;

        let err = ConfigLoader::new().load().unwrap_err();

        assert!(matches!(err, Error::Configuration { .. }));
        Ok(())
    });
}

#[test]
fn test_non_table_cache_config_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("cachewire.toml", "[doctrine.cache]\nfoo = \"ArrayCache\"\n")?;

        let err = ConfigLoader::new().load().unwrap_err();

        assert!(err.to_string().contains("doctrine.cache.foo"));
        Ok(())
    });
}

#[test]
fn test_config_save_load() {
    Jail::expect_with(|jail| {
        let config_path = jail.directory().join("saved.toml");

        let original = ConfigBuilder::new()
            .with_logging(LoggingConfig {
                level: "trace".to_string(),
                json_format: true,
            })
            .with_cache("orm_default", json!({ "class": "ArrayCache", "namespace": "orm" }))
            .build();

        let loader = ConfigLoader::new();
        loader.save_to_file(&original, &config_path).unwrap();

        let loaded = ConfigLoader::new()
            .with_config_path(&config_path)
            .load()
            .unwrap();

        assert_eq!(loaded.logging, original.logging);
        assert_eq!(loaded.doctrine.cache, original.doctrine.cache);
        Ok(())
    });
}

#[test]
fn test_save_to_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("cachewire.toml");

    let err = ConfigLoader::new()
        .save_to_file(&ConfigBuilder::new().build(), &path)
        .unwrap_err();

    assert!(matches!(err, Error::Configuration { source: Some(_), .. }));
}

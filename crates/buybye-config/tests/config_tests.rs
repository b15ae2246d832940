use buybye_config::{ConfigError, ConfigManager, EngineConfig};
use tempfile::tempdir;

#[test]
fn load_without_file_returns_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let cfg = manager.load().expect("load config");

    assert_eq!(cfg, EngineConfig::default());
    assert!(manager.backups_dir().exists());
    assert!(manager.config_path().ends_with("config/config.json"));
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"), dir.path().join("backups"));

    let mut cfg = EngineConfig::default().with_investment_horizon_years(10);
    cfg.annual_work_hours = 1950.0;

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.investment_horizon_years, 10);
    assert_eq!(loaded.annual_work_hours, 1950.0);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn save_refuses_invalid_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let cfg = EngineConfig::default().with_investment_horizon_years(0);

    let err = manager.save(&cfg).expect_err("invalid config");
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(!manager.config_path().exists());
}

#[test]
fn corrupt_file_surfaces_serde_error() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    std::fs::write(manager.config_path(), "{ not json").expect("write");

    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}

#[test]
fn backup_and_restore_roundtrip() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let cfg = EngineConfig::default().with_investment_horizon_years(7);
    let name = manager.backup(&cfg).expect("backup");

    let listed = manager.list_backups().expect("list");
    assert_eq!(listed, vec![name.clone()]);

    let restored = manager.restore(&name).expect("restore");
    assert_eq!(restored.investment_horizon_years, 7);

    assert!(matches!(
        manager.restore("config_19700101_000000_000.json"),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn back_to_back_backups_keep_both_snapshots() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let first = manager
        .backup(&EngineConfig::default().with_investment_horizon_years(3))
        .expect("first backup");
    let second = manager
        .backup(&EngineConfig::default().with_investment_horizon_years(7))
        .expect("second backup");

    assert_ne!(first, second);
    let listed = manager.list_backups().expect("list");
    assert_eq!(listed, vec![second.clone(), first.clone()]);
    assert_eq!(manager.restore(&first).expect("restore first").investment_horizon_years, 3);
    assert_eq!(manager.restore(&second).expect("restore second").investment_horizon_years, 7);
}

#[test]
fn restore_rejects_names_outside_backups_dir() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    manager
        .save(&EngineConfig::default().with_investment_horizon_years(9))
        .expect("save config");

    for name in ["../config.json", "../../config/config.json", ".."] {
        assert!(
            matches!(manager.restore(name), Err(ConfigError::Invalid(_))),
            "{name} should be rejected"
        );
    }
}

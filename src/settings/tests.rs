//! 配置模块属性测试

use crate::settings::{DemoSettings, LoggingConfig, SettingsManager};
use proptest::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn arb_log_level() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("TRACE".to_string()),
        Just("DEBUG".to_string()),
        Just("INFO".to_string()),
        Just("warn".to_string()),
        Just("Error".to_string()),
        Just("FATAL".to_string()),
        Just("PANIC".to_string()),
    ]
}

fn arb_logging_config() -> impl Strategy<Value = LoggingConfig> {
    (
        prop_oneof![
            Just("info".to_string()),
            Just("debug".to_string()),
            Just("sz_sdk_mock=trace".to_string()),
        ],
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(default_directive, ansi, show_target)| LoggingConfig {
            default_directive,
            ansi,
            show_target,
        })
}

fn arb_settings() -> impl Strategy<Value = DemoSettings> {
    (
        "[a-zA-Z0-9_-][a-zA-Z0-9 _-]{0,31}",
        0i64..2,
        0i64..10_000,
        arb_log_level(),
        "[a-zA-Z0-9 :;_-]{0,40}",
        "Observer [0-9]{1,3}",
        arb_logging_config(),
    )
        .prop_map(
            |(instance_name, verbose_logging, config_id, log_level, origin, observer_id, logging)| {
                DemoSettings {
                    instance_name,
                    verbose_logging,
                    config_id,
                    log_level,
                    observer_origin: origin,
                    observer_id,
                    logging,
                    ..Default::default()
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_yaml_round_trip(settings in arb_settings()) {
        let yaml = SettingsManager::to_yaml(&settings).unwrap();
        let parsed = SettingsManager::parse_yaml(&yaml).unwrap();
        prop_assert_eq!(settings, parsed);
    }

    #[test]
    fn prop_generated_settings_validate(settings in arb_settings()) {
        prop_assert!(SettingsManager::validate(&settings).is_ok());
    }
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let temp_dir = tempfile::tempdir().expect("创建临时目录失败");
    let path = temp_dir.path().join("missing.yaml");
    let manager = SettingsManager::load(&path).unwrap();
    assert_eq!(manager.settings(), &DemoSettings::default());
    assert_eq!(manager.path(), path.as_path());
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().expect("创建临时文件失败");
    writeln!(temp_file, "observer_id: \"Observer 7\"\nconfig_id: 42").unwrap();

    let manager = SettingsManager::load(temp_file.path()).unwrap();
    assert_eq!(manager.settings().observer_id, "Observer 7");
    assert_eq!(manager.settings().config_id, 42);
    assert_eq!(manager.settings().log_level, "INFO");
}

#[test]
fn test_save_and_reload() {
    let temp_dir = tempfile::tempdir().expect("创建临时目录失败");
    let path = temp_dir.path().join("nested").join("sz-sdk-mock.yaml");

    let mut manager = SettingsManager::new(path.clone());
    manager.settings_mut().log_level = "TRACE".to_string();
    manager.settings_mut().logging.show_target = true;
    manager.save().unwrap();

    let reloaded = SettingsManager::load(&path).unwrap();
    assert_eq!(reloaded.settings(), manager.settings());
}

#[test]
fn test_save_to_other_path() {
    let temp_dir = tempfile::tempdir().expect("创建临时目录失败");
    let path = temp_dir.path().join("copy.yaml");
    let manager = SettingsManager::with_settings(DemoSettings::default(), temp_dir.path().join("a.yaml"));
    manager.save_to(&path).unwrap();
    assert!(path.exists());
    assert!(!temp_dir.path().join("a.yaml").exists());
}

#[test]
fn test_load_invalid_yaml() {
    let mut temp_file = NamedTempFile::new().expect("创建临时文件失败");
    writeln!(temp_file, "logging: [unclosed").unwrap();
    assert!(SettingsManager::load(temp_file.path()).is_err());
}

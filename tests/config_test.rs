// tests/config_test.rs
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tagver::cli::orchestration::Settings;
use tagver::config::{load_config, Config, CONFIG_FILE_NAME};
use tagver::source::LoadMode;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_explicit_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[tags]
prefix = "release-"
mode = "current"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.tags.prefix, "release-");
    assert_eq!(config.tags.mode, LoadMode::Current);
    assert!(!config.behavior.assume_yes);
}

#[test]
fn test_invalid_toml_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[tags\nprefix = ").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path())).is_err());
}

#[test]
#[serial]
fn test_working_directory_config_is_found() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "[tags]\nprefix = \"v\"\n\n[behavior]\nassume_yes = true\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(temp_dir.path()).unwrap();
    let config = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    let config = config.unwrap();
    assert_eq!(config.tags.prefix, "v");
    assert!(config.behavior.assume_yes);
}

#[test]
fn test_flags_take_precedence() {
    let mut config = Config::default();
    config.tags.prefix = "v".to_string();
    config.behavior.assume_yes = true;

    let settings = Settings::resolve(&config, Some("rel-"), Some(LoadMode::Current), false);
    assert_eq!(settings.prefix, "rel-");
    assert_eq!(settings.mode, LoadMode::Current);
    assert!(settings.assume_yes);
}

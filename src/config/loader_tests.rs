//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_citydash_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("citydash") && path_str.ends_with("config.toml"),
        "Path should contain 'citydash' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_citydash_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("citydash.log"),
        "Default log path should end with 'citydash.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let path = write_temp_config(
        "citydash_test_config.toml",
        r#"
sort_key = "literacy_rate"
sort_direction = "asc"
dark_mode = true
comparison_count = 8
"#,
    );

    let config = load_config_file(&path)
        .expect("Should parse valid TOML")
        .expect("Should return Some for existing file");

    assert_eq!(config.sort_key, Some(SortKey::LiteracyRate));
    assert_eq!(config.sort_direction, Some(SortDirection::Ascending));
    assert_eq!(config.dark_mode, Some(true));
    assert_eq!(config.comparison_count, Some(8));
    assert_eq!(config.log_file_path, None);

    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let path = write_temp_config("citydash_test_invalid.toml", "this is not valid TOML ][}{");

    match load_config_file(&path) {
        Err(ConfigError::ParseError { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let path = write_temp_config("citydash_test_unknown.toml", "theme = \"monokai\"\n");

    assert!(
        matches!(load_config_file(&path), Err(ConfigError::ParseError { .. })),
        "deny_unknown_fields should reject stray keys"
    );

    fs::remove_file(path).ok();
}

#[test]
fn config_sort_key_accepts_cli_names() {
    for (file, raw, expected) in [
        ("citydash_test_sort_short.toml", "literacy", SortKey::LiteracyRate),
        ("citydash_test_sort_camel.toml", "populationDensity", SortKey::Density),
    ] {
        let path = write_temp_config(file, &format!("sort_key = \"{raw}\"\n"));
        let config = load_config_file(&path)
            .expect("CLI sort names are valid in the config file")
            .expect("file exists");
        assert_eq!(config.sort_key, Some(expected), "{raw}");
        fs::remove_file(path).ok();
    }
}

#[test]
fn load_config_file_rejects_unknown_sort_key() {
    let path = write_temp_config("citydash_test_bad_sort.toml", "sort_key = \"colour\"\n");

    assert!(matches!(
        load_config_file(&path),
        Err(ConfigError::ParseError { .. })
    ));

    fs::remove_file(path).ok();
}

#[test]
fn merge_config_none_returns_defaults() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_partial_file_keeps_other_defaults() {
    let file = ConfigFile {
        dark_mode: Some(true),
        ..ConfigFile::default()
    };
    let resolved = merge_config(Some(file));
    assert!(resolved.dark_mode);
    assert_eq!(resolved.sort_key, SortKey::Population);
    assert_eq!(resolved.sort_direction, SortDirection::Descending);
    assert_eq!(resolved.comparison_count, DEFAULT_COMPARISON_COUNT);
}

#[test]
fn merge_config_log_path_overrides_default() {
    let custom = PathBuf::from("/custom/path/to/app.log");
    let file = ConfigFile {
        log_file_path: Some(custom.clone()),
        ..ConfigFile::default()
    };
    assert_eq!(merge_config(Some(file)).log_file_path, custom);
}

#[test]
fn cli_overrides_take_precedence() {
    let base = ResolvedConfig {
        sort_key: SortKey::Area,
        dark_mode: true,
        ..ResolvedConfig::default()
    };
    let result = apply_cli_overrides(
        base,
        Some(SortKey::Name),
        Some(SortDirection::Ascending),
        None,
    );
    assert_eq!(result.sort_key, SortKey::Name);
    assert_eq!(result.sort_direction, SortDirection::Ascending);
    assert!(result.dark_mode, "unset CLI flag should not override");
}

#[test]
#[serial(env)]
fn env_sort_overrides_config() {
    env::set_var(ENV_SORT, "density");
    let result = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(ENV_SORT);

    assert_eq!(result.map(|c| c.sort_key), Ok(SortKey::Density));
}

#[test]
#[serial(env)]
fn env_sort_rejects_unknown_key() {
    env::set_var(ENV_SORT, "colour");
    let result = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(ENV_SORT);

    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref name, .. }) if name == ENV_SORT
    ));
}

#[test]
#[serial(env)]
fn env_dark_mode_accepts_common_spellings() {
    for (raw, expected) in [("1", true), ("TRUE", true), ("no", false), ("off", false)] {
        env::set_var(ENV_DARK_MODE, raw);
        let result = apply_env_overrides(ResolvedConfig::default());
        env::remove_var(ENV_DARK_MODE);
        assert_eq!(result.map(|c| c.dark_mode), Ok(expected), "value {raw}");
    }
}

#[test]
#[serial(env)]
fn env_dark_mode_rejects_garbage() {
    env::set_var(ENV_DARK_MODE, "maybe");
    let result = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(ENV_DARK_MODE);
    assert!(result.is_err());
}

#[test]
#[serial(env)]
fn env_config_path_is_used_when_no_explicit_path() {
    let path = write_temp_config("citydash_test_env_path.toml", "dark_mode = true\n");
    env::set_var(ENV_CONFIG, &path);
    let result = load_config_with_precedence(None);
    env::remove_var(ENV_CONFIG);

    let config = result.expect("load").expect("file exists");
    assert_eq!(config.dark_mode, Some(true));

    fs::remove_file(path).ok();
}

#[test]
#[serial(env)]
fn explicit_path_beats_env_path() {
    let env_path = write_temp_config("citydash_test_env_loser.toml", "dark_mode = true\n");
    let cli_path = write_temp_config("citydash_test_cli_winner.toml", "dark_mode = false\n");
    env::set_var(ENV_CONFIG, &env_path);
    let result = load_config_with_precedence(Some(cli_path.clone()));
    env::remove_var(ENV_CONFIG);

    let config = result.expect("load").expect("file exists");
    assert_eq!(config.dark_mode, Some(false));

    fs::remove_file(env_path).ok();
    fs::remove_file(cli_path).ok();
}

//! Config loading: TOML parsing, defaults, and credential resolution.

use std::io::Write;

use grapewatch_core::config::{GrapewatchConfig, InferenceConfig};
use grapewatch_core::{GrapewatchError, GrapewatchErrorCode};

#[test]
fn empty_toml_yields_defaults() {
    let config = GrapewatchConfig::from_toml("").unwrap();
    assert_eq!(config.inference.provider, "gemini");
    assert_eq!(config.inference.api_key_env, "GEMINI_API_KEY");
    assert_eq!(config.inference.timeout_secs, 60);
    assert_eq!(config.dataset.cache_ttl_secs, 3600);
    assert!(config.dataset.drop_empty_rows);
    assert_eq!(config.observability.log_filter, "info");
}

#[test]
fn partial_sections_keep_other_defaults() {
    let toml = r#"
        [inference]
        model = "gemini-1.5-pro"

        [dataset]
        path = "data/fungicides.json"
    "#;
    let config = GrapewatchConfig::from_toml(toml).unwrap();
    assert_eq!(config.inference.model, "gemini-1.5-pro");
    assert_eq!(config.inference.provider, "gemini");
    assert_eq!(config.dataset.path.as_deref(), Some("data/fungicides.json"));
    assert_eq!(config.dataset.cache_ttl_secs, 3600);
}

#[test]
fn invalid_toml_is_config_error() {
    let err = GrapewatchConfig::from_toml("[inference\nmodel = ").unwrap_err();
    let err = GrapewatchError::from(err);
    assert_eq!(err.error_code(), "CONFIG_INVALID");
}

#[test]
fn from_file_reads_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[observability]\nlog_filter = \"debug\"\njson = true").unwrap();

    let config = GrapewatchConfig::from_file(file.path()).unwrap();
    assert_eq!(config.observability.log_filter, "debug");
    assert!(config.observability.json);
}

#[test]
fn from_file_missing_is_io_error() {
    let err = GrapewatchConfig::from_file("/nonexistent/grapewatch.toml").unwrap_err();
    assert!(matches!(err, GrapewatchError::ConfigIo { .. }));
    assert_eq!(err.error_code(), "CONFIG_IO");
}

#[test]
fn api_key_is_never_serialized() {
    let config = GrapewatchConfig {
        inference: InferenceConfig {
            api_key: Some("secret-key".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(!json.contains("secret-key"));
}

#[test]
fn explicit_api_key_wins() {
    let config = InferenceConfig {
        api_key: Some("  explicit  ".to_string()),
        api_key_env: "GRAPEWATCH_CONFIG_TEST_UNSET".to_string(),
        ..Default::default()
    };
    assert_eq!(config.resolve_api_key().as_deref(), Some("explicit"));
}

#[test]
fn api_key_falls_back_to_environment() {
    let var = "GRAPEWATCH_CONFIG_TEST_KEY";
    std::env::set_var(var, "from-env");
    let config = InferenceConfig {
        api_key: None,
        api_key_env: var.to_string(),
        ..Default::default()
    };
    assert_eq!(config.resolve_api_key().as_deref(), Some("from-env"));
    std::env::remove_var(var);
}

#[test]
fn no_api_key_anywhere() {
    let config = InferenceConfig {
        api_key: Some(String::new()),
        api_key_env: "GRAPEWATCH_CONFIG_TEST_UNSET".to_string(),
        ..Default::default()
    };
    assert_eq!(config.resolve_api_key(), None);
}

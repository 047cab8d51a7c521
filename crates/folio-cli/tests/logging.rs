//! Tests for logging configuration.

use std::fs;

use folio_cli::logging::{
    LogConfig, LogFormat, REDACTED_VALUE, default_directives, init_logging, redact_value,
};
use tracing::level_filters::LevelFilter;

#[test]
fn default_config_is_warn_with_env_override() {
    let config = LogConfig::default();
    assert_eq!(config.level_filter, LevelFilter::WARN);
    assert!(config.use_env_filter);
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(config.log_file.is_none());
    assert!(!config.log_data);
}

#[test]
fn directives_cover_workspace_crates() {
    let directives = default_directives(LevelFilter::DEBUG);
    assert!(directives.starts_with("warn,"));
    assert!(directives.contains("folio_gallery=debug"));
    assert!(directives.contains("folio_contact=debug"));
}

#[test]
fn values_are_redacted_by_default() {
    assert_eq!(redact_value("jane@example.com"), REDACTED_VALUE);
}

// Installs the global subscriber; keep it the only test in this file that does.
#[test]
fn json_logs_are_appended_to_file() {
    let path = std::env::temp_dir().join(format!("folio-cli-log-{}.jsonl", std::process::id()));
    let _ = fs::remove_file(&path);
    let config = LogConfig {
        level_filter: LevelFilter::INFO,
        use_env_filter: false,
        format: LogFormat::Json,
        with_ansi: false,
        log_file: Some(path.clone()),
        ..LogConfig::default()
    };
    init_logging(&config).expect("init logging");

    tracing::info!(target: "folio_cli", projects = 10, "catalog ready");
    tracing::debug!(target: "folio_cli", "filtered out below info");
    tracing::info!(target: "other_crate", "filtered out for other crates");

    let contents = fs::read_to_string(&path).expect("read log file");
    let _ = fs::remove_file(&path);
    assert!(contents.contains("catalog ready"));
    assert!(contents.contains("\"projects\":10"));
    assert!(!contents.contains("filtered out"));
    assert_eq!(redact_value("jane@example.com"), REDACTED_VALUE);
}

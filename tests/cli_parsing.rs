//! Tests for CLI argument parsing.

use clap::Parser;
use egrid_indexer::Config;

#[test]
fn test_parse_minimal_args() {
    let args = ["egrid_indexer", "http://localhost/file.csv"];
    let config = Config::try_parse_from(args.iter()).expect("Should parse with just a file URL");

    assert_eq!(config.file_url, "http://localhost/file.csv");
    assert_eq!(config.elastic_url, "http://localhost:9200");
    assert_eq!(config.index, "plantyear");
    assert_eq!(config.max_concurrency, 8);
    assert_eq!(config.timeout_seconds, 30);
    assert!(!config.fail_fast);
}

#[test]
fn test_parse_with_overrides() {
    let args = [
        "egrid_indexer",
        "http://localhost/file.csv",
        "--elastic-url",
        "http://es.internal:9200",
        "--index",
        "plantyear_2018",
        "--max-concurrency",
        "16",
        "--timeout-seconds",
        "60",
        "--fail-fast",
    ];
    let config = Config::try_parse_from(args.iter()).expect("Should parse with overrides");

    assert_eq!(config.elastic_url, "http://es.internal:9200");
    assert_eq!(config.index, "plantyear_2018");
    assert_eq!(config.max_concurrency, 16);
    assert_eq!(config.timeout_seconds, 60);
    assert!(config.fail_fast);
}

#[test]
fn test_missing_file_url_is_an_error() {
    let args = ["egrid_indexer"];
    let result = Config::try_parse_from(args.iter());

    assert!(result.is_err(), "Should fail without a file URL");
    let error_msg = result.unwrap_err().to_string();
    assert!(
        error_msg.contains("FILE_URL") || error_msg.contains("required"),
        "Error message should mention the missing argument: {}",
        error_msg
    );
}

#[test]
fn test_log_options() {
    let args = [
        "egrid_indexer",
        "http://localhost/file.csv",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ];
    let config = Config::try_parse_from(args.iter()).expect("Should parse log options");

    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Debug
    );
    match config.log_format {
        egrid_indexer::LogFormat::Json => {}
        other => panic!("Should be Json format, got {:?}", other),
    }
}

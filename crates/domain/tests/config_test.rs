use dnsprobe_domain::{Config, ConfigSource};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(concat!(
        "dns_server: \"1.1.1.1\"\n",
        "record_types:\n",
        "  - A\n",
        "  - MX\n",
        "query_timeout: 500\n",
        "logging:\n",
        "  level: debug\n",
    ));

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.dns_server, "1.1.1.1");
    assert_eq!(config.record_types, vec!["A", "MX"]);
    assert_eq!(config.query_timeout, 500);
    assert_eq!(config.logging.level, "debug");
    // absent logging keys fall back individually
    assert_eq!(config.logging.max_log_files, 3);
}

#[test]
fn test_absent_keys_fall_back_to_defaults() {
    let file = write_config("dns_server: \"9.9.9.9\"\n");

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.dns_server, "9.9.9.9");
    assert_eq!(config.record_types.len(), 7);
    assert_eq!(config.query_timeout, 2000);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_malformed_yaml_is_a_parse_error() {
    let file = write_config("dns_server: [unclosed\n");

    let err = Config::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("parse"));
}

#[test]
fn test_unsupported_record_type_is_rejected_at_load() {
    let file = write_config("record_types: [A, FOO]\n");

    assert!(Config::load(file.path()).is_err());
}

#[test]
fn test_missing_default_path_falls_back_to_defaults() {
    // run from a directory without a config.yaml
    let dir = tempfile::tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let (config, source) = Config::load_or_default(None).unwrap();
    assert_eq!(config.dns_server, "8.8.8.8");
    assert_eq!(config.record_types.len(), 7);
    assert!(matches!(source, ConfigSource::Defaults(_)));
}

#[test]
fn test_explicit_missing_path_is_fatal() {
    let result = Config::load_or_default(Some(std::path::Path::new(
        "/nonexistent/dnsprobe-config.yaml",
    )));
    assert!(result.is_err());
}

#[test]
fn test_explicit_path_is_reported_as_file_source() {
    let file = write_config("dns_server: \"8.8.4.4\"\n");

    let (config, source) = Config::load_or_default(Some(file.path())).unwrap();
    assert_eq!(config.dns_server, "8.8.4.4");
    assert_eq!(source, ConfigSource::File(file.path().to_path_buf()));
}
